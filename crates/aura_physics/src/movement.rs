use bevy_app::prelude::*;
use bevy_derive::{Deref, DerefMut};
use bevy_ecs::prelude::*;
use bevy_log::prelude::*;
use bevy_math::prelude::*;
use bevy_reflect::prelude::*;
use bevy_time::Time;
use bevy_transform::prelude::*;

use aura_core::{goals::MovementInput, ControlSet};

/// How fast a pawn moves, in world units per second, when given a full-length [`MovementInput`]
#[derive(Debug, Component, Clone, Copy, Deref, DerefMut, Reflect)]
pub struct WalkSpeed(pub f32);

impl Default for WalkSpeed {
    fn default() -> Self {
        Self(600.)
    }
}

/// The velocity a pawn moved at during the last frame
#[derive(Debug, Component, Clone, Copy, Default, Deref, Reflect)]
pub struct Velocity(pub Vec3);

/// Consume every pawn's [`MovementInput`] and move its transform accordingly.
///
/// The input is clamped to a length of 1 so that combined inputs (diagonals) are never faster
/// than a single one.
fn apply_movement_input(
    mut pawns: Query<(&mut Transform, &mut MovementInput, &WalkSpeed, &mut Velocity)>,
    time: Res<Time>,
) {
    let delta_time = time.delta_seconds();

    for (mut transform, mut input, walk_speed, mut velocity) in &mut pawns {
        let requested = input.consume();

        velocity.0 = requested.clamp_length_max(1.) * walk_speed.0;

        if velocity.0 != Vec3::ZERO {
            trace!("moving pawn at {}", velocity.0);
            transform.translation += velocity.0 * delta_time;
        }
    }
}

/// The components necessary for the movement system to move an entity.
///
/// You must provide a transform yourself, in order to stay compatible with other bundles.
#[derive(Bundle, Default)]
pub struct MovementBundle {
    pub input: MovementInput,
    pub walk_speed: WalkSpeed,
    pub velocity: Velocity,
}

pub(super) struct Plugin;

impl bevy_app::Plugin for Plugin {
    fn build(&self, app: &mut bevy_app::App) {
        app.add_systems(
            Update,
            apply_movement_input.in_set(ControlSet::Movement),
        );
    }
}
