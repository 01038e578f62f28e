use bevy_derive::{Deref, DerefMut};
use bevy_ecs::prelude::*;
use bevy_log::prelude::*;
use bevy_math::prelude::*;
use bevy_math::EulerRot;
use bevy_reflect::prelude::*;

use aura_core::goals::MovementInput;

use crate::input::{ActionEvent, InputAction};

/// A marker for an entity controlled as a player
#[derive(Component, Default)]
pub struct Controller();

/// Where the player's view is pointing.
///
/// Only the yaw (rotation around the world z axis) affects movement, so looking up or down
/// never slows the pawn down.
#[derive(Debug, Component, Clone, Copy, Default, Deref, DerefMut, Reflect)]
pub struct ControlRotation(pub Quat);

impl ControlRotation {
    #[must_use]
    pub fn from_yaw(yaw: f32) -> Self {
        Self(Quat::from_rotation_z(yaw))
    }

    #[must_use]
    pub fn yaw(&self) -> f32 {
        let (yaw, _, _) = self.0.to_euler(EulerRot::ZYX);
        yaw
    }

    /// The world-space (forward, right) directions of the view, flattened to the ground
    #[must_use]
    pub fn movement_basis(&self) -> (Vec3, Vec3) {
        let yaw = Quat::from_rotation_z(self.yaw());

        (yaw * Vec3::Y, yaw * Vec3::X)
    }
}

#[derive(Bundle, Default)]
pub struct PlayerControllerBundle {
    pub controller: Controller,
    pub control_rotation: ControlRotation,
    pub movement_input: MovementInput,
}

/// Turn move actions into movement input on the player's pawn, relative to where it looks.
pub(super) fn move_player(
    mut actions: EventReader<ActionEvent>,
    mut player: Query<(&ControlRotation, &mut MovementInput), With<Controller>>,
) {
    let Ok((rotation, mut movement_input)) = player.get_single_mut() else {
        if !actions.is_empty() {
            debug!("No single player pawn, dropping its actions");
        }
        actions.clear();
        return;
    };

    let (forward, right) = rotation.movement_basis();

    for event in actions.iter().filter(|e| e.action == InputAction::Move) {
        movement_input.add(forward, event.value.y);
        movement_input.add(right, event.value.x);
    }
}
