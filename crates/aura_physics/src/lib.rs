//! A small kinematic physics layer for the controller
//!
//! It only does two things: move pawns from their [`MovementInput`], and cast rays against
//! [`Collider`]s for cursor traces. See [`PhysicsPlugin`].

#![warn(clippy::unwrap_used)]
#![warn(clippy::perf, clippy::disallowed_types)] // performance warns
#![warn(clippy::pedantic)]
// most bevy systems violate these. Nothing I can do about it at the moment.
#![allow(
    clippy::type_complexity,
    clippy::too_many_arguments,
    clippy::needless_pass_by_value // TODO: separate out system functions from non-system 
)]
#![allow(clippy::cast_possible_truncation)]

use bevy_app::prelude::*;
use bevy_ecs::prelude::*;
use bevy_reflect::GetTypeRegistration;

pub use aura_core::goals::MovementInput;
pub use aura_core::ControlSet;

pub use collider::{ChannelResponse, ChannelResponses, Collider, TraceChannel};
pub use movement::{MovementBundle, Velocity, WalkSpeed};
pub use pointer_cast::{pointer_cast, Hit};

pub mod collider;
pub mod movement;
pub mod pointer_cast;


fn register_types(type_registry: Res<AppTypeRegistry>) {
    let mut type_registry_w = type_registry.write();

    type_registry_w.add_registration(Collider::get_type_registration());
    type_registry_w.add_registration(ChannelResponses::get_type_registration());
    type_registry_w.add_registration(ChannelResponse::get_type_registration());
    type_registry_w.add_registration(TraceChannel::get_type_registration());
    type_registry_w.add_registration(WalkSpeed::get_type_registration());
    type_registry_w.add_registration(Velocity::get_type_registration());
}

/// A plugin to setup pawn movement
///
/// Systems that request movement must run in [`ControlSet::Input`] to be applied in the same
/// frame. Pointer casting needs no plugin, as it is a plain function over colliders.
pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(movement::Plugin)
            .add_systems(Startup, register_types);
    }
}
