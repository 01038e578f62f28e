//! Controllers for the player
//!
//! The final output of controllers will be "requests" to change the world, like movement input
//! for a pawn or highlight notifications for whatever is under the cursor.

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

use bevy_app::{App, Startup, Update};
use bevy_ecs::prelude::*;
use bevy_reflect::GetTypeRegistration;
use thiserror::Error;

use aura_core::ControlSet;

pub mod cursor;
pub mod hover;
pub mod input;
pub mod player;

pub use hover::{HoverPlugin, HoverTracker};


#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ControllerError {
    #[error("No input mapping context configured for the player; movement is unbound")]
    MissingMappingContext,
    #[error("Input mapping context `{0}` has already been added")]
    DuplicateContext(String),
}

fn register_types(type_registry: Res<AppTypeRegistry>) {
    let mut type_registry_w = type_registry.write();

    type_registry_w.add_registration(player::ControlRotation::get_type_registration());
    type_registry_w.add_registration(input::InputAction::get_type_registration());
}

/// Player input, movement, and the cursor trace.
///
/// Add a [`HoverPlugin`] as well to highlight what the cursor is over.
pub struct Plugin;
impl bevy_app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<input::InputMappingStack>()
            .init_resource::<input::PlayerInputConfig>()
            .init_resource::<cursor::CursorSettings>()
            .init_resource::<cursor::PointerRay>()
            .init_resource::<cursor::CursorHit>()
            .add_event::<input::ActionEvent>()
            .add_systems(
                Startup,
                (
                    register_types,
                    input::add_player_context,
                    cursor::configure_cursor,
                ),
            )
            .add_systems(
                Update,
                (input::evaluate_actions, player::move_player)
                    .chain()
                    .in_set(ControlSet::Input),
            )
            .add_systems(
                Update,
                (cursor::update_pointer_ray, cursor::trace_cursor)
                    .chain()
                    .in_set(ControlSet::Trace),
            );
    }
}
