//! System sets used externally between crates

use bevy_ecs::prelude::SystemSet;

#[derive(SystemSet, Hash, Debug, Clone, Eq, PartialEq)]
/// The per-frame order of the player controller. [`crate::CorePlugin`] chains these in
/// [`bevy_app::Update`] in declaration order.
///
/// Anything that requests movement for a pawn should run in [`ControlSet::Input`], or it will
/// not be applied until the next frame.
///
/// The cursor trace reads [`bevy_transform::prelude::GlobalTransform`], which is only propagated
/// in `PostUpdate`. It therefore sees colliders where they were at the end of the previous frame,
/// not where [`ControlSet::Movement`] just put them. Hover highlighting only reads the result of
/// that trace, so systems reacting to highlight changes should run in [`ControlSet::Completed`]
pub enum ControlSet {
    Input,
    Movement,
    Trace,
    Highlight,
    Completed,
}
