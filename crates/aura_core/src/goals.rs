//! Goals for communicating between controllers and other engines
//!
//! For example, [`MovementInput`] communicates to the movement system where a controller would
//! like its pawn to go this frame

use bevy_derive::{Deref, DerefMut};
use bevy_ecs::prelude::Component;
use bevy_math::Vec3;
use bevy_reflect::Reflect;

/// Pending movement requested for a pawn this frame, in world space.
///
/// Controllers accumulate into it with [`MovementInput::add`], and the movement system consumes
/// it once per frame, resetting it to zero. Its length is clamped to 1 when consumed, so a
/// diagonal request is no faster than a straight one.
#[derive(Debug, Component, Clone, Copy, Default, Deref, DerefMut, Reflect)]
pub struct MovementInput(pub Vec3);

impl MovementInput {
    /// Add `direction` scaled by `scale` to the pending input
    #[inline]
    pub fn add(&mut self, direction: Vec3, scale: f32) {
        self.0 += direction * scale;
    }

    /// Take the pending input, leaving zero behind
    #[inline]
    #[must_use]
    pub fn consume(&mut self) -> Vec3 {
        std::mem::take(&mut self.0)
    }
}
