//! Colliders and how they respond to traces
//!
//! A collider's response to a [`TraceChannel`] decides whether a trace on that channel stops at
//! it ([`ChannelResponse::Block`]), passes through while noticing it
//! ([`ChannelResponse::Overlap`]), or doesn't see it at all ([`ChannelResponse::Ignore`]).

use bevy_ecs::prelude::*;
use bevy_math::prelude::*;
use bevy_reflect::prelude::*;

/// The channels a trace can be run on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Reflect)]
pub enum TraceChannel {
    /// What the player can see. Cursor traces run on this channel by default
    #[default]
    Visibility,
    Camera,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
pub enum ChannelResponse {
    Ignore,
    Overlap,
    #[default]
    Block,
}

/// A response for every [`TraceChannel`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub struct ChannelResponses {
    pub visibility: ChannelResponse,
    pub camera: ChannelResponse,
}

impl ChannelResponses {
    pub const BLOCK_ALL: Self = Self::all(ChannelResponse::Block);
    pub const OVERLAP_ALL: Self = Self::all(ChannelResponse::Overlap);
    pub const IGNORE_ALL: Self = Self::all(ChannelResponse::Ignore);

    #[must_use]
    pub const fn all(response: ChannelResponse) -> Self {
        Self {
            visibility: response,
            camera: response,
        }
    }

    #[must_use]
    #[inline]
    pub fn get(&self, channel: TraceChannel) -> ChannelResponse {
        match channel {
            TraceChannel::Visibility => self.visibility,
            TraceChannel::Camera => self.camera,
        }
    }

    #[must_use]
    #[inline]
    pub fn blocks(&self, channel: TraceChannel) -> bool {
        self.get(channel) == ChannelResponse::Block
    }
}

impl Default for ChannelResponses {
    fn default() -> Self {
        Self::BLOCK_ALL
    }
}

/// An axis aligned box centred on its entity's [`bevy_transform::prelude::GlobalTransform`].
///
/// Transform rotation and scale are not taken into account.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
pub struct Collider {
    pub half_extents: Vec3,
    pub responses: ChannelResponses,
}

impl Collider {
    #[must_use]
    pub fn new(half_extents: Vec3, responses: ChannelResponses) -> Self {
        Self {
            half_extents,
            responses,
        }
    }

    /// A box that blocks every channel
    #[must_use]
    pub fn block_all(half_extents: Vec3) -> Self {
        Self::new(half_extents, ChannelResponses::BLOCK_ALL)
    }

    /// A box that overlaps every channel, for sensors and triggers
    #[must_use]
    pub fn overlap_all(half_extents: Vec3) -> Self {
        Self::new(half_extents, ChannelResponses::OVERLAP_ALL)
    }

    /// A box invisible to every trace
    #[must_use]
    pub fn no_trace(half_extents: Vec3) -> Self {
        Self::new(half_extents, ChannelResponses::IGNORE_ALL)
    }

    /// min and max corners when centred on `center`
    #[must_use]
    #[inline]
    pub fn bounds(&self, center: Vec3) -> (Vec3, Vec3) {
        (center - self.half_extents, center + self.half_extents)
    }
}
