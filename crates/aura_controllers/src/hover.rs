//! Cursor-hover highlighting
//!
//! [`HoverTracker`] remembers which interactable was under the cursor last frame and which one
//! is under it now, and decides which of them need to be told to highlight or unhighlight. It
//! never owns the entities it tracks: a tracked [`Entity`] that has been despawned (or has lost
//! its interactable component) simply stops resolving, and is treated as nothing being hovered.
//!
//! The transition rules, evaluated in order once the cursor trace has hit something:
//!
//! | previous | current | notifications |
//! |---|---|---|
//! | none | none | nothing |
//! | none | some | `current.highlight()` |
//! | some | none | `previous.unhighlight()` |
//! | some | some, different | `previous.unhighlight()` then `current.highlight()` |
//! | some | same | nothing |
//!
//! When the trace hits nothing blocking at all, the tracker is left exactly as it was, including
//! any highlight that is still applied.

use std::marker::PhantomData;

use bevy_app::prelude::*;
use bevy_ecs::prelude::*;
use bevy_log::prelude::*;
use bevy_reflect::prelude::*;

use aura_core::{interaction::Interactable, ControlSet};

use crate::cursor::CursorHit;

/// The previous and current hover targets of the player's cursor
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Resource)]
pub struct HoverTracker {
    previous: Option<Entity>,
    current: Option<Entity>,
}

/// A single notification to send to a hover target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverNotice {
    Highlight(Entity),
    Unhighlight(Entity),
}

/// The notifications produced by one [`HoverTracker::update`]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[must_use = "a hover transition does nothing until its notices are delivered"]
pub struct HoverTransition {
    unhighlight: Option<Entity>,
    highlight: Option<Entity>,
}

impl HoverTransition {
    /// The notices in delivery order. An unhighlight always comes before a highlight.
    pub fn notices(self) -> impl Iterator<Item = HoverNotice> {
        self.unhighlight
            .map(HoverNotice::Unhighlight)
            .into_iter()
            .chain(self.highlight.map(HoverNotice::Highlight))
    }

    /// True when nothing needs to be notified this frame
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.unhighlight.is_none() && self.highlight.is_none()
    }
}

impl HoverTracker {
    /// The target hovered before the last processed trace
    #[must_use]
    pub fn previous(&self) -> Option<Entity> {
        self.previous
    }

    /// The target hovered as of the last processed trace
    #[must_use]
    pub fn current(&self) -> Option<Entity> {
        self.current
    }

    /// Advance the tracker by one frame.
    ///
    /// `hit` is the entity the cursor trace blocked on, or `None` if it blocked on nothing. A
    /// `None` hit leaves the tracker untouched and produces no notices.
    ///
    /// `is_interactable` must answer whether an entity is still alive and can be highlighted.
    /// A hit on anything else counts as hovering nothing, and a previous target that fails it
    /// is never notified.
    pub fn update(
        &mut self,
        hit: Option<Entity>,
        is_interactable: impl Fn(Entity) -> bool,
    ) -> HoverTransition {
        let Some(hit) = hit else {
            return HoverTransition::default();
        };

        self.previous = self.current;
        self.current = Some(hit).filter(|e| is_interactable(*e));

        let previous = self.previous.filter(|e| is_interactable(*e));

        match (previous, self.current) {
            (None, None) => HoverTransition::default(),
            (None, Some(current)) => HoverTransition {
                unhighlight: None,
                highlight: Some(current),
            },
            (Some(previous), None) => HoverTransition {
                unhighlight: Some(previous),
                highlight: None,
            },
            (Some(previous), Some(current)) if previous != current => HoverTransition {
                unhighlight: Some(previous),
                highlight: Some(current),
            },
            (Some(_), Some(_)) => HoverTransition::default(),
        }
    }
}

/// Run the [`HoverTracker`] on this frame's [`CursorHit`] and notify the `T`s involved
pub fn update_hover<T: Interactable + Component>(
    cursor_hit: Res<CursorHit>,
    mut tracker: ResMut<HoverTracker>,
    mut targets: Query<&mut T>,
) {
    let transition = tracker.update(cursor_hit.entity(), |e| targets.contains(e));

    if transition.is_empty() {
        return;
    }

    debug!(
        "hover changed from {:?} to {:?}",
        tracker.previous(),
        tracker.current()
    );

    for notice in transition.notices() {
        match notice {
            HoverNotice::Unhighlight(entity) => {
                if let Ok(mut target) = targets.get_mut(entity) {
                    target.unhighlight();
                }
            }
            HoverNotice::Highlight(entity) => {
                if let Ok(mut target) = targets.get_mut(entity) {
                    target.highlight();
                }
            }
        }
    }
}

/// Highlight `T`s under the cursor.
///
/// Needs the cursor trace from [`crate::Plugin`] to have anything to react to. Only one
/// interactable component type can be tracked per app.
pub struct HoverPlugin<T>(PhantomData<fn() -> T>);

impl<T> Default for HoverPlugin<T> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<T: Interactable + Component> bevy_app::Plugin for HoverPlugin<T> {
    fn build(&self, app: &mut App) {
        app.init_resource::<HoverTracker>()
            .init_resource::<CursorHit>()
            .register_type::<HoverTracker>()
            .add_systems(Update, update_hover::<T>.in_set(ControlSet::Highlight));
    }
}
