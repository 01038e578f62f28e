//! The mouse cursor: how it looks, and what is under it
//!
//! Every frame the cursor's window position is turned into a world-space [`PointerRay`] through
//! the [`PointerCamera`], then traced against colliders to fill in [`CursorHit`].

use bevy_derive::Deref;
use bevy_ecs::prelude::*;
use bevy_log::prelude::*;
use bevy_math::Ray;
use bevy_render::camera::Camera;
use bevy_transform::prelude::GlobalTransform;
use bevy_window::{CursorGrabMode, CursorIcon, PrimaryWindow, Window};

use aura_physics::{
    collider::Collider, pointer_cast, pointer_cast::DEFAULT_TRACE_DISTANCE, Hit, TraceChannel,
};

/// How the cursor is presented, and how it is traced into the world.
///
/// Insert your own before adding [`crate::Plugin`] to override the defaults.
#[derive(Resource, Debug, Clone)]
pub struct CursorSettings {
    pub visible: bool,
    pub icon: CursorIcon,
    /// confine the cursor to the window
    pub lock_to_viewport: bool,
    pub trace_channel: TraceChannel,
    pub trace_distance: f32,
}

impl Default for CursorSettings {
    fn default() -> Self {
        Self {
            visible: true,
            icon: CursorIcon::Crosshair,
            lock_to_viewport: false,
            trace_channel: TraceChannel::Visibility,
            trace_distance: DEFAULT_TRACE_DISTANCE,
        }
    }
}

/// Marks the camera the cursor looks through
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct PointerCamera;

/// The ray from the cursor into the world this frame, if the cursor is over the window
#[derive(Resource, Debug, Clone, Copy, Default, Deref)]
pub struct PointerRay(pub Option<Ray>);

/// The first thing under the cursor that blocks the trace channel this frame
#[derive(Resource, Debug, Clone, Copy, Default, Deref)]
pub struct CursorHit(pub Option<Hit<Entity>>);

impl CursorHit {
    /// The entity that was hit, if anything was
    #[must_use]
    pub fn entity(&self) -> Option<Entity> {
        self.0.map(|hit| hit.data)
    }
}

pub(super) fn configure_cursor(
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
    settings: Res<CursorSettings>,
) {
    let Ok(mut window) = windows.get_single_mut() else {
        warn!("No primary window, leaving the cursor as is");
        return;
    };

    window.cursor.visible = settings.visible;
    window.cursor.icon = settings.icon;
    window.cursor.grab_mode = if settings.lock_to_viewport {
        CursorGrabMode::Confined
    } else {
        CursorGrabMode::None
    };
}

pub(super) fn update_pointer_ray(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<PointerCamera>>,
    mut pointer: ResMut<PointerRay>,
) {
    let ray = windows
        .get_single()
        .ok()
        .and_then(Window::cursor_position)
        .and_then(|cursor| {
            let Ok((camera, camera_transform)) = cameras.get_single() else {
                trace!("no single pointer camera to cast the cursor through");
                return None;
            };

            camera.viewport_to_world(camera_transform, cursor)
        });

    pointer.0 = ray;
}

pub(super) fn trace_cursor(
    pointer: Res<PointerRay>,
    settings: Res<CursorSettings>,
    colliders: Query<(Entity, &GlobalTransform, &Collider)>,
    mut cursor_hit: ResMut<CursorHit>,
) {
    cursor_hit.0 = pointer.0.and_then(|ray| {
        pointer_cast(
            ray,
            settings.trace_channel,
            settings.trace_distance,
            colliders
                .iter()
                .map(|(entity, transform, collider)| (entity, transform.translation(), *collider)),
        )
    });

    if let Some(hit) = cursor_hit.0 {
        trace!("cursor over {:?} at {}", hit.data, hit.point);
    }
}
