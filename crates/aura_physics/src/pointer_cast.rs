use bevy_math::prelude::*;
use bevy_math::Ray;

use crate::collider::{Collider, TraceChannel};

/// How far cursor traces reach when nothing else is configured
pub const DEFAULT_TRACE_DISTANCE: f32 = 100_000.;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit<Data> {
    /// The data passed in from the original iterator
    pub data: Data,
    /// where the ray entered the collider
    pub point: Vec3,
    pub distance: f32,
}

/// Distance along `ray` at which it enters the box `min`..`max`, or `None` if it never does.
///
/// A ray starting inside the box enters it at 0.
fn entry_distance(ray: Ray, min: Vec3, max: Vec3) -> Option<f32> {
    // zero direction components become infinities here, which the slab test handles
    let inverse = ray.direction.recip();

    let to_min = (min - ray.origin) * inverse;
    let to_max = (max - ray.origin) * inverse;

    let near = to_min.min(to_max).max_element();
    let far = to_min.max(to_max).min_element();

    if far < 0. || near > far {
        None
    } else {
        Some(near.max(0.))
    }
}

/// Cast `ray` into `pool` and return the first collider that blocks `channel`.
///
/// Takes an iterator over `(Data, center, Collider)`. Colliders that only overlap or ignore the
/// channel are passed through. Nothing further than `max_distance` is hit.
#[inline]
#[must_use = "Pointer casting doesn't change state. You should not use it if you don't need the result."]
pub fn pointer_cast<Data>(
    ray: Ray,
    channel: TraceChannel,
    max_distance: f32,
    pool: impl Iterator<Item = (Data, Vec3, Collider)>,
) -> Option<Hit<Data>> {
    pool.filter(|(_, _, collider)| collider.responses.blocks(channel))
        .filter_map(|(data, center, collider)| {
            let (min, max) = collider.bounds(center);
            let distance = entry_distance(ray, min, max)?;

            (distance <= max_distance).then(|| Hit {
                data,
                point: ray.get_point(distance),
                distance,
            })
        })
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
}
