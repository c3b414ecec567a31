//! Swept projectile collision
//!
//! A projectile's motion over one frame is a line segment; it hits an
//! asteroid when the closest point on that segment falls inside the
//! asteroid's circle.

use super::vector::Vector2;

#[inline]
pub fn clamp01(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

/// Closest point to `point` on the segment `start..end`.
///
/// A zero-length segment collapses to `start`.
pub fn closest_point_on_segment(point: Vector2, start: Vector2, end: Vector2) -> Vector2 {
    let delta = end - start;
    let len_sq = delta.squared_length();
    if len_sq <= 0.0 {
        return start;
    }
    let t = clamp01(delta.dot(point - start) / len_sq);
    start + delta * t
}

/// True when the segment `start..end` touches the circle at `center`
pub fn intersects(center: Vector2, radius: f32, start: Vector2, end: Vector2) -> bool {
    let closest = closest_point_on_segment(center, start, end);
    center.distance(closest) <= radius
}
