//! Directed angles between rays in the plane.
//!
//! All angles are in degrees. Directions are measured counter-clockwise from
//! the positive x axis, as returned by `atan2`.

use super::{Point2, Vector2, TOLERANCE};

/// One full turn, in degrees.
pub const FULL_TURN_DEG: f64 = 360.0;

/// Returns the direction of the ray from `origin` towards `target`.
///
/// Returns `None` when the two points coincide and the ray has no direction.
#[must_use]
pub fn ray_direction_deg(origin: &Point2, target: &Point2) -> Option<f64> {
    let d: Vector2 = target - origin;
    if d.norm() < TOLERANCE {
        return None;
    }
    Some(d.y.atan2(d.x).to_degrees())
}

/// Wraps an angle into `[0, 360)`.
#[must_use]
pub fn normalize_deg(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(FULL_TURN_DEG);
    // rem_euclid rounds up to exactly 360 for tiny negative inputs.
    if wrapped >= FULL_TURN_DEG {
        0.0
    } else {
        wrapped
    }
}

/// Angle swept when turning counter-clockwise from direction `from` to
/// direction `to`, in `[0, 360)`.
#[must_use]
pub fn ccw_sweep_deg(from: f64, to: f64) -> f64 {
    normalize_deg(to - from)
}
