//! # Transfer preview path
//!
//! Sample points used to draw an animated preview of a transfer from its end states. The path
//! is a kinematic blend with constant acceleration between the two velocities:
//!
//! ```text
//! r(t) = r1 + v1·t + ½·((v2 - v1) / tof)·t²,   t = k·tof/frames, k = 0..frames-1
//! ```
//!
//! This is a drawing aid only: it ignores gravity and does not reach `r2` in general. Use a
//! Kepler propagator for anything quantitative.

use crate::{
    constants::{Second, Vector3D},
    vector::{add, scale, subtract},
};

/// Position of the blended path at time `t`.
pub fn preview_position(
    r1: &Vector3D,
    v1: &Vector3D,
    v2: &Vector3D,
    tof: Second,
    t: Second,
) -> Vector3D {
    let acceleration = scale(&subtract(v2, v1), 1.0 / tof);
    add(
        &add(r1, &scale(v1, t)),
        &scale(&acceleration, 0.5 * t * t),
    )
}

/// `frames` evenly spaced samples of the path, starting at `t = 0` with step `tof / frames`.
///
/// Returns an empty vector when `frames == 0` or `tof` is not strictly positive.
pub fn preview_path(
    r1: &Vector3D,
    v1: &Vector3D,
    v2: &Vector3D,
    tof: Second,
    frames: usize,
) -> Vec<Vector3D> {
    if frames == 0 || tof.is_nan() || tof <= 0.0 {
        return Vec::new();
    }
    let dt = tof / frames as f64;
    (0..frames)
        .map(|k| preview_position(r1, v1, v2, tof, k as f64 * dt))
        .collect()
}
