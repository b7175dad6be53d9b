//! # Vector algebra
//!
//! Small set of pure functions over [`Vector3D`](crate::constants::Vector3D) used by the residual
//! and the orchestrator. They are thin wrappers around [`nalgebra`] so that call sites read like
//! the equations of the Lambert problem (`subtract(r2, r1)`, `magnitude(chord)`, ...).
//!
//! All functions are total over finite components, have no side effects and can be called
//! concurrently from independent solves.

use crate::constants::Vector3D;

/// Component-wise sum `a + b`.
#[inline]
pub fn add(a: &Vector3D, b: &Vector3D) -> Vector3D {
    a + b
}

/// Component-wise difference `a - b`.
#[inline]
pub fn subtract(a: &Vector3D, b: &Vector3D) -> Vector3D {
    a - b
}

/// Scalar product `a · b`.
#[inline]
pub fn dot(a: &Vector3D, b: &Vector3D) -> f64 {
    a.dot(b)
}

/// Euclidean norm. Exactly `0.0` for the zero vector.
#[inline]
pub fn magnitude(v: &Vector3D) -> f64 {
    v.norm()
}

/// Multiply every component by `k`.
#[inline]
pub fn scale(v: &Vector3D, k: f64) -> Vector3D {
    v * k
}

/// True when all three components are exactly zero.
#[inline]
pub fn is_zero(v: &Vector3D) -> bool {
    v.x == 0.0 && v.y == 0.0 && v.z == 0.0
}

/// Unit vector along `v`.
///
/// Return
/// ----------
/// * `None` for the zero vector, `Some(v / |v|)` otherwise.
pub fn unit_vector(v: &Vector3D) -> Option<Vector3D> {
    let norm = magnitude(v);
    if norm == 0.0 {
        None
    } else {
        Some(scale(v, 1.0 / norm))
    }
}
