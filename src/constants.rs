//! # Constants and type definitions for the Lambert solver
//!
//! This module centralizes the **physical constants**, the **default numerical settings** of the
//! semi-major-axis solver, and the **type aliases** used across the crate.
//!
//! ## Overview
//!
//! - Gravitational parameter of the Earth (default central body)
//! - Default tolerance and iteration cap of the time-of-flight root finder
//! - Unit aliases (km, km/s, seconds) that document the expected units in signatures

use nalgebra::Vector3;

// -------------------------------------------------------------------------------------------------
// Physical constants
// -------------------------------------------------------------------------------------------------

/// Gravitational parameter of the Earth, in km³/s²
pub const MU_EARTH: f64 = 398_600.441_8;

// -------------------------------------------------------------------------------------------------
// Solver defaults
// -------------------------------------------------------------------------------------------------

/// Absolute tolerance on the time-of-flight residual, in seconds
pub const DEFAULT_TOLERANCE: f64 = 1e-7;

/// Maximum number of residual evaluations before giving up
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Largest allowed step of the root finder, as a fraction of the current semi-major axis
pub const DEFAULT_MAX_STEP_RATIO: f64 = 1.0;

/// Relative offset of the second starting point of the secant method
pub const SECANT_PERTURBATION: f64 = 1e-3;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Distance in kilometers
pub type Kilometer = f64;

/// Speed in kilometers per second
pub type KilometerPerSecond = f64;

/// Duration in seconds
pub type Second = f64;

/// Cartesian 3D vector (km for positions, km/s for velocities)
pub type Vector3D = Vector3<f64>;
