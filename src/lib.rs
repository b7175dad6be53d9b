//! # Restricted elliptical Lambert solver
//!
//! Given two position vectors on a Keplerian orbit and the time of flight between them, this
//! crate recovers the semi-major axis of the transfer from a restricted time-of-flight relation
//! and returns the velocity vectors at both ends.
//!
//! ## Modules
//!
//! - [`vector`] – 3D vector helpers over [`nalgebra`]
//! - [`time_of_flight`] – time-of-flight residual and transfer geometry
//! - [`root_finder`] – abstract root finder with Newton and secant implementations
//! - [`lambert`] – validation, solve and vis-viva velocity recovery
//! - [`params`] – gravitational parameter and solver settings
//! - [`report`] / [`preview`] – output helpers for drivers
//!
//! ## Example
//!
//! ```rust
//! use lambert::constants::Vector3D;
//! use lambert::lambert::LambertProblem;
//! use lambert::params::LambertParams;
//! use lambert::lambert::solve_lambert_with;
//!
//! let problem = LambertProblem::new(
//!     Vector3D::new(5000.0, 10000.0, 2100.0),
//!     Vector3D::new(-14600.0, 2500.0, 7000.0),
//!     3600.0,
//! )
//! .unwrap();
//!
//! let solution = solve_lambert_with(&problem, &LambertParams::default()).unwrap();
//! println!("a = {:.3} km after {} iterations", solution.semi_major_axis, solution.iterations);
//! ```

pub mod constants;
pub mod lambert;
pub mod lambert_errors;
pub mod params;
pub mod preview;
pub mod report;
pub mod root_finder;
pub mod time_of_flight;
pub mod vector;

pub use lambert::{solve_lambert, LambertProblem, LambertSolution};
pub use lambert_errors::LambertError;
