//! # Lambert solver parameters
//!
//! This module defines [`LambertParams`], the configuration threaded through
//! [`solve_lambert_with`](crate::lambert::solve_lambert_with), and its validating builder.
//!
//! ## Purpose
//!
//! The gravitational parameter used to be a process-wide constant. Here it is an explicit
//! field, so the same solver serves any central body. The remaining fields tune the
//! semi-major-axis root finder:
//!
//! - `mu` – gravitational parameter of the central body (km³/s²), Earth by default,
//! - `tolerance` – absolute bound on the time-of-flight residual (s),
//! - `max_iterations` – cap on residual evaluations,
//! - `max_step_ratio` – trust radius of a step, relative to the current semi-major axis,
//! - `method` – which [`RootFinder`](crate::root_finder::RootFinder) to run.
//!
//! ## Example
//!
//! ```rust
//! use lambert::params::{LambertParams, RootMethod};
//!
//! // Mars-centred transfer with a tighter tolerance
//! let params = LambertParams::builder()
//!     .mu(42_828.37)
//!     .tolerance(1e-9)
//!     .method(RootMethod::Secant)
//!     .build()
//!     .unwrap();
//!
//! println!("{params:#}");
//! ```
//!
//! ## See also
//!
//! * [`crate::lambert::solve_lambert_with`] – consumes these parameters.
//! * [`crate::root_finder`] – the root finders configured here.

use std::cmp::Ordering::Greater;
use std::fmt;

use crate::{
    constants::{DEFAULT_MAX_ITERATIONS, DEFAULT_MAX_STEP_RATIO, DEFAULT_TOLERANCE, MU_EARTH},
    lambert_errors::LambertError,
};

/// Root-finding method used to solve the time-of-flight equation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RootMethod {
    /// Safeguarded Newton–Raphson with the analytic derivative
    #[default]
    Newton,
    /// Derivative-free secant iteration
    Secant,
}

impl fmt::Display for RootMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RootMethod::Newton => write!(f, "newton"),
            RootMethod::Secant => write!(f, "secant"),
        }
    }
}

/// Configuration of a Lambert solve.
///
/// Fields
/// -----------------
/// * `mu` – gravitational parameter of the central body (km³/s²).
/// * `tolerance` – convergence threshold on `|t(a) - tof|` (s).
/// * `max_iterations` – maximum number of residual evaluations.
/// * `max_step_ratio` – largest step allowed, as a fraction of the current `a`.
/// * `method` – root-finding method.
///
/// Validation rules (enforced by [`LambertParamsBuilder::build`])
/// -----------------
/// * `mu > 0`, `tolerance > 0`, `max_step_ratio > 0`, all finite.
/// * `max_iterations ≥ 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LambertParams {
    pub mu: f64,
    pub tolerance: f64,
    pub max_iterations: usize,
    pub max_step_ratio: f64,
    pub method: RootMethod,
}

impl LambertParams {
    /// Construct a new [`LambertParams`] with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fluent builder starting from the default values.
    pub fn builder() -> LambertParamsBuilder {
        LambertParamsBuilder::new()
    }

    /// Default parameters around another central body.
    pub fn with_mu(mu: f64) -> Result<Self, LambertError> {
        Self::builder().mu(mu).build()
    }
}

impl Default for LambertParams {
    fn default() -> Self {
        LambertParams {
            mu: MU_EARTH,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            max_step_ratio: DEFAULT_MAX_STEP_RATIO,
            method: RootMethod::default(),
        }
    }
}

/// Builder for [`LambertParams`], with validation.
#[derive(Debug, Clone)]
pub struct LambertParamsBuilder {
    params: LambertParams,
}

impl Default for LambertParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LambertParamsBuilder {
    pub fn new() -> Self {
        Self {
            params: LambertParams::default(),
        }
    }

    pub fn mu(mut self, v: f64) -> Self {
        self.params.mu = v;
        self
    }

    pub fn tolerance(mut self, v: f64) -> Self {
        self.params.tolerance = v;
        self
    }

    pub fn max_iterations(mut self, v: usize) -> Self {
        self.params.max_iterations = v;
        self
    }

    pub fn max_step_ratio(mut self, v: f64) -> Self {
        self.params.max_step_ratio = v;
        self
    }

    pub fn method(mut self, v: RootMethod) -> Self {
        self.params.method = v;
        self
    }

    /// Return true iff x is finite and > 0.0 (NaN is rejected).
    #[inline]
    fn finite_gt0(x: f64) -> bool {
        x.is_finite() && x.partial_cmp(&0.0) == Some(Greater)
    }

    /// Finalize the builder.
    ///
    /// Return
    /// ----------
    /// * `Ok(LambertParams)` when every rule listed on [`LambertParams`] holds,
    ///   `Err(LambertError::InvalidSolverParameter)` otherwise.
    pub fn build(self) -> Result<LambertParams, LambertError> {
        let p = &self.params;

        if !Self::finite_gt0(p.mu) {
            return Err(LambertError::InvalidSolverParameter(
                "mu must be finite and > 0".into(),
            ));
        }
        if !Self::finite_gt0(p.tolerance) {
            return Err(LambertError::InvalidSolverParameter(
                "tolerance must be finite and > 0".into(),
            ));
        }
        if !Self::finite_gt0(p.max_step_ratio) {
            return Err(LambertError::InvalidSolverParameter(
                "max_step_ratio must be finite and > 0".into(),
            ));
        }
        if p.max_iterations == 0 {
            return Err(LambertError::InvalidSolverParameter(
                "max_iterations must be >= 1".into(),
            ));
        }

        Ok(self.params)
    }
}

impl fmt::Display for LambertParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            const PARAM_COL: usize = 40;
            writeln!(f, "Lambert Solver Parameters")?;
            writeln!(f, "-------------------------")?;

            macro_rules! line {
                ($fmt:expr, $val:expr, $comment:expr) => {{
                    let s = format!($fmt, $val);
                    let pad = if s.len() < PARAM_COL {
                        " ".repeat(PARAM_COL - s.len())
                    } else {
                        " ".to_string()
                    };
                    writeln!(f, "  {}{}# {}", s, pad, $comment)
                }};
            }

            line!(
                "mu             = {:.4} km³/s²",
                self.mu,
                "Gravitational parameter"
            )?;
            line!(
                "tolerance      = {:.1e} s",
                self.tolerance,
                "Time-of-flight residual bound"
            )?;
            line!(
                "max_iterations = {}",
                self.max_iterations,
                "Residual evaluations cap"
            )?;
            line!(
                "max_step_ratio = {:.3}",
                self.max_step_ratio,
                "Trust radius relative to a"
            )?;
            line!("method         = {}", self.method, "Root finder")?;

            Ok(())
        } else {
            write!(
                f,
                "LambertParams(mu={:.4}, tolerance={:.1e}, max_iterations={}, max_step_ratio={:.2}, method={})",
                self.mu, self.tolerance, self.max_iterations, self.max_step_ratio, self.method
            )
        }
    }
}

#[cfg(test)]
mod params_test {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = LambertParams::default();
        assert_eq!(params.mu, 398600.4418);
        assert_eq!(params.tolerance, 1e-7);
        assert_eq!(params.max_iterations, 100);
        assert_eq!(params.method, RootMethod::Newton);
        assert_eq!(LambertParams::builder().build().unwrap(), params);
    }

    #[test]
    fn test_builder_overrides() {
        let params = LambertParams::builder()
            .mu(42_828.37)
            .tolerance(1e-9)
            .max_iterations(20)
            .max_step_ratio(0.5)
            .method(RootMethod::Secant)
            .build()
            .unwrap();

        assert_eq!(params.mu, 42_828.37);
        assert_eq!(params.tolerance, 1e-9);
        assert_eq!(params.max_iterations, 20);
        assert_eq!(params.max_step_ratio, 0.5);
        assert_eq!(params.method, RootMethod::Secant);
    }

    #[test]
    fn test_builder_rejects_invalid_values() {
        let cases = [
            (
                LambertParams::builder().mu(0.0),
                "mu must be finite and > 0",
            ),
            (
                LambertParams::builder().mu(f64::NAN),
                "mu must be finite and > 0",
            ),
            (
                LambertParams::builder().tolerance(-1e-7),
                "tolerance must be finite and > 0",
            ),
            (
                LambertParams::builder().max_step_ratio(f64::INFINITY),
                "max_step_ratio must be finite and > 0",
            ),
            (
                LambertParams::builder().max_iterations(0),
                "max_iterations must be >= 1",
            ),
        ];

        for (builder, message) in cases {
            assert_eq!(
                builder.build().unwrap_err(),
                LambertError::InvalidSolverParameter(message.into())
            );
        }
    }

    #[test]
    fn test_with_mu() {
        assert_eq!(LambertParams::with_mu(1.0).unwrap().mu, 1.0);
        assert!(LambertParams::with_mu(-1.0).is_err());
    }

    #[test]
    fn test_display() {
        let params = LambertParams::default();
        let short = format!("{params}");
        assert!(short.starts_with("LambertParams(mu=398600.4418"));
        assert!(short.contains("method=newton"));

        let table = format!("{params:#}");
        assert!(table.contains("Lambert Solver Parameters"));
        assert!(table.contains("max_iterations = 100"));
    }
}
