//! # One-dimensional root finding
//!
//! This module provides the **abstract root finder capability** used to recover the transfer
//! semi-major axis, plus two self-contained implementations:
//!
//! - [`Newton`] – safeguarded Newton–Raphson using the analytic derivative of the residual
//!   (default method),
//! - [`Secant`] – derivative-free secant iteration sharing the same safeguards.
//!
//! ## State machine
//!
//! Every call owns one private `SolverState`, created on entry and dropped on every exit path:
//!
//! ```text
//! Init ──▶ Iterating ──▶ Converged
//!                   ├──▶ DomainViolation          (residual undefined at the iterate)
//!                   ├──▶ IterationLimitExceeded   (cap reached above tolerance)
//!                   └──▶ Stalled                  (zero or non-finite step)
//! ```
//!
//! Only `Converged` yields a [`RootSolution`]. `DomainViolation` forwards the
//! [`LambertError::Domain`] raised by the residual; `IterationLimitExceeded` and `Stalled` end in
//! a [`LambertError::Convergence`] carrying that terminal status.
//!
//! ## Safeguards
//!
//! Both methods share the same step control, in the spirit of a trust region:
//!
//! 1. a step is clipped to `max_step_ratio · |x|`,
//! 2. a step landing below the domain floor is replaced by halving the distance between the
//!    current iterate and the floor.
//!
//! With these rules an iterate never leaves the residual domain on its own; a
//! [`LambertError::Domain`] can still surface if the residual itself becomes undefined.

use tracing::{debug, trace};

use crate::{constants::SECANT_PERTURBATION, lambert_errors::LambertError, params::LambertParams};

/// A scalar function whose root is searched on `[lower_bound, ∞)`.
pub trait ScalarResidual {
    /// Smallest abscissa where the function is defined.
    fn lower_bound(&self) -> f64;

    /// Function value at `x`.
    fn evaluate(&self, x: f64) -> Result<f64, LambertError>;

    /// First derivative at `x`.
    fn derivative(&self, x: f64) -> Result<f64, LambertError>;
}

/// Lifecycle of one root-finding call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverStatus {
    Init,
    Iterating,
    Converged,
    DomainViolation,
    IterationLimitExceeded,
    Stalled,
}

/// Transient working state of a root-finding call.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SolverState {
    /// Current candidate
    semi_major_axis: f64,
    /// Residual at the current candidate (`NaN` before the first evaluation)
    residual: f64,
    /// Number of residual evaluations so far
    iterations: usize,
    status: SolverStatus,
}

impl SolverState {
    fn new(initial_guess: f64) -> Self {
        SolverState {
            semi_major_axis: initial_guess,
            residual: f64::NAN,
            iterations: 0,
            status: SolverStatus::Init,
        }
    }

    /// Evaluate the residual at `x` and record it as the current iterate.
    fn evaluate<R: ScalarResidual + ?Sized>(
        &mut self,
        residual: &R,
        x: f64,
    ) -> Result<f64, LambertError> {
        self.semi_major_axis = x;
        self.iterations += 1;
        match residual.evaluate(x) {
            Ok(value) => {
                self.residual = value;
                self.status = SolverStatus::Iterating;
                trace!(
                    status = ?self.status,
                    iteration = self.iterations,
                    semi_major_axis = x,
                    residual = value,
                    "root finder iterate"
                );
                Ok(value)
            }
            Err(err) => Err(self.reject(err)),
        }
    }

    /// Leave the iteration on an undefined residual or derivative.
    fn reject(&mut self, err: LambertError) -> LambertError {
        self.status = SolverStatus::DomainViolation;
        debug!(
            status = ?self.status,
            iteration = self.iterations,
            semi_major_axis = self.semi_major_axis,
            "domain violation"
        );
        err
    }

    fn is_within(&self, tolerance: f64) -> bool {
        self.residual.abs() < tolerance
    }

    fn converge(mut self) -> RootSolution {
        self.status = SolverStatus::Converged;
        debug!(
            iterations = self.iterations,
            semi_major_axis = self.semi_major_axis,
            residual = self.residual,
            "root finder converged"
        );
        RootSolution {
            root: self.semi_major_axis,
            residual: self.residual,
            iterations: self.iterations,
        }
    }

    fn fail(mut self, status: SolverStatus) -> LambertError {
        self.status = status;
        debug!(
            ?status,
            iterations = self.iterations,
            semi_major_axis = self.semi_major_axis,
            residual = self.residual,
            "root finder failed"
        );
        LambertError::Convergence {
            iterations: self.iterations,
            semi_major_axis: self.semi_major_axis,
            residual: self.residual,
            status: self.status,
        }
    }
}

/// Converged root returned by a [`RootFinder`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootSolution {
    pub root: f64,
    /// Residual at `root`, below the tolerance in absolute value
    pub residual: f64,
    /// Number of residual evaluations used
    pub iterations: usize,
}

/// Abstract 1-D root finder.
///
/// Implementations read `tolerance`, `max_iterations` and `max_step_ratio` from the
/// [`LambertParams`] they are given and never keep state between calls.
pub trait RootFinder {
    fn find_root<R: ScalarResidual + ?Sized>(
        &self,
        residual: &R,
        initial_guess: f64,
        params: &LambertParams,
    ) -> Result<RootSolution, LambertError>;
}

/// Apply the step control described in the module documentation.
fn safeguarded_step(x: f64, step: f64, lower_bound: f64, max_step_ratio: f64) -> f64 {
    let radius = max_step_ratio * x.abs();
    let next = x + step.clamp(-radius, radius);
    if next < lower_bound {
        0.5 * (x + lower_bound)
    } else {
        next
    }
}

/// Safeguarded Newton–Raphson iteration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Newton;

impl RootFinder for Newton {
    fn find_root<R: ScalarResidual + ?Sized>(
        &self,
        residual: &R,
        initial_guess: f64,
        params: &LambertParams,
    ) -> Result<RootSolution, LambertError> {
        let lower_bound = residual.lower_bound();
        let mut state = SolverState::new(initial_guess);
        let mut x = initial_guess;

        while state.iterations < params.max_iterations {
            let f = state.evaluate(residual, x)?;
            if state.is_within(params.tolerance) {
                return Ok(state.converge());
            }

            let df = residual.derivative(x).map_err(|err| state.reject(err))?;
            let step = -f / df;
            if !step.is_finite() || step == 0.0 {
                return Err(state.fail(SolverStatus::Stalled));
            }

            x = safeguarded_step(x, step, lower_bound, params.max_step_ratio);
        }

        Err(state.fail(SolverStatus::IterationLimitExceeded))
    }
}

/// Derivative-free secant iteration, started from `x0` and `x0 · (1 - 1e-3)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Secant;

impl RootFinder for Secant {
    fn find_root<R: ScalarResidual + ?Sized>(
        &self,
        residual: &R,
        initial_guess: f64,
        params: &LambertParams,
    ) -> Result<RootSolution, LambertError> {
        let lower_bound = residual.lower_bound();
        let mut state = SolverState::new(initial_guess);

        let mut x_prev = initial_guess;
        let mut f_prev = state.evaluate(residual, x_prev)?;
        if state.is_within(params.tolerance) {
            return Ok(state.converge());
        }

        let mut x = safeguarded_step(
            x_prev,
            -SECANT_PERTURBATION * x_prev,
            lower_bound,
            params.max_step_ratio,
        );

        while state.iterations < params.max_iterations {
            let f = state.evaluate(residual, x)?;
            if state.is_within(params.tolerance) {
                return Ok(state.converge());
            }

            let step = -f * (x - x_prev) / (f - f_prev);
            if !step.is_finite() || step == 0.0 {
                return Err(state.fail(SolverStatus::Stalled));
            }

            x_prev = x;
            f_prev = f;
            x = safeguarded_step(x, step, lower_bound, params.max_step_ratio);
        }

        Err(state.fail(SolverStatus::IterationLimitExceeded))
    }
}
