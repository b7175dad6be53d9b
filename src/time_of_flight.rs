//! # Time-of-flight residual
//!
//! For a candidate semi-major axis `a`, this module predicts the transfer time of the
//! restricted elliptical model and returns its deviation from the requested time of flight:
//!
//! ```text
//! beta        = acos(1 - c/a)
//! t(a)        = sqrt(a^3 / mu) * (beta - sin(beta))
//! residual(a) = t(a) - tof
//! ```
//!
//! where `c` is the chord between the two position vectors and `mu` the gravitational parameter
//! of the central body (always supplied by the caller).
//!
//! ## Domain
//!
//! `acos` needs `1 - c/a ∈ [-1, 1]`, i.e. `a ≥ c/2`. Any candidate below this floor, or a
//! non-finite candidate, is rejected with [`LambertError::Domain`] instead of being evaluated to
//! `NaN`.
//!
//! ## Restricted branch
//!
//! This relation is only one branch of the true Lambert time equation. It does not distinguish
//! the short and long transfer paths, has no multi-revolution term, and only holds while `beta`
//! stays in the principal range returned by `acos`. Over `a ∈ [c/2, ∞)` the predicted time
//! decreases monotonically from `π·sqrt((c/2)^3/mu)` down to the parabolic limit
//! `(2c)^{3/2} / (6·sqrt(mu))`; requested times outside this window have no root.
//!
//! ## See also
//! ------------
//! * [`crate::root_finder`] – drives [`TimeOfFlightResidual`] to zero.
//! * [`crate::lambert::solve_lambert`] – top-level entry point.

use std::f64::consts::PI;

use crate::{
    constants::{Kilometer, Second},
    lambert::LambertProblem,
    lambert_errors::LambertError,
    root_finder::ScalarResidual,
    vector::{magnitude, subtract},
};

/// Geometry of the transfer triangle, derived from a [`LambertProblem`].
///
/// Pure function of the problem input, so it is identical across the solver iterations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferGeometry {
    /// |r1|
    pub r1_norm: Kilometer,
    /// |r2|
    pub r2_norm: Kilometer,
    /// Chord c = |r2 - r1|
    pub chord: Kilometer,
    /// Semi-perimeter s = (|r1| + |r2| + c) / 2
    pub semi_perimeter: Kilometer,
}

impl TransferGeometry {
    pub fn from_problem(problem: &LambertProblem) -> Self {
        let r1_norm = magnitude(problem.r1());
        let r2_norm = magnitude(problem.r2());
        let chord = magnitude(&subtract(problem.r2(), problem.r1()));

        TransferGeometry {
            r1_norm,
            r2_norm,
            chord,
            semi_perimeter: (r1_norm + r2_norm + chord) / 2.0,
        }
    }

    /// Smallest admissible semi-major axis, `c / 2`.
    #[inline]
    pub fn min_semi_major_axis(&self) -> Kilometer {
        self.chord / 2.0
    }

    /// Range of transfer times reachable by the restricted model for this geometry.
    ///
    /// Return
    /// ----------
    /// * `(t_min, t_max)` where `t_min` is the parabolic limit (`a → ∞`) and `t_max` the
    ///   value at `a = c/2`. Both bounds are open in practice: the limit is never reached and the
    ///   slope is infinite at the floor.
    pub fn reachable_time_range(&self, mu: f64) -> (Second, Second) {
        let t_min = (2.0 * self.chord).powf(1.5) / (6.0 * mu.sqrt());
        let t_max = PI * (self.min_semi_major_axis().powi(3) / mu).sqrt();
        (t_min, t_max)
    }
}

/// Check `a` against the domain floor and return `beta = acos(1 - c/a)`.
fn beta_angle(semi_major_axis: f64, chord: f64) -> Result<f64, LambertError> {
    let floor = chord / 2.0;
    if !semi_major_axis.is_finite() || semi_major_axis < floor {
        return Err(LambertError::Domain {
            semi_major_axis,
            min_semi_major_axis: floor,
        });
    }
    // a == c/2 may round 1 - c/a slightly below -1
    let cos_beta = (1.0 - chord / semi_major_axis).clamp(-1.0, 1.0);
    Ok(cos_beta.acos())
}

/// Transfer time `t(a)` predicted by the restricted elliptical model.
///
/// Arguments
/// -----------------
/// * `semi_major_axis`: candidate `a` (km).
/// * `chord`: chord `c` of the transfer triangle (km).
/// * `mu`: gravitational parameter (km³/s²).
///
/// Return
/// ----------
/// * The time in seconds, or [`LambertError::Domain`] if `a < c/2`, `a` is not finite, or the
///   predicted time overflows.
pub fn transfer_time(semi_major_axis: f64, chord: f64, mu: f64) -> Result<Second, LambertError> {
    let beta = beta_angle(semi_major_axis, chord)?;
    let time = (semi_major_axis.powi(3) / mu).sqrt() * (beta - beta.sin());

    if !time.is_finite() {
        return Err(LambertError::Domain {
            semi_major_axis,
            min_semi_major_axis: chord / 2.0,
        });
    }
    Ok(time)
}

/// Derivative `dt/da` of [`transfer_time`].
///
/// ```text
/// dt/da = 1.5 * sqrt(a/mu) * (beta - sin beta) - c^2 / (sqrt(mu) * a^{3/2} * sin beta)
/// ```
///
/// The slope goes to `-∞` at `a = c/2` (where `sin beta = 0`), which is returned as is.
pub fn transfer_time_derivative(
    semi_major_axis: f64,
    chord: f64,
    mu: f64,
) -> Result<f64, LambertError> {
    let beta = beta_angle(semi_major_axis, chord)?;
    let sqrt_mu = mu.sqrt();

    let growth = 1.5 * (semi_major_axis / mu).sqrt() * (beta - beta.sin());
    let shrink = chord * chord / (sqrt_mu * semi_major_axis.powf(1.5) * beta.sin());

    Ok(growth - shrink)
}

/// Deviation of the predicted transfer time from the requested one, `t(a) - tof`.
pub fn residual(
    semi_major_axis: f64,
    problem: &LambertProblem,
    mu: f64,
) -> Result<Second, LambertError> {
    let geometry = TransferGeometry::from_problem(problem);
    Ok(transfer_time(semi_major_axis, geometry.chord, mu)? - problem.tof())
}

/// The time-of-flight residual seen as a scalar function of `a`, ready for a
/// [`RootFinder`](crate::root_finder::RootFinder).
#[derive(Debug, Clone, Copy)]
pub struct TimeOfFlightResidual {
    geometry: TransferGeometry,
    tof: Second,
    mu: f64,
}

impl TimeOfFlightResidual {
    pub fn new(problem: &LambertProblem, mu: f64) -> Self {
        TimeOfFlightResidual {
            geometry: TransferGeometry::from_problem(problem),
            tof: problem.tof(),
            mu,
        }
    }

    pub fn geometry(&self) -> &TransferGeometry {
        &self.geometry
    }

    /// Starting point of the iteration: the semi-perimeter `s`.
    pub fn initial_guess(&self) -> Kilometer {
        self.geometry.semi_perimeter
    }
}

impl ScalarResidual for TimeOfFlightResidual {
    fn lower_bound(&self) -> f64 {
        self.geometry.min_semi_major_axis()
    }

    fn evaluate(&self, semi_major_axis: f64) -> Result<f64, LambertError> {
        Ok(transfer_time(semi_major_axis, self.geometry.chord, self.mu)? - self.tof)
    }

    fn derivative(&self, semi_major_axis: f64) -> Result<f64, LambertError> {
        transfer_time_derivative(semi_major_axis, self.geometry.chord, self.mu)
    }
}
