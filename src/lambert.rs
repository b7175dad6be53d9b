//! # Lambert orchestrator
//!
//! Top-level entry points of the crate. Given two position vectors `r1`, `r2` (km), a time of
//! flight `tof` (s) and the gravitational parameter `mu` (km³/s²), the orchestrator
//!
//! 1. validates the input ([`LambertProblem::new`]), before any solver call,
//! 2. recovers the semi-major axis `a` of the transfer by driving the
//!    [`TimeOfFlightResidual`] to zero with a [`RootFinder`],
//! 3. computes the speeds with the vis-viva equation `v² = mu (2/r - 1/a)`,
//! 4. directs `v1` along `r1/|r1|` and `v2` along `r2/|r2|`.
//!
//! ## Limitations of the restricted model
//!
//! * The time equation is the single-branch relation documented in
//!   [`crate::time_of_flight`]: no short/long path selection, no multi-revolution, no hyperbolic
//!   transfer.
//! * The velocity vectors are **colinear with the position vectors**. A general Lambert solution
//!   has velocities inclined on the radius (transfer-plane normal and true anomaly); this model
//!   only matches the radial case. Both limitations are deliberate and kept as is.
//!
//! ## Example
//!
//! ```rust
//! use lambert::constants::{Vector3D, MU_EARTH};
//! use lambert::lambert::solve_lambert;
//!
//! let r1 = Vector3D::new(5000.0, 10000.0, 2100.0);
//! let r2 = Vector3D::new(-14600.0, 2500.0, 7000.0);
//!
//! let solution = solve_lambert(&r1, &r2, 3600.0, MU_EARTH).unwrap();
//! let (v1, v2) = solution.velocities();
//! assert!((v1.x - 2.761017).abs() < 1e-3);
//! assert!((v2.x + 3.785266).abs() < 1e-3);
//! ```
//!
//! ## See also
//! ------------
//! * [`crate::params::LambertParams`] – gravitational parameter and solver settings.
//! * [`crate::root_finder`] – Newton and secant root finders.
//! * [`crate::report`] – console and file output of a [`LambertSolution`].

use tracing::debug;

use crate::{
    constants::{Kilometer, Second, Vector3D},
    lambert_errors::LambertError,
    params::{LambertParams, RootMethod},
    root_finder::{Newton, RootFinder, Secant},
    time_of_flight::{TimeOfFlightResidual, TransferGeometry},
    vector::{is_zero, scale, subtract, unit_vector},
};

/// Validated input of a Lambert solve.
///
/// Invariants
/// -----------------
/// * every component of `r1`, `r2` is finite, and `tof` is finite and strictly positive,
/// * `r1` and `r2` are non-zero,
/// * `r1 ≠ r2` (a zero chord leaves the transfer plane undefined).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LambertProblem {
    r1: Vector3D,
    r2: Vector3D,
    tof: Second,
}

impl LambertProblem {
    /// Build a problem after checking its invariants.
    ///
    /// Arguments
    /// -----------------
    /// * `r1`: initial position (km).
    /// * `r2`: final position (km).
    /// * `tof`: time of flight (s).
    ///
    /// Return
    /// ----------
    /// * The problem, or [`LambertError::DegenerateInput`] describing the first broken invariant.
    pub fn new(r1: Vector3D, r2: Vector3D, tof: Second) -> Result<Self, LambertError> {
        if !r1.iter().chain(r2.iter()).all(|c| c.is_finite()) {
            return Err(LambertError::DegenerateInput(
                "position vectors must have finite components".into(),
            ));
        }
        if !tof.is_finite() || tof <= 0.0 {
            return Err(LambertError::DegenerateInput(format!(
                "time of flight must be finite and > 0, got {tof}"
            )));
        }
        if is_zero(&r1) || is_zero(&r2) {
            return Err(LambertError::DegenerateInput(
                "position vectors must be non-zero".into(),
            ));
        }
        if is_zero(&subtract(&r2, &r1)) {
            return Err(LambertError::DegenerateInput(
                "r1 and r2 coincide, the chord is zero".into(),
            ));
        }

        Ok(LambertProblem { r1, r2, tof })
    }

    pub fn r1(&self) -> &Vector3D {
        &self.r1
    }

    pub fn r2(&self) -> &Vector3D {
        &self.r2
    }

    pub fn tof(&self) -> Second {
        self.tof
    }

    /// Chord, radii and semi-perimeter of the transfer triangle.
    pub fn geometry(&self) -> TransferGeometry {
        TransferGeometry::from_problem(self)
    }
}

/// Outcome of a successful solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LambertSolution {
    /// Velocity at `r1` (km/s)
    pub v1: Vector3D,
    /// Velocity at `r2` (km/s)
    pub v2: Vector3D,
    /// Converged semi-major axis of the transfer (km)
    pub semi_major_axis: Kilometer,
    /// Final time-of-flight residual (s)
    pub residual: Second,
    /// Residual evaluations used by the root finder
    pub iterations: usize,
}

impl LambertSolution {
    /// The `(v1, v2)` pair.
    pub fn velocities(&self) -> (Vector3D, Vector3D) {
        (self.v1, self.v2)
    }
}

/// Solve the restricted Lambert problem with the default solver settings.
///
/// Arguments
/// -----------------
/// * `r1`, `r2`: position vectors (km).
/// * `tof`: time of flight (s).
/// * `mu`: gravitational parameter of the central body (km³/s²), e.g.
///   [`MU_EARTH`](crate::constants::MU_EARTH).
///
/// Return
/// ----------
/// * The [`LambertSolution`], or
///   - [`LambertError::DegenerateInput`] for invalid positions or time (the solver is not run),
///   - [`LambertError::Domain`] if an iterate leaves `a ≥ c/2`,
///   - [`LambertError::Convergence`] if the residual tolerance is not met within the cap,
///   - [`LambertError::InvalidSolverParameter`] if `mu` is not finite and positive.
pub fn solve_lambert(
    r1: &Vector3D,
    r2: &Vector3D,
    tof: Second,
    mu: f64,
) -> Result<LambertSolution, LambertError> {
    let problem = LambertProblem::new(*r1, *r2, tof)?;
    let params = LambertParams::with_mu(mu)?;
    solve_lambert_with(&problem, &params)
}

/// Solve a validated problem with explicit parameters, using the method named in `params`.
pub fn solve_lambert_with(
    problem: &LambertProblem,
    params: &LambertParams,
) -> Result<LambertSolution, LambertError> {
    match params.method {
        RootMethod::Newton => solve_lambert_with_finder(problem, params, &Newton),
        RootMethod::Secant => solve_lambert_with_finder(problem, params, &Secant),
    }
}

/// Solve a validated problem with a caller-supplied [`RootFinder`].
///
/// `params.method` is ignored; the other fields of `params` still apply.
pub fn solve_lambert_with_finder<F: RootFinder>(
    problem: &LambertProblem,
    params: &LambertParams,
    finder: &F,
) -> Result<LambertSolution, LambertError> {
    let residual = TimeOfFlightResidual::new(problem, params.mu);
    debug!(
        tof = problem.tof(),
        chord = residual.geometry().chord,
        initial_guess = residual.initial_guess(),
        "solving Lambert problem"
    );

    let root = finder.find_root(&residual, residual.initial_guess(), params)?;
    let (v1, v2) = terminal_velocities(problem, residual.geometry(), root.root, params.mu)?;

    Ok(LambertSolution {
        v1,
        v2,
        semi_major_axis: root.root,
        residual: root.residual,
        iterations: root.iterations,
    })
}

/// Vis-viva speed at radius `r` on an orbit of semi-major axis `a`.
///
/// Return
/// ----------
/// * `sqrt(mu (2/r - 1/a))`, or [`LambertError::Domain`] when `r > 2a` (the point lies beyond
///   the apoapsis of any ellipse with this semi-major axis).
pub fn vis_viva_speed(
    radius: Kilometer,
    semi_major_axis: Kilometer,
    mu: f64,
) -> Result<f64, LambertError> {
    let speed_sq = mu * (2.0 / radius - 1.0 / semi_major_axis);
    if speed_sq < 0.0 || !speed_sq.is_finite() {
        return Err(LambertError::Domain {
            semi_major_axis,
            min_semi_major_axis: radius / 2.0,
        });
    }
    Ok(speed_sq.sqrt())
}

fn terminal_velocities(
    problem: &LambertProblem,
    geometry: &TransferGeometry,
    semi_major_axis: Kilometer,
    mu: f64,
) -> Result<(Vector3D, Vector3D), LambertError> {
    let v1_mag = vis_viva_speed(geometry.r1_norm, semi_major_axis, mu)?;
    let v2_mag = vis_viva_speed(geometry.r2_norm, semi_major_axis, mu)?;

    // r1 and r2 are non-zero by construction of the problem
    let u1 = unit_vector(problem.r1()).unwrap_or_else(Vector3D::zeros);
    let u2 = unit_vector(problem.r2()).unwrap_or_else(Vector3D::zeros);

    Ok((scale(&u1, v1_mag), scale(&u2, v2_mag)))
}
