use thiserror::Error;

use crate::root_finder::SolverStatus;

#[derive(Error, Debug)]
pub enum LambertError {
    #[error("Degenerate Lambert input: {0}")]
    DegenerateInput(String),

    /// `a` is below `c/2` (time-of-flight residual) or below `r/2` (vis-viva speed).
    #[error(
        "Semi-major axis {semi_major_axis} km is below the admissible bound (a >= {min_semi_major_axis} km)"
    )]
    Domain {
        semi_major_axis: f64,
        min_semi_major_axis: f64,
    },

    #[error(
        "Root finder did not converge after {iterations} iterations (a = {semi_major_axis} km, residual = {residual} s, status = {status:?})"
    )]
    Convergence {
        iterations: usize,
        semi_major_axis: f64,
        residual: f64,
        /// `IterationLimitExceeded` or `Stalled`
        status: SolverStatus,
    },

    #[error("Invalid solver parameter: {0}")]
    InvalidSolverParameter(String),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Velocity file error: {0}")]
    CsvError(#[from] csv::Error),
}

impl PartialEq for LambertError {
    fn eq(&self, other: &Self) -> bool {
        use LambertError::*;
        match (self, other) {
            (DegenerateInput(a), DegenerateInput(b)) => a == b,
            (
                Domain {
                    semi_major_axis: a1,
                    min_semi_major_axis: m1,
                },
                Domain {
                    semi_major_axis: a2,
                    min_semi_major_axis: m2,
                },
            ) => a1 == a2 && m1 == m2,
            (
                Convergence {
                    iterations: i1,
                    semi_major_axis: a1,
                    residual: r1,
                    status: s1,
                },
                Convergence {
                    iterations: i2,
                    semi_major_axis: a2,
                    residual: r2,
                    status: s2,
                },
            ) => i1 == i2 && a1 == a2 && r1 == r2 && s1 == s2,
            (InvalidSolverParameter(a), InvalidSolverParameter(b)) => a == b,

            // foreign payloads are not comparable: same variant means equal
            (IoError(_), IoError(_)) => true,
            (CsvError(_), CsvError(_)) => true,

            _ => false,
        }
    }
}

impl LambertError {
    /// True for the failures raised by the solve pipeline itself
    /// (degenerate input, domain violation, non convergence).
    pub fn is_solve_failure(&self) -> bool {
        matches!(
            self,
            LambertError::DegenerateInput(_)
                | LambertError::Domain { .. }
                | LambertError::Convergence { .. }
        )
    }
}
