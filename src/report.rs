//! # Console and file output of a Lambert solution
//!
//! Peripheral formatting helpers, kept outside the solver core:
//!
//! - [`format_vector`] renders `(x, y, z)` with 6 digits after the decimal point,
//! - [`velocity_report`] builds the two console lines
//!   `Initial velocity: (x, y, z)` / `Final velocity: (x, y, z)`,
//! - [`write_velocity_file`] writes one `vx vy vz` line per velocity (space separated, same
//!   6-digit formatting) and [`read_velocity_file`] reads such a file back,
//! - [`save_velocity_file`] is the non-fatal variant used by drivers: a write failure is logged
//!   as a warning and never aborts or masks the solve result.
//!
//! ```text
//! output.txt
//! 2.761017 5.522034 1.159627
//! -3.785266 0.648162 1.814854
//! ```

use std::io;
use std::path::Path;

use csv::{ReaderBuilder, Terminator, WriterBuilder};
use serde::{Deserialize, Serialize, Serializer};
use tracing::warn;

use crate::{constants::Vector3D, lambert::LambertSolution, lambert_errors::LambertError};

/// Default name of the velocity file
pub const VELOCITY_FILE_NAME: &str = "output.txt";

/// One line of the velocity file. Components are written with 6 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VelocityRecord {
    #[serde(serialize_with = "six_decimals")]
    pub vx: f64,
    #[serde(serialize_with = "six_decimals")]
    pub vy: f64,
    #[serde(serialize_with = "six_decimals")]
    pub vz: f64,
}

fn six_decimals<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&format_args!("{value:.6}"))
}

impl From<&Vector3D> for VelocityRecord {
    fn from(v: &Vector3D) -> Self {
        VelocityRecord {
            vx: v.x,
            vy: v.y,
            vz: v.z,
        }
    }
}

impl From<VelocityRecord> for Vector3D {
    fn from(record: VelocityRecord) -> Self {
        Vector3D::new(record.vx, record.vy, record.vz)
    }
}

/// `(x, y, z)` with 6 decimals.
pub fn format_vector(v: &Vector3D) -> String {
    format!("({:.6}, {:.6}, {:.6})", v.x, v.y, v.z)
}

/// The two console lines describing a solution, without trailing newline.
pub fn velocity_report(solution: &LambertSolution) -> String {
    format!(
        "Initial velocity: {}\nFinal velocity: {}",
        format_vector(&solution.v1),
        format_vector(&solution.v2)
    )
}

/// Write `v1` and `v2` to `path`, one space-separated line each.
///
/// Return
/// ----------
/// * `Ok(())`, or [`LambertError::CsvError`] / [`LambertError::IoError`] if the file cannot be
///   created or written.
pub fn write_velocity_file<P: AsRef<Path>>(
    path: P,
    solution: &LambertSolution,
) -> Result<(), LambertError> {
    let mut writer = WriterBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_path(path)?;

    writer.serialize(VelocityRecord::from(&solution.v1))?;
    writer.serialize(VelocityRecord::from(&solution.v2))?;
    writer.flush()?;
    Ok(())
}

/// Write the velocity file, downgrading any failure to a warning.
///
/// Return
/// ----------
/// * `true` if the file was written.
pub fn save_velocity_file<P: AsRef<Path>>(path: P, solution: &LambertSolution) -> bool {
    let path = path.as_ref();
    match write_velocity_file(path, solution) {
        Ok(()) => true,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "error opening file for writing");
            false
        }
    }
}

/// Read back the `(v1, v2)` pair from a velocity file.
///
/// Only the first two lines are used; a file with fewer lines is rejected.
pub fn read_velocity_file<P: AsRef<Path>>(path: P) -> Result<(Vector3D, Vector3D), LambertError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .from_path(path)?;

    let mut records = reader.deserialize::<VelocityRecord>();
    let mut next_vector = || -> Result<Vector3D, LambertError> {
        match records.next() {
            Some(record) => Ok(record?.into()),
            None => Err(LambertError::IoError(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "velocity file must contain two lines",
            ))),
        }
    };

    let v1 = next_vector()?;
    let v2 = next_vector()?;
    Ok((v1, v2))
}

#[cfg(test)]
mod report_test {
    use super::*;

    fn solution() -> LambertSolution {
        LambertSolution {
            v1: Vector3D::new(2.761017037971836, 5.522034075943672, 1.1596271559481712),
            v2: Vector3D::new(-3.7852664872987094, 0.6481620697429297, 1.814853795280203),
            semi_major_axis: 13018.697145548576,
            residual: 0.0,
            iterations: 8,
        }
    }

    #[test]
    fn test_format_vector() {
        assert_eq!(
            format_vector(&Vector3D::new(1.0, -0.5, 1234.5678901)),
            "(1.000000, -0.500000, 1234.567890)"
        );
    }

    #[test]
    fn test_velocity_report() {
        assert_eq!(
            velocity_report(&solution()),
            "Initial velocity: (2.761017, 5.522034, 1.159627)\n\
             Final velocity: (-3.785266, 0.648162, 1.814854)"
        );
    }

    #[test]
    fn test_write_and_read_velocity_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(VELOCITY_FILE_NAME);

        write_velocity_file(&path, &solution()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "2.761017 5.522034 1.159627\n-3.785266 0.648162 1.814854\n"
        );

        let (v1, v2) = read_velocity_file(&path).unwrap();
        assert_eq!(v1, Vector3D::new(2.761017, 5.522034, 1.159627));
        assert_eq!(v2, Vector3D::new(-3.785266, 0.648162, 1.814854));
    }

    #[test]
    fn test_records_are_rounded_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(VELOCITY_FILE_NAME);

        let mut solution = solution();
        solution.v1 = Vector3D::new(1.0 / 3.0, -2.0, 1e-9);
        solution.v2 = Vector3D::new(0.1234567, 42.0, -7.0000004);
        write_velocity_file(&path, &solution).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "0.333333 -2.000000 0.000000\n0.123457 42.000000 -7.000000\n"
        );

        let (v1, _) = read_velocity_file(&path).unwrap();
        assert_eq!(
            VelocityRecord::from(&v1),
            VelocityRecord {
                vx: 0.333333,
                vy: -2.0,
                vz: 0.0,
            }
        );
    }

    #[test]
    fn test_save_into_missing_directory_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join(VELOCITY_FILE_NAME);

        assert!(!save_velocity_file(&path, &solution()));
        assert!(write_velocity_file(&path, &solution()).is_err());
    }

    #[test]
    fn test_read_truncated_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(VELOCITY_FILE_NAME);
        std::fs::write(&path, "1.0 2.0 3.0\n").unwrap();

        assert!(matches!(
            read_velocity_file(&path),
            Err(LambertError::IoError(_))
        ));
    }
}
