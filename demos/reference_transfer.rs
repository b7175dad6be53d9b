//! Solve the reference transfer around the Earth, print both velocities and save them to
//! `output.txt` in the working directory.
//!
//! Run with `RUST_LOG=debug` to follow the root finder.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use lambert::constants::{Vector3D, MU_EARTH};
use lambert::report::{save_velocity_file, velocity_report, VELOCITY_FILE_NAME};
use lambert::solve_lambert;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let r1 = Vector3D::new(5000.0, 10000.0, 2100.0);
    let r2 = Vector3D::new(-14600.0, 2500.0, 7000.0);
    let tof = 3600.0;

    match solve_lambert(&r1, &r2, tof, MU_EARTH) {
        Ok(solution) => {
            println!("{}", velocity_report(&solution));
            if !save_velocity_file(VELOCITY_FILE_NAME, &solution) {
                println!("Error opening file for writing.");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Lambert solve failed: {err}");
            ExitCode::FAILURE
        }
    }
}
