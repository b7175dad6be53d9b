#![allow(dead_code)]

use approx::assert_relative_eq;
use lambert::constants::Vector3D;
use lambert::LambertProblem;
use rand::rngs::StdRng;
use rand::Rng;

/// Reference transfer: r1, r2 in km, 3600 s
pub const REFERENCE_R1: [f64; 3] = [5000.0, 10000.0, 2100.0];
pub const REFERENCE_R2: [f64; 3] = [-14600.0, 2500.0, 7000.0];
pub const REFERENCE_TOF: f64 = 3600.0;

/// Golden values of the reference transfer
pub const REFERENCE_SEMI_MAJOR_AXIS: f64 = 13018.697145548576;
pub const REFERENCE_V1: [f64; 3] = [2.761017037971836, 5.522034075943672, 1.1596271559481712];
pub const REFERENCE_V2: [f64; 3] = [-3.7852664872987094, 0.6481620697429297, 1.814853795280203];

pub fn vector(components: [f64; 3]) -> Vector3D {
    Vector3D::new(components[0], components[1], components[2])
}

pub fn reference_problem() -> LambertProblem {
    LambertProblem::new(vector(REFERENCE_R1), vector(REFERENCE_R2), REFERENCE_TOF).unwrap()
}

pub fn assert_vector_close(actual: &Vector3D, expected: &Vector3D, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}

/// Random position: direction components in [-1, 1], scaled by a radius in [6600, 42000] km.
pub fn random_position(rng: &mut StdRng) -> Vector3D {
    let scale = rng.random_range(6600.0..42000.0);
    Vector3D::new(
        rng.random_range(-1.0..=1.0),
        rng.random_range(-1.0..=1.0),
        rng.random_range(-1.0..=1.0),
    ) * scale
}
