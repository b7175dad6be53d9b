mod common;

use approx::assert_relative_eq;
use lambert::constants::MU_EARTH;
use lambert::lambert::{solve_lambert_with, solve_lambert_with_finder};
use lambert::params::{LambertParams, RootMethod};
use lambert::report::{read_velocity_file, velocity_report, write_velocity_file};
use lambert::root_finder::{Newton, Secant};
use lambert::time_of_flight::transfer_time;
use lambert::solve_lambert;

use crate::common::{
    assert_vector_close, reference_problem, vector, REFERENCE_R1, REFERENCE_R2,
    REFERENCE_SEMI_MAJOR_AXIS, REFERENCE_TOF, REFERENCE_V1, REFERENCE_V2,
};

#[test]
fn test_reference_velocities() {
    let solution = solve_lambert(
        &vector(REFERENCE_R1),
        &vector(REFERENCE_R2),
        REFERENCE_TOF,
        MU_EARTH,
    )
    .unwrap();

    assert_relative_eq!(
        solution.semi_major_axis,
        REFERENCE_SEMI_MAJOR_AXIS,
        max_relative = 1e-10
    );
    assert_vector_close(&solution.v1, &vector(REFERENCE_V1), 1e-3);
    assert_vector_close(&solution.v2, &vector(REFERENCE_V2), 1e-3);

    // tighter than the regression bound, the root is unique
    assert_vector_close(&solution.v1, &vector(REFERENCE_V1), 1e-9);
    assert_vector_close(&solution.v2, &vector(REFERENCE_V2), 1e-9);
}

#[test]
fn test_reference_time_of_flight_is_recovered() {
    let problem = reference_problem();
    let solution = solve_lambert_with(&problem, &LambertParams::default()).unwrap();

    let t = transfer_time(
        solution.semi_major_axis,
        problem.geometry().chord,
        MU_EARTH,
    )
    .unwrap();
    assert!((t - REFERENCE_TOF).abs() < 1e-6);
    assert!(solution.semi_major_axis >= problem.geometry().min_semi_major_axis());
}

#[test]
fn test_solve_is_idempotent() {
    let problem = reference_problem();
    let params = LambertParams::default();

    let first = solve_lambert_with(&problem, &params).unwrap();
    let second = solve_lambert_with(&problem, &params).unwrap();
    assert_eq!(first, second);

    let finder = Newton;
    let third = solve_lambert_with_finder(&problem, &params, &finder).unwrap();
    let fourth = solve_lambert_with_finder(&problem, &params, &finder).unwrap();
    assert_eq!(third, fourth);
    assert_eq!(first, third);
}

#[test]
fn test_methods_agree() {
    let problem = reference_problem();
    let params = LambertParams::default();

    let newton = solve_lambert_with_finder(&problem, &params, &Newton).unwrap();
    let secant = solve_lambert_with_finder(&problem, &params, &Secant).unwrap();
    let by_name = solve_lambert_with(
        &problem,
        &LambertParams::builder()
            .method(RootMethod::Secant)
            .build()
            .unwrap(),
    )
    .unwrap();

    assert_eq!(secant, by_name);
    assert_relative_eq!(newton.semi_major_axis, secant.semi_major_axis, max_relative = 1e-10);
}

#[test]
fn test_parallel_solves_match() {
    let problem = reference_problem();
    let expected = solve_lambert_with(&problem, &LambertParams::default()).unwrap();

    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| solve_lambert_with(&problem, &LambertParams::default())))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for result in results {
        assert_eq!(result.unwrap(), expected);
    }
}

#[test]
fn test_reference_output_file() {
    let solution = solve_lambert_with(&reference_problem(), &LambertParams::default()).unwrap();

    assert_eq!(
        velocity_report(&solution),
        "Initial velocity: (2.761017, 5.522034, 1.159627)\n\
         Final velocity: (-3.785266, 0.648162, 1.814854)"
    );

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("output.txt");
    write_velocity_file(&path, &solution).unwrap();

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "2.761017 5.522034 1.159627\n-3.785266 0.648162 1.814854\n"
    );

    let (v1, v2) = read_velocity_file(&path).unwrap();
    assert_vector_close(&v1, &solution.v1, 1e-6);
    assert_vector_close(&v2, &solution.v2, 1e-6);
}

#[test]
fn test_other_central_body() {
    // Same geometry scaled around Mars: only mu changes, the solver is reused as is
    let mu_mars = 42_828.37;
    let problem = reference_problem();
    let (t_min, t_max) = problem.geometry().reachable_time_range(mu_mars);
    let tof = 0.5 * (t_min + t_max);

    let params = LambertParams::with_mu(mu_mars).unwrap();
    let problem = lambert::LambertProblem::new(*problem.r1(), *problem.r2(), tof).unwrap();
    let solution = solve_lambert_with(&problem, &params).unwrap();

    let t = transfer_time(solution.semi_major_axis, problem.geometry().chord, mu_mars).unwrap();
    assert!((t - tof).abs() < 1e-6);
}

#[test]
fn test_public_types_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<lambert::LambertProblem>();
    assert_send_sync::<lambert::LambertSolution>();
    assert_send_sync::<lambert::LambertError>();
    assert_send_sync::<LambertParams>();
    assert_send_sync::<Newton>();
    assert_send_sync::<Secant>();
}
