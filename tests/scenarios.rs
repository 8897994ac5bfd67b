use std::f64::consts::PI;

use approx::assert_relative_eq;
use em_mirror::prelude::*;

const MM: f64 = 1.0e-3;

fn square_10mm() -> Domain {
    Domain::new(-10.0 * MM, 10.0 * MM, -10.0 * MM, 10.0 * MM)
}

#[test]
fn single_wire_in_free_space_obeys_amperes_law() {
    let solver = MirrorSolver::new(
        BoundaryCondition::free_space(square_10mm()),
        ConductorSet::new(vec![Conductor::new(0.0, 0.0, 4.0 * MM)]),
    )
    .expect("valid geometry");
    assert!(solver.images().is_empty());

    let field = solver
        .field_at(&[5.0 * MM], &[0.0], &Matrix::from_element(1, 1, 1.0))
        .expect("valid query");
    assert_relative_eq!(field.hx[(0, 0)], 0.0, epsilon = 1.0e-12);
    assert_relative_eq!(field.hy[(0, 0)], 1.0 / (2.0 * PI * 0.005), max_relative = 1.0e-12);
    assert_relative_eq!(field.hy[(0, 0)], 31.830_988_618, max_relative = 1.0e-9);
}

#[test]
fn free_space_inductance_is_the_bare_log_formula() {
    let bc = BoundaryCondition::free_space(square_10mm()).with_pole_distance(0.2);
    let solver = MirrorSolver::new(
        bc,
        ConductorSet::new(vec![
            Conductor::new(-3.0 * MM, 0.0, 2.0 * MM),
            Conductor::new(3.0 * MM, 2.0 * MM, 1.0 * MM),
        ]),
    )
    .expect("valid geometry");
    let l = solver.inductance();
    let k = VACUUM_PERMEABILITY / (2.0 * PI);
    let d2 = (6.0 * MM).powi(2) + (2.0 * MM).powi(2);
    assert_relative_eq!(l[(0, 1)], k * 0.5 * (0.04 / d2).ln(), max_relative = 1.0e-12);
    assert_relative_eq!(l[(0, 0)], k * ((0.2 / MM).ln() + 0.25), max_relative = 1.0e-12);
    assert_relative_eq!(l[(1, 1)], k * ((0.2 / (0.5 * MM)).ln() + 0.25), max_relative = 1.0e-12);
}

#[test]
fn two_parallel_boundaries_generate_two_m_images_per_conductor() {
    let mu = 9.0;
    let order = 3;
    let bc = BoundaryCondition::new(BoundaryKind::XX, square_10mm(), mu, order);
    let conductors = ConductorSet::new(vec![
        Conductor::new(-2.0 * MM, 0.0, 1.0 * MM),
        Conductor::new(2.0 * MM, 0.0, 1.0 * MM),
    ]);
    let solver = MirrorSolver::new(bc, conductors).expect("valid geometry");
    assert_eq!(solver.images().len(), 2 * 2 * order);

    let ratio = (mu - 1.0) / (mu + 1.0);
    for img in solver.images() {
        assert_relative_eq!(img.weight, ratio.powi(img.order() as i32), max_relative = 1.0e-12);
    }
    let first = solver.images().iter().filter(|img| img.order() == 1);
    assert!(first.clone().count() == 4 && first.into_iter().all(|img| (img.weight - 0.8).abs() < 1.0e-12));
    assert!(solver.images().iter().any(|img| img.order() as usize == order));
}

#[test]
fn xmin_boundary_reflects_a_single_conductor() {
    let domain = Domain::new(-4.0 * MM, 10.0 * MM, -10.0 * MM, 10.0 * MM);
    let bc = BoundaryCondition::new(BoundaryKind::XMin, domain, 4.0, 7);
    let solver = MirrorSolver::new(bc, ConductorSet::new(vec![Conductor::new(1.0 * MM, 3.0 * MM, 0.5 * MM)]))
        .expect("valid geometry");
    let images = solver.images().as_slice();
    assert_eq!(images.len(), 1);
    assert_relative_eq!(images[0].position.x, 2.0 * (-4.0 * MM) - 1.0 * MM, epsilon = 1.0e-15);
    assert_relative_eq!(images[0].position.y, 3.0 * MM, epsilon = 1.0e-15);
    assert_relative_eq!(images[0].weight, 0.6, max_relative = 1.0e-12);
}

#[test]
fn line_conductors_have_undefined_self_inductance_and_energy() {
    let bc = BoundaryCondition::new(BoundaryKind::XY, square_10mm(), 500.0, 2);
    let solver = MirrorSolver::new(
        bc,
        ConductorSet::new(vec![Conductor::line(-2.0 * MM, 0.0), Conductor::line(2.0 * MM, 0.0)]),
    )
    .expect("valid geometry");
    let l = solver.inductance();
    assert!(l[(0, 0)].is_nan() && l[(1, 1)].is_nan());
    assert!(l[(0, 1)].is_finite());

    let currents = Matrix::from_row_slice(2, 3, &[1.0, 0.0, 2.0, -1.0, 0.0, 1.0]);
    let energy = solver.energy(&currents).expect("valid query");
    assert_eq!(energy.len(), 3);
    assert!(energy.iter().all(|e| e.is_nan()));
}

#[test]
fn conductors_at_exactly_touching_distance_are_rejected() {
    let err = MirrorSolver::new(
        BoundaryCondition::free_space(square_10mm()),
        ConductorSet::new(vec![
            Conductor::new(0.0, 0.0, 2.0 * MM),
            Conductor::new(0.0, 2.5 * MM, 3.0 * MM),
        ]),
    )
    .unwrap_err();
    assert_eq!(err, ValidationError::ConductorOverlap { first: 0, second: 1 });
    assert_eq!(err.kind(), ErrorKind::Geometry);
}

#[test]
fn unknown_boundary_name_is_rejected_before_construction() {
    let err = "xz".parse::<BoundaryKind>().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
}

#[test]
fn grid_sampling_feeds_field_norm_queries() {
    let bc = BoundaryCondition::new(BoundaryKind::YY, square_10mm(), 200.0, 2);
    let solver = MirrorSolver::new(
        bc,
        ConductorSet::new(vec![Conductor::new(-3.0 * MM, 0.0, 2.0 * MM), Conductor::new(3.0 * MM, 0.0, 2.0 * MM)]),
    )
    .expect("valid geometry");
    let (x, y) = solver.boundary().domain.sample_grid(11, 7);
    let norm = solver
        .field_norm_at(&x, &y, &Matrix::from_row_slice(2, 1, &[1.0, -1.0]))
        .expect("grid lies in the domain");
    assert_eq!(norm.shape(), (77, 1));
    assert!(norm.iter().all(|v| v.is_finite() && *v >= 0.0));
}
