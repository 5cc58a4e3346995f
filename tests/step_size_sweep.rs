use approx::assert_relative_eq;

use findiff::math::differentiation::domainerror::DomainError;
use findiff::math::differentiation::stepsizesweep::{
    StepSizeSweep,
    SweepBounds
};

#[test]
fn produces_exactly_n_points_between_the_bounds() {
    for (h_min, h_max, n) in [(1e-12, 1e-1, 200), (1e-3, 1.0, 2), (0.5, 8.0, 5), (1e-300, 1e300, 1000)] {
        let steps = StepSizeSweep::generate(h_min, h_max, n).unwrap();
        assert_eq!(steps.len(), n);
        assert_eq!(steps[0], h_min);
        assert_relative_eq!(steps[n - 1], h_max, max_relative = 1e-9);
        assert!(steps.windows(2).all(|w| w[1] > w[0]));
    }
}

#[test]
fn consecutive_ratio_is_constant() {
    let sweep = StepSizeSweep::new(1e-12, 1e-1, 200).unwrap();
    let expected = (1e-1f64 / 1e-12).powf(1.0 / 199.0);
    assert_relative_eq!(sweep.ratio(), expected, max_relative = 1e-12);
    for w in sweep.steps().windows(2) {
        assert_relative_eq!(w[1] / w[0], sweep.ratio(), max_relative = 1e-12);
    }
}

#[test]
fn spacing_is_multiplicative_not_additive() {
    let steps = StepSizeSweep::generate(1e-4, 1.0, 5).unwrap();
    let expected = [1e-4, 1e-3, 1e-2, 1e-1, 1.0];
    for (h, e) in steps.iter().zip(expected) {
        assert_relative_eq!(*h, e, max_relative = 1e-12);
    }
}

#[test]
fn generation_is_repeatable() {
    let a = StepSizeSweep::new(1e-9, 1e-2, 77).unwrap();
    let b = StepSizeSweep::new(1e-9, 1e-2, 77).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.iter().collect::<Vec<f64>>(), a.steps());
}

#[test]
fn invalid_bounds_are_rejected() {
    assert_eq!(StepSizeSweep::new(-1.0, 1e-1, 10), Err(DomainError::NonPositiveMinimumStep(-1.0)));
    assert_eq!(StepSizeSweep::new(0.0, 1e-1, 10), Err(DomainError::NonPositiveMinimumStep(0.0)));
    assert_eq!(
        StepSizeSweep::new(1e-2, 1e-2, 10),
        Err(DomainError::MaximumNotAboveMinimum { h_min: 1e-2, h_max: 1e-2 })
    );
    assert_eq!(
        StepSizeSweep::new(1e-1, 1e-2, 10),
        Err(DomainError::MaximumNotAboveMinimum { h_min: 1e-1, h_max: 1e-2 })
    );
    assert_eq!(StepSizeSweep::new(1e-3, 1e-1, 1), Err(DomainError::TooFewPoints(1)));
    assert_eq!(StepSizeSweep::new(1e-3, 1e-1, 0), Err(DomainError::TooFewPoints(0)));
    assert!(matches!(
        StepSizeSweep::new(1e-3, f64::INFINITY, 10),
        Err(DomainError::NonFiniteBound { .. })
    ));
    assert!(matches!(
        StepSizeSweep::new(f64::NAN, 1.0, 10),
        Err(DomainError::NonFiniteBound { .. })
    ));
}

#[test]
fn collapsing_ratio_is_rejected() {
    let h_max = 1.0 + f64::EPSILON;
    assert!(matches!(
        StepSizeSweep::new(1.0, h_max, 1_000_000),
        Err(DomainError::DegenerateRatio { .. })
    ));
}

#[test]
fn subnormal_steps_that_stop_increasing_are_rejected() {
    // r ≈ 1.03，但 5e-324·r 捨入後仍是 5e-324
    match StepSizeSweep::generate(5e-324, 1e-322, 100) {
        Err(DomainError::DegenerateRatio { h_min, h_max, n_points }) => {
            assert_eq!(h_min, 5e-324);
            assert_eq!(h_max, 1e-322);
            assert_eq!(n_points, 100);
        }
        other => panic!("unexpected: {other:?}"),
    }

    // 間距夠大時次正規數區段仍可用
    let steps = StepSizeSweep::generate(5e-324, 1e-300, 20).unwrap();
    assert_eq!(steps.len(), 20);
    assert!(steps.windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn bounds_build_the_same_sweep() {
    let bounds = SweepBounds::new(1e-6, 1e-2, 9);
    let sweep = bounds.sweep().unwrap();
    assert_eq!(sweep.bounds(), bounds);
    assert_eq!(sweep, StepSizeSweep::try_from(bounds).unwrap());
}
