use proptest::prelude::*;
use wirebend_camtools::divide_rotation;
use wirebend_core::ROTATION_LIMIT_DEGREES;

#[test]
fn test_two_hundred_degrees() {
    let steps = divide_rotation(200.0);
    assert_eq!(steps.len(), 4);
    assert!(steps.iter().all(|s| *s == 50.0));
}

proptest! {
    #[test]
    fn prop_steps_sum_to_delta(delta in -3600.0..3600.0f64) {
        let steps = divide_rotation(delta);
        let sum: f64 = steps.iter().sum();
        prop_assert!((sum - delta).abs() < 1e-9);
    }

    #[test]
    fn prop_steps_within_limit_and_signed(delta in -3600.0..3600.0f64) {
        for step in divide_rotation(delta) {
            prop_assert!(step.abs() <= ROTATION_LIMIT_DEGREES + 1e-9);
            prop_assert!(step == 0.0 || step.signum() == delta.signum());
        }
    }
}
