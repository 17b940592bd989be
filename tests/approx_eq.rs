//! Tolerance comparisons over value and gradient.

#![cfg(feature = "approx")]

use approx::{assert_abs_diff_eq, assert_relative_eq, assert_relative_ne};
use autodiff::AutoDiff;

#[test]
fn product_then_quotient() {
    let x = AutoDiff::new(1.7_f64, vec![0.3, -1.1, 2.0]);
    let y = AutoDiff::new(-0.45_f64, vec![1.5, 0.25, -0.75]);
    let z = &x * &y / &y;
    assert_relative_eq!(z, x, epsilon = 1e-14, max_relative = 1e-14);
}

#[test]
fn gradient_difference_is_detected() {
    let a = AutoDiff::new(1.0_f64, vec![1.0, 2.0]);
    let b = AutoDiff::new(1.0_f64, vec![1.0, 2.5]);
    assert!(a == b);
    assert_relative_ne!(a, b);
}

#[test]
fn constant_matches_zero_gradient() {
    let c = AutoDiff::constant(3.0_f64);
    let z = AutoDiff::new(3.0_f64, vec![0.0, 1e-18]);
    assert_abs_diff_eq!(c, z, epsilon = 1e-12);
}

#[test]
fn different_dimensions_never_match() {
    let a = AutoDiff::new(1.0_f64, vec![0.0]);
    let b = AutoDiff::new(1.0_f64, vec![0.0, 0.0]);
    assert_relative_ne!(a, b);
}
