use autodiff::{AutoDiff, AutoDiff32, AutoDiffError};

// ── Constructors ──

#[test]
fn default_is_constant_zero() {
    let a = AutoDiff::<f64>::default();
    assert_eq!(a.value, 0.0);
    assert_eq!(a.n_derivatives(), 0);
    assert!(a.is_constant());
}

#[test]
fn constant_has_no_derivatives() {
    for c in [-2.5_f64, 0.0, 1.0, 1e300, f64::NAN] {
        let b = AutoDiff::constant(c);
        assert!(b.is_constant());
        assert!(b.derivatives.is_empty());
    }
    let b: AutoDiff<f64> = 1.0_f64.into();
    assert_eq!(b.value, 1.0);
    assert!(b.is_constant());
}

#[test]
fn seed_marks_one_parameter() {
    let x = AutoDiff::seed(2.0_f64, 3, 1);
    assert_eq!(x.value, 2.0);
    assert_eq!(x.derivatives, vec![0.0, 1.0, 0.0]);

    for total in 1..6 {
        for index in 0..total {
            let x = AutoDiff::seed(0.0_f64, total, index);
            assert_eq!(x.n_derivatives(), total);
            for (i, d) in x.derivatives.iter().enumerate() {
                let expected = if i == index { 1.0 } else { 0.0 };
                assert_eq!(*d, expected, "total={} index={} i={}", total, index, i);
            }
        }
    }
}

#[test]
fn try_seed_rejects_out_of_range_index() {
    assert_eq!(
        AutoDiff::try_seed(1.0_f64, 3, 3).unwrap_err(),
        AutoDiffError::SeedOutOfRange { index: 3, total: 3 }
    );
    assert!(AutoDiff::try_seed(1.0_f64, 0, 0).is_err());
}

#[test]
#[should_panic(expected = "out of range")]
fn seed_panics_on_out_of_range_index() {
    let _ = AutoDiff::seed(1.0_f64, 2, 5);
}

#[test]
fn explicit_gradient_is_copied_verbatim() {
    let g = vec![1.0_f64, -1.0, 0.5];
    let z = AutoDiff::new(5.0, g.clone());
    assert_eq!(z.value, 5.0);
    assert_eq!(z.derivatives, g);

    let w = AutoDiff::new(5.0_f64, [1.0, 2.0]);
    assert_eq!(w.n_derivatives(), 2);
}

#[test]
fn clone_is_deep() {
    let x = AutoDiff::seed(2.0_f64, 3, 1);
    let mut y = x.clone();
    assert_eq!(y.value, x.value);
    assert_eq!(y.derivatives, x.derivatives);

    y.derivatives[0] = 7.0;
    y.value = -1.0;
    assert_eq!(x.derivatives, vec![0.0, 1.0, 0.0]);
    assert_eq!(x.value, 2.0);
}

// ── Assignment ──

#[test]
fn set_constant_drops_derivatives() {
    let mut x = AutoDiff::seed(3.0_f64, 1, 0);
    x.set_constant(1.0);
    assert_eq!(x.value, 1.0);
    assert_eq!(x.n_derivatives(), 0);
    assert!(x.is_constant());
}

#[test]
fn assignment_from_other() {
    let mut x = AutoDiff::seed(3.0_f64, 1, 0);
    let y = AutoDiff::seed(2.0_f64, 3, 1);
    assert_eq!(x.n_derivatives(), 1);
    x = y.clone();
    assert_eq!(x.value, y.value);
    assert_eq!(x.derivatives, y.derivatives);
}

// ── Other members ──

#[test]
fn resize_preserves_and_zero_fills() {
    let mut y = AutoDiff::seed(1.0_f64, 1, 0);
    y.resize(3);
    assert_eq!(y.n_derivatives(), 3);
    assert_eq!(y.derivatives, vec![1.0, 0.0, 0.0]);

    y.derivatives = vec![1.0, 2.0, 3.0];
    y.resize(2);
    assert_eq!(y.derivatives, vec![1.0, 2.0]);

    y.resize(0);
    assert!(y.is_constant());
}

#[test]
fn direct_mutation() {
    let mut y = AutoDiff::seed(1.0_f64, 1, 0);
    y.resize(3);
    y.set_derivatives(vec![1.0, 2.0, 3.0]);
    assert_eq!(y.derivatives, vec![1.0, 2.0, 3.0]);

    y.value = 4.0;
    assert_eq!(y.value, 4.0);
    assert!(!y.is_constant());

    y.derivatives[2] = -3.0;
    assert_eq!(y.derivative(2), -3.0);

    y.set_derivatives(vec![9.0]);
    assert_eq!(y.n_derivatives(), 1);
}

#[test]
fn derivative_of_constant_is_zero() {
    let c = AutoDiff::constant(4.0_f64);
    assert_eq!(c.derivative(0), 0.0);
    assert_eq!(c.derivative(17), 0.0);
}

#[test]
#[should_panic]
fn derivative_out_of_range_panics() {
    let x = AutoDiff::seed(1.0_f64, 2, 0);
    let _ = x.derivative(2);
}

#[test]
fn into_parts() {
    let (v, d) = AutoDiff::seed(2.0_f64, 2, 1).into_parts();
    assert_eq!(v, 2.0);
    assert_eq!(d, vec![0.0, 1.0]);
}

// ── Rendering ──

#[test]
fn display_format() {
    let z = AutoDiff::new(5.0_f64, vec![1.0, -1.0, 0.5]);
    assert_eq!(format!("{}", z), "(5, [1, -1, 0.5])");
    assert_eq!(format!("{}", AutoDiff::constant(1.5_f64)), "(1.5, [])");
}

#[test]
fn works_over_f32() {
    let x = AutoDiff32::seed(2.0, 2, 0);
    let y = &x * &x;
    assert_eq!(y.value, 4.0_f32);
    assert_eq!(y.derivatives, vec![4.0_f32, 0.0]);
}
