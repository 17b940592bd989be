use crate::autodiff::AutoDiff;
use crate::float::Float;

/// Seed `x[i]` as parameter `i` of `x.len()`.
fn seeded<F: Float>(x: &[F]) -> Vec<AutoDiff<F>> {
    let n = x.len();
    x.iter()
        .enumerate()
        .map(|(i, &xi)| AutoDiff::seed(xi, n, i))
        .collect()
}

/// Gradient of `out` padded to `n` entries (a constant output has a zero gradient).
fn full_gradient<F: Float>(mut out: AutoDiff<F>, n: usize) -> Vec<F> {
    if out.is_constant() {
        out.resize(n);
    }
    out.derivatives
}

/// Value and gradient of a scalar function `f : Rⁿ → R` in one forward pass.
///
/// ```
/// let (v, g) = autodiff::gradient(|x| &x[0] * &x[0] + &x[1] * &x[1], &[3.0_f64, 4.0]);
/// assert!((v - 25.0).abs() < 1e-10);
/// assert!((g[0] - 6.0).abs() < 1e-10);
/// assert!((g[1] - 8.0).abs() < 1e-10);
/// ```
pub fn gradient<F: Float>(
    f: impl FnOnce(&[AutoDiff<F>]) -> AutoDiff<F>,
    x: &[F],
) -> (F, Vec<F>) {
    let n = x.len();
    tracing::debug!(n, "forward gradient");
    let inputs = seeded(x);
    let out = f(&inputs);
    let value = out.value;
    (value, full_gradient(out, n))
}

/// Full Jacobian of `f : Rⁿ → Rᵐ` in one forward pass.
///
/// Returns `(f(x), J)` where `J[i][j] = ∂f_i/∂x_j`.
pub fn jacobian<F: Float>(
    f: impl FnOnce(&[AutoDiff<F>]) -> Vec<AutoDiff<F>>,
    x: &[F],
) -> (Vec<F>, Vec<Vec<F>>) {
    let n = x.len();
    let inputs = seeded(x);
    let outputs = f(&inputs);
    tracing::debug!(n, m = outputs.len(), "forward jacobian");

    let values = outputs.iter().map(|y| y.value).collect();
    let jac = outputs.into_iter().map(|y| full_gradient(y, n)).collect();
    (values, jac)
}

/// Jacobian-vector product: `(f(x), J·v)`.
///
/// Every input carries a single tangent `v[i]`, so each output's one
/// derivative is its directional derivative along `v`.
///
/// # Panics
///
/// Panics if `x` and `v` differ in length.
pub fn jvp<F: Float>(
    f: impl FnOnce(&[AutoDiff<F>]) -> Vec<AutoDiff<F>>,
    x: &[F],
    v: &[F],
) -> (Vec<F>, Vec<F>) {
    assert_eq!(x.len(), v.len(), "x and v must have the same length");
    let inputs: Vec<AutoDiff<F>> = x
        .iter()
        .zip(v.iter())
        .map(|(&xi, &vi)| AutoDiff::new(xi, vec![vi]))
        .collect();
    let outputs = f(&inputs);
    let values = outputs.iter().map(|y| y.value).collect();
    let tangents = outputs.iter().map(|y| y.derivative(0)).collect();
    (values, tangents)
}
