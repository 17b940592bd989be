//! Forward-mode AD number with a runtime-sized gradient.
//!
//! [`AutoDiff<F>`] carries a value together with `∂value/∂pᵢ` for `n`
//! independent parameters `p₀ … pₙ₋₁`. The dimension is chosen at runtime, so
//! the same type serves a two-parameter fit and a thousand-parameter one.
//!
//! A zero-length derivative vector marks a *constant*. Constants combine with
//! numbers of any dimension: their missing derivatives count as zero.

use std::fmt::{self, Display};

use crate::error::{AutoDiffError, Result};
use crate::Float;

/// Forward-mode AD number: a value and its gradient.
///
/// `AutoDiff { value, derivatives }` represents `value` with
/// `derivatives[i] = ∂value/∂pᵢ`. Copies are deep; no two instances share a
/// derivative vector.
#[derive(Clone, Debug, Default)]
pub struct AutoDiff<F: Float> {
    /// Primal value.
    pub value: F,
    /// Partial derivatives, one per independent parameter. Empty for a constant.
    pub derivatives: Vec<F>,
}

impl<F: Float> Display for AutoDiff<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, [", self.value)?;
        for (i, d) in self.derivatives.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", d)?;
        }
        f.write_str("])")
    }
}

impl<F: Float> From<F> for AutoDiff<F> {
    #[inline]
    fn from(value: F) -> Self {
        AutoDiff::constant(value)
    }
}

impl<F: Float> AutoDiff<F> {
    /// Create a number with an explicit gradient; its length sets the dimension.
    #[inline]
    pub fn new(value: F, derivatives: impl Into<Vec<F>>) -> Self {
        AutoDiff {
            value,
            derivatives: derivatives.into(),
        }
    }

    /// Create a constant (no tracked derivatives).
    #[inline]
    pub fn constant(value: F) -> Self {
        AutoDiff {
            value,
            derivatives: Vec::new(),
        }
    }

    /// Create the `index`-th of `total` independent parameters.
    ///
    /// # Panics
    ///
    /// Panics if `index >= total`. See [`AutoDiff::try_seed`].
    pub fn seed(value: F, total: usize, index: usize) -> Self {
        match Self::try_seed(value, total, index) {
            Ok(x) => x,
            Err(e) => panic!("{}", e),
        }
    }

    /// Fallible form of [`AutoDiff::seed`].
    pub fn try_seed(value: F, total: usize, index: usize) -> Result<Self> {
        if index >= total {
            tracing::debug!(index, total, "rejecting out-of-range seed");
            return Err(AutoDiffError::SeedOutOfRange { index, total });
        }
        let mut derivatives = vec![F::zero(); total];
        derivatives[index] = F::one();
        Ok(AutoDiff { value, derivatives })
    }

    /// Number of tracked parameters.
    #[inline]
    pub fn n_derivatives(&self) -> usize {
        self.derivatives.len()
    }

    /// `true` iff no derivatives are tracked.
    #[inline]
    pub fn is_constant(&self) -> bool {
        self.derivatives.is_empty()
    }

    /// `∂value/∂pᵢ`. A constant reports zero for every `i`.
    ///
    /// # Panics
    ///
    /// Panics if the number is not constant and `i >= n_derivatives()`.
    #[inline]
    pub fn derivative(&self, i: usize) -> F {
        if self.is_constant() {
            F::zero()
        } else {
            self.derivatives[i]
        }
    }

    /// Replace the value and drop every derivative, turning `self` into a constant.
    pub fn set_constant(&mut self, value: F) {
        self.value = value;
        self.derivatives.clear();
    }

    /// Replace the whole gradient. A different length changes the dimension.
    pub fn set_derivatives(&mut self, derivatives: impl Into<Vec<F>>) {
        self.derivatives = derivatives.into();
    }

    /// Change the dimension to `n`, keeping the first `min(old, n)` entries and
    /// zero-filling the rest.
    pub fn resize(&mut self, n: usize) {
        tracing::trace!(from = self.derivatives.len(), to = n, "resizing derivatives");
        self.derivatives.resize(n, F::zero());
    }

    /// Split into `(value, derivatives)`.
    #[inline]
    pub fn into_parts(self) -> (F, Vec<F>) {
        (self.value, self.derivatives)
    }

    /// Dimension of the result of combining `self` with `other`.
    ///
    /// A constant adopts the other operand's dimension; two non-constant
    /// operands must agree.
    pub fn common_dimension(&self, other: &Self) -> Result<usize> {
        let (lhs, rhs) = (self.n_derivatives(), other.n_derivatives());
        match (lhs, rhs) {
            (0, n) | (n, 0) => Ok(n),
            _ if lhs == rhs => Ok(lhs),
            _ => {
                tracing::debug!(lhs, rhs, "derivative dimension mismatch");
                Err(AutoDiffError::DimensionMismatch { lhs, rhs })
            }
        }
    }

    /// Apply the chain rule: given `f(self.value)` and `f'(self.value)`, produce the result.
    #[inline]
    pub(crate) fn chain(&self, f_val: F, f_deriv: F) -> Self {
        AutoDiff {
            value: f_val,
            derivatives: self.derivatives.iter().map(|&d| d * f_deriv).collect(),
        }
    }

    /// Combine `self` with `rhs` in place, giving the result `value`.
    ///
    /// Derivative entries are produced by `both(dx, dy)` when both operands
    /// track derivatives, `lhs_only(dx)` when `rhs` is constant and
    /// `rhs_only(dy)` when `self` is constant. Terms belonging to a constant
    /// are never evaluated. Nothing is mutated if the dimensions clash.
    pub(crate) fn combine(
        &mut self,
        rhs: &Self,
        value: F,
        lhs_only: impl Fn(F) -> F,
        rhs_only: impl Fn(F) -> F,
        both: impl Fn(F, F) -> F,
    ) -> Result<()> {
        self.common_dimension(rhs)?;
        match (self.is_constant(), rhs.is_constant()) {
            (true, true) => {}
            (false, true) => {
                for d in &mut self.derivatives {
                    *d = lhs_only(*d);
                }
            }
            (true, false) => {
                tracing::trace!(n = rhs.n_derivatives(), "widening constant operand");
                self.derivatives = rhs.derivatives.iter().map(|&dy| rhs_only(dy)).collect();
            }
            (false, false) => {
                for (d, &dy) in self.derivatives.iter_mut().zip(&rhs.derivatives) {
                    *d = both(*d, dy);
                }
            }
        }
        self.value = value;
        Ok(())
    }

    // -- Compound assignment --

    /// `self += rhs`, or an error if the dimensions clash.
    pub fn try_add_assign(&mut self, rhs: &Self) -> Result<()> {
        let value = self.value + rhs.value;
        self.combine(rhs, value, |dx| dx, |dy| dy, |dx, dy| dx + dy)
    }

    /// `self -= rhs`, or an error if the dimensions clash.
    pub fn try_sub_assign(&mut self, rhs: &Self) -> Result<()> {
        let value = self.value - rhs.value;
        self.combine(rhs, value, |dx| dx, |dy| -dy, |dx, dy| dx - dy)
    }

    /// `self *= rhs` (product rule), or an error if the dimensions clash.
    pub fn try_mul_assign(&mut self, rhs: &Self) -> Result<()> {
        let (x, y) = (self.value, rhs.value);
        self.combine(
            rhs,
            x * y,
            |dx| dx * y,
            |dy| x * dy,
            |dx, dy| dx * y + x * dy,
        )
    }

    /// `self /= rhs` (quotient rule), or an error if the dimensions clash.
    ///
    /// Division by zero follows `F`'s own semantics.
    pub fn try_div_assign(&mut self, rhs: &Self) -> Result<()> {
        let y = rhs.value;
        let ratio = self.value / y;
        self.combine(
            rhs,
            ratio,
            |dx| dx / y,
            |dy| -(ratio * dy) / y,
            |dx, dy| (dx - ratio * dy) / y,
        )
    }

    /// `self %= rhs` (floating remainder), or an error if the dimensions clash.
    pub fn try_rem_assign(&mut self, rhs: &Self) -> Result<()> {
        let (x, y) = (self.value, rhs.value);
        let q = (x / y).trunc();
        self.combine(rhs, x % y, |dx| dx, |dy| -(q * dy), |dx, dy| dx - q * dy)
    }
}
