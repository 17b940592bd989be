//! `approx` comparisons for [`AutoDiff`].
//!
//! Unlike `PartialEq`, these compare the value *and* every derivative. A
//! constant compares equal to a number whose derivatives are all within
//! tolerance of zero; two different non-zero dimensions never compare equal.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::autodiff::AutoDiff;
use crate::float::Float;

fn all_derivatives<F: Float>(a: &AutoDiff<F>, b: &AutoDiff<F>, eq: impl Fn(F, F) -> bool) -> bool {
    match a.common_dimension(b) {
        Ok(n) => (0..n).all(|i| eq(a.derivative(i), b.derivative(i))),
        Err(_) => false,
    }
}

impl<F: Float> AbsDiffEq for AutoDiff<F>
where
    F: AbsDiffEq<Epsilon = F>,
{
    type Epsilon = F;

    #[inline]
    fn default_epsilon() -> F {
        F::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: F) -> bool {
        self.value.abs_diff_eq(&other.value, epsilon)
            && all_derivatives(self, other, |a, b| a.abs_diff_eq(&b, epsilon))
    }
}

impl<F: Float> RelativeEq for AutoDiff<F>
where
    F: RelativeEq<Epsilon = F>,
{
    #[inline]
    fn default_max_relative() -> F {
        F::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: F, max_relative: F) -> bool {
        self.value.relative_eq(&other.value, epsilon, max_relative)
            && all_derivatives(self, other, |a, b| a.relative_eq(&b, epsilon, max_relative))
    }
}

impl<F: Float> UlpsEq for AutoDiff<F>
where
    F: UlpsEq<Epsilon = F>,
{
    #[inline]
    fn default_max_ulps() -> u32 {
        F::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: F, max_ulps: u32) -> bool {
        self.value.ulps_eq(&other.value, epsilon, max_ulps)
            && all_derivatives(self, other, |a, b| a.ulps_eq(&b, epsilon, max_ulps))
    }
}
