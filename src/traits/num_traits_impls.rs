use num_traits::{FromPrimitive, Inv, Num, NumCast, One, Signed, ToPrimitive, Zero};

use crate::autodiff::AutoDiff;
use crate::float::Float;
use crate::math;

impl<F: Float> Zero for AutoDiff<F> {
    #[inline]
    fn zero() -> Self {
        AutoDiff::constant(F::zero())
    }
    #[inline]
    fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
    #[inline]
    fn set_zero(&mut self) {
        self.set_constant(F::zero());
    }
}

impl<F: Float> One for AutoDiff<F> {
    #[inline]
    fn one() -> Self {
        AutoDiff::constant(F::one())
    }
    #[inline]
    fn set_one(&mut self) {
        self.set_constant(F::one());
    }
}

impl<F: Float> Num for AutoDiff<F> {
    type FromStrRadixErr = F::FromStrRadixErr;
    fn from_str_radix(str: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        F::from_str_radix(str, radix).map(AutoDiff::constant)
    }
}

impl<F: Float> FromPrimitive for AutoDiff<F> {
    #[inline]
    fn from_i64(n: i64) -> Option<Self> {
        F::from_i64(n).map(AutoDiff::constant)
    }
    #[inline]
    fn from_u64(n: u64) -> Option<Self> {
        F::from_u64(n).map(AutoDiff::constant)
    }
    #[inline]
    fn from_f32(n: f32) -> Option<Self> {
        F::from_f32(n).map(AutoDiff::constant)
    }
    #[inline]
    fn from_f64(n: f64) -> Option<Self> {
        F::from_f64(n).map(AutoDiff::constant)
    }
}

impl<F: Float> ToPrimitive for AutoDiff<F> {
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        self.value.to_i64()
    }
    #[inline]
    fn to_u64(&self) -> Option<u64> {
        self.value.to_u64()
    }
    #[inline]
    fn to_f32(&self) -> Option<f32> {
        self.value.to_f32()
    }
    #[inline]
    fn to_f64(&self) -> Option<f64> {
        self.value.to_f64()
    }
}

impl<F: Float> NumCast for AutoDiff<F> {
    #[inline]
    fn from<T: ToPrimitive>(n: T) -> Option<Self> {
        <F as NumCast>::from(n).map(AutoDiff::constant)
    }
}

impl<F: Float> Signed for AutoDiff<F> {
    #[inline]
    fn abs(&self) -> Self {
        math::abs(self)
    }
    #[inline]
    fn abs_sub(&self, other: &Self) -> Self {
        if self.value > other.value {
            self - other
        } else {
            Self::zero()
        }
    }
    #[inline]
    fn signum(&self) -> Self {
        self.chain(self.value.signum(), F::zero())
    }
    #[inline]
    fn is_positive(&self) -> bool {
        self.value.is_sign_positive()
    }
    #[inline]
    fn is_negative(&self) -> bool {
        self.value.is_sign_negative()
    }
}

impl<F: Float> Inv for AutoDiff<F> {
    type Output = Self;
    #[inline]
    fn inv(self) -> Self {
        math::recip(&self)
    }
}

impl<F: Float> Inv for &AutoDiff<F> {
    type Output = AutoDiff<F>;
    #[inline]
    fn inv(self) -> AutoDiff<F> {
        math::recip(self)
    }
}
