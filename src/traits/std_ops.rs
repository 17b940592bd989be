use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

use crate::autodiff::AutoDiff;
use crate::float::Float;

// ──────────────────────────────────────────────
//  AutoDiff<F> ⊕ AutoDiff<F>
// ──────────────────────────────────────────────
//
// The compound assignment by reference is the only place the rules live; every
// other form clones or consumes its left operand and forwards to it.

macro_rules! impl_autodiff_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $try:ident) => {
        impl<F: Float> $OpAssign<&AutoDiff<F>> for AutoDiff<F> {
            #[inline]
            fn $op_assign(&mut self, rhs: &AutoDiff<F>) {
                if let Err(e) = self.$try(rhs) {
                    panic!("{}", e);
                }
            }
        }

        impl<F: Float> $OpAssign for AutoDiff<F> {
            #[inline]
            fn $op_assign(&mut self, rhs: AutoDiff<F>) {
                <Self as $OpAssign<&AutoDiff<F>>>::$op_assign(self, &rhs);
            }
        }

        impl<F: Float> $Op for AutoDiff<F> {
            type Output = AutoDiff<F>;
            #[inline]
            fn $op(mut self, rhs: AutoDiff<F>) -> AutoDiff<F> {
                <Self as $OpAssign<&AutoDiff<F>>>::$op_assign(&mut self, &rhs);
                self
            }
        }

        impl<F: Float> $Op<&AutoDiff<F>> for AutoDiff<F> {
            type Output = AutoDiff<F>;
            #[inline]
            fn $op(mut self, rhs: &AutoDiff<F>) -> AutoDiff<F> {
                <Self as $OpAssign<&AutoDiff<F>>>::$op_assign(&mut self, rhs);
                self
            }
        }

        impl<F: Float> $Op<AutoDiff<F>> for &AutoDiff<F> {
            type Output = AutoDiff<F>;
            #[inline]
            fn $op(self, rhs: AutoDiff<F>) -> AutoDiff<F> {
                let mut out = self.clone();
                <AutoDiff<F> as $OpAssign<&AutoDiff<F>>>::$op_assign(&mut out, &rhs);
                out
            }
        }

        impl<F: Float> $Op<&AutoDiff<F>> for &AutoDiff<F> {
            type Output = AutoDiff<F>;
            #[inline]
            fn $op(self, rhs: &AutoDiff<F>) -> AutoDiff<F> {
                let mut out = self.clone();
                <AutoDiff<F> as $OpAssign<&AutoDiff<F>>>::$op_assign(&mut out, rhs);
                out
            }
        }
    };
}

impl_autodiff_op!(Add, add, AddAssign, add_assign, try_add_assign);
impl_autodiff_op!(Sub, sub, SubAssign, sub_assign, try_sub_assign);
impl_autodiff_op!(Mul, mul, MulAssign, mul_assign, try_mul_assign);
impl_autodiff_op!(Div, div, DivAssign, div_assign, try_div_assign);
impl_autodiff_op!(Rem, rem, RemAssign, rem_assign, try_rem_assign);

impl<F: Float> Neg for AutoDiff<F> {
    type Output = AutoDiff<F>;
    #[inline]
    fn neg(mut self) -> AutoDiff<F> {
        self.value = -self.value;
        for d in &mut self.derivatives {
            *d = -*d;
        }
        self
    }
}

impl<F: Float> Neg for &AutoDiff<F> {
    type Output = AutoDiff<F>;
    #[inline]
    fn neg(self) -> AutoDiff<F> {
        -self.clone()
    }
}

// ──────────────────────────────────────────────
//  Mixed ops with primitive floats
// ──────────────────────────────────────────────
//
// The scalar becomes a constant and goes through the AutoDiff ⊕ AutoDiff path,
// on either side of the operator.

macro_rules! impl_scalar_op {
    ($f:ty, $Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl $OpAssign<$f> for AutoDiff<$f> {
            #[inline]
            fn $op_assign(&mut self, rhs: $f) {
                <Self as $OpAssign<&AutoDiff<$f>>>::$op_assign(self, &AutoDiff::constant(rhs));
            }
        }

        impl $Op<$f> for AutoDiff<$f> {
            type Output = AutoDiff<$f>;
            #[inline]
            fn $op(mut self, rhs: $f) -> AutoDiff<$f> {
                <Self as $OpAssign<$f>>::$op_assign(&mut self, rhs);
                self
            }
        }

        impl $Op<$f> for &AutoDiff<$f> {
            type Output = AutoDiff<$f>;
            #[inline]
            fn $op(self, rhs: $f) -> AutoDiff<$f> {
                let mut out = self.clone();
                <AutoDiff<$f> as $OpAssign<$f>>::$op_assign(&mut out, rhs);
                out
            }
        }

        impl $Op<AutoDiff<$f>> for $f {
            type Output = AutoDiff<$f>;
            #[inline]
            fn $op(self, rhs: AutoDiff<$f>) -> AutoDiff<$f> {
                let mut out = AutoDiff::constant(self);
                <AutoDiff<$f> as $OpAssign<&AutoDiff<$f>>>::$op_assign(&mut out, &rhs);
                out
            }
        }

        impl $Op<&AutoDiff<$f>> for $f {
            type Output = AutoDiff<$f>;
            #[inline]
            fn $op(self, rhs: &AutoDiff<$f>) -> AutoDiff<$f> {
                let mut out = AutoDiff::constant(self);
                <AutoDiff<$f> as $OpAssign<&AutoDiff<$f>>>::$op_assign(&mut out, rhs);
                out
            }
        }
    };
}

macro_rules! impl_scalar_ops {
    ($f:ty) => {
        impl_scalar_op!($f, Add, add, AddAssign, add_assign);
        impl_scalar_op!($f, Sub, sub, SubAssign, sub_assign);
        impl_scalar_op!($f, Mul, mul, MulAssign, mul_assign);
        impl_scalar_op!($f, Div, div, DivAssign, div_assign);
        impl_scalar_op!($f, Rem, rem, RemAssign, rem_assign);
    };
}

impl_scalar_ops!(f32);
impl_scalar_ops!(f64);

// ──────────────────────────────────────────────
//  Comparison (by value, like the primitive it wraps)
// ──────────────────────────────────────────────

impl<F: Float> PartialEq for AutoDiff<F> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<F: Float> PartialOrd for AutoDiff<F> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

// ──────────────────────────────────────────────
//  Iterator folds
// ──────────────────────────────────────────────

impl<F: Float> Sum for AutoDiff<F> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(AutoDiff::constant(F::zero()), |acc, x| acc + x)
    }
}

impl<'a, F: Float> Sum<&'a AutoDiff<F>> for AutoDiff<F> {
    fn sum<I: Iterator<Item = &'a AutoDiff<F>>>(iter: I) -> Self {
        iter.fold(AutoDiff::constant(F::zero()), |acc, x| acc + x)
    }
}

impl<F: Float> Product for AutoDiff<F> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(AutoDiff::constant(F::one()), |acc, x| acc * x)
    }
}

impl<'a, F: Float> Product<&'a AutoDiff<F>> for AutoDiff<F> {
    fn product<I: Iterator<Item = &'a AutoDiff<F>>>(iter: I) -> Self {
        iter.fold(AutoDiff::constant(F::one()), |acc, x| acc * x)
    }
}
