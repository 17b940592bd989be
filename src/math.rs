//! Chain-rule propagation for the elementary functions.
//!
//! Every unary function returns `y` with `y.value = f(x.value)` and
//! `y.derivatives[i] = f'(x.value) · x.derivatives[i]`, so `y` keeps the
//! dimension of `x`. Nothing here validates domains: whatever `F` yields for
//! `ln(-1)` or `acos(2)` is propagated as-is.
//!
//! Binary functions accept two [`AutoDiff`] operands of compatible dimension
//! (a constant adapts to the other operand). The `scalar_*` / `*_scalar`
//! forms take one plain `F` and treat it as a constant.

use crate::autodiff::AutoDiff;
use crate::error::Result;
use crate::Float;

// -- Trig --

pub fn sin<F: Float>(x: &AutoDiff<F>) -> AutoDiff<F> {
    x.chain(x.value.sin(), x.value.cos())
}

pub fn cos<F: Float>(x: &AutoDiff<F>) -> AutoDiff<F> {
    x.chain(x.value.cos(), -x.value.sin())
}

/// `d tan(x) = dx / cos²(x)`
pub fn tan<F: Float>(x: &AutoDiff<F>) -> AutoDiff<F> {
    let c = x.value.cos();
    x.chain(x.value.tan(), F::one() / (c * c))
}

pub fn asin<F: Float>(x: &AutoDiff<F>) -> AutoDiff<F> {
    let v = x.value;
    x.chain(v.asin(), F::one() / (F::one() - v * v).sqrt())
}

pub fn acos<F: Float>(x: &AutoDiff<F>) -> AutoDiff<F> {
    let v = x.value;
    x.chain(v.acos(), -F::one() / (F::one() - v * v).sqrt())
}

pub fn atan<F: Float>(x: &AutoDiff<F>) -> AutoDiff<F> {
    let v = x.value;
    x.chain(v.atan(), F::one() / (F::one() + v * v))
}

// -- Hyperbolic --

pub fn sinh<F: Float>(x: &AutoDiff<F>) -> AutoDiff<F> {
    x.chain(x.value.sinh(), x.value.cosh())
}

pub fn cosh<F: Float>(x: &AutoDiff<F>) -> AutoDiff<F> {
    x.chain(x.value.cosh(), x.value.sinh())
}

pub fn tanh<F: Float>(x: &AutoDiff<F>) -> AutoDiff<F> {
    let c = x.value.cosh();
    x.chain(x.value.tanh(), F::one() / (c * c))
}

// -- Exp/Log --

pub fn exp<F: Float>(x: &AutoDiff<F>) -> AutoDiff<F> {
    let e = x.value.exp();
    x.chain(e, e)
}

/// Natural logarithm.
pub fn ln<F: Float>(x: &AutoDiff<F>) -> AutoDiff<F> {
    x.chain(x.value.ln(), F::one() / x.value)
}

pub fn log10<F: Float>(x: &AutoDiff<F>) -> AutoDiff<F> {
    x.chain(x.value.log10(), F::one() / (x.value * F::LN_10()))
}

// -- Powers --

/// `d √x = 0.5 / √x · dx`
pub fn sqrt<F: Float>(x: &AutoDiff<F>) -> AutoDiff<F> {
    let s = x.value.sqrt();
    let half = F::one() / (F::one() + F::one());
    x.chain(s, half / s)
}

pub fn recip<F: Float>(x: &AutoDiff<F>) -> AutoDiff<F> {
    let inv = F::one() / x.value;
    x.chain(inv, -inv * inv)
}

pub fn square<F: Float>(x: &AutoDiff<F>) -> AutoDiff<F> {
    let v = x.value;
    x.chain(v * v, (F::one() + F::one()) * v)
}

pub fn cube<F: Float>(x: &AutoDiff<F>) -> AutoDiff<F> {
    let v = x.value;
    let three = F::one() + F::one() + F::one();
    x.chain(v * v * v, three * v * v)
}

/// `x^c` for a constant exponent: `d = c · x^(c−1) · dx`.
///
/// Bit-for-bit identical to [`pow`] with `AutoDiff::constant(c)` as exponent.
pub fn pow_scalar<F: Float>(x: &AutoDiff<F>, c: F) -> AutoDiff<F> {
    x.chain(x.value.powf(c), c * x.value.powf(c - F::one()))
}

/// `c^z` for a constant base: `d = c^z · ln(c) · dz`.
pub fn scalar_pow<F: Float>(c: F, z: &AutoDiff<F>) -> AutoDiff<F> {
    pow(&AutoDiff::constant(c), z)
}

/// General power `w^z`.
///
/// `d = z · w^(z−1) · dw + w^z · ln(w) · dz`; the `ln(w)` term is skipped
/// entirely when `z` is constant.
///
/// # Panics
///
/// Panics if `w` and `z` have different non-zero dimensions.
pub fn pow<F: Float>(w: &AutoDiff<F>, z: &AutoDiff<F>) -> AutoDiff<F> {
    match try_pow(w, z) {
        Ok(y) => y,
        Err(e) => panic!("{}", e),
    }
}

/// Fallible form of [`pow`].
pub fn try_pow<F: Float>(w: &AutoDiff<F>, z: &AutoDiff<F>) -> Result<AutoDiff<F>> {
    let (wv, zv) = (w.value, z.value);
    let value = wv.powf(zv);
    let dw_coeff = zv * wv.powf(zv - F::one());
    let dz_coeff = value * wv.ln();
    let mut out = w.clone();
    out.combine(
        z,
        value,
        |dw| dw_coeff * dw,
        |dz| dz_coeff * dz,
        |dw, dz| dw_coeff * dw + dz_coeff * dz,
    )?;
    Ok(out)
}

// -- Two-argument arctangent --

/// `atan2(w, z)`, differentiated as `atan(w / z)`:
///
/// `d = (dw/z − w·dz/z²) / (1 + w²/z²)`
///
/// # Panics
///
/// Panics if `w` and `z` have different non-zero dimensions.
pub fn atan2<F: Float>(w: &AutoDiff<F>, z: &AutoDiff<F>) -> AutoDiff<F> {
    match try_atan2(w, z) {
        Ok(y) => y,
        Err(e) => panic!("{}", e),
    }
}

/// Fallible form of [`atan2`].
pub fn try_atan2<F: Float>(w: &AutoDiff<F>, z: &AutoDiff<F>) -> Result<AutoDiff<F>> {
    let (wv, zv) = (w.value, z.value);
    let zz = zv * zv;
    let denom = F::one() + wv * wv / zz;
    let mut out = w.clone();
    out.combine(
        z,
        wv.atan2(zv),
        |dw| (dw / zv) / denom,
        |dz| -(wv * dz / zz) / denom,
        |dw, dz| (dw / zv - wv * dz / zz) / denom,
    )?;
    Ok(out)
}

pub fn atan2_scalar<F: Float>(w: &AutoDiff<F>, z: F) -> AutoDiff<F> {
    atan2(w, &AutoDiff::constant(z))
}

pub fn scalar_atan2<F: Float>(w: F, z: &AutoDiff<F>) -> AutoDiff<F> {
    atan2(&AutoDiff::constant(w), z)
}

// -- Misc --

/// `|x|`, differentiated with `signum(x)`.
pub fn abs<F: Float>(x: &AutoDiff<F>) -> AutoDiff<F> {
    x.chain(x.value.abs(), x.value.signum())
}

/// Piecewise constant: value floored, every derivative zero (dimension kept).
pub fn floor<F: Float>(x: &AutoDiff<F>) -> AutoDiff<F> {
    x.chain(x.value.floor(), F::zero())
}

pub fn ceil<F: Float>(x: &AutoDiff<F>) -> AutoDiff<F> {
    x.chain(x.value.ceil(), F::zero())
}

/// The operand with the larger value; ties go to `a`.
pub fn max<F: Float>(a: &AutoDiff<F>, b: &AutoDiff<F>) -> AutoDiff<F> {
    if a.value >= b.value {
        a.clone()
    } else {
        b.clone()
    }
}

/// The operand with the smaller value; ties go to `a`.
pub fn min<F: Float>(a: &AutoDiff<F>, b: &AutoDiff<F>) -> AutoDiff<F> {
    if a.value <= b.value {
        a.clone()
    } else {
        b.clone()
    }
}

// ──────────────────────────────────────────────
//  Method forms
// ──────────────────────────────────────────────

macro_rules! unary_methods {
    ($($name:ident),* $(,)?) => {
        impl<F: Float> AutoDiff<F> {
            $(
                #[inline]
                pub fn $name(&self) -> Self {
                    $name(self)
                }
            )*
        }
    };
}

unary_methods!(
    sin, cos, tan, asin, acos, atan, sinh, cosh, tanh, exp, ln, log10, sqrt, recip, square,
    cube, abs, floor, ceil,
);

impl<F: Float> AutoDiff<F> {
    /// `self^c` for a constant exponent. See [`pow_scalar`].
    #[inline]
    pub fn powf(&self, c: F) -> Self {
        pow_scalar(self, c)
    }

    /// `self^exponent`. See [`pow`].
    #[inline]
    pub fn pow(&self, exponent: &Self) -> Self {
        pow(self, exponent)
    }

    /// `atan2(self, other)`. See [`atan2`].
    #[inline]
    pub fn atan2(&self, other: &Self) -> Self {
        atan2(self, other)
    }

    #[inline]
    pub fn max(&self, other: &Self) -> Self {
        max(self, other)
    }

    #[inline]
    pub fn min(&self, other: &Self) -> Self {
        min(self, other)
    }

    #[inline]
    pub fn is_nan(&self) -> bool {
        self.value.is_nan()
    }

    #[inline]
    pub fn is_infinite(&self) -> bool {
        self.value.is_infinite()
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.value.is_finite()
    }
}
