//! Scalar abstraction the kernels are generic over.
//!
//! `f32` and `f64` take their elementary functions from `libm`; the extended
//! precision is [`DoubleDouble`] with its own primitives.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Neg, Sub};

use super::dd::DoubleDouble;
use super::precision::Precision;
use super::tables::{DOUBLE, EXTENDED, SINGLE};

pub trait Real:
    Copy
    + Debug
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + 'static
{
    const ZERO: Self;
    const ONE: Self;
    const HALF: Self;
    const INFINITY: Self;
    const NEG_INFINITY: Self;
    const NAN: Self;

    /// Coefficients and thresholds tuned for this format.
    const PRECISION: &'static Precision<Self>;

    /// Exact for the small integers and dyadic constants the kernels use.
    fn from_f64(x: f64) -> Self;
    fn to_f64(self) -> f64;

    fn is_nan(self) -> bool;
    fn is_infinite(self) -> bool;
    fn is_sign_negative(self) -> bool;

    fn abs(self) -> Self;
    fn floor(self) -> Self;
    /// `self = m * 2^e`, `0.5 <= |m| < 1`.
    fn frexp(self) -> (Self, i32);
    fn ldexp(self, n: i32) -> Self;

    fn exp(self) -> Self;
    fn ln(self) -> Self;
    fn sin(self) -> Self;
    fn pow(self, y: Self) -> Self;

    #[inline(always)]
    fn is_finite(self) -> bool {
        !self.is_nan() && !self.is_infinite()
    }

    /// Parity of an integral value.
    #[inline]
    fn is_even(self) -> bool {
        let h = self * Self::HALF;
        h.floor() == h
    }
}

impl Real for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const HALF: Self = 0.5;
    const INFINITY: Self = f32::INFINITY;
    const NEG_INFINITY: Self = f32::NEG_INFINITY;
    const NAN: Self = f32::NAN;
    const PRECISION: &'static Precision<Self> = &SINGLE;

    #[inline(always)]
    fn from_f64(x: f64) -> Self {
        x as f32
    }
    #[inline(always)]
    fn to_f64(self) -> f64 {
        self as f64
    }
    #[inline(always)]
    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }
    #[inline(always)]
    fn is_infinite(self) -> bool {
        f32::is_infinite(self)
    }
    #[inline(always)]
    fn is_sign_negative(self) -> bool {
        f32::is_sign_negative(self)
    }
    #[inline(always)]
    fn abs(self) -> Self {
        libm::fabsf(self)
    }
    #[inline(always)]
    fn floor(self) -> Self {
        libm::floorf(self)
    }
    #[inline(always)]
    fn frexp(self) -> (Self, i32) {
        libm::frexpf(self)
    }
    #[inline(always)]
    fn ldexp(self, n: i32) -> Self {
        libm::ldexpf(self, n)
    }
    #[inline(always)]
    fn exp(self) -> Self {
        libm::expf(self)
    }
    #[inline(always)]
    fn ln(self) -> Self {
        libm::logf(self)
    }
    #[inline(always)]
    fn sin(self) -> Self {
        libm::sinf(self)
    }
    #[inline(always)]
    fn pow(self, y: Self) -> Self {
        libm::powf(self, y)
    }
}

impl Real for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const HALF: Self = 0.5;
    const INFINITY: Self = f64::INFINITY;
    const NEG_INFINITY: Self = f64::NEG_INFINITY;
    const NAN: Self = f64::NAN;
    const PRECISION: &'static Precision<Self> = &DOUBLE;

    #[inline(always)]
    fn from_f64(x: f64) -> Self {
        x
    }
    #[inline(always)]
    fn to_f64(self) -> f64 {
        self
    }
    #[inline(always)]
    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }
    #[inline(always)]
    fn is_infinite(self) -> bool {
        f64::is_infinite(self)
    }
    #[inline(always)]
    fn is_sign_negative(self) -> bool {
        f64::is_sign_negative(self)
    }
    #[inline(always)]
    fn abs(self) -> Self {
        libm::fabs(self)
    }
    #[inline(always)]
    fn floor(self) -> Self {
        libm::floor(self)
    }
    #[inline(always)]
    fn frexp(self) -> (Self, i32) {
        libm::frexp(self)
    }
    #[inline(always)]
    fn ldexp(self, n: i32) -> Self {
        libm::ldexp(self, n)
    }
    #[inline(always)]
    fn exp(self) -> Self {
        libm::exp(self)
    }
    #[inline(always)]
    fn ln(self) -> Self {
        libm::log(self)
    }
    #[inline(always)]
    fn sin(self) -> Self {
        libm::sin(self)
    }
    #[inline(always)]
    fn pow(self, y: Self) -> Self {
        libm::pow(self, y)
    }
}

impl Real for DoubleDouble {
    const ZERO: Self = DoubleDouble::ZERO;
    const ONE: Self = DoubleDouble::ONE;
    const HALF: Self = DoubleDouble::HALF;
    const INFINITY: Self = DoubleDouble::INFINITY;
    const NEG_INFINITY: Self = DoubleDouble::NEG_INFINITY;
    const NAN: Self = DoubleDouble::NAN;
    const PRECISION: &'static Precision<Self> = &EXTENDED;

    #[inline(always)]
    fn from_f64(x: f64) -> Self {
        DoubleDouble::from_f64(x)
    }
    #[inline(always)]
    fn to_f64(self) -> f64 {
        DoubleDouble::to_f64(self)
    }
    #[inline(always)]
    fn is_nan(self) -> bool {
        DoubleDouble::is_nan(self)
    }
    #[inline(always)]
    fn is_infinite(self) -> bool {
        DoubleDouble::is_infinite(self)
    }
    #[inline(always)]
    fn is_sign_negative(self) -> bool {
        DoubleDouble::is_sign_negative(self)
    }
    #[inline(always)]
    fn abs(self) -> Self {
        DoubleDouble::abs(self)
    }
    #[inline(always)]
    fn floor(self) -> Self {
        DoubleDouble::floor(self)
    }
    #[inline(always)]
    fn frexp(self) -> (Self, i32) {
        DoubleDouble::frexp(self)
    }
    #[inline(always)]
    fn ldexp(self, n: i32) -> Self {
        DoubleDouble::ldexp(self, n)
    }
    #[inline(always)]
    fn exp(self) -> Self {
        DoubleDouble::exp(self)
    }
    #[inline(always)]
    fn ln(self) -> Self {
        DoubleDouble::ln(self)
    }
    #[inline(always)]
    fn sin(self) -> Self {
        DoubleDouble::sin(self)
    }
    #[inline(always)]
    fn pow(self, y: Self) -> Self {
        DoubleDouble::pow(self, y)
    }
}
