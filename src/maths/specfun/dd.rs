//! Double-double arithmetic: the unevaluated sum `hi + lo`, `|lo| <= ulp(hi)/2`.
//!
//! Hosts the extended precision (about 106 significand bits, f64 exponent
//! range). Products use Dekker's split so no hardware FMA is required.

use core::ops::{Add, Div, Mul, Neg, Sub};

const SPLITTER: f64 = 134_217_729.0; // 2^27 + 1
const SPLIT_LIMIT: f64 = 6.696_928_794_914_170_8e299; // 2^996
const TWO_M28: f64 = 3.725_290_298_461_914e-9; // 2^-28
const TWO_28: f64 = 268_435_456.0; // 2^28

const EXP_OVERFLOW: f64 = 709.79;
const EXP_UNDERFLOW: f64 = -745.2;
const EXP_SQUARINGS: u32 = 10;
const EXP_REDUCE: f64 = 9.765_625e-4; // 2^-10
const FRAC_1_SQRT_2: f64 = core::f64::consts::FRAC_1_SQRT_2;

/// `s = a + b` exactly as `s + e`.
#[inline(always)]
pub(crate) fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let bb = s - a;
    let e = (a - (s - bb)) + (b - bb);
    (s, e)
}

/// [`two_sum`] for `|a| >= |b|`.
#[inline(always)]
pub(crate) fn fast_two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let e = b - (s - a);
    (s, e)
}

#[inline(always)]
fn split(a: f64) -> (f64, f64) {
    if libm::fabs(a) > SPLIT_LIMIT {
        let s = a * TWO_M28;
        let t = SPLITTER * s;
        let hi = t - (t - s);
        let lo = s - hi;
        (hi * TWO_28, lo * TWO_28)
    } else {
        let t = SPLITTER * a;
        let hi = t - (t - a);
        (hi, a - hi)
    }
}

/// `a * b` exactly as `p + e` (barring underflow).
#[inline(always)]
pub(crate) fn two_prod(a: f64, b: f64) -> (f64, f64) {
    let p = a * b;
    let (ah, al) = split(a);
    let (bh, bl) = split(b);
    let e = ((ah * bh - p) + ah * bl + al * bh) + al * bl;
    (p, if e.is_finite() { e } else { 0.0 })
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct DoubleDouble {
    hi: f64,
    lo: f64,
}

pub(crate) const LN2: DoubleDouble = DoubleDouble::from_parts(
    f64::from_bits(0x3fe6_2e42_fefa_39ef),
    f64::from_bits(0x3c7a_bc9e_3b39_803f),
);

pub(crate) const FRAC_PI_2: DoubleDouble = DoubleDouble::from_parts(
    f64::from_bits(0x3ff9_21fb_5444_2d18),
    f64::from_bits(0x3c91_a626_3314_5c07),
);

impl DoubleDouble {
    pub const ZERO: Self = Self::from_f64(0.0);
    pub const ONE: Self = Self::from_f64(1.0);
    pub const HALF: Self = Self::from_f64(0.5);
    pub const INFINITY: Self = Self::from_f64(f64::INFINITY);
    pub const NEG_INFINITY: Self = Self::from_f64(f64::NEG_INFINITY);
    pub const NAN: Self = Self::from_f64(f64::NAN);
    pub const MAX: Self = Self::from_f64(f64::MAX);
    pub const MIN_POSITIVE: Self = Self::from_f64(f64::MIN_POSITIVE);

    /// Caller guarantees `hi == hi + lo` in f64.
    #[inline(always)]
    pub(crate) const fn from_parts(hi: f64, lo: f64) -> Self {
        Self { hi, lo }
    }

    #[inline(always)]
    pub const fn from_f64(x: f64) -> Self {
        Self { hi: x, lo: 0.0 }
    }

    /// Normalizes an arbitrary pair.
    #[inline]
    pub fn new(hi: f64, lo: f64) -> Self {
        let (hi, lo) = two_sum(hi, lo);
        Self { hi, lo }
    }

    #[inline(always)]
    pub const fn hi(self) -> f64 {
        self.hi
    }

    #[inline(always)]
    pub const fn lo(self) -> f64 {
        self.lo
    }

    /// Nearest f64.
    #[inline(always)]
    pub fn to_f64(self) -> f64 {
        self.hi + self.lo
    }

    #[inline(always)]
    pub fn is_nan(self) -> bool {
        self.hi.is_nan()
    }

    #[inline(always)]
    pub fn is_infinite(self) -> bool {
        self.hi.is_infinite()
    }

    #[inline(always)]
    pub fn is_finite(self) -> bool {
        self.hi.is_finite()
    }

    #[inline(always)]
    pub fn is_sign_negative(self) -> bool {
        self.hi.is_sign_negative()
    }

    #[inline]
    pub fn abs(self) -> Self {
        if self.hi.is_sign_negative() { -self } else { self }
    }

    #[inline]
    pub(crate) fn mul_f64(self, b: f64) -> Self {
        let (p, e) = two_prod(self.hi, b);
        if !p.is_finite() || p == 0.0 {
            return Self::from_f64(p);
        }
        let (hi, lo) = fast_two_sum(p, e + self.lo * b);
        Self { hi, lo }
    }

    #[inline]
    pub fn floor(self) -> Self {
        let hi = libm::floor(self.hi);
        if hi != self.hi {
            // A fractional head keeps `hi + lo` inside the same unit interval.
            return Self::from_f64(hi);
        }
        let (hi, lo) = fast_two_sum(hi, libm::floor(self.lo));
        Self { hi, lo }
    }

    /// `self = m * 2^e` with `0.5 <= |m| < 1`; zero and non-finite values
    /// return `(self, 0)`.
    pub fn frexp(self) -> (Self, i32) {
        if self.hi == 0.0 || !self.hi.is_finite() {
            return (self, 0);
        }
        let (hi, e) = libm::frexp(self.hi);
        let lo = libm::ldexp(self.lo, -e);
        // A head of exactly ±0.5 with an opposing tail lies below 0.5.
        if (hi == 0.5 && lo < 0.0) || (hi == -0.5 && lo > 0.0) {
            return (Self::from_parts(2.0 * hi, 2.0 * lo), e - 1);
        }
        (Self::from_parts(hi, lo), e)
    }

    #[inline]
    pub fn ldexp(self, n: i32) -> Self {
        Self::from_parts(libm::scalbn(self.hi, n), libm::scalbn(self.lo, n))
    }

    pub fn exp(self) -> Self {
        if self.hi.is_nan() {
            return self;
        }
        if self.hi > EXP_OVERFLOW {
            return Self::INFINITY;
        }
        if self.hi < EXP_UNDERFLOW {
            return Self::ZERO;
        }
        let k = libm::round(self.hi / LN2.hi);
        let r = (self - LN2.mul_f64(k)).mul_f64(EXP_REDUCE);

        // expm1(r) by Taylor series to r^9, then expm1(2r) = s (s + 2) per doubling.
        let mut s = r / Self::from_f64(9.0);
        for n in (2..=8).rev() {
            s = (r / Self::from_f64(n as f64)) * (Self::ONE + s);
        }
        s = r * (Self::ONE + s);
        let two = Self::from_f64(2.0);
        for _ in 0..EXP_SQUARINGS {
            s = s * (s + two);
        }
        (s + Self::ONE).ldexp(k as i32)
    }

    /// Natural logarithm; negative arguments give NaN.
    pub fn ln(self) -> Self {
        if self.hi.is_nan() || self.hi < 0.0 {
            return Self::NAN;
        }
        if self.hi == 0.0 {
            return Self::NEG_INFINITY;
        }
        if self.hi.is_infinite() {
            return Self::INFINITY;
        }
        let (mut m, mut e) = self.frexp();
        if m.hi < FRAC_1_SQRT_2 {
            m = m.ldexp(1);
            e -= 1;
        }
        // One Newton step on exp(y) = m doubles the f64 seed's accuracy.
        let y = Self::from_f64(libm::log(m.hi));
        let y = y + m * (-y).exp() - Self::ONE;
        y + LN2.mul_f64(e as f64)
    }

    /// Sine; reduction by `π/2` in double-double, accurate for moderate
    /// arguments.
    pub fn sin(self) -> Self {
        if !self.hi.is_finite() {
            return Self::NAN;
        }
        if self.hi == 0.0 {
            return self;
        }
        let k = libm::round(self.hi / FRAC_PI_2.hi);
        let r = self - FRAC_PI_2.mul_f64(k);
        let r2 = r * r;
        match (k as i64) & 3 {
            0 => sin_series(r, r2),
            1 => cos_series(r2),
            2 => -sin_series(r, r2),
            _ => -cos_series(r2),
        }
    }

    /// `self^y` for a positive base.
    pub fn pow(self, y: Self) -> Self {
        if self.is_nan() || y.is_nan() {
            return Self::NAN;
        }
        if y.hi == 0.0 || self == Self::ONE {
            return Self::ONE;
        }
        if self.hi <= 0.0 {
            return Self::NAN;
        }
        (y * self.ln()).exp()
    }
}

const SERIES_TERMS: u32 = 14;

/// `sin r` for `|r| <= π/4`, through `r^29`.
fn sin_series(r: DoubleDouble, r2: DoubleDouble) -> DoubleDouble {
    let mut s = DoubleDouble::ONE;
    for i in (1..=SERIES_TERMS).rev() {
        let d = (2 * i * (2 * i + 1)) as f64;
        s = DoubleDouble::ONE - r2 * s / DoubleDouble::from_f64(d);
    }
    r * s
}

/// `cos r` for `|r| <= π/4`, through `r^28`.
fn cos_series(r2: DoubleDouble) -> DoubleDouble {
    let mut s = DoubleDouble::ONE;
    for i in (1..=SERIES_TERMS).rev() {
        let d = ((2 * i - 1) * (2 * i)) as f64;
        s = DoubleDouble::ONE - r2 * s / DoubleDouble::from_f64(d);
    }
    s
}

impl Add for DoubleDouble {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        let (s, e) = two_sum(self.hi, rhs.hi);
        if !s.is_finite() {
            return Self::from_f64(s);
        }
        let (t, f) = two_sum(self.lo, rhs.lo);
        let (s, e) = fast_two_sum(s, e + t);
        let (hi, lo) = fast_two_sum(s, e + f);
        Self { hi, lo }
    }
}

impl Sub for DoubleDouble {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl Mul for DoubleDouble {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let (p, e) = two_prod(self.hi, rhs.hi);
        if !p.is_finite() || p == 0.0 {
            return Self::from_f64(p);
        }
        let e = e + (self.hi * rhs.lo + self.lo * rhs.hi);
        let (hi, lo) = fast_two_sum(p, e);
        Self { hi, lo }
    }
}

impl Div for DoubleDouble {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        let q1 = self.hi / rhs.hi;
        if !q1.is_finite() || q1 == 0.0 {
            return Self::from_f64(q1);
        }
        let r = self - rhs.mul_f64(q1);
        let q2 = r.hi / rhs.hi;
        let r = r - rhs.mul_f64(q2);
        let q3 = r.hi / rhs.hi;
        let (hi, lo) = fast_two_sum(q1, q2);
        Self { hi, lo } + Self::from_f64(q3)
    }
}

impl Neg for DoubleDouble {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self {
            hi: -self.hi,
            lo: -self.lo,
        }
    }
}
