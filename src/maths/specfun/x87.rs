//! x87 80-bit extended words and their exact conversion to double-double.
//!
//! Extended-precision constants are written as the `(sign|exponent,
//! significand)` word pair of the x87 format so they never pass through a
//! decimal parse. A 64-bit significand always splits exactly into a rounded
//! 53-bit head and an 11-bit signed tail.

use super::dd::DoubleDouble;

const EXP_BIAS: i32 = 16383;
const SIGN_BIT: u16 = 0x8000;
const EXP_MASK: u16 = 0x7fff;

/// One x87 extended value: sign bit and 15-bit biased exponent in `se`,
/// explicit-integer-bit significand in `significand`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct X87 {
    pub se: u16,
    pub significand: u64,
}

/// `2^k` for any `k`, saturating to `0` or `inf` outside the f64 range.
const fn pow2(k: i32) -> f64 {
    if k > 1023 {
        f64::INFINITY
    } else if k >= -1022 {
        f64::from_bits(((k + 1023) as u64) << 52)
    } else if k >= -1074 {
        f64::from_bits(1u64 << (k + 1074))
    } else {
        0.0
    }
}

impl X87 {
    #[inline]
    pub const fn new(se: u16, significand: u64) -> Self {
        Self { se, significand }
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.se & SIGN_BIT != 0
    }

    /// Unbiased exponent of the leading significand bit.
    #[inline]
    pub const fn exponent(self) -> i32 {
        (self.se & EXP_MASK) as i32 - EXP_BIAS
    }

    /// Exact value as a double-double.
    pub const fn to_dd(self) -> DoubleDouble {
        let m = self.significand;
        if m == 0 {
            return if self.is_negative() {
                DoubleDouble::from_f64(-0.0)
            } else {
                DoubleDouble::ZERO
            };
        }
        // Round the top 53 bits to nearest; the remainder fits in 11 signed bits.
        let head = (m >> 11) + ((m >> 10) & 1);
        let tail = (m as i128 - ((head as i128) << 11)) as i64;
        let scale = self.exponent() - 63;
        let mut hi = head as f64 * pow2(scale + 11);
        let mut lo = tail as f64 * pow2(scale);
        if self.is_negative() {
            hi = -hi;
            lo = -lo;
        }
        DoubleDouble::from_parts(hi, lo)
    }

    /// Inverse of [`X87::to_dd`]; `None` when the value needs more than 64
    /// significand bits or is not finite.
    pub fn from_dd(x: DoubleDouble) -> Option<Self> {
        if !x.is_finite() {
            return None;
        }
        let (hm, he) = decompose(x.hi());
        let (lm, le) = decompose(x.lo());
        if hm == 0 {
            return if lm == 0 {
                Some(Self::new(if x.hi().is_sign_negative() { SIGN_BIT } else { 0 }, 0))
            } else {
                None
            };
        }
        let (sum, base) = if lm == 0 {
            (hm as i128, he)
        } else {
            let shift = he - le;
            if !(0..=72).contains(&shift) {
                return None;
            }
            (((hm as i128) << shift) + lm as i128, le)
        };
        let negative = sum < 0;
        let mag = sum.unsigned_abs();
        let bits = 128 - mag.leading_zeros() as i32;
        let significand = if bits > 64 {
            let drop = bits - 64;
            if mag & ((1u128 << drop) - 1) != 0 {
                return None;
            }
            (mag >> drop) as u64
        } else {
            (mag << (64 - bits)) as u64
        };
        let biased = base + bits - 1 + EXP_BIAS;
        if !(1..EXP_MASK as i32).contains(&biased) {
            return None;
        }
        let sign = if negative { SIGN_BIT } else { 0 };
        Some(Self::new(sign | biased as u16, significand))
    }
}

/// Integer significand and exponent with `x == m * 2^e`.
fn decompose(x: f64) -> (i64, i32) {
    let bits = x.to_bits();
    let exp = ((bits >> 52) & 0x7ff) as i32;
    let frac = (bits & 0x000f_ffff_ffff_ffff) as i64;
    let (m, e) = if exp == 0 {
        (frac, -1074)
    } else {
        (frac | (1i64 << 52), exp - 1075)
    };
    if x.is_sign_negative() { (-m, e) } else { (m, e) }
}

/// Convert a table of words in a `const` context.
pub(crate) const fn words<const N: usize>(w: [X87; N]) -> [DoubleDouble; N] {
    let mut out = [DoubleDouble::ZERO; N];
    let mut i = 0;
    while i < N {
        out[i] = w[i].to_dd();
        i += 1;
    }
    out
}
