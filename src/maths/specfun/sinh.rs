//! sinh(x) implementation.
//!
//! An odd rational in x² for |x| <= 1, `(e^x - e^-x) / 2` above.

use super::poly::{p1evl, polevl};
use super::{MathError, Outcome, Real};

/// `x + x³ P(x²)/Q(x²)`, valid for |x| <= 1.
#[inline]
pub(crate) fn sinh_small<F: Real>(x: F) -> F {
    let h = &F::PRECISION.hyperbolic;
    let z = x * x;
    x + x * z * (polevl(z, h.sinh_p) / p1evl(z, h.sinh_q))
}

/// `e^a / 2` for `a` close to the overflow bound, squaring a half exponential.
#[inline]
pub(crate) fn half_exp_large<F: Real>(a: F) -> F {
    let e = (F::HALF * a).exp();
    (F::HALF * e) * e
}

pub fn sinh<F: Real>(x: F) -> Outcome<F> {
    if x.is_nan() {
        return Outcome::fail(x, MathError::Domain);
    }
    if x.is_infinite() {
        return Outcome::ok(x);
    }
    let p = F::PRECISION;
    let ln2 = p.consts.ln2;
    let a = x.abs();
    if a > p.maxlog + ln2 {
        let inf = if x > F::ZERO { F::INFINITY } else { F::NEG_INFINITY };
        return Outcome::fail(inf, MathError::Range);
    }
    if a > F::ONE {
        let v = if a >= p.maxlog - ln2 {
            half_exp_large(a)
        } else {
            let e = a.exp();
            F::HALF * e - F::HALF / e
        };
        return Outcome::ok(if x > F::ZERO { v } else { -v });
    }
    Outcome::ok(sinh_small(x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maths::specfun::DoubleDouble;

    fn rel(actual: f64, expected: f64) -> f64 {
        libm::fabs(actual / expected - 1.0)
    }

    #[test]
    fn special_values() {
        assert_eq!(sinh(0.0f64).value, 0.0);
        assert_eq!(sinh(-0.0f64).value.to_bits(), (-0.0f64).to_bits());
        assert_eq!(sinh(f64::INFINITY).value, f64::INFINITY);
        assert_eq!(sinh(f64::NEG_INFINITY).value, f64::NEG_INFINITY);
        assert!(sinh(f64::INFINITY).is_ok());
        let out = sinh(f32::NAN);
        assert!(out.value.is_nan());
        assert_eq!(out.error, Some(MathError::Domain));
    }

    #[test]
    fn known_values() {
        let cases = [
            (0.1, 0.100_166_750_019_844_03),
            (0.5, 0.521_095_305_493_747_4),
            (1.0, 1.175_201_193_643_801_4),
            (2.0, 3.626_860_407_847_018_6),
            (-3.0, -10.017_874_927_409_903),
            (20.0, 242_582_597.704_895_14),
        ];
        for (x, expected) in cases {
            assert!(rel(sinh(x).value, expected) < 1e-15, "{x}");
            assert!(rel(sinh(x as f32).value as f64, expected) < 2e-7, "{x}");
        }
    }

    #[test]
    fn near_overflow() {
        // Past maxlog - ln2 the result is built from a half exponential.
        let out = sinh(710.0f64);
        assert!(rel(out.value, 1.116_997_383_080_855_5e308) < 1e-14);
        assert!(out.is_ok());
        assert!(rel(sinh(-88.0f32).value as f64, -8.258_181_274_970_009e37) < 2e-7);

        let out = sinh(711.0f64);
        assert_eq!(out.value, f64::INFINITY);
        assert_eq!(out.error, Some(MathError::Range));
        let out = sinh(-90.0f32);
        assert_eq!(out.value, f32::NEG_INFINITY);
        assert_eq!(out.error, Some(MathError::Range));
    }

    #[test]
    fn extended_small_arguments() {
        let x = DoubleDouble::from_f64(0.5);
        let y = sinh(x).value;
        // sinh(1/2) = (e^(1/2) - e^(-1/2)) / 2
        let e = x.exp();
        let expected = (e - DoubleDouble::ONE / e) * DoubleDouble::HALF;
        assert!(((y - expected) / expected).abs().to_f64() < 1e-18);
    }
}
