//! tanh(x) implementation.
//!
//! An odd rational in x² below 0.625, `1 - 2/(e^2x + 1)` above.

use super::poly::{p1evl, polevl};
use super::{MathError, Outcome, Real};

pub fn tanh<F: Real>(x: F) -> Outcome<F> {
    if x.is_nan() {
        return Outcome::fail(x, MathError::Domain);
    }
    let one = if x > F::ZERO { F::ONE } else { -F::ONE };
    if x.is_infinite() {
        return Outcome::ok(one);
    }
    if x == F::ZERO {
        return Outcome::ok(x);
    }
    let p = F::PRECISION;
    let h = &p.hyperbolic;
    let z = x.abs();
    if z > F::HALF * p.maxlog {
        return Outcome::fail(one, MathError::Range);
    }
    if z >= h.tanh_rational_below {
        let s = (z + z).exp();
        let v = F::ONE - F::from_f64(2.0) / (s + F::ONE);
        return Outcome::ok(if x > F::ZERO { v } else { -v });
    }
    let s = x * x;
    Outcome::ok(x + x * s * (polevl(s, h.tanh_p) / p1evl(s, h.tanh_q)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maths::specfun::DoubleDouble;
    use crate::maths::specfun::{cosh::cosh, sinh::sinh};

    fn rel(actual: f64, expected: f64) -> f64 {
        libm::fabs(actual / expected - 1.0)
    }

    #[test]
    fn special_values() {
        assert_eq!(tanh(-0.0f64).value.to_bits(), (-0.0f64).to_bits());
        assert_eq!(tanh(f64::INFINITY).value, 1.0);
        assert_eq!(tanh(f32::NEG_INFINITY).value, -1.0);
        assert!(tanh(f64::INFINITY).is_ok());
        assert_eq!(tanh(f64::NAN).error, Some(MathError::Domain));
        assert_eq!(tanh(DoubleDouble::ZERO).value, DoubleDouble::ZERO);
    }

    #[test]
    fn known_values() {
        let cases = [
            (0.1, 0.099_667_994_624_955_82),
            (0.5, 0.462_117_157_260_009_74),
            (0.6, 0.537_049_566_998_035_3),
            (1.0, 0.761_594_155_955_764_9),
            (-3.0, -0.995_054_753_686_730_5),
        ];
        for (x, expected) in cases {
            assert!(rel(tanh(x).value, expected) < 1e-15, "{x}");
            assert!(rel(tanh(x as f32).value as f64, expected) < 2e-7, "{x}");
        }
    }

    #[test]
    fn saturation() {
        assert_eq!(tanh(20.0f64).value, 1.0);
        assert!(tanh(20.0f64).is_ok());
        let out = tanh(-400.0f64);
        assert_eq!(out.value, -1.0);
        assert_eq!(out.error, Some(MathError::Range));
        assert_eq!(tanh(50.0f32).error, Some(MathError::Range));
    }

    #[test]
    fn ratio_of_sinh_and_cosh() {
        for &x in &[1e-3, 0.3, 0.9, 1.5, 5.0] {
            let t = tanh(x).value;
            let r = sinh(x).value / cosh(x).value;
            assert!(libm::fabs(t - r) < 1e-15, "{x}");
        }
    }
}
