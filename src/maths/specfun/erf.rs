//! erf(x) and erfc(x) implementation.
//!
//! A rational in x² for |x| < 1; beyond that erfc is `exp(-x²)` times a
//! rational in 1/x, with `exp(-x²)` formed from an exact square.

use super::poly::{p1evl, polevl};
use super::{MathError, Outcome, Real};

/// `exp(-x²)` with `x = m + f`, `m` a multiple of 1/128 so `m²` is exact.
#[inline]
fn exp_neg_square<F: Real>(x: F, maxlog: F) -> F {
    let scale = F::from_f64(128.0);
    let m = (scale * x + F::HALF).floor() / scale;
    let f = x - m;
    let u = m * m;
    let u1 = F::from_f64(2.0) * m * f + f * f;
    if u + u1 > maxlog {
        return F::ZERO;
    }
    (-u).exp() * (-u1).exp()
}

pub fn erf<F: Real>(x: F) -> Outcome<F> {
    if x.is_nan() {
        return Outcome::fail(x, MathError::Domain);
    }
    if x.abs() >= F::ONE {
        if x.is_infinite() {
            return Outcome::ok(if x > F::ZERO { F::ONE } else { -F::ONE });
        }
        // An underflowing erfc only means erf has saturated.
        let v = F::ONE - erfc(x.abs()).value;
        return Outcome::ok(if x > F::ZERO { v } else { -v });
    }
    let e = &F::PRECISION.erf;
    let z = x * x;
    Outcome::ok(x * polevl(z, e.t) / p1evl(z, e.u))
}

pub fn erfc<F: Real>(a: F) -> Outcome<F> {
    if a.is_nan() {
        return Outcome::fail(a, MathError::Domain);
    }
    let x = a.abs();
    if x < F::ONE {
        return Outcome::ok(F::ONE - erf(a).value);
    }
    let two = F::from_f64(2.0);
    let floor = if a < F::ZERO { two } else { F::ZERO };
    if a.is_infinite() {
        return Outcome::ok(floor);
    }
    let p = F::PRECISION;
    if x * x > p.maxlog {
        return Outcome::fail(floor, MathError::Range);
    }

    let z = exp_neg_square(x, p.maxlog);
    let y = F::ONE / x;
    let e = &p.erf;
    let (num, den) = if x < e.fine_from {
        (polevl(y, e.coarse_p), p1evl(y, e.coarse_q))
    } else {
        let y2 = y * y;
        (y * polevl(y2, e.fine_r), p1evl(y2, e.fine_s))
    };
    let mut r = z * num / den;
    if a < F::ZERO {
        r = two - r;
    }
    if r == F::ZERO {
        return Outcome::fail(floor, MathError::Range);
    }
    Outcome::ok(r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maths::specfun::DoubleDouble;

    fn rel(actual: f64, expected: f64) -> f64 {
        libm::fabs(actual / expected - 1.0)
    }

    #[test]
    fn origin_and_limits() {
        assert_eq!(erf(0.0f64).value, 0.0);
        assert_eq!(erf(-0.0f64).value.to_bits(), (-0.0f64).to_bits());
        assert_eq!(erfc(0.0f64).value, 1.0);
        assert_eq!(erf(f64::INFINITY).value, 1.0);
        assert_eq!(erf(f64::NEG_INFINITY).value, -1.0);
        assert_eq!(erfc(f64::INFINITY).value, 0.0);
        assert_eq!(erfc(f64::NEG_INFINITY).value, 2.0);
        assert!(erfc(f64::INFINITY).is_ok());
        assert_eq!(erf(0.0f32).value, 0.0);
        assert_eq!(erfc(DoubleDouble::ZERO).value, DoubleDouble::ONE);
    }

    #[test]
    fn nan_is_a_domain_error() {
        let out = erf(f64::NAN);
        assert!(out.value.is_nan());
        assert_eq!(out.error, Some(MathError::Domain));
        assert_eq!(erfc(f32::NAN).error, Some(MathError::Domain));
    }

    #[test]
    fn known_values() {
        assert!(rel(erf(0.5f64).value, 0.520_499_877_813_046_5) < 1e-15);
        assert!(rel(erf(1.0f64).value, 0.842_700_792_949_714_9) < 1e-15);
        assert!(rel(erfc(2.0f64).value, 4.677_734_981_047_266e-3) < 1e-14);
        assert!(rel(erfc(10.0f64).value, 2.088_487_583_762_545e-45) < 1e-14);
        assert!(rel(erfc(-1.5f64).value, 1.966_105_146_475_310_7) < 1e-15);
        assert!(rel(erfc(2.0f32).value as f64, 4.677_734_981_047_266e-3) < 2e-6);
    }

    #[test]
    fn odd_symmetry() {
        for &x in &[1e-10, 0.3, 0.99, 1.0, 2.5, 6.0] {
            assert_eq!(erf(-x).value, -erf(x).value);
        }
    }

    #[test]
    fn underflow_is_a_range_error() {
        let out = erfc(30.0f64);
        assert_eq!(out.value, 0.0);
        assert_eq!(out.error, Some(MathError::Range));
        let out = erfc(-30.0f64);
        assert_eq!(out.value, 2.0);
        assert_eq!(out.error, Some(MathError::Range));
        assert_eq!(erfc(10.0f32).error, Some(MathError::Range));
        // erf saturates without reporting the erfc underflow.
        let out = erf(30.0f64);
        assert_eq!(out.value, 1.0);
        assert!(out.is_ok());
    }

    #[test]
    fn square_split_matches_direct_exponential() {
        for &x in &[1.0f64, 1.37, 4.2, 9.999, 20.0] {
            let direct = libm::exp(-x * x);
            assert!(rel(exp_neg_square(x, 709.0), direct) < 1e-14, "{x}");
        }
        assert_eq!(exp_neg_square(30.0f64, 709.0), 0.0);
    }
}
