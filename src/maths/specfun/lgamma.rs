//! lgamma(x) implementation: log|Γ(x)| and the sign of Γ(x).
//!
//! Reflection below -34, shifts into [2, 3) with a rational approximation
//! below 13, and the Stirling series above.

use super::poly::{p1evl, polevl};
use super::precision::{LgammaCoeffs, Precision};
use super::{MathError, Outcome, Real};

pub fn lgamma<F: Real>(x: F) -> Outcome<F> {
    if x.is_nan() {
        return Outcome::ok(x);
    }
    if x.is_infinite() {
        return Outcome::ok(F::INFINITY);
    }
    let p = F::PRECISION;
    let lg = &p.lgamma;

    if x < lg.reflect_below {
        return reflect(x, p);
    }
    if x < lg.asymptotic_from {
        return shifted(x, lg);
    }
    if x > lg.overflow {
        return Outcome::fail(F::INFINITY, MathError::Range);
    }

    let q = (x - F::HALF) * x.ln() - x + p.consts.log_sqrt_2pi;
    if x > lg.correction_cutoff {
        return Outcome::ok(q);
    }
    let w = F::ONE / (x * x);
    Outcome::ok(q + polevl(w, lg.stirling) / x)
}

/// `log|Γ(x)| = log π - log|x sin(πx)| - log|Γ(-x)|` for `x < -34`.
fn reflect<F: Real>(x: F, p: &Precision<F>) -> Outcome<F> {
    let q = -x;
    let w = lgamma(q).value;
    let mut n = q.floor();
    if n == q {
        return Outcome::fail(F::INFINITY, MathError::Singularity);
    }
    let sign = if n.is_even() { -1 } else { 1 };
    let mut z = q - n;
    if z > F::HALF {
        n = n + F::ONE;
        z = n - q;
    }
    let z = q * (p.consts.pi * z).sin();
    if z == F::ZERO {
        return Outcome::fail(F::INFINITY, MathError::Singularity);
    }
    Outcome::signed(p.consts.log_pi - z.ln() - w, sign)
}

/// Shift into [2, 3), accumulating the product of the shifted factors.
fn shifted<F: Real>(x: F, lg: &LgammaCoeffs<F>) -> Outcome<F> {
    let two = F::from_f64(2.0);
    let three = F::from_f64(3.0);
    let mut z = F::ONE;
    let mut shift = F::ZERO;
    let mut u = x;
    while u >= three {
        shift = shift - F::ONE;
        u = x + shift;
        z = z * u;
    }
    while u < two {
        if u == F::ZERO {
            return Outcome::fail(F::INFINITY, MathError::Singularity);
        }
        z = z / u;
        shift = shift + F::ONE;
        u = x + shift;
    }
    let sign = if z < F::ZERO {
        z = -z;
        -1
    } else {
        1
    };
    if u == two {
        return Outcome::signed(z.ln(), sign);
    }
    let t = x + (shift - two);
    Outcome::signed(z.ln() + t * polevl(t, lg.p) / p1evl(t, lg.q), sign)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maths::specfun::DoubleDouble;

    fn rel(actual: f64, expected: f64) -> f64 {
        libm::fabs(actual / expected - 1.0)
    }

    #[test]
    fn zeros_at_one_and_two() {
        for x in [1.0f64, 2.0] {
            let out = lgamma(x);
            assert_eq!(out.value, 0.0);
            assert_eq!(out.sign, 1);
            assert!(out.is_ok());
        }
        assert_eq!(lgamma(1.0f32).value, 0.0);
        assert_eq!(lgamma(DoubleDouble::from_f64(2.0)).value, DoubleDouble::ZERO);
    }

    #[test]
    fn poles_are_singularities() {
        for x in [0.0f64, -0.0, -1.0, -2.0, -33.0, -34.0, -100.0, -1e20] {
            let out = lgamma(x);
            assert_eq!(out.value, f64::INFINITY, "{x}");
            assert_eq!(out.error, Some(MathError::Singularity), "{x}");
            assert_eq!(out.sign, 1);
        }
    }

    #[test]
    fn sign_follows_gamma() {
        // Γ is negative on (-1, 0) and (-3, -2), positive on (-2, -1).
        assert_eq!(lgamma(-0.5f64).sign, -1);
        assert_eq!(lgamma(-1.5f64).sign, 1);
        assert_eq!(lgamma(-2.5f64).sign, -1);
        assert_eq!(lgamma(-34.5f64).sign, -1);
        assert_eq!(lgamma(-35.5f64).sign, 1);
        assert_eq!(lgamma(0.5f32).sign, 1);
    }

    #[test]
    fn extended_reflection_reference_values() {
        let dd = |hi: u64, lo: u64| {
            DoubleDouble::from_parts(f64::from_bits(hi), f64::from_bits(lo))
        };
        // log|Γ(-34.5)|, log|Γ(-40.25)|
        let cases = [
            (-34.5, dd(0xc056_4d73_ec4b_64b5, 0xbcff_7112_ffef_6e81)),
            (-40.25, dd(0xc05b_7059_18e6_3270, 0xbcbb_2adf_ced8_afa9)),
        ];
        for (x, expected) in cases {
            let out = lgamma(DoubleDouble::from_f64(x));
            let err = ((out.value - expected) / expected).to_f64();
            assert!(libm::fabs(err) < 4e-18, "lgamma({x}): {err:e}");
            assert_eq!(out.sign, -1);
        }
    }

    #[test]
    fn known_values() {
        // log Γ(1/2) = log √π
        let half = 0.572_364_942_924_700_1;
        assert!(rel(lgamma(0.5f64).value, half) < 1e-15);
        assert!(rel(lgamma(0.5f32).value as f64, half) < 1e-6);
        // log Γ(10) = log 362880
        assert!(rel(lgamma(10.0f64).value, 12.801_827_480_081_469) < 1e-15);
        // log Γ(100)
        assert!(rel(lgamma(100.0f64).value, 359.134_205_369_575_4) < 1e-15);
        // log|Γ(-40.5)|, Γ(-40.5) < 0
        let out = lgamma(-40.5f64);
        assert!(rel(out.value, -111.029_647_157_328_48) < 1e-15);
        assert_eq!(out.sign, -1);
    }

    #[test]
    fn large_arguments() {
        let x = 1e10f64;
        let expected = (x - 0.5) * libm::log(x) - x + 0.918_938_533_204_672_8;
        assert!(rel(lgamma(x).value, expected) < 1e-15);
        let out = lgamma(3e305f64);
        assert_eq!(out.value, f64::INFINITY);
        assert_eq!(out.error, Some(MathError::Range));
        assert!(lgamma(2.5e305f64).value.is_finite());
        assert_eq!(lgamma(3e36f32).error, Some(MathError::Range));
        assert!(lgamma(2e36f32).value.is_finite());
    }

    #[test]
    fn non_finite_inputs() {
        assert!(lgamma(f64::NAN).value.is_nan());
        assert_eq!(lgamma(f64::INFINITY).value, f64::INFINITY);
        assert_eq!(lgamma(f64::NEG_INFINITY).value, f64::INFINITY);
        assert!(lgamma(f64::NEG_INFINITY).is_ok());
    }
}
