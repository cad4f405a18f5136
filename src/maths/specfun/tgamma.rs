//! tgamma(x) implementation.
//!
//! Stirling's formula for |x| > 33 (reflection for negative x), otherwise
//! integer shifts into [2, 3) and a rational approximation there.

use super::poly::polevl;
use super::precision::Precision;
use super::{MathError, Outcome, Real};

#[inline]
fn with_sign<F: Real>(v: F) -> Outcome<F> {
    Outcome::signed(v, if v < F::ZERO { -1 } else { 1 })
}

pub fn tgamma<F: Real>(x: F) -> Outcome<F> {
    if x.is_nan() {
        return Outcome::ok(x);
    }
    if x.is_infinite() {
        return if x > F::ZERO {
            Outcome::ok(x)
        } else {
            Outcome::fail(F::NAN, MathError::Domain)
        };
    }
    let p = F::PRECISION;
    let tg = &p.tgamma;

    if x.abs() > tg.asymptotic_above {
        if x < F::ZERO {
            return reflect(-x, p);
        }
        if x > tg.overflow {
            return Outcome::fail(F::INFINITY, MathError::Range);
        }
        return Outcome::ok(stirling(x, p));
    }

    let one = F::ONE;
    let two = F::from_f64(2.0);
    let three = F::from_f64(3.0);
    let mut x = x;
    let mut z = one;
    while x >= three {
        x = x - one;
        z = z * x;
    }
    while x < F::ZERO {
        if x > -tg.small {
            return near_zero(x, z, p);
        }
        z = z / x;
        x = x + one;
    }
    while x < two {
        if x < tg.small {
            return near_zero(x, z, p);
        }
        z = z / x;
        x = x + one;
    }
    if x == two {
        return with_sign(z);
    }
    let t = x - two;
    with_sign(z * polevl(t, tg.p) / polevl(t, tg.q))
}

/// `Γ(x) ≈ z / ((1 + γx) x)` once the shifted argument is within `small` of 0.
fn near_zero<F: Real>(x: F, z: F, p: &Precision<F>) -> Outcome<F> {
    if x == F::ZERO {
        return if x.is_sign_negative() {
            Outcome::fail(F::NEG_INFINITY, MathError::Singularity).with_sign(-1)
        } else {
            Outcome::fail(F::INFINITY, MathError::Singularity)
        };
    }
    let v = z / ((F::ONE + p.consts.euler * x) * x);
    if v.is_infinite() {
        let sign = if v < F::ZERO { -1 } else { 1 };
        return Outcome::fail(v, MathError::Range).with_sign(sign);
    }
    with_sign(v)
}

/// `√(2π) x^(x-0.5) e^-x (1 + STIR(1/x)/x)` for `x > 33`.
fn stirling<F: Real>(x: F, p: &Precision<F>) -> F {
    let tg = &p.tgamma;
    let w = F::ONE / x;
    let w = F::ONE + w * polevl(w, tg.stirling);
    let y = x.exp();
    let y = if x > tg.pow_split {
        // Two half powers keep x^(x-0.5) finite up to the overflow bound.
        let v = x.pow(F::HALF * x - F::from_f64(0.25));
        v * (v / y)
    } else {
        x.pow(x - F::HALF) / y
    };
    p.consts.sqrt_2pi * y * w
}

/// `Γ(-q) = -π / (q sin(πq) Γ(q))` for `q > 33`.
fn reflect<F: Real>(q: F, p: &Precision<F>) -> Outcome<F> {
    let mut n = q.floor();
    if n == q {
        return Outcome::fail(F::INFINITY, MathError::Singularity);
    }
    let sign = if n.is_even() { -1 } else { 1 };
    let signed = |v: F| if sign < 0 { -v } else { v };
    if q > p.tgamma.overflow {
        return Outcome::fail(signed(F::ZERO), MathError::Range).with_sign(sign);
    }
    let mut z = q - n;
    if z > F::HALF {
        n = n + F::ONE;
        z = q - n;
    }
    let z = (q * (p.consts.pi * z).sin()).abs();
    if z == F::ZERO {
        return Outcome::fail(signed(F::INFINITY), MathError::Range).with_sign(sign);
    }
    let v = p.consts.pi / z / stirling(q, p);
    Outcome::signed(signed(v), sign)
}
