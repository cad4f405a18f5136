//! cosh(x) implementation.

use super::sinh::{half_exp_large, sinh_small};
use super::{MathError, Outcome, Real};

pub fn cosh<F: Real>(x: F) -> Outcome<F> {
    if x.is_nan() {
        return Outcome::fail(x, MathError::Domain);
    }
    let a = x.abs();
    if a.is_infinite() {
        return Outcome::ok(a);
    }
    let p = F::PRECISION;
    let ln2 = p.consts.ln2;
    if a > p.maxlog + ln2 {
        return Outcome::fail(F::INFINITY, MathError::Range);
    }
    if a > F::ONE {
        if a >= p.maxlog - ln2 {
            return Outcome::ok(half_exp_large(a));
        }
        let e = a.exp();
        return Outcome::ok(F::HALF * (e + F::ONE / e));
    }
    // cosh(a) = 1 + 2 sinh²(a/2) keeps full accuracy near zero.
    let h = sinh_small(F::HALF * a);
    Outcome::ok(F::ONE + F::from_f64(2.0) * h * h)
}
