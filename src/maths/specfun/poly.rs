//! Horner evaluation over coefficient tables stored highest degree first.

use super::Real;

/// `c[0]*x^n + c[1]*x^(n-1) + ... + c[n]`. An empty table evaluates to zero.
#[inline(always)]
pub(crate) fn polevl<F: Real>(x: F, coeffs: &[F]) -> F {
    let Some((&first, rest)) = coeffs.split_first() else {
        return F::ZERO;
    };
    let mut acc = first;
    for &c in rest {
        acc = acc * x + c;
    }
    acc
}

/// Monic variant: the leading coefficient `1` is implied and not stored, so
/// `c` of length `n` describes a degree-`n` polynomial. An empty table is `1`.
#[inline(always)]
pub(crate) fn p1evl<F: Real>(x: F, coeffs: &[F]) -> F {
    let mut acc = F::ONE;
    for &c in coeffs {
        acc = acc * x + c;
    }
    acc
}
