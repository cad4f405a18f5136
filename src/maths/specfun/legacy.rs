//! C-style entry points: one function per precision with the familiar
//! `f`/none/`l` suffixes, a shared error indicator and the `signgam` global.
//!
//! The indicator is only written when a call raises an error, so a clean
//! call never hides an earlier failure. `signgam` starts at 0 and is
//! overwritten by every non-reentrant `lgamma*` and every `tgamma*` call.

use core::sync::atomic::{AtomicI32, AtomicU8, Ordering};

use super::dd::DoubleDouble;
use super::{MathError, Outcome, Real};

static ERRNO: AtomicU8 = AtomicU8::new(0);
static SIGNGAM: AtomicI32 = AtomicI32::new(0);

/// Error class recorded by the most recent failing call, if any.
pub fn errno() -> Option<MathError> {
    MathError::from_code(ERRNO.load(Ordering::Relaxed))
}

pub fn clear_errno() {
    ERRNO.store(0, Ordering::Relaxed);
}

/// Sign of Γ(x) from the last non-reentrant `lgamma*` or `tgamma*` call.
pub fn signgam() -> i32 {
    SIGNGAM.load(Ordering::Relaxed)
}

#[cfg_attr(not(feature = "log"), allow(unused_variables))]
#[inline]
fn report<F: Real>(name: &'static str, x: F, out: Outcome<F>) -> Outcome<F> {
    if let Some(err) = out.error {
        ERRNO.store(err.code(), Ordering::Relaxed);
        #[cfg(feature = "log")]
        log::debug!(
            "{name}({:e}): {err}, returning {:e}",
            x.to_f64(),
            out.value.to_f64()
        );
    }
    out
}

macro_rules! entry_points {
    ($kernel:path => $single:ident, $double:ident, $extended:ident) => {
        #[inline]
        pub fn $single(x: f32) -> f32 {
            report(stringify!($single), x, $kernel(x)).value
        }

        #[inline]
        pub fn $double(x: f64) -> f64 {
            report(stringify!($double), x, $kernel(x)).value
        }

        #[inline]
        pub fn $extended(x: DoubleDouble) -> DoubleDouble {
            report(stringify!($extended), x, $kernel(x)).value
        }
    };
}

entry_points!(super::cbrt::cbrt => cbrtf, cbrt, cbrtl);
entry_points!(super::erf::erf => erff, erf, erfl);
entry_points!(super::erf::erfc => erfcf, erfc, erfcl);
entry_points!(super::sinh::sinh => sinhf, sinh, sinhl);
entry_points!(super::cosh::cosh => coshf, cosh, coshl);
entry_points!(super::tanh::tanh => tanhf, tanh, tanhl);

macro_rules! lgamma_entry_points {
    ($($plain:ident, $reentrant:ident: $ty:ty;)*) => {$(
        /// Reentrant form: returns `(log|Γ(x)|, sign of Γ(x))` without
        /// touching `signgam`.
        #[inline]
        pub fn $reentrant(x: $ty) -> ($ty, i32) {
            let out = report(stringify!($reentrant), x, super::lgamma::lgamma(x));
            (out.value, out.sign)
        }

        #[inline]
        pub fn $plain(x: $ty) -> $ty {
            let (value, sign) = $reentrant(x);
            SIGNGAM.store(sign, Ordering::Relaxed);
            value
        }
    )*};
}

lgamma_entry_points! {
    lgammaf, lgammaf_r: f32;
    lgamma, lgamma_r: f64;
    lgammal, lgammal_r: DoubleDouble;
}

macro_rules! tgamma_entry_points {
    ($($name:ident: $ty:ty;)*) => {$(
        /// Γ(x); the sign of the result is also stored in `signgam`.
        #[inline]
        pub fn $name(x: $ty) -> $ty {
            let out = report(stringify!($name), x, super::tgamma::tgamma(x));
            SIGNGAM.store(out.sign, Ordering::Relaxed);
            out.value
        }
    )*};
}

tgamma_entry_points! {
    tgammaf: f32;
    tgamma: f64;
    tgammal: DoubleDouble;
}

#[cfg(test)]
mod tests {
    use super::*;

    // The indicator is process-wide; keep every assertion about it in one test.
    #[test]
    fn errno_is_sticky_until_cleared() {
        clear_errno();
        assert_eq!(cbrt(27.0), 3.0);
        assert_eq!(errno(), None);

        assert_eq!(lgamma_r(-2.0).0, f64::INFINITY);
        assert_eq!(errno(), Some(MathError::Singularity));
        assert_eq!(sinh(1.0), super::super::sinh::sinh(1.0).value);
        assert_eq!(errno(), Some(MathError::Singularity));

        assert_eq!(coshf(100.0), f32::INFINITY);
        assert_eq!(errno(), Some(MathError::Range));
        assert!(erfl(DoubleDouble::NAN).is_nan());
        assert_eq!(errno(), Some(MathError::Domain));

        clear_errno();
        assert_eq!(errno(), None);
    }

    // signgam is process-wide too; only this test calls the writers.
    #[test]
    fn gamma_variants_report_the_sign() {
        let (v, s) = lgamma_r(-0.5);
        assert_eq!(s, -1);
        assert!(libm::fabs(v - 1.265_512_123_484_645_4) < 1e-15);
        assert_eq!(lgammaf_r(3.0).1, 1);
        assert_eq!(lgammal_r(DoubleDouble::from_f64(-1.5)).1, 1);

        assert_eq!(lgamma(-2.5), lgamma_r(-2.5).0);
        assert_eq!(signgam(), -1);
        let _ = lgammaf(0.5);
        assert_eq!(signgam(), 1);

        assert!(libm::fabs(tgamma(-0.5) + 3.544_907_701_811_032) < 1e-15);
        assert_eq!(signgam(), -1);
        assert_eq!(tgammaf(4.0), 6.0);
        assert_eq!(signgam(), 1);
        assert!(tgammal(DoubleDouble::from_f64(-1.5)).to_f64() > 0.0);
        assert_eq!(signgam(), 1);
        assert!(tgammal(DoubleDouble::from_f64(-2.5)).to_f64() < 0.0);
        assert_eq!(signgam(), -1);
    }

    #[test]
    fn every_precision_is_wired() {
        assert_eq!(cbrtf(-8.0), -2.0);
        assert_eq!(cbrtl(DoubleDouble::from_f64(64.0)).to_f64(), 4.0);
        assert_eq!(erfcl(DoubleDouble::ZERO), DoubleDouble::ONE);
        assert_eq!(tanhf(f32::INFINITY), 1.0);
        assert_eq!(sinhl(DoubleDouble::ZERO), DoubleDouble::ZERO);
        assert_eq!(cosh(0.0), 1.0);
        assert_eq!(erff(0.0), 0.0);
    }
}
