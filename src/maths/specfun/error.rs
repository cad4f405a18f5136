//! Error classes and the per-call result aggregate.
//!
//! Every kernel reports its sign and error class through [`Outcome`] instead of
//! process-wide state; only the compatibility layer in `legacy` copies them
//! into the errno/signgam globals.

use core::fmt;

/// Why a kernel could not return the mathematically exact value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MathError {
    /// The argument lies outside the domain of the function.
    Domain,
    /// The argument hit a pole; the returned sentinel is an infinity.
    Singularity,
    /// The true result overflows or underflows the precision in use.
    Range,
}

impl MathError {
    /// Singularities are domain errors with an infinite sentinel.
    #[inline]
    pub const fn is_domain(self) -> bool {
        matches!(self, Self::Domain | Self::Singularity)
    }

    #[inline]
    pub const fn is_range(self) -> bool {
        matches!(self, Self::Range)
    }

    /// Compact code used by the errno-style indicator; `0` means no error.
    pub(crate) const fn code(self) -> u8 {
        match self {
            Self::Domain => 1,
            Self::Singularity => 2,
            Self::Range => 3,
        }
    }

    pub(crate) const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Domain),
            2 => Some(Self::Singularity),
            3 => Some(Self::Range),
            _ => None,
        }
    }
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain => f.write_str("argument outside the function domain"),
            Self::Singularity => f.write_str("argument is a pole of the function"),
            Self::Range => f.write_str("result out of representable range"),
        }
    }
}

impl core::error::Error for MathError {}

/// Value returned by every kernel: the numeric result, the sign of the
/// underlying quantity (`+1`/`-1`), and the error class if one was raised.
///
/// `value` always holds a usable number: on error it is the sentinel the
/// function documents (NaN, a signed infinity, or a saturated bound).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Outcome<F> {
    pub value: F,
    pub sign: i32,
    pub error: Option<MathError>,
}

impl<F> Outcome<F> {
    #[inline]
    pub const fn ok(value: F) -> Self {
        Self {
            value,
            sign: 1,
            error: None,
        }
    }

    #[inline]
    pub const fn signed(value: F, sign: i32) -> Self {
        Self {
            value,
            sign,
            error: None,
        }
    }

    #[inline]
    pub const fn fail(value: F, error: MathError) -> Self {
        Self {
            value,
            sign: 1,
            error: Some(error),
        }
    }

    #[inline]
    pub const fn with_sign(mut self, sign: i32) -> Self {
        self.sign = sign;
        self
    }

    #[inline]
    pub const fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Drop the sentinel and surface the error class for `?`-style callers.
    #[inline]
    pub fn into_result(self) -> Result<F, MathError> {
        match self.error {
            None => Ok(self.value),
            Some(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for err in [MathError::Domain, MathError::Singularity, MathError::Range] {
            assert_eq!(MathError::from_code(err.code()), Some(err));
        }
        assert_eq!(MathError::from_code(0), None);
    }

    #[test]
    fn singularity_is_a_domain_error() {
        assert!(MathError::Singularity.is_domain());
        assert!(MathError::Domain.is_domain());
        assert!(!MathError::Range.is_domain());
        assert!(MathError::Range.is_range());
    }

    #[test]
    fn into_result_keeps_value_or_error() {
        assert_eq!(Outcome::ok(2.0f64).into_result(), Ok(2.0));
        assert_eq!(
            Outcome::fail(f64::INFINITY, MathError::Range).into_result(),
            Err(MathError::Range)
        );
        let out = Outcome::signed(-1.5f32, -1);
        assert!(out.is_ok());
        assert_eq!(out.sign, -1);
    }
}
