//! Special functions in single (`f32`), double (`f64`) and extended
//! ([`DoubleDouble`]) precision.
//!
//! Every kernel is generic over [`Real`] and returns an [`Outcome`] carrying
//! the value, the sign of the underlying quantity and the error class. The
//! [`legacy`] module wraps them in C-named functions with an errno-style
//! indicator and `signgam`.
#![allow(clippy::excessive_precision)]
#![allow(clippy::unreadable_literal)]

mod cbrt;
mod cosh;
mod dd;
mod erf;
mod error;
pub mod legacy;
mod lgamma;
mod poly;
mod precision;
mod real;
mod sinh;
mod tables;
mod tanh;
mod tgamma;
mod x87;

pub use cbrt::cbrt;
pub use cosh::cosh;
pub use dd::DoubleDouble;
pub use erf::{erf, erfc};
pub use error::{MathError, Outcome};
pub use lgamma::lgamma;
pub use precision::{
    CbrtCoeffs, Constants, ErfCoeffs, HyperbolicCoeffs, LgammaCoeffs, Precision, TgammaCoeffs,
};
pub use real::Real;
pub use sinh::sinh;
pub use tables::{DOUBLE, EXTENDED, SINGLE};
pub use tanh::tanh;
pub use tgamma::tgamma;
pub use x87::X87;
