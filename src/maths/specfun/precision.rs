//! Per-precision descriptor: thresholds, constants and coefficient tables.
//!
//! One instance exists for each floating-point format (`SINGLE`, `DOUBLE`,
//! `EXTENDED`); kernels reach it through [`Real::PRECISION`](super::Real).

/// Mathematical constants rounded to the working precision.
#[derive(Clone, Copy, Debug)]
pub struct Constants<F> {
    pub pi: F,
    /// `log(π)`
    pub log_pi: F,
    /// `log(√(2π))`
    pub log_sqrt_2pi: F,
    /// `√(2π)`
    pub sqrt_2pi: F,
    /// Euler–Mascheroni constant.
    pub euler: F,
    pub cbrt2: F,
    pub cbrt4: F,
    pub ln2: F,
}

#[derive(Clone, Copy, Debug)]
pub struct CbrtCoeffs<F: 'static> {
    pub poly: &'static [F],
    pub newton_steps: u32,
}

#[derive(Clone, Copy, Debug)]
pub struct LgammaCoeffs<F: 'static> {
    /// Arguments below this use the reflection formula.
    pub reflect_below: F,
    /// Arguments from here on use the asymptotic expansion.
    pub asymptotic_from: F,
    /// Largest argument with a finite result.
    pub overflow: F,
    /// Above this the `A(1/x²)/x` correction is below half an ulp.
    pub correction_cutoff: F,
    pub p: &'static [F],
    /// Monic.
    pub q: &'static [F],
    pub stirling: &'static [F],
}

#[derive(Clone, Copy, Debug)]
pub struct TgammaCoeffs<F: 'static> {
    /// `|x|` above this uses Stirling's formula.
    pub asymptotic_above: F,
    /// Largest argument with a finite result.
    pub overflow: F,
    /// Above this `x^(x-0.5)` is formed from two half powers.
    pub pow_split: F,
    /// Shifted arguments closer than this to zero use `1 / ((1 + γx) x)`.
    pub small: F,
    pub p: &'static [F],
    pub q: &'static [F],
    pub stirling: &'static [F],
}

#[derive(Clone, Copy, Debug)]
pub struct ErfCoeffs<F: 'static> {
    pub t: &'static [F],
    /// Monic.
    pub u: &'static [F],
    /// Start of the `y R(y²)/S(y²)` regime.
    pub fine_from: F,
    pub coarse_p: &'static [F],
    /// Monic.
    pub coarse_q: &'static [F],
    pub fine_r: &'static [F],
    /// Monic.
    pub fine_s: &'static [F],
}

#[derive(Clone, Copy, Debug)]
pub struct HyperbolicCoeffs<F: 'static> {
    pub sinh_p: &'static [F],
    /// Monic.
    pub sinh_q: &'static [F],
    pub tanh_p: &'static [F],
    /// Monic.
    pub tanh_q: &'static [F],
    /// `|x|` below this uses the tanh rational.
    pub tanh_rational_below: F,
}

/// Everything a kernel needs to know about one floating-point format.
#[derive(Clone, Copy, Debug)]
pub struct Precision<F: 'static> {
    pub name: &'static str,
    /// Distance from 1 to the next larger representable value.
    pub epsilon: F,
    /// `log` of the largest finite value.
    pub maxlog: F,
    pub maxnum: F,
    pub min_normal: F,
    pub consts: Constants<F>,
    pub cbrt: CbrtCoeffs<F>,
    pub lgamma: LgammaCoeffs<F>,
    pub tgamma: TgammaCoeffs<F>,
    pub erf: ErfCoeffs<F>,
    pub hyperbolic: HyperbolicCoeffs<F>,
}
