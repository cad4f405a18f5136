//! Single-precision (`f32`) coefficients and thresholds.
//!
//! Minimax fits on the reduced intervals, about 1e-7 relative.

use super::super::precision::{
    CbrtCoeffs, Constants, ErfCoeffs, HyperbolicCoeffs, LgammaCoeffs, Precision, TgammaCoeffs,
};

/// `cbrt(m)` for `m` in `[0.5, 1)`.
const CBRT: [f32; 5] = [
    -1.346_561_8e-1,
    5.466_313_4e-1,
    -9.543_662e-1,
    1.139_990_7,
    4.023_911_4e-1,
];

/// `log Γ(2 + t) = t P(t) / Q(t)` on `[0, 1)`; `Q` monic.
const LGAMMA_P: [f32; 4] = [
    3.672_977_4,
    5.317_806_6e1,
    1.610_846_9e2,
    1.115_884_4e2,
];
const LGAMMA_Q: [f32; 3] = [
    3.076_738_5e1,
    1.796_984_9e2,
    2.639_37e2,
];

/// `Γ(2 + t) = P(t) / Q(t)` on `[0, 1)`.
const TGAMMA_P: [f32; 5] = [
    4.231_230_6e-1,
    1.305_555_8,
    7.012_772,
    1.303_415e1,
    2.982_224_7e1,
];
const TGAMMA_Q: [f32; 4] = [
    1.0,
    -5.449_086_7,
    4.257_635e-1,
    2.982_224_7e1,
];

/// Stirling correction `1 + w STIR(w)`, `w = 1/x`, for `Γ`.
const TGAMMA_STIRLING: [f32; 3] = [
    -2.690_449_1e-3,
    3.472_320_3e-3,
    8.333_333_6e-2,
];

/// Asymptotic correction `A(1/x²) / x` for `log Γ`.
const LGAMMA_STIRLING: [f32; 2] = [
    -2.773_102_1e-3,
    8.333_333e-2,
];

/// `erf(x) = x T(x²) / U(x²)` for `|x| < 1`; `U` monic.
const ERF_T: [f32; 4] = [
    6.663_939e-4,
    6.419_279_6,
    2.172_129_8e1,
    2.153_676e2,
];
const ERF_U: [f32; 3] = [
    1.422_631_3e1,
    8.287_152e1,
    1.908_645_6e2,
];

/// `erfc(x) exp(x²) = P(1/x) / Q(1/x)` for `1 <= x < 8`; `Q` monic.
const ERFC_P: [f32; 5] = [
    9.995_835_4e-1,
    1.084_719_9,
    5.354_075e-1,
    1.234_840_15e-1,
    5.773_559e-7,
];
const ERFC_Q: [f32; 4] = [
    2.210_401,
    2.037_901_6,
    9.483_671e-1,
    2.189_077e-1,
];

/// `erfc(x) exp(x²) = y R(y²) / S(y²)`, `y = 1/x`, for `x >= 8`; `S` monic.
const ERFC_R: [f32; 3] = [
    2.954_102_5e-1,
    6.993_499e-1,
    1.617_940_7e-1,
];
const ERFC_S: [f32; 2] = [
    1.382_951_6,
    2.867_725e-1,
];

/// `sinh(x) = x + x z P(z) / Q(z)`, `z = x²`, for `|x| <= 1`; `Q` monic.
const SINH_P: [f32; 4] = [
    2.806_141_8e-6,
    1.983_812_3e-4,
    8.333_339e-3,
    1.666_666_7e-1,
];
const SINH_Q: [f32; 0] = [];

/// `tanh(x) = x + x s P(s) / Q(s)`, `s = x²`, for `|x| < 0.625`; `Q` monic.
const TANH_P: [f32; 3] = [
    -3.621_434_4e-4,
    -9.231_949e-1,
    -1.906_104_9e1,
];
const TANH_Q: [f32; 2] = [
    2.564_284_1e1,
    5.718_314_4e1,
];

pub const SINGLE: Precision<f32> = Precision {
    name: "single",
    epsilon: f32::EPSILON,
    maxlog: 88.722_84,
    maxnum: f32::MAX,
    min_normal: f32::MIN_POSITIVE,
    consts: Constants {
        pi: core::f32::consts::PI,
        log_pi: 1.144_729_9,
        log_sqrt_2pi: 0.918_938_5,
        sqrt_2pi: 2.506_628_3,
        euler: 0.577_215_7,
        cbrt2: 1.259_921_1,
        cbrt4: 1.587_401,
        ln2: core::f32::consts::LN_2,
    },
    cbrt: CbrtCoeffs {
        poly: &CBRT,
        newton_steps: 1,
    },
    lgamma: LgammaCoeffs {
        reflect_below: -34.0,
        asymptotic_from: 13.0,
        overflow: 2.035_093e36,
        correction_cutoff: 1.0e4,
        p: &LGAMMA_P,
        q: &LGAMMA_Q,
        stirling: &LGAMMA_STIRLING,
    },
    tgamma: TgammaCoeffs {
        asymptotic_above: 33.0,
        overflow: 35.040_096,
        pow_split: 26.77,
        small: 1.0e-4,
        p: &TGAMMA_P,
        q: &TGAMMA_Q,
        stirling: &TGAMMA_STIRLING,
    },
    erf: ErfCoeffs {
        t: &ERF_T,
        u: &ERF_U,
        fine_from: 8.0,
        coarse_p: &ERFC_P,
        coarse_q: &ERFC_Q,
        fine_r: &ERFC_R,
        fine_s: &ERFC_S,
    },
    hyperbolic: HyperbolicCoeffs {
        sinh_p: &SINH_P,
        sinh_q: &SINH_Q,
        tanh_p: &TANH_P,
        tanh_q: &TANH_Q,
        tanh_rational_below: 0.625,
    },
};
