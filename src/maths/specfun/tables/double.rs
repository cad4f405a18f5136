//! Double-precision (`f64`) coefficients and thresholds.
//!
//! The lgamma, gamma, erf and tanh rationals are the Cephes coefficients;
//! the rest are minimax fits on the same reduced intervals.

use super::super::precision::{
    CbrtCoeffs, Constants, ErfCoeffs, HyperbolicCoeffs, LgammaCoeffs, Precision, TgammaCoeffs,
};

/// `cbrt(m)` for `m` in `[0.5, 1)`.
const CBRT: [f64; 9] = [
    -1.850_434_088_712_631e-1,
    1.265_850_506_494_525_4,
    -3.848_252_767_984_619,
    6.850_188_005_166_906,
    -7.929_471_985_311_428,
    6.299_451_662_697_735,
    -3.612_420_840_986_922,
    1.835_677_203_634_624_7,
    3.240_216_215_767_172_7e-1,
];

/// `log Γ(2 + t) = t P(t) / Q(t)` on `[0, 1)`; `Q` monic.
const LGAMMA_P: [f64; 6] = [
    -1.378_251_525_691_208_6e3,
    -3.880_163_151_346_378_4e4,
    -3.316_129_927_388_712e5,
    -1.162_370_974_927_623e6,
    -1.721_737_008_208_396_6e6,
    -8.535_556_642_457_654e5,
];
const LGAMMA_Q: [f64; 6] = [
    -3.518_157_014_365_234_5e2,
    -1.706_421_066_518_811_5e4,
    -2.205_285_905_538_544_5e5,
    -1.139_334_443_679_825_2e6,
    -2.532_523_071_775_829_4e6,
    -2.018_891_414_335_327_7e6,
];

/// `Γ(2 + t) = P(t) / Q(t)` on `[0, 1)`.
const TGAMMA_P: [f64; 7] = [
    1.601_195_224_767_518_5e-4,
    1.191_351_470_065_863_8e-3,
    1.042_137_975_617_615_8e-2,
    4.763_678_004_571_372e-2,
    2.074_482_276_484_359_8e-1,
    4.942_148_268_014_971e-1,
    1.0,
];
const TGAMMA_Q: [f64; 8] = [
    -2.315_818_733_241_201_4e-5,
    5.396_055_804_933_034e-4,
    -4.456_419_138_517_973e-3,
    1.181_397_852_220_604_3e-2,
    3.582_363_986_054_986_5e-2,
    -2.345_917_957_182_433_5e-1,
    7.143_049_170_302_73e-2,
    1.0,
];

/// Stirling correction `1 + w STIR(w)`, `w = 1/x`, for `Γ`.
const TGAMMA_STIRLING: [f64; 5] = [
    7.873_113_957_930_937e-4,
    -2.295_499_616_133_781_3e-4,
    -2.681_326_178_057_812_4e-3,
    3.472_222_216_054_586_6e-3,
    8.333_333_333_334_822e-2,
];

/// Asymptotic correction `A(1/x²) / x` for `log Γ`.
const LGAMMA_STIRLING: [f64; 5] = [
    8.116_141_674_705_085e-4,
    -5.950_619_042_843_014e-4,
    7.936_503_404_577_169e-4,
    -2.777_777_777_300_997e-3,
    8.333_333_333_333_319e-2,
];

/// `erf(x) = x T(x²) / U(x²)` for `|x| < 1`; `U` monic.
const ERF_T: [f64; 5] = [
    9.604_973_739_870_516,
    9.002_601_972_038_427e1,
    2.232_005_345_946_843e3,
    7.003_325_141_128_051e3,
    5.559_230_130_103_949e4,
];
const ERF_U: [f64; 5] = [
    3.356_171_416_475_031e1,
    5.213_579_497_801_527e2,
    4.594_323_829_709_801e3,
    2.262_900_006_138_909_5e4,
    4.926_739_426_086_359e4,
];

/// `erfc(x) exp(x²) = P(1/x) / Q(1/x)` for `1 <= x < 8`; `Q` monic.
const ERFC_P: [f64; 9] = [
    9.999_999_902_246_935e-1,
    1.843_066_247_557_537_7,
    1.676_246_635_525_579_4,
    9.442_930_689_785_578e-1,
    3.525_096_819_154_568_4e-1,
    8.724_504_791_385_988e-2,
    1.338_780_165_385_240_4e-2,
    1.012_099_260_325_832e-3,
    4.410_069_557_405_426_4e-13,
];
const ERFC_Q: [f64; 8] = [
    2.971_445_309_776_322_5,
    4.029_164_161_099_131,
    3.271_523_635_026_039_5,
    1.750_146_980_320_732_3,
    6.366_710_092_014_229e-1,
    1.555_348_188_104_488_4e-1,
    2.372_925_846_502_469_2e-2,
    1.793_899_290_897_658_2e-3,
];

/// `erfc(x) exp(x²) = y R(y²) / S(y²)`, `y = 1/x`, for `x >= 8`; `S` monic.
const ERFC_R: [f64; 5] = [
    3.620_669_779_456_138,
    7.169_929_971_445_136_6,
    3.442_160_768_961_918_5,
    5.531_209_721_121_225e-1,
    2.693_726_384_894_338_7e-2,
];
const ERFC_S: [f64; 5] = [
    1.072_577_539_119_614_3e1,
    1.532_839_616_658_349_7e1,
    6.567_389_280_379_856,
    1.004_253_925_557_693,
    4.774_505_704_191_765e-2,
];

/// `sinh(x) = x + x z P(z) / Q(z)`, `z = x²`, for `|x| <= 1`; `Q` monic.
const SINH_P: [f64; 4] = [
    -7.873_051_685_178_112e-1,
    -1.633_526_121_449_160_7e2,
    -1.153_729_767_392_845_7e4,
    -3.510_822_743_240_627e5,
];
const SINH_Q: [f64; 3] = [
    -2.774_299_546_683_718e2,
    3.610_089_625_364_822e4,
    -2.106_493_645_944_376e6,
];

/// `tanh(x) = x + x s P(s) / Q(s)`, `s = x²`, for `|x| < 0.625`; `Q` monic.
const TANH_P: [f64; 3] = [
    -9.643_991_794_250_523e-1,
    -9.928_772_310_019_185e1,
    -1.614_687_684_417_084_5e3,
];
const TANH_Q: [f64; 3] = [
    1.128_116_784_916_329_3e2,
    2.235_488_390_601_004_5e3,
    4.844_063_053_251_255e3,
];

pub const DOUBLE: Precision<f64> = Precision {
    name: "double",
    epsilon: f64::EPSILON,
    maxlog: 7.097_827_128_933_84e2,
    maxnum: f64::MAX,
    min_normal: f64::MIN_POSITIVE,
    consts: Constants {
        pi: core::f64::consts::PI,
        log_pi: 1.144_729_885_849_400_2,
        log_sqrt_2pi: 0.918_938_533_204_672_8,
        sqrt_2pi: 2.506_628_274_631_000_7,
        euler: 0.577_215_664_901_532_9,
        cbrt2: 1.259_921_049_894_873_2,
        cbrt4: 1.587_401_051_968_199_6,
        ln2: core::f64::consts::LN_2,
    },
    cbrt: CbrtCoeffs {
        poly: &CBRT,
        newton_steps: 1,
    },
    lgamma: LgammaCoeffs {
        reflect_below: -34.0,
        asymptotic_from: 13.0,
        overflow: 2.556_348e305,
        correction_cutoff: 1.0e8,
        p: &LGAMMA_P,
        q: &LGAMMA_Q,
        stirling: &LGAMMA_STIRLING,
    },
    tgamma: TgammaCoeffs {
        asymptotic_above: 33.0,
        overflow: 171.624_376_956_302_7,
        pow_split: 143.016_08,
        small: 1.0e-9,
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
