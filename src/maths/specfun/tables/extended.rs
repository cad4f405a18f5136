//! Extended-precision coefficients and thresholds, hosted on [`DoubleDouble`].
//!
//! Coefficients and constants are x87 80-bit words (64-bit significand) so the
//! accuracy matches a native `long double`; the range is that of `f64`.

use super::super::dd::DoubleDouble;
use super::super::precision::{
    CbrtCoeffs, Constants, ErfCoeffs, HyperbolicCoeffs, LgammaCoeffs, Precision, TgammaCoeffs,
};
use super::super::x87::{X87, words};

const PI: X87 = X87::new(0x4000, 0xc90f_daa2_2168_c235);
const LOG_PI: X87 = X87::new(0x3fff, 0x9286_8247_3d0d_e85f);
const LOG_SQRT_2PI: X87 = X87::new(0x3ffe, 0xeb3f_8e43_25f5_a535);
const SQRT_2PI: X87 = X87::new(0x4000, 0xa06c_98ff_b138_2cb3);
const EULER: X87 = X87::new(0x3ffe, 0x93c4_67e3_7db0_c7a5);
const CBRT2: X87 = X87::new(0x3fff, 0xa145_17cc_6b94_5711);
const CBRT4: X87 = X87::new(0x3fff, 0xcb2f_f529_eb71_e416);
const LN2: X87 = X87::new(0x3ffe, 0xb172_17f7_d1cf_79ac);
/// 2^-63
const EPSILON: X87 = X87::new(0x3fc0, 0x8000_0000_0000_0000);
const MAXLOG: X87 = X87::new(0x4008, 0xb172_17f7_d1cf_7800);

/// `cbrt(m)` for `m` in `[0.5, 1)`.
const CBRT_WORDS: [X87; 6] = [
    X87::new(0x3ffc, 0x8b18_cc66_f0f7_fd14),
    X87::new(0xbffe, 0xa3cc_8cfc_18c8_69bc),
    X87::new(0x3fff, 0xa4cd_33fa_2518_e899),
    X87::new(0xbfff, 0xbead_bf6f_4f5e_74fd),
    X87::new(0x3fff, 0xaa4d_55f1_3cc4_6b37),
    X87::new(0x3ffd, 0xc059_b31d_27f9_1cf4),
];

/// `log Γ(2 + t) = t P(t) / Q(t)` on `[0, 1)`; `Q` monic.
const LGAMMA_P_WORDS: [X87; 8] = [
    X87::new(0x4001, 0xa470_0de7_ad1a_6f2a),
    X87::new(0x4007, 0xddb4_b6a3_6c0b_4359),
    X87::new(0x400c, 0x9d0b_3083_0510_5633),
    X87::new(0x400f, 0xb8c4_a537_041a_ef09),
    X87::new(0x4011, 0xd479_4051_74d4_a139),
    X87::new(0x4012, 0xf958_8e73_6ab5_714b),
    X87::new(0x4013, 0x8ce6_6f07_36a2_352f),
    X87::new(0x4011, 0xebe2_4700_b0f3_2af7),
];
const LGAMMA_Q_WORDS: [X87; 7] = [
    X87::new(0x4006, 0x8d3d_602d_8a18_b766),
    X87::new(0x400b, 0x8f84_4e83_6eb7_465c),
    X87::new(0x400e, 0xe7d4_d660_2f52_bccb),
    X87::new(0x4011, 0xb477_109e_5bac_849b),
    X87::new(0x4013, 0x900f_12d1_32e2_dbc7),
    X87::new(0x4013, 0xe2e1_7d47_c016_4dfc),
    X87::new(0x4013, 0x8b7b_7e9a_65de_9eb6),
];

/// `Γ(2 + t) = P(t) / Q(t)` on `[0, 1)`.
const TGAMMA_P_WORDS: [X87; 9] = [
    X87::new(0xbffe, 0xe5b9_db4d_bf95_6a62),
    X87::new(0xc002, 0xb01d_b68b_fd3f_18ce),
    X87::new(0xc005, 0xe289_1fe5_5322_93e5),
    X87::new(0xc008, 0xc27c_d549_7714_0f3f),
    X87::new(0xc00b, 0x8a46_0d0f_7553_6982),
    X87::new(0xc00d, 0x91c4_c36a_9a80_70a9),
    X87::new(0xc00e, 0xf355_18c4_e398_58dd),
    X87::new(0xc010, 0x8665_b04b_42fc_237f),
    X87::new(0xc010, 0xbf6c_b98d_6de0_198f),
];
const TGAMMA_Q_WORDS: [X87; 9] = [
    X87::new(0x3fff, 0x8000_0000_0000_0000),
    X87::new(0xc003, 0x8466_6b61_4d93_3562),
    X87::new(0x4005, 0x8563_8a1d_cc28_dff8),
    X87::new(0x4007, 0xbc05_ccf6_9430_7bec),
    X87::new(0xc00a, 0xdade_2ca3_b712_147f),
    X87::new(0x400a, 0x8fbb_2d45_b91b_f44e),
    X87::new(0x400e, 0xa26e_6cf9_3dd9_8b22),
    X87::new(0xc00e, 0xd5dd_08db_d622_39b8),
    X87::new(0xc010, 0xbf6c_b98d_6de0_198f),
];

/// Stirling correction `1 + w STIR(w)`, `w = 1/x`, for `Γ`.
const TGAMMA_STIRLING_WORDS: [X87; 7] = [
    X87::new(0xbff4, 0x9b24_ef9b_0223_796c),
    X87::new(0x3ff1, 0x9207_3546_83dd_1820),
    X87::new(0x3ff4, 0xcd88_2cb7_03bb_b01c),
    X87::new(0xbff2, 0xf09e_74b6_42f0_f2f1),
    X87::new(0xbff6, 0xafb9_3476_9b3d_71e4),
    X87::new(0x3ff6, 0xe38e_38e3_8e19_e3a2),
    X87::new(0x3ffb, 0xaaaa_aaaa_aaaa_aac0),
];

/// Asymptotic correction `A(1/x²) / x` for `log Γ`.
const LGAMMA_STIRLING_WORDS: [X87; 7] = [
    X87::new(0x3ff7, 0xbf71_42b0_d0b6_ded4),
    X87::new(0xbff5, 0xfabe_6dd9_fab9_1c22),
    X87::new(0x3ff4, 0xdca7_bd5d_7ce8_61aa),
    X87::new(0xbff4, 0x9c09_bffa_21ef_dd24),
    X87::new(0x3ff4, 0xd00d_00cf_e461_c99b),
    X87::new(0xbff6, 0xb60b_60b6_0b5f_c130),
    X87::new(0x3ffb, 0xaaaa_aaaa_aaaa_aaab),
];

/// `erf(x) = x T(x²) / U(x²)` for `|x| < 1`; `U` monic.
const ERF_T_WORDS: [X87; 7] = [
    X87::new(0x3ffb, 0xe0c4_7060_e8f6_3f10),
    X87::new(0x4001, 0xace5_3713_5dd5_e044),
    X87::new(0x4007, 0x8f97_5410_f46f_d378),
    X87::new(0x400a, 0xa757_9094_43f6_829d),
    X87::new(0x400e, 0xbc83_c611_0480_5463),
    X87::new(0x4010, 0x975b_a4c0_914e_8a72),
    X87::new(0x4013, 0x86d0_0b2e_0bfb_062f),
];
const ERF_U_WORDS: [X87; 6] = [
    X87::new(0x4004, 0xb507_f689_7000_a97d),
    X87::new(0x4008, 0xf2e2_21cd_cf9d_6504),
    X87::new(0x400c, 0xc2ac_3b87_fba0_3e77),
    X87::new(0x400f, 0xc232_c80b_595a_c413),
    X87::new(0x4011, 0xe25e_45b6_935f_3927),
    X87::new(0x4012, 0xeef3_0134_8a10_3d98),
];

/// `erfc(x) exp(x²) = P(1/x) / Q(1/x)` for `1 <= x < 8`; `Q` monic.
const ERFC_P_WORDS: [X87; 11] = [
    X87::new(0x3ffe, 0xffff_ffff_e08b_9f96),
    X87::new(0x4000, 0x899f_58d4_ab02_a163),
    X87::new(0x4000, 0x92f9_287b_bb49_78ab),
    X87::new(0x3fff, 0xc7c0_dc66_b73e_c5b2),
    X87::new(0x3ffe, 0xbc6f_07ed_8f6a_e2d6),
    X87::new(0x3ffc, 0xfed7_9975_941f_d11f),
    X87::new(0x3ffa, 0xf71b_eabd_cb3c_f8c0),
    X87::new(0x3ff8, 0xa658_b6b8_6f2c_1498),
    X87::new(0x3ff5, 0x8e5e_4782_85e1_f71c),
    X87::new(0x3ff0, 0xf07f_fa0b_9fd8_4ab5),
    X87::new(0x3fcb, 0xb4b8_0552_64b1_88f4),
];
const ERFC_Q_WORDS: [X87; 10] = [
    X87::new(0x4000, 0xd1d6_b615_5146_4552),
    X87::new(0x4001, 0x9fe0_1dcd_ed74_1caa),
    X87::new(0x4001, 0x957d_bf8a_aa5a_5691),
    X87::new(0x4000, 0xbe93_25f8_49c8_3785),
    X87::new(0x3fff, 0xadb7_21d9_a957_747a),
    X87::new(0x3ffd, 0xe66d_cc76_e426_8f93),
    X87::new(0x3ffb, 0xdcf7_52c3_3c97_16a4),
    X87::new(0x3ff9, 0x93d6_49f1_994a_b5e4),
    X87::new(0x3ff5, 0xfc57_591b_722a_8689),
    X87::new(0x3ff1, 0xd523_32e2_0890_d13e),
];

/// `erfc(x) exp(x²) = y R(y²) / S(y²)`, `y = 1/x`, for `x >= 8`; `S` monic.
const ERFC_R_WORDS: [X87; 6] = [
    X87::new(0x3ffc, 0xcd66_bd82_5b49_6ea2),
    X87::new(0x3fff, 0xba16_e6d7_8d84_8e8b),
    X87::new(0x3fff, 0xc322_3491_c646_9790),
    X87::new(0x3ffe, 0x8229_fbaf_b743_6ac3),
    X87::new(0x3ffb, 0x816b_b863_34c8_ed52),
    X87::new(0x3ff6, 0xa543_aa47_290c_997e),
];
const ERFC_S_WORDS: [X87; 5] = [
    X87::new(0x4000, 0xe62e_c796_4a3c_4a11),
    X87::new(0x4000, 0xc68b_70ca_6651_56c8),
    X87::new(0x3ffe, 0xf479_7e55_5367_e5f9),
    X87::new(0x3ffb, 0xe9f8_237f_cd98_dcb7),
    X87::new(0x3ff7, 0x9276_3127_66fb_e8b8),
];

/// `sinh(x) = x + x z P(z) / Q(z)`, `z = x²`, for `|x| <= 1`; `Q` monic.
const SINH_P_WORDS: [X87; 5] = [
    X87::new(0x4000, 0x85c8_5da5_627e_5645),
    X87::new(0x4008, 0xc7d0_6f27_a8e6_84c4),
    X87::new(0x400f, 0xe57f_e38e_0ba9_ce63),
    X87::new(0x4015, 0xe1a0_ee89_d502_5da5),
    X87::new(0x401a, 0xc6dd_4aa6_ef8b_1155),
];
const SINH_Q_WORDS: [X87; 4] = [
    X87::new(0xc007, 0xf96c_e39a_2d27_fa84),
    X87::new(0x400f, 0xf4f0_ac28_bfbb_7bb3),
    X87::new(0xc017, 0x8ad4_e6f5_18fd_69ee),
    X87::new(0x401d, 0x9525_f7fd_33a8_4d00),
];

/// `tanh(x) = x + x s P(s) / Q(s)`, `s = x²`, for `|x| < 0.625`; `Q` monic.
const TANH_P_WORDS: [X87; 4] = [
    X87::new(0xbff1, 0x8fbb_2e2a_acbf_48cb),
    X87::new(0xbffe, 0xf4e2_24e6_527e_199c),
    X87::new(0xc005, 0xa814_4c3c_3760_81c4),
    X87::new(0xc009, 0xa378_64b2_5eb1_792d),
];
const TANH_Q_WORDS: [X87; 3] = [
    X87::new(0x4005, 0xc07d_1e68_bb86_b607),
    X87::new(0x4009, 0xe3ad_e0ba_ef37_0fc5),
    X87::new(0x400a, 0xf534_970b_8e0a_35c3),
];

const CBRT: [DoubleDouble; 6] = words(CBRT_WORDS);
const LGAMMA_P: [DoubleDouble; 8] = words(LGAMMA_P_WORDS);
const LGAMMA_Q: [DoubleDouble; 7] = words(LGAMMA_Q_WORDS);
const TGAMMA_P: [DoubleDouble; 9] = words(TGAMMA_P_WORDS);
const TGAMMA_Q: [DoubleDouble; 9] = words(TGAMMA_Q_WORDS);
const TGAMMA_STIRLING: [DoubleDouble; 7] = words(TGAMMA_STIRLING_WORDS);
const LGAMMA_STIRLING: [DoubleDouble; 7] = words(LGAMMA_STIRLING_WORDS);
const ERF_T: [DoubleDouble; 7] = words(ERF_T_WORDS);
const ERF_U: [DoubleDouble; 6] = words(ERF_U_WORDS);
const ERFC_P: [DoubleDouble; 11] = words(ERFC_P_WORDS);
const ERFC_Q: [DoubleDouble; 10] = words(ERFC_Q_WORDS);
const ERFC_R: [DoubleDouble; 6] = words(ERFC_R_WORDS);
const ERFC_S: [DoubleDouble; 5] = words(ERFC_S_WORDS);
const SINH_P: [DoubleDouble; 5] = words(SINH_P_WORDS);
const SINH_Q: [DoubleDouble; 4] = words(SINH_Q_WORDS);
const TANH_P: [DoubleDouble; 4] = words(TANH_P_WORDS);
const TANH_Q: [DoubleDouble; 3] = words(TANH_Q_WORDS);

const fn dd(x: f64) -> DoubleDouble {
    DoubleDouble::from_f64(x)
}

pub const EXTENDED: Precision<DoubleDouble> = Precision {
    name: "extended",
    epsilon: EPSILON.to_dd(),
    maxlog: MAXLOG.to_dd(),
    maxnum: DoubleDouble::MAX,
    min_normal: DoubleDouble::MIN_POSITIVE,
    consts: Constants {
        pi: PI.to_dd(),
        log_pi: LOG_PI.to_dd(),
        log_sqrt_2pi: LOG_SQRT_2PI.to_dd(),
        sqrt_2pi: SQRT_2PI.to_dd(),
        euler: EULER.to_dd(),
        cbrt2: CBRT2.to_dd(),
        cbrt4: CBRT4.to_dd(),
        ln2: LN2.to_dd(),
    },
    cbrt: CbrtCoeffs {
        poly: &CBRT,
        newton_steps: 2,
    },
    lgamma: LgammaCoeffs {
        reflect_below: dd(-34.0),
        asymptotic_from: dd(13.0),
        overflow: dd(2.556_348e305),
        correction_cutoff: dd(1.0e12),
        p: &LGAMMA_P,
        q: &LGAMMA_Q,
        stirling: &LGAMMA_STIRLING,
    },
    tgamma: TgammaCoeffs {
        asymptotic_above: dd(33.0),
        overflow: dd(171.624_376_956_302_7),
        pow_split: dd(143.016_08),
        small: dd(1.0e-11),
        p: &TGAMMA_P,
        q: &TGAMMA_Q,
        stirling: &TGAMMA_STIRLING,
    },
    erf: ErfCoeffs {
        t: &ERF_T,
        u: &ERF_U,
        fine_from: dd(8.0),
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
        tanh_rational_below: dd(0.625),
    },
};
