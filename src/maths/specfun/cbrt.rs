//! cbrt(x) implementation.
//!
//! Splits the exponent by 3, approximates the cube root of the mantissa with a
//! polynomial on [0.5, 1) and refines with Newton steps.

use super::poly::polevl;
use super::{Outcome, Real};

pub fn cbrt<F: Real>(x: F) -> Outcome<F> {
    if x.is_nan() || x.is_infinite() || x == F::ZERO {
        return Outcome::ok(x);
    }
    let p = F::PRECISION;
    let c = &p.consts;

    let z = x.abs();
    let (m, e) = z.frexp();
    let mut y = polevl(m, p.cbrt.poly);

    let q = if e >= 0 {
        match e % 3 {
            1 => y = y * c.cbrt2,
            2 => y = y * c.cbrt4,
            _ => {}
        }
        e / 3
    } else {
        let ne = -e;
        match ne % 3 {
            1 => y = y / c.cbrt2,
            2 => y = y / c.cbrt4,
            _ => {}
        }
        -(ne / 3)
    };
    y = y.ldexp(q);

    let three = F::from_f64(3.0);
    for _ in 0..p.cbrt.newton_steps {
        y = y - (y - z / (y * y)) / three;
    }

    Outcome::ok(if x.is_sign_negative() { -y } else { y })
}
