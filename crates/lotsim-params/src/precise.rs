//! High-precision ("HP") forms of the lottery parameters.
//!
//! Each `*_HP` static holds the exact rational value of the corresponding
//! binary float in [`crate::constants`], so converting an HP form back to
//! `f64` reproduces the float form bit-for-bit. Sums and products of HP
//! values stay exact; drift between the two forms of one logical constant
//! indicates a transcription bug.

use std::sync::LazyLock;

use num::bigint::BigUint;
use num::{BigRational, One, Signed, ToPrimitive, Zero};

use crate::constants::{EPSILON, F_MAX, F_MIN, L, REWARD};
use crate::error::{ParamError, Result};

/// Exact rational value of `L`.
pub static L_HP: LazyLock<BigRational> = LazyLock::new(|| exact(L));

/// Exact rational value of `REWARD`.
pub static REWARD_HP: LazyLock<BigRational> = LazyLock::new(|| exact(REWARD));

/// Exact baseline target: `L_HP` times the exact value of the float 0.01.
pub static BASE_L_HP: LazyLock<BigRational> = LazyLock::new(|| &*L_HP * exact(0.01));

/// Exact rational value of `F_MIN`.
pub static F_MIN_HP: LazyLock<BigRational> = LazyLock::new(|| exact(F_MIN));

/// Exact rational value of `F_MAX`.
pub static F_MAX_HP: LazyLock<BigRational> = LazyLock::new(|| exact(F_MAX));

/// Exact rational value of `EPSILON`.
pub static EPSILON_HP: LazyLock<BigRational> = LazyLock::new(|| exact(EPSILON));

/// Exact rational value of a finite float.
///
/// Panics on NaN or infinity; use [`try_exact`] for values that are not
/// known to be finite.
pub fn exact(f: f64) -> BigRational {
    BigRational::from_float(f).expect("finite float has an exact rational form")
}

/// Fallible form of [`exact`].
pub fn try_exact(f: f64) -> Result<BigRational> {
    BigRational::from_float(f).ok_or(ParamError::NonFinite(f))
}

/// Nearest `f64` to an exact rational value.
pub fn to_f64(r: &BigRational) -> f64 {
    r.to_f64().unwrap_or(f64::NAN)
}

/// Exact terminating decimal expansion of a rational value.
///
/// Returns `None` when the denominator has a prime factor other than 2 or 5,
/// i.e. when no terminating expansion exists. Values built by [`exact`] and
/// their products always terminate.
pub fn decimal_string(r: &BigRational) -> Option<String> {
    let two = BigUint::from(2u32);
    let five = BigUint::from(5u32);

    let mut d = r.denom().magnitude().clone();
    let (mut twos, mut fives) = (0usize, 0usize);
    while (&d % &two).is_zero() {
        d /= &two;
        twos += 1;
    }
    while (&d % &five).is_zero() {
        d /= &five;
        fives += 1;
    }
    if !d.is_one() {
        return None;
    }

    // Scale to an integer over 10^k, with k just large enough.
    let k = twos.max(fives);
    let scale = num::pow::pow(two, k - twos) * num::pow::pow(five, k - fives);
    let digits = (r.numer().magnitude() * scale).to_str_radix(10);
    let sign = if r.numer().is_negative() { "-" } else { "" };

    if k == 0 {
        return Some(format!("{sign}{digits}"));
    }
    let padded = format!("{digits:0>width$}", width = k + 1);
    let (int_part, frac_part) = padded.split_at(padded.len() - k);
    Some(format!("{sign}{int_part}.{frac_part}"))
}
