/// Number of terms kept in the controller's series approximation.
pub const N_TERM: i64 = 2;

/// Tag for the continuous (analogue) controller variant.
pub const CONTROLLER_TYPE_ANALOGUE: i64 = -1;

/// Tag for the discrete controller variant.
pub const CONTROLLER_TYPE_DISCRETE: i64 = 0;

/// Tag for the Takahashi controller variant.
pub const CONTROLLER_TYPE_TAKAHASHI: i64 = 1;

/// Field-size lottery target scale. The literal rounds to exactly 2^254
/// in binary floating point.
pub const L: f64 = 28948022309329048855892746252171976963363056481941560715954676764349967630337.0;

/// Reward credited per winning slot.
pub const REWARD: f64 = 1.0;

/// Baseline lottery target: one percent of `L`.
pub const BASE_L: f64 = L * 0.01;

/// Lower bound for the stake fraction `f`.
pub const F_MIN: f64 = 0.01;

/// Upper bound for the stake fraction `f`.
pub const F_MAX: f64 = 0.99;

/// Controller error tolerance / step size.
pub const EPSILON: f64 = 1.0;

/// DRK ERC-20 token supply.
pub const ERC20DRK: f64 = 2_100_000_000.0;
