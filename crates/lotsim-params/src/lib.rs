//! Consensus-lottery simulation parameters.
//!
//! A fixed set of named numeric parameters for a lottery/controller
//! simulation, each carried in two parallel forms: a fast native `f64`
//! (or integer) constant, and a high-precision "HP" form backed by an
//! exact arbitrary-precision rational. The HP form of a constant is the
//! exact value of its binary float, so the two forms agree bit-for-bit
//! and exact arithmetic elsewhere stays deterministic.
//!
//! Zero I/O — pure data with no opinions about transport or persistence.

pub mod constants;
pub mod controller;
pub mod error;
pub mod precise;
pub mod registry;

pub use constants::{
    BASE_L, CONTROLLER_TYPE_ANALOGUE, CONTROLLER_TYPE_DISCRETE, CONTROLLER_TYPE_TAKAHASHI,
    EPSILON, ERC20DRK, F_MAX, F_MIN, L, N_TERM, REWARD,
};
pub use controller::ControllerType;
pub use error::{ParamError, Result};
pub use precise::{
    BASE_L_HP, EPSILON_HP, F_MAX_HP, F_MIN_HP, L_HP, REWARD_HP, decimal_string, exact, to_f64,
    try_exact,
};
pub use registry::{Param, ParamValue, REGISTRY, Registry, Violation};
