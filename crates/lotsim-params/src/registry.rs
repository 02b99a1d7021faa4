//! Read-only name-to-value table over the full parameter set.
//!
//! The table is built from the ordered assignment list as written in the
//! simulation's parameter file, duplicates included (`N_TERM` is assigned
//! twice there). Resolution is last-write-wins, with each name keeping the
//! position of its first assignment.

use std::collections::HashMap;
use std::sync::LazyLock;

use num::BigRational;
use serde::Serialize;

use crate::constants::{
    BASE_L, CONTROLLER_TYPE_ANALOGUE, CONTROLLER_TYPE_DISCRETE, CONTROLLER_TYPE_TAKAHASHI,
    EPSILON, ERC20DRK, F_MAX, F_MIN, L, N_TERM, REWARD,
};
use crate::controller::ControllerType;
use crate::error::{ParamError, Result};
use crate::precise::{
    BASE_L_HP, EPSILON_HP, F_MAX_HP, F_MIN_HP, L_HP, REWARD_HP, decimal_string, exact, to_f64,
};

/// Process-wide resolved parameter table.
pub static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::resolve);

/// Ordered assignments, as written in the parameter file. `N_TERM` appears
/// twice; the duplicate is preserved here and resolved by `Registry`.
const ASSIGNMENTS: &[(&str, ParamValue)] = &[
    ("N_TERM", ParamValue::Int(2)),
    ("CONTROLLER_TYPE_ANALOGUE", ParamValue::Int(CONTROLLER_TYPE_ANALOGUE)),
    ("CONTROLLER_TYPE_DISCRETE", ParamValue::Int(CONTROLLER_TYPE_DISCRETE)),
    ("CONTROLLER_TYPE_TAKAHASHI", ParamValue::Int(CONTROLLER_TYPE_TAKAHASHI)),
    ("L", ParamValue::Float(L)),
    ("N_TERM", ParamValue::Int(N_TERM)),
    ("REWARD", ParamValue::Float(REWARD)),
    ("BASE_L", ParamValue::Float(BASE_L)),
    ("F_MIN", ParamValue::Float(F_MIN)),
    ("F_MAX", ParamValue::Float(F_MAX)),
    ("EPSILON", ParamValue::Float(EPSILON)),
    ("ERC20DRK", ParamValue::Float(ERC20DRK)),
];

/// A parameter's native value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Int(i64),
    Float(f64),
}

impl ParamValue {
    /// The value as an `f64`, widening integers.
    pub fn as_f64(self) -> f64 {
        match self {
            ParamValue::Int(i) => i as f64,
            ParamValue::Float(f) => f,
        }
    }

    /// Exact rational form of the value.
    pub fn exact(self) -> BigRational {
        match self {
            ParamValue::Int(i) => BigRational::from_integer(i.into()),
            ParamValue::Float(f) => exact(f),
        }
    }
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            ParamValue::Int(i) => write!(f, "{i}"),
            ParamValue::Float(x) if x == 0.0 || (1e-4..1e15).contains(&x.abs()) => {
                write!(f, "{x}")
            }
            ParamValue::Float(x) => write!(f, "{x:e}"),
        }
    }
}

/// One named parameter with both representations available.
#[derive(Clone, Debug, Serialize)]
pub struct Param {
    pub name: &'static str,
    pub value: ParamValue,
    /// Exact terminating decimal expansion of the value.
    pub exact_decimal: String,
}

impl Param {
    fn new(name: &'static str, value: ParamValue) -> Self {
        let exact = value.exact();
        let exact_decimal = decimal_string(&exact).unwrap_or_else(|| exact.to_string());
        Self { name, value, exact_decimal }
    }

    /// Exact rational form of the value.
    pub fn exact(&self) -> BigRational {
        self.value.exact()
    }
}

/// A failed table invariant, as reported by [`Registry::check`].
#[derive(Clone, Debug, Serialize)]
pub struct Violation {
    pub invariant: &'static str,
    pub detail: String,
}

/// Resolved parameter table.
pub struct Registry {
    params: Vec<Param>,
    index: HashMap<&'static str, usize>,
}

impl Registry {
    fn resolve() -> Self {
        let mut params: Vec<Param> = Vec::new();
        let mut index: HashMap<&'static str, usize> = HashMap::new();
        for &(name, value) in ASSIGNMENTS {
            match index.get(name) {
                Some(&i) => params[i] = Param::new(name, value),
                None => {
                    index.insert(name, params.len());
                    params.push(Param::new(name, value));
                }
            }
        }
        Self { params, index }
    }

    /// Look up a parameter by name.
    pub fn get(&self, name: &str) -> Option<&Param> {
        self.index.get(name).map(|&i| &self.params[i])
    }

    /// Look up a parameter by name, failing on unknown names.
    pub fn require(&self, name: &str) -> Result<&Param> {
        self.get(name)
            .ok_or_else(|| ParamError::UnknownParam(name.to_string()))
    }

    /// Parameters in first-assignment order.
    pub fn iter(&self) -> impl Iterator<Item = &Param> {
        self.params.iter()
    }

    /// Resolved parameters as a slice, in first-assignment order.
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Verify every table invariant, returning all violations found.
    pub fn check(&self) -> Vec<Violation> {
        let mut out = Vec::new();
        let mut fail = |invariant: &'static str, detail: String| {
            out.push(Violation { invariant, detail });
        };

        // Float and HP forms of one logical constant must agree exactly.
        let paired: [(&str, f64, &BigRational); 6] = [
            ("L", L, &*L_HP),
            ("REWARD", REWARD, &*REWARD_HP),
            ("BASE_L", BASE_L, &*BASE_L_HP),
            ("F_MIN", F_MIN, &*F_MIN_HP),
            ("F_MAX", F_MAX, &*F_MAX_HP),
            ("EPSILON", EPSILON, &*EPSILON_HP),
        ];
        for (name, float, hp) in paired {
            if to_f64(hp) != float {
                fail("hp-float-agreement", format!("{name}: {} != {float}", to_f64(hp)));
            }
        }

        if BASE_L != L * 0.01 {
            fail("base-l-derivation", format!("BASE_L = {BASE_L}, L * 0.01 = {}", L * 0.01));
        }
        if *BASE_L_HP != &*L_HP * exact(0.01) {
            fail("base-l-hp-derivation", "BASE_L_HP != L_HP * exact(0.01)".to_string());
        }

        if !(0.0 < F_MIN && F_MIN < F_MAX && F_MAX < 1.0) {
            fail("fraction-bounds", format!("F_MIN = {F_MIN}, F_MAX = {F_MAX}"));
        }

        for (i, a) in ControllerType::ALL.iter().enumerate() {
            for b in &ControllerType::ALL[i + 1..] {
                if a.tag() == b.tag() {
                    fail("controller-tags-distinct", format!("{a} and {b} share tag {}", a.tag()));
                }
            }
        }

        // Every name must resolve to its last assignment.
        for &(name, value) in ASSIGNMENTS {
            let last = ASSIGNMENTS
                .iter()
                .rev()
                .find(|(n, _)| *n == name)
                .map(|&(_, v)| v);
            if last != Some(value) {
                continue;
            }
            match self.get(name) {
                Some(p) if p.value == value => {}
                Some(p) => fail(
                    "last-write-wins",
                    format!("{name} resolved to {} instead of {value}", p.value),
                ),
                None => fail("last-write-wins", format!("{name} missing from table")),
            }
        }

        if ERC20DRK != 2.1e9 {
            fail("erc20drk-supply", format!("ERC20DRK = {ERC20DRK}"));
        }

        out
    }
}
