//! Integration tests exercising the whole parameter surface:
//! flat constants, HP forms, typed controller tags and the registry.

use approx::assert_relative_eq;
use proptest::prelude::*;

use lotsim_params::{
    BASE_L, BASE_L_HP, ControllerType, EPSILON, EPSILON_HP, ERC20DRK, F_MAX, F_MAX_HP, F_MIN,
    F_MIN_HP, L, L_HP, N_TERM, REGISTRY, REWARD, REWARD_HP, decimal_string, exact, to_f64,
};

/// Every paired constant agrees across its two forms.
#[test]
fn hp_and_float_forms_agree() {
    let paired = [
        (to_f64(&L_HP), L),
        (to_f64(&REWARD_HP), REWARD),
        (to_f64(&BASE_L_HP), BASE_L),
        (to_f64(&F_MIN_HP), F_MIN),
        (to_f64(&F_MAX_HP), F_MAX),
        (to_f64(&EPSILON_HP), EPSILON),
    ];
    for (hp, float) in paired {
        assert_relative_eq!(hp, float, max_relative = f64::EPSILON);
        assert_eq!(hp, float);
    }
}

#[test]
fn base_l_derivations_are_exact() {
    assert_eq!(BASE_L, L * 0.01);
    assert_eq!(*BASE_L_HP, &*L_HP * exact(0.01));
}

#[test]
fn fraction_bounds_well_formed() {
    assert!(0.0 < F_MIN && F_MIN < F_MAX && F_MAX < 1.0);
}

#[test]
fn controller_tags_distinct_and_round_trip() {
    for (i, a) in ControllerType::ALL.iter().enumerate() {
        for b in &ControllerType::ALL[i + 1..] {
            assert_ne!(a.tag(), b.tag());
        }
    }
    for ct in ControllerType::ALL {
        assert_eq!(ControllerType::try_from(ct.tag()).unwrap(), ct);
    }
}

#[test]
fn n_term_resolves_to_last_assignment() {
    assert_eq!(N_TERM, 2);
    let p = REGISTRY.require("N_TERM").unwrap();
    assert_eq!(p.value.as_f64(), 2.0);
}

#[test]
fn erc20drk_supply_exact() {
    assert_eq!(ERC20DRK, 2.1e9);
    assert_eq!(
        REGISTRY.require("ERC20DRK").unwrap().exact_decimal,
        "2100000000"
    );
}

#[test]
fn shipped_table_has_no_violations() {
    assert!(REGISTRY.check().is_empty());
}

proptest! {
    /// `exact` preserves every finite float exactly: converting back is
    /// the identity, and the expansion always terminates.
    #[test]
    fn exact_round_trips_finite_floats(m in -1_000_000_000_000i64..1_000_000_000_000, e in -200i32..200) {
        let f = (m as f64) * 2f64.powi(e);
        prop_assert!(f.is_finite());
        let r = exact(f);
        prop_assert_eq!(to_f64(&r), f);
        prop_assert!(decimal_string(&r).is_some());
    }
}
