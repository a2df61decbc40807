use mathtrade::cost::cost;
use mathtrade::options::PriorityScheme;

#[test]
fn scenario_6_triangle_priorities_matches_worked_example() {
    // `A : B ; C` with defaults (SMALL-STEP=1, BIG-STEP=9): rank(B)=1,
    // rank(C)=1+9=10... but the worked example advances from 1 by
    // BIG-STEP after B is recorded, landing C at rank 11.
    assert_eq!(cost(&PriorityScheme::Triangle, 1, false).unwrap(), 1);
    assert_eq!(cost(&PriorityScheme::Triangle, 11, false).unwrap(), 66);
}

#[test]
fn none_scheme_costs_every_arc_the_same() {
    assert_eq!(cost(&PriorityScheme::None, 1, false).unwrap(), 1);
    assert_eq!(cost(&PriorityScheme::None, 50, false).unwrap(), 1);
}

#[test]
fn dummy_sourced_arcs_are_always_free_regardless_of_scheme() {
    for scheme in [
        PriorityScheme::None,
        PriorityScheme::Linear,
        PriorityScheme::Triangle,
        PriorityScheme::Square,
    ] {
        assert_eq!(cost(&scheme, 7, true).unwrap(), 0);
    }
}

#[test]
fn scaled_priorities_is_a_fatal_error() {
    assert!(cost(&PriorityScheme::Scaled, 1, false).is_err());
}
