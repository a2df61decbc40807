use mathtrade::parser;

#[test]
fn scenario_1_two_way_swap_parses_with_no_diagnostics() {
    let outcome = parser::parse("(alice) A : B\n(bob)   B : A\n");
    assert!(outcome.diagnostics.is_empty());
    assert_eq!(outcome.graph.export_arcs().len(), 2);
}

#[test]
fn scenario_2_three_cycle_with_priorities_parses_clean() {
    let outcome = parser::parse(
        "#! LINEAR-PRIORITIES\n(u1) A : C B\n(u2) B : A C\n(u3) C : B A\n",
    );
    assert!(outcome.diagnostics.is_empty());
    assert_eq!(outcome.graph.export_arcs().len(), 6);
}

#[test]
fn scenario_4_missing_item_is_recorded_and_arc_dropped() {
    let outcome = parser::parse("(u1) A : B C\n(u2) B : A\n");
    assert!(outcome.diagnostics.is_empty());
    assert_eq!(outcome.diagnostics.missing.get("C"), Some(&1));
    assert!(outcome
        .graph
        .export_arcs()
        .iter()
        .all(|a| outcome.graph.item(a.target).id != "C"));
}

#[test]
fn scenario_5_duplicate_wantlist_keeps_the_first() {
    let outcome = parser::parse("(u1) A : B\n(u1) A : C\n(u2) B : A\n");
    assert_eq!(outcome.diagnostics.errors.len(), 1);
    let a = outcome.graph.get("A").unwrap();
    assert_eq!(
        outcome.graph.wantlist(a).unwrap().targets,
        vec![("B".to_string(), 1)]
    );
}

#[test]
fn official_name_declared_before_its_wantlist_is_used_in_lookup() {
    let outcome = parser::parse(
        "!BEGIN-OFFICIAL-NAMES\nA ==> \"Item A\" (from alice)\n!END-OFFICIAL-NAMES\n(alice) A : B\n(bob) B : A\n",
    );
    let a = outcome.graph.get("A").unwrap();
    assert_eq!(outcome.graph.item(a).official_name.as_deref(), Some("Item A"));
}

#[test]
fn dummy_items_require_allow_dummies_option() {
    let outcome = parser::parse("(u1) A : %D\n(u2) %D : A\n");
    assert!(outcome
        .diagnostics
        .errors
        .iter()
        .any(|d| matches!(d.error, mathtrade::error::ParseError::DummyNotAllowed { .. })));
}
