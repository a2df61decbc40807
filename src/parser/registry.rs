//! Item registry creation rules (spec.md §4.3) and identifier
//! normalization (spec.md §3, "Normalization").

use crate::model::graph::ItemGraph;
use crate::model::item::{is_dummy_identifier, Item, ItemId};

/// Uppercases `raw` unless `case_sensitive` is set (spec.md §3).
pub fn normalize_case(raw: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        raw.to_string()
    } else {
        raw.to_uppercase()
    }
}

/// Resolves a raw item identifier (as it appeared in the want-file) to its
/// normalized, registry-ready id. Dummy identifiers are scoped to `owner`
/// by appending `-OWNER` before case normalization, so that `%FOO` from
/// user `A` and `%FOO` from user `B` are distinct items (spec.md §3, §9
/// "Dummy uniqueness"). `owner` must already be present when `raw` is
/// dummy; callers are responsible for that precondition (spec.md §4.4
/// step 3 validates it before calling this).
pub fn normalize_item_id(raw: &str, owner: Option<&str>, case_sensitive: bool) -> String {
    if is_dummy_identifier(raw) {
        let owner = owner.expect("dummy identifier normalized without an owner");
        normalize_case(&format!("{raw}-{owner}"), case_sensitive)
    } else {
        normalize_case(raw, case_sensitive)
    }
}

/// Looks up `id` in the registry, inserting a bare record if absent. Used
/// for want-list sources (spec.md §4.3, "Want-list source").
pub fn get_or_insert_source(graph: &mut ItemGraph, id: &str, is_dummy: bool) -> ItemId {
    if let Some(existing) = graph.get(id) {
        existing
    } else {
        graph.insert(Item::new(id.to_string(), is_dummy))
    }
}
