//! A single source item's ordered bundle of want-arcs.

use super::item::ItemId;

/// All arcs from a single source item, stored in order of declaration.
///
/// Targets are kept as normalized id *strings* rather than [`ItemId`]s,
/// because spec.md §4.3 forbids auto-inserting targets into the registry:
/// a target only becomes a resolvable [`ItemId`] once (and if) some later
/// line declares a want-list for it. Resolution happens once, at export
/// time, in [`super::graph::ItemGraph::export_arcs`].
///
/// Invariant (spec.md §3, Invariant 2): arcs with the same `(source,
/// target)` pair within one bundle preserve the first declaration's rank;
/// later duplicates are recorded as diagnostics by the parser, not stored
/// here.
#[derive(Debug, Clone, Default)]
pub struct Wantlist {
    pub source: Option<ItemId>,
    /// `(target id, rank)` pairs in declaration order, deduplicated by
    /// target.
    pub targets: Vec<(String, i64)>,
}

impl Wantlist {
    pub fn new(source: ItemId) -> Self {
        Wantlist {
            source: Some(source),
            targets: Vec::new(),
        }
    }

    /// Records a target/rank, unless `target` already has an entry in this
    /// bundle (first occurrence wins per spec.md Invariant 2).
    ///
    /// Returns `true` if this was a new target, `false` if it was a duplicate.
    pub fn push(&mut self, target: String, rank: i64) -> bool {
        if self.targets.iter().any(|(t, _)| *t == target) {
            false
        } else {
            self.targets.push((target, rank));
            true
        }
    }
}
