//! Ranked want-arcs between items.

use super::item::ItemId;

/// A directed, ranked want relation from `source` item to `target` item.
///
/// Created during want-list parsing; dropped at graph export if `target`
/// is unknown or `target` has no want-list (spec.md §4.4).
#[derive(Debug, Clone, Copy)]
pub struct Arc {
    pub source: ItemId,
    pub target: ItemId,
    /// Positive, 1-based, monotone in list position within its bundle.
    pub rank: i64,
    /// False when `target` has no item record at commit time.
    pub known: bool,
}
