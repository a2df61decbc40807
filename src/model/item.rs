//! Item records: the nodes of the trade graph.

use std::fmt;

/// Index of an [`Item`] within an [`crate::model::graph::ItemGraph`]'s arena.
///
/// Node-splitting (flow/reduction.rs) derives the two flow-graph nodes for
/// an item by doubling this index rather than maintaining a second graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(pub u32);

impl ItemId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An entity representing a tradable object.
///
/// Created on first mention (official-names block or want-list source),
/// mutated only during parsing, immutable afterwards.
#[derive(Debug, Clone)]
pub struct Item {
    /// Normalized identifier, unique within a run.
    pub id: String,
    /// Display string, if declared in an official-names block.
    pub official_name: Option<String>,
    /// Username of the owner, if known.
    pub owner: Option<String>,
    /// True when the raw identifier begins with `%`.
    pub is_dummy: bool,
    /// True once a want-list has been registered for this item.
    pub has_wantlist: bool,
    /// True once the solver has decided this item trades (spec.md §3,
    /// "Result graph"). Set by `solve::extractor`, read by the reporter.
    pub trade: bool,
    /// The unique chosen outgoing neighbor, once `trade` is true.
    pub send: Option<ItemId>,
    /// The unique chosen incoming neighbor, once `trade` is true.
    pub receive: Option<ItemId>,
}

impl Item {
    pub fn new(id: String, is_dummy: bool) -> Self {
        Item {
            id,
            official_name: None,
            owner: None,
            is_dummy,
            has_wantlist: false,
            trade: false,
            send: None,
            receive: None,
        }
    }
}

/// Returns true if the raw (pre-normalization) identifier denotes a dummy item.
pub fn is_dummy_identifier(raw: &str) -> bool {
    raw.starts_with('%')
}
