//! Arena-backed item graph: the parser's output and the solver's input.
//!
//! Follows the design notes in spec.md §9: an arena of [`Item`] records
//! addressed by [`ItemId`], with want-arcs stored per-source as ordered
//! bundles rather than as a second graph structure. Node-splitting for the
//! min-cost-flow reduction (flow/reduction.rs) derives two flow-graph nodes
//! per item id on the fly instead of materializing them here.

use std::collections::HashMap;
use std::fmt::Write as _;

use super::arc::Arc;
use super::item::Item;
use super::item::ItemId;
use super::wantlist::Wantlist;

/// Mapping from normalized item id to its record, plus the want-arc bundles
/// declared for each source item.
#[derive(Debug, Default)]
pub struct ItemGraph {
    items: Vec<Item>,
    ids: HashMap<String, ItemId>,
    /// At most one bundle per source (spec.md §3, Invariant 1).
    wantlists: HashMap<ItemId, Wantlist>,
}

impl ItemGraph {
    pub fn new() -> Self {
        ItemGraph::default()
    }

    pub fn get(&self, id: &str) -> Option<ItemId> {
        self.ids.get(id).copied()
    }

    pub fn item(&self, id: ItemId) -> &Item {
        &self.items[id.index()]
    }

    pub fn item_mut(&mut self, id: ItemId) -> &mut Item {
        &mut self.items[id.index()]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &Item)> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| (ItemId(i as u32), item))
    }

    /// Inserts a new item record, returning its id. Panics if `id` is
    /// already registered — callers must check [`ItemGraph::get`] first,
    /// since whether a duplicate insert is an error depends on context
    /// (spec.md §4.3).
    pub fn insert(&mut self, item: Item) -> ItemId {
        assert!(
            !self.ids.contains_key(&item.id),
            "duplicate item id inserted into ItemGraph: {}",
            item.id
        );
        let id = ItemId(self.items.len() as u32);
        self.ids.insert(item.id.clone(), id);
        self.items.push(item);
        id
    }

    pub fn wantlist(&self, source: ItemId) -> Option<&Wantlist> {
        self.wantlists.get(&source)
    }

    pub fn wantlist_mut(&mut self, source: ItemId) -> Option<&mut Wantlist> {
        self.wantlists.get_mut(&source)
    }

    pub fn has_wantlist(&self, source: ItemId) -> bool {
        self.wantlists.contains_key(&source)
    }

    /// Commits a fully-validated bundle for `source`. Caller is responsible
    /// for enforcing the single-want-list-per-source rule (spec.md §4.4,
    /// step 9) before calling this.
    pub fn commit_wantlist(&mut self, source: ItemId, bundle: Wantlist) {
        self.item_mut(source).has_wantlist = true;
        self.wantlists.insert(source, bundle);
    }

    /// Produces the canonical list of want-arcs: one arc per `(source,
    /// target, rank)` triple where `target` is known (exists in the
    /// registry) and itself has a want-list. Order: by source item
    /// insertion order, then by declaration order within the bundle
    /// (spec.md §4.4 "Output").
    pub fn export_arcs(&self) -> Vec<Arc> {
        let mut arcs = Vec::new();
        for (id, _) in self.iter() {
            let Some(bundle) = self.wantlists.get(&id) else {
                continue;
            };
            for (target, rank) in &bundle.targets {
                let Some(target_id) = self.get(target) else {
                    continue;
                };
                if self.has_wantlist(target_id) {
                    arcs.push(Arc {
                        source: id,
                        target: target_id,
                        rank: *rank,
                        known: true,
                    });
                }
            }
        }
        arcs
    }

    /// Items that have a want-list, in the order required by the canonical
    /// export's `@nodes` section (spec.md §6).
    pub fn traded_candidates(&self) -> Vec<ItemId> {
        self.iter()
            .filter(|(id, _)| self.has_wantlist(*id))
            .map(|(id, _)| id)
            .collect()
    }

    /// Renders the canonical graph export of spec.md §6: `@nodes` section
    /// (one row per item with a want-list) followed by `@arcs` (one row per
    /// valid want-arc).
    pub fn canonical_export(&self) -> String {
        let mut out = String::new();
        out.push_str("@nodes\n");
        out.push_str("label\titem\tofficial_name\tusername\tdummy\n");
        for id in self.traded_candidates() {
            let item = self.item(id);
            let _ = writeln!(
                out,
                "\"{}\"\t\"{}\"\t\"{}\"\t\"{}\"\t{}",
                item.id,
                item.id,
                item.official_name.as_deref().unwrap_or(""),
                item.owner.as_deref().unwrap_or(""),
                item.is_dummy as u8,
            );
        }
        out.push_str("@arcs\n");
        out.push_str("\t\trank\n");
        for arc in self.export_arcs() {
            let src = &self.item(arc.source).id;
            let dst = &self.item(arc.target).id;
            let _ = writeln!(out, "\"{src}\"\t\"{dst}\"\t{}", arc.rank);
        }
        out
    }

    /// Reconstructs a graph directly from its own canonical export
    /// (spec.md §6), the `--input-graph` CLI path that skips want-file
    /// parsing entirely. Every `@nodes` row becomes an item with an
    /// (initially empty) want-list; every `@arcs` row appends a target to
    /// its source's bundle.
    pub fn from_canonical_export(input: &str) -> ItemGraph {
        let mut graph = ItemGraph::new();
        let mut in_arcs = false;

        for line in input.lines() {
            let line = line.trim_end();
            if line == "@nodes" {
                in_arcs = false;
                continue;
            }
            if line == "@arcs" {
                in_arcs = true;
                continue;
            }
            if line.is_empty() {
                continue;
            }
            let fields: Vec<String> = line.split('\t').map(unquote).collect();
            if !in_arcs {
                if fields.first().map(String::as_str) == Some("label") {
                    continue;
                }
                let Some(id) = fields.first() else { continue };
                let is_dummy = fields.get(4).map(String::as_str) == Some("1");
                let mut item = Item::new(id.clone(), is_dummy);
                if let Some(name) = fields.get(2).filter(|s| !s.is_empty()) {
                    item.official_name = Some(name.clone());
                }
                if let Some(owner) = fields.get(3).filter(|s| !s.is_empty()) {
                    item.owner = Some(owner.clone());
                }
                let item_id = graph.insert(item);
                graph.commit_wantlist(item_id, Wantlist::new(item_id));
            } else {
                if fields.first().map(String::as_str).unwrap_or("").is_empty() {
                    continue;
                }
                let (Some(src), Some(dst), Some(rank)) =
                    (fields.first(), fields.get(1), fields.get(2))
                else {
                    continue;
                };
                let Some(src_id) = graph.get(src) else {
                    continue;
                };
                let rank: i64 = rank.parse().unwrap_or(1);
                if let Some(bundle) = graph.wantlist_mut(src_id) {
                    bundle.push(dst.clone(), rank);
                }
            }
        }

        graph
    }
}

fn unquote(field: &str) -> String {
    field
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(field)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_export_round_trips_through_from_canonical_export() {
        let mut graph = ItemGraph::new();
        let a = graph.insert(Item::new("A".to_string(), false));
        let b = graph.insert(Item::new("B".to_string(), false));
        let mut wl_a = Wantlist::new(a);
        wl_a.push("B".to_string(), 1);
        graph.commit_wantlist(a, wl_a);
        let mut wl_b = Wantlist::new(b);
        wl_b.push("A".to_string(), 1);
        graph.commit_wantlist(b, wl_b);

        let exported = graph.canonical_export();
        let reloaded = ItemGraph::from_canonical_export(&exported);

        assert_eq!(reloaded.export_arcs().len(), graph.export_arcs().len());
        assert_eq!(reloaded.traded_candidates().len(), 2);
        assert!(reloaded.get("A").is_some());
        assert!(reloaded.get("B").is_some());
    }

    #[test]
    fn export_arcs_drops_targets_without_their_own_wantlist() {
        let mut graph = ItemGraph::new();
        let a = graph.insert(Item::new("A".to_string(), false));
        let mut wl_a = Wantlist::new(a);
        wl_a.push("C".to_string(), 1);
        graph.commit_wantlist(a, wl_a);
        assert!(graph.export_arcs().is_empty());
    }
}
