//! Node-splitting reduction from the item graph to a min-cost-flow
//! instance (spec.md §4.6).
//!
//! Rather than materializing a second graph structure, each traded
//! candidate's two flow nodes are derived by doubling its position in a
//! local, dense index: `out_node(i) = 2*i`, `in_node(i) = 2*i+1` (spec.md
//! §9, "Node-splitting is expressed by doubling indices... rather than
//! materializing a second graph data structure").

use crate::cost::{self, CostError};
use crate::model::graph::ItemGraph;
use crate::model::item::ItemId;
use crate::options::{IntOption, OptionStore};

/// What a [`FlowEdge`] represents in the original item graph, so solvers
/// can stay generic while the extractor (solve/extractor.rs) can still
/// decode a chosen flow back into item-graph arcs.
#[derive(Debug, Clone, Copy)]
pub enum EdgeKind {
    /// `v+ -> v-`: item `v` does not trade.
    SelfEdge { item: ItemId },
    /// `u+ -> v-`: want-arc `u -> v` with the given rank is chosen.
    Match {
        source: ItemId,
        target: ItemId,
        rank: i64,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct FlowEdge {
    pub from: usize,
    pub to: usize,
    pub cap: i64,
    pub cost: i64,
    pub kind: EdgeKind,
}

/// The reduced min-cost-flow instance: `2 * items.len()` nodes (`+1`
/// supply at every out-node, `-1` at every in-node, per spec.md §4.6 step
/// 4), one self-edge and zero-or-more match-edges per item.
pub struct FlowGraph {
    pub num_nodes: usize,
    pub edges: Vec<FlowEdge>,
    /// Local index -> item id, the inverse of the node-splitting map.
    pub items: Vec<ItemId>,
}

impl FlowGraph {
    pub fn out_node(local: usize) -> usize {
        2 * local
    }

    pub fn in_node(local: usize) -> usize {
        2 * local + 1
    }
}

/// Builds the flow graph for every item that has a want-list (spec.md
/// §4.4 "Output": only items with want-lists are candidates to trade).
pub fn build(graph: &ItemGraph, options: &OptionStore) -> Result<FlowGraph, CostError> {
    let candidates = graph.traded_candidates();
    let mut local_index = std::collections::HashMap::with_capacity(candidates.len());
    for (i, &id) in candidates.iter().enumerate() {
        local_index.insert(id, i);
    }

    let nontrade_cost = options.int_opt(IntOption::NontradeCost);
    let mut edges = Vec::with_capacity(candidates.len() + candidates.len() * 4);

    for (i, &id) in candidates.iter().enumerate() {
        let item = graph.item(id);
        let self_cost = if item.is_dummy { 0 } else { nontrade_cost };
        edges.push(FlowEdge {
            from: FlowGraph::out_node(i),
            to: FlowGraph::in_node(i),
            cap: 1,
            cost: self_cost,
            kind: EdgeKind::SelfEdge { item: id },
        });
    }

    for arc in graph.export_arcs() {
        let &src_local = local_index.get(&arc.source).expect("export_arcs source always a candidate");
        let &dst_local = local_index.get(&arc.target).expect("export_arcs target always a candidate");
        let source_is_dummy = graph.item(arc.source).is_dummy;
        let arc_cost = cost::cost(options.priority_scheme(), arc.rank, source_is_dummy)?;
        edges.push(FlowEdge {
            from: FlowGraph::out_node(src_local),
            to: FlowGraph::in_node(dst_local),
            cap: 1,
            cost: arc_cost,
            kind: EdgeKind::Match {
                source: arc.source,
                target: arc.target,
                rank: arc.rank,
            },
        });
    }

    Ok(FlowGraph {
        num_nodes: 2 * candidates.len(),
        edges,
        items: candidates,
    })
}
