//! Decodes a solver outcome into chosen arcs, writes them onto the item
//! graph, and groups the result into trade cycles (spec.md §4.8 steps
//! 1-2, SPEC_FULL.md §7 "SCC-based cycle extraction").

use petgraph::algo::tarjan_scc;
use petgraph::graph::DiGraph;

use crate::error::SolveError;
use crate::flow::{EdgeKind, FlowGraph, SolveOutcome};
use crate::model::graph::ItemGraph;
use crate::model::item::ItemId;

/// One chosen want-arc surviving the solve, before dummy-collapse.
#[derive(Debug, Clone, Copy)]
pub struct ChosenArc {
    pub source: ItemId,
    pub target: ItemId,
    pub rank: i64,
}

/// Decodes `outcome` into chosen arcs, setting `trade`/`send`/`receive`
/// on `graph`'s items. Fails if the oracle reported infeasibility, or if
/// decoding would assign two chosen arcs to the same source or target
/// (spec.md §4.8 step 1: "an internal error").
pub fn extract(
    graph: &mut ItemGraph,
    flow: &FlowGraph,
    outcome: &SolveOutcome,
) -> Result<Vec<ChosenArc>, SolveError> {
    let chosen_flags = match outcome {
        SolveOutcome::Optimal { flow, .. } => flow,
        SolveOutcome::Infeasible => return Err(SolveError::Infeasible),
    };

    let mut chosen = Vec::new();
    for (edge, &is_chosen) in flow.edges.iter().zip(chosen_flags.iter()) {
        if !is_chosen {
            continue;
        }
        if let EdgeKind::Match {
            source,
            target,
            rank,
        } = edge.kind
        {
            chosen.push(ChosenArc {
                source,
                target,
                rank,
            });
        }
    }

    for arc in &chosen {
        let source_item = graph.item_mut(arc.source);
        if source_item.send.is_some() {
            return Err(SolveError::InvariantViolation {
                id: source_item.id.clone(),
            });
        }
        source_item.send = Some(arc.target);
        source_item.trade = true;

        let target_item = graph.item_mut(arc.target);
        if target_item.receive.is_some() {
            return Err(SolveError::InvariantViolation {
                id: target_item.id.clone(),
            });
        }
        target_item.receive = Some(arc.source);
        target_item.trade = true;
    }

    Ok(chosen)
}

/// Groups `chosen` arcs into vertex-disjoint simple cycles via Tarjan's
/// SCC algorithm over the chosen-arcs-only subgraph: every node in this
/// subgraph has out-degree and in-degree exactly 1, so each strongly
/// connected component is precisely one trade loop (SPEC_FULL.md §7).
/// Each cycle's items are sorted by id for a deterministic traversal
/// order; cycles themselves are ordered by their smallest item id.
pub fn cycles(chosen: &[ChosenArc]) -> Vec<Vec<ItemId>> {
    let mut pg = DiGraph::<ItemId, ()>::new();
    let mut node_of = std::collections::HashMap::new();

    for arc in chosen {
        let s = *node_of
            .entry(arc.source)
            .or_insert_with(|| pg.add_node(arc.source));
        let t = *node_of
            .entry(arc.target)
            .or_insert_with(|| pg.add_node(arc.target));
        pg.add_edge(s, t, ());
    }

    let mut groups: Vec<Vec<ItemId>> = tarjan_scc(&pg)
        .into_iter()
        .map(|component| component.into_iter().map(|idx| pg[idx]).collect())
        .collect();

    for group in &mut groups {
        group.sort_by_key(|id| id.index());
    }
    groups.sort_by_key(|group| group[0].index());
    groups
}
