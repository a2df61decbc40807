//! Decodes a solved flow graph into trades: extraction, invariant
//! validation, dummy-collapse, and cycle grouping (spec.md §4.8).

pub mod dummy_collapse;
pub mod extractor;

pub use extractor::ChosenArc;

use crate::error::SolveError;
use crate::flow::{FlowGraph, SolveOutcome};
use crate::model::graph::ItemGraph;
use crate::model::item::ItemId;

/// One vertex-disjoint trade loop, item ids in no particular cyclic
/// start point (the reporter picks a starting item per its own
/// ordering).
pub type Cycle = Vec<ItemId>;

/// The fully-decoded outcome of one solve: the final (post-collapse)
/// chosen arcs, their grouping into trade loops, and the oracle's total
/// cost (unaffected by dummy-collapse, since dummy arcs always cost 0).
pub struct SolveResult {
    pub chosen: Vec<ChosenArc>,
    pub cycles: Vec<Cycle>,
    pub total_cost: i64,
}

/// Runs the full post-solve pipeline: decode the oracle's flow into
/// chosen arcs and `trade`/`send`/`receive` fields, collapse dummy
/// chains, re-point real items' `send`/`receive` at their post-collapse
/// neighbors, and group the result into trade loops.
///
/// Resets every item's `trade`/`send`/`receive` before decoding, since a
/// caller may `resolve()` the same graph more than once against
/// different oracle outcomes (e.g. `--benchmark-all`); without this, the
/// second call's `extractor::extract` would see the previous call's
/// finalized state and mistake it for a same-call double assignment.
pub fn resolve(
    graph: &mut ItemGraph,
    flow: &FlowGraph,
    outcome: &SolveOutcome,
) -> Result<SolveResult, SolveError> {
    let total_cost = match outcome {
        SolveOutcome::Optimal { total_cost, .. } => *total_cost,
        SolveOutcome::Infeasible => return Err(SolveError::Infeasible),
    };

    reset_trade_state(graph);
    let raw = extractor::extract(graph, flow, outcome)?;
    let collapsed = dummy_collapse::collapse(graph, &raw);
    apply_collapsed_sends(graph, &collapsed);
    let cycles = extractor::cycles(&collapsed);

    Ok(SolveResult {
        chosen: collapsed,
        cycles,
        total_cost,
    })
}

/// Clears every item's `trade`/`send`/`receive` back to their initial
/// (untraded) state, undoing whatever a prior `resolve()` call left
/// behind on this graph.
fn reset_trade_state(graph: &mut ItemGraph) {
    let ids: Vec<ItemId> = graph.iter().map(|(id, _)| id).collect();
    for id in ids {
        let item = graph.item_mut(id);
        item.trade = false;
        item.send = None;
        item.receive = None;
    }
}

/// Re-points every non-dummy item's `send`/`receive` at its post-collapse
/// neighbor (spec.md §8 testable property 6: dummy-collapse preserves
/// real trading items' send/receive targets, now referring to the real
/// item at the far end of the chain rather than the first dummy).
fn apply_collapsed_sends(graph: &mut ItemGraph, collapsed: &[ChosenArc]) {
    for arc in collapsed {
        graph.item_mut(arc.source).send = Some(arc.target);
        graph.item_mut(arc.target).receive = Some(arc.source);
    }
}
