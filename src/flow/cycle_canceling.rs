//! Cycle-canceling min-cost-flow oracle, an alternate backend to the
//! default successive-shortest-paths solver (spec.md §4.7, §9 "polymorphic
//! solver backends").
//!
//! Starts from the trivially feasible flow where every item uses its own
//! self-edge (no trades), then repeatedly finds and cancels a negative-
//! cost cycle in the residual graph via Bellman-Ford until none remain —
//! Klein's cycle-canceling algorithm. Exists mainly so `--benchmark-all`
//! (spec.md §6 SUPPLEMENT) has a second, independently-derived oracle to
//! cross-check the default solver's trade count against (§8 testable
//! property 5).

use super::oracle::{MinCostFlowSolver, SolveOutcome};
use super::reduction::{EdgeKind, FlowGraph};
use super::ResidualGraph;

/// Finds a negative-cost cycle anywhere in the residual graph. Bellman-
/// Ford is run with every node's initial distance at 0 (equivalent to a
/// virtual source with a zero-cost edge to every node), so a cycle
/// reachable from *any* node is found, not just one reachable from a
/// fixed source. Returns the cycle as a list of residual edge indices, in
/// traversal order.
fn find_negative_cycle(net: &ResidualGraph) -> Option<Vec<usize>> {
    let n = net.adj.len();
    let mut dist = vec![0i64; n];
    let mut pred_edge: Vec<Option<usize>> = vec![None; n];
    let mut pred_node: Vec<Option<usize>> = vec![None; n];
    let mut last_relaxed = None;

    for _ in 0..=n {
        last_relaxed = None;
        for u in 0..n {
            for &e in &net.adj[u] {
                let edge = &net.edges[e];
                if edge.cap > 0 && dist[u] + edge.cost < dist[edge.to] {
                    dist[edge.to] = dist[u] + edge.cost;
                    pred_edge[edge.to] = Some(e);
                    pred_node[edge.to] = Some(u);
                    last_relaxed = Some(edge.to);
                }
            }
        }
        if last_relaxed.is_none() {
            return None;
        }
    }

    // `last_relaxed` was still updated on the (n+1)th pass, so it lies on
    // or downstream of a negative cycle. Walking back n predecessor steps
    // is guaranteed to land strictly inside the cycle.
    let mut x = last_relaxed.unwrap();
    for _ in 0..n {
        x = pred_node[x].expect("node relaxed on final pass must have a predecessor");
    }

    let start = x;
    let mut cycle = Vec::new();
    loop {
        let e = pred_edge[x].expect("cycle node must have a predecessor edge");
        cycle.push(e);
        x = pred_node[x].expect("cycle node must have a predecessor node");
        if x == start {
            break;
        }
    }
    cycle.reverse();
    Some(cycle)
}

pub struct CycleCanceling;

impl MinCostFlowSolver for CycleCanceling {
    fn solve(&self, graph: &FlowGraph) -> SolveOutcome {
        if graph.items.is_empty() {
            return SolveOutcome::Optimal {
                flow: Vec::new(),
                total_cost: 0,
            };
        }

        let mut net = ResidualGraph::from_flow_graph(graph);

        // Saturate every self-edge: the trivially feasible "nobody
        // trades" flow. Edge `i` in `graph.edges` occupies residual slots
        // `2*i` (forward) / `2*i + 1` (backward) by construction.
        let mut total_cost = 0i64;
        for (i, edge) in graph.edges.iter().enumerate() {
            if matches!(edge.kind, EdgeKind::SelfEdge { .. }) {
                net.edges[2 * i].cap -= 1;
                net.edges[2 * i + 1].cap += 1;
                total_cost += edge.cost;
            }
        }

        while let Some(cycle) = find_negative_cycle(&net) {
            let bottleneck = cycle.iter().map(|&e| net.edges[e].cap).min().unwrap_or(0);
            if bottleneck <= 0 {
                break;
            }
            for &e in &cycle {
                total_cost += net.edges[e].cost * bottleneck;
                net.edges[e].cap -= bottleneck;
                net.edges[e ^ 1].cap += bottleneck;
            }
        }

        SolveOutcome::Optimal {
            flow: net.decode_chosen(graph.edges.len()),
            total_cost,
        }
    }
}
