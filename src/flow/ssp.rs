//! Successive-shortest-augmenting-path min-cost-flow oracle, the default
//! backend (spec.md §4.7, §9 design note on polymorphic solver backends).
//!
//! Supplies/demands are routed through a virtual source/sink pair so the
//! instance becomes a single-commodity max-flow-min-cost problem: edge
//! `S -> out(i)` (cap 1, cost 0) for every item, `in(i) -> T` (cap 1, cost
//! 0) for every item. Each augmentation pushes one unit along the
//! cheapest `S -> T` path in the residual graph. Dijkstra with Johnson
//! potentials is used once residual edges can go negative (after the
//! first augmentation); the first round's potentials come from a
//! Bellman-Ford pass, since every original edge cost is non-negative but
//! residual reverse edges are not.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::oracle::{MinCostFlowSolver, SolveOutcome};
use super::reduction::FlowGraph;
use super::{ResidualGraph, INF};

/// Dijkstra over reduced costs `cost(u,v) + h[u] - h[v]` (non-negative by
/// the potential invariant), returning the real distances and the
/// shortest-path predecessor edge for each node.
fn dijkstra(net: &ResidualGraph, source: usize, h: &[i64]) -> (Vec<i64>, Vec<Option<usize>>) {
    let n = net.adj.len();
    let mut dist = vec![INF; n];
    let mut prev_edge = vec![None; n];
    let mut visited = vec![false; n];
    dist[source] = 0;

    #[derive(PartialEq, Eq)]
    struct HeapEntry(i64, usize);
    impl Ord for HeapEntry {
        fn cmp(&self, other: &Self) -> Ordering {
            other.0.cmp(&self.0)
        }
    }
    impl PartialOrd for HeapEntry {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    let mut heap = BinaryHeap::new();
    heap.push(HeapEntry(0, source));
    while let Some(HeapEntry(d, u)) = heap.pop() {
        if visited[u] {
            continue;
        }
        visited[u] = true;
        if d > dist[u] {
            continue;
        }
        for &e in &net.adj[u] {
            let edge = &net.edges[e];
            if edge.cap <= 0 {
                continue;
            }
            let reduced = edge.cost + h[u] - h[edge.to];
            let nd = dist[u] + reduced;
            if nd < dist[edge.to] {
                dist[edge.to] = nd;
                prev_edge[edge.to] = Some(e);
                heap.push(HeapEntry(nd, edge.to));
            }
        }
    }
    (dist, prev_edge)
}

pub struct SuccessiveShortestPaths;

impl MinCostFlowSolver for SuccessiveShortestPaths {
    fn solve(&self, graph: &FlowGraph) -> SolveOutcome {
        let n = graph.items.len();
        if n == 0 {
            return SolveOutcome::Optimal {
                flow: Vec::new(),
                total_cost: 0,
            };
        }

        let source = graph.num_nodes;
        let sink = graph.num_nodes + 1;
        let mut net = ResidualGraph::new(graph.num_nodes + 2);
        for (i, edge) in graph.edges.iter().enumerate() {
            net.add_edge(edge.from, edge.to, edge.cap, edge.cost, Some(i));
        }

        for local in 0..n {
            net.add_edge(source, FlowGraph::out_node(local), 1, 0, None);
            net.add_edge(FlowGraph::in_node(local), sink, 1, 0, None);
        }

        let mut h = net.bellman_ford(source);
        if h[sink] >= INF {
            return SolveOutcome::Infeasible;
        }

        let mut total_cost = 0i64;
        let mut flow_units = 0i64;
        while flow_units < n as i64 {
            let (dist, prev_edge) = dijkstra(&net, source, &h);
            if dist[sink] >= INF {
                return SolveOutcome::Infeasible;
            }
            for (v, hv) in h.iter_mut().enumerate() {
                if dist[v] < INF {
                    *hv += dist[v];
                }
            }

            // Every edge has capacity 1, so the augmenting bottleneck is
            // always 1.
            let mut v = sink;
            let mut path = Vec::new();
            while let Some(e) = prev_edge[v] {
                path.push(e);
                v = net.edges[e ^ 1].to;
            }
            for e in path {
                net.edges[e].cap -= 1;
                net.edges[e ^ 1].cap += 1;
                total_cost += net.edges[e].cost;
            }
            flow_units += 1;
        }

        SolveOutcome::Optimal {
            flow: net.decode_chosen(graph.edges.len()),
            total_cost,
        }
    }
}
