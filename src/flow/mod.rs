//! Min-cost-flow reduction and solver oracles (spec.md §4.6, §4.7).

pub mod cycle_canceling;
pub mod oracle;
pub mod reduction;
pub mod ssp;

pub use oracle::{MinCostFlowSolver, SolveOutcome, SolverAlgorithm, ALL_ALGORITHMS};
pub use reduction::{build, EdgeKind, FlowGraph};

const INF: i64 = i64::MAX / 4;

/// A residual edge in the shared min-cost-flow working graph. Both
/// oracles (`ssp.rs`, `cycle_canceling.rs`) build one of these over a
/// [`FlowGraph`]'s edges, stored as a classic paired forward/backward
/// array so `edges[i ^ 1]` is always `i`'s reverse.
pub(crate) struct ResidualEdge {
    pub to: usize,
    pub cap: i64,
    pub cost: i64,
    /// Index into the originating [`FlowGraph::edges`], absent for edges
    /// a solver adds itself (e.g. successive-shortest-paths' virtual
    /// source/sink links).
    pub original: Option<usize>,
}

pub(crate) struct ResidualGraph {
    pub edges: Vec<ResidualEdge>,
    pub adj: Vec<Vec<usize>>,
}

impl ResidualGraph {
    pub fn new(num_nodes: usize) -> Self {
        ResidualGraph {
            edges: Vec::new(),
            adj: vec![Vec::new(); num_nodes],
        }
    }

    pub fn add_edge(&mut self, from: usize, to: usize, cap: i64, cost: i64, original: Option<usize>) {
        let fwd = self.edges.len();
        self.adj[from].push(fwd);
        self.edges.push(ResidualEdge {
            to,
            cap,
            cost,
            original,
        });
        let bwd = self.edges.len();
        self.adj[to].push(bwd);
        self.edges.push(ResidualEdge {
            to: from,
            cap: 0,
            cost: -cost,
            original: None,
        });
    }

    /// Builds the working graph directly from a [`FlowGraph`]'s edges, one
    /// residual forward/backward pair per edge, indices matching 1:1.
    pub fn from_flow_graph(flow: &FlowGraph) -> Self {
        let mut net = ResidualGraph::new(flow.num_nodes);
        for (i, edge) in flow.edges.iter().enumerate() {
            net.add_edge(edge.from, edge.to, edge.cap, edge.cost, Some(i));
        }
        net
    }

    /// Decodes which original [`FlowGraph`] edges ended up saturated
    /// (flow = capacity), the universal 0/1-flow decode since every edge
    /// in this system has capacity exactly 1.
    pub fn decode_chosen(&self, num_original_edges: usize) -> Vec<bool> {
        let mut chosen = vec![false; num_original_edges];
        for edge in &self.edges {
            if let Some(original) = edge.original {
                if edge.cap == 0 {
                    chosen[original] = true;
                }
            }
        }
        chosen
    }

    /// Bellman-Ford shortest path from `source` over edges with residual
    /// capacity. Returns `None` if a negative cycle reachable from
    /// `source` exists (used by cycle-canceling's detection pass).
    pub fn bellman_ford(&self, source: usize) -> Vec<i64> {
        let n = self.adj.len();
        let mut dist = vec![INF; n];
        dist[source] = 0;
        for _ in 0..n {
            let mut changed = false;
            for u in 0..n {
                if dist[u] == INF {
                    continue;
                }
                for &e in &self.adj[u] {
                    let edge = &self.edges[e];
                    if edge.cap > 0 && dist[u] + edge.cost < dist[edge.to] {
                        dist[edge.to] = dist[u] + edge.cost;
                        changed = true;
                    }
                }
            }
            if !changed {
                break;
            }
        }
        dist
    }
}
