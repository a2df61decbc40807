//! The solver oracle contract (spec.md §4.7): given a [`FlowGraph`],
//! return either an integer flow minimizing total cost, or "infeasible".
//!
//! Concrete algorithms are a tagged variant selected by name, matching the
//! "polymorphic solver backends" design note of spec.md §9: the remaining
//! pipeline depends only on this trait, never on a specific algorithm.

use super::reduction::FlowGraph;

/// Outcome of a min-cost-flow solve: either an optimal 0/1 flow (one
/// entry per [`FlowGraph::edges`], true iff that edge carries one unit)
/// with its total cost, or infeasibility.
#[derive(Debug, Clone)]
pub enum SolveOutcome {
    Optimal { flow: Vec<bool>, total_cost: i64 },
    Infeasible,
}

/// Capability set a concrete min-cost-flow algorithm must provide
/// (spec.md §4.7, §9: `{run, is_optimal, extract_flow}`).
pub trait MinCostFlowSolver {
    fn solve(&self, graph: &FlowGraph) -> SolveOutcome;

    /// Whether this algorithm is guaranteed to return a cost-minimal flow
    /// when one exists. Every oracle shipped in this crate is optimal;
    /// the method exists so a future approximate/heuristic oracle can
    /// opt out without changing the trait surface.
    fn is_optimal(&self) -> bool {
        true
    }
}

/// Names an implemented oracle, matching the CLI's `--algorithm` surface
/// (spec.md §6 SUPPLEMENT). `NetworkSimplex` is a deliberate misnomer kept
/// for familiarity to OLWLG/TradeMaximizer users: it names the successive-
/// shortest-paths solver in `ssp.rs`, not a literal network-simplex
/// implementation (see DESIGN.md).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverAlgorithm {
    NetworkSimplex,
    CycleCanceling,
}

impl SolverAlgorithm {
    pub fn parse(name: &str) -> Option<SolverAlgorithm> {
        match name {
            "network-simplex" | "cost-scaling" | "capacity-scaling" => {
                Some(SolverAlgorithm::NetworkSimplex)
            }
            "cycle-canceling" => Some(SolverAlgorithm::CycleCanceling),
            _ => None,
        }
    }

    pub fn solver(self) -> Box<dyn MinCostFlowSolver> {
        match self {
            SolverAlgorithm::NetworkSimplex => Box::new(super::ssp::SuccessiveShortestPaths),
            SolverAlgorithm::CycleCanceling => Box::new(super::cycle_canceling::CycleCanceling),
        }
    }
}

/// All oracles implemented in this crate, for `--benchmark-all` (spec.md
/// §6 SUPPLEMENT, exercising §8 testable property 5: any optimal solver
/// must agree on the number of traded items).
pub const ALL_ALGORITHMS: &[SolverAlgorithm] =
    &[SolverAlgorithm::NetworkSimplex, SolverAlgorithm::CycleCanceling];
