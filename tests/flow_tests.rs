use mathtrade::flow::{self, EdgeKind, MinCostFlowSolver, SolverAlgorithm};
use mathtrade::model::graph::ItemGraph;
use mathtrade::model::item::Item;
use mathtrade::model::wantlist::Wantlist;
use mathtrade::options::OptionStore;

fn two_way_swap() -> ItemGraph {
    let mut graph = ItemGraph::new();
    let a = graph.insert(Item::new("A".to_string(), false));
    let b = graph.insert(Item::new("B".to_string(), false));
    let mut wl_a = Wantlist::new(a);
    wl_a.push("B".to_string(), 1);
    graph.commit_wantlist(a, wl_a);
    let mut wl_b = Wantlist::new(b);
    wl_b.push("A".to_string(), 1);
    graph.commit_wantlist(b, wl_b);
    graph
}

#[test]
fn successive_shortest_paths_trades_a_two_way_swap() {
    let graph = two_way_swap();
    let options = OptionStore::new();
    let flow_graph = flow::build(&graph, &options).unwrap();
    let outcome = flow::SolverAlgorithm::NetworkSimplex.solver().solve(&flow_graph);
    match outcome {
        flow::SolveOutcome::Optimal { flow, total_cost } => {
            let chosen = flow.iter().filter(|&&f| f).count();
            assert_eq!(chosen, 2);
            assert_eq!(total_cost, 2);
        }
        flow::SolveOutcome::Infeasible => panic!("expected an optimal flow"),
    }
}

#[test]
fn cycle_canceling_agrees_with_successive_shortest_paths() {
    let graph = two_way_swap();
    let options = OptionStore::new();
    let flow_graph = flow::build(&graph, &options).unwrap();

    let ssp_outcome = SolverAlgorithm::NetworkSimplex.solver().solve(&flow_graph);
    let cc_outcome = SolverAlgorithm::CycleCanceling.solver().solve(&flow_graph);

    let (ssp_cost, cc_cost) = match (ssp_outcome, cc_outcome) {
        (
            flow::SolveOutcome::Optimal { total_cost: a, .. },
            flow::SolveOutcome::Optimal { total_cost: b, .. },
        ) => (a, b),
        _ => panic!("both oracles must find an optimal flow"),
    };
    assert_eq!(ssp_cost, cc_cost);
}

#[test]
fn empty_graph_has_an_empty_optimal_flow() {
    let graph = ItemGraph::new();
    let options = OptionStore::new();
    let flow_graph = flow::build(&graph, &options).unwrap();
    assert_eq!(flow_graph.num_nodes, 0);
    let outcome = SolverAlgorithm::NetworkSimplex.solver().solve(&flow_graph);
    match outcome {
        flow::SolveOutcome::Optimal { flow, total_cost } => {
            assert!(flow.is_empty());
            assert_eq!(total_cost, 0);
        }
        flow::SolveOutcome::Infeasible => panic!("expected an optimal flow"),
    }
}

#[test]
fn one_self_edge_per_traded_candidate() {
    let graph = two_way_swap();
    let options = OptionStore::new();
    let flow_graph = flow::build(&graph, &options).unwrap();
    let self_edges = flow_graph
        .edges
        .iter()
        .filter(|e| matches!(e.kind, EdgeKind::SelfEdge { .. }))
        .count();
    assert_eq!(self_edges, 2);
}
