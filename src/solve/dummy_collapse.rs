//! Collapses chains of dummy items in the result graph into a single
//! synthetic arc between the chain's real sender and real receiver
//! (spec.md §4.8 steps 2-4).
//!
//! spec.md's prose names the synthetic arc `receiver -> sender`, but its
//! own worked example (Scenario 3: `A -> %D -> B -> A` collapses to
//! `A -> B -> A`) only holds if the synthetic arc runs `sender ->
//! receiver` — the real item whose outgoing arc started the chain still
//! sends to the real item at the chain's end. This follows the worked
//! example over the prose; see DESIGN.md.

use std::collections::HashMap;

use crate::model::graph::ItemGraph;
use crate::model::item::ItemId;

use super::extractor::ChosenArc;

/// Replaces every maximal dummy chain in `chosen` with one synthetic arc
/// `sender -> receiver`, `rank = rank(sender -> first dummy)`. A cycle
/// made up entirely of dummy items has no real sender to start a walk
/// from, so it is silently dropped (spec.md §4.8 step 2, "a cycle of
/// only dummies is detected, ignored").
pub fn collapse(graph: &ItemGraph, chosen: &[ChosenArc]) -> Vec<ChosenArc> {
    let by_source: HashMap<ItemId, ChosenArc> =
        chosen.iter().map(|arc| (arc.source, *arc)).collect();

    let mut result = Vec::with_capacity(chosen.len());

    for arc in chosen {
        if graph.item(arc.source).is_dummy {
            // Only real items start a chain walk; arcs sourced at a
            // dummy are consumed from inside the walk below.
            continue;
        }

        let sender = arc.source;
        let rank = arc.rank;
        let mut current = arc.target;

        loop {
            if !graph.item(current).is_dummy {
                result.push(ChosenArc {
                    source: sender,
                    target: current,
                    rank,
                });
                break;
            }
            match by_source.get(&current) {
                Some(next) => current = next.target,
                // A dummy with no outgoing chosen arc cannot appear on a
                // chosen cycle; guard against malformed input regardless.
                None => break,
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::item::Item;

    fn item(graph: &mut ItemGraph, id: &str, is_dummy: bool) -> ItemId {
        graph.insert(Item::new(id.to_string(), is_dummy))
    }

    #[test]
    fn scenario_3_dummy_chain_collapses() {
        let mut graph = ItemGraph::new();
        let a = item(&mut graph, "A", false);
        let d = item(&mut graph, "%D-U1", true);
        let b = item(&mut graph, "B", false);

        let chosen = vec![
            ChosenArc {
                source: a,
                target: d,
                rank: 1,
            },
            ChosenArc {
                source: d,
                target: b,
                rank: 1,
            },
            ChosenArc {
                source: b,
                target: a,
                rank: 1,
            },
        ];

        let collapsed = collapse(&graph, &chosen);
        assert_eq!(collapsed.len(), 2);
        assert!(collapsed
            .iter()
            .any(|arc| arc.source == a && arc.target == b));
        assert!(collapsed
            .iter()
            .any(|arc| arc.source == b && arc.target == a));
    }

    #[test]
    fn pure_dummy_cycle_is_dropped() {
        let mut graph = ItemGraph::new();
        let d1 = item(&mut graph, "%D1-U", true);
        let d2 = item(&mut graph, "%D2-U", true);

        let chosen = vec![
            ChosenArc {
                source: d1,
                target: d2,
                rank: 1,
            },
            ChosenArc {
                source: d2,
                target: d1,
                rank: 1,
            },
        ];

        assert!(collapse(&graph, &chosen).is_empty());
    }

    #[test]
    fn real_to_real_arc_is_unchanged() {
        let mut graph = ItemGraph::new();
        let a = item(&mut graph, "A", false);
        let b = item(&mut graph, "B", false);
        let chosen = vec![ChosenArc {
            source: a,
            target: b,
            rank: 3,
        }];
        let collapsed = collapse(&graph, &chosen);
        assert_eq!(collapsed.len(), 1);
        assert_eq!(collapsed[0].rank, 3);
    }
}
