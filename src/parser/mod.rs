//! Orchestrates the whole want-file parse: classifies each line, drives
//! the option store, the official-names/want-list directive modes, and
//! accumulates diagnostics (spec.md §4.4, §7).

pub mod directives;
pub mod registry;
pub mod tokenizer;
pub mod wantlist_parser;

use std::collections::HashMap;

use crate::error::ParseError;
use crate::model::graph::ItemGraph;
use crate::model::item::Item;
use crate::options::OptionStore;

use directives::parse_official_name_line;
use tokenizer::{classify_line, LineKind};
use wantlist_parser::parse_wantlist_line;

/// One collected parse diagnostic, tagged with its 1-based line number
/// (absent for whole-file reference errors computed in the post-pass).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: Option<u32>,
    pub error: ParseError,
}

/// Diagnostics gathered over a full parse: errors, in-bundle duplicate
/// targets, and missing (never-declared) targets, each with a frequency
/// (spec.md §4.4 "Duplicate and missing bookkeeping").
#[derive(Debug, Default)]
pub struct Diagnostics {
    pub errors: Vec<Diagnostic>,
    /// `(source id, target id) -> extra-occurrence count`.
    pub duplicates: HashMap<(String, String), u32>,
    /// `target id -> cross-file frequency`, for ids that are never
    /// registered by the time the file is fully read.
    pub missing: HashMap<String, u32>,
}

impl Diagnostics {
    fn push(&mut self, line: u32, error: ParseError) {
        self.errors.push(Diagnostic {
            line: Some(line),
            error,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Result of parsing a complete want-file: the canonical item graph, the
/// resolved option store, and the diagnostics collected along the way.
pub struct ParseOutcome {
    pub graph: ItemGraph,
    pub options: OptionStore,
    pub diagnostics: Diagnostics,
}

#[derive(PartialEq, Eq)]
enum Mode {
    Wantlists,
    OfficialNames,
}

/// Parses an entire want-file (spec.md §6, §4.4). `input` may use LF or
/// CRLF line endings; `str::lines` strips both uniformly.
pub fn parse(input: &str) -> ParseOutcome {
    let mut graph = ItemGraph::new();
    let mut options = OptionStore::new();
    let mut diagnostics = Diagnostics::default();

    let mut mode = Mode::Wantlists;
    let mut official_names_declared = false;
    let mut any_wantlist_seen = false;
    let mut parsing_started = false;

    for (idx, raw_line) in input.lines().enumerate() {
        let line_no = (idx + 1) as u32;
        match classify_line(raw_line) {
            LineKind::Ignore => {}
            LineKind::Option(tokens) => {
                if parsing_started {
                    diagnostics.push(
                        line_no,
                        ParseError::OptionAfterParsingStarted {
                            name: tokens.first().cloned().unwrap_or_default(),
                        },
                    );
                    continue;
                }
                for err in options.apply_line(&tokens) {
                    diagnostics.push(line_no, ParseError::Option(err));
                }
            }
            LineKind::Directive(name) => {
                parsing_started = true;
                options.lock();
                match name.as_str() {
                    "BEGIN-OFFICIAL-NAMES" => {
                        if any_wantlist_seen {
                            diagnostics.push(line_no, ParseError::OfficialNamesAfterWantlist);
                        } else {
                            mode = Mode::OfficialNames;
                            official_names_declared = true;
                        }
                    }
                    "END-OFFICIAL-NAMES" => {
                        mode = Mode::Wantlists;
                    }
                    other => {
                        diagnostics.push(line_no, ParseError::UnknownDirective(other.to_string()));
                    }
                }
            }
            LineKind::Payload(tokens) => {
                parsing_started = true;
                options.lock();
                match mode {
                    Mode::OfficialNames => {
                        handle_official_name_line(&tokens, &mut graph, &mut diagnostics, line_no);
                    }
                    Mode::Wantlists => {
                        any_wantlist_seen = true;
                        handle_wantlist_line(
                            &tokens,
                            &mut graph,
                            &options,
                            official_names_declared,
                            &mut diagnostics,
                            line_no,
                        );
                    }
                }
            }
        }
    }

    compute_missing(&graph, &mut diagnostics);

    ParseOutcome {
        graph,
        options,
        diagnostics,
    }
}

fn handle_official_name_line(
    tokens: &[String],
    graph: &mut ItemGraph,
    diagnostics: &mut Diagnostics,
    line_no: u32,
) {
    match parse_official_name_line(tokens) {
        Ok(parsed) => {
            if graph.get(&parsed.item_id).is_some() {
                diagnostics.push(
                    line_no,
                    ParseError::DuplicateOfficialName {
                        id: parsed.item_id,
                    },
                );
                return;
            }
            let mut item = Item::new(
                parsed.item_id.clone(),
                crate::model::item::is_dummy_identifier(&parsed.item_id),
            );
            item.official_name = Some(parsed.name);
            item.owner = Some(parsed.username);
            graph.insert(item);
        }
        Err(err) => diagnostics.push(line_no, ParseError::from(err)),
    }
}

fn handle_wantlist_line(
    tokens: &[String],
    graph: &mut ItemGraph,
    options: &OptionStore,
    official_names_declared: bool,
    diagnostics: &mut Diagnostics,
    line_no: u32,
) {
    match parse_wantlist_line(tokens, graph, options, official_names_declared) {
        Ok(parsed) => {
            let source_id = graph.item(parsed.source).id.clone();
            for dup_target in parsed.duplicates {
                *diagnostics
                    .duplicates
                    .entry((source_id.clone(), dup_target))
                    .or_insert(0) += 1;
            }
            graph.commit_wantlist(parsed.source, parsed.bundle);
        }
        Err(err) => diagnostics.push(line_no, err),
    }
}

/// Post-pass: a target is "missing" if it was referenced by some bundle
/// but never itself registered in the item graph (spec.md §4.4).
fn compute_missing(graph: &ItemGraph, diagnostics: &mut Diagnostics) {
    for (id, _) in graph.iter() {
        let Some(bundle) = graph.wantlist(id) else {
            continue;
        };
        for (target, _rank) in &bundle.targets {
            if graph.get(target).is_none() {
                *diagnostics.missing.entry(target.clone()).or_insert(0) += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_empty_graph_and_no_errors() {
        let outcome = parse("");
        assert!(outcome.graph.is_empty());
        assert!(outcome.diagnostics.is_empty());
    }

    #[test]
    fn two_way_swap_scenario_1() {
        let outcome = parse("(alice) A : B\n(bob)   B : A\n");
        assert!(outcome.diagnostics.is_empty());
        let arcs = outcome.graph.export_arcs();
        assert_eq!(arcs.len(), 2);
    }

    #[test]
    fn missing_item_scenario_4() {
        let outcome = parse("(u1) A : B C\n(u2) B : A\n");
        assert!(outcome.diagnostics.is_empty());
        assert_eq!(outcome.diagnostics.missing.get("C"), Some(&1));
        // A->C is dropped since C never gets a want-list of its own.
        let arcs = outcome.graph.export_arcs();
        assert!(arcs.iter().all(|a| {
            outcome.graph.item(a.target).id != "C"
        }));
    }

    #[test]
    fn duplicate_wantlist_scenario_5() {
        let outcome = parse("(u1) A : B\n(u1) A : C\n(u2) B : A\n");
        assert_eq!(outcome.diagnostics.errors.len(), 1);
        assert!(matches!(
            outcome.diagnostics.errors[0].error,
            ParseError::DuplicateWantlist { .. }
        ));
        let a = outcome.graph.get("A").unwrap();
        assert_eq!(
            outcome.graph.wantlist(a).unwrap().targets,
            vec![("B".to_string(), 1)]
        );
    }

    #[test]
    fn official_names_must_precede_wantlists() {
        let outcome = parse("(u1) A : B\n!BEGIN-OFFICIAL-NAMES\nA ==> \"A\" (from u1)\n!END-OFFICIAL-NAMES\n");
        assert!(outcome
            .diagnostics
            .errors
            .iter()
            .any(|d| d.error == ParseError::OfficialNamesAfterWantlist));
    }

    #[test]
    fn options_after_parsing_started_are_errors() {
        let outcome = parse("(u1) A : B\n#! ALLOW-DUMMIES\n");
        assert!(outcome
            .diagnostics
            .errors
            .iter()
            .any(|d| matches!(d.error, ParseError::OptionAfterParsingStarted { .. })));
    }

    #[test]
    fn dummy_chain_scenario_3_parses_clean() {
        let outcome = parse(
            "#! ALLOW-DUMMIES\n(u1) A : %D\n(u1) %D : B\n(u2) B : A\n",
        );
        assert!(outcome.diagnostics.is_empty());
        assert_eq!(outcome.graph.export_arcs().len(), 3);
    }

    #[test]
    fn zero_target_wantlist_has_no_outgoing_arcs() {
        let outcome = parse("(u1) A :\n");
        assert!(outcome.diagnostics.is_empty());
        let a = outcome.graph.get("A").unwrap();
        assert!(outcome.graph.item(a).has_wantlist);
        assert!(outcome.graph.wantlist(a).unwrap().targets.is_empty());
    }
}
