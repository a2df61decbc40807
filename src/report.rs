//! Renders the TRADE LOOPS / ITEM SUMMARY / TRADE STATISTICS report
//! (spec.md §4.9, §6).

use std::collections::HashSet;
use std::fmt::Write as _;

use crate::model::graph::ItemGraph;
use crate::model::item::{Item, ItemId};
use crate::options::{BoolOption, OptionStore};
use crate::parser::Diagnostics;
use crate::solve::SolveResult;

/// Left-padding column width for the leftmost field of TRADE LOOPS and
/// ITEM SUMMARY tabular lines (spec.md §6).
const COLUMN_WIDTH: usize = 50;

fn owner_of(item: &Item) -> &str {
    item.owner.as_deref().unwrap_or("")
}

fn describe(item: &Item) -> String {
    format!("({}) {}", owner_of(item), item.id)
}

fn pad(label: &str) -> String {
    if label.len() >= COLUMN_WIDTH {
        format!("{label} ")
    } else {
        format!("{label:<COLUMN_WIDTH$} ")
    }
}

/// Renders the full textual report for a completed parse and solve, in
/// the section order of spec.md §4.9: errors, missing items, trade
/// loops, item summary, trade statistics.
pub fn render(
    graph: &ItemGraph,
    options: &OptionStore,
    diagnostics: &Diagnostics,
    result: &SolveResult,
) -> String {
    let mut out = String::new();

    if !diagnostics.is_empty() && !options.bool_opt(BoolOption::HideErrors) {
        render_errors(&mut out, diagnostics);
    }
    if options.bool_opt(BoolOption::ShowMissing) && !diagnostics.missing.is_empty() {
        render_missing(&mut out, diagnostics);
    }
    if !options.bool_opt(BoolOption::HideLoops) {
        render_trade_loops(&mut out, graph, result);
    }
    if !options.bool_opt(BoolOption::HideSummary) {
        render_item_summary(&mut out, graph, options);
    }
    if !options.bool_opt(BoolOption::HideStats) {
        render_statistics(&mut out, graph, result);
    }

    out
}

fn render_errors(out: &mut String, diagnostics: &Diagnostics) {
    out.push_str("ERRORS\n");
    for diagnostic in &diagnostics.errors {
        match diagnostic.line {
            Some(line) => {
                let _ = writeln!(out, "{line}:{}", diagnostic.error);
            }
            None => {
                let _ = writeln!(out, "{}", diagnostic.error);
            }
        }
    }
    out.push('\n');
}

fn render_missing(out: &mut String, diagnostics: &Diagnostics) {
    out.push_str("MISSING ITEMS\n");
    let mut missing: Vec<_> = diagnostics.missing.iter().collect();
    missing.sort_by(|a, b| a.0.cmp(b.0));
    for (id, count) in missing {
        let _ = writeln!(out, "{id}\t{count}");
    }
    out.push('\n');
}

fn render_trade_loops(out: &mut String, graph: &ItemGraph, result: &SolveResult) {
    let _ = writeln!(
        out,
        "TRADE LOOPS ({} total trades):",
        result.chosen.len()
    );
    for cycle in &result.cycles {
        for &id in cycle {
            let item = graph.item(id);
            if let Some(receive_from) = item.receive {
                let received = graph.item(receive_from);
                let _ = writeln!(out, "{}receives {}", pad(&describe(item)), describe(received));
            }
        }
        out.push('\n');
    }
}

fn render_item_summary(out: &mut String, graph: &ItemGraph, options: &OptionStore) {
    out.push_str("ITEM SUMMARY\n");

    let mut ids: Vec<ItemId> = graph
        .traded_candidates()
        .into_iter()
        .filter(|&id| !graph.item(id).is_dummy)
        .collect();

    if options.bool_opt(BoolOption::SortByItem) {
        ids.sort_by(|&a, &b| graph.item(a).id.cmp(&graph.item(b).id));
    } else {
        ids.sort_by(|&a, &b| owner_of(graph.item(a)).cmp(owner_of(graph.item(b))));
    }

    let hide_nontrades = options.bool_opt(BoolOption::HideNontrades);
    for id in ids {
        let item = graph.item(id);
        if item.trade {
            let received = graph.item(item.receive.expect("trading item has a receive neighbor"));
            let sent_to = graph.item(item.send.expect("trading item has a send neighbor"));
            let _ = writeln!(
                out,
                "{}receives {} and sends to {}",
                pad(&describe(item)),
                describe(received),
                describe(sent_to)
            );
        } else if !hide_nontrades {
            let _ = writeln!(out, "{}does not trade", pad(&describe(item)));
        }
    }
    out.push('\n');
}

fn render_statistics(out: &mut String, graph: &ItemGraph, result: &SolveResult) {
    out.push_str("TRADE STATISTICS\n");

    let trades = result.chosen.len();
    let total_items = graph
        .traded_candidates()
        .into_iter()
        .filter(|&id| !graph.item(id).is_dummy)
        .count();
    let pct = if total_items == 0 {
        0.0
    } else {
        (trades as f64 / total_items as f64) * 100.0
    };
    let _ = writeln!(
        out,
        "Num trades = {trades} of {total_items} items ({}%)",
        format_significant(pct, 3)
    );
    let _ = writeln!(out, "Total cost = {}", result.total_cost);
    let _ = writeln!(out, "Num trading groups = {}", result.cycles.len());

    let sizes: Vec<String> = result.cycles.iter().map(|c| c.len().to_string()).collect();
    let _ = writeln!(out, "Group sizes = {}", sizes.join(", "));

    let mut users: HashSet<&str> = HashSet::new();
    for cycle in &result.cycles {
        for &id in cycle {
            if let Some(owner) = graph.item(id).owner.as_deref() {
                users.insert(owner);
            }
        }
    }
    let _ = writeln!(out, "Num users trading = {}", users.len());
}

/// Formats a non-negative value to `sig_figs` significant digits in
/// general (non-fixed) notation, trailing zeros and a trailing decimal
/// point trimmed — matching `examples/original_source/lib/solver/src/
/// mathtrader.cpp`'s `std::setprecision(3)` applied *before*
/// `std::fixed`, which only takes effect on output written after the
/// percentage. This prints `100` for a full trade and `66.7` for a
/// 2-of-3 trade, never `100.000`/`66.667`.
fn format_significant(value: f64, sig_figs: i32) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let exponent = value.abs().log10().floor() as i32;
    let decimals = (sig_figs - 1 - exponent).max(0) as usize;
    let formatted = format!("{value:.decimals$}");
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}
