use std::fs;
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::Parser;

use mathtrade::flow::{self, MinCostFlowSolver, SolverAlgorithm};
use mathtrade::model::graph::ItemGraph;
use mathtrade::options::{BoolOption, PriorityScheme};
use mathtrade::parser::{self, Diagnostics};
use mathtrade::report;
use mathtrade::solve;

mod cli;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: cli::Cli) -> anyhow::Result<()> {
    if cli.input_url.is_some() {
        bail!("--input-url is not implemented in this build; fetch the want-file externally and pass it to --input-file");
    }
    if cli.export_dot.is_some() {
        bail!("--export-dot is not implemented in this build");
    }

    let (mut graph, mut options, diagnostics) = load_input(&cli)?;
    apply_overrides(&cli, &mut options);

    if let Some(path) = &cli.export_graph {
        fs::write(path, graph.canonical_export())
            .with_context(|| format!("writing canonical graph export to {}", path.display()))?;
    }

    let flow = flow::build(&graph, &options).context("reducing item graph to a flow instance")?;

    let report_text = if cli.benchmark_all {
        run_benchmark(&mut graph, &options, &flow, &diagnostics)?
    } else {
        let algorithm = match &cli.algorithm {
            Some(name) => SolverAlgorithm::parse(name)
                .with_context(|| format!("unknown --algorithm `{name}`"))?,
            None => SolverAlgorithm::NetworkSimplex,
        };
        let outcome = algorithm.solver().solve(&flow);
        let result = solve::resolve(&mut graph, &flow, &outcome).context("decoding solver outcome")?;
        report::render(&graph, &options, &diagnostics, &result)
    };

    match &cli.output_file {
        Some(path) => fs::write(path, report_text)
            .with_context(|| format!("writing report to {}", path.display()))?,
        None => print!("{report_text}"),
    }

    Ok(())
}

fn load_input(
    cli: &cli::Cli,
) -> anyhow::Result<(ItemGraph, mathtrade::options::OptionStore, Diagnostics)> {
    if let Some(path) = &cli.input_graph {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading canonical graph from {}", path.display()))?;
        let graph = ItemGraph::from_canonical_export(&text);
        return Ok((graph, mathtrade::options::OptionStore::new(), Diagnostics::default()));
    }

    let path = cli
        .input_file
        .as_ref()
        .context("one of --input-file, --input-url, or --input-graph is required")?;
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading want-file {}", path.display()))?;
    let outcome = parser::parse(&text);
    Ok((outcome.graph, outcome.options, outcome.diagnostics))
}

fn apply_overrides(cli: &cli::Cli, options: &mut mathtrade::options::OptionStore) {
    if cli.no_priorities {
        options.set_priority_scheme(PriorityScheme::None);
    } else if let Some(name) = &cli.priorities {
        let scheme = PriorityScheme::parse_cli(name);
        options.set_priority_scheme(scheme);
    }

    if cli.show_non_trades {
        options.set_bool_opt(BoolOption::HideNontrades, false);
    } else if cli.hide_non_trades {
        options.set_bool_opt(BoolOption::HideNontrades, true);
    }
}

/// Runs every implemented oracle, asserting their agreement on trade
/// count and total cost (spec.md §8 testable property 5), and renders
/// the report from the first oracle's outcome with a summary line
/// appended.
fn run_benchmark(
    graph: &mut ItemGraph,
    options: &mathtrade::options::OptionStore,
    flow_graph: &flow::FlowGraph,
    diagnostics: &Diagnostics,
) -> anyhow::Result<String> {
    let mut summaries = Vec::new();
    let mut first_report = None;
    let mut agreement = None;

    for algorithm in flow::ALL_ALGORITHMS {
        let outcome = algorithm.solver().solve(flow_graph);
        let result =
            solve::resolve(graph, flow_graph, &outcome).context("decoding solver outcome")?;
        summaries.push(format!(
            "{algorithm:?}: {} trades, cost {}",
            result.chosen.len(),
            result.total_cost
        ));
        match &agreement {
            None => agreement = Some((result.chosen.len(), result.total_cost)),
            Some((count, cost)) => {
                if *count != result.chosen.len() || *cost != result.total_cost {
                    bail!(
                        "solver oracles disagree: {} trades/cost {} vs {} trades/cost {}",
                        count,
                        cost,
                        result.chosen.len(),
                        result.total_cost
                    );
                }
            }
        }
        if first_report.is_none() {
            first_report = Some(report::render(graph, options, diagnostics, &result));
        }
    }

    let mut out = first_report.unwrap_or_default();
    out.push_str("BENCHMARK\n");
    for line in summaries {
        out.push_str(&line);
        out.push('\n');
    }
    Ok(out)
}
