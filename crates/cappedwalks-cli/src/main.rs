#![doc = include_str!("../README.md")]

mod cli;

use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cappedwalks_engine::cases::{Case, PairOrder, Regime};
use cappedwalks_engine::pipeline::{run_survey_default, solve_case, EngineError, EngineOptions};
use cappedwalks_engine::result::{CaseReport, SurveyReport};
use cappedwalks_lp::backends::microlp_backend::MicrolpSolver;

use cli::{Cli, Commands};

/// A feasible case exceeded the conjectured bound: a counterexample.
const EXIT_BOUND_VIOLATED: i32 = 1;
/// Solver failure, I/O failure, or invalid usage.
const EXIT_FAILURE: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let code = match cli.command {
        Commands::Check { format, out } => run_check(&format, out.as_deref()),
        Commands::Case {
            index,
            order12,
            order23,
            regime12,
            regime23,
            format,
        } => run_case(index, &order12, &order23, &regime12, &regime23, &format),
    };
    std::process::exit(code);
}

fn run_check(format: &str, out: Option<&Path>) -> i32 {
    let format = match parse_output_format(format) {
        Ok(format) => format,
        Err(reason) => {
            eprintln!("error: {reason}");
            return EXIT_FAILURE;
        }
    };

    match run_survey_default() {
        Ok(report) => {
            match render_survey(&report, format) {
                Ok(rendered) => println!("{rendered}"),
                Err(reason) => {
                    eprintln!("error: {reason}");
                    return EXIT_FAILURE;
                }
            }
            if let Some(path) = out {
                if let Err(reason) = write_json_artifact(&report, path) {
                    eprintln!("error: {reason}");
                    return EXIT_FAILURE;
                }
            }
            0
        }
        Err(EngineError::BoundViolated(case)) => {
            eprintln!("COUNTEREXAMPLE: the conjectured bound is violated");
            eprintln!("{case}");
            EXIT_BOUND_VIOLATED
        }
        Err(err) => {
            eprintln!("error: {err}");
            EXIT_FAILURE
        }
    }
}

fn run_case(
    index: Option<usize>,
    order12: &str,
    order23: &str,
    regime12: &str,
    regime23: &str,
    format: &str,
) -> i32 {
    let format = match parse_output_format(format) {
        Ok(format) => format,
        Err(reason) => {
            eprintln!("error: {reason}");
            return EXIT_FAILURE;
        }
    };
    let (index, case) = match resolve_case(index, order12, order23, regime12, regime23) {
        Ok(resolved) => resolved,
        Err(reason) => {
            eprintln!("error: {reason}");
            return EXIT_FAILURE;
        }
    };

    let mut solver = MicrolpSolver::new();
    match solve_case(index, case, &mut solver) {
        Ok(report) => {
            match render_case(&report, format) {
                Ok(rendered) => println!("{rendered}"),
                Err(reason) => {
                    eprintln!("error: {reason}");
                    return EXIT_FAILURE;
                }
            }
            let options = EngineOptions::default();
            if report.violates(options.bound, options.tolerance) {
                eprintln!("COUNTEREXAMPLE: the conjectured bound is violated");
                return EXIT_BOUND_VIOLATED;
            }
            0
        }
        Err(err) => {
            eprintln!("error: {err}");
            EXIT_FAILURE
        }
    }
}

fn parse_output_format(raw: &str) -> Result<OutputFormat, String> {
    match raw {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => Err(format!("unknown output format: {other} (expected text|json)")),
    }
}

fn parse_pair_order(flag: &str, raw: &str) -> Result<PairOrder, String> {
    match raw {
        "le" => Ok(PairOrder::FirstAtMost),
        "ge" => Ok(PairOrder::FirstAtLeast),
        other => Err(format!("unknown {flag} ordering: {other} (expected le|ge)")),
    }
}

fn parse_regime(flag: &str, raw: &str) -> Result<Regime, String> {
    match raw {
        "m" | "max=m" => Ok(Regime::EdgeBudget),
        "rl13" | "max=RL13" => Ok(Regime::MajorPlusThird),
        "lr12" | "max=LR12" => Ok(Regime::MinorPlusHalf),
        other => Err(format!("unknown {flag} regime: {other} (expected m|rl13|lr12)")),
    }
}

fn resolve_case(
    index: Option<usize>,
    order12: &str,
    order23: &str,
    regime12: &str,
    regime23: &str,
) -> Result<(usize, Case), String> {
    if let Some(index) = index {
        let case = (1..=Case::COUNT)
            .contains(&index)
            .then(|| Case::enumerate().nth(index - 1))
            .flatten()
            .ok_or_else(|| format!("case index {index} out of range 1..={}", Case::COUNT))?;
        return Ok((index, case));
    }

    let case = Case {
        order12: parse_pair_order("--order12", order12)?,
        order23: parse_pair_order("--order23", order23)?,
        regime12: parse_regime("--regime12", regime12)?,
        regime23: parse_regime("--regime23", regime23)?,
    };
    let index = Case::enumerate()
        .position(|c| c == case)
        .ok_or_else(|| format!("case {case} is not part of the enumeration"))?
        + 1;
    Ok((index, case))
}

fn render_survey(report: &SurveyReport, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Text => Ok(report.to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(report)
            .map_err(|e| format!("failed to serialize report: {e}")),
    }
}

fn render_case(report: &CaseReport, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Text => Ok(report.to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(report)
            .map_err(|e| format!("failed to serialize report: {e}")),
    }
}

fn write_json_artifact(report: &SurveyReport, path: &Path) -> Result<(), String> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| format!("failed to serialize report: {e}"))?;
    std::fs::write(path, json).map_err(|e| format!("failed to write {}: {e}", path.display()))
}
