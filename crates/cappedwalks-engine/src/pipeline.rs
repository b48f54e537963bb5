use thiserror::Error;
use tracing::info;

use cappedwalks_lp::backends::microlp_backend::MicrolpSolver;
use cappedwalks_lp::expr::Variable;
use cappedwalks_lp::solver::{LpOutcome, LpSolution, LpSolver};

use crate::builder::{build_case_model, CaseModel, CONJECTURED_BOUND, TOLERANCE};
use crate::cases::Case;
use crate::result::{round4, CaseOutcome, CaseReport, SurveyReport};

#[derive(Debug, Error)]
pub enum EngineError {
    /// The backend failed to produce a conclusive Optimal/Infeasible
    /// status; this always needs investigation.
    #[error("solver error: {0}")]
    Solver(String),
    /// A case's optimal objective exceeded the conjectured bound: the
    /// conjecture is falsified and the survey stops.
    #[error("conjectured bound exceeded:\n{0}")]
    BoundViolated(Box<CaseReport>),
}

/// Options for a certificate survey.
#[derive(Debug, Clone)]
pub struct EngineOptions {
    pub bound: f64,
    pub tolerance: f64,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            bound: CONJECTURED_BOUND,
            tolerance: TOLERANCE,
        }
    }
}

/// Build and solve one case, classifying the solver's outcome.
///
/// Infeasibility is a valid outcome (the case is vacuous); Unbounded and
/// Other statuses are hard errors.
pub fn solve_case<S: LpSolver>(
    index: usize,
    case: Case,
    solver: &mut S,
) -> Result<CaseReport, EngineError> {
    let built = build_case_model(case);
    let outcome = solver
        .solve(&built.model)
        .map_err(|e| EngineError::Solver(e.to_string()))?;
    let outcome = match outcome {
        LpOutcome::Optimal(solution) => extract_feasible(&built, &solution)?,
        LpOutcome::Infeasible => CaseOutcome::Vacuous,
        LpOutcome::Unbounded => {
            return Err(EngineError::Solver(format!(
                "case {index} ({case}): relaxation is unbounded"
            )))
        }
        LpOutcome::Other(reason) => {
            return Err(EngineError::Solver(format!("case {index} ({case}): {reason}")))
        }
    };
    Ok(CaseReport::new(index, case, outcome))
}

fn extract_feasible(built: &CaseModel, solution: &LpSolution) -> Result<CaseOutcome, EngineError> {
    let value = |name: &str| {
        solution
            .value(name)
            .ok_or_else(|| EngineError::Solver(format!("solution is missing variable {name}")))
    };
    let weights = [value("w1")?, value("w2")?, value("w3")?];
    let max_degree = value("dstar")?;
    let degrees = [value("d1")?, value("d2")?, value("d3")?];

    let mut by_handle = Vec::with_capacity(built.model.num_vars());
    for (name, _) in built.model.variables() {
        by_handle.push(value(name)?);
    }
    let value_of = |v: Variable| by_handle[v.idx()];
    let walk_counts = [
        round4(built.walk_count12.evaluate(value_of)),
        round4(built.walk_count23.evaluate(value_of)),
    ];

    Ok(CaseOutcome::Feasible {
        objective: round4(solution.objective()),
        weights: weights.map(round4),
        degrees: degrees.map(round4),
        max_degree: round4(max_degree),
        walk_counts,
    })
}

/// Explicit enumeration state: the running maximum and the per-case
/// reports. Kept as a value rather than shared state so independent case
/// solves could be dispatched concurrently and reduced.
#[derive(Debug)]
struct SurveyAccumulator {
    max_objective: f64,
    cases: Vec<CaseReport>,
}

impl SurveyAccumulator {
    fn new() -> Self {
        Self {
            // Vacuous cases contribute this floor, as does an all-vacuous
            // survey.
            max_objective: crate::builder::VACUOUS_OBJECTIVE,
            cases: Vec::new(),
        }
    }

    fn record(&mut self, report: CaseReport) {
        self.max_objective = self.max_objective.max(report.outcome.objective());
        self.cases.push(report);
    }
}

/// Run the full 36-case survey.
///
/// Stops at the first case whose optimal objective exceeds
/// `bound + tolerance`; the returned error carries that case's full report.
pub fn run_survey<S: LpSolver>(
    options: &EngineOptions,
    solver: &mut S,
) -> Result<SurveyReport, EngineError> {
    let mut acc = SurveyAccumulator::new();
    for (i, case) in Case::enumerate().enumerate() {
        let index = i + 1;
        info!("case {index}/{}: {case}", Case::COUNT);
        let report = solve_case(index, case, solver)?;
        match &report.outcome {
            CaseOutcome::Feasible { objective, .. } => info!("  feasible, objective {objective}"),
            CaseOutcome::Vacuous => info!("  infeasible (vacuous case)"),
        }
        if report.violates(options.bound, options.tolerance) {
            return Err(EngineError::BoundViolated(Box::new(report)));
        }
        acc.record(report);
    }
    Ok(SurveyReport::new(
        options.bound,
        options.tolerance,
        acc.max_objective,
        acc.cases,
    ))
}

/// Run the survey with the contract constants and the in-process backend.
pub fn run_survey_default() -> Result<SurveyReport, EngineError> {
    run_survey(&EngineOptions::default(), &mut MicrolpSolver::new())
}
