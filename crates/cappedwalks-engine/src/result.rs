use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt;

use crate::builder::{MAX_DEGREE, VACUOUS_OBJECTIVE};
use crate::cases::Case;

/// Schema version for machine-readable survey reports.
pub const REPORT_SCHEMA_VERSION: u32 = 1;

const REPORT_HASH_DOMAIN_TAG: &str = "cappedwalks-report-v1\n";

/// Round a solved value to the 4-decimal reporting precision.
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Outcome of one case solve.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CaseOutcome {
    /// The case is realizable; the solver found its extremal example.
    Feasible {
        objective: f64,
        weights: [f64; 3],
        degrees: [f64; 3],
        max_degree: f64,
        walk_counts: [f64; 2],
    },
    /// The case's assumptions cannot be realized simultaneously, so the
    /// bound holds in it vacuously.
    Vacuous,
}

impl CaseOutcome {
    /// Machine-readable verdict class for reproducibility checks.
    pub fn verdict_class(&self) -> &'static str {
        match self {
            CaseOutcome::Feasible { .. } => "feasible",
            CaseOutcome::Vacuous => "vacuous",
        }
    }

    /// Objective recorded for the survey maximum; vacuous cases contribute
    /// the sentinel value.
    pub fn objective(&self) -> f64 {
        match self {
            CaseOutcome::Feasible { objective, .. } => *objective,
            CaseOutcome::Vacuous => VACUOUS_OBJECTIVE,
        }
    }
}

/// Solved result of one case of the exhaustive split.
#[derive(Debug, Clone, Serialize)]
pub struct CaseReport {
    /// 1-based position in the fixed enumeration order.
    pub index: usize,
    pub case: Case,
    pub outcome: CaseOutcome,
}

impl CaseReport {
    pub fn new(index: usize, case: Case, outcome: CaseOutcome) -> Self {
        Self {
            index,
            case,
            outcome,
        }
    }

    /// True if this case's optimal objective exceeds `bound + tolerance`.
    pub fn violates(&self, bound: f64, tolerance: f64) -> bool {
        matches!(self.outcome, CaseOutcome::Feasible { .. })
            && self.outcome.objective() > bound + tolerance
    }
}

impl fmt::Display for CaseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "case {}/{}: {}", self.index, Case::COUNT, self.case)?;
        match &self.outcome {
            CaseOutcome::Feasible {
                objective,
                weights,
                degrees,
                max_degree,
                walk_counts,
            } => {
                writeln!(f, "  extremal example:")?;
                writeln!(f, "    part sizes:  {weights:?}")?;
                writeln!(f, "    degrees:     {degrees:?}")?;
                writeln!(f, "    max degree:  {max_degree}")?;
                writeln!(f, "    walk counts: {walk_counts:?}")?;
                write!(f, "    objective:   {objective}")
            }
            CaseOutcome::Vacuous => write!(f, "  infeasible (vacuous case)"),
        }
    }
}

/// Result of the full certificate survey.
#[derive(Debug, Clone, Serialize)]
pub struct SurveyReport {
    pub schema_version: u32,
    pub engine_version: String,
    pub bound: f64,
    pub tolerance: f64,
    /// Maximum objective achieved across all cases (vacuous cases
    /// contribute the sentinel).
    pub max_objective: f64,
    pub feasible_cases: usize,
    pub vacuous_cases: usize,
    pub cases: Vec<CaseReport>,
    /// Fingerprint over engine version and model constants, for comparing
    /// reports across runs and machines.
    pub fingerprint: String,
}

impl SurveyReport {
    pub fn new(bound: f64, tolerance: f64, max_objective: f64, cases: Vec<CaseReport>) -> Self {
        let engine_version = env!("CARGO_PKG_VERSION").to_string();
        let feasible_cases = cases
            .iter()
            .filter(|c| matches!(c.outcome, CaseOutcome::Feasible { .. }))
            .count();
        let vacuous_cases = cases.len() - feasible_cases;
        let fingerprint = report_fingerprint(&engine_version, bound, tolerance, cases.len());
        Self {
            schema_version: REPORT_SCHEMA_VERSION,
            engine_version,
            bound,
            tolerance,
            max_objective,
            feasible_cases,
            vacuous_cases,
            cases,
            fingerprint,
        }
    }

    /// True if no case exceeded the conjectured bound.
    pub fn certified(&self) -> bool {
        self.max_objective <= self.bound + self.tolerance
    }
}

impl fmt::Display for SurveyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for case in &self.cases {
            writeln!(f, "{case}")?;
        }
        if self.certified() {
            writeln!(f, "RESULT: CERTIFIED")?;
        } else {
            writeln!(f, "RESULT: BOUND EXCEEDED")?;
        }
        writeln!(
            f,
            "{} feasible cases, {} vacuous cases",
            self.feasible_cases, self.vacuous_cases
        )?;
        write!(
            f,
            "maximum objective across all cases: {}",
            self.max_objective
        )
    }
}

/// Deterministic lowercase SHA-256 fingerprint of a survey's inputs.
fn report_fingerprint(engine_version: &str, bound: f64, tolerance: f64, case_count: usize) -> String {
    let mut hasher = Sha256::new();
    hasher.update(REPORT_HASH_DOMAIN_TAG.as_bytes());
    hasher.update(engine_version.as_bytes());
    hasher.update(b"\n");
    hasher.update(bound.to_string().as_bytes());
    hasher.update(b"\n");
    hasher.update(tolerance.to_string().as_bytes());
    hasher.update(b"\n");
    hasher.update(MAX_DEGREE.to_string().as_bytes());
    hasher.update(b"\n");
    hasher.update(case_count.to_string().as_bytes());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(digest.len() * 2);
    for byte in digest {
        out.push_str(&format!("{byte:02x}"));
    }
    out
}
