//! End-to-end certificate checks over the real microlp backend.

use cappedwalks_engine::builder::{
    build_case_model_with_degree_cap, CONJECTURED_BOUND, MAX_DEGREE, TOLERANCE,
};
use cappedwalks_engine::cases::{Case, PairOrder, Regime};
use cappedwalks_engine::pipeline::{run_survey_default, solve_case};
use cappedwalks_engine::result::CaseOutcome;
use cappedwalks_lp::backends::microlp_backend::MicrolpSolver;
use cappedwalks_lp::solver::{LpOutcome, LpSolver};

fn case_index(case: Case) -> usize {
    Case::enumerate()
        .position(|c| c == case)
        .expect("case is part of the enumeration")
        + 1
}

#[test]
fn the_ordered_double_edge_budget_case_stays_within_the_bound() {
    let case = Case {
        order12: PairOrder::FirstAtLeast,
        order23: PairOrder::FirstAtLeast,
        regime12: Regime::EdgeBudget,
        regime23: Regime::EdgeBudget,
    };
    let mut solver = MicrolpSolver::new();
    let report = solve_case(case_index(case), case, &mut solver).expect("solve should succeed");

    match report.outcome {
        CaseOutcome::Feasible {
            objective,
            max_degree,
            walk_counts,
            ..
        } => {
            assert!(objective <= CONJECTURED_BOUND + TOLERANCE);
            assert!(max_degree <= MAX_DEGREE + 2.0 * TOLERANCE);
            // The closed-form walk count never solves negative in a
            // realizable edge-budget case.
            assert!(walk_counts.iter().all(|count| *count >= -1e-9));
        }
        CaseOutcome::Vacuous => panic!("the ordered double edge-budget case must be realizable"),
    }
}

#[test]
fn the_full_survey_certifies_the_conjectured_bound() {
    let report = run_survey_default().expect("no case may exceed the bound");

    assert_eq!(report.cases.len(), Case::COUNT);
    assert!(report.certified());
    assert!(report.max_objective <= CONJECTURED_BOUND + TOLERANCE);
    // Every case's relaxation contains the all-zero configuration, so none
    // is vacuous under the contract constants.
    assert_eq!(report.feasible_cases, Case::COUNT);
    assert_eq!(report.vacuous_cases, 0);

    for case in &report.cases {
        assert!(!case.violates(CONJECTURED_BOUND, TOLERANCE));
    }
}

#[test]
fn resolving_a_case_is_idempotent() {
    let case = Case::enumerate().nth(7).expect("36 cases exist");

    let first = solve_case(8, case, &mut MicrolpSolver::new()).expect("solve should succeed");
    let second = solve_case(8, case, &mut MicrolpSolver::new()).expect("solve should succeed");

    assert_eq!(
        first.outcome.verdict_class(),
        second.outcome.verdict_class()
    );
    assert!((first.outcome.objective() - second.outcome.objective()).abs() <= TOLERANCE);
}

#[test]
fn tightening_the_degree_cap_never_raises_an_optimum() {
    let mut solver = MicrolpSolver::new();
    for case in Case::enumerate() {
        let baseline = build_case_model_with_degree_cap(case, MAX_DEGREE);
        let tightened = build_case_model_with_degree_cap(case, MAX_DEGREE / 2.0);

        let LpOutcome::Optimal(base) = solver.solve(&baseline.model).expect("solve")
        else {
            panic!("baseline relaxation of {case} must be optimal");
        };
        let LpOutcome::Optimal(tight) = solver.solve(&tightened.model).expect("solve")
        else {
            panic!("tightened relaxation of {case} must be optimal");
        };
        assert!(
            tight.objective() <= base.objective() + 1e-9,
            "tightening the degree cap raised {case}: {} > {}",
            tight.objective(),
            base.objective()
        );
    }
}

#[test]
fn a_contradictory_degree_cap_is_reported_infeasible() {
    let case = Case::enumerate().next().expect("36 cases exist");
    let built = build_case_model_with_degree_cap(case, -1.0);
    let mut solver = MicrolpSolver::new();
    let outcome = solver.solve(&built.model).expect("translation cannot fail");
    assert!(matches!(outcome, LpOutcome::Infeasible));
}

#[test]
fn survey_reports_serialize_with_their_schema() {
    let report = run_survey_default().expect("no case may exceed the bound");
    let json = serde_json::to_value(&report).expect("report serializes");

    assert_eq!(json["schema_version"], 1);
    assert_eq!(json["cases"].as_array().map(Vec::len), Some(Case::COUNT));
    assert_eq!(json["cases"][0]["index"], 1);
    assert_eq!(json["cases"][0]["case"]["regime12"], "max=m");
    assert_eq!(json["cases"][0]["outcome"]["status"], "feasible");
    assert_eq!(json["fingerprint"].as_str().map(str::len), Some(64));
}
