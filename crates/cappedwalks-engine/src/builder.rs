use cappedwalks_lp::expr::{Constraint, LinExpr, Variable};
use cappedwalks_lp::model::{Direction, LpModel};

use crate::cases::{Case, PairOrder, Regime};

/// Numeric tolerance for bound comparisons and the relaxed degree cap.
pub const TOLERANCE: f64 = 1e-5;

/// Cap on the maximum normalized degree.
pub const MAX_DEGREE: f64 = 0.4;

/// Conjectured upper bound on the capped 3-walks objective.
pub const CONJECTURED_BOUND: f64 = 1.6;

/// Objective recorded for vacuous (infeasible) cases; strictly below the
/// conjectured bound.
pub const VACUOUS_OBJECTIVE: f64 = 1.0;

/// The linear relaxation of one case, plus the walk-count expressions
/// needed to report solved values.
#[derive(Debug, Clone)]
pub struct CaseModel {
    pub model: LpModel,
    pub walk_count12: LinExpr,
    pub walk_count23: LinExpr,
}

/// The ordering constraint selecting which of two part weights is larger.
pub fn ordering_constraint(left: Variable, right: Variable, order: PairOrder) -> Constraint {
    match order {
        PairOrder::FirstAtMost => LinExpr::from(left).le(right),
        PairOrder::FirstAtLeast => LinExpr::from(left).ge(right),
    }
}

/// Constraint rows pinning a pair into its regime, and the pair's walk
/// count under that regime.
///
/// `e` is the pair's edge budget and `minor <= major` its ordered weight
/// expressions. The two derived expressions are `major + minor/3` and
/// `minor + major/2`; the coefficients come from the walk-count weighting
/// and are not tunable. Only the edge-budget regime has a closed-form
/// count, `6e - 3(minor + major)`; it must never solve negative in a
/// feasible case.
pub fn regime_rows(
    e: &LinExpr,
    minor: &LinExpr,
    major: &LinExpr,
    regime: Regime,
) -> (Vec<Constraint>, LinExpr) {
    let major_plus_third = major.clone() + minor.clone() * (1.0 / 3.0);
    let minor_plus_half = minor.clone() + major.clone() * 0.5;

    match regime {
        Regime::EdgeBudget => {
            let rows = vec![
                e.clone().ge(major_plus_third),
                e.clone().ge(minor_plus_half),
            ];
            let count = e.clone() * 6.0 - (minor.clone() + major.clone()) * 3.0;
            (rows, count)
        }
        Regime::MajorPlusThird => {
            let rows = vec![
                e.clone().le(major_plus_third.clone()),
                major_plus_third.le(minor_plus_half),
            ];
            (rows, LinExpr::zero())
        }
        Regime::MinorPlusHalf => {
            let rows = vec![
                e.clone().le(minor_plus_half.clone()),
                major_plus_third.ge(minor_plus_half),
            ];
            (rows, LinExpr::zero())
        }
    }
}

/// Build the linear relaxation of one case.
///
/// The feasible region is exactly the set of configurations consistent
/// with the case's ordering and regime assumptions.
pub fn build_case_model(case: Case) -> CaseModel {
    build_case_model_with_degree_cap(case, MAX_DEGREE)
}

/// Build the case model with an explicit cap on the maximum degree.
pub fn build_case_model_with_degree_cap(case: Case, degree_cap: f64) -> CaseModel {
    let mut model = LpModel::new(Direction::Maximize);

    // Part weights and degrees, all normalized into [0, 1].
    let w1 = model.add_var("w1", 0.0, 1.0);
    let w2 = model.add_var("w2", 0.0, 1.0);
    let w3 = model.add_var("w3", 0.0, 1.0);
    let dstar = model.add_var("dstar", 0.0, 1.0);
    let d1 = model.add_var("d1", 0.0, 1.0);
    let d2 = model.add_var("d2", 0.0, 1.0);
    let d3 = model.add_var("d3", 0.0, 1.0);

    // Capped 3-walks objective.
    let objective = LinExpr::from(w1) + d1 + d2 + d3;
    model.set_objective(objective.clone());

    // dstar dominates every degree and respects the degree cap.
    model.constrain(LinExpr::from(dstar).le(degree_cap + TOLERANCE));
    for d in [d1, d2, d3] {
        model.constrain(LinExpr::from(d).le(dstar));
    }
    // Degree/weight complementarity per part.
    model.constrain(LinExpr::from(dstar).le(LinExpr::constant(1.0) - w1));
    model.constrain(LinExpr::from(d2).le(LinExpr::constant(1.0) - w2));
    model.constrain(LinExpr::from(d3).le(LinExpr::constant(1.0) - w3));

    // Ordering assumptions select each pair's minor/major weight.
    model.constrain(ordering_constraint(w1, w2, case.order12));
    model.constrain(ordering_constraint(w2, w3, case.order23));
    let (minor12, major12) = case.order12.minor_major(w1, w2);
    let (minor23, major23) = case.order23.minor_major(w2, w3);

    // Regime rows and the walk count of each adjacent pair. The pair's
    // edge budget is its own part's degree plus weight.
    let e12 = LinExpr::from(d1) + w1;
    let e23 = LinExpr::from(d2) + w2;
    let (rows12, walk_count12) = regime_rows(
        &e12,
        &LinExpr::from(minor12),
        &LinExpr::from(major12),
        case.regime12,
    );
    let (rows23, walk_count23) = regime_rows(
        &e23,
        &LinExpr::from(minor23),
        &LinExpr::from(major23),
        case.regime23,
    );
    for row in rows12.into_iter().chain(rows23) {
        model.constrain(row);
    }

    // Walk counts cannot exceed the capped-walks objective.
    model.constrain(objective.clone().ge(walk_count12.clone()));
    model.constrain(objective.ge(walk_count23.clone()));

    CaseModel {
        model,
        walk_count12,
        walk_count23,
    }
}
