use std::convert::Infallible;

use indexmap::IndexMap;
use microlp::{ComparisonOp, OptimizationDirection, Problem};

use crate::expr::CmpOp;
use crate::model::{Direction, LpModel};
use crate::solver::{LpOutcome, LpSolution, LpSolver};

/// In-process backend built on the pure-Rust `microlp` simplex solver.
///
/// Translation into microlp's vocabulary cannot fail on a well-formed
/// [`LpModel`], and every microlp solve error is itself a meaningful status
/// (infeasible / unbounded / numeric failure), so all of them map onto
/// [`LpOutcome`] and the adapter error is [`Infallible`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MicrolpSolver;

impl MicrolpSolver {
    pub fn new() -> Self {
        Self
    }
}

impl LpSolver for MicrolpSolver {
    type Error = Infallible;

    fn solve(&mut self, model: &LpModel) -> Result<LpOutcome, Self::Error> {
        let direction = match model.direction() {
            Direction::Minimize => OptimizationDirection::Minimize,
            Direction::Maximize => OptimizationDirection::Maximize,
        };
        let mut problem = Problem::new(direction);

        let mut obj_coeffs = vec![0.0; model.num_vars()];
        for (var, coeff) in model.objective().terms() {
            obj_coeffs[var.idx()] = coeff;
        }
        let handles: Vec<microlp::Variable> = model
            .variables()
            .enumerate()
            .map(|(i, (_, bounds))| problem.add_var(obj_coeffs[i], (bounds.lo, bounds.hi)))
            .collect();

        for constraint in model.constraints() {
            let mut lhs = microlp::LinearExpr::empty();
            for (var, coeff) in constraint.lhs.terms() {
                lhs.add(handles[var.idx()], coeff);
            }
            let op = match constraint.op {
                CmpOp::Le => ComparisonOp::Le,
                CmpOp::Ge => ComparisonOp::Ge,
                CmpOp::Eq => ComparisonOp::Eq,
            };
            problem.add_constraint(lhs, op, constraint.rhs);
        }

        let outcome = match problem.solve() {
            Ok(solution) => {
                let mut values = IndexMap::new();
                for (i, (name, _)) in model.variables().enumerate() {
                    values.insert(name.to_string(), solution[handles[i]]);
                }
                let objective = solution.objective() + model.objective().constant_part();
                LpOutcome::Optimal(LpSolution::new(objective, values))
            }
            Err(microlp::Error::Infeasible) => LpOutcome::Infeasible,
            Err(microlp::Error::Unbounded) => LpOutcome::Unbounded,
            Err(other) => LpOutcome::Other(other.to_string()),
        };
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::LinExpr;

    #[test]
    fn solves_a_small_maximization() {
        // Maximize x + 2y with x >= 0, 0 <= y <= 3,
        // subject to x + y <= 4 and 2x + y >= 2.
        let mut model = LpModel::new(Direction::Maximize);
        let x = model.add_var("x", 0.0, f64::INFINITY);
        let y = model.add_var("y", 0.0, 3.0);
        model.constrain((LinExpr::from(x) + y).le(4.0));
        model.constrain((LinExpr::from(x) * 2.0 + y).ge(2.0));
        model.set_objective(LinExpr::from(x) + LinExpr::from(y) * 2.0);

        let mut solver = MicrolpSolver::new();
        let outcome = solver.solve(&model).expect("translation cannot fail");
        match outcome {
            LpOutcome::Optimal(solution) => {
                assert!((solution.objective() - 7.0).abs() < 1e-9);
                assert!((solution.value("x").unwrap() - 1.0).abs() < 1e-9);
                assert!((solution.value("y").unwrap() - 3.0).abs() < 1e-9);
            }
            other => panic!("expected optimal, got {}", other.status()),
        }
    }

    #[test]
    fn objective_constants_survive_the_round_trip() {
        let mut model = LpModel::new(Direction::Maximize);
        let x = model.add_var("x", 0.0, 1.0);
        model.set_objective(LinExpr::from(x) + 1.0);

        let mut solver = MicrolpSolver::new();
        match solver.solve(&model).expect("translation cannot fail") {
            LpOutcome::Optimal(solution) => {
                assert!((solution.objective() - 2.0).abs() < 1e-9);
            }
            other => panic!("expected optimal, got {}", other.status()),
        }
    }

    #[test]
    fn contradictory_constraints_report_infeasible() {
        let mut model = LpModel::new(Direction::Maximize);
        let x = model.add_var("x", 0.0, 1.0);
        model.constrain(LinExpr::from(x).ge(2.0));
        model.set_objective(LinExpr::from(x));

        let mut solver = MicrolpSolver::new();
        let outcome = solver.solve(&model).expect("translation cannot fail");
        assert!(matches!(outcome, LpOutcome::Infeasible));
    }

    #[test]
    fn open_objective_reports_unbounded() {
        let mut model = LpModel::new(Direction::Maximize);
        let x = model.add_var("x", 0.0, f64::INFINITY);
        model.constrain(LinExpr::from(x).ge(1.0));
        model.set_objective(LinExpr::from(x));

        let mut solver = MicrolpSolver::new();
        let outcome = solver.solve(&model).expect("translation cannot fail");
        assert!(matches!(outcome, LpOutcome::Unbounded));
    }
}
