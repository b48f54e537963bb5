use indexmap::IndexMap;

use crate::model::LpModel;

/// Terminal status of one LP solve.
#[derive(Debug, Clone)]
pub enum LpOutcome {
    /// An optimal assignment was found.
    Optimal(LpSolution),
    /// The constraints cannot be satisfied simultaneously.
    Infeasible,
    /// The objective is unbounded in the optimization direction.
    Unbounded,
    /// The backend stopped without a conclusive status.
    Other(String),
}

impl LpOutcome {
    /// Stable status label for logs and reports.
    pub fn status(&self) -> &'static str {
        match self {
            LpOutcome::Optimal(_) => "optimal",
            LpOutcome::Infeasible => "infeasible",
            LpOutcome::Unbounded => "unbounded",
            LpOutcome::Other(_) => "other",
        }
    }
}

/// An optimal assignment extracted from a solved model.
///
/// Values are keyed by variable name in declaration order and are always
/// known numeric constants once the solve has finished.
#[derive(Debug, Clone)]
pub struct LpSolution {
    objective: f64,
    values: IndexMap<String, f64>,
}

impl LpSolution {
    pub fn new(objective: f64, values: impl IntoIterator<Item = (String, f64)>) -> Self {
        Self {
            objective,
            values: values.into_iter().collect(),
        }
    }

    /// Optimal value of the objective function.
    pub fn objective(&self) -> f64 {
        self.objective
    }

    /// Value of a variable at the optimum, by declaration name.
    pub fn value(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Iterate over `(name, value)` pairs in declaration order.
    pub fn values(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.values.iter().map(|(name, v)| (name.as_str(), *v))
    }
}

/// Abstract LP solver interface.
///
/// Implementations translate the declarative [`LpModel`] into their own
/// vocabulary and report one of the [`LpOutcome`] statuses. Infeasibility is
/// an outcome, not an error; `Error` is reserved for backend failures that
/// prevent a status from being produced at all.
pub trait LpSolver {
    type Error: std::error::Error;

    fn solve(&mut self, model: &LpModel) -> Result<LpOutcome, Self::Error>;
}
