use indexmap::IndexMap;

use crate::expr::{Constraint, LinExpr, Variable};

/// Whether the objective is minimized or maximized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Minimize,
    Maximize,
}

/// Inclusive lower/upper bounds of a decision variable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub lo: f64,
    pub hi: f64,
}

/// A declarative linear program: named bounded variables, linear
/// constraints, and a linear objective.
///
/// The model never touches backend types; hand it to an implementation of
/// [`crate::solver::LpSolver`] to solve it.
#[derive(Debug, Clone)]
pub struct LpModel {
    direction: Direction,
    vars: IndexMap<String, Bounds>,
    constraints: Vec<Constraint>,
    objective: LinExpr,
}

impl LpModel {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            vars: IndexMap::new(),
            constraints: Vec::new(),
            objective: LinExpr::zero(),
        }
    }

    /// Declare a variable with inclusive bounds `[lo, hi]`.
    ///
    /// Panics if `name` is already declared; variable names identify
    /// solution values, so a duplicate is a programming error.
    pub fn add_var(&mut self, name: impl Into<String>, lo: f64, hi: f64) -> Variable {
        let name = name.into();
        let (index, previous) = self.vars.insert_full(name.clone(), Bounds { lo, hi });
        assert!(
            previous.is_none(),
            "duplicate variable declaration: {name}"
        );
        Variable(index)
    }

    /// Add a constraint to the model.
    pub fn constrain(&mut self, constraint: Constraint) {
        self.constraints.push(constraint);
    }

    /// Set the objective expression.
    pub fn set_objective(&mut self, objective: LinExpr) {
        self.objective = objective;
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterate over declared variables in declaration order.
    pub fn variables(&self) -> impl Iterator<Item = (&str, Bounds)> + '_ {
        self.vars.iter().map(|(name, bounds)| (name.as_str(), *bounds))
    }

    pub fn num_vars(&self) -> usize {
        self.vars.len()
    }

    /// Name of a variable handle issued by this model.
    pub fn var_name(&self, var: Variable) -> &str {
        self.vars
            .get_index(var.idx())
            .map(|(name, _)| name.as_str())
            .expect("variable handle from a different model")
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn objective(&self) -> &LinExpr {
        &self.objective
    }
}
