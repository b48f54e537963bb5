#![doc = include_str!("../README.md")]

//! Capped 3-walks certificate engine.
//!
//! The engine splits the space of weighted tripartite configurations into
//! 36 exhaustive ordering/regime cases, builds one linear relaxation per
//! case, and solves each through the LP adapter. A case is either feasible
//! with an optimal objective at or below the conjectured bound, or vacuous
//! (its assumptions cannot be realized). An optimal objective above the
//! bound is a counterexample and aborts the survey.

pub mod builder;
pub mod cases;
pub mod pipeline;
pub mod result;
