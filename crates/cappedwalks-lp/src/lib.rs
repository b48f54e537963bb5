#![doc = include_str!("../README.md")]

//! Linear-program modeling and solving.
//!
//! This crate provides a small declarative layer over linear programs:
//! [`expr::LinExpr`] for linear expressions, [`model::LpModel`] for a full
//! problem (bounded variables, constraints, objective), and the
//! [`solver::LpSolver`] trait with a pluggable backend under [`backends`].

pub mod backends;
pub mod expr;
pub mod model;
pub mod solver;
