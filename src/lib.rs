#![deny(unsafe_code)]
#![deny(unused_must_use)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_panics_doc, clippy::module_name_repetitions)]
//#![warn(clippy::cargo)]

//! Satisfiability of 2-CNF formulas via strongly connected components of the
//! implication graph (Aspvall, Plass & Tarjan).

use std::{
    fmt::Display,
    process::{ExitCode, Termination},
};

#[macro_use]
pub mod formula;
mod check;
mod clause;
pub mod cli;
mod datastructure;
pub mod dimacs;
mod error;
mod graph;
mod literal;
mod scc;
mod solver;

// Re-export
pub use check::is_satisfiable;
pub use clause::{Clause, ClauseId, ClauseWidthError};
pub use error::SolveError;
pub use formula::Formula;
pub use graph::{GraphBuilder, ImplicationGraph};
pub use literal::{origins::ClauseOrigins, Literal, LiteralError};
pub use scc::{ComponentId, Components};
pub use solver::{solve, Solver, SolverConfig, Statistics};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SolverResult {
    Satisfiable = 10,
    Unsatisfiable = 20,
}

impl SolverResult {
    #[must_use]
    pub fn is_satisfiable(self) -> bool {
        matches!(self, SolverResult::Satisfiable)
    }
}

impl From<bool> for SolverResult {
    fn from(satisfiable: bool) -> Self {
        if satisfiable {
            SolverResult::Satisfiable
        } else {
            SolverResult::Unsatisfiable
        }
    }
}

impl Display for SolverResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverResult::Satisfiable => write!(f, "SATISFIABLE"),
            SolverResult::Unsatisfiable => write!(f, "UNSATISFIABLE"),
        }
    }
}

impl Termination for SolverResult {
    fn report(self) -> ExitCode {
        ExitCode::from(self as u8)
    }
}
