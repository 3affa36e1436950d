//! A straight-forward owned representation of a 2-CNF formula.

use crate::{
    clause::{Clause, ClauseId},
    dimacs::{self, ParseError},
    literal::{origins::ClauseOrigins, Literal},
    SolveError,
};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Formula {
    clauses: Vec<Clause>,
}

impl Formula {
    /// Creates a formula from DIMACS-style clauses, e.g., `&[&[1, -2]]`.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::MalformedClause`] if a clause does not have
    /// exactly two literals and [`SolveError::MissingLiteral`] if it contains
    /// `0`, which DIMACS reserves as clause terminator.
    pub fn new(clauses: &[&[i32]]) -> Result<Self, SolveError> {
        let mut formula = Self::default();
        for (index, &lits) in clauses.iter().enumerate() {
            if lits.contains(&0) {
                return Err(SolveError::MissingLiteral { index });
            }
            let lits: Vec<_> = lits.iter().map(|&lit| Literal::from_dimacs(lit)).collect();
            formula.add_clause(&lits)?;
        }
        Ok(formula)
    }

    /// Adds a clause and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::MalformedClause`] if `lits` does not have exactly
    /// two literals and [`SolveError::MissingLiteral`] if one of them has an
    /// empty name.
    pub fn add_clause(&mut self, lits: &[Literal]) -> Result<ClauseId, SolveError> {
        let index = self.clauses.len();
        let clause = Clause::try_from(lits)
            .map_err(|err| SolveError::MalformedClause { index, found: err.found })?;
        if clause.iter().any(|lit| lit.name().is_empty()) {
            return Err(SolveError::MissingLiteral { index });
        }
        self.clauses.push(clause);
        Ok(ClauseId::from_index(index))
    }

    /// Appends an already validated clause.
    pub(crate) fn push(&mut self, clause: Clause) {
        self.clauses.push(clause);
    }

    #[must_use]
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    #[must_use]
    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    /// Number of distinct variable names.
    #[must_use]
    pub fn num_variables(&self) -> usize {
        self.clauses.iter().flatten().map(Literal::name).collect::<HashSet<_>>().len()
    }

    /// Records for every literal the clauses it occurs in.
    #[must_use]
    pub fn origins(&self) -> ClauseOrigins {
        let mut origins = ClauseOrigins::default();
        for (index, clause) in self.clauses.iter().enumerate() {
            for lit in clause {
                origins.attach(lit, ClauseId::from_index(index), false);
            }
        }
        origins
    }

    /// The largest variable number if all names are DIMACS variables.
    fn max_dimacs_var(&self) -> Option<u32> {
        self.clauses
            .iter()
            .flatten()
            .map(|lit| lit.name().parse::<u32>().ok())
            .try_fold(0, |max, var| var.map(|var| max.max(var)))
    }
}

impl std::str::FromStr for Formula {
    type Err = ParseError;

    /// Parses a formula in DIMACS format, see [`dimacs::parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        dimacs::parse(s)
    }
}

impl<'a> IntoIterator for &'a Formula {
    type Item = &'a Clause;
    type IntoIter = std::slice::Iter<'a, Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.iter()
    }
}

impl std::fmt::Display for Formula {
    /// Writes the formula in DIMACS format. Only meaningful if all variable
    /// names are positive integers; otherwise the header counts names.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let num_variables = match self.max_dimacs_var() {
            Some(max) => max as usize,
            None => self.num_variables(),
        };
        writeln!(f, "p cnf {num_variables} {}", self.num_clauses())?;
        for clause in &self.clauses {
            for lit in clause {
                write!(f, "{lit} ")?;
            }
            writeln!(f, "0")?;
        }
        Ok(())
    }
}

/// Macro that creates a [`Formula`] from a DIMACS-like representation.
/// The main differences are:
/// * No support for comments
/// * No header line
/// * Clauses are seperated by `;`, whereas DIMACS uses `0`.
///
/// # Example
/// ```ignore
/// let formula = cnf_formula![
///     1 2;
///     -1 2;
/// ];
/// ```
#[cfg(test)]
macro_rules! cnf_formula {
    ($( $( $x:literal )* ; )*) => {{
        let matrix: Vec<&[i32]> = vec![ $( &[ $( $x ),* ][..] ),* ];
        crate::formula::Formula::new(&matrix).expect("clauses have exactly two literals")
    }};
}
