use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum SolveError {
    #[error("Clause {index} has {found} literals, but 2-CNF clauses need exactly 2")]
    #[diagnostic(help("split longer clauses or duplicate the literal of a unit clause"))]
    MalformedClause { index: usize, found: usize },

    #[error("Clause {index} contains a literal without a variable name")]
    MissingLiteral { index: usize },

    #[error("Formula reached {found} variables, exceeding the limit of {limit}")]
    ResourceLimit { found: usize, limit: usize },

    #[error("Internal invariant violated: {0}")]
    Invariant(&'static str),
}
