//! Satisfiability test of Aspvall, Plass and Tarjan: a 2-CNF formula is
//! unsatisfiable iff some variable shares a strongly connected component with
//! its negation.

use crate::{graph::ImplicationGraph, literal::Var, scc::Components, SolveError};

/// Returns the first variable whose polarities lie in the same component.
///
/// Each variable is inspected once, covering both of its vertices.
pub(crate) fn find_conflict(graph: &ImplicationGraph, components: &Components) -> Option<Var> {
    graph.vars().find(|&var| components[var.positive()] == components[var.negative()])
}

/// Decides whether the formula represented by `graph` is satisfiable.
///
/// # Errors
///
/// Propagates internal failures of the component analysis.
pub fn is_satisfiable(graph: &ImplicationGraph) -> Result<bool, SolveError> {
    let components = Components::compute(graph)?;
    Ok(find_conflict(graph, &components).is_none())
}
