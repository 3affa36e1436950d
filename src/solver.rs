//! Entry points that run the whole pipeline: graph construction, component
//! analysis and the satisfiability check.

use crate::{
    check::find_conflict,
    graph::{GraphBuilder, ImplicationGraph},
    literal::Literal,
    scc::Components,
    SolveError, SolverResult,
};
use std::time::{Duration, Instant};
use tracing::{debug, info, trace};

#[cfg(test)]
mod test;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverConfig {
    /// Upper bound on the number of distinct variables.
    pub max_variables: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct Statistics {
    pub clauses: usize,
    pub variables: usize,
    pub edges: usize,
    pub components: usize,
    pub build_time: Duration,
    pub scc_time: Duration,
    pub solve_time: Duration,
}

/// Decides satisfiability of 2-CNF formulas. Every call to [`Solver::solve`]
/// works on a freshly built graph; only the statistics of the last call are
/// kept.
#[derive(Debug, Default)]
pub struct Solver {
    config: SolverConfig,
    stats: Statistics,
}

impl Solver {
    #[must_use]
    pub fn new(config: SolverConfig) -> Self {
        Self { config, stats: Statistics::default() }
    }

    /// Statistics of the most recent call to [`Solver::solve`].
    #[must_use]
    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    /// Decides whether the conjunction of `clauses` is satisfiable.
    ///
    /// # Errors
    ///
    /// Returns an error if a clause does not consist of exactly two named
    /// literals or if the formula exceeds the configured variable limit.
    pub fn solve<I, C>(&mut self, clauses: I) -> Result<SolverResult, SolveError>
    where
        I: IntoIterator<Item = C>,
        C: AsRef<[Literal]>,
    {
        self.stats = Statistics::default();
        let instant = Instant::now();
        let result = self.solve_impl(clauses);
        self.stats.solve_time = instant.elapsed();
        info!("\n{:#?}", self.stats);
        result
    }

    fn solve_impl<I, C>(&mut self, clauses: I) -> Result<SolverResult, SolveError>
    where
        I: IntoIterator<Item = C>,
        C: AsRef<[Literal]>,
    {
        let mut builder = GraphBuilder::default();
        if let Some(limit) = self.config.max_variables {
            builder = builder.max_variables(limit);
        }

        let instant = Instant::now();
        let mut num_clauses = 0;
        let graph = builder.build(clauses.into_iter().inspect(|_| num_clauses += 1))?;
        self.stats.build_time = instant.elapsed();
        self.stats.clauses = num_clauses;
        self.stats.variables = graph.num_variables();
        self.stats.edges = graph.num_edges();
        trace!("implication graph:\n{graph}");

        let instant = Instant::now();
        let components = Components::compute(&graph)?;
        self.stats.scc_time = instant.elapsed();
        self.stats.components = components.count();

        Ok(Self::verdict(&graph, &components))
    }

    fn verdict(graph: &ImplicationGraph, components: &Components) -> SolverResult {
        match find_conflict(graph, components) {
            Some(var) => {
                let lit = var.positive();
                debug!(
                    "{} and {} share component {:?}",
                    graph.literal(lit),
                    graph.literal(!lit),
                    components[lit]
                );
                SolverResult::Unsatisfiable
            }
            None => SolverResult::Satisfiable,
        }
    }
}

/// Decides whether the conjunction of `clauses` is satisfiable.
///
/// ```
/// use twosat::{solve, Literal};
///
/// let a = Literal::new("a");
/// let b = Literal::new("b");
/// assert_eq!(solve([[a.clone(), b.clone()], [!a, b]]), Ok(true));
/// ```
///
/// # Errors
///
/// See [`Solver::solve`].
pub fn solve<I, C>(clauses: I) -> Result<bool, SolveError>
where
    I: IntoIterator<Item = C>,
    C: AsRef<[Literal]>,
{
    Solver::default().solve(clauses).map(SolverResult::is_satisfiable)
}
