//! Implication graph of a 2-CNF formula.
//!
//! A clause `(a | b)` contributes the implications `-a -> b` and `-b -> a`.
//! Vertices are stored in an arena indexed by [`Lit`]: interning a variable
//! creates the vertices of both of its polarities, so every vertex has its
//! complement at `!lit`.

use crate::{
    datastructure::LitVec,
    literal::{db::VariableDatabase, Lit, Literal, Var},
    SolveError,
};
use std::fmt::Display;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct ImplicationGraph {
    vars: VariableDatabase,
    successors: LitVec<Vec<Lit>>,
    predecessors: LitVec<Vec<Lit>>,
    num_edges: usize,
}

/// Builds an [`ImplicationGraph`] from a clause collection.
#[derive(Debug, Clone, Copy)]
pub struct GraphBuilder {
    max_variables: usize,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self { max_variables: Var::MAX_VAR.as_index() + 1 }
    }
}

impl GraphBuilder {
    /// Limits the number of distinct variables. Limits beyond the number of
    /// representable variables are ignored.
    #[must_use]
    pub fn max_variables(mut self, limit: usize) -> Self {
        self.max_variables = self.max_variables.min(limit);
        self
    }

    /// Builds the implication graph of `clauses`.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::MalformedClause`] if a clause does not have exactly
    /// two literals, [`SolveError::MissingLiteral`] if a literal has an empty
    /// name, and [`SolveError::ResourceLimit`] if the clauses mention more
    /// variables than allowed.
    pub fn build<I, C>(self, clauses: I) -> Result<ImplicationGraph, SolveError>
    where
        I: IntoIterator<Item = C>,
        C: AsRef<[Literal]>,
    {
        let mut graph = ImplicationGraph::default();
        let mut num_clauses = 0;
        for (index, clause) in clauses.into_iter().enumerate() {
            let [first, second] = clause.as_ref() else {
                return Err(SolveError::MalformedClause { index, found: clause.as_ref().len() });
            };
            if first.name().is_empty() || second.name().is_empty() {
                return Err(SolveError::MissingLiteral { index });
            }
            let first = self.vertex(&mut graph, first)?;
            let second = self.vertex(&mut graph, second)?;
            graph.add_clause(first, second);
            num_clauses += 1;
        }
        debug!(
            "built implication graph from {num_clauses} clauses: {} vertices, {} edges",
            graph.num_vertices(),
            graph.num_edges()
        );
        Ok(graph)
    }

    fn vertex(self, graph: &mut ImplicationGraph, literal: &Literal) -> Result<Lit, SolveError> {
        if !graph.vars.contains(literal.name()) && graph.num_variables() >= self.max_variables {
            return Err(SolveError::ResourceLimit {
                found: graph.num_variables() + 1,
                limit: self.max_variables,
            });
        }
        Ok(graph.vertex(literal))
    }
}

impl ImplicationGraph {
    /// Builds the implication graph of `clauses` without a variable limit.
    ///
    /// # Errors
    ///
    /// See [`GraphBuilder::build`].
    pub fn build<I, C>(clauses: I) -> Result<Self, SolveError>
    where
        I: IntoIterator<Item = C>,
        C: AsRef<[Literal]>,
    {
        GraphBuilder::default().build(clauses)
    }

    /// Returns the vertex of `literal`, creating the vertices of both
    /// polarities of its variable if necessary.
    pub(crate) fn vertex(&mut self, literal: &Literal) -> Lit {
        let lit = self.vars.lit(literal);
        if self.successors.len() < 2 * self.vars.var_count() {
            self.successors.set_var_count(self.vars.var_count());
            self.predecessors.set_var_count(self.vars.var_count());
        }
        lit
    }

    fn add_clause(&mut self, first: Lit, second: Lit) {
        self.add_implication(!first, second);
        self.add_implication(!second, first);
    }

    /// Adds the edge `from -> to`. Parallel edges are kept.
    pub(crate) fn add_implication(&mut self, from: Lit, to: Lit) {
        self.successors[from].push(to);
        self.predecessors[to].push(from);
        self.num_edges += 1;
    }

    #[must_use]
    pub fn num_variables(&self) -> usize {
        self.vars.var_count()
    }

    #[must_use]
    pub fn num_vertices(&self) -> usize {
        2 * self.num_variables()
    }

    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Returns `true` if the variable of `literal` occurs in the graph.
    /// Both polarities are always present together.
    #[must_use]
    pub fn contains(&self, literal: &Literal) -> bool {
        self.vars.contains(literal.name())
    }

    /// Returns `true` if there is an edge `from -> to`.
    #[must_use]
    pub fn has_implication(&self, from: &Literal, to: &Literal) -> bool {
        match (self.vars.lookup_lit(from), self.vars.lookup_lit(to)) {
            (Some(from), Some(to)) => self.successors[from].contains(&to),
            _ => false,
        }
    }

    pub(crate) fn lookup(&self, literal: &Literal) -> Option<Lit> {
        self.vars.lookup_lit(literal)
    }

    pub(crate) fn literal(&self, lit: Lit) -> Literal {
        self.vars.literal(lit)
    }

    pub(crate) fn vars(&self) -> impl Iterator<Item = Var> + '_ {
        self.vars.iter()
    }

    pub(crate) fn lits(&self) -> impl Iterator<Item = Lit> {
        (0..self.num_vertices()).map(Lit::from_index)
    }

    pub(crate) fn successors(&self, lit: Lit) -> &[Lit] {
        &self.successors[lit]
    }

    pub(crate) fn predecessors(&self, lit: Lit) -> &[Lit] {
        &self.predecessors[lit]
    }
}

impl Display for ImplicationGraph {
    /// One line per edge, e.g., `-a -> b`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (from, targets) in self.successors.iter() {
            for &to in targets {
                writeln!(f, "{} -> {}", self.literal(from), self.literal(to))?;
            }
        }
        Ok(())
    }
}
