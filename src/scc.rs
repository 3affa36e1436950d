//! Strongly connected components of the implication graph using Kosaraju's
//! algorithm.
//!
//! The first pass computes a reverse postorder by following outgoing edges.
//! The second pass walks this order and floods each not yet assigned vertex's
//! component along incoming edges. Both passes use explicit stacks.

use crate::{
    datastructure::LitVec,
    graph::ImplicationGraph,
    literal::{Lit, Literal},
    SolveError,
};
use tracing::debug;

/// Identifier of a strongly connected component, unique within one
/// [`Components`] instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ComponentId(u32);

impl ComponentId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Supplies fresh component ids for a single analysis, starting at 0.
#[derive(Debug, Default)]
struct ComponentCounter {
    next: u32,
}

impl ComponentCounter {
    fn fresh(&mut self) -> ComponentId {
        let id = ComponentId(self.next);
        self.next += 1;
        id
    }

    fn count(&self) -> usize {
        self.next as usize
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum VertexState {
    #[default]
    Unvisited,
    /// Entered by the ordering pass.
    Visited,
    Assigned(ComponentId),
}

/// Component id of every vertex of an [`ImplicationGraph`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Components {
    ids: LitVec<ComponentId>,
    count: usize,
}

impl Components {
    /// Labels every vertex of `graph` with its strongly connected component.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Invariant`] if a vertex is left without a
    /// component, which indicates a bug.
    pub fn compute(graph: &ImplicationGraph) -> Result<Self, SolveError> {
        let mut kosaraju = Kosaraju::new(graph);
        let order = kosaraju.order();
        kosaraju.assign(&order);
        let count = kosaraju.counter.count();
        let ids = kosaraju
            .states
            .try_map(|state| match *state {
                VertexState::Assigned(id) => Some(id),
                VertexState::Unvisited | VertexState::Visited => None,
            })
            .ok_or(SolveError::Invariant("vertex without strongly connected component"))?;
        debug!("found {count} strongly connected components");
        Ok(Self { ids, count })
    }

    /// Number of distinct components.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the component of `literal`, or `None` if its variable does not
    /// occur in `graph`.
    #[must_use]
    pub fn component(&self, graph: &ImplicationGraph, literal: &Literal) -> Option<ComponentId> {
        graph.lookup(literal).map(|lit| self[lit])
    }
}

impl std::ops::Index<Lit> for Components {
    type Output = ComponentId;

    fn index(&self, index: Lit) -> &Self::Output {
        &self.ids[index]
    }
}

/// Traversal state of one run of Kosaraju's algorithm.
struct Kosaraju<'a> {
    graph: &'a ImplicationGraph,
    states: LitVec<VertexState>,
    counter: ComponentCounter,
}

impl<'a> Kosaraju<'a> {
    fn new(graph: &'a ImplicationGraph) -> Self {
        Self {
            graph,
            states: LitVec::with_var_count(graph.num_variables()),
            counter: ComponentCounter::default(),
        }
    }

    /// Returns all vertices such that the latest finishing one comes first.
    fn order(&mut self) -> Vec<Lit> {
        let mut finished = Vec::with_capacity(self.graph.num_vertices());
        // vertex and position of the next outgoing edge to follow
        let mut stack: Vec<(Lit, usize)> = Vec::new();
        for root in self.graph.lits() {
            if self.states[root] != VertexState::Unvisited {
                continue;
            }
            self.states[root] = VertexState::Visited;
            stack.push((root, 0));
            while let Some((lit, next_edge)) = stack.last_mut() {
                let lit = *lit;
                if let Some(&succ) = self.graph.successors(lit).get(*next_edge) {
                    *next_edge += 1;
                    if self.states[succ] == VertexState::Unvisited {
                        self.states[succ] = VertexState::Visited;
                        stack.push((succ, 0));
                    }
                } else {
                    stack.pop();
                    finished.push(lit);
                }
            }
        }
        finished.reverse();
        finished
    }

    /// Assigns components in `order`, following incoming edges.
    fn assign(&mut self, order: &[Lit]) {
        let mut stack = Vec::new();
        for &root in order {
            if matches!(self.states[root], VertexState::Assigned(_)) {
                continue;
            }
            let id = self.counter.fresh();
            self.states[root] = VertexState::Assigned(id);
            stack.push(root);
            while let Some(lit) = stack.pop() {
                for &pred in self.graph.predecessors(lit) {
                    if !matches!(self.states[pred], VertexState::Assigned(_)) {
                        self.states[pred] = VertexState::Assigned(id);
                        stack.push(pred);
                    }
                }
            }
        }
    }
}
