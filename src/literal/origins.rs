//! Per-literal record of the clauses a literal was drawn from.
//!
//! The solver never reads this; it is bookkeeping for callers that want to
//! relate literals back to their clauses.

use super::Literal;
use crate::clause::ClauseId;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClauseOrigins {
    by_literal: HashMap<Literal, Vec<ClauseId>>,
}

impl ClauseOrigins {
    /// Records that `clause` is an origin of `literal`, or of its complement
    /// if `to_complement` is set.
    pub fn attach(&mut self, literal: &Literal, clause: ClauseId, to_complement: bool) {
        let target = if to_complement { literal.complement() } else { literal.clone() };
        self.by_literal.entry(target).or_default().push(clause);
    }

    #[must_use]
    pub fn origins(&self, literal: &Literal) -> &[ClauseId] {
        self.by_literal.get(literal).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_literal.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn attach_to_literal_and_complement() {
        let a = Literal::new("a");
        let mut origins = ClauseOrigins::default();
        assert!(origins.is_empty());

        origins.attach(&a, ClauseId::from_index(0), false);
        origins.attach(&a, ClauseId::from_index(1), true);
        origins.attach(&a, ClauseId::from_index(2), false);

        assert_eq!(origins.origins(&a), &[ClauseId::from_index(0), ClauseId::from_index(2)]);
        assert_eq!(origins.origins(&!&a), &[ClauseId::from_index(1)]);
        assert!(origins.origins(&Literal::new("b")).is_empty());
    }
}
