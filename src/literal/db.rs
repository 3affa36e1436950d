//! Variable database

use super::{Lit, Literal, Var};
use crate::datastructure::VarVec;
use std::collections::HashMap;

/// Interns variable names into dense [`Var`] indices.
#[derive(Debug, Clone, Default)]
pub(crate) struct VariableDatabase {
    names: VarVec<String>,
    lookup: HashMap<String, Var>,
}

impl VariableDatabase {
    /// Returns the variable for `name`, creating it if necessary.
    pub(crate) fn intern(&mut self, name: &str) -> Var {
        if let Some(&var) = self.lookup.get(name) {
            return var;
        }
        let var = self.next_variable();
        self.names.push(name.to_owned());
        self.lookup.insert(name.to_owned(), var);
        var
    }

    pub(crate) fn get(&self, name: &str) -> Option<Var> {
        self.lookup.get(name).copied()
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.lookup.contains_key(name)
    }

    pub(crate) fn next_variable(&self) -> Var {
        Var::from_index(u32::try_from(self.names.len()).expect("variable count fits in u32"))
    }

    pub(crate) fn var_count(&self) -> usize {
        self.names.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = Var> + '_ {
        self.names.iter().map(|(var, _)| var)
    }

    pub(crate) fn lit(&mut self, literal: &Literal) -> Lit {
        Lit::with_polarity(self.intern(literal.name()), literal.is_negated())
    }

    pub(crate) fn lookup_lit(&self, literal: &Literal) -> Option<Lit> {
        self.get(literal.name()).map(|var| Lit::with_polarity(var, literal.is_negated()))
    }

    pub(crate) fn literal(&self, lit: Lit) -> Literal {
        Literal::with_polarity(self[lit.var()].clone(), lit.is_negative())
    }
}

impl std::ops::Index<Var> for VariableDatabase {
    type Output = String;

    fn index(&self, index: Var) -> &Self::Output {
        &self.names[index]
    }
}
