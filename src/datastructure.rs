use crate::literal::{Lit, Var};
use std::ops::{Index, IndexMut};

/// Wrapper around a `Vec` that is indexed by [`Var`].
#[derive(Debug, Clone)]
pub(crate) struct VarVec<T>(Vec<T>);

impl<T> Default for VarVec<T> {
    fn default() -> Self {
        Self(Vec::default())
    }
}

impl<T> VarVec<T> {
    /// Appends the value for the next variable.
    pub(crate) fn push(&mut self, value: T) {
        self.0.push(value);
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (Var, &T)> {
        self.0
            .iter()
            .enumerate()
            .map(|(idx, value)| (Var::from_index(idx.try_into().unwrap()), value))
    }
}

impl<T> Index<Var> for VarVec<T> {
    type Output = T;

    fn index(&self, index: Var) -> &Self::Output {
        &self.0[index.as_index()]
    }
}

impl<T> IndexMut<Var> for VarVec<T> {
    fn index_mut(&mut self, index: Var) -> &mut Self::Output {
        &mut self.0[index.as_index()]
    }
}

/// Wrapper around a `Vec` that is indexed by [`Lit`].
///
/// Holds two entries per variable, one for each polarity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LitVec<T>(Vec<T>);

impl<T: Default> LitVec<T> {
    pub(crate) fn set_var_count(&mut self, count: usize) {
        self.0.resize_with(count * 2, Default::default);
    }

    pub(crate) fn with_var_count(count: usize) -> Self {
        let mut vec = Self::default();
        vec.set_var_count(count);
        vec
    }
}

impl<T> Default for LitVec<T> {
    fn default() -> Self {
        Self(Vec::default())
    }
}

impl<T> LitVec<T> {
    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (Lit, &T)> {
        self.0.iter().enumerate().map(|(idx, value)| (Lit::from_index(idx), value))
    }

    /// Applies `f` to every entry, stopping at the first `None`.
    pub(crate) fn try_map<U>(&self, mut f: impl FnMut(&T) -> Option<U>) -> Option<LitVec<U>> {
        self.0.iter().map(&mut f).collect::<Option<Vec<U>>>().map(LitVec)
    }
}

impl<T> Index<Lit> for LitVec<T> {
    type Output = T;

    fn index(&self, index: Lit) -> &Self::Output {
        &self.0[index.as_index()]
    }
}

impl<T> IndexMut<Lit> for LitVec<T> {
    fn index_mut(&mut self, index: Lit) -> &mut Self::Output {
        &mut self.0[index.as_index()]
    }
}
