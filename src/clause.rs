use crate::literal::Literal;
use thiserror::Error;

/// Disjunction of exactly two literals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clause {
    lits: [Literal; 2],
}

/// Index of a clause within a [`crate::Formula`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClauseId(usize);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Expected a clause with exactly 2 literals, but found {found}")]
pub struct ClauseWidthError {
    pub found: usize,
}

impl Clause {
    #[must_use]
    pub fn new(first: Literal, second: Literal) -> Self {
        Self { lits: [first, second] }
    }

    #[must_use]
    pub fn lits(&self) -> &[Literal; 2] {
        &self.lits
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Literal> {
        self.lits.iter()
    }
}

impl ClauseId {
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl TryFrom<&[Literal]> for Clause {
    type Error = ClauseWidthError;

    fn try_from(lits: &[Literal]) -> Result<Self, Self::Error> {
        match lits {
            [first, second] => Ok(Self::new(first.clone(), second.clone())),
            _ => Err(ClauseWidthError { found: lits.len() }),
        }
    }
}

impl TryFrom<Vec<Literal>> for Clause {
    type Error = ClauseWidthError;

    fn try_from(lits: Vec<Literal>) -> Result<Self, Self::Error> {
        let lits: [Literal; 2] =
            lits.try_into().map_err(|lits: Vec<Literal>| ClauseWidthError { found: lits.len() })?;
        Ok(Self { lits })
    }
}

impl From<[Literal; 2]> for Clause {
    fn from(lits: [Literal; 2]) -> Self {
        Self { lits }
    }
}

impl AsRef<[Literal]> for Clause {
    fn as_ref(&self) -> &[Literal] {
        &self.lits
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [first, second] = &self.lits;
        write!(f, "({first} | {second})")
    }
}

impl std::fmt::Display for ClauseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl<'a> IntoIterator for &'a Clause {
    type Item = &'a Literal;
    type IntoIter = std::slice::Iter<'a, Literal>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
