use std::{fmt::Display, str::FromStr};
use thiserror::Error;

pub(crate) mod db;
pub(crate) mod origins;

/// A boolean variable identified by its name, in one of two polarities.
///
/// Two literals are equal iff both name and polarity match. Every literal has
/// exactly one complement, the literal with the same name and opposite
/// polarity, and `!!lit == lit`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    name: String,
    negated: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LiteralError {
    #[error("Literal has an empty variable name")]
    EmptyName,
}

impl Literal {
    /// Returns the non-negated literal of variable `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_polarity(name, false)
    }

    /// Returns the negated literal of variable `name`.
    pub fn negative(name: impl Into<String>) -> Self {
        Self::with_polarity(name, true)
    }

    pub fn with_polarity(name: impl Into<String>, negated: bool) -> Self {
        Self { name: name.into(), negated }
    }

    /// Interprets a DIMACS literal, using the variable number as name.
    pub fn from_dimacs(lit: i32) -> Self {
        assert!(lit != 0, "0 is not a DIMACS literal");
        Self::with_polarity(lit.unsigned_abs().to_string(), lit < 0)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    #[must_use]
    pub fn complement(&self) -> Self {
        Self { name: self.name.clone(), negated: !self.negated }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.negated {
            write!(f, "-{}", self.name)
        } else {
            write!(f, "{}", self.name)
        }
    }
}

impl FromStr for Literal {
    type Err = LiteralError;

    /// Parses the canonical form, i.e., `a` or `-a`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, negated) = match s.strip_prefix('-') {
            Some(name) => (name, true),
            None => (s, false),
        };
        if name.is_empty() {
            return Err(LiteralError::EmptyName);
        }
        Ok(Self::with_polarity(name, negated))
    }
}

impl std::ops::Not for Literal {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self { name: self.name, negated: !self.negated }
    }
}

impl std::ops::Not for &Literal {
    type Output = Literal;

    fn not(self) -> Self::Output {
        self.complement()
    }
}

/// Dense index of an interned variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct Var {
    index: u32,
}

impl Var {
    pub(crate) const MAX_VAR: Var = Var { index: (u32::MAX >> 1) - 1 };

    pub(crate) fn from_index(index: u32) -> Self {
        assert!(index <= Self::MAX_VAR.index);
        Self { index }
    }

    pub(crate) fn as_index(self) -> usize {
        self.index as usize
    }

    pub(crate) fn positive(self) -> Lit {
        Lit::positive(self)
    }

    pub(crate) fn negative(self) -> Lit {
        Lit::negative(self)
    }
}

/// A vertex of the implication graph, i.e., a variable in a fixed polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct Lit {
    /// internal representation of a literal
    repr: u32,
}

const _: () = assert!(std::mem::size_of::<Lit>() == 4);

impl Lit {
    const fn from_var(variable: Var, negated: bool) -> Self {
        Self { repr: (variable.index << 1) | (negated as u32) }
    }

    pub(crate) const fn positive(variable: Var) -> Self {
        Self::from_var(variable, false)
    }

    pub(crate) const fn negative(variable: Var) -> Self {
        Self::from_var(variable, true)
    }

    pub(crate) fn with_polarity(variable: Var, negated: bool) -> Self {
        Self::from_var(variable, negated)
    }

    pub(crate) fn var(self) -> Var {
        Var { index: self.repr >> 1 }
    }

    pub(crate) fn is_negative(self) -> bool {
        (self.repr & 1) == 1
    }

    pub(crate) fn as_index(self) -> usize {
        self.repr as usize
    }

    pub(crate) fn from_index(idx: usize) -> Lit {
        Lit { repr: idx.try_into().expect("index should be smaller than u32::MAX") }
    }
}

impl std::ops::Not for Lit {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self { repr: self.repr ^ 1 }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn complement() {
        let a = Literal::new("a");
        let neg_a = a.complement();
        assert_ne!(a, neg_a);
        assert_eq!(neg_a, Literal::negative("a"));
        assert_eq!(a, neg_a.complement());
        assert_eq!(a, !!a.clone());
    }

    #[test]
    fn canonical_form() {
        assert_eq!(Literal::new("a").to_string(), "a");
        assert_eq!(Literal::negative("a").to_string(), "-a");
        assert_eq!("-a".parse::<Literal>(), Ok(Literal::negative("a")));
        assert_eq!("x1".parse::<Literal>(), Ok(Literal::new("x1")));
        assert_eq!("".parse::<Literal>(), Err(LiteralError::EmptyName));
        assert_eq!("-".parse::<Literal>(), Err(LiteralError::EmptyName));
    }

    #[test]
    fn structural_equality() {
        assert_eq!(Literal::new("a"), Literal::with_polarity("a", false));
        assert_ne!(Literal::new("a"), Literal::new("b"));
        assert_ne!(Literal::negative("a"), Literal::negative("b"));
    }

    #[test]
    fn from_dimacs() {
        assert_eq!(Literal::from_dimacs(3), Literal::new("3"));
        assert_eq!(Literal::from_dimacs(-3), Literal::negative("3"));
    }

    #[test]
    fn packed_negation() {
        let var = Var::from_index(7);
        let l = var.positive();
        assert_ne!(l, !l);
        assert_eq!(!l, var.negative());
        assert_eq!(l, !!l);
        assert_eq!((!l).var(), var);
        assert!((!l).is_negative());
        assert_eq!(Lit::from_index(l.as_index()), l);
    }

    #[test]
    fn max_var() {
        let _max = Var::from_index(Var::MAX_VAR.index);
    }

    #[test]
    #[should_panic]
    fn larger_than_max_var() {
        let _max = Var::from_index(Var::MAX_VAR.index + 1);
    }
}
