//! Reader for 2-CNF formulas in the DIMACS CNF format.
//!
//! The input is split into lines and whitespace separated words, keeping the
//! byte offset of every word for error labels. Lines starting with `c` are
//! comments, the single `p cnf <variables> <clauses>` line has to precede all
//! clauses, and every clause is a sequence of exactly two literals followed
//! by `0`. Clauses may span lines.

use crate::{clause::Clause, formula::Formula, literal::Literal};
use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum ParseError {
    #[error("Expected a `p cnf <variables> <clauses>` line before the first clause")]
    MissingHeader {
        #[label("clause without header")]
        span: SourceSpan,
    },

    #[error("Invalid header: {reason}")]
    InvalidHeader {
        reason: HeaderError,

        #[label]
        span: SourceSpan,
    },

    #[error("Header line must appear exactly once, before all clauses")]
    MisplacedHeader {
        #[label]
        span: SourceSpan,
    },

    #[error("`{text}` is not a literal")]
    InvalidLiteral {
        text: String,

        #[label]
        span: SourceSpan,
    },

    #[error("Variable {var} exceeds the {max} variables declared in the header")]
    VariableOutOfRange {
        var: u32,
        max: u32,

        #[label]
        span: SourceSpan,
    },

    #[error("Clause is not terminated by 0")]
    UnterminatedClause {
        #[label("this clause")]
        span: SourceSpan,
    },

    #[error("Clause has {found} literals, but 2-CNF clauses need exactly 2")]
    #[diagnostic(help("split longer clauses or duplicate the literal of a unit clause"))]
    ClauseWidth {
        found: usize,

        #[label("this clause")]
        span: SourceSpan,
    },

    #[error("Header declares {expected} clauses, but {found} were given")]
    ClauseCountMismatch { expected: u32, found: u32 },
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HeaderError {
    #[error("expected `p cnf`")]
    Format,

    #[error("expected `p cnf` followed by two counts")]
    FieldCount,

    #[error("variable count is not a non-negative integer")]
    VariableCount,

    #[error("clause count is not a non-negative integer")]
    ClauseCount,
}

/// Content of the `p cnf` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub num_variables: u32,
    pub num_clauses: u32,
}

#[derive(Debug, Clone, Copy)]
struct Word<'a> {
    text: &'a str,
    offset: usize,
}

impl Word<'_> {
    fn span(self) -> SourceSpan {
        (self.offset, self.text.len()).into()
    }

    fn end(self) -> usize {
        self.offset + self.text.len()
    }
}

/// Words of `line`, which starts at byte `offset` of the input.
fn words(line: &str, offset: usize) -> impl Iterator<Item = Word<'_>> {
    let base = line.as_ptr() as usize;
    line.split_ascii_whitespace()
        .map(move |text| Word { text, offset: offset + (text.as_ptr() as usize - base) })
}

fn span_between(first: Word, last: Word) -> SourceSpan {
    (first.offset, last.end() - first.offset).into()
}

impl Header {
    fn parse(line: &[Word]) -> Result<Self, ParseError> {
        let invalid = |reason, span| ParseError::InvalidHeader { reason, span };
        let (Some(&first), Some(&last)) = (line.first(), line.last()) else {
            unreachable!("header lines are non-empty");
        };
        match line {
            [p, format, ..] if p.text != "p" || format.text != "cnf" => {
                Err(invalid(HeaderError::Format, span_between(first, *format)))
            }
            [_, _, variables, clauses] => Ok(Self {
                num_variables: variables
                    .text
                    .parse()
                    .map_err(|_| invalid(HeaderError::VariableCount, variables.span()))?,
                num_clauses: clauses
                    .text
                    .parse()
                    .map_err(|_| invalid(HeaderError::ClauseCount, clauses.span()))?,
            }),
            [p] if p.text != "p" => Err(invalid(HeaderError::Format, p.span())),
            _ => Err(invalid(HeaderError::FieldCount, span_between(first, last))),
        }
    }
}

/// Iterator over the clauses of a DIMACS input.
///
/// Construction reads the header; [`DimacsParser::finish`] checks the clause
/// count afterwards.
#[derive(Debug)]
pub struct DimacsParser<'a> {
    header: Header,
    body: std::vec::IntoIter<Word<'a>>,
    end: usize,
    clauses_read: u32,
}

impl<'a> DimacsParser<'a> {
    /// Separates comments, header, and clause words of `source`.
    ///
    /// # Errors
    ///
    /// Returns an error if the header is missing, malformed, or not the first
    /// non-comment line.
    pub fn new(source: &'a str) -> Result<Self, ParseError> {
        let mut header = None;
        let mut body = Vec::new();
        let mut offset = 0;
        for line in source.split_inclusive('\n') {
            let line_words: Vec<_> = words(line, offset).collect();
            offset += line.len();
            let Some(&first) = line_words.first() else {
                continue;
            };
            if first.text.starts_with('c') {
                continue;
            }
            if first.text.starts_with('p') {
                if header.is_some() || !body.is_empty() {
                    return Err(ParseError::MisplacedHeader { span: first.span() });
                }
                header = Some(Header::parse(&line_words)?);
                continue;
            }
            if header.is_none() {
                return Err(ParseError::MissingHeader { span: first.span() });
            }
            body.extend(line_words);
        }
        let header = header.ok_or(ParseError::MissingHeader { span: source.len().into() })?;
        Ok(Self { header, body: body.into_iter(), end: source.len(), clauses_read: 0 })
    }

    #[must_use]
    pub fn header(&self) -> Header {
        self.header
    }

    /// Checks that the number of clauses read matches the header.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::ClauseCountMismatch`] otherwise.
    pub fn finish(self) -> Result<Header, ParseError> {
        if self.clauses_read == self.header.num_clauses {
            Ok(self.header)
        } else {
            Err(ParseError::ClauseCountMismatch {
                expected: self.header.num_clauses,
                found: self.clauses_read,
            })
        }
    }

    /// Interprets `word` as literal, `None` marks the end of a clause.
    fn literal(&self, word: Word) -> Result<Option<Literal>, ParseError> {
        let lit: i32 = match word.text.parse() {
            Ok(lit) if lit != i32::MIN => lit,
            _ => {
                return Err(ParseError::InvalidLiteral {
                    text: word.text.to_owned(),
                    span: word.span(),
                })
            }
        };
        if lit == 0 {
            return Ok(None);
        }
        let var = lit.unsigned_abs();
        if var > self.header.num_variables {
            return Err(ParseError::VariableOutOfRange {
                var,
                max: self.header.num_variables,
                span: word.span(),
            });
        }
        Ok(Some(Literal::from_dimacs(lit)))
    }

    fn next_clause(&mut self, first: Word) -> Result<Clause, ParseError> {
        let mut lits = Vec::with_capacity(2);
        let mut word = first;
        while let Some(lit) = self.literal(word)? {
            lits.push(lit);
            word = self.body.next().ok_or(ParseError::UnterminatedClause {
                span: (first.offset, self.end - first.offset).into(),
            })?;
        }
        self.clauses_read += 1;
        Clause::try_from(lits).map_err(|err| ParseError::ClauseWidth {
            found: err.found,
            span: span_between(first, word),
        })
    }
}

impl Iterator for DimacsParser<'_> {
    type Item = Result<Clause, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.body.next()?;
        Some(self.next_clause(first))
    }
}

/// Parses a complete DIMACS input.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered.
pub fn parse(source: &str) -> Result<Formula, ParseError> {
    let mut parser = DimacsParser::new(source)?;
    let mut formula = Formula::default();
    for clause in &mut parser {
        formula.push(clause?);
    }
    parser.finish()?;
    Ok(formula)
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn arbitrary_input_is_rejected_gracefully(s in ".*") {
            let _ = parse(&s);
        }

        #[test]
        fn display_is_parsed_back(input in crate::formula::strategy::formula(10, 0..100)) {
            let parsed = parse(&input.to_string())?;
            prop_assert_eq!(parsed, input);
        }
    }

    fn span(offset: usize, len: usize) -> SourceSpan {
        (offset, len).into()
    }

    #[test]
    fn header_only() -> Result<(), ParseError> {
        let parser = DimacsParser::new("c empty\np cnf 0 0")?;
        assert_eq!(parser.header(), Header { num_variables: 0, num_clauses: 0 });
        assert_eq!(parse("p cnf     10      0\n")?.num_clauses(), 0);
        Ok(())
    }

    #[test]
    fn comments_and_blank_lines() -> Result<(), ParseError> {
        let dimacs = "
		c satisfiable.cnf
		p cnf 3 4
		-1 2 0
		2 3 0

		c comment between clauses
		-2 3 0
		1 3 0
		";
        let expected = cnf_formula![
            -1 2;
            2 3;
            -2 3;
            1 3;
        ];
        assert_eq!(parse(dimacs)?, expected);
        Ok(())
    }

    #[test]
    fn clauses_may_span_lines() -> Result<(), ParseError> {
        assert_eq!(parse("p cnf 2 2\n1\n-2 0 2 1 0")?, cnf_formula![1 -2; 2 1;]);
        Ok(())
    }

    #[test]
    fn clause_at_a_time() -> Result<(), ParseError> {
        let mut parser = DimacsParser::new("p cnf 2 2\n1 -2 0\n1 2 3 0\n")?;
        let first = parser.next().unwrap()?;
        assert_eq!(first, Clause::new(Literal::new("1"), Literal::negative("2")));
        assert!(matches!(parser.next(), Some(Err(ParseError::VariableOutOfRange { var: 3, .. }))));
        Ok(())
    }

    #[test]
    fn missing_header() {
        assert_eq!(parse(""), Err(ParseError::MissingHeader { span: span(0, 0) }));
        assert_eq!(
            parse("c comment\n1 2 0\n"),
            Err(ParseError::MissingHeader { span: span(10, 1) })
        );
    }

    #[test]
    fn misplaced_header() {
        assert_eq!(
            parse("p cnf 2 1\n1 2 0\np cnf 2 1\n"),
            Err(ParseError::MisplacedHeader { span: span(16, 1) })
        );
    }

    #[test]
    fn invalid_header() {
        let reason = |input| match parse(input) {
            Err(ParseError::InvalidHeader { reason, .. }) => reason,
            other => panic!("Unexpected result {other:?}"),
        };
        assert_eq!(reason("p dnf 2 2"), HeaderError::Format);
        assert_eq!(reason("pcnf 2 2"), HeaderError::Format);
        assert_eq!(reason("p cnf 2"), HeaderError::FieldCount);
        assert_eq!(reason("p cnf 2 2 2"), HeaderError::FieldCount);
        assert_eq!(reason("p cnf -2 2"), HeaderError::VariableCount);
        assert_eq!(reason("p cnf 2 x"), HeaderError::ClauseCount);
    }

    #[test]
    fn clause_width() {
        assert_eq!(
            parse("p cnf 3 1\n1 2 3 0\n"),
            Err(ParseError::ClauseWidth { found: 3, span: span(10, 7) })
        );
        assert!(matches!(parse("p cnf 3 1\n1 0\n"), Err(ParseError::ClauseWidth { found: 1, .. })));
        assert!(matches!(parse("p cnf 3 1\n0\n"), Err(ParseError::ClauseWidth { found: 0, .. })));
    }

    #[test]
    fn invalid_literals() {
        for input in ["p cnf 2 1\n1 x 0", "p cnf 2 1\n1 2- 0", "p cnf 2 1\n1 -2147483648 0"] {
            assert!(
                matches!(parse(input), Err(ParseError::InvalidLiteral { .. })),
                "{input:?} should be rejected"
            );
        }
        assert_eq!(
            parse("p cnf 2 1\n1 5 0"),
            Err(ParseError::VariableOutOfRange { var: 5, max: 2, span: span(12, 1) })
        );
    }

    #[test]
    fn unterminated_clause() {
        assert_eq!(
            parse("p cnf 2 2\n1 2 0\n-1 2"),
            Err(ParseError::UnterminatedClause { span: span(16, 4) })
        );
    }

    #[test]
    fn clause_count() {
        assert_eq!(
            parse("p cnf 3 2\n1 -2 0\n2 -3 0\n3 -1 0\n"),
            Err(ParseError::ClauseCountMismatch { expected: 2, found: 3 })
        );
        assert_eq!(
            parse("p cnf 3 2\n1 -2 0\n"),
            Err(ParseError::ClauseCountMismatch { expected: 2, found: 1 })
        );
    }
}
