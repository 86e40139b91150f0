//! Parser for revision expressions such as `master~3^2`.
//!
//! An expression is a ref name followed by a path of `~[N]` and `^[N]`
//! steps. The path is flattened into a list of 1-based parent indices:
//! `^2` selects the second parent, `~N` follows the first parent N times.

use tracing::debug;

use crate::error::{RevisionError, RevisionResult, SyntaxViolation};
use crate::scanner::Scanner;
use crate::token::Token;

/// Largest `N` accepted in a `~N` step, and largest number of steps the
/// `~N` expansions of a whole path may add up to.
pub const MAX_TILDE_LEVEL: usize = 1 << 20;

/// A parsed revision expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolicRefPath {
    /// HEAD, a ref short name or a commit id.
    pub branch_name: String,
    /// 1-based parent indices to follow from the starting commit, in order.
    pub ref_path: Vec<usize>,
}

/// Parse a revision expression.
///
/// # Errors
///
/// [`RevisionError::InvalidReferenceSyntax`] naming the first grammar rule
/// the input breaks.
pub fn parse_symbolic_reference_path(input: &str) -> RevisionResult<SymbolicRefPath> {
    let mut parser = Parser::new(input);
    let branch_name = parser.branch_name()?;
    let ref_path = parser.ref_path()?;
    debug!(input, branch_name = %branch_name, steps = ref_path.len(), "parsed revision");
    Ok(SymbolicRefPath {
        branch_name,
        ref_path,
    })
}

struct Parser<'a> {
    input: &'a str,
    scanner: Scanner<'a>,
    peeked: Option<(Token, String)>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            scanner: Scanner::new(input),
            peeked: None,
        }
    }

    fn scan(&mut self) -> (Token, String) {
        match self.peeked.take() {
            Some(token) => token,
            None => self.scanner.scan(),
        }
    }

    fn unscan(&mut self, token: (Token, String)) {
        self.peeked = Some(token);
    }

    fn fail<T>(&self, violation: SyntaxViolation) -> RevisionResult<T> {
        Err(RevisionError::syntax(self.input, violation))
    }

    fn branch_name(&mut self) -> RevisionResult<String> {
        let mut name = String::new();
        loop {
            let (token, literal) = self.scan();
            match token {
                Token::Colon => return self.fail(SyntaxViolation::Colon),
                Token::Slash => return self.fail(SyntaxViolation::Slash),
                Token::Space => return self.fail(SyntaxViolation::Space),
                Token::Control => return self.fail(SyntaxViolation::Control),
                Token::Dot if name.is_empty() => return self.fail(SyntaxViolation::LeadingDot),
                Token::Dot if name.ends_with('.') => {
                    return self.fail(SyntaxViolation::DoubleDot)
                }
                Token::Tilde | Token::Caret | Token::Eof => {
                    if name.to_lowercase().ends_with(".lock") {
                        return self.fail(SyntaxViolation::LockSuffix);
                    }
                    if name.is_empty() {
                        return self.fail(SyntaxViolation::EmptyName);
                    }
                    if token != Token::Eof {
                        self.unscan((token, literal));
                    }
                    return Ok(name);
                }
                Token::Dot | Token::Number | Token::Char => name.push_str(&literal),
            }
        }
    }

    fn ref_path(&mut self) -> RevisionResult<Vec<usize>> {
        let mut path = Vec::new();
        loop {
            match self.scan().0 {
                Token::Caret => {
                    let next = self.scan();
                    if next.0 == Token::Number {
                        match next.1.parse::<usize>() {
                            Ok(level @ (1 | 2)) => path.push(level),
                            _ => return self.fail(SyntaxViolation::CaretLevel),
                        }
                    } else {
                        self.unscan(next);
                        path.push(1);
                    }
                }
                Token::Tilde => {
                    let next = self.scan();
                    if next.0 == Token::Number {
                        match next.1.parse::<usize>() {
                            Ok(level) if path.len().saturating_add(level) <= MAX_TILDE_LEVEL => {
                                path.extend(std::iter::repeat(1).take(level))
                            }
                            _ => return self.fail(SyntaxViolation::TildeLevelTooLarge),
                        }
                    } else {
                        self.unscan(next);
                        path.push(1);
                    }
                }
                Token::Eof => return Ok(path),
                _ => return self.fail(SyntaxViolation::UnexpectedToken),
            }
        }
    }
}
