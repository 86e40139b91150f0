//! Character scanner for revision expressions.
//!
//! The scanner never fails: it classifies every character and leaves the
//! rejection of invalid sequences to the parser.

use std::iter::Peekable;
use std::str::Chars;

use crate::token::Token;

/// Splits an input string into `(token, literal)` pairs.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
        }
    }

    /// Consume and return the next token with its literal text.
    ///
    /// Once the input is exhausted every call returns [`Token::Eof`] with
    /// an empty literal.
    pub fn scan(&mut self) -> (Token, String) {
        let Some(c) = self.chars.next() else {
            return (Token::Eof, String::new());
        };

        let token = match c {
            '\0' => return (Token::Eof, String::new()),
            ':' => Token::Colon,
            '~' => Token::Tilde,
            '^' => Token::Caret,
            '.' => Token::Dot,
            '/' => Token::Slash,
            ' ' => Token::Space,
            c if c.is_ascii_digit() => return (Token::Number, self.scan_digits(c)),
            c if c.is_ascii_control() => Token::Control,
            _ => Token::Char,
        };
        (token, c.to_string())
    }

    fn scan_digits(&mut self, first: char) -> String {
        let mut digits = String::from(first);
        while let Some(c) = self.chars.next_if(|c| c.is_ascii_digit()) {
            digits.push(c);
        }
        digits
    }
}
