//! Lexical tokens of a revision expression.

/// Kind of a scanned token.
///
/// Every token covers a single character except [`Token::Number`], which
/// covers a whole run of decimal digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    /// End of input, or a NUL character.
    Eof,
    Colon,
    Tilde,
    Caret,
    Dot,
    Slash,
    /// Any ASCII control character other than NUL.
    Control,
    Space,
    /// A run of decimal digits.
    Number,
    /// Anything else.
    Char,
}
