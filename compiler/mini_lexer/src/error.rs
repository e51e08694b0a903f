//! Scanner error taxonomy.
//!
//! Two conditions:
//! - [`LexWarning`]: an illegal character was skipped. Recoverable, never
//!   returned as an `Err`.
//! - [`ScanError`]: a caller-visible contract violation (no current token,
//!   or the current token is not the expected one). The scanner never
//!   recovers from these itself.

use std::fmt;

use crate::Token;

/// What the caller expected to see when a [`ScanError`] was raised.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Expected {
    /// Any token at all. Used when `curr` is called before a token exists.
    Any,
    Token(Token),
}

/// What the scanner actually held when a [`ScanError`] was raised.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Found {
    /// No token has been scanned yet.
    Empty,
    Token(Token),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Any => f.write_str("<ANY>"),
            Expected::Token(tok) => write!(f, "{tok}"),
        }
    }
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Empty => f.write_str("<EMPTY>"),
            Found::Token(tok) => write!(f, "{tok}"),
        }
    }
}

/// Syntax-level failure surfaced to the parser or harness.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    #[error("syntax error at position {pos}: expected {expected}, found {found}")]
    Syntax {
        /// Cursor position when the error was raised.
        pos: usize,
        expected: Expected,
        found: Found,
    },
}

impl ScanError {
    /// `curr` was called before any token was scanned.
    pub fn no_token(pos: usize) -> Self {
        ScanError::Syntax {
            pos,
            expected: Expected::Any,
            found: Found::Empty,
        }
    }

    /// The current token differs from the one the caller required.
    pub fn mismatch(pos: usize, expected: Token, found: Token) -> Self {
        ScanError::Syntax {
            pos,
            expected: Expected::Token(expected),
            found: Found::Token(found),
        }
    }

    pub fn pos(&self) -> usize {
        match self {
            ScanError::Syntax { pos, .. } => *pos,
        }
    }
}

/// An illegal character skipped during scanning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LexWarning {
    /// Byte offset of the character.
    pub pos: usize,
    pub ch: char,
}

impl fmt::Display for LexWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "illegal character {:?} at position {}", self.ch, self.pos)
    }
}
