//! Scanner for the mini language.
//!
//! Turns a source string into classified tokens (numbers, identifiers,
//! keywords, operators) one at a time. A recursive-descent parser drives it
//! through the single-token lookahead protocol on [`Scanner`]:
//!
//! - [`Scanner::next`] advances and reports whether a token was produced
//! - [`Scanner::curr`] returns the current token
//! - [`Scanner::match_token`] checks the current token and advances
//!
//! # Crate Layout
//!
//! - [`class`]: compile-time character classification table
//! - [`Lexicon`]: keyword and operator registry
//! - [`Token`]: `(kind, lexeme)` pairs
//! - [`ScanError`] / [`LexWarning`]: the error taxonomy
//!
//! Illegal characters never fail a scan. They are reported through
//! `tracing` and collected in [`Scanner::warnings`].

pub mod class;
mod cursor;
mod error;
mod lexicon;
mod scanner;
mod token;

pub use error::{Expected, Found, LexWarning, ScanError};
pub use lexicon::{Lexicon, STANDARD_OPERATORS};
pub use scanner::{tokenize, Scanner, Tokens};
pub use token::Token;
