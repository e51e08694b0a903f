//! Token type.

use std::fmt;

/// A classified lexeme.
///
/// `kind` is the semantic category: [`Token::NUM`], [`Token::ID`], or, for
/// keywords and operators, the spelling itself. `lexeme` is the exact
/// source text that was matched.
///
/// Equality is structural: two tokens are equal only when both kind and
/// lexeme match. Wildcard comparisons used in error reports are modelled
/// separately by [`Expected`](crate::Expected) and [`Found`](crate::Found).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    kind: String,
    lexeme: String,
}

impl Token {
    /// Kind of numeric literals.
    pub const NUM: &'static str = "num";
    /// Kind of non-keyword identifiers.
    pub const ID: &'static str = "id";

    pub fn new(kind: impl Into<String>, lexeme: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            lexeme: lexeme.into(),
        }
    }

    /// A numeric literal.
    pub fn num(lexeme: impl Into<String>) -> Self {
        Self::new(Self::NUM, lexeme)
    }

    /// A plain identifier.
    pub fn id(lexeme: impl Into<String>) -> Self {
        Self::new(Self::ID, lexeme)
    }

    /// An operator or punctuation token; its kind is its spelling.
    pub fn op(spelling: impl Into<String>) -> Self {
        let spelling = spelling.into();
        Self {
            kind: spelling.clone(),
            lexeme: spelling,
        }
    }

    /// A keyword token; its kind is its spelling.
    pub fn keyword(spelling: impl Into<String>) -> Self {
        Self::op(spelling)
    }

    #[inline]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    #[inline]
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.kind, self.lexeme)
    }
}

#[cfg(test)]
mod tests;
