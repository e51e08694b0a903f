//! Keyword and operator registry.
//!
//! A [`Lexicon`] decides which identifiers are keywords and which
//! punctuation spellings are operators. The operator set is consulted
//! twice by the scanner: once with the single character at the cursor and
//! once with the two-character spelling starting there. A two-character
//! operator is therefore recognised only when that exact spelling has been
//! registered alongside its first character.

use std::sync::OnceLock;

use rustc_hash::FxHashSet;

/// Operators and punctuation of the standard grammar.
pub const STANDARD_OPERATORS: [&str; 8] = ["=", "+", "-", "*", "/", "(", ")", ";"];

/// Registry of reserved words and operator spellings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lexicon {
    keywords: FxHashSet<String>,
    operators: FxHashSet<String>,
}

impl Lexicon {
    /// A lexicon with no keywords and no operators.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard grammar: [`STANDARD_OPERATORS`] and no keywords.
    pub fn standard() -> Self {
        STANDARD_OPERATORS
            .iter()
            .fold(Self::empty(), |lexicon, op| lexicon.with_operator(*op))
    }

    /// Process-wide standard lexicon, built on first use.
    pub fn shared() -> &'static Lexicon {
        static SHARED: OnceLock<Lexicon> = OnceLock::new();
        SHARED.get_or_init(Lexicon::standard)
    }

    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.add_keyword(keyword);
        self
    }

    #[must_use]
    pub fn with_operator(mut self, operator: impl Into<String>) -> Self {
        self.add_operator(operator);
        self
    }

    /// Register a keyword. Returns `false` if it was already registered.
    pub fn add_keyword(&mut self, keyword: impl Into<String>) -> bool {
        self.keywords.insert(keyword.into())
    }

    /// Register an operator spelling. Returns `false` if it was already
    /// registered.
    pub fn add_operator(&mut self, operator: impl Into<String>) -> bool {
        self.operators.insert(operator.into())
    }

    #[inline]
    pub fn is_keyword(&self, text: &str) -> bool {
        self.keywords.contains(text)
    }

    #[inline]
    pub fn is_operator(&self, text: &str) -> bool {
        self.operators.contains(text)
    }

    /// Registered keywords, in no particular order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    /// Registered operators, in no particular order.
    pub fn operators(&self) -> impl Iterator<Item = &str> {
        self.operators.iter().map(String::as_str)
    }
}
