//! On-demand scanner with a single-token lookahead buffer.
//!
//! # Protocol
//!
//! The scanner is always in one of three states:
//!
//! - **fresh**: no token scanned yet; [`Scanner::curr`] fails
//! - **have-token**: [`Scanner::curr`] returns the last scanned token
//! - **exhausted**: [`Scanner::next`] returned `false`; the last token is
//!   retained and the cursor never moves again
//!
//! # Dispatch
//!
//! After skipping whitespace, the byte at the cursor selects one branch:
//! digit, letter, registered operator, `#` (comment), or illegal character.
//! Comments and illegal characters consume input without producing a token,
//! and the dispatch loop retries. Each retry consumes at least one byte, so
//! scanning always terminates.

use tracing::{debug, trace, warn};

use crate::class;
use crate::cursor::Cursor;
use crate::{LexWarning, Lexicon, ScanError, Token};

/// Byte that opens and closes a comment.
const COMMENT_MARKER: u8 = b'#';

/// Forward-only scanner over one source string.
#[derive(Debug)]
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    lexicon: &'a Lexicon,
    token: Option<Token>,
    warnings: Vec<LexWarning>,
}

impl<'a> Scanner<'a> {
    /// Create a scanner over `source` using the standard lexicon.
    pub fn new(source: &'a str) -> Self {
        Self::with_lexicon(source, Lexicon::shared())
    }

    /// Create a scanner over `source` with a custom keyword/operator registry.
    pub fn with_lexicon(source: &'a str, lexicon: &'a Lexicon) -> Self {
        Self {
            cursor: Cursor::new(source),
            lexicon,
            token: None,
            warnings: Vec::new(),
        }
    }

    /// Returns `true` once the cursor has reached the end of the source.
    #[inline]
    pub fn done(&self) -> bool {
        self.cursor.is_eof()
    }

    /// Current cursor position (byte offset).
    #[inline]
    pub fn pos(&self) -> usize {
        self.cursor.pos()
    }

    /// The source text being scanned, unaffected by scanning.
    pub fn source(&self) -> &'a str {
        self.cursor.source()
    }

    /// Illegal characters skipped so far, in source order.
    pub fn warnings(&self) -> &[LexWarning] {
        &self.warnings
    }

    /// Scan the next token.
    ///
    /// Returns `true` if a token was produced and is now available through
    /// [`curr`](Self::curr). Returns `false` when only whitespace, comments,
    /// or illegal characters remain; the previous token is kept.
    #[allow(
        clippy::should_implement_trait,
        reason = "lookahead protocol: `next` reports success and `curr` yields the token"
    )]
    pub fn next(&mut self) -> bool {
        loop {
            if self.done() {
                return false;
            }
            self.cursor.eat_while(class::is_whitespace);
            let Some(byte) = self.cursor.current() else {
                return false;
            };

            let token = if class::is_digit(byte) {
                self.number()
            } else if class::is_letter(byte) {
                self.keyword_or_ident()
            } else if self.at_operator() {
                self.operator()
            } else if byte == COMMENT_MARKER {
                self.comment();
                continue;
            } else {
                self.illegal();
                continue;
            };

            trace!(%token, pos = self.pos(), "scanned");
            self.token = Some(token);
            return true;
        }
    }

    /// The current token.
    ///
    /// Fails if no token has been scanned yet.
    pub fn curr(&self) -> Result<&Token, ScanError> {
        self.token
            .as_ref()
            .ok_or_else(|| ScanError::no_token(self.pos()))
    }

    /// Require the current token to equal `expected`, then advance.
    ///
    /// On mismatch the cursor does not move. Advancing past the end of the
    /// source is not an error; the last token simply stays current.
    pub fn match_token(&mut self, expected: &Token) -> Result<(), ScanError> {
        let found = self.curr()?;
        if found != expected {
            return Err(ScanError::mismatch(
                self.pos(),
                expected.clone(),
                found.clone(),
            ));
        }
        self.next();
        Ok(())
    }

    /// Consume the scanner, yielding every remaining token.
    pub fn tokens(self) -> Tokens<'a> {
        Tokens { scanner: self }
    }

    // ─── Lexeme Scanners ──────────────────────────────────────────────

    fn number(&mut self) -> Token {
        let start = self.pos();
        self.cursor.eat_while(class::is_digit);
        Token::num(self.cursor.slice_from(start))
    }

    fn keyword_or_ident(&mut self) -> Token {
        let start = self.pos();
        self.cursor.eat_while(class::is_letter);
        self.cursor.eat_while(class::is_legit);
        let lexeme = self.cursor.slice_from(start);
        if self.lexicon.is_keyword(lexeme) {
            Token::keyword(lexeme)
        } else {
            Token::id(lexeme)
        }
    }

    fn at_operator(&self) -> bool {
        self.cursor
            .lookahead(1)
            .is_some_and(|op| self.lexicon.is_operator(op))
    }

    /// Two-character spelling first, falling back to the single character.
    ///
    /// The pair is only tried when at least one byte follows it, so a
    /// two-character operator that ends the source scans as two singles.
    fn operator(&mut self) -> Token {
        let has_room = self.pos() + 2 < self.source().len();
        let len = match self.cursor.lookahead(2) {
            Some(pair) if has_room && self.lexicon.is_operator(pair) => 2,
            _ => 1,
        };
        let start = self.pos();
        self.cursor.advance_n(len);
        Token::op(self.cursor.slice_from(start))
    }

    /// Skip `#...#`. The opening marker may be a run of `#`; the closing
    /// marker consumes at most as many `#` as the opening one, so `#a##b#`
    /// is two comments. An unclosed comment runs to the end of the source.
    fn comment(&mut self) {
        let start = self.pos();
        let width = self.cursor.eat_run(COMMENT_MARKER, usize::MAX);
        self.cursor.eat_until(COMMENT_MARKER);
        self.cursor.eat_run(COMMENT_MARKER, width);
        debug!(start, end = self.pos(), "skipped comment");
    }

    fn illegal(&mut self) {
        let pos = self.pos();
        if let Some(ch) = self.cursor.eat_char() {
            let warning = LexWarning { pos, ch };
            warn!(target: "mini_lexer", pos, ?ch, "{warning}");
            self.warnings.push(warning);
        }
    }
}

/// Iterator over the remaining tokens of a [`Scanner`].
///
/// Created by [`Scanner::tokens`].
#[derive(Debug)]
pub struct Tokens<'a> {
    scanner: Scanner<'a>,
}

impl<'a> Tokens<'a> {
    /// The underlying scanner, for its position and warnings.
    pub fn scanner(&self) -> &Scanner<'a> {
        &self.scanner
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.scanner.next() {
            self.scanner.token.clone()
        } else {
            None
        }
    }
}

/// Scan all of `source` with the standard lexicon.
pub fn tokenize(source: &str) -> Vec<Token> {
    Scanner::new(source).tokens().collect()
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]
