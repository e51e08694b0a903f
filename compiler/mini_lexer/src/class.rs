//! Character classification.
//!
//! Every byte maps to a [`CharClass`] through a 256-entry table built at
//! compile time. The table is immutable shared data: scanners never build
//! their own copy. Only ASCII bytes belong to any class; every non-ASCII
//! byte classifies as [`CharClass::empty()`].

bitflags::bitflags! {
    /// Classes a source byte can belong to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CharClass: u8 {
        /// Space, newline, or tab.
        const WHITESPACE = 1 << 0;
        /// `0`-`9`.
        const DIGIT = 1 << 1;
        /// `A`-`Z` and `a`-`z`.
        const LETTER = 1 << 2;
        /// Letter or digit; valid after the first character of an identifier.
        const LEGIT = 1 << 3;
    }
}

const fn class_of(byte: u8) -> CharClass {
    match byte {
        b' ' | b'\n' | b'\t' => CharClass::WHITESPACE,
        b'0'..=b'9' => CharClass::DIGIT.union(CharClass::LEGIT),
        b'A'..=b'Z' | b'a'..=b'z' => CharClass::LETTER.union(CharClass::LEGIT),
        _ => CharClass::empty(),
    }
}

const fn build_table() -> [CharClass; 256] {
    let mut table = [CharClass::empty(); 256];
    let mut byte: u8 = 0;
    loop {
        table[byte as usize] = class_of(byte);
        if byte == u8::MAX {
            break;
        }
        byte += 1;
    }
    table
}

static TABLE: [CharClass; 256] = build_table();

/// Classify a single byte.
#[inline]
pub fn classify(byte: u8) -> CharClass {
    TABLE[usize::from(byte)]
}

#[inline]
pub fn is_whitespace(byte: u8) -> bool {
    classify(byte).contains(CharClass::WHITESPACE)
}

#[inline]
pub fn is_digit(byte: u8) -> bool {
    classify(byte).contains(CharClass::DIGIT)
}

#[inline]
pub fn is_letter(byte: u8) -> bool {
    classify(byte).contains(CharClass::LETTER)
}

#[inline]
pub fn is_legit(byte: u8) -> bool {
    classify(byte).contains(CharClass::LEGIT)
}
