use super::*;
use pretty_assertions::assert_eq;

#[test]
fn constructors_set_kind() {
    assert_eq!(Token::num("42").kind(), "num");
    assert_eq!(Token::id("x").kind(), "id");
    assert_eq!(Token::op("+").kind(), "+");
    assert_eq!(Token::keyword("while").kind(), "while");
}

#[test]
fn op_kind_equals_lexeme() {
    let tok = Token::op(";");
    assert_eq!(tok.kind(), tok.lexeme());
}

#[test]
fn equality_requires_kind_and_lexeme() {
    assert_eq!(Token::num("1"), Token::new("num", "1"));
    assert_ne!(Token::num("1"), Token::num("2"));
    assert_ne!(Token::id("x"), Token::keyword("x"));
}

#[test]
fn display_shows_kind_and_lexeme() {
    assert_eq!(Token::num("12").to_string(), "<num, 12>");
    assert_eq!(Token::op("=").to_string(), "<=, =>");
}
