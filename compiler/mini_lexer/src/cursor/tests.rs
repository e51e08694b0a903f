use super::*;

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let cursor = Cursor::new("abc");
    assert_eq!(cursor.current(), Some(b'a'));
}

#[test]
fn advance_n_moves_forward() {
    let mut cursor = Cursor::new("abc");
    cursor.advance_n(1);
    assert_eq!(cursor.current(), Some(b'b'));
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_n_stops_at_eof() {
    let mut cursor = Cursor::new("ab");
    cursor.advance_n(5);
    assert_eq!(cursor.pos(), 2);
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), None);
}

#[test]
fn empty_source_is_eof() {
    let cursor = Cursor::new("");
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), None);
}

// === Lookahead ===

#[test]
fn lookahead_within_bounds() {
    let cursor = Cursor::new("+=x");
    assert_eq!(cursor.lookahead(2), Some("+="));
}

#[test]
fn lookahead_past_eof_is_none() {
    let mut cursor = Cursor::new("a+");
    cursor.advance_n(1);
    assert_eq!(cursor.lookahead(1), Some("+"));
    assert_eq!(cursor.lookahead(2), None);
}

#[test]
fn lookahead_never_splits_a_char() {
    let cursor = Cursor::new("+é");
    // '+' is one byte, 'é' is two, so two bytes end mid-character.
    assert_eq!(cursor.lookahead(2), None);
    assert_eq!(cursor.lookahead(3), Some("+é"));
}

// === Eating ===

#[test]
fn eat_while_stops_at_predicate_failure() {
    let mut cursor = Cursor::new("123abc");
    cursor.eat_while(|b| b.is_ascii_digit());
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.slice_from(0), "123");
}

#[test]
fn eat_while_stops_at_eof() {
    let mut cursor = Cursor::new("   ");
    cursor.eat_while(|b| b == b' ');
    assert!(cursor.is_eof());
}

#[test]
fn eat_until_finds_byte() {
    let mut cursor = Cursor::new("abc#def");
    cursor.eat_until(b'#');
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.current(), Some(b'#'));
}

#[test]
fn eat_until_missing_byte_moves_to_eof() {
    let mut cursor = Cursor::new("abc");
    cursor.eat_until(b'#');
    assert!(cursor.is_eof());
}

#[test]
fn eat_char_consumes_whole_scalar() {
    let mut cursor = Cursor::new("λx");
    assert_eq!(cursor.eat_char(), Some('λ'));
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.eat_char(), Some('x'));
    assert_eq!(cursor.eat_char(), None);
}

#[test]
fn copy_snapshot_is_independent() {
    let mut cursor = Cursor::new("abc");
    let snapshot = cursor;
    cursor.advance_n(2);
    assert_eq!(snapshot.pos(), 0);
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn eat_run_respects_max() {
    let mut cursor = Cursor::new("####x");
    assert_eq!(cursor.eat_run(b'#', 3), 3);
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.eat_run(b'#', usize::MAX), 1);
    assert_eq!(cursor.eat_run(b'#', usize::MAX), 0);
    assert_eq!(cursor.current(), Some(b'x'));
}
