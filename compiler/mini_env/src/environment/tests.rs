use super::*;
use pretty_assertions::assert_eq;

#[test]
fn put_returns_value() {
    let mut env = Environment::new();
    assert_eq!(env.put("x", 5), 5);
    assert_eq!(env.get("x"), Ok(5));
}

#[test]
fn put_overwrites() {
    let mut env = Environment::new();
    env.put("x", 1);
    env.put("x", -7);
    assert_eq!(env.get("x"), Ok(-7));
    assert_eq!(env.len(), 1);
}

#[test]
fn get_undefined_fails() {
    let env = Environment::new();
    let err = env.get("y");
    assert_eq!(
        err,
        Err(EvalError::Undefined {
            name: "y".to_owned()
        })
    );
    assert_eq!(
        EvalError::Undefined {
            name: "y".to_owned()
        }
        .to_string(),
        "undefined variable 'y'"
    );
}

#[test]
fn contains_and_is_empty() {
    let mut env = Environment::new();
    assert!(env.is_empty());
    assert!(!env.contains("a"));
    env.put("a", 0);
    assert!(env.contains("a"));
    assert!(!env.is_empty());
}

#[test]
fn names_are_case_sensitive() {
    let mut env = Environment::new();
    env.put("Ab", 1);
    assert!(env.get("ab").is_err());
}
