//! Symbol table consumed by the mini parser/evaluator.
//!
//! The scanner never touches this crate; it sits one layer above, mapping
//! variable names to integer values.

mod environment;

pub use environment::{Environment, EvalError};
