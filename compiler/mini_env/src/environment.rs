//! Name-to-value bindings.

use rustc_hash::FxHashMap;
use tracing::trace;

/// Evaluation-time failure raised by [`Environment`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("undefined variable '{name}'")]
    Undefined { name: String },
}

/// Flat mapping from variable names to integer values.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    bindings: FxHashMap<String, i64>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, replacing any earlier binding.
    ///
    /// Returns `value` so an assignment can be used as an expression.
    pub fn put(&mut self, name: impl Into<String>, value: i64) -> i64 {
        let name = name.into();
        trace!(%name, value, "bind");
        self.bindings.insert(name, value);
        value
    }

    /// Look up `name`.
    pub fn get(&self, name: &str) -> Result<i64, EvalError> {
        self.bindings
            .get(name)
            .copied()
            .ok_or_else(|| EvalError::Undefined {
                name: name.to_owned(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests;
