use crate::error::{EvaluationError, Result};
use log::debug;
use num_bigint::BigInt;
use std::collections::HashMap;

/// Variable bindings of one calculator session.
///
/// Names are case-sensitive strings of Latin letters. Entries are created or
/// overwritten by successful assignments and never removed.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    vars: HashMap<String, BigInt>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value bound to `name`, or `UnknownVariable`.
    pub fn lookup(&self, name: &str) -> Result<BigInt> {
        self.vars
            .get(name)
            .cloned()
            .ok_or(EvaluationError::UnknownVariable)
    }

    /// Bind `name` to `value`, replacing any previous binding.
    pub fn assign(&mut self, name: impl Into<String>, value: BigInt) {
        let name = name.into();
        debug!("{name} = {value}");
        self.vars.insert(name, value);
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
