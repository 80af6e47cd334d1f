//! Conditional value substitution driven by a companion state column.
//!
//! A target column's value is replaced when the value of its companion
//! state column (in the same input record) fully matches the configured
//! pattern. The state columns themselves pass through unchanged.

use std::collections::HashMap;

use regex::Regex;

use super::compile_full_match;
use crate::error::ConfigError;
use crate::record::Record;

/// Substitutes target-column values based on their state columns.
#[derive(Debug)]
pub struct ValueSubstituter {
    /// Target column → companion state column.
    value_pairs: HashMap<String, String>,
    pattern: Regex,
    replacement: String,
}

impl ValueSubstituter {
    /// Build a substituter; fails if the pattern does not compile.
    pub fn new(
        value_pairs: HashMap<String, String>,
        pattern: &str,
        replacement: &str,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            value_pairs,
            pattern: compile_full_match(pattern)?,
            replacement: replacement.to_string(),
        })
    }

    /// Apply the substitution to one record, producing a new record.
    ///
    /// The state column is read from the input record, never from the
    /// output in progress. A missing state column leaves the target
    /// untouched.
    pub fn apply(&self, record: &Record) -> Record {
        record
            .iter()
            .map(|(name, value)| {
                let state_column = match self.value_pairs.get(name) {
                    Some(state) => state,
                    None => return (name.to_string(), value.to_string()),
                };
                match record.get(state_column) {
                    Some(state) if self.pattern.is_match(state) => {
                        (name.to_string(), self.replacement.clone())
                    }
                    _ => (name.to_string(), value.to_string()),
                }
            })
            .collect()
    }
}
