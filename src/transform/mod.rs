//! Record transformation stages and their composition.
//!
//! Each stage is a pure `&Record -> Record` function object built once
//! from validated configuration. [`pipeline::Pipeline`] applies them in a
//! fixed order per record.

pub mod clear;
pub mod enrich;
pub mod matcher;
pub mod pipeline;
pub mod project;
pub mod serialize;
pub mod substitute;

pub use clear::ValueClearer;
pub use enrich::GroupEnricher;
pub use matcher::{RegexRule, RuleMatcher};
pub use pipeline::Pipeline;
pub use project::ColumnProjector;
pub use serialize::RecordSerializer;
pub use substitute::ValueSubstituter;

use regex::Regex;

use crate::error::ConfigError;
use crate::record::Record;

/// Compile a pattern for full-string matching.
///
/// Stage patterns must consume the entire value, not merely a substring,
/// so the pattern is anchored before compilation.
pub(crate) fn compile_full_match(pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(&format!("^(?:{pattern})$")).map_err(|source| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Trim surrounding whitespace from every value in a record.
///
/// Always the first pipeline stage, so downstream stages (group lookup in
/// particular) see the trimmed values.
pub fn trim_columns(record: &Record) -> Record {
    record
        .iter()
        .map(|(name, value)| (name, value.trim()))
        .collect()
}
