//! Error types for the rowmill transformation pipeline.
//!
//! - [`CsvError`] - CSV reading errors
//! - [`ConfigError`] - configuration/regex compilation errors
//! - [`PipelineError`] - top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// CSV Reading Errors
// =============================================================================

/// Errors while reading CSV input.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Failed to read file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to decode content with the detected encoding.
    #[error("Failed to decode content: {0}")]
    Encoding(String),

    /// Malformed CSV data.
    #[error("Invalid CSV format: {0}")]
    Malformed(#[from] csv::Error),

    /// Empty file.
    #[error("CSV input is empty")]
    EmptyInput,

    /// No headers found.
    #[error("No headers found in CSV")]
    NoHeaders,
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors raised when configuration is loaded or a pipeline is built.
///
/// All regex compilation happens at construction time, so a malformed
/// pattern surfaces here once and never per record.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A regex pattern failed to compile.
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Value pairs were supplied without a substitution condition.
    #[error("valuePairs supplied without a condition")]
    MissingCondition,

    /// JSON deserialization error.
    #[error("Configuration JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error while reading a configuration file.
    #[error("Configuration IO error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline orchestration errors.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// CSV reading error.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
