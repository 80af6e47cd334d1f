//! # Rowmill - declarative transaction-record transformation
//!
//! Rowmill ingests tabular transaction records (CSV rows) and produces
//! transformed, filtered, serialized output rows according to a
//! declarative JSON configuration.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────────────┐     ┌─────────────┐
//! │   CSV File  │────▶│   Parser    │────▶│     Pipeline     │────▶│ Output rows │
//! │  (auto-enc) │     │  (Records)  │     │ trim→sub→clear→  │     │  (quoted,   │
//! └─────────────┘     └─────────────┘     │ enrich→project→  │     │   ordered)  │
//!                                         │    serialize     │     └─────────────┘
//!                                         └──────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//! use rowmill::{Pipeline, PipelineConfig, Record};
//!
//! let config = PipelineConfig::from_json(r#"{
//!     "keyColumn": "ITEM1",
//!     "columnOrder": ["ID", "ITEM1", "GROUP"]
//! }"#).unwrap();
//! let master = HashMap::from([("A1".to_string(), "GROUP-A".to_string())]);
//!
//! let pipeline = Pipeline::from_config(&config, master).unwrap();
//! let line = pipeline.render(&Record::from_pairs([("ID", "1"), ("ITEM1", "A1 ")]));
//! assert_eq!(line, "\"1\",\"A1\",\"GROUP-A\"");
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`record`] - Ordered column→value record type
//! - [`hash`] - SHA-256 keying primitive
//! - [`config`] - Declarative JSON configuration
//! - [`parser`] - CSV reading with auto-detection
//! - [`transform`] - Stages, rule matcher, and pipeline

// Core modules
pub mod error;
pub mod record;

// Hashing
pub mod hash;

// Configuration
pub mod config;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{ConfigError, CsvError, PipelineError};

// =============================================================================
// Re-exports - Record & Hash
// =============================================================================

pub use hash::sha256_hex;
pub use record::Record;

// =============================================================================
// Re-exports - Configuration
// =============================================================================

pub use config::{example_config, group_master_from_json, Condition, PipelineConfig, ValuePair};

// =============================================================================
// Re-exports - CSV Parsing
// =============================================================================

pub use parser::{
    decode_content, detect_delimiter, detect_encoding, parse_bytes_auto, parse_csv,
    parse_file_auto, ParseResult,
};

// =============================================================================
// Re-exports - Transformation
// =============================================================================

pub use transform::{
    trim_columns, ColumnProjector, GroupEnricher, Pipeline, RecordSerializer, RegexRule,
    RuleMatcher, ValueClearer, ValueSubstituter,
};
