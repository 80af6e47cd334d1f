//! Declarative pipeline configuration.
//!
//! The configuration is plain JSON with camelCase keys, matching the
//! production schema:
//!
//! ```json
//! {
//!   "valuePairs": [{"item": "ITEM2", "state": "STAT-ITEM2"}],
//!   "condition": {"pattern": "1|3", "replacement": "@"},
//!   "clearConditions": {"ITEM1": "^A.*"},
//!   "keyColumn": "ITEM1",
//!   "groupColumn": "GROUP",
//!   "columnOrder": ["ID", "ITEM1", "ITEM2", "GROUP"]
//! }
//! ```
//!
//! `valuePairs`/`condition` and `clearConditions` are optional extensions;
//! the minimal pipeline needs only the key column and the column order.
//! The group master is supplied separately (it usually comes from a
//! different source than the per-run configuration).

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A target column and its companion state column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuePair {
    /// Target column whose value may be substituted.
    pub item: String,
    /// Companion column whose value gates the substitution.
    pub state: String,
}

/// The single pattern/replacement rule for the substitution stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Condition {
    pub pattern: String,
    pub replacement: String,
}

/// Complete pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineConfig {
    /// Target/state column pairs for the substitution stage.
    #[serde(default)]
    pub value_pairs: Vec<ValuePair>,

    /// Substitution rule; required when `value_pairs` is non-empty.
    #[serde(default)]
    pub condition: Option<Condition>,

    /// Column → pattern rules for the clearing stage.
    #[serde(default)]
    pub clear_conditions: HashMap<String, String>,

    /// Column whose value keys the group-master lookup.
    pub key_column: String,

    /// Derived column written by the group lookup.
    #[serde(default = "default_group_column")]
    pub group_column: String,

    /// Serialization order of the output columns.
    pub column_order: Vec<String>,

    /// Columns retained by projection; defaults to `column_order`.
    #[serde(default)]
    pub keep_columns: Option<Vec<String>>,
}

fn default_group_column() -> String {
    "GROUP".to_string()
}

impl PipelineConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The value pairs as a target→state lookup map.
    pub fn value_pair_map(&self) -> HashMap<String, String> {
        self.value_pairs
            .iter()
            .map(|p| (p.item.clone(), p.state.clone()))
            .collect()
    }

    /// The projection filter set: `keepColumns` when given, else the
    /// column order.
    pub fn filter_set(&self) -> HashSet<String> {
        self.keep_columns
            .as_ref()
            .unwrap_or(&self.column_order)
            .iter()
            .cloned()
            .collect()
    }
}

/// Parse a group master from a JSON object of key→label strings.
pub fn group_master_from_json(json: &str) -> Result<HashMap<String, String>, ConfigError> {
    Ok(serde_json::from_str(json)?)
}

/// An example configuration for documentation and the CLI.
pub fn example_config() -> PipelineConfig {
    PipelineConfig {
        value_pairs: vec![ValuePair {
            item: "ITEM2".to_string(),
            state: "STAT-ITEM2".to_string(),
        }],
        condition: Some(Condition {
            pattern: "1|3".to_string(),
            replacement: "@".to_string(),
        }),
        clear_conditions: HashMap::from([("ITEM1".to_string(), "^A.*".to_string())]),
        key_column: "ITEM1".to_string(),
        group_column: default_group_column(),
        column_order: vec![
            "ID".to_string(),
            "ITEM1".to_string(),
            "ITEM2".to_string(),
            "GROUP".to_string(),
        ],
        keep_columns: None,
    }
}
