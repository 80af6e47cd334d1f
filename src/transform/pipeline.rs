//! Pipeline composition: one ordered transformation applied per record.
//!
//! Stage order is fixed and significant:
//!
//! ```text
//! trim → substitute? → clear? → enrich → project → serialize
//! ```
//!
//! Group lookup must see trimmed (and, when configured, substituted and
//! cleared) values, and projection runs after enrichment so the derived
//! group column survives it. The substitution and clearing stages only
//! exist when their configuration is supplied; the minimal pipeline is
//! trim → enrich → project → serialize.
//!
//! Every stage is a pure function of its input record, so records have no
//! ordering dependency on each other; [`Pipeline::run`] simply preserves
//! input order in its output.

use std::collections::HashMap;

use crate::config::PipelineConfig;
use crate::error::ConfigError;
use crate::record::Record;

use super::{
    trim_columns, ColumnProjector, GroupEnricher, RecordSerializer, ValueClearer, ValueSubstituter,
};

/// The composed per-record transformation.
///
/// Building a pipeline compiles every configured regex, so a malformed
/// pattern fails here once, never during a record.
#[derive(Debug)]
pub struct Pipeline {
    substituter: Option<ValueSubstituter>,
    clearer: Option<ValueClearer>,
    enricher: GroupEnricher,
    projector: ColumnProjector,
    serializer: RecordSerializer,
}

impl Pipeline {
    /// Build a pipeline from configuration plus the group master.
    pub fn from_config(
        config: &PipelineConfig,
        group_master: HashMap<String, String>,
    ) -> Result<Self, ConfigError> {
        let substituter = if config.value_pairs.is_empty() {
            None
        } else {
            let condition = config.condition.as_ref().ok_or(ConfigError::MissingCondition)?;
            Some(ValueSubstituter::new(
                config.value_pair_map(),
                &condition.pattern,
                &condition.replacement,
            )?)
        };

        let clearer = if config.clear_conditions.is_empty() {
            None
        } else {
            Some(ValueClearer::new(&config.clear_conditions)?)
        };

        Ok(Self {
            substituter,
            clearer,
            enricher: GroupEnricher::new(group_master, &config.key_column, &config.group_column),
            projector: ColumnProjector::new(config.filter_set()),
            serializer: RecordSerializer::new(config.column_order.clone()),
        })
    }

    /// Transform one record through every stage except serialization.
    pub fn transform(&self, record: &Record) -> Record {
        let mut record = trim_columns(record);
        if let Some(ref substituter) = self.substituter {
            record = substituter.apply(&record);
        }
        if let Some(ref clearer) = self.clearer {
            record = clearer.apply(&record);
        }
        let record = self.enricher.apply(&record);
        self.projector.apply(&record)
    }

    /// Transform and serialize one record.
    pub fn render(&self, record: &Record) -> String {
        self.serializer.render(&self.transform(record))
    }

    /// Transform a batch of records into serialized lines, in input order.
    pub fn run(&self, records: &[Record]) -> Vec<String> {
        records.iter().map(|r| self.render(r)).collect()
    }

    /// The output column order, for header emission by the caller.
    pub fn columns(&self) -> &[String] {
        self.serializer.columns()
    }
}
