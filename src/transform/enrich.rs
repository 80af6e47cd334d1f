//! Group-lookup enrichment via an external master mapping.

use std::collections::HashMap;

use crate::record::Record;

/// Adds (or overwrites) a derived group column from a master lookup.
///
/// The key column's value is looked up in the group master; on a miss the
/// key's own value is used as the group label. Never an error, never an
/// empty result for a present key.
#[derive(Debug)]
pub struct GroupEnricher {
    master: HashMap<String, String>,
    key_column: String,
    group_column: String,
}

impl GroupEnricher {
    pub fn new(
        master: HashMap<String, String>,
        key_column: impl Into<String>,
        group_column: impl Into<String>,
    ) -> Self {
        Self {
            master,
            key_column: key_column.into(),
            group_column: group_column.into(),
        }
    }

    /// Apply the enrichment to one record, producing a new record.
    ///
    /// Additive: all original columns are preserved. A missing key column
    /// behaves as an empty key.
    pub fn apply(&self, record: &Record) -> Record {
        let key = record.get(&self.key_column).unwrap_or("");
        let group = self.master.get(key).map(String::as_str).unwrap_or(key);

        let mut out = record.clone();
        out.set(&self.group_column, group);
        out
    }
}
