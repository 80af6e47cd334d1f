//! Delimited serialization of records in a fixed column order.

use crate::record::Record;

/// Renders a record as a quoted, comma-joined line.
///
/// Columns are emitted in the configured order regardless of the record's
/// internal key order; absent columns render as empty strings. No
/// escaping of embedded quotes or delimiters is performed, values are
/// assumed not to contain them. Header emission is the caller's job,
/// using [`RecordSerializer::columns`].
#[derive(Debug)]
pub struct RecordSerializer {
    order: Vec<String>,
}

impl RecordSerializer {
    pub fn new(order: Vec<String>) -> Self {
        Self { order }
    }

    /// The configured column order.
    pub fn columns(&self) -> &[String] {
        &self.order
    }

    /// Serialize one record. No trailing delimiter, no header.
    pub fn render(&self, record: &Record) -> String {
        self.order
            .iter()
            .map(|column| format!("\"{}\"", record.get(column).unwrap_or("")))
            .collect::<Vec<_>>()
            .join(",")
    }
}
