//! Ordered column→value record type.
//!
//! A [`Record`] is one row of tabular transaction data. Column names are
//! unique within a record and insertion order is preserved, so a record
//! read from a CSV row keeps its header order. Values are plain strings;
//! a column that is missing from the source data is simply absent, and
//! every pipeline stage treats absence as an empty string.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// One row of tabular data as ordered column→value pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    columns: Vec<(String, String)>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self { columns: Vec::new() }
    }

    /// Build a record from name/value pairs, keeping their order.
    ///
    /// A repeated column name overwrites the earlier value in place.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut record = Self::new();
        for (name, value) in pairs {
            record.set(name, value);
        }
        record
    }

    /// Value of a column, or `None` when the column is absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set a column's value, overwriting in place when it already exists.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.columns.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.columns.push((name, value)),
        }
    }

    /// Whether the record has a value for this column.
    pub fn contains(&self, name: &str) -> bool {
        self.columns.iter().any(|(n, _)| n == name)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the record has no columns at all.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterate over `(column, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(n, _)| n.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, value) in &self.columns {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let record = Record::from_pairs([("ID", "1"), ("ITEM1", "A1"), ("ITEM2", "v")]);
        let names: Vec<&str> = record.column_names().collect();
        assert_eq!(names, vec!["ID", "ITEM1", "ITEM2"]);
    }

    #[test]
    fn test_set_overwrites_in_place() {
        let mut record = Record::from_pairs([("ID", "1"), ("GROUP", "old")]);
        record.set("GROUP", "GROUP-A");

        assert_eq!(record.len(), 2);
        assert_eq!(record.get("GROUP"), Some("GROUP-A"));
        let names: Vec<&str> = record.column_names().collect();
        assert_eq!(names, vec!["ID", "GROUP"]);
    }

    #[test]
    fn test_absent_column() {
        let record = Record::from_pairs([("ID", "1")]);
        assert_eq!(record.get("ITEM1"), None);
        assert!(!record.contains("ITEM1"));
    }

    #[test]
    fn test_empty_record() {
        let record = Record::new();
        assert!(record.is_empty());
        assert_eq!(record.len(), 0);
    }

    #[test]
    fn test_serializes_as_json_object() {
        let record = Record::from_pairs([("ID", "1"), ("ITEM1", "A1")]);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"ID":"1","ITEM1":"A1"}"#);
    }
}
