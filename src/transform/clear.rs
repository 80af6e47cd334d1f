//! Conditional value clearing by per-column regex.

use std::collections::HashMap;

use regex::Regex;

use super::compile_full_match;
use crate::error::ConfigError;
use crate::record::Record;

/// Blanks a column's value when it fully matches the column's pattern.
#[derive(Debug)]
pub struct ValueClearer {
    rules: HashMap<String, Regex>,
}

impl ValueClearer {
    /// Compile one rule per configured column; fails on the first bad pattern.
    pub fn new(conditions: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let mut rules = HashMap::with_capacity(conditions.len());
        for (column, pattern) in conditions {
            rules.insert(column.clone(), compile_full_match(pattern)?);
        }
        Ok(Self { rules })
    }

    /// Apply the clearing rules to one record, producing a new record.
    pub fn apply(&self, record: &Record) -> Record {
        record
            .iter()
            .map(|(name, value)| {
                let cleared = match self.rules.get(name) {
                    Some(rule) if rule.is_match(value) => "",
                    _ => value,
                };
                (name, cleared)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conditions(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_clears_matching_values() {
        let clearer =
            ValueClearer::new(&conditions(&[("ITEM1", "^a.*"), ("ITEM2", "^va.+$")])).unwrap();

        let out = clearer.apply(&Record::from_pairs([
            ("ITEM1", "apple"),
            ("ITEM2", "value2"),
            ("ITEM3", "other"),
        ]));
        assert_eq!(out.get("ITEM1"), Some(""));
        assert_eq!(out.get("ITEM2"), Some(""));
        assert_eq!(out.get("ITEM3"), Some("other"));
    }

    #[test]
    fn test_keeps_non_matching_values() {
        let clearer =
            ValueClearer::new(&conditions(&[("ITEM1", "^a.*"), ("ITEM2", "^va.+$")])).unwrap();

        let out = clearer.apply(&Record::from_pairs([
            ("ITEM1", "banana"),
            ("ITEM2", "valid"),
            ("ITEM3", "other"),
        ]));
        assert_eq!(out.get("ITEM1"), Some("banana"));
        assert_eq!(out.get("ITEM2"), Some(""));
        assert_eq!(out.get("ITEM3"), Some("other"));
    }

    #[test]
    fn test_pattern_must_match_fully() {
        // "va" alone requires the whole value to be exactly "va".
        let clearer = ValueClearer::new(&conditions(&[("ITEM2", "va")])).unwrap();

        let out = clearer.apply(&Record::from_pairs([("ITEM2", "value2")]));
        assert_eq!(out.get("ITEM2"), Some("value2"));

        let out = clearer.apply(&Record::from_pairs([("ITEM2", "va")]));
        assert_eq!(out.get("ITEM2"), Some(""));
    }

    #[test]
    fn test_unconfigured_columns_pass_through() {
        let clearer = ValueClearer::new(&conditions(&[("ITEM1", "^A.*")])).unwrap();
        let record = Record::from_pairs([("ID", "1"), ("ITEM3", "B3")]);
        assert_eq!(clearer.apply(&record), record);
    }

    #[test]
    fn test_bad_pattern_fails_construction() {
        let result = ValueClearer::new(&conditions(&[("ITEM1", "[")]));
        assert!(matches!(result, Err(ConfigError::InvalidPattern { .. })));
    }
}
