//! Column projection to a retained set.

use std::collections::HashSet;

use crate::record::Record;

/// Restricts a record to the configured column set.
///
/// Values are unchanged and input order is preserved; the real output
/// order is imposed later by serialization. A record with no matching
/// columns projects to an empty record.
#[derive(Debug)]
pub struct ColumnProjector {
    keep: HashSet<String>,
}

impl ColumnProjector {
    pub fn new(keep: HashSet<String>) -> Self {
        Self { keep }
    }

    /// Apply the projection to one record, producing a new record.
    pub fn apply(&self, record: &Record) -> Record {
        record
            .iter()
            .filter(|(name, _)| self.keep.contains(*name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keep(names: &[&str]) -> HashSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_keeps_only_listed_columns() {
        let projector = ColumnProjector::new(keep(&["ITEM1", "ITEM2"]));
        let out = projector.apply(&Record::from_pairs([
            ("ITEM1", "value1"),
            ("ITEM2", "value2"),
            ("ITEM3", "value3"),
        ]));

        assert_eq!(out.len(), 2);
        assert_eq!(out.get("ITEM1"), Some("value1"));
        assert_eq!(out.get("ITEM2"), Some("value2"));
        assert_eq!(out.get("ITEM3"), None);
    }

    #[test]
    fn test_values_pass_through_untouched() {
        let projector = ColumnProjector::new(keep(&["ITEM1"]));
        let out = projector.apply(&Record::from_pairs([("ITEM1", " value1 ")]));
        assert_eq!(out.get("ITEM1"), Some(" value1 "));
    }

    #[test]
    fn test_no_matching_columns_yields_empty_record() {
        let projector = ColumnProjector::new(keep(&["ITEM4", "ITEM5"]));
        let out = projector.apply(&Record::from_pairs([("ITEM1", "value1")]));
        assert!(out.is_empty());
    }

    #[test]
    fn test_empty_filter_set() {
        let projector = ColumnProjector::new(HashSet::new());
        let out = projector.apply(&Record::from_pairs([("ITEM1", "value1")]));
        assert!(out.is_empty());
    }

    #[test]
    fn test_empty_record() {
        let projector = ColumnProjector::new(keep(&["ITEM1"]));
        assert!(projector.apply(&Record::new()).is_empty());
    }
}
