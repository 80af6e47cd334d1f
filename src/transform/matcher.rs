//! First-match-wins regex rule classification.
//!
//! This is the second configuration shape seen in production: an ordered
//! list of rules, each carrying several patterns and one result. Unlike
//! the pipeline stages, rule patterns use *search* semantics, a pattern
//! fires when it matches anywhere in the value.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// One classification rule: any matching pattern yields the result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegexRule {
    pub patterns: Vec<String>,
    pub result: String,
}

/// Ordered rule list, evaluated first-match-wins.
#[derive(Debug)]
pub struct RuleMatcher {
    rules: Vec<(Vec<Regex>, String)>,
}

impl RuleMatcher {
    /// Compile all rule patterns; fails on the first bad pattern.
    pub fn new(rules: &[RegexRule]) -> Result<Self, ConfigError> {
        let mut compiled = Vec::with_capacity(rules.len());
        for rule in rules {
            let mut patterns = Vec::with_capacity(rule.patterns.len());
            for pattern in &rule.patterns {
                let regex = Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })?;
                patterns.push(regex);
            }
            compiled.push((patterns, rule.result.clone()));
        }
        Ok(Self { rules: compiled })
    }

    /// Parse a rule list from JSON and compile it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let rules: Vec<RegexRule> = serde_json::from_str(json)?;
        Self::new(&rules)
    }

    /// Result of the first rule whose patterns match the value, if any.
    pub fn classify(&self, value: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|(patterns, _)| patterns.iter().any(|p| p.is_match(value)))
            .map(|(_, result)| result.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> RuleMatcher {
        RuleMatcher::new(&[
            RegexRule {
                patterns: vec!["^a".into(), "b$".into()],
                result: "match1".into(),
            },
            RegexRule {
                patterns: vec!["^c".into()],
                result: "match2".into(),
            },
        ])
        .unwrap()
    }

    #[test]
    fn test_first_match_wins() {
        let m = matcher();
        assert_eq!(m.classify("a2"), Some("match1"));
        assert_eq!(m.classify("cc"), Some("match2"));
        assert_eq!(m.classify("b"), Some("match1"));
    }

    #[test]
    fn test_no_match_yields_none() {
        assert_eq!(matcher().classify("100"), None);
    }

    #[test]
    fn test_search_semantics() {
        // "b$" matches "ab" anywhere-in-string, no full-match anchoring here.
        assert_eq!(matcher().classify("xxab"), Some("match1"));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[{"patterns": ["^a"], "result": "match1"}]"#;
        let m = RuleMatcher::from_json(json).unwrap();
        assert_eq!(m.classify("abc"), Some("match1"));
    }

    #[test]
    fn test_bad_pattern_fails_construction() {
        let result = RuleMatcher::new(&[RegexRule {
            patterns: vec!["(".into()],
            result: "broken".into(),
        }]);
        assert!(matches!(result, Err(ConfigError::InvalidPattern { .. })));
    }
}
