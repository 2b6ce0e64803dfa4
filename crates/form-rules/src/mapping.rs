// File: src/mapping.rs
// Purpose: Ordered field -> rule mapping produced by extraction

use indexmap::map::{IntoIter, Iter};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Field name (dot notation) to rule string, in markup order.
///
/// Inserting a name that is already present replaces its rule but keeps the
/// position of the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleMapping {
    rules: IndexMap<String, String>,
}

impl RuleMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a rule, returning the rule it replaced (if any)
    pub fn insert(&mut self, field: impl Into<String>, rule: impl Into<String>) -> Option<String> {
        self.rules.insert(field.into(), rule.into())
    }

    /// Get the rule string for a field
    pub fn get(&self, field: &str) -> Option<&str> {
        self.rules.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.rules.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Field names in mapping order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn iter(&self) -> Iter<'_, String, String> {
        self.rules.iter()
    }

    pub fn as_map(&self) -> &IndexMap<String, String> {
        &self.rules
    }

    pub fn into_inner(self) -> IndexMap<String, String> {
        self.rules
    }
}

impl<'a> IntoIterator for &'a RuleMapping {
    type Item = (&'a String, &'a String);
    type IntoIter = Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl IntoIterator for RuleMapping {
    type Item = (String, String);
    type IntoIter = IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RuleMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = RuleMapping::new();
        for (field, rule) in iter {
            mapping.insert(field, rule);
        }
        mapping
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_repeated_field_keeps_first_position() {
        let mut mapping = RuleMapping::new();
        mapping.insert("x", "required");
        mapping.insert("y", "email");
        let replaced = mapping.insert("x", "numeric");

        assert_eq!(replaced.as_deref(), Some("required"));
        assert_eq!(mapping.get("x"), Some("numeric"));
        assert_eq!(mapping.fields().collect::<Vec<_>>(), vec!["x", "y"]);
    }

    #[test]
    fn test_serializes_as_ordered_object() {
        let mapping: RuleMapping = [("zeta", "required"), ("alpha", "email")]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&mapping).unwrap();
        assert_eq!(json, r#"{"zeta":"required","alpha":"email"}"#);
    }
}
