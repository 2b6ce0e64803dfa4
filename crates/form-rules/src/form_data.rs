// File: src/form_data.rs
// Purpose: Submitted form fields, keyed the same way as extracted rules

use crate::normalize::normalize;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

/// Form data from POST/PUT requests.
///
/// Keys are stored in dot notation (`items[0][name]` becomes `items.0.name`)
/// and values are trimmed, so fields line up with a
/// [`RuleMapping`](crate::RuleMapping).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormData {
    fields: BTreeMap<String, String>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from raw field pairs with key normalization and trimming
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut form = Self::new();
        for (key, value) in fields {
            form.insert(key.as_ref(), value.as_ref());
        }
        form
    }

    /// Parse an `application/x-www-form-urlencoded` body
    pub fn from_urlencoded(body: &str) -> Self {
        let fields = body
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_component(k), decode_component(v))
            });

        Self::from_fields(fields)
    }

    /// Flatten a JSON object into dot-notation fields.
    ///
    /// Nested objects and arrays become `a.b` / `a.0` keys; scalars are
    /// stringified and `null` becomes an empty value.
    pub fn from_json(json: &JsonValue) -> Self {
        let mut form = Self::new();
        if let JsonValue::Object(map) = json {
            for (key, value) in map {
                form.flatten_json(key.clone(), value);
            }
        }
        form
    }

    fn flatten_json(&mut self, prefix: String, value: &JsonValue) {
        match value {
            JsonValue::Object(map) => {
                for (key, nested) in map {
                    self.flatten_json(format!("{}.{}", prefix, key), nested);
                }
            }
            JsonValue::Array(items) => {
                for (i, nested) in items.iter().enumerate() {
                    self.flatten_json(format!("{}.{}", prefix, i), nested);
                }
            }
            JsonValue::String(s) => self.insert(&prefix, s),
            JsonValue::Null => self.insert(&prefix, ""),
            other => self.insert(&prefix, &other.to_string()),
        }
    }

    /// Insert a field; the key is normalized and the value trimmed
    pub fn insert(&mut self, key: &str, value: &str) {
        self.fields.insert(normalize(key), value.trim().to_string());
    }

    /// Get a form field value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Get a form field as a specific type
    pub fn get_as<T: std::str::FromStr>(&self, key: &str) -> Option<T> {
        self.fields.get(key)?.parse().ok()
    }

    pub fn has(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|s| s.into_owned())
        .unwrap_or(spaced)
}
