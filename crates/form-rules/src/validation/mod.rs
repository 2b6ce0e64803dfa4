// File: src/validation/mod.rs
// Purpose: Check submitted form data against an extracted rule mapping
//
// The extractor hands rule strings through untouched; this is the layer that
// gives them meaning.

use crate::form_data::FormData;
use crate::mapping::RuleMapping;
use indexmap::IndexMap;

pub mod rules;
pub mod validators;

pub use rules::{parse_rules, Rule};

/// Result of validation with errors
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Field name to error messages, in rule-mapping order
    pub errors: IndexMap<String, Vec<String>>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        Self {
            is_valid: true,
            errors: IndexMap::new(),
        }
    }

    /// Create a failed validation result
    pub fn failure(errors: IndexMap<String, Vec<String>>) -> Self {
        Self {
            is_valid: false,
            errors,
        }
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get first error for a specific field
    pub fn get_error(&self, field: &str) -> Option<&str> {
        self.errors
            .get(field)
            .and_then(|errors| errors.first())
            .map(String::as_str)
    }

    /// Get all errors for a specific field
    pub fn get_errors(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(Vec::as_slice)
    }
}

/// Validate every field named in `rules` against `form`
pub fn validate(rules: &RuleMapping, form: &FormData) -> ValidationResult {
    let mut errors = IndexMap::new();

    for (field, rule_string) in rules {
        let messages = validate_field(field, &parse_rules(rule_string), form);
        if !messages.is_empty() {
            errors.insert(field.clone(), messages);
        }
    }

    if errors.is_empty() {
        ValidationResult::success()
    } else {
        tracing::debug!("Validation failed for {} field(s)", errors.len());
        ValidationResult::failure(errors)
    }
}

/// Evaluate parsed rules for one field, returning error messages
pub fn validate_field(field: &str, rules: &[Rule], form: &FormData) -> Vec<String> {
    let value = form.get(field).unwrap_or("");

    if value.is_empty() {
        // Absent fields only fail `required`
        return if rules.contains(&Rule::Required) {
            vec![format!("The {} field is required.", field)]
        } else {
            Vec::new()
        };
    }

    let numeric = rules.iter().any(Rule::is_numeric_marker);
    let size = || -> Option<f64> {
        if numeric {
            value.parse().ok()
        } else {
            Some(value.chars().count() as f64)
        }
    };
    let unit = if numeric { "" } else { " characters" };

    let mut messages = Vec::new();
    for rule in rules {
        let failure = match rule {
            Rule::Required | Rule::Nullable => None,
            Rule::Email => (!validators::is_valid_email(value))
                .then(|| format!("The {} field must be a valid email address.", field)),
            Rule::Url => (!validators::is_valid_url(value))
                .then(|| format!("The {} field must be a valid URL.", field)),
            Rule::Numeric => (!validators::is_numeric(value))
                .then(|| format!("The {} field must be a number.", field)),
            Rule::Integer => (!validators::is_integer(value))
                .then(|| format!("The {} field must be an integer.", field)),
            Rule::Alpha => (!validators::is_alpha(value))
                .then(|| format!("The {} field must only contain letters.", field)),
            Rule::AlphaNum => (!validators::is_alpha_num(value))
                .then(|| format!("The {} field must only contain letters and numbers.", field)),
            Rule::Min(min) => size().filter(|s| s < min).map(|_| {
                format!("The {} field must be at least {}{}.", field, fmt_num(*min), unit)
            }),
            Rule::Max(max) => size().filter(|s| s > max).map(|_| {
                format!("The {} field must not be greater than {}{}.", field, fmt_num(*max), unit)
            }),
            Rule::Between(lo, hi) => size().filter(|s| s < lo || s > hi).map(|_| {
                format!(
                    "The {} field must be between {} and {}{}.",
                    field,
                    fmt_num(*lo),
                    fmt_num(*hi),
                    unit
                )
            }),
            Rule::In(allowed) => (!allowed.iter().any(|a| a == value))
                .then(|| format!("The selected {} is invalid.", field)),
            Rule::Regex(pattern) => (!validators::matches_regex(value, pattern))
                .then(|| format!("The {} field format is invalid.", field)),
            Rule::Confirmed => {
                let confirmation = form.get(&format!("{}_confirmation", field));
                (confirmation != Some(value))
                    .then(|| format!("The {} field confirmation does not match.", field))
            }
            Rule::Unknown(name) => {
                tracing::warn!("Ignoring unknown rule {:?} on field {}", name, field);
                None
            }
        };

        messages.extend(failure);
    }

    messages
}

fn fmt_num(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn mapping(pairs: &[(&str, &str)]) -> RuleMapping {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_valid_form() {
        let rules = mapping(&[("email", "required|email"), ("age", "integer|min:18")]);
        let form = FormData::from_fields([("email", "ada@example.com"), ("age", "36")]);

        let result = validate(&rules, &form);
        assert!(result.is_valid);
        assert!(!result.has_errors());
    }

    #[test]
    fn test_result_constructors() {
        assert!(ValidationResult::success().is_valid);

        let failed = ValidationResult::failure(IndexMap::new());
        assert!(!failed.is_valid);
        assert!(!failed.has_errors());
    }

    #[test]
    fn test_required_short_circuits() {
        let rules = mapping(&[("email", "required|email")]);
        let result = validate(&rules, &FormData::new());

        assert!(!result.is_valid);
        assert_eq!(
            result.get_errors("email").unwrap(),
            &["The email field is required.".to_string()]
        );
    }

    #[test]
    fn test_optional_empty_field_passes() {
        let rules = mapping(&[("website", "nullable|url")]);
        let form = FormData::from_fields([("website", "   ")]);
        assert!(validate(&rules, &form).is_valid);
    }

    #[test]
    fn test_size_rules_by_length_or_value() {
        let rules = mapping(&[("name", "min:3"), ("qty", "numeric|max:10")]);
        let form = FormData::from_fields([("name", "Al"), ("qty", "12")]);
        let result = validate(&rules, &form);

        assert_eq!(
            result.get_error("name"),
            Some("The name field must be at least 3 characters.")
        );
        assert_eq!(
            result.get_error("qty"),
            Some("The qty field must not be greater than 10.")
        );
    }

    #[test]
    fn test_in_and_confirmed() {
        let rules = mapping(&[("role", "in:admin,user"), ("password", "required|confirmed")]);
        let form = FormData::from_fields([
            ("role", "root"),
            ("password", "hunter22"),
            ("password_confirmation", "hunter23"),
        ]);
        let result = validate(&rules, &form);

        assert_eq!(result.get_error("role"), Some("The selected role is invalid."));
        assert_eq!(
            result.get_error("password"),
            Some("The password field confirmation does not match.")
        );
    }

    #[test]
    fn test_unknown_rules_ignored() {
        let rules = mapping(&[("code", "required|uuid")]);
        let form = FormData::from_fields([("code", "anything")]);
        assert!(validate(&rules, &form).is_valid);
    }

    #[test]
    fn test_errors_follow_mapping_order() {
        let rules = mapping(&[("zeta", "required"), ("alpha", "required")]);
        let result = validate(&rules, &FormData::new());
        assert_eq!(result.errors.keys().collect::<Vec<_>>(), vec!["zeta", "alpha"]);
    }
}
