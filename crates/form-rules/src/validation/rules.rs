// File: src/validation/rules.rs
// Purpose: Parse pipe-delimited rule strings ("required|min:3|email")

/// One parsed rule
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    Required,
    Nullable,
    Email,
    Url,
    Numeric,
    Integer,
    Alpha,
    AlphaNum,
    Min(f64),
    Max(f64),
    Between(f64, f64),
    In(Vec<String>),
    Regex(String),
    Confirmed,
    /// Unrecognised name, or a known name with unusable arguments
    Unknown(String),
}

impl Rule {
    /// Parse a single `name` or `name:args` segment
    pub fn parse(segment: &str) -> Rule {
        let segment = segment.trim();
        let (name, args) = match segment.split_once(':') {
            Some((name, args)) => (name.trim(), Some(args)),
            None => (segment, None),
        };

        let unknown = || Rule::Unknown(segment.to_string());

        match (name, args) {
            ("required", None) => Rule::Required,
            ("nullable", None) => Rule::Nullable,
            ("email", None) => Rule::Email,
            ("url", None) => Rule::Url,
            ("numeric", None) => Rule::Numeric,
            ("integer", None) => Rule::Integer,
            ("alpha", None) => Rule::Alpha,
            ("alpha_num", None) => Rule::AlphaNum,
            ("confirmed", None) => Rule::Confirmed,
            ("min", Some(n)) => n.trim().parse::<f64>().map(Rule::Min).unwrap_or_else(|_| unknown()),
            ("max", Some(n)) => n.trim().parse::<f64>().map(Rule::Max).unwrap_or_else(|_| unknown()),
            ("between", Some(range)) => match range.split_once(',') {
                Some((lo, hi)) => match (lo.trim().parse::<f64>(), hi.trim().parse::<f64>()) {
                    (Ok(lo), Ok(hi)) => Rule::Between(lo, hi),
                    _ => unknown(),
                },
                None => unknown(),
            },
            ("in", Some(list)) => Rule::In(list.split(',').map(|s| s.trim().to_string()).collect()),
            ("regex", Some(pattern)) => Rule::Regex(pattern.to_string()),
            _ => unknown(),
        }
    }

    /// Whether the rule compares sizes numerically when present
    pub fn is_numeric_marker(&self) -> bool {
        matches!(self, Rule::Numeric | Rule::Integer)
    }
}

/// Split a rule string on `|` and parse each segment.
///
/// A `regex:` segment swallows the rest of the string, so a pattern may
/// itself contain `|` as long as it is the last rule.
pub fn parse_rules(rule_string: &str) -> Vec<Rule> {
    let mut rules = Vec::new();
    let mut rest = rule_string;

    while !rest.is_empty() {
        if rest.trim_start().starts_with("regex:") {
            rules.push(Rule::parse(rest));
            break;
        }

        let (segment, tail) = rest.split_once('|').unwrap_or((rest, ""));
        if !segment.trim().is_empty() {
            rules.push(Rule::parse(segment));
        }
        rest = tail;
    }

    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_pipe_list() {
        assert_eq!(
            parse_rules("required|email|max:255"),
            vec![Rule::Required, Rule::Email, Rule::Max(255.0)]
        );
    }

    #[test]
    fn test_parse_arguments() {
        assert_eq!(Rule::parse("between:1, 10"), Rule::Between(1.0, 10.0));
        assert_eq!(
            Rule::parse("in:admin,user"),
            Rule::In(vec!["admin".to_string(), "user".to_string()])
        );
    }

    #[test]
    fn test_bad_arguments_are_unknown() {
        assert_eq!(Rule::parse("min:abc"), Rule::Unknown("min:abc".to_string()));
        assert_eq!(Rule::parse("between:1"), Rule::Unknown("between:1".to_string()));
        assert_eq!(Rule::parse("required:yes"), Rule::Unknown("required:yes".to_string()));
        assert_eq!(Rule::parse("uuid"), Rule::Unknown("uuid".to_string()));
    }

    #[test]
    fn test_regex_keeps_pipes() {
        assert_eq!(
            parse_rules("required|regex:^(cat|dog)$"),
            vec![Rule::Required, Rule::Regex("^(cat|dog)$".to_string())]
        );
    }

    #[test]
    fn test_empty_segments_skipped() {
        assert_eq!(parse_rules("required||"), vec![Rule::Required]);
        assert!(parse_rules("").is_empty());
    }
}
