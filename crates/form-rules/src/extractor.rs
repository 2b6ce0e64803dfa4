// File: src/extractor.rs
// Purpose: Scan rendered markup for marked form controls and collect their rules
//
// This is a lexical scan over raw text, not an HTML parse. Tag-like text inside
// comments or attribute values is matched like any other text, and attribute
// lookups are plain substring searches within the opening tag.

use crate::config::ExtractionConfig;
use crate::mapping::RuleMapping;
use crate::normalize::normalize;
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

/// Attribute carrying the rule string unless configured otherwise
pub const DEFAULT_MARKER: &str = "validated";

// Opening tag of input/textarea/select. The tag name must end right after the
// keyword, so `<inputs>` or `<selection>` are not form controls.
static FORM_CONTROL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<(input|textarea|select)(?:[\s/][^>]*)?>"#).unwrap()
});

static NAME_ATTR: Lazy<Regex> = Lazy::new(|| Regex::new(r#"name="([^"]*)""#).unwrap());

static DEFAULT_EXTRACTOR: Lazy<RuleExtractor> = Lazy::new(RuleExtractor::new);

/// One form-control opening tag found in the markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementMatch<'a> {
    /// Tag name as written (`input`, `TEXTAREA`, ...)
    pub tag: &'a str,
    /// Full opening tag text
    pub source: &'a str,
    /// Byte range of the opening tag within the markup
    pub span: Range<usize>,
    /// Raw `name` attribute value
    pub name: Option<&'a str>,
    /// Raw marker attribute value
    pub rule: Option<&'a str>,
}

impl ElementMatch<'_> {
    /// Whether this element yields a mapping entry
    pub fn is_marked(&self) -> bool {
        self.name.is_some() && self.rule.is_some()
    }
}

/// Derives a [`RuleMapping`] from rendered markup.
///
/// ```
/// use form_rules::RuleExtractor;
///
/// let extractor = RuleExtractor::new();
/// let rules = extractor.extract(r#"<input name="items[0][qty]" validated="required|integer">"#);
/// assert_eq!(rules.get("items.0.qty"), Some("required|integer"));
/// ```
#[derive(Debug, Clone)]
pub struct RuleExtractor {
    marker: String,
    marker_attr: Regex,
}

impl RuleExtractor {
    /// Extractor reading the `validated` attribute
    pub fn new() -> Self {
        Self::with_marker(DEFAULT_MARKER).expect("default marker pattern is valid")
    }

    /// Extractor reading a custom marker attribute (e.g. `data-rules`)
    pub fn with_marker(marker: &str) -> Result<Self, regex::Error> {
        let pattern = format!(r#"{}="([^"]*)""#, regex::escape(marker));
        Ok(Self {
            marker: marker.to_string(),
            marker_attr: Regex::new(&pattern)?,
        })
    }

    /// Extractor for the `[extraction]` config section
    pub fn from_config(config: &ExtractionConfig) -> Result<Self, regex::Error> {
        Self::with_marker(&config.marker_attribute)
    }

    /// Name of the marker attribute
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Every input/textarea/select opening tag, in markup order
    pub fn elements<'a>(&'a self, markup: &'a str) -> impl Iterator<Item = ElementMatch<'a>> + 'a {
        FORM_CONTROL.captures_iter(markup).filter_map(move |caps| {
            let whole = caps.get(0)?;
            let source = whole.as_str();
            Some(ElementMatch {
                tag: caps.get(1)?.as_str(),
                source,
                span: whole.range(),
                name: NAME_ATTR
                    .captures(source)
                    .and_then(|c| c.get(1))
                    .map(|m| m.as_str()),
                rule: self
                    .marker_attr
                    .captures(source)
                    .and_then(|c| c.get(1))
                    .map(|m| m.as_str()),
            })
        })
    }

    /// Build the field -> rule mapping for `markup`.
    ///
    /// Elements missing either `name` or the marker attribute are skipped.
    /// When a normalized name repeats, the later rule wins.
    pub fn extract(&self, markup: &str) -> RuleMapping {
        let mut rules = RuleMapping::new();

        for element in self.elements(markup) {
            match (element.name, element.rule) {
                (Some(name), Some(rule)) => {
                    rules.insert(normalize(name), rule);
                }
                _ => {
                    tracing::trace!(
                        tag = element.tag,
                        offset = element.span.start,
                        "skipping unmarked form control"
                    );
                }
            }
        }

        rules
    }
}

impl Default for RuleExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract rules using the default `validated` marker
pub fn extract(markup: &str) -> RuleMapping {
    DEFAULT_EXTRACTOR.extract(markup)
}
