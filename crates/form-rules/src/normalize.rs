// File: src/normalize.rs
// Purpose: Bracketed field names to dot notation

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// Non-greedy so that adjacent groups never merge: "a[b][c]" has two spans, not one.
static BRACKET_SEGMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(.*?)\]").unwrap());

/// Convert a bracketed field path into dot notation.
///
/// Every `[X]` span is replaced by `.X`, scanning left to right. Spans are
/// matched independently and as short as possible:
///
/// - `items[0][name]` -> `items.0.name`
/// - `a[b[c]]` -> `a.b[c]` (first `[` pairs with the first `]`)
/// - `a[b` -> `a[b` (an unterminated `[` is left alone)
///
/// Names without brackets come back unchanged, so the function is idempotent
/// on names that are already dot-notated.
///
/// ```
/// use form_rules::normalize;
///
/// assert_eq!(normalize("items[0][name]"), "items.0.name");
/// assert_eq!(normalize("email"), "email");
/// ```
pub fn normalize(raw_name: &str) -> String {
    if !raw_name.contains('[') {
        return raw_name.to_string();
    }

    BRACKET_SEGMENT
        .replace_all(raw_name, |caps: &Captures| format!(".{}", &caps[1]))
        .into_owned()
}
