//! Define-string codec.
//!
//! The external build setting is a single `;`-joined string of active symbol
//! names per target group. Parsing tolerates stray separators, repeated
//! names, and embedded whitespace; none of those are errors.

/// Separator used by the external define string.
pub const DEFINE_SEPARATOR: char = ';';

/// Parse a define string into distinct symbol names.
///
/// All whitespace is stripped, empty tokens are dropped, and duplicates
/// collapse to their first occurrence, so the result is deterministic for a
/// given input.
///
/// # Examples
/// ```
/// use symcat_core::parse_defines;
/// assert_eq!(parse_defines("A; B ;A;;C"), vec!["A", "B", "C"]);
/// assert!(parse_defines("  ;; ").is_empty());
/// ```
pub fn parse_defines(value: &str) -> Vec<String> {
    let stripped: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    let mut names: Vec<String> = Vec::new();
    for token in stripped.split(DEFINE_SEPARATOR) {
        if token.is_empty() || names.iter().any(|n| n == token) {
            continue;
        }
        names.push(token.to_string());
    }
    names
}

/// Join symbol names into a define string. No names yields an empty string.
pub fn join_defines<I, S>(names: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for name in names {
        if !out.is_empty() {
            out.push(DEFINE_SEPARATOR);
        }
        out.push_str(name.as_ref());
    }
    out
}
