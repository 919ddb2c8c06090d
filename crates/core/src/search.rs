//! Helpers for case-insensitive substring search (`ILIKE`).

/// Escape character used in generated patterns. PostgreSQL's default
/// `LIKE` escape is also backslash, so no `ESCAPE` clause is needed.
const ESCAPE: char = '\\';

/// Escape `LIKE` metacharacters so `term` matches literally.
pub fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | ESCAPE) {
            out.push(ESCAPE);
        }
        out.push(c);
    }
    out
}

/// Build an `ILIKE` pattern matching any value that contains `term`.
///
/// ```
/// use marquee_core::search::contains_pattern;
/// assert_eq!(contains_pattern("Hop"), "%Hop%");
/// assert_eq!(contains_pattern("100%"), "%100\\%%");
/// ```
pub fn contains_pattern(term: &str) -> String {
    format!("%{}%", escape_like(term))
}
