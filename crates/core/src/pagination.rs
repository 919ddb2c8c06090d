//! Fixed-size page slicing for the trivia question lists.

/// Number of questions returned per page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Page used when the caller does not supply one.
pub const DEFAULT_PAGE: i64 = 1;

/// Interpret a raw `?page=` value.
///
/// Missing or non-numeric values fall back to [`DEFAULT_PAGE`]; numeric
/// values are passed through untouched (including zero and negatives,
/// which [`page_slice`] treats as empty).
pub fn parse_page(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .unwrap_or(DEFAULT_PAGE)
}

/// Compute the `[start, end)` bounds for a 1-based page.
///
/// Returns `None` for pages below 1 or when the arithmetic would overflow.
pub fn page_bounds(page: i64, per_page: usize) -> Option<(usize, usize)> {
    if page < 1 {
        return None;
    }
    let index = usize::try_from(page - 1).ok()?;
    let start = index.checked_mul(per_page)?;
    let end = start.checked_add(per_page)?;
    Some((start, end))
}

/// Slice one page out of the full, already-ordered list.
///
/// Pages past the end (or below 1) come back empty; callers decide whether
/// that is a not-found condition.
pub fn page_slice<T>(items: &[T], page: i64, per_page: usize) -> &[T] {
    match page_bounds(page, per_page) {
        Some((start, end)) if start < items.len() => &items[start..end.min(items.len())],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_page_defaults_to_first_page() {
        assert_eq!(parse_page(None), 1);
        assert_eq!(parse_page(Some("abc")), 1);
        assert_eq!(parse_page(Some("")), 1);
    }

    #[test]
    fn parse_page_keeps_numeric_values() {
        assert_eq!(parse_page(Some("3")), 3);
        assert_eq!(parse_page(Some(" 2 ")), 2);
        assert_eq!(parse_page(Some("0")), 0);
        assert_eq!(parse_page(Some("-4")), -4);
    }

    #[test]
    fn bounds_follow_page_size() {
        assert_eq!(page_bounds(1, 10), Some((0, 10)));
        assert_eq!(page_bounds(3, 10), Some((20, 30)));
        assert_eq!(page_bounds(0, 10), None);
        assert_eq!(page_bounds(i64::MAX, usize::MAX), None);
    }

    #[test]
    fn second_page_of_fifteen_has_five() {
        let items: Vec<u32> = (1..=15).collect();
        let page = page_slice(&items, 2, QUESTIONS_PER_PAGE);
        assert_eq!(page, &[11, 12, 13, 14, 15]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items: Vec<u32> = (1..=15).collect();
        assert!(page_slice(&items, 3, QUESTIONS_PER_PAGE).is_empty());
        assert!(page_slice(&items, 0, QUESTIONS_PER_PAGE).is_empty());
        assert!(page_slice(&items, -1, QUESTIONS_PER_PAGE).is_empty());
    }

    #[test]
    fn exact_multiple_has_no_trailing_page() {
        let items: Vec<u32> = (1..=20).collect();
        assert_eq!(page_slice(&items, 2, QUESTIONS_PER_PAGE).len(), 10);
        assert!(page_slice(&items, 3, QUESTIONS_PER_PAGE).is_empty());
    }
}
