//! Shared query parameter types for API handlers.

use marquee_core::pagination::parse_page;
use serde::Deserialize;

/// Trivia pagination parameter (`?page=`).
///
/// Kept as raw text so a non-numeric value falls back to the first page
/// instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl PageParams {
    pub fn page(&self) -> i64 {
        parse_page(self.page.as_deref())
    }
}
