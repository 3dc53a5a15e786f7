//! Query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for `GET /api/search` (`?q=&page=`).
///
/// `page` is kept as text so a malformed value falls back to the first
/// page instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub page: Option<String>,
}

impl SearchParams {
    /// Parsed page number, if one was supplied and is an integer.
    pub fn page_number(&self) -> Option<i64> {
        self.page.as_deref().and_then(|p| p.trim().parse().ok())
    }
}
