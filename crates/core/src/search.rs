//! Search constants and request helpers.
//!
//! This module lives in `core` (zero internal deps) so the catalog client
//! and the HTTP layer agree on page sizes and the statistics window.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Sizes
// ---------------------------------------------------------------------------

/// Number of display items per results page.
pub const PAGE_SIZE: u32 = 10;

/// Number of records requested per statistics chunk.
pub const CHUNK_SIZE: u32 = 40;

/// Upper bound on records scanned for statistics per search.
pub const STATS_CAP: u32 = 200;

/// Message returned when `q` is missing or blank.
pub const MISSING_QUERY_MESSAGE: &str = "Missing search query (q)";

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Trim the raw query and reject it if nothing is left.
///
/// ```
/// use shelfstat_core::search::validate_query;
/// assert_eq!(validate_query("  dune ").unwrap(), "dune");
/// assert!(validate_query("   ").is_err());
/// ```
pub fn validate_query(raw: &str) -> Result<&str, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(MISSING_QUERY_MESSAGE.to_string()));
    }
    Ok(trimmed)
}

/// Resolve a user-provided 1-based page number, defaulting to 1.
pub fn clamp_page(page: Option<i64>) -> u32 {
    page.unwrap_or(1).clamp(1, i64::from(u32::MAX)) as u32
}

/// Upstream start index of a 1-based display page.
pub fn page_offset(page: u32) -> u32 {
    page.saturating_sub(1).saturating_mul(PAGE_SIZE)
}

/// Number of records the statistics scan covers for a given upstream total.
pub fn scan_window(total_items: u32) -> u32 {
    total_items.min(STATS_CAP)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_is_trimmed() {
        assert_eq!(validate_query("\t frank herbert \n").unwrap(), "frank herbert");
    }

    #[test]
    fn blank_query_is_a_validation_error() {
        match validate_query(" \t ") {
            Err(CoreError::Validation(msg)) => assert_eq!(msg, MISSING_QUERY_MESSAGE),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn page_defaults_to_one() {
        assert_eq!(clamp_page(None), 1);
    }

    #[test]
    fn page_is_clamped_to_at_least_one() {
        assert_eq!(clamp_page(Some(0)), 1);
        assert_eq!(clamp_page(Some(-7)), 1);
        assert_eq!(clamp_page(Some(4)), 4);
    }

    #[test]
    fn offset_follows_page_size() {
        assert_eq!(page_offset(1), 0);
        assert_eq!(page_offset(2), 10);
        assert_eq!(page_offset(31), 300);
    }

    #[test]
    fn offset_saturates_instead_of_overflowing() {
        assert_eq!(page_offset(u32::MAX), u32::MAX);
    }

    #[test]
    fn scan_window_is_capped() {
        assert_eq!(scan_window(0), 0);
        assert_eq!(scan_window(37), 37);
        assert_eq!(scan_window(450), STATS_CAP);
    }
}
