//! Search orchestration: display page fetch followed by the statistics scan.

use shelfstat_core::error::CoreError;
use shelfstat_core::search::{clamp_page, page_offset, validate_query, PAGE_SIZE};
use shelfstat_core::stats::StatsSummary;
use shelfstat_core::volume::DisplayItem;

use crate::aggregator::collect_stats;
use crate::api::CatalogApiError;
use crate::source::VolumeSource;

/// Failures visible to the caller of a search.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Rejected before any upstream call.
    #[error(transparent)]
    Validation(#[from] CoreError),

    /// The display page fetch failed.
    #[error(transparent)]
    Upstream(#[from] CatalogApiError),
}

/// One page of display items plus the upstream match count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPage {
    pub items: Vec<DisplayItem>,
    pub total_items: u32,
    pub page: u32,
}

/// A completed search: the requested page and statistics over the first
/// matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub items: Vec<DisplayItem>,
    pub total_items: u32,
    pub stats: StatsSummary,
}

/// Validate the request and fetch the requested display page.
///
/// Issues exactly one upstream request of `PAGE_SIZE` records starting at
/// `(page - 1) * PAGE_SIZE`.
pub async fn fetch_display_page<S>(
    source: &S,
    raw_query: &str,
    page: Option<i64>,
) -> Result<DisplayPage, SearchError>
where
    S: VolumeSource + ?Sized,
{
    let query = validate_query(raw_query)?;
    let page = clamp_page(page);

    let result = source
        .fetch_volumes(query, PAGE_SIZE, page_offset(page))
        .await?;

    Ok(DisplayPage {
        items: result.items.into_iter().map(DisplayItem::from).collect(),
        total_items: result.total_items,
        page,
    })
}

/// Run a full search: display page first, then the statistics scan over
/// `min(total, STATS_CAP)` matches.
///
/// The statistics scan only runs when the display page succeeded, and it
/// cannot fail the search.
pub async fn run_search<S>(
    source: &S,
    raw_query: &str,
    page: Option<i64>,
) -> Result<SearchOutcome, SearchError>
where
    S: VolumeSource + ?Sized,
{
    let shown = fetch_display_page(source, raw_query, page).await?;
    let query = raw_query.trim();
    let report = collect_stats(source, query, shown.total_items).await;

    tracing::info!(
        query,
        page = shown.page,
        total_items = shown.total_items,
        records_scanned = report.summary.records_scanned,
        chunks_failed = report.chunks_failed,
        "Search completed",
    );

    Ok(SearchOutcome {
        items: shown.items,
        total_items: shown.total_items,
        stats: report.summary,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
