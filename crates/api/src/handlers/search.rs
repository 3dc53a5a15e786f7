//! Handler for catalog search.
//!
//! Fetches the requested display page, then scans the first matches for
//! author/year statistics, and returns both with the elapsed time.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;
use shelfstat_catalog::search::run_search;
use shelfstat_core::stats::StatsSummary;
use shelfstat_core::volume::DisplayItem;

use crate::error::{AppError, AppResult};
use crate::query::SearchParams;
use crate::state::AppState;

/// Body of a successful search.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub items: Vec<DisplayItem>,
    /// Upstream match count, unmodified.
    pub total_items: u32,
    #[serde(flatten)]
    pub stats: StatsSummary,
    pub response_time_ms: u64,
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// GET /api/search?q=&page=
///
/// The search runs on its own task so a client disconnect does not cut the
/// statistics scan short.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<SearchResponse>> {
    let start = Instant::now();
    let page = params.page_number();
    let query = params.q.unwrap_or_default();
    let source = Arc::clone(&state.source);

    let joined = tokio::spawn(async move { run_search(source.as_ref(), &query, page).await }).await;

    let outcome = match joined {
        Ok(Ok(outcome)) => outcome,
        Ok(Err(err)) => return Err(AppError::from_search(err, elapsed_ms(start))),
        Err(join_err) => {
            return Err(AppError::Unexpected {
                message: join_err.to_string(),
                response_time_ms: elapsed_ms(start),
            })
        }
    };

    let response_time_ms = elapsed_ms(start);
    tracing::debug!(
        total_items = outcome.total_items,
        items = outcome.items.len(),
        response_time_ms,
        "Search response ready",
    );

    Ok(Json(SearchResponse {
        items: outcome.items,
        total_items: outcome.total_items,
        stats: outcome.stats,
        response_time_ms,
    }))
}
