use std::sync::Arc;

use shelfstat_catalog::source::VolumeSource;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Upstream catalog the search endpoint queries.
    pub source: Arc<dyn VolumeSource>,
}
