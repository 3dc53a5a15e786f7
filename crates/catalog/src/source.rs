//! The upstream seam both search stages fetch through.

use async_trait::async_trait;
use shelfstat_core::volume::VolumePage;

use crate::api::{CatalogApi, CatalogApiError};

/// Anything that can answer a paginated volumes query.
///
/// Implemented by [`CatalogApi`] for production and by in-memory fakes in
/// tests.
#[async_trait]
pub trait VolumeSource: Send + Sync {
    async fn fetch_volumes(
        &self,
        query: &str,
        max_results: u32,
        start_index: u32,
    ) -> Result<VolumePage, CatalogApiError>;
}

#[async_trait]
impl VolumeSource for CatalogApi {
    async fn fetch_volumes(
        &self,
        query: &str,
        max_results: u32,
        start_index: u32,
    ) -> Result<VolumePage, CatalogApiError> {
        self.search_volumes(query, max_results, start_index).await
    }
}
