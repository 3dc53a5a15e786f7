#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use shelfstat_api::config::ServerConfig;
use shelfstat_api::router::build_app_router;
use shelfstat_api::state::AppState;
use shelfstat_catalog::api::CatalogApiError;
use shelfstat_catalog::config::CatalogConfig;
use shelfstat_catalog::source::VolumeSource;
use shelfstat_core::search::{CHUNK_SIZE, PAGE_SIZE};
use shelfstat_core::volume::{VolumePage, VolumeRecord};
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default).
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        json_logs: false,
        catalog: CatalogConfig::with_base_url("http://catalog.invalid"),
    }
}

/// Build the full application router around the given catalog.
pub fn build_test_app(catalog: Arc<ScriptedCatalog>) -> Router {
    let state = AppState { source: catalog };
    build_app_router(state, &test_config())
}

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A volume record with one author and a publication date.
pub fn book(id: usize, author: &str, date: Option<&str>) -> VolumeRecord {
    VolumeRecord {
        id: format!("vol-{id}"),
        title: Some(format!("Book {id}")),
        authors: vec![author.to_string()],
        published_date: date.map(str::to_string),
        description: None,
    }
}

// ---------------------------------------------------------------------------
// Scripted catalog
// ---------------------------------------------------------------------------

/// In-memory catalog serving slices of a fixed record list.
///
/// Display page requests (`maxResults == PAGE_SIZE`) and statistics chunk
/// requests (`maxResults == CHUNK_SIZE`) can be failed independently.
pub struct ScriptedCatalog {
    records: Vec<VolumeRecord>,
    reported_total: u32,
    page_failure: Option<(u16, String)>,
    failing_chunks: HashSet<u32>,
    panic_on_chunks: bool,
    calls: Mutex<Vec<(String, u32, u32)>>,
}

impl ScriptedCatalog {
    pub fn new(records: Vec<VolumeRecord>) -> Self {
        let reported_total = records.len() as u32;
        Self {
            records,
            reported_total,
            page_failure: None,
            failing_chunks: HashSet::new(),
            panic_on_chunks: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn reporting_total(mut self, total: u32) -> Self {
        self.reported_total = total;
        self
    }

    pub fn failing_page(mut self, status: u16, body: &str) -> Self {
        self.page_failure = Some((status, body.to_string()));
        self
    }

    pub fn failing_chunk(mut self, offset: u32) -> Self {
        self.failing_chunks.insert(offset);
        self
    }

    pub fn panicking_on_chunks(mut self) -> Self {
        self.panic_on_chunks = true;
        self
    }

    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// `(query, max_results, start_index)` per upstream call, in order.
    pub fn calls(&self) -> Vec<(String, u32, u32)> {
        self.calls.lock().unwrap().clone()
    }

    /// Start offsets of statistics chunk requests, in order.
    pub fn chunk_offsets(&self) -> Vec<u32> {
        self.calls()
            .into_iter()
            .filter(|(_, max, _)| *max == CHUNK_SIZE)
            .map(|(_, _, start)| start)
            .collect()
    }
}

#[async_trait]
impl VolumeSource for ScriptedCatalog {
    async fn fetch_volumes(
        &self,
        query: &str,
        max_results: u32,
        start_index: u32,
    ) -> Result<VolumePage, CatalogApiError> {
        self.calls
            .lock()
            .unwrap()
            .push((query.to_string(), max_results, start_index));

        if max_results == PAGE_SIZE {
            if let Some((status, body)) = &self.page_failure {
                return Err(CatalogApiError::Status {
                    status: *status,
                    body: body.clone(),
                });
            }
        }
        if max_results == CHUNK_SIZE {
            if self.panic_on_chunks {
                panic!("scripted catalog panicked at offset {start_index}");
            }
            if self.failing_chunks.contains(&start_index) {
                return Err(CatalogApiError::Status {
                    status: 500,
                    body: "chunk backend error".into(),
                });
            }
        }

        let start = (start_index as usize).min(self.records.len());
        let end = (start + max_results as usize).min(self.records.len());
        Ok(VolumePage {
            total_items: self.reported_total,
            items: self.records[start..end].to_vec(),
        })
    }
}
