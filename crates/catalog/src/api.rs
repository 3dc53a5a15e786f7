//! REST client for the upstream volumes-search endpoint.
//!
//! Wraps `GET {base}/volumes?q=&maxResults=&startIndex=[&key=]` using
//! [`reqwest`]. No per-request timeout is set; a slow upstream simply
//! extends the search.

use shelfstat_core::volume::VolumePage;

use crate::config::CatalogConfig;

/// HTTP client for the book catalog API.
#[derive(Debug, Clone)]
pub struct CatalogApi {
    client: reqwest::Client,
    config: CatalogConfig,
}

/// Errors from the catalog REST layer.
#[derive(Debug, thiserror::Error)]
pub enum CatalogApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The catalog returned a non-2xx status code.
    #[error("Catalog API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for diagnostics.
        body: String,
    },

    /// A 2xx response whose body is not a volumes page.
    #[error("Malformed catalog response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl CatalogApi {
    /// Create a client for the configured catalog.
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogApiError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("shelfstat/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Fetch one page of volumes matching `query`.
    pub async fn search_volumes(
        &self,
        query: &str,
        max_results: u32,
        start_index: u32,
    ) -> Result<VolumePage, CatalogApiError> {
        let mut request = self
            .client
            .get(self.config.volumes_url())
            .query(&[("q", query)])
            .query(&[("maxResults", max_results), ("startIndex", start_index)]);

        if let Some(key) = &self.config.api_key {
            request = request.query(&[("key", key.as_str())]);
        }

        tracing::debug!(start_index, max_results, "Fetching catalog volumes");
        let response = request.send().await?;
        Self::parse_page(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`CatalogApiError::Status`]
    /// containing the status and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, CatalogApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(CatalogApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_page(response: reqwest::Response) -> Result<VolumePage, CatalogApiError> {
        let response = Self::ensure_success(response).await?;
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}
