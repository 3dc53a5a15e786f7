/// Default upstream volumes-search API root.
pub const DEFAULT_CATALOG_BASE_URL: &str = "https://www.googleapis.com/books/v1";

/// Upstream catalog configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// API root; `/volumes` is appended per request.
    pub base_url: String,
    /// Optional API key appended as `key=` when present.
    pub api_key: Option<String>,
}

impl CatalogConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                |
    /// |------------------------|----------------------------------------|
    /// | `CATALOG_BASE_URL`     | `https://www.googleapis.com/books/v1`  |
    /// | `GOOGLE_BOOKS_API_KEY` | unset (unauthenticated requests)       |
    pub fn from_env() -> Self {
        let base_url = std::env::var("CATALOG_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_CATALOG_BASE_URL.into());

        let api_key = std::env::var("GOOGLE_BOOKS_API_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        Self { base_url, api_key }
    }

    /// Configuration pointing at an arbitrary base URL, without a key.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
        }
    }

    /// Full URL of the volumes-search endpoint.
    pub fn volumes_url(&self) -> String {
        format!("{}/volumes", self.base_url.trim_end_matches('/'))
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_CATALOG_BASE_URL)
    }
}
