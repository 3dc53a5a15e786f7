use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use shelfstat_catalog::api::CatalogApiError;
use shelfstat_catalog::search::SearchError;
use shelfstat_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds the upstream and
/// unexpected-failure variants. Implements [`IntoResponse`] to produce
/// consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `shelfstat_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The catalog answered the display page request with a non-2xx status.
    #[error("Catalog API returned HTTP {status}")]
    Upstream {
        /// Upstream HTTP status code.
        status: u16,
        /// Raw upstream body, passed through for diagnostics.
        body: String,
    },

    /// Any other failure; reported with the time spent before it occurred.
    #[error("{message}")]
    Unexpected {
        message: String,
        response_time_ms: u64,
    },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Classify a search failure.
    ///
    /// Only non-2xx catalog statuses become [`AppError::Upstream`]; transport
    /// and decode failures are unexpected.
    pub fn from_search(err: SearchError, response_time_ms: u64) -> Self {
        match err {
            SearchError::Validation(core) => AppError::Core(core),
            SearchError::Upstream(CatalogApiError::Status { status, body }) => {
                AppError::Upstream { status, body }
            }
            SearchError::Upstream(other) => AppError::Unexpected {
                message: other.to_string(),
                response_time_ms,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Core(CoreError::Validation(msg)) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": msg,
                    "code": "VALIDATION_ERROR",
                }),
            ),

            AppError::Upstream { status, body } => {
                tracing::warn!(status, body = %body, "Catalog rejected search request");
                (
                    StatusCode::BAD_GATEWAY,
                    json!({
                        "error": self.to_string(),
                        "details": body,
                        "status": status,
                        "code": "UPSTREAM_ERROR",
                    }),
                )
            }

            AppError::Unexpected {
                message,
                response_time_ms,
            } => {
                tracing::error!(error = %message, response_time_ms, "Search failed unexpectedly");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": message,
                        "responseTimeMs": response_time_ms,
                        "code": "INTERNAL_ERROR",
                    }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
