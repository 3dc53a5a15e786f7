pub mod health;
pub mod search;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /search                  catalog search with statistics (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(search::router())
}
