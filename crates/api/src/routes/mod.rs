pub mod health;
pub mod suggestions;

use axum::Router;

/// Build the `/ml` route tree.
///
/// ```text
/// /suggest-category     category from title + image names (POST)
/// /suggest-price        daily price from category + location (POST)
/// ```
pub fn ml_routes() -> Router {
    Router::new().merge(suggestions::suggestions_router())
}
