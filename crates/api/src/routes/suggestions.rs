//! Route definitions for listing suggestions.

use axum::routing::post;
use axum::Router;

use crate::handlers::suggestions;

/// Suggestion routes mounted at `/ml`.
///
/// ```text
/// POST /suggest-category   -> suggest_category
/// POST /suggest-price      -> suggest_price
/// ```
pub fn suggestions_router() -> Router {
    Router::new()
        .route("/suggest-category", post(suggestions::suggest_category))
        .route("/suggest-price", post(suggestions::suggest_price))
}
