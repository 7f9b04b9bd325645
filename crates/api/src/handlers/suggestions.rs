//! Handlers for the listing suggestion endpoints.
//!
//! Both endpoints are thin wrappers: decode the body, validate what the core
//! cannot, then delegate to the pure functions in `rentml_core`.

use axum::Json;
use rentml_core::classification;
use rentml_core::geo::GeoPoint;
use rentml_core::pricing;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::extract::JsonBody;

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Body of `POST /ml/suggest-category`. Both fields may be omitted or null.
#[derive(Debug, Deserialize)]
pub struct SuggestCategoryRequest {
    pub title: Option<String>,
    pub images: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SuggestCategoryResponse {
    pub suggested_category_slug: String,
    pub confidence: f64,
}

/// Body of `POST /ml/suggest-price`.
///
/// `images` and `base_fields` are accepted for forward compatibility but do
/// not influence the price.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestPriceRequest {
    pub category_slug: String,
    pub lat: f64,
    pub lng: f64,
    pub images: Option<Vec<String>>,
    pub base_fields: Option<serde_json::Map<String, serde_json::Value>>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SuggestPriceResponse {
    pub suggested_price_per_day: f64,
}

// ---------------------------------------------------------------------------
// POST /ml/suggest-category
// ---------------------------------------------------------------------------

/// Suggest a listing category from its title and image file names.
pub async fn suggest_category(
    JsonBody(body): JsonBody<SuggestCategoryRequest>,
) -> AppResult<Json<SuggestCategoryResponse>> {
    let images = body.images.unwrap_or_default();

    let suggestion = classification::classify(body.title.as_deref(), &images);

    tracing::debug!(
        category = %suggestion.category,
        confidence = suggestion.confidence,
        image_count = images.len(),
        "Category suggested",
    );

    Ok(Json(SuggestCategoryResponse {
        suggested_category_slug: suggestion.category.as_str().to_string(),
        confidence: suggestion.confidence,
    }))
}

// ---------------------------------------------------------------------------
// POST /ml/suggest-price
// ---------------------------------------------------------------------------

/// Suggest a daily price from category and location.
///
/// Coordinates outside the valid latitude/longitude ranges are rejected with
/// a validation error before any distance is computed.
pub async fn suggest_price(
    JsonBody(body): JsonBody<SuggestPriceRequest>,
) -> AppResult<Json<SuggestPriceResponse>> {
    let location = GeoPoint::new(body.lat, body.lng);
    location.validate()?;

    let suggestion = pricing::suggest_price(&body.category_slug, location);

    tracing::debug!(
        category_slug = %body.category_slug,
        base_price = suggestion.base_price,
        distance_km = suggestion.distance_km,
        premium_applied = suggestion.premium_applied,
        price_per_day = suggestion.price_per_day,
        "Price suggested",
    );

    Ok(Json(SuggestPriceResponse {
        suggested_price_per_day: suggestion.price_per_day,
    }))
}
