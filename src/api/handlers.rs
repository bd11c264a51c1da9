use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde_json::{json, Value};

use crate::{
    error::AppResult,
    middleware::RequestId,
    models::{FavoritesRequest, Place, RecommendationRequest},
    services,
};

use super::AppState;

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "healthy", "store": state.store.name() })),
    )
}

/// Context-aware recommendations blending every scoring source
pub async fn ultimate_recommendations(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    query: Result<Query<RecommendationRequest>, QueryRejection>,
) -> AppResult<Json<Vec<Place>>> {
    let Query(request) = query?;
    tracing::info!(
        request_id = %request_id,
        user_id = %request.user_id,
        "Processing recommendation request"
    );

    let places = services::get_recommendations(state.store.as_ref(), &request).await?;
    Ok(Json(places))
}

/// Favorites-based recommendations
pub async fn favorite_recommendations(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    query: Result<Query<FavoritesRequest>, QueryRejection>,
) -> AppResult<Json<Vec<Place>>> {
    let Query(request) = query?;
    tracing::info!(
        request_id = %request_id,
        user_id = %request.user_id,
        "Processing favorites recommendation request"
    );

    let places =
        services::get_favorite_recommendations(state.store.as_ref(), request.user_id).await?;
    Ok(Json(places))
}
