use axum::extract::{Path, Query, State};
use axum::Json;
use serde_json::{json, Value};

use tanker_app::app::{BucketPage, BucketRequest, SummaryStats};

use super::{ApiError, AppState};

pub(crate) async fn healthz() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

pub(crate) async fn summary_stats(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<SummaryStats>, ApiError> {
    let stats = state.service.summary(user_id).await?;
    Ok(Json(stats))
}

pub(crate) async fn bucket_data(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(request): Query<BucketRequest>,
) -> Result<Json<BucketPage>, ApiError> {
    let page = state.service.bucket_data(user_id, request).await?;
    Ok(Json(page))
}
