use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::stats::dtos::StatsDto;
use crate::features::stats::services::StatsService;
use crate::shared::types::ApiResponse;

/// Get aggregate platform statistics
#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Platform statistics", body = ApiResponse<StatsDto>),
    ),
    tag = "stats"
)]
pub async fn get_stats(
    State(service): State<Arc<StatsService>>,
) -> Result<Json<ApiResponse<StatsDto>>> {
    let stats = service.summary().await?;
    Ok(Json(ApiResponse::success(Some(stats), None, None)))
}
