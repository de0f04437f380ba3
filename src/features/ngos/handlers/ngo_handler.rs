use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::core::session::NgoSession;
use crate::features::ngos::dtos::{NgoResponseDto, NgoSearchQuery, UpdateNgoDto, UpsertNgoDto};
use crate::features::ngos::services::NgoService;
use crate::shared::types::ApiResponse;

/// List all verified NGOs
#[utoipa::path(
    get,
    path = "/api/ngos",
    responses(
        (status = 200, description = "List of verified NGOs", body = ApiResponse<Vec<NgoResponseDto>>),
    ),
    tag = "ngos"
)]
pub async fn list_ngos(
    State(service): State<Arc<NgoService>>,
) -> Result<Json<ApiResponse<Vec<NgoResponseDto>>>> {
    let ngos = service.list().await?;
    Ok(Json(ApiResponse::success(Some(ngos), None, None)))
}

/// Search verified NGOs
#[utoipa::path(
    get,
    path = "/api/ngos/search",
    params(NgoSearchQuery),
    responses(
        (status = 200, description = "Matching NGOs", body = ApiResponse<Vec<NgoResponseDto>>),
        (status = 400, description = "Unknown cause name")
    ),
    tag = "ngos"
)]
pub async fn search_ngos(
    State(service): State<Arc<NgoService>>,
    Query(query): Query<NgoSearchQuery>,
) -> Result<Json<ApiResponse<Vec<NgoResponseDto>>>> {
    let ngos = service.search(query).await?;
    Ok(Json(ApiResponse::success(Some(ngos), None, None)))
}

/// Get the calling NGO's own profile
#[utoipa::path(
    get,
    path = "/api/ngos/profile",
    responses(
        (status = 200, description = "NGO profile", body = ApiResponse<NgoResponseDto>),
        (status = 401, description = "Missing session headers"),
        (status = 404, description = "NGO not found")
    ),
    tag = "ngos"
)]
pub async fn get_ngo_profile(
    State(service): State<Arc<NgoService>>,
    session: NgoSession,
) -> Result<Json<ApiResponse<NgoResponseDto>>> {
    let ngo = service.get(session.ngo_id).await?;
    Ok(Json(ApiResponse::success(Some(ngo), None, None)))
}

/// Create or update an NGO profile (upsert by email)
#[utoipa::path(
    post,
    path = "/api/ngos",
    request_body = UpsertNgoDto,
    responses(
        (status = 200, description = "Profile saved", body = ApiResponse<NgoResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already registered")
    ),
    tag = "ngos"
)]
pub async fn upsert_ngo(
    State(service): State<Arc<NgoService>>,
    AppJson(dto): AppJson<UpsertNgoDto>,
) -> Result<Json<ApiResponse<NgoResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let ngo = service.upsert(dto).await?;
    Ok(Json(ApiResponse::success(Some(ngo), None, None)))
}

/// Get NGO by id
#[utoipa::path(
    get,
    path = "/api/ngos/{id}",
    params(("id" = Uuid, Path, description = "NGO id")),
    responses(
        (status = 200, description = "NGO found", body = ApiResponse<NgoResponseDto>),
        (status = 404, description = "NGO not found")
    ),
    tag = "ngos"
)]
pub async fn get_ngo(
    State(service): State<Arc<NgoService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<NgoResponseDto>>> {
    let ngo = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(ngo), None, None)))
}

/// Update NGO by id
#[utoipa::path(
    put,
    path = "/api/ngos/{id}",
    params(("id" = Uuid, Path, description = "NGO id")),
    request_body = UpdateNgoDto,
    responses(
        (status = 200, description = "NGO updated", body = ApiResponse<NgoResponseDto>),
        (status = 404, description = "NGO not found")
    ),
    tag = "ngos"
)]
pub async fn update_ngo(
    State(service): State<Arc<NgoService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateNgoDto>,
) -> Result<Json<ApiResponse<NgoResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let ngo = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(ngo), None, None)))
}

/// Delete NGO by id
#[utoipa::path(
    delete,
    path = "/api/ngos/{id}",
    params(("id" = Uuid, Path, description = "NGO id")),
    responses(
        (status = 200, description = "NGO deleted"),
        (status = 404, description = "NGO not found")
    ),
    tag = "ngos"
)]
pub async fn delete_ngo(
    State(service): State<Arc<NgoService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("NGO deleted successfully".to_string()),
        None,
    )))
}
