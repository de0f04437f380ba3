use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::core::session::VolunteerSession;
use crate::features::volunteers::dtos::{
    UpdateVolunteerDto, UpsertVolunteerDto, VolunteerResponseDto, VolunteerSearchQuery,
};
use crate::features::volunteers::services::VolunteerService;
use crate::shared::types::ApiResponse;

/// List all verified volunteers
#[utoipa::path(
    get,
    path = "/api/volunteers",
    responses(
        (status = 200, description = "List of verified volunteers", body = ApiResponse<Vec<VolunteerResponseDto>>),
    ),
    tag = "volunteers"
)]
pub async fn list_volunteers(
    State(service): State<Arc<VolunteerService>>,
) -> Result<Json<ApiResponse<Vec<VolunteerResponseDto>>>> {
    let volunteers = service.list().await?;
    Ok(Json(ApiResponse::success(Some(volunteers), None, None)))
}

/// Search verified volunteers
///
/// All criteria combine with AND; an empty result is a valid response.
#[utoipa::path(
    get,
    path = "/api/volunteers/search",
    params(VolunteerSearchQuery),
    responses(
        (status = 200, description = "Matching volunteers", body = ApiResponse<Vec<VolunteerResponseDto>>),
    ),
    tag = "volunteers"
)]
pub async fn search_volunteers(
    State(service): State<Arc<VolunteerService>>,
    Query(query): Query<VolunteerSearchQuery>,
) -> Result<Json<ApiResponse<Vec<VolunteerResponseDto>>>> {
    let volunteers = service.search(query).await?;
    Ok(Json(ApiResponse::success(Some(volunteers), None, None)))
}

/// Get the calling volunteer's own profile
#[utoipa::path(
    get,
    path = "/api/volunteers/profile",
    responses(
        (status = 200, description = "Volunteer profile", body = ApiResponse<VolunteerResponseDto>),
        (status = 401, description = "Missing session headers"),
        (status = 404, description = "Volunteer not found")
    ),
    tag = "volunteers"
)]
pub async fn get_my_profile(
    State(service): State<Arc<VolunteerService>>,
    session: VolunteerSession,
) -> Result<Json<ApiResponse<VolunteerResponseDto>>> {
    let id = session
        .id
        .ok_or_else(|| AppError::Unauthorized("Missing volunteer-id header".to_string()))?;
    let volunteer = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(volunteer), None, None)))
}

/// Create or update a volunteer profile (upsert by email)
#[utoipa::path(
    post,
    path = "/api/volunteers",
    request_body = UpsertVolunteerDto,
    responses(
        (status = 200, description = "Profile saved", body = ApiResponse<VolunteerResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already registered")
    ),
    tag = "volunteers"
)]
pub async fn upsert_volunteer(
    State(service): State<Arc<VolunteerService>>,
    AppJson(dto): AppJson<UpsertVolunteerDto>,
) -> Result<Json<ApiResponse<VolunteerResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let volunteer = service.upsert(dto).await?;
    Ok(Json(ApiResponse::success(Some(volunteer), None, None)))
}

/// Get volunteer by id
#[utoipa::path(
    get,
    path = "/api/volunteers/{id}",
    params(("id" = Uuid, Path, description = "Volunteer id")),
    responses(
        (status = 200, description = "Volunteer found", body = ApiResponse<VolunteerResponseDto>),
        (status = 404, description = "Volunteer not found")
    ),
    tag = "volunteers"
)]
pub async fn get_volunteer(
    State(service): State<Arc<VolunteerService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<VolunteerResponseDto>>> {
    let volunteer = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(volunteer), None, None)))
}

/// Update volunteer by id
#[utoipa::path(
    put,
    path = "/api/volunteers/{id}",
    params(("id" = Uuid, Path, description = "Volunteer id")),
    request_body = UpdateVolunteerDto,
    responses(
        (status = 200, description = "Volunteer updated", body = ApiResponse<VolunteerResponseDto>),
        (status = 404, description = "Volunteer not found")
    ),
    tag = "volunteers"
)]
pub async fn update_volunteer(
    State(service): State<Arc<VolunteerService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateVolunteerDto>,
) -> Result<Json<ApiResponse<VolunteerResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let volunteer = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(volunteer), None, None)))
}

/// Delete volunteer by id
#[utoipa::path(
    delete,
    path = "/api/volunteers/{id}",
    params(("id" = Uuid, Path, description = "Volunteer id")),
    responses(
        (status = 200, description = "Volunteer deleted"),
        (status = 404, description = "Volunteer not found")
    ),
    tag = "volunteers"
)]
pub async fn delete_volunteer(
    State(service): State<Arc<VolunteerService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Volunteer deleted successfully".to_string()),
        None,
    )))
}
