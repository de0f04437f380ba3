use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::core::session::{NgoSession, VolunteerSession};
use crate::features::applications::dtos::{
    ApplicationResponseDto, ReviewApplicationDto, SubmitApplicationDto,
};
use crate::features::applications::services::ApplicationService;
use crate::shared::types::ApiResponse;

/// Submit an application for an opportunity
///
/// Guest submissions are allowed; missing name/email fall back to the
/// anonymous-volunteer sentinels.
#[utoipa::path(
    post,
    path = "/api/applications",
    request_body = SubmitApplicationDto,
    responses(
        (status = 200, description = "Application submitted", body = ApiResponse<ApplicationResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Opportunity not found"),
        (status = 409, description = "Already applied to this opportunity")
    ),
    tag = "applications"
)]
pub async fn submit_application(
    State(service): State<Arc<ApplicationService>>,
    AppJson(dto): AppJson<SubmitApplicationDto>,
) -> Result<Json<ApiResponse<ApplicationResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let application = service.submit(dto).await?;
    Ok(Json(ApiResponse::success(
        Some(application),
        Some("Application submitted successfully".to_string()),
        None,
    )))
}

/// List the calling volunteer's applications, newest first
#[utoipa::path(
    get,
    path = "/api/applications/my",
    responses(
        (status = 200, description = "Volunteer applications", body = ApiResponse<Vec<ApplicationResponseDto>>),
        (status = 401, description = "Missing session headers")
    ),
    tag = "applications"
)]
pub async fn list_my_applications(
    State(service): State<Arc<ApplicationService>>,
    session: VolunteerSession,
) -> Result<Json<ApiResponse<Vec<ApplicationResponseDto>>>> {
    let applications = service.list_for_volunteer(&session.email).await?;
    Ok(Json(ApiResponse::success(Some(applications), None, None)))
}

/// List applications for the calling NGO's opportunities, newest first
#[utoipa::path(
    get,
    path = "/api/applications/ngo",
    responses(
        (status = 200, description = "NGO applications", body = ApiResponse<Vec<ApplicationResponseDto>>),
        (status = 401, description = "Missing session headers")
    ),
    tag = "applications"
)]
pub async fn list_ngo_applications(
    State(service): State<Arc<ApplicationService>>,
    session: NgoSession,
) -> Result<Json<ApiResponse<Vec<ApplicationResponseDto>>>> {
    let applications = service.list_for_ngo(session.ngo_id).await?;
    Ok(Json(ApiResponse::success(Some(applications), None, None)))
}

/// Review an application (approve or reject)
#[utoipa::path(
    put,
    path = "/api/applications/{id}",
    params(("id" = Uuid, Path, description = "Application id")),
    request_body = ReviewApplicationDto,
    responses(
        (status = 200, description = "Application reviewed", body = ApiResponse<ApplicationResponseDto>),
        (status = 404, description = "Application not found"),
        (status = 409, description = "Application already reviewed")
    ),
    tag = "applications"
)]
pub async fn review_application(
    State(service): State<Arc<ApplicationService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<ReviewApplicationDto>,
) -> Result<Json<ApiResponse<ApplicationResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let application = service.review(id, dto).await?;
    let message = format!("Application {} successfully", application.status);
    Ok(Json(ApiResponse::success(
        Some(application),
        Some(message),
        None,
    )))
}

/// Withdraw an application
#[utoipa::path(
    delete,
    path = "/api/applications/{id}",
    params(("id" = Uuid, Path, description = "Application id")),
    responses(
        (status = 200, description = "Application deleted"),
        (status = 404, description = "Application not found")
    ),
    tag = "applications"
)]
pub async fn delete_application(
    State(service): State<Arc<ApplicationService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Application deleted successfully".to_string()),
        None,
    )))
}
