use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::core::session::NgoSession;
use crate::features::opportunities::dtos::{
    CreateOpportunityDto, OpportunityResponseDto, OpportunitySearchQuery, UpdateOpportunityDto,
};
use crate::features::opportunities::models::OpportunityCategory;
use crate::features::opportunities::services::OpportunityService;
use crate::shared::types::ApiResponse;

/// List active opportunities, earliest start date first
#[utoipa::path(
    get,
    path = "/api/opportunities",
    responses(
        (status = 200, description = "Active opportunities", body = ApiResponse<Vec<OpportunityResponseDto>>),
    ),
    tag = "opportunities"
)]
pub async fn list_opportunities(
    State(service): State<Arc<OpportunityService>>,
) -> Result<Json<ApiResponse<Vec<OpportunityResponseDto>>>> {
    let opportunities = service.list_active().await?;
    Ok(Json(ApiResponse::success(Some(opportunities), None, None)))
}

/// Search active opportunities
///
/// All criteria combine with AND; an empty result is a valid response.
#[utoipa::path(
    get,
    path = "/api/opportunities/search",
    params(OpportunitySearchQuery),
    responses(
        (status = 200, description = "Matching opportunities", body = ApiResponse<Vec<OpportunityResponseDto>>),
    ),
    tag = "opportunities"
)]
pub async fn search_opportunities(
    State(service): State<Arc<OpportunityService>>,
    Query(query): Query<OpportunitySearchQuery>,
) -> Result<Json<ApiResponse<Vec<OpportunityResponseDto>>>> {
    let opportunities = service.search(query).await?;
    Ok(Json(ApiResponse::success(Some(opportunities), None, None)))
}

/// List the calling NGO's own opportunities, newest first
#[utoipa::path(
    get,
    path = "/api/opportunities/my",
    responses(
        (status = 200, description = "NGO opportunities", body = ApiResponse<Vec<OpportunityResponseDto>>),
        (status = 401, description = "Missing session headers")
    ),
    tag = "opportunities"
)]
pub async fn list_my_opportunities(
    State(service): State<Arc<OpportunityService>>,
    session: NgoSession,
) -> Result<Json<ApiResponse<Vec<OpportunityResponseDto>>>> {
    let opportunities = service.list_for_ngo(session.ngo_id).await?;
    Ok(Json(ApiResponse::success(Some(opportunities), None, None)))
}

/// List active opportunities in a category
#[utoipa::path(
    get,
    path = "/api/opportunities/category/{category}",
    params(("category" = OpportunityCategory, Path, description = "Opportunity category")),
    responses(
        (status = 200, description = "Opportunities in category", body = ApiResponse<Vec<OpportunityResponseDto>>),
    ),
    tag = "opportunities"
)]
pub async fn list_by_category(
    State(service): State<Arc<OpportunityService>>,
    Path(category): Path<OpportunityCategory>,
) -> Result<Json<ApiResponse<Vec<OpportunityResponseDto>>>> {
    let opportunities = service.list_by_category(category).await?;
    Ok(Json(ApiResponse::success(Some(opportunities), None, None)))
}

/// List active high-urgency opportunities
#[utoipa::path(
    get,
    path = "/api/opportunities/urgent/all",
    responses(
        (status = 200, description = "Urgent opportunities", body = ApiResponse<Vec<OpportunityResponseDto>>),
    ),
    tag = "opportunities"
)]
pub async fn list_urgent(
    State(service): State<Arc<OpportunityService>>,
) -> Result<Json<ApiResponse<Vec<OpportunityResponseDto>>>> {
    let opportunities = service.list_urgent().await?;
    Ok(Json(ApiResponse::success(Some(opportunities), None, None)))
}

/// Create an opportunity owned by the calling NGO
#[utoipa::path(
    post,
    path = "/api/opportunities",
    request_body = CreateOpportunityDto,
    responses(
        (status = 201, description = "Opportunity created", body = ApiResponse<OpportunityResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing session headers")
    ),
    tag = "opportunities"
)]
pub async fn create_opportunity(
    State(service): State<Arc<OpportunityService>>,
    session: NgoSession,
    AppJson(dto): AppJson<CreateOpportunityDto>,
) -> Result<(StatusCode, Json<ApiResponse<OpportunityResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let opportunity = service.create(session.ngo_id, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(opportunity), None, None)),
    ))
}

/// Get opportunity by id
#[utoipa::path(
    get,
    path = "/api/opportunities/{id}",
    params(("id" = Uuid, Path, description = "Opportunity id")),
    responses(
        (status = 200, description = "Opportunity found", body = ApiResponse<OpportunityResponseDto>),
        (status = 404, description = "Opportunity not found")
    ),
    tag = "opportunities"
)]
pub async fn get_opportunity(
    State(service): State<Arc<OpportunityService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<OpportunityResponseDto>>> {
    let opportunity = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(opportunity), None, None)))
}

/// Update opportunity by id
#[utoipa::path(
    put,
    path = "/api/opportunities/{id}",
    params(("id" = Uuid, Path, description = "Opportunity id")),
    request_body = UpdateOpportunityDto,
    responses(
        (status = 200, description = "Opportunity updated", body = ApiResponse<OpportunityResponseDto>),
        (status = 404, description = "Opportunity not found")
    ),
    tag = "opportunities"
)]
pub async fn update_opportunity(
    State(service): State<Arc<OpportunityService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateOpportunityDto>,
) -> Result<Json<ApiResponse<OpportunityResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let opportunity = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(opportunity), None, None)))
}

/// Delete opportunity by id
#[utoipa::path(
    delete,
    path = "/api/opportunities/{id}",
    params(("id" = Uuid, Path, description = "Opportunity id")),
    responses(
        (status = 200, description = "Opportunity deleted"),
        (status = 404, description = "Opportunity not found")
    ),
    tag = "opportunities"
)]
pub async fn delete_opportunity(
    State(service): State<Arc<OpportunityService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Opportunity deleted successfully".to_string()),
        None,
    )))
}
