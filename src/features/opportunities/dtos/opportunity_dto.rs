use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::opportunities::models::{
    Opportunity, OpportunityCategory, OpportunityType, OpportunityWithNgo, Urgency,
};

/// Geographic coordinates for map display
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct CoordinatesDto {
    pub latitude: f64,
    pub longitude: f64,
}

/// Request DTO for creating an opportunity. The owning NGO comes from
/// the request session, not the body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOpportunityDto {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 3000, message = "Description must be 1-3000 characters"))]
    pub description: String,

    pub category: OpportunityCategory,

    #[serde(rename = "type")]
    pub opportunity_type: Option<OpportunityType>,

    pub start_date: DateTime<Utc>,

    pub end_date: Option<DateTime<Utc>>,

    /// Free-form time description, e.g. "9:00 AM - 1:00 PM"
    pub time: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Location must be 1-255 characters"))]
    pub location: String,

    pub coordinates: Option<CoordinatesDto>,

    #[validate(range(min = 1, message = "At least one volunteer is needed"))]
    pub volunteers_needed: i32,

    #[validate(length(max = 1000, message = "Requirements must not exceed 1000 characters"))]
    pub requirements: Option<String>,

    pub skills: Option<Vec<String>>,

    pub urgency: Option<Urgency>,

    pub images: Option<Vec<String>>,

    pub application_deadline: Option<DateTime<Utc>>,
}

/// Request DTO for partially updating an opportunity
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOpportunityDto {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 3000, message = "Description must be 1-3000 characters"))]
    pub description: Option<String>,

    pub category: Option<OpportunityCategory>,

    #[serde(rename = "type")]
    pub opportunity_type: Option<OpportunityType>,

    pub start_date: Option<DateTime<Utc>>,

    pub end_date: Option<DateTime<Utc>>,

    pub time: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Location must be 1-255 characters"))]
    pub location: Option<String>,

    pub coordinates: Option<CoordinatesDto>,

    #[validate(range(min = 1, message = "At least one volunteer is needed"))]
    pub volunteers_needed: Option<i32>,

    #[validate(length(max = 1000, message = "Requirements must not exceed 1000 characters"))]
    pub requirements: Option<String>,

    pub skills: Option<Vec<String>>,

    pub is_active: Option<bool>,

    pub urgency: Option<Urgency>,

    pub images: Option<Vec<String>>,

    pub application_deadline: Option<DateTime<Utc>>,
}

/// Query params for opportunity search
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct OpportunitySearchQuery {
    /// Matches title or description (case-insensitive substring)
    pub keyword: Option<String>,
    /// Exact category match
    pub category: Option<OpportunityCategory>,
    /// Case-insensitive location substring
    pub location: Option<String>,
    /// Exact engagement type match
    #[serde(rename = "type")]
    pub opportunity_type: Option<OpportunityType>,
    /// Exact urgency match
    pub urgency: Option<Urgency>,
}

/// Response DTO for opportunity
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityResponseDto {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: OpportunityCategory,
    #[serde(rename = "type")]
    pub opportunity_type: OpportunityType,
    pub start_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<CoordinatesDto>,
    pub volunteers_needed: i32,
    pub volunteers_applied: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    pub skills: Vec<String>,
    pub ngo_id: Uuid,
    /// Name of the owning NGO, absent if that NGO has been deleted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ngo_name: Option<String>,
    pub is_active: bool,
    pub urgency: Urgency,
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_deadline: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OpportunityResponseDto {
    fn build(o: Opportunity, ngo_name: Option<String>) -> Self {
        let coordinates = match (o.latitude, o.longitude) {
            (Some(latitude), Some(longitude)) => Some(CoordinatesDto {
                latitude,
                longitude,
            }),
            _ => None,
        };

        Self {
            id: o.id,
            title: o.title,
            description: o.description,
            category: o.category,
            opportunity_type: o.opportunity_type,
            start_date: o.start_date,
            end_date: o.end_date,
            time: o.time_slot,
            location: o.location,
            coordinates,
            volunteers_needed: o.volunteers_needed,
            volunteers_applied: o.volunteers_applied,
            requirements: o.requirements,
            skills: o.skills,
            ngo_id: o.ngo_id,
            ngo_name,
            is_active: o.is_active,
            urgency: o.urgency,
            images: o.images,
            application_deadline: o.application_deadline,
            created_at: o.created_at,
            updated_at: o.updated_at,
        }
    }
}

impl From<Opportunity> for OpportunityResponseDto {
    fn from(o: Opportunity) -> Self {
        Self::build(o, None)
    }
}

impl From<OpportunityWithNgo> for OpportunityResponseDto {
    fn from(row: OpportunityWithNgo) -> Self {
        Self::build(row.opportunity, row.ngo_name)
    }
}
