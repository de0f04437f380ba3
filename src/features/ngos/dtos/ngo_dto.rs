use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::ngos::models::{Cause, Ngo, NgoSize};
use crate::shared::validation::PHONE_REGEX;

/// Request DTO for creating or updating an NGO profile.
/// Submitting an email that already exists updates that profile.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertNgoDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number"))]
    pub phone: Option<String>,

    #[validate(length(max = 255, message = "Website must not exceed 255 characters"))]
    pub website: Option<String>,

    #[validate(length(max = 500, message = "Address must not exceed 500 characters"))]
    pub address: Option<String>,

    #[validate(length(max = 2000, message = "Description must not exceed 2000 characters"))]
    pub description: Option<String>,

    pub causes: Option<Vec<Cause>>,

    pub logo: Option<String>,

    #[validate(range(min = 1800, max = 2100, message = "Founded year out of range"))]
    pub founded_year: Option<i32>,

    pub size: Option<NgoSize>,

    #[validate(length(max = 100, message = "Registration number must not exceed 100 characters"))]
    pub registration_number: Option<String>,
}

/// Request DTO for partially updating an NGO by id
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNgoDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number"))]
    pub phone: Option<String>,

    #[validate(length(max = 255, message = "Website must not exceed 255 characters"))]
    pub website: Option<String>,

    #[validate(length(max = 500, message = "Address must not exceed 500 characters"))]
    pub address: Option<String>,

    #[validate(length(max = 2000, message = "Description must not exceed 2000 characters"))]
    pub description: Option<String>,

    pub causes: Option<Vec<Cause>>,

    pub logo: Option<String>,

    #[validate(range(min = 1800, max = 2100, message = "Founded year out of range"))]
    pub founded_year: Option<i32>,

    pub size: Option<NgoSize>,

    #[validate(length(max = 100, message = "Registration number must not exceed 100 characters"))]
    pub registration_number: Option<String>,
}

/// Query params for NGO search
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct NgoSearchQuery {
    /// Comma-separated causes; an NGO matches if it has any of them
    pub causes: Option<String>,
    /// Case-insensitive address substring
    pub location: Option<String>,
    /// Exact size match
    pub size: Option<NgoSize>,
}

/// Response DTO for NGO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NgoResponseDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub causes: Vec<Cause>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub is_verified: bool,
    pub rating: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub founded_year: Option<i32>,
    pub size: NgoSize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_number: Option<String>,
    pub joined_date: DateTime<Utc>,
}

impl From<Ngo> for NgoResponseDto {
    fn from(n: Ngo) -> Self {
        Self {
            id: n.id,
            name: n.name,
            email: n.email,
            phone: n.phone,
            website: n.website,
            address: n.address,
            description: n.description,
            causes: n.causes,
            logo: n.logo,
            is_verified: n.is_verified,
            rating: n.rating,
            founded_year: n.founded_year,
            size: n.size,
            registration_number: n.registration_number,
            joined_date: n.joined_date,
        }
    }
}
