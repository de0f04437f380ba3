use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::volunteers::models::{Availability, Volunteer, VolunteerSkill};
use crate::shared::validation::PHONE_REGEX;

/// Request DTO for creating or updating a volunteer profile.
/// Submitting an email that already exists updates that profile.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertVolunteerDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number"))]
    pub phone: Option<String>,

    #[validate(length(max = 255, message = "Location must not exceed 255 characters"))]
    pub location: Option<String>,

    #[validate(length(max = 1000, message = "Bio must not exceed 1000 characters"))]
    pub bio: Option<String>,

    pub skills: Option<Vec<VolunteerSkill>>,

    pub availability: Option<Availability>,

    pub profile_picture: Option<String>,
}

/// Request DTO for partially updating a volunteer by id
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVolunteerDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number"))]
    pub phone: Option<String>,

    #[validate(length(max = 255, message = "Location must not exceed 255 characters"))]
    pub location: Option<String>,

    #[validate(length(max = 1000, message = "Bio must not exceed 1000 characters"))]
    pub bio: Option<String>,

    pub skills: Option<Vec<VolunteerSkill>>,

    pub availability: Option<Availability>,

    pub profile_picture: Option<String>,
}

/// Query params for volunteer search
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct VolunteerSearchQuery {
    /// Matches name, location or any skill (case-insensitive substring)
    pub keyword: Option<String>,
    /// Exact skill membership
    pub skill: Option<VolunteerSkill>,
    /// Case-insensitive location substring
    pub location: Option<String>,
    /// Exact availability match
    pub availability: Option<Availability>,
}

/// Response DTO for volunteer
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerResponseDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub skills: Vec<VolunteerSkill>,
    pub availability: Availability,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    pub is_verified: bool,
    pub rating: f64,
    pub completed_hours: i32,
    pub joined_date: DateTime<Utc>,
}

impl From<Volunteer> for VolunteerResponseDto {
    fn from(v: Volunteer) -> Self {
        Self {
            id: v.id,
            name: v.name,
            email: v.email,
            phone: v.phone,
            location: v.location,
            bio: v.bio,
            skills: v.skills,
            availability: v.availability,
            profile_picture: v.profile_picture,
            is_verified: v.is_verified,
            rating: v.rating,
            completed_hours: v.completed_hours,
            joined_date: v.joined_date,
        }
    }
}
