use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Volunteer skill enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "volunteer_skill", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VolunteerSkill {
    Teaching,
    Healthcare,
    Technology,
    Environment,
    Fundraising,
    Communication,
}

impl std::fmt::Display for VolunteerSkill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VolunteerSkill::Teaching => write!(f, "teaching"),
            VolunteerSkill::Healthcare => write!(f, "healthcare"),
            VolunteerSkill::Technology => write!(f, "technology"),
            VolunteerSkill::Environment => write!(f, "environment"),
            VolunteerSkill::Fundraising => write!(f, "fundraising"),
            VolunteerSkill::Communication => write!(f, "communication"),
        }
    }
}

/// Availability enum matching database enum
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "volunteer_availability", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Weekends,
    Weekdays,
    #[default]
    Flexible,
    Evenings,
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Availability::Weekends => write!(f, "weekends"),
            Availability::Weekdays => write!(f, "weekdays"),
            Availability::Flexible => write!(f, "flexible"),
            Availability::Evenings => write!(f, "evenings"),
        }
    }
}

/// Database model for volunteer
#[derive(Debug, Clone, FromRow)]
pub struct Volunteer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub skills: Vec<VolunteerSkill>,
    pub availability: Availability,
    pub profile_picture: Option<String>,
    pub is_verified: bool,
    pub rating: f64,
    pub completed_hours: i32,
    pub joined_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
