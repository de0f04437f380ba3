use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Cause enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "ngo_cause", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Cause {
    Education,
    Health,
    Environment,
    Poverty,
    HumanRights,
    DisasterRelief,
}

impl std::fmt::Display for Cause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cause::Education => write!(f, "education"),
            Cause::Health => write!(f, "health"),
            Cause::Environment => write!(f, "environment"),
            Cause::Poverty => write!(f, "poverty"),
            Cause::HumanRights => write!(f, "human-rights"),
            Cause::DisasterRelief => write!(f, "disaster-relief"),
        }
    }
}

impl std::str::FromStr for Cause {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "education" => Ok(Cause::Education),
            "health" => Ok(Cause::Health),
            "environment" => Ok(Cause::Environment),
            "poverty" => Ok(Cause::Poverty),
            "human-rights" => Ok(Cause::HumanRights),
            "disaster-relief" => Ok(Cause::DisasterRelief),
            other => Err(format!("Unknown cause: {}", other)),
        }
    }
}

/// Organization size enum matching database enum
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "ngo_size", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NgoSize {
    #[default]
    Small,
    Medium,
    Large,
}

/// Database model for NGO
#[derive(Debug, Clone, FromRow)]
pub struct Ngo {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub causes: Vec<Cause>,
    pub logo: Option<String>,
    pub is_verified: bool,
    pub rating: f64,
    pub founded_year: Option<i32>,
    pub size: NgoSize,
    pub registration_number: Option<String>,
    pub joined_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
