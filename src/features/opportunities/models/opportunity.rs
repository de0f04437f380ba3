use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Opportunity category enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "opportunity_category", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum OpportunityCategory {
    Education,
    Health,
    Environment,
    Community,
    DisasterRelief,
    Technology,
}

impl std::fmt::Display for OpportunityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OpportunityCategory::Education => write!(f, "education"),
            OpportunityCategory::Health => write!(f, "health"),
            OpportunityCategory::Environment => write!(f, "environment"),
            OpportunityCategory::Community => write!(f, "community"),
            OpportunityCategory::DisasterRelief => write!(f, "disaster-relief"),
            OpportunityCategory::Technology => write!(f, "technology"),
        }
    }
}

/// Engagement type enum matching database enum
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "opportunity_type", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum OpportunityType {
    #[default]
    OneTime,
    Ongoing,
    Event,
}

/// Urgency enum matching database enum
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "opportunity_urgency", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    #[default]
    Medium,
    High,
}

/// Database model for opportunity.
///
/// `volunteers_applied` is a denormalized counter maintained by the
/// application lifecycle (incremented on submit, decremented on delete,
/// untouched by review transitions).
#[derive(Debug, Clone, FromRow)]
pub struct Opportunity {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: OpportunityCategory,
    pub opportunity_type: OpportunityType,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub time_slot: Option<String>,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub volunteers_needed: i32,
    pub volunteers_applied: i32,
    pub requirements: Option<String>,
    pub skills: Vec<String>,
    pub ngo_id: Uuid,
    pub is_active: bool,
    pub urgency: Urgency,
    pub images: Vec<String>,
    pub application_deadline: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Opportunity row joined with its owning NGO's name. The NGO may have
/// been deleted; the name is then absent and rendered as unknown.
#[derive(Debug, Clone, FromRow)]
pub struct OpportunityWithNgo {
    #[sqlx(flatten)]
    pub opportunity: Opportunity,
    pub ngo_name: Option<String>,
}
