use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Application status enum matching database enum.
///
/// `pending` is the only initial state; `approved` and `rejected` are
/// terminal. A reviewed application cannot be reviewed again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "application_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ApplicationStatus::Pending)
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplicationStatus::Pending => write!(f, "pending"),
            ApplicationStatus::Approved => write!(f, "approved"),
            ApplicationStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// Database model for application.
///
/// `volunteer_name`, `volunteer_email` and `opportunity_title` are
/// snapshots taken at submission time. `opportunity_id`, `ngo_id` and
/// `volunteer_id` are weak references; the records they point to may be
/// deleted independently.
#[derive(Debug, Clone, FromRow)]
pub struct Application {
    pub id: Uuid,
    pub volunteer_id: Option<Uuid>,
    pub volunteer_name: String,
    pub volunteer_email: String,
    pub opportunity_id: Uuid,
    pub opportunity_title: String,
    pub ngo_id: Uuid,
    pub status: ApplicationStatus,
    pub applied_date: DateTime<Utc>,
    pub message: Option<String>,
    pub reviewed_date: Option<DateTime<Utc>>,
    pub reviewed_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
