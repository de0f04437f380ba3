use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::applications::models::{Application, ApplicationStatus};

/// Request DTO for submitting an application.
///
/// Name and email may be omitted for guest applications; they default to
/// the anonymous-volunteer sentinels.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitApplicationDto {
    pub opportunity_id: Uuid,

    pub volunteer_id: Option<Uuid>,

    #[validate(length(max = 255, message = "Name must not exceed 255 characters"))]
    pub volunteer_name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub volunteer_email: Option<String>,

    #[validate(length(max = 500, message = "Message must not exceed 500 characters"))]
    pub message: Option<String>,
}

/// The only decisions a review may carry. Any other status value is
/// rejected when the request body is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReviewDecision {
    Approved,
    Rejected,
}

impl From<ReviewDecision> for ApplicationStatus {
    fn from(decision: ReviewDecision) -> Self {
        match decision {
            ReviewDecision::Approved => ApplicationStatus::Approved,
            ReviewDecision::Rejected => ApplicationStatus::Rejected,
        }
    }
}

/// Request DTO for reviewing an application
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewApplicationDto {
    pub status: ReviewDecision,

    #[validate(length(max = 255, message = "Reviewer name must not exceed 255 characters"))]
    pub reviewed_by: Option<String>,
}

/// Response DTO for application
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationResponseDto {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volunteer_id: Option<Uuid>,
    pub volunteer_name: String,
    pub volunteer_email: String,
    pub opportunity_id: Uuid,
    pub opportunity_title: String,
    pub ngo_id: Uuid,
    pub status: ApplicationStatus,
    pub applied_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<String>,
}

impl From<Application> for ApplicationResponseDto {
    fn from(a: Application) -> Self {
        Self {
            id: a.id,
            volunteer_id: a.volunteer_id,
            volunteer_name: a.volunteer_name,
            volunteer_email: a.volunteer_email,
            opportunity_id: a.opportunity_id,
            opportunity_title: a.opportunity_title,
            ngo_id: a.ngo_id,
            status: a.status,
            applied_date: a.applied_date,
            message: a.message,
            reviewed_date: a.reviewed_date,
            reviewed_by: a.reviewed_by,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_decision_accepts_only_approved_and_rejected() {
        let approved: ReviewDecision = serde_json::from_str(r#""approved""#).unwrap();
        let rejected: ReviewDecision = serde_json::from_str(r#""rejected""#).unwrap();
        assert_eq!(approved, ReviewDecision::Approved);
        assert_eq!(rejected, ReviewDecision::Rejected);

        assert!(serde_json::from_str::<ReviewDecision>(r#""pending""#).is_err());
        assert!(serde_json::from_str::<ReviewDecision>(r#""shipped""#).is_err());
    }

    #[test]
    fn review_decision_maps_to_terminal_status() {
        assert_eq!(
            ApplicationStatus::from(ReviewDecision::Approved),
            ApplicationStatus::Approved
        );
        assert_eq!(
            ApplicationStatus::from(ReviewDecision::Rejected),
            ApplicationStatus::Rejected
        );
        assert!(ApplicationStatus::from(ReviewDecision::Approved).is_terminal());
    }
}
