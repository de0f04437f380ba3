use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::applications::dtos::{
    ApplicationResponseDto, ReviewApplicationDto, SubmitApplicationDto,
};
use crate::features::applications::models::{Application, ApplicationStatus};
use crate::shared::constants::{
    ANONYMOUS_VOLUNTEER_EMAIL, ANONYMOUS_VOLUNTEER_NAME, DEFAULT_REVIEWER,
};
use crate::shared::validation::normalize_email;

const APPLICATION_COLUMNS: &str = "id, volunteer_id, volunteer_name, volunteer_email, \
     opportunity_id, opportunity_title, ngo_id, status, applied_date, message, reviewed_date, \
     reviewed_by, created_at, updated_at";

/// Resolve the submitted identity, falling back to the guest sentinels.
/// Blank values count as absent; emails are normalized.
fn resolve_identity(name: Option<String>, email: Option<String>) -> (String, String) {
    let name = name
        .filter(|n| !n.trim().is_empty())
        .map(|n| n.trim().to_string())
        .unwrap_or_else(|| ANONYMOUS_VOLUNTEER_NAME.to_string());

    let email = email
        .filter(|e| !e.trim().is_empty())
        .map(|e| normalize_email(&e))
        .unwrap_or_else(|| ANONYMOUS_VOLUNTEER_EMAIL.to_string());

    (name, email)
}

/// A review is only valid while the application is still pending;
/// `approved` and `rejected` are terminal.
fn ensure_reviewable(status: ApplicationStatus) -> Result<()> {
    if status.is_terminal() {
        return Err(AppError::Conflict(
            "Application has already been reviewed".to_string(),
        ));
    }
    Ok(())
}

/// Service governing the application lifecycle: submission, review
/// transitions, deletion, and the paired `volunteers_applied` counter
/// updates on the opportunity.
pub struct ApplicationService {
    pool: PgPool,
}

impl ApplicationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Submit an application for an opportunity.
    ///
    /// Snapshots the opportunity title and owning NGO, inserts the
    /// pending application and increments the opportunity's counter in
    /// one transaction. At most one application may exist per
    /// (opportunity, email) pair.
    pub async fn submit(&self, dto: SubmitApplicationDto) -> Result<ApplicationResponseDto> {
        let (volunteer_name, volunteer_email) =
            resolve_identity(dto.volunteer_name, dto.volunteer_email);

        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to begin transaction: {:?}", e);
            AppError::Database(e)
        })?;

        // Lock the opportunity row so concurrent submits serialize on the counter
        let opportunity = sqlx::query_as::<_, (Uuid, String, Uuid)>(
            "SELECT id, title, ngo_id FROM opportunities WHERE id = $1 FOR UPDATE",
        )
        .bind(dto.opportunity_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load opportunity: {:?}", e);
            AppError::Database(e)
        })?;

        let (opportunity_id, opportunity_title, ngo_id) =
            opportunity.ok_or_else(|| AppError::NotFound("Opportunity not found".to_string()))?;

        let already_applied = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM applications WHERE opportunity_id = $1 AND volunteer_email = $2)",
        )
        .bind(opportunity_id)
        .bind(&volunteer_email)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to check existing application: {:?}", e);
            AppError::Database(e)
        })?;

        if already_applied {
            return Err(AppError::Conflict(
                "You have already applied to this opportunity".to_string(),
            ));
        }

        let application = sqlx::query_as::<_, Application>(&format!(
            r#"
            INSERT INTO applications (
                volunteer_id, volunteer_name, volunteer_email,
                opportunity_id, opportunity_title, ngo_id, message
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {APPLICATION_COLUMNS}
            "#
        ))
        .bind(dto.volunteer_id)
        .bind(&volunteer_name)
        .bind(&volunteer_email)
        .bind(opportunity_id)
        .bind(&opportunity_title)
        .bind(ngo_id)
        .bind(&dto.message)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert application: {:?}", e);
            AppError::conflict_on_unique(e, "You have already applied to this opportunity")
        })?;

        sqlx::query(
            "UPDATE opportunities SET volunteers_applied = volunteers_applied + 1, updated_at = now() WHERE id = $1",
        )
        .bind(opportunity_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to increment applied counter: {:?}", e);
            AppError::Database(e)
        })?;

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit application: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Application submitted: id={}, opportunity_id={}, email={}",
            application.id,
            opportunity_id,
            application.volunteer_email
        );

        Ok(application.into())
    }

    /// Review a pending application: set the decision, the review
    /// timestamp and the reviewer name.
    pub async fn review(
        &self,
        id: Uuid,
        dto: ReviewApplicationDto,
    ) -> Result<ApplicationResponseDto> {
        let current = sqlx::query_scalar::<_, ApplicationStatus>(
            "SELECT status FROM applications WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load application: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound("Application not found".to_string()))?;

        ensure_reviewable(current)?;

        let reviewed_by = dto
            .reviewed_by
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REVIEWER.to_string());

        // Guard on status again so a concurrent review cannot overwrite
        let application = sqlx::query_as::<_, Application>(&format!(
            r#"
            UPDATE applications SET
                status = $2,
                reviewed_date = now(),
                reviewed_by = $3,
                updated_at = now()
            WHERE id = $1 AND status = 'pending'
            RETURNING {APPLICATION_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(ApplicationStatus::from(dto.status))
        .bind(&reviewed_by)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to review application: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| {
            AppError::Conflict("Application has already been reviewed".to_string())
        })?;

        tracing::info!(
            "Application {} {} by {}",
            application.id,
            application.status,
            reviewed_by
        );

        Ok(application.into())
    }

    /// Delete an application and decrement the opportunity's counter,
    /// symmetrically to submit, in one transaction.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to begin transaction: {:?}", e);
            AppError::Database(e)
        })?;

        let opportunity_id = sqlx::query_scalar::<_, Uuid>(
            "DELETE FROM applications WHERE id = $1 RETURNING opportunity_id",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete application: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound("Application not found".to_string()))?;

        // The opportunity may already be gone; decrementing zero rows is fine
        sqlx::query(
            "UPDATE opportunities SET volunteers_applied = volunteers_applied - 1, updated_at = now() WHERE id = $1",
        )
        .bind(opportunity_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to decrement applied counter: {:?}", e);
            AppError::Database(e)
        })?;

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit application deletion: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Application deleted: id={}", id);
        Ok(())
    }

    /// List a volunteer's applications by denormalized email, newest first
    pub async fn list_for_volunteer(&self, email: &str) -> Result<Vec<ApplicationResponseDto>> {
        let applications = sqlx::query_as::<_, Application>(&format!(
            r#"
            SELECT {APPLICATION_COLUMNS}
            FROM applications
            WHERE volunteer_email = $1
            ORDER BY applied_date DESC
            "#
        ))
        .bind(normalize_email(email))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list volunteer applications: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(applications.into_iter().map(Into::into).collect())
    }

    /// List applications for the opportunities an NGO owns, newest first
    pub async fn list_for_ngo(&self, ngo_id: Uuid) -> Result<Vec<ApplicationResponseDto>> {
        let applications = sqlx::query_as::<_, Application>(&format!(
            r#"
            SELECT {APPLICATION_COLUMNS}
            FROM applications
            WHERE ngo_id = $1
            ORDER BY applied_date DESC
            "#
        ))
        .bind(ngo_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list NGO applications: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(applications.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_applications_are_reviewable() {
        assert!(ensure_reviewable(ApplicationStatus::Pending).is_ok());
    }

    #[test]
    fn terminal_states_block_further_review() {
        // Both orderings: an approved application cannot be rejected and
        // a rejected one cannot be approved.
        assert!(matches!(
            ensure_reviewable(ApplicationStatus::Approved),
            Err(AppError::Conflict(_))
        ));
        assert!(matches!(
            ensure_reviewable(ApplicationStatus::Rejected),
            Err(AppError::Conflict(_))
        ));
    }

    #[test]
    fn guest_identity_falls_back_to_sentinels() {
        let (name, email) = resolve_identity(None, None);
        assert_eq!(name, ANONYMOUS_VOLUNTEER_NAME);
        assert_eq!(email, ANONYMOUS_VOLUNTEER_EMAIL);

        let (name, email) = resolve_identity(Some("  ".to_string()), Some(String::new()));
        assert_eq!(name, ANONYMOUS_VOLUNTEER_NAME);
        assert_eq!(email, ANONYMOUS_VOLUNTEER_EMAIL);
    }

    #[test]
    fn provided_identity_is_trimmed_and_normalized() {
        let (name, email) = resolve_identity(
            Some(" Jane Doe ".to_string()),
            Some("Jane@Example.COM".to_string()),
        );
        assert_eq!(name, "Jane Doe");
        assert_eq!(email, "jane@example.com");
    }
}
