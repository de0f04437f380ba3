use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::volunteers::dtos::{
    UpdateVolunteerDto, UpsertVolunteerDto, VolunteerResponseDto, VolunteerSearchQuery,
};
use crate::features::volunteers::models::{Availability, Volunteer, VolunteerSkill};
use crate::shared::validation::normalize_email;

const VOLUNTEER_COLUMNS: &str = "id, name, email, phone, location, bio, skills, availability, \
     profile_picture, is_verified, rating, completed_hours, joined_date, created_at, updated_at";

/// Filter over an already-fetched volunteer list. All criteria combine
/// with AND; an absent criterion matches everything.
#[derive(Debug, Default)]
pub struct VolunteerFilter {
    pub keyword: Option<String>,
    pub skill: Option<VolunteerSkill>,
    pub location: Option<String>,
    pub availability: Option<Availability>,
}

impl From<VolunteerSearchQuery> for VolunteerFilter {
    fn from(query: VolunteerSearchQuery) -> Self {
        Self {
            keyword: query.keyword.filter(|s| !s.trim().is_empty()),
            skill: query.skill,
            location: query.location.filter(|s| !s.trim().is_empty()),
            availability: query.availability,
        }
    }
}

impl VolunteerFilter {
    pub fn matches(&self, volunteer: &Volunteer) -> bool {
        let matches_keyword = match &self.keyword {
            None => true,
            Some(keyword) => {
                let keyword = keyword.to_lowercase();
                volunteer.name.to_lowercase().contains(&keyword)
                    || volunteer
                        .location
                        .as_deref()
                        .is_some_and(|l| l.to_lowercase().contains(&keyword))
                    || volunteer
                        .skills
                        .iter()
                        .any(|s| s.to_string().contains(&keyword))
            }
        };

        let matches_skill = self
            .skill
            .map_or(true, |skill| volunteer.skills.contains(&skill));

        let matches_location = match &self.location {
            None => true,
            Some(location) => volunteer
                .location
                .as_deref()
                .is_some_and(|l| l.to_lowercase().contains(&location.to_lowercase())),
        };

        let matches_availability = self
            .availability
            .map_or(true, |a| volunteer.availability == a);

        matches_keyword && matches_skill && matches_location && matches_availability
    }
}

/// Service for volunteer profile operations
pub struct VolunteerService {
    pool: PgPool,
}

impl VolunteerService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all verified volunteers
    pub async fn list(&self) -> Result<Vec<VolunteerResponseDto>> {
        let volunteers = self.fetch_verified().await?;
        Ok(volunteers.into_iter().map(Into::into).collect())
    }

    /// Search verified volunteers with the given criteria
    pub async fn search(&self, query: VolunteerSearchQuery) -> Result<Vec<VolunteerResponseDto>> {
        let filter = VolunteerFilter::from(query);
        let volunteers = self.fetch_verified().await?;

        Ok(volunteers
            .into_iter()
            .filter(|v| filter.matches(v))
            .map(Into::into)
            .collect())
    }

    /// Get volunteer by id
    pub async fn get(&self, id: Uuid) -> Result<VolunteerResponseDto> {
        let volunteer = sqlx::query_as::<_, Volunteer>(&format!(
            "SELECT {VOLUNTEER_COLUMNS} FROM volunteers WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get volunteer: {:?}", e);
            AppError::Database(e)
        })?;

        volunteer
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound("Volunteer not found".to_string()))
    }

    /// Create a volunteer profile, or update the existing one with the
    /// same email. Fields absent from the request keep their stored value.
    pub async fn upsert(&self, dto: UpsertVolunteerDto) -> Result<VolunteerResponseDto> {
        let email = normalize_email(&dto.email);

        let volunteer = sqlx::query_as::<_, Volunteer>(&format!(
            r#"
            INSERT INTO volunteers (name, email, phone, location, bio, skills, availability, profile_picture)
            VALUES (
                $1, $2, $3, $4, $5,
                COALESCE($6, '{{}}'::volunteer_skill[]),
                COALESCE($7, 'flexible'::volunteer_availability),
                $8
            )
            ON CONFLICT (email) DO UPDATE SET
                name = $1,
                phone = COALESCE($3, volunteers.phone),
                location = COALESCE($4, volunteers.location),
                bio = COALESCE($5, volunteers.bio),
                skills = COALESCE($6, volunteers.skills),
                availability = COALESCE($7, volunteers.availability),
                profile_picture = COALESCE($8, volunteers.profile_picture),
                updated_at = now()
            RETURNING {VOLUNTEER_COLUMNS}
            "#
        ))
        .bind(&dto.name)
        .bind(&email)
        .bind(&dto.phone)
        .bind(&dto.location)
        .bind(&dto.bio)
        .bind(&dto.skills)
        .bind(dto.availability)
        .bind(&dto.profile_picture)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to upsert volunteer: {:?}", e);
            AppError::conflict_on_unique(e, "Email already registered")
        })?;

        tracing::info!("Volunteer profile saved: id={}, email={}", volunteer.id, volunteer.email);

        Ok(volunteer.into())
    }

    /// Partially update a volunteer by id
    pub async fn update(&self, id: Uuid, dto: UpdateVolunteerDto) -> Result<VolunteerResponseDto> {
        let email = dto.email.as_deref().map(normalize_email);

        let volunteer = sqlx::query_as::<_, Volunteer>(&format!(
            r#"
            UPDATE volunteers SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                phone = COALESCE($4, phone),
                location = COALESCE($5, location),
                bio = COALESCE($6, bio),
                skills = COALESCE($7, skills),
                availability = COALESCE($8, availability),
                profile_picture = COALESCE($9, profile_picture),
                updated_at = now()
            WHERE id = $1
            RETURNING {VOLUNTEER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&dto.name)
        .bind(&email)
        .bind(&dto.phone)
        .bind(&dto.location)
        .bind(&dto.bio)
        .bind(&dto.skills)
        .bind(dto.availability)
        .bind(&dto.profile_picture)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update volunteer: {:?}", e);
            AppError::conflict_on_unique(e, "Email already registered")
        })?;

        volunteer
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound("Volunteer not found".to_string()))
    }

    /// Delete a volunteer by id
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let deleted = sqlx::query_scalar::<_, Uuid>("DELETE FROM volunteers WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete volunteer: {:?}", e);
                AppError::Database(e)
            })?;

        if deleted.is_none() {
            return Err(AppError::NotFound("Volunteer not found".to_string()));
        }

        tracing::info!("Volunteer deleted: id={}", id);
        Ok(())
    }

    async fn fetch_verified(&self) -> Result<Vec<Volunteer>> {
        sqlx::query_as::<_, Volunteer>(&format!(
            "SELECT {VOLUNTEER_COLUMNS} FROM volunteers WHERE is_verified = TRUE ORDER BY joined_date DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list volunteers: {:?}", e);
            AppError::Database(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn volunteer(name: &str, location: Option<&str>, skills: &[VolunteerSkill]) -> Volunteer {
        let now = Utc::now();
        Volunteer {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            phone: None,
            location: location.map(|l| l.to_string()),
            bio: None,
            skills: skills.to_vec(),
            availability: Availability::Flexible,
            profile_picture: None,
            is_verified: true,
            rating: 0.0,
            completed_hours: 0,
            joined_date: now,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn keyword_matches_name_location_or_skill() {
        let filter = VolunteerFilter {
            keyword: Some("tech".to_string()),
            ..Default::default()
        };

        let by_name = volunteer("Tech Taylor", None, &[]);
        let by_location = volunteer("Sam", Some("Technopark"), &[]);
        let by_skill = volunteer("Lee", None, &[VolunteerSkill::Technology]);
        let no_match = volunteer("Kim", Some("Boston"), &[VolunteerSkill::Teaching]);

        assert!(filter.matches(&by_name));
        assert!(filter.matches(&by_location));
        assert!(filter.matches(&by_skill));
        assert!(!filter.matches(&no_match));
    }

    #[test]
    fn skill_filter_is_exact_membership() {
        let filter = VolunteerFilter {
            skill: Some(VolunteerSkill::Healthcare),
            ..Default::default()
        };

        let nurse = volunteer("Ada", None, &[VolunteerSkill::Healthcare, VolunteerSkill::Teaching]);
        let coder = volunteer("Grace", None, &[VolunteerSkill::Technology]);

        assert!(filter.matches(&nurse));
        assert!(!filter.matches(&coder));
    }

    #[test]
    fn filters_combine_with_and() {
        let filter = VolunteerFilter {
            keyword: Some("ada".to_string()),
            skill: Some(VolunteerSkill::Healthcare),
            ..Default::default()
        };

        let both = volunteer("Ada", None, &[VolunteerSkill::Healthcare]);
        let keyword_only = volunteer("Ada", None, &[VolunteerSkill::Teaching]);

        assert!(filter.matches(&both));
        assert!(!filter.matches(&keyword_only));
    }

    #[test]
    fn empty_filter_keeps_input_unchanged() {
        let filter = VolunteerFilter::default();
        let volunteers = vec![
            volunteer("Ada", Some("Boston"), &[VolunteerSkill::Healthcare]),
            volunteer("Grace", None, &[]),
        ];

        let filtered: Vec<_> = volunteers.iter().filter(|v| filter.matches(v)).collect();
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].name, "Ada");
        assert_eq!(filtered[1].name, "Grace");
    }

    #[test]
    fn zero_match_keyword_yields_empty_not_error() {
        let filter = VolunteerFilter {
            keyword: Some("nonexistent".to_string()),
            ..Default::default()
        };
        let volunteers = vec![volunteer("Ada", None, &[])];

        let filtered: Vec<_> = volunteers.iter().filter(|v| filter.matches(v)).collect();
        assert!(filtered.is_empty());
    }

    #[test]
    fn blank_query_strings_are_treated_as_absent() {
        let query = VolunteerSearchQuery {
            keyword: Some("   ".to_string()),
            location: Some(String::new()),
            ..Default::default()
        };
        let filter = VolunteerFilter::from(query);

        assert!(filter.keyword.is_none());
        assert!(filter.location.is_none());
    }
}
