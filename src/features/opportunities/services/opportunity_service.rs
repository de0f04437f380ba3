use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::opportunities::dtos::{
    CreateOpportunityDto, OpportunityResponseDto, OpportunitySearchQuery, UpdateOpportunityDto,
};
use crate::features::opportunities::models::{
    Opportunity, OpportunityCategory, OpportunityType, OpportunityWithNgo, Urgency,
};

const OPPORTUNITY_COLUMNS: &str = "id, title, description, category, opportunity_type, start_date, \
     end_date, time_slot, location, latitude, longitude, volunteers_needed, volunteers_applied, \
     requirements, skills, ngo_id, is_active, urgency, images, application_deadline, created_at, updated_at";

const JOINED_COLUMNS: &str = "o.id, o.title, o.description, o.category, o.opportunity_type, \
     o.start_date, o.end_date, o.time_slot, o.location, o.latitude, o.longitude, \
     o.volunteers_needed, o.volunteers_applied, o.requirements, o.skills, o.ngo_id, o.is_active, \
     o.urgency, o.images, o.application_deadline, o.created_at, o.updated_at, n.name AS ngo_name";

/// Filter over an already-fetched opportunity list. All criteria combine
/// with AND; an absent criterion matches everything.
#[derive(Debug, Default)]
pub struct OpportunityFilter {
    pub keyword: Option<String>,
    pub category: Option<OpportunityCategory>,
    pub location: Option<String>,
    pub opportunity_type: Option<OpportunityType>,
    pub urgency: Option<Urgency>,
}

impl From<OpportunitySearchQuery> for OpportunityFilter {
    fn from(query: OpportunitySearchQuery) -> Self {
        Self {
            keyword: query.keyword.filter(|s| !s.trim().is_empty()),
            category: query.category,
            location: query.location.filter(|s| !s.trim().is_empty()),
            opportunity_type: query.opportunity_type,
            urgency: query.urgency,
        }
    }
}

impl OpportunityFilter {
    pub fn matches(&self, opportunity: &Opportunity) -> bool {
        let matches_keyword = match &self.keyword {
            None => true,
            Some(keyword) => {
                let keyword = keyword.to_lowercase();
                opportunity.title.to_lowercase().contains(&keyword)
                    || opportunity.description.to_lowercase().contains(&keyword)
            }
        };

        let matches_category = self.category.map_or(true, |c| opportunity.category == c);

        let matches_location = match &self.location {
            None => true,
            Some(location) => opportunity
                .location
                .to_lowercase()
                .contains(&location.to_lowercase()),
        };

        let matches_type = self
            .opportunity_type
            .map_or(true, |t| opportunity.opportunity_type == t);

        let matches_urgency = self.urgency.map_or(true, |u| opportunity.urgency == u);

        matches_keyword && matches_category && matches_location && matches_type && matches_urgency
    }
}

/// Service for opportunity operations
pub struct OpportunityService {
    pool: PgPool,
}

impl OpportunityService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List active opportunities with their owning NGO's name
    pub async fn list_active(&self) -> Result<Vec<OpportunityResponseDto>> {
        let rows = self.fetch_active().await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Search active opportunities with the given criteria
    pub async fn search(
        &self,
        query: OpportunitySearchQuery,
    ) -> Result<Vec<OpportunityResponseDto>> {
        let filter = OpportunityFilter::from(query);
        let rows = self.fetch_active().await?;

        Ok(rows
            .into_iter()
            .filter(|row| filter.matches(&row.opportunity))
            .map(Into::into)
            .collect())
    }

    /// List active opportunities in a category
    pub async fn list_by_category(
        &self,
        category: OpportunityCategory,
    ) -> Result<Vec<OpportunityResponseDto>> {
        self.search(OpportunitySearchQuery {
            category: Some(category),
            ..Default::default()
        })
        .await
    }

    /// List active high-urgency opportunities
    pub async fn list_urgent(&self) -> Result<Vec<OpportunityResponseDto>> {
        self.search(OpportunitySearchQuery {
            urgency: Some(Urgency::High),
            ..Default::default()
        })
        .await
    }

    /// List all opportunities owned by an NGO, newest first
    pub async fn list_for_ngo(&self, ngo_id: Uuid) -> Result<Vec<OpportunityResponseDto>> {
        let rows = sqlx::query_as::<_, OpportunityWithNgo>(&format!(
            r#"
            SELECT {JOINED_COLUMNS}
            FROM opportunities o
            LEFT JOIN ngos n ON n.id = o.ngo_id
            WHERE o.ngo_id = $1
            ORDER BY o.created_at DESC
            "#
        ))
        .bind(ngo_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list NGO opportunities: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Get opportunity by id with its owning NGO's name
    pub async fn get(&self, id: Uuid) -> Result<OpportunityResponseDto> {
        let row = sqlx::query_as::<_, OpportunityWithNgo>(&format!(
            r#"
            SELECT {JOINED_COLUMNS}
            FROM opportunities o
            LEFT JOIN ngos n ON n.id = o.ngo_id
            WHERE o.id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get opportunity: {:?}", e);
            AppError::Database(e)
        })?;

        row.map(Into::into)
            .ok_or_else(|| AppError::NotFound("Opportunity not found".to_string()))
    }

    /// Create an opportunity owned by the given NGO
    pub async fn create(
        &self,
        ngo_id: Uuid,
        dto: CreateOpportunityDto,
    ) -> Result<OpportunityResponseDto> {
        let (latitude, longitude) = match dto.coordinates {
            Some(c) => (Some(c.latitude), Some(c.longitude)),
            None => (None, None),
        };

        let opportunity = sqlx::query_as::<_, Opportunity>(&format!(
            r#"
            INSERT INTO opportunities (
                title, description, category, opportunity_type, start_date, end_date, time_slot,
                location, latitude, longitude, volunteers_needed, requirements, skills, ngo_id,
                urgency, images, application_deadline
            ) VALUES (
                $1, $2, $3,
                COALESCE($4, 'one-time'::opportunity_type),
                $5, $6, $7, $8, $9, $10, $11, $12,
                COALESCE($13, '{{}}'::text[]),
                $14,
                COALESCE($15, 'medium'::opportunity_urgency),
                COALESCE($16, '{{}}'::text[]),
                $17
            )
            RETURNING {OPPORTUNITY_COLUMNS}
            "#
        ))
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(dto.category)
        .bind(dto.opportunity_type)
        .bind(dto.start_date)
        .bind(dto.end_date)
        .bind(&dto.time)
        .bind(&dto.location)
        .bind(latitude)
        .bind(longitude)
        .bind(dto.volunteers_needed)
        .bind(&dto.requirements)
        .bind(&dto.skills)
        .bind(ngo_id)
        .bind(dto.urgency)
        .bind(&dto.images)
        .bind(dto.application_deadline)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create opportunity: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Opportunity created: id={}, ngo_id={}",
            opportunity.id,
            ngo_id
        );

        Ok(opportunity.into())
    }

    /// Partially update an opportunity by id
    pub async fn update(
        &self,
        id: Uuid,
        dto: UpdateOpportunityDto,
    ) -> Result<OpportunityResponseDto> {
        let (latitude, longitude) = match dto.coordinates {
            Some(c) => (Some(c.latitude), Some(c.longitude)),
            None => (None, None),
        };

        let opportunity = sqlx::query_as::<_, Opportunity>(&format!(
            r#"
            UPDATE opportunities SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                category = COALESCE($4, category),
                opportunity_type = COALESCE($5, opportunity_type),
                start_date = COALESCE($6, start_date),
                end_date = COALESCE($7, end_date),
                time_slot = COALESCE($8, time_slot),
                location = COALESCE($9, location),
                latitude = COALESCE($10, latitude),
                longitude = COALESCE($11, longitude),
                volunteers_needed = COALESCE($12, volunteers_needed),
                requirements = COALESCE($13, requirements),
                skills = COALESCE($14, skills),
                is_active = COALESCE($15, is_active),
                urgency = COALESCE($16, urgency),
                images = COALESCE($17, images),
                application_deadline = COALESCE($18, application_deadline),
                updated_at = now()
            WHERE id = $1
            RETURNING {OPPORTUNITY_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(dto.category)
        .bind(dto.opportunity_type)
        .bind(dto.start_date)
        .bind(dto.end_date)
        .bind(&dto.time)
        .bind(&dto.location)
        .bind(latitude)
        .bind(longitude)
        .bind(dto.volunteers_needed)
        .bind(&dto.requirements)
        .bind(&dto.skills)
        .bind(dto.is_active)
        .bind(dto.urgency)
        .bind(&dto.images)
        .bind(dto.application_deadline)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update opportunity: {:?}", e);
            AppError::Database(e)
        })?;

        opportunity
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound("Opportunity not found".to_string()))
    }

    /// Delete an opportunity by id
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let deleted =
            sqlx::query_scalar::<_, Uuid>("DELETE FROM opportunities WHERE id = $1 RETURNING id")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to delete opportunity: {:?}", e);
                    AppError::Database(e)
                })?;

        if deleted.is_none() {
            return Err(AppError::NotFound("Opportunity not found".to_string()));
        }

        tracing::info!("Opportunity deleted: id={}", id);
        Ok(())
    }

    async fn fetch_active(&self) -> Result<Vec<OpportunityWithNgo>> {
        sqlx::query_as::<_, OpportunityWithNgo>(&format!(
            r#"
            SELECT {JOINED_COLUMNS}
            FROM opportunities o
            LEFT JOIN ngos n ON n.id = o.ngo_id
            WHERE o.is_active = TRUE
            ORDER BY o.start_date ASC
            "#
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list opportunities: {:?}", e);
            AppError::Database(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn opportunity(
        title: &str,
        description: &str,
        category: OpportunityCategory,
        location: &str,
    ) -> Opportunity {
        let now = Utc::now();
        Opportunity {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: description.to_string(),
            category,
            opportunity_type: OpportunityType::OneTime,
            start_date: now,
            end_date: None,
            time_slot: None,
            location: location.to_string(),
            latitude: None,
            longitude: None,
            volunteers_needed: 5,
            volunteers_applied: 0,
            requirements: None,
            skills: Vec::new(),
            ngo_id: Uuid::new_v4(),
            is_active: true,
            urgency: Urgency::Medium,
            images: Vec::new(),
            application_deadline: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn category_and_location_combine_with_and() {
        let tutoring = opportunity(
            "After-school tutoring",
            "Help students with homework",
            OpportunityCategory::Education,
            "Boston",
        );

        let include = OpportunityFilter {
            category: Some(OpportunityCategory::Education),
            location: Some("bos".to_string()),
            ..Default::default()
        };
        let exclude = OpportunityFilter {
            category: Some(OpportunityCategory::Health),
            ..Default::default()
        };

        assert!(include.matches(&tutoring));
        assert!(!exclude.matches(&tutoring));
    }

    #[test]
    fn keyword_matches_title_or_description() {
        let cleanup = opportunity(
            "Beach cleanup",
            "Collect litter along the shore",
            OpportunityCategory::Environment,
            "Santa Cruz",
        );

        let by_title = OpportunityFilter {
            keyword: Some("BEACH".to_string()),
            ..Default::default()
        };
        let by_description = OpportunityFilter {
            keyword: Some("litter".to_string()),
            ..Default::default()
        };
        let no_match = OpportunityFilter {
            keyword: Some("hospital".to_string()),
            ..Default::default()
        };

        assert!(by_title.matches(&cleanup));
        assert!(by_description.matches(&cleanup));
        assert!(!no_match.matches(&cleanup));
    }

    #[test]
    fn empty_filter_returns_input_unchanged() {
        let filter = OpportunityFilter::default();
        let opportunities = vec![
            opportunity("A", "first", OpportunityCategory::Education, "Boston"),
            opportunity("B", "second", OpportunityCategory::Health, "Denver"),
        ];

        let filtered: Vec<_> = opportunities
            .iter()
            .filter(|o| filter.matches(o))
            .collect();
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].title, "A");
        assert_eq!(filtered[1].title, "B");
    }

    #[test]
    fn zero_match_keyword_yields_empty() {
        let filter = OpportunityFilter {
            keyword: Some("nothing-here".to_string()),
            ..Default::default()
        };
        let opportunities = vec![opportunity(
            "A",
            "first",
            OpportunityCategory::Education,
            "Boston",
        )];

        assert!(opportunities.iter().filter(|o| filter.matches(o)).count() == 0);
    }

    #[test]
    fn type_and_urgency_are_exact_matches() {
        let mut event = opportunity(
            "Fundraiser gala",
            "Annual event",
            OpportunityCategory::Community,
            "NYC",
        );
        event.opportunity_type = OpportunityType::Event;
        event.urgency = Urgency::High;

        let matching = OpportunityFilter {
            opportunity_type: Some(OpportunityType::Event),
            urgency: Some(Urgency::High),
            ..Default::default()
        };
        let wrong_type = OpportunityFilter {
            opportunity_type: Some(OpportunityType::Ongoing),
            ..Default::default()
        };

        assert!(matching.matches(&event));
        assert!(!wrong_type.matches(&event));
    }
}
