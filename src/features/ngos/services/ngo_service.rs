use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::ngos::dtos::{NgoResponseDto, NgoSearchQuery, UpdateNgoDto, UpsertNgoDto};
use crate::features::ngos::models::{Cause, Ngo, NgoSize};
use crate::shared::validation::normalize_email;

const NGO_COLUMNS: &str = "id, name, email, phone, website, address, description, causes, logo, \
     is_verified, rating, founded_year, size, registration_number, joined_date, created_at, updated_at";

/// Filter over an already-fetched NGO list. All criteria combine with
/// AND; an absent criterion matches everything.
#[derive(Debug, Default)]
pub struct NgoFilter {
    pub causes: Vec<Cause>,
    pub location: Option<String>,
    pub size: Option<NgoSize>,
}

impl NgoFilter {
    /// Build a filter from query params. Unknown cause names are a
    /// validation error rather than silently matching nothing.
    pub fn try_from_query(query: NgoSearchQuery) -> Result<Self> {
        let causes = match query.causes.as_deref().map(str::trim) {
            None | Some("") => Vec::new(),
            Some(raw) => raw
                .split(',')
                .filter(|s| !s.trim().is_empty())
                .map(|s| s.parse::<Cause>())
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(AppError::Validation)?,
        };

        Ok(Self {
            causes,
            location: query.location.filter(|s| !s.trim().is_empty()),
            size: query.size,
        })
    }

    pub fn matches(&self, ngo: &Ngo) -> bool {
        let matches_causes =
            self.causes.is_empty() || self.causes.iter().any(|c| ngo.causes.contains(c));

        let matches_location = match &self.location {
            None => true,
            Some(location) => ngo
                .address
                .as_deref()
                .is_some_and(|a| a.to_lowercase().contains(&location.to_lowercase())),
        };

        let matches_size = self.size.map_or(true, |s| ngo.size == s);

        matches_causes && matches_location && matches_size
    }
}

/// Service for NGO profile operations
pub struct NgoService {
    pool: PgPool,
}

impl NgoService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all verified NGOs
    pub async fn list(&self) -> Result<Vec<NgoResponseDto>> {
        let ngos = self.fetch_verified().await?;
        Ok(ngos.into_iter().map(Into::into).collect())
    }

    /// Search verified NGOs with the given criteria
    pub async fn search(&self, query: NgoSearchQuery) -> Result<Vec<NgoResponseDto>> {
        let filter = NgoFilter::try_from_query(query)?;
        let ngos = self.fetch_verified().await?;

        Ok(ngos
            .into_iter()
            .filter(|n| filter.matches(n))
            .map(Into::into)
            .collect())
    }

    /// Get NGO by id
    pub async fn get(&self, id: Uuid) -> Result<NgoResponseDto> {
        let ngo = sqlx::query_as::<_, Ngo>(&format!(
            "SELECT {NGO_COLUMNS} FROM ngos WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get NGO: {:?}", e);
            AppError::Database(e)
        })?;

        ngo.map(Into::into)
            .ok_or_else(|| AppError::NotFound("NGO not found".to_string()))
    }

    /// Create an NGO profile, or update the existing one with the same
    /// email. Fields absent from the request keep their stored value.
    pub async fn upsert(&self, dto: UpsertNgoDto) -> Result<NgoResponseDto> {
        let email = normalize_email(&dto.email);

        let ngo = sqlx::query_as::<_, Ngo>(&format!(
            r#"
            INSERT INTO ngos (name, email, phone, website, address, description, causes, logo,
                              founded_year, size, registration_number)
            VALUES (
                $1, $2, $3, $4, $5, $6,
                COALESCE($7, '{{}}'::ngo_cause[]),
                $8, $9,
                COALESCE($10, 'small'::ngo_size),
                $11
            )
            ON CONFLICT (email) DO UPDATE SET
                name = $1,
                phone = COALESCE($3, ngos.phone),
                website = COALESCE($4, ngos.website),
                address = COALESCE($5, ngos.address),
                description = COALESCE($6, ngos.description),
                causes = COALESCE($7, ngos.causes),
                logo = COALESCE($8, ngos.logo),
                founded_year = COALESCE($9, ngos.founded_year),
                size = COALESCE($10, ngos.size),
                registration_number = COALESCE($11, ngos.registration_number),
                updated_at = now()
            RETURNING {NGO_COLUMNS}
            "#
        ))
        .bind(&dto.name)
        .bind(&email)
        .bind(&dto.phone)
        .bind(&dto.website)
        .bind(&dto.address)
        .bind(&dto.description)
        .bind(&dto.causes)
        .bind(&dto.logo)
        .bind(dto.founded_year)
        .bind(dto.size)
        .bind(&dto.registration_number)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to upsert NGO: {:?}", e);
            AppError::conflict_on_unique(e, "Email already registered")
        })?;

        tracing::info!("NGO profile saved: id={}, email={}", ngo.id, ngo.email);

        Ok(ngo.into())
    }

    /// Partially update an NGO by id
    pub async fn update(&self, id: Uuid, dto: UpdateNgoDto) -> Result<NgoResponseDto> {
        let email = dto.email.as_deref().map(normalize_email);

        let ngo = sqlx::query_as::<_, Ngo>(&format!(
            r#"
            UPDATE ngos SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                phone = COALESCE($4, phone),
                website = COALESCE($5, website),
                address = COALESCE($6, address),
                description = COALESCE($7, description),
                causes = COALESCE($8, causes),
                logo = COALESCE($9, logo),
                founded_year = COALESCE($10, founded_year),
                size = COALESCE($11, size),
                registration_number = COALESCE($12, registration_number),
                updated_at = now()
            WHERE id = $1
            RETURNING {NGO_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&dto.name)
        .bind(&email)
        .bind(&dto.phone)
        .bind(&dto.website)
        .bind(&dto.address)
        .bind(&dto.description)
        .bind(&dto.causes)
        .bind(&dto.logo)
        .bind(dto.founded_year)
        .bind(dto.size)
        .bind(&dto.registration_number)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update NGO: {:?}", e);
            AppError::conflict_on_unique(e, "Email already registered")
        })?;

        ngo.map(Into::into)
            .ok_or_else(|| AppError::NotFound("NGO not found".to_string()))
    }

    /// Delete an NGO by id
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let deleted = sqlx::query_scalar::<_, Uuid>("DELETE FROM ngos WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete NGO: {:?}", e);
                AppError::Database(e)
            })?;

        if deleted.is_none() {
            return Err(AppError::NotFound("NGO not found".to_string()));
        }

        tracing::info!("NGO deleted: id={}", id);
        Ok(())
    }

    async fn fetch_verified(&self) -> Result<Vec<Ngo>> {
        sqlx::query_as::<_, Ngo>(&format!(
            "SELECT {NGO_COLUMNS} FROM ngos WHERE is_verified = TRUE ORDER BY joined_date DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list NGOs: {:?}", e);
            AppError::Database(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn ngo(name: &str, address: Option<&str>, causes: &[Cause], size: NgoSize) -> Ngo {
        let now = Utc::now();
        Ngo {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: format!("{}@example.org", name.to_lowercase()),
            phone: None,
            website: None,
            address: address.map(|a| a.to_string()),
            description: None,
            causes: causes.to_vec(),
            logo: None,
            is_verified: true,
            rating: 0.0,
            founded_year: None,
            size,
            registration_number: None,
            joined_date: now,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn causes_filter_matches_any_of() {
        let filter = NgoFilter {
            causes: vec![Cause::Education, Cause::Health],
            ..Default::default()
        };

        let school = ngo("school", None, &[Cause::Education], NgoSize::Small);
        let relief = ngo("relief", None, &[Cause::DisasterRelief], NgoSize::Small);

        assert!(filter.matches(&school));
        assert!(!filter.matches(&relief));
    }

    #[test]
    fn location_matches_address_substring() {
        let filter = NgoFilter {
            location: Some("bos".to_string()),
            ..Default::default()
        };

        let local = ngo("local", Some("12 Main St, Boston"), &[], NgoSize::Small);
        let remote = ngo("remote", Some("Denver"), &[], NgoSize::Small);
        let unknown = ngo("unknown", None, &[], NgoSize::Small);

        assert!(filter.matches(&local));
        assert!(!filter.matches(&remote));
        assert!(!filter.matches(&unknown));
    }

    #[test]
    fn size_filter_is_exact() {
        let filter = NgoFilter {
            size: Some(NgoSize::Large),
            ..Default::default()
        };

        assert!(filter.matches(&ngo("big", None, &[], NgoSize::Large)));
        assert!(!filter.matches(&ngo("tiny", None, &[], NgoSize::Small)));
    }

    #[test]
    fn causes_parse_from_comma_separated_query() {
        let query = NgoSearchQuery {
            causes: Some("education, disaster-relief".to_string()),
            ..Default::default()
        };
        let filter = NgoFilter::try_from_query(query).unwrap();
        assert_eq!(filter.causes, vec![Cause::Education, Cause::DisasterRelief]);
    }

    #[test]
    fn unknown_cause_is_a_validation_error() {
        let query = NgoSearchQuery {
            causes: Some("education,charity".to_string()),
            ..Default::default()
        };
        let result = NgoFilter::try_from_query(query);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
