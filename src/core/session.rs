use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::core::error::AppError;
use crate::shared::validation::normalize_email;

/// Per-request volunteer identity, carried in plain headers by the front
/// end (`volunteer-email`, optionally `volunteer-id`). Not an auth token.
#[derive(Debug, Clone)]
pub struct VolunteerSession {
    pub id: Option<Uuid>,
    pub email: String,
}

/// Per-request NGO identity, carried in the `ngo-id` header.
#[derive(Debug, Clone)]
pub struct NgoSession {
    pub ngo_id: Uuid,
}

fn header_value(parts: &Parts, name: &str) -> Option<String> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl<S> FromRequestParts<S> for VolunteerSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let email = header_value(parts, "volunteer-email")
            .ok_or_else(|| AppError::Unauthorized("Missing volunteer-email header".to_string()))?;

        let id = match header_value(parts, "volunteer-id") {
            Some(raw) => Some(
                Uuid::parse_str(&raw)
                    .map_err(|_| AppError::Unauthorized("Invalid volunteer-id header".to_string()))?,
            ),
            None => None,
        };

        Ok(Self {
            id,
            email: normalize_email(&email),
        })
    }
}

impl<S> FromRequestParts<S> for NgoSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = header_value(parts, "ngo-id")
            .ok_or_else(|| AppError::Unauthorized("Missing ngo-id header".to_string()))?;

        let ngo_id = Uuid::parse_str(&raw)
            .map_err(|_| AppError::Unauthorized("Invalid ngo-id header".to_string()))?;

        Ok(Self { ngo_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts_with_headers(headers: &[(&str, &str)]) -> Parts {
        let mut builder = Request::builder().uri("/");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[tokio::test]
    async fn volunteer_session_requires_email_header() {
        let mut parts = parts_with_headers(&[]);
        let result = VolunteerSession::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn volunteer_session_normalizes_email() {
        let mut parts = parts_with_headers(&[("volunteer-email", "  Jane@Example.COM ")]);
        let session = VolunteerSession::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(session.email, "jane@example.com");
        assert!(session.id.is_none());
    }

    #[tokio::test]
    async fn ngo_session_rejects_malformed_id() {
        let mut parts = parts_with_headers(&[("ngo-id", "not-a-uuid")]);
        let result = NgoSession::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn ngo_session_parses_uuid() {
        let id = Uuid::new_v4();
        let mut parts = parts_with_headers(&[("ngo-id", &id.to_string())]);
        let session = NgoSession::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(session.ngo_id, id);
    }
}
