use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::volunteers::handlers;
use crate::features::volunteers::services::VolunteerService;

/// Create routes for the volunteers feature
pub fn routes(service: Arc<VolunteerService>) -> Router {
    Router::new()
        .route(
            "/api/volunteers",
            get(handlers::list_volunteers).post(handlers::upsert_volunteer),
        )
        .route("/api/volunteers/search", get(handlers::search_volunteers))
        .route("/api/volunteers/profile", get(handlers::get_my_profile))
        .route(
            "/api/volunteers/{id}",
            get(handlers::get_volunteer)
                .put(handlers::update_volunteer)
                .delete(handlers::delete_volunteer),
        )
        .with_state(service)
}
