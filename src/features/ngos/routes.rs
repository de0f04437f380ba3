use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::ngos::handlers;
use crate::features::ngos::services::NgoService;

/// Create routes for the NGOs feature
pub fn routes(service: Arc<NgoService>) -> Router {
    Router::new()
        .route(
            "/api/ngos",
            get(handlers::list_ngos).post(handlers::upsert_ngo),
        )
        .route("/api/ngos/search", get(handlers::search_ngos))
        .route("/api/ngos/profile", get(handlers::get_ngo_profile))
        .route(
            "/api/ngos/{id}",
            get(handlers::get_ngo)
                .put(handlers::update_ngo)
                .delete(handlers::delete_ngo),
        )
        .with_state(service)
}
