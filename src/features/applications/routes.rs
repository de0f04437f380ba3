use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::applications::handlers;
use crate::features::applications::services::ApplicationService;

/// Create routes for the applications feature
pub fn routes(service: Arc<ApplicationService>) -> Router {
    Router::new()
        .route("/api/applications", post(handlers::submit_application))
        .route("/api/applications/my", get(handlers::list_my_applications))
        .route("/api/applications/ngo", get(handlers::list_ngo_applications))
        .route(
            "/api/applications/{id}",
            put(handlers::review_application).delete(handlers::delete_application),
        )
        .with_state(service)
}
