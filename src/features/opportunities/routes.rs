use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::opportunities::handlers;
use crate::features::opportunities::services::OpportunityService;

/// Create routes for the opportunities feature
pub fn routes(service: Arc<OpportunityService>) -> Router {
    Router::new()
        .route(
            "/api/opportunities",
            get(handlers::list_opportunities).post(handlers::create_opportunity),
        )
        .route(
            "/api/opportunities/search",
            get(handlers::search_opportunities),
        )
        .route(
            "/api/opportunities/my",
            get(handlers::list_my_opportunities),
        )
        .route(
            "/api/opportunities/category/{category}",
            get(handlers::list_by_category),
        )
        .route("/api/opportunities/urgent/all", get(handlers::list_urgent))
        .route(
            "/api/opportunities/{id}",
            get(handlers::get_opportunity)
                .put(handlers::update_opportunity)
                .delete(handlers::delete_opportunity),
        )
        .with_state(service)
}
