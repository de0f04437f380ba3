use utoipa::{Modify, OpenApi};

use crate::features::applications::{dtos as applications_dtos, handlers as applications_handlers};
use crate::features::ngos::{dtos as ngos_dtos, handlers as ngos_handlers, models as ngos_models};
use crate::features::opportunities::{
    dtos as opportunities_dtos, handlers as opportunities_handlers,
    models as opportunities_models,
};
use crate::features::stats::{dtos as stats_dtos, handlers as stats_handlers};
use crate::features::volunteers::{
    dtos as volunteers_dtos, handlers as volunteers_handlers, models as volunteers_models,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Volunteers
        volunteers_handlers::list_volunteers,
        volunteers_handlers::search_volunteers,
        volunteers_handlers::get_my_profile,
        volunteers_handlers::upsert_volunteer,
        volunteers_handlers::get_volunteer,
        volunteers_handlers::update_volunteer,
        volunteers_handlers::delete_volunteer,
        // NGOs
        ngos_handlers::list_ngos,
        ngos_handlers::search_ngos,
        ngos_handlers::get_ngo_profile,
        ngos_handlers::upsert_ngo,
        ngos_handlers::get_ngo,
        ngos_handlers::update_ngo,
        ngos_handlers::delete_ngo,
        // Opportunities
        opportunities_handlers::list_opportunities,
        opportunities_handlers::search_opportunities,
        opportunities_handlers::list_my_opportunities,
        opportunities_handlers::list_by_category,
        opportunities_handlers::list_urgent,
        opportunities_handlers::create_opportunity,
        opportunities_handlers::get_opportunity,
        opportunities_handlers::update_opportunity,
        opportunities_handlers::delete_opportunity,
        // Applications
        applications_handlers::submit_application,
        applications_handlers::list_my_applications,
        applications_handlers::list_ngo_applications,
        applications_handlers::review_application,
        applications_handlers::delete_application,
        // Stats
        stats_handlers::get_stats,
    ),
    components(
        schemas(
            Meta,
            // Volunteers
            volunteers_models::VolunteerSkill,
            volunteers_models::Availability,
            volunteers_dtos::UpsertVolunteerDto,
            volunteers_dtos::UpdateVolunteerDto,
            volunteers_dtos::VolunteerResponseDto,
            ApiResponse<volunteers_dtos::VolunteerResponseDto>,
            ApiResponse<Vec<volunteers_dtos::VolunteerResponseDto>>,
            // NGOs
            ngos_models::Cause,
            ngos_models::NgoSize,
            ngos_dtos::UpsertNgoDto,
            ngos_dtos::UpdateNgoDto,
            ngos_dtos::NgoResponseDto,
            ApiResponse<ngos_dtos::NgoResponseDto>,
            ApiResponse<Vec<ngos_dtos::NgoResponseDto>>,
            // Opportunities
            opportunities_models::OpportunityCategory,
            opportunities_models::OpportunityType,
            opportunities_models::Urgency,
            opportunities_dtos::CoordinatesDto,
            opportunities_dtos::CreateOpportunityDto,
            opportunities_dtos::UpdateOpportunityDto,
            opportunities_dtos::OpportunityResponseDto,
            ApiResponse<opportunities_dtos::OpportunityResponseDto>,
            ApiResponse<Vec<opportunities_dtos::OpportunityResponseDto>>,
            // Applications
            applications_dtos::ReviewDecision,
            applications_dtos::SubmitApplicationDto,
            applications_dtos::ReviewApplicationDto,
            applications_dtos::ApplicationResponseDto,
            ApiResponse<applications_dtos::ApplicationResponseDto>,
            ApiResponse<Vec<applications_dtos::ApplicationResponseDto>>,
            // Stats
            stats_dtos::StatsDto,
            ApiResponse<stats_dtos::StatsDto>,
        )
    ),
    tags(
        (name = "volunteers", description = "Volunteer profiles and search"),
        (name = "ngos", description = "NGO profiles and search"),
        (name = "opportunities", description = "Volunteering opportunities"),
        (name = "applications", description = "Application lifecycle"),
        (name = "stats", description = "Aggregate platform statistics"),
    ),
    info(
        title = "VolunteerConnect API",
        version = "0.1.0",
        description = "API documentation for VolunteerConnect",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
