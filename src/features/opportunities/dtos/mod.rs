mod opportunity_dto;

pub use opportunity_dto::{
    CoordinatesDto, CreateOpportunityDto, OpportunityResponseDto, OpportunitySearchQuery,
    UpdateOpportunityDto,
};
