mod opportunity_service;

pub use opportunity_service::{OpportunityFilter, OpportunityService};
