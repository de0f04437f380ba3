mod volunteer_service;

pub use volunteer_service::{VolunteerFilter, VolunteerService};
