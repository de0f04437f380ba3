//! Volunteer profiles: registration, search and CRUD.
//!
//! Profiles are upserted by email; only verified volunteers appear in
//! listings and search results.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::VolunteerService;
