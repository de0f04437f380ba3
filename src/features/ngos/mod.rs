//! NGO profiles: registration, search and CRUD.
//!
//! NGOs own opportunities; only verified NGOs appear in listings and
//! search results.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::NgoService;
