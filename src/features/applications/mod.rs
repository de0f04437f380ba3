//! Application lifecycle: submission, review and withdrawal.
//!
//! An application starts `pending` and is approved or rejected exactly
//! once. Submission and withdrawal keep the opportunity's
//! `volunteers_applied` counter in step; review transitions never touch
//! it (a rejection does not free the capacity slot).

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::ApplicationService;
