mod ngo_service;

pub use ngo_service::{NgoFilter, NgoService};
