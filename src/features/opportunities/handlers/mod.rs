pub mod opportunity_handler;

pub use opportunity_handler::*;
