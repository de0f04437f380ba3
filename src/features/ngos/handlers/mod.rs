pub mod ngo_handler;

pub use ngo_handler::*;
