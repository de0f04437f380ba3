mod application;

pub use application::{Application, ApplicationStatus};
