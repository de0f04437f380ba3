mod ngo;

pub use ngo::{Cause, Ngo, NgoSize};
