mod volunteer;

pub use volunteer::{Availability, Volunteer, VolunteerSkill};
