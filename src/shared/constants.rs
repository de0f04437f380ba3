/// Default page size for pagination (matches the front end's 12-per-page grid)
pub const DEFAULT_PAGE_SIZE: i64 = 12;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// DOMAIN CONSTANTS
// =============================================================================

/// Estimated volunteer hours contributed per registered volunteer.
/// There is no hour-logging subsystem; the stats endpoint reports
/// `volunteers * HOURS_PER_VOLUNTEER` as an approximation.
pub const HOURS_PER_VOLUNTEER: i64 = 15;

/// Display name used for guest applications submitted without a profile
pub const ANONYMOUS_VOLUNTEER_NAME: &str = "Anonymous Volunteer";

/// Sentinel email used for guest applications submitted without a profile
pub const ANONYMOUS_VOLUNTEER_EMAIL: &str = "volunteer@email.com";

/// Reviewer name recorded when a review request does not carry one
pub const DEFAULT_REVIEWER: &str = "NGO Admin";
