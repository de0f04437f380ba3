use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::HOURS_PER_VOLUNTEER;

/// Platform-wide counts shown on the landing page.
///
/// `hours` is a fixed-rate estimate derived from the volunteer count,
/// not a sum of logged hours.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsDto {
    pub volunteers: i64,
    pub ngos: i64,
    pub opportunities: i64,
    pub applications: i64,
    pub hours: i64,
}

impl StatsDto {
    pub fn from_counts(volunteers: i64, ngos: i64, opportunities: i64, applications: i64) -> Self {
        Self {
            volunteers,
            ngos,
            opportunities,
            applications,
            hours: volunteers * HOURS_PER_VOLUNTEER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hours_are_estimated_per_volunteer() {
        let stats = StatsDto::from_counts(5, 2, 3, 1);
        assert_eq!(stats.volunteers, 5);
        assert_eq!(stats.ngos, 2);
        assert_eq!(stats.opportunities, 3);
        assert_eq!(stats.applications, 1);
        assert_eq!(stats.hours, 75);
    }

    #[test]
    fn zero_volunteers_means_zero_hours() {
        let stats = StatsDto::from_counts(0, 4, 9, 2);
        assert_eq!(stats.hours, 0);
    }
}
