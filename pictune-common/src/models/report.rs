//! Report statistic types
//!
//! Stat points have no identity; they are replaced wholesale on each load
//! rather than merged into an entity collection.

use serde::{Deserialize, Serialize};

/// One point of a per-date count series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatPoint {
    /// ISO date (YYYY-MM-DD)
    pub date: String,
    pub count: u64,
}

/// Upload count for one hour of the day (0-23).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyCount {
    pub hour: u8,
    pub count: u64,
}

/// GET /reports/summary response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub users: Vec<StatPoint>,
    pub music: Vec<StatPoint>,
}

/// Time range parameter for the report summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportRange {
    Week,
    Month,
    Year,
}

impl ReportRange {
    /// Query parameter value
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportRange::Week => "week",
            ReportRange::Month => "month",
            ReportRange::Year => "year",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_query_values() {
        assert_eq!(ReportRange::Week.as_str(), "week");
        assert_eq!(ReportRange::Month.as_str(), "month");
        assert_eq!(ReportRange::Year.as_str(), "year");
    }
}
