// Data models — Rust structs that map to database rows.
//
// These are the types that flow through the application. They're separate
// from the database queries so other modules can use them without depending
// on rusqlite directly. Engine input/output types live in status::model —
// they are derived views, never stored.

use serde::{Deserialize, Serialize};

/// A registered supper club.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Club {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub added_at: String,
}

/// A member of the directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: i64,
    pub handle: String,
    pub display_name: Option<String>,
    pub joined_at: String,
}

impl Member {
    /// The name to show in listings: display name when set, handle otherwise.
    pub fn shown_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.handle)
    }
}

/// A member's multi-dimensional review of a club, joined with names for
/// display. Ratings are 1-5.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewSummary {
    pub member_handle: String,
    pub club_name: String,
    pub food: u8,
    pub service: u8,
    pub atmosphere: u8,
    pub value: u8,
    pub notes: Option<String>,
    pub written_at: String,
}

impl ReviewSummary {
    /// Mean of the four rating dimensions.
    pub fn overall(&self) -> f64 {
        f64::from(
            u32::from(self.food)
                + u32::from(self.service)
                + u32::from(self.atmosphere)
                + u32::from(self.value),
        ) / 4.0
    }
}

/// A member's activity counters within some scope (overall, one state, or
/// one city). Input to leaderboard ranking and to engine snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityTotals {
    pub handle: String,
    /// Distinct clubs visited in the scope
    pub visits: u32,
    /// Reviews written for clubs in the scope
    pub reviews: u32,
}

/// Entity counts for the `status` overview command.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverviewStats {
    pub clubs: i64,
    pub members: i64,
    pub visits: i64,
    pub reviews: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_overall_is_mean_of_dimensions() {
        let review = ReviewSummary {
            member_handle: "alice".into(),
            club_name: "The Duck Inn".into(),
            food: 5,
            service: 4,
            atmosphere: 5,
            value: 2,
            notes: None,
            written_at: String::new(),
        };
        assert!((review.overall() - 4.0).abs() < f64::EPSILON);
    }
}
