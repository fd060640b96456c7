// Engine data model — activity inputs and the badge descriptors derived
// from them.
//
// These types are separate from the database row models because they are
// never stored: every resolution call builds fresh descriptors from the
// caller-supplied snapshot.

use serde::{Deserialize, Serialize};

/// Display category for a badge. Mutually exclusive; drives styling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusCategory {
    Visits,
    Reviews,
    Leaderboard,
}

impl StatusCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCategory::Visits => "visits",
            StatusCategory::Reviews => "reviews",
            StatusCategory::Leaderboard => "leaderboard",
        }
    }
}

impl std::fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Progress past the current tier, toward the next one.
///
/// `current` is how far the counter has moved beyond the reached tier's
/// threshold; `max` is the distance to the next threshold. Rank-based badges
/// are binary (held or not) and carry the degenerate `{1, 1}` in the full
/// list instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierProgress {
    pub current: u32,
    pub max: u32,
}

/// A single earned badge, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDescriptor {
    /// Stable slug identifier — lowercase, hyphen-separated, unique within
    /// one resolution call's output.
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: StatusCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<TierProgress>,
}

/// A member's raw activity counters at resolution time.
///
/// `overall_rank` is the position on the overall leaderboard; 0 means
/// unranked. Counters are unsigned by construction, so the malformed
/// negative-count case the engine is not responsible for cannot occur here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivitySnapshot {
    pub total_visits: u32,
    pub review_count: u32,
    pub overall_rank: u32,
}

/// A member's rank within one geographic scope (state or city).
///
/// A rank of 0 means unranked in that scope; an empty scope name means the
/// context doesn't apply. Either condition makes the context inert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeRank {
    pub scope_name: String,
    pub rank: u32,
}
