// Leaderboard computation — activity points and rank assignment.
//
// Ranks are computed fresh from stored activity totals on every call, never
// persisted. The guarantees the status engine relies on live here: ranks
// are 1-based and contiguous among ranked members, and 0 always means
// unranked. Members with no activity in a scope are unranked rather than
// tied at the bottom.

use crate::db::models::ActivityTotals;

/// Configurable weights for the activity points formula.
///
/// `points = visits * visit_points + reviews * review_points`
pub struct PointsWeights {
    /// Points per distinct club visited (default 10)
    pub visit_points: u32,
    /// Points per review written (default 5)
    pub review_points: u32,
}

impl Default for PointsWeights {
    fn default() -> Self {
        Self {
            visit_points: 10,
            review_points: 5,
        }
    }
}

/// One row of a computed leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    pub handle: String,
    pub visits: u32,
    pub reviews: u32,
    pub points: u32,
    /// 1-based position; contiguous within one call's output.
    pub rank: u32,
}

/// Compute a member's activity points.
pub fn activity_points(visits: u32, reviews: u32, weights: &PointsWeights) -> u32 {
    visits * weights.visit_points + reviews * weights.review_points
}

/// Rank activity totals into standings.
///
/// Zero-point members are dropped (unranked). Ordering is points descending
/// with handle ascending as the tie-break, so identical inputs always
/// produce identical standings.
pub fn rank_standings(totals: &[ActivityTotals], weights: &PointsWeights) -> Vec<Standing> {
    let mut scored: Vec<Standing> = totals
        .iter()
        .map(|t| Standing {
            handle: t.handle.clone(),
            visits: t.visits,
            reviews: t.reviews,
            points: activity_points(t.visits, t.reviews, weights),
            rank: 0,
        })
        .filter(|s| s.points > 0)
        .collect();

    scored.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| a.handle.cmp(&b.handle))
    });

    for (i, standing) in scored.iter_mut().enumerate() {
        standing.rank = (i + 1) as u32;
    }

    scored
}

/// Look up a member's rank in computed standings. Returns 0 when the member
/// is absent (unranked).
pub fn rank_of(standings: &[Standing], handle: &str) -> u32 {
    standings
        .iter()
        .find(|s| s.handle == handle)
        .map(|s| s.rank)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(handle: &str, visits: u32, reviews: u32) -> ActivityTotals {
        ActivityTotals {
            handle: handle.to_string(),
            visits,
            reviews,
        }
    }

    #[test]
    fn default_weights_match_documented_values() {
        let w = PointsWeights::default();
        assert_eq!(w.visit_points, 10);
        assert_eq!(w.review_points, 5);
    }

    #[test]
    fn points_formula() {
        let w = PointsWeights::default();
        assert_eq!(activity_points(3, 4, &w), 50);
        assert_eq!(activity_points(0, 0, &w), 0);
    }

    #[test]
    fn ranks_are_contiguous_and_ordered() {
        let standings = rank_standings(
            &[
                totals("alice", 2, 0),
                totals("bob", 10, 4),
                totals("carol", 5, 1),
            ],
            &PointsWeights::default(),
        );
        let ranked: Vec<_> = standings
            .iter()
            .map(|s| (s.handle.as_str(), s.rank))
            .collect();
        assert_eq!(ranked, [("bob", 1), ("carol", 2), ("alice", 3)]);
    }

    #[test]
    fn zero_point_members_are_unranked() {
        let standings = rank_standings(
            &[totals("alice", 1, 0), totals("idle", 0, 0)],
            &PointsWeights::default(),
        );
        assert_eq!(standings.len(), 1);
        assert_eq!(rank_of(&standings, "idle"), 0);
    }

    #[test]
    fn ties_break_by_handle() {
        let standings = rank_standings(
            &[totals("zeke", 1, 2), totals("abe", 2, 0)],
            &PointsWeights::default(),
        );
        // Both at 20 points: abe first alphabetically
        assert_eq!(rank_of(&standings, "abe"), 1);
        assert_eq!(rank_of(&standings, "zeke"), 2);
    }
}
