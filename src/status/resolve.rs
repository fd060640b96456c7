// Badge resolution — the primary-status priority cascade and the full
// status list.
//
// Two resolvers share the tier tables but answer different questions:
// resolve_primary_status picks the single badge shown on a member card,
// resolve_all_statuses builds the "see all" list. The primary cascade
// consults state/city rank context; the full list deliberately does not
// (see DESIGN.md), and only it attaches progress.

use crate::status::model::{
    ActivitySnapshot, ScopeRank, StatusCategory, StatusDescriptor, TierProgress,
};
use crate::status::template::{resolve_regional_status, ScopeKind};
use crate::status::tiers::{
    highest_tier, tier_progress, ProgressConfig, TierSpec, GLOBAL_RANK_TITLES, REVIEW_TIERS,
    VISIT_TIERS,
};

/// One step of the primary-status cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityRule {
    GlobalRank,
    StateRank,
    CityRank,
    VisitTier,
}

/// The cascade, in priority order. First rule that produces a badge wins.
/// The order is a named constant so it never depends on how any table
/// happens to iterate, and so tests can assert it directly.
pub static PRIORITY_CASCADE: [PriorityRule; 4] = [
    PriorityRule::GlobalRank,
    PriorityRule::StateRank,
    PriorityRule::CityRank,
    PriorityRule::VisitTier,
];

/// Resolve the single highest-priority badge for a member, or None when no
/// rule matches (below the lowest visit tier, unranked everywhere).
pub fn resolve_primary_status(
    snapshot: &ActivitySnapshot,
    state: Option<&ScopeRank>,
    city: Option<&ScopeRank>,
) -> Option<StatusDescriptor> {
    PRIORITY_CASCADE
        .iter()
        .find_map(|rule| apply_rule(*rule, snapshot, state, city))
}

fn apply_rule(
    rule: PriorityRule,
    snapshot: &ActivitySnapshot,
    state: Option<&ScopeRank>,
    city: Option<&ScopeRank>,
) -> Option<StatusDescriptor> {
    match rule {
        PriorityRule::GlobalRank => global_rank_status(snapshot.overall_rank),
        PriorityRule::StateRank => {
            state.and_then(|s| resolve_regional_status(s.rank, &s.scope_name, ScopeKind::State))
        }
        PriorityRule::CityRank => {
            city.and_then(|c| resolve_regional_status(c.rank, &c.scope_name, ScopeKind::City))
        }
        PriorityRule::VisitTier => highest_tier(snapshot.total_visits, &VISIT_TIERS)
            .map(|(_, tier)| tier_status(tier, StatusCategory::Visits, None)),
    }
}

/// Resolve every badge a member holds: highest visit tier, highest review
/// tier, and global leaderboard standing, in that fixed order. Each track is
/// evaluated independently; a member can hold all three at once.
pub fn resolve_all_statuses(
    snapshot: &ActivitySnapshot,
    config: &ProgressConfig,
) -> Vec<StatusDescriptor> {
    let mut statuses = Vec::new();

    if let Some((idx, tier)) = highest_tier(snapshot.total_visits, &VISIT_TIERS) {
        let progress = tier_progress(snapshot.total_visits, idx, &VISIT_TIERS, config);
        statuses.push(tier_status(tier, StatusCategory::Visits, Some(progress)));
    }

    if let Some((idx, tier)) = highest_tier(snapshot.review_count, &REVIEW_TIERS) {
        let progress = tier_progress(snapshot.review_count, idx, &REVIEW_TIERS, config);
        statuses.push(tier_status(tier, StatusCategory::Reviews, Some(progress)));
    }

    if let Some(mut badge) = global_rank_status(snapshot.overall_rank) {
        // Rank badges are binary: held or not, no partial credit.
        badge.progress = Some(TierProgress { current: 1, max: 1 });
        statuses.push(badge);
    }

    statuses
}

/// The fixed-title overall leaderboard badge for ranks 1 through 10.
pub fn global_rank_status(rank: u32) -> Option<StatusDescriptor> {
    if !(1..=10).contains(&rank) {
        return None;
    }

    Some(StatusDescriptor {
        id: format!("leaderboard-{rank}"),
        title: GLOBAL_RANK_TITLES[(rank - 1) as usize].to_string(),
        description: format!("Holding the #{rank} spot on the overall leaderboard."),
        category: StatusCategory::Leaderboard,
        progress: None,
    })
}

fn tier_status(
    tier: &TierSpec,
    category: StatusCategory,
    progress: Option<TierProgress>,
) -> StatusDescriptor {
    StatusDescriptor {
        id: tier.id.to_string(),
        title: tier.title.to_string(),
        description: tier.description.to_string(),
        category,
        progress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(visits: u32, reviews: u32, rank: u32) -> ActivitySnapshot {
        ActivitySnapshot {
            total_visits: visits,
            review_count: reviews,
            overall_rank: rank,
        }
    }

    fn scope(name: &str, rank: u32) -> ScopeRank {
        ScopeRank {
            scope_name: name.to_string(),
            rank,
        }
    }

    #[test]
    fn cascade_order_is_fixed() {
        assert_eq!(
            PRIORITY_CASCADE,
            [
                PriorityRule::GlobalRank,
                PriorityRule::StateRank,
                PriorityRule::CityRank,
                PriorityRule::VisitTier,
            ]
        );
    }

    #[test]
    fn global_rank_beats_state_rank() {
        let state = scope("Wisconsin", 1);
        let badge = resolve_primary_status(&snapshot(0, 0, 3), Some(&state), None).unwrap();
        assert_eq!(badge.id, "leaderboard-3");
    }

    #[test]
    fn state_rank_beats_city_rank() {
        let state = scope("Wisconsin", 2);
        let city = scope("Madison", 1);
        let badge = resolve_primary_status(&snapshot(0, 0, 0), Some(&state), Some(&city)).unwrap();
        assert_eq!(badge.id, "state-2-wisconsin");
    }

    #[test]
    fn city_rank_beats_visit_tier() {
        let city = scope("Madison", 4);
        let badge = resolve_primary_status(&snapshot(200, 0, 0), None, Some(&city)).unwrap();
        assert_eq!(badge.id, "city-4-madison");
    }

    #[test]
    fn global_rank_eleven_falls_through_to_visits() {
        let badge = resolve_primary_status(&snapshot(12, 0, 11), None, None).unwrap();
        assert_eq!(badge.id, "food-adventurer");
    }

    #[test]
    fn primary_badge_carries_no_progress() {
        let badge = resolve_primary_status(&snapshot(12, 0, 0), None, None).unwrap();
        assert!(badge.progress.is_none());
    }

    #[test]
    fn full_list_track_order_is_visits_reviews_leaderboard() {
        let statuses = resolve_all_statuses(&snapshot(12, 7, 2), &ProgressConfig::default());
        let categories: Vec<_> = statuses.iter().map(|s| s.category).collect();
        assert_eq!(
            categories,
            [
                StatusCategory::Visits,
                StatusCategory::Reviews,
                StatusCategory::Leaderboard,
            ]
        );
    }

    #[test]
    fn full_list_leaderboard_progress_is_degenerate() {
        let statuses = resolve_all_statuses(&snapshot(0, 0, 1), &ProgressConfig::default());
        assert_eq!(statuses.len(), 1);
        assert_eq!(
            statuses[0].progress,
            Some(TierProgress { current: 1, max: 1 })
        );
    }

    #[test]
    fn full_list_ids_are_unique() {
        let statuses = resolve_all_statuses(&snapshot(500, 400, 10), &ProgressConfig::default());
        let mut ids: Vec<_> = statuses.iter().map(|s| s.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), statuses.len());
    }
}
