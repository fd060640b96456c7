// Static tier and rank-title tables.
//
// Thresholds and rank bands are deliberately small closed tables, not a
// formula: the titles are hand-curated copy, so there is nothing to
// interpolate. The tables are module-scoped statics, ordered ascending by
// threshold, and never mutated at runtime.

use crate::status::model::TierProgress;

/// One count-based achievement tier.
pub struct TierSpec {
    /// Minimum counter value required to hold this tier.
    pub threshold: u32,
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Visit tiers, ascending. A member holds the highest tier whose threshold
/// their distinct-club visit count meets.
pub static VISIT_TIERS: [TierSpec; 10] = [
    TierSpec {
        threshold: 5,
        id: "first-course",
        title: "First Course",
        description: "Visited 5 supper clubs. The tour has begun.",
    },
    TierSpec {
        threshold: 10,
        id: "food-adventurer",
        title: "Food Adventurer",
        description: "Visited 10 supper clubs and counting.",
    },
    TierSpec {
        threshold: 25,
        id: "relish-tray-regular",
        title: "Relish Tray Regular",
        description: "25 clubs visited. The relish tray holds no surprises anymore.",
    },
    TierSpec {
        threshold: 50,
        id: "fish-fry-faithful",
        title: "Fish Fry Faithful",
        description: "50 clubs visited, most of them on a Friday.",
    },
    TierSpec {
        threshold: 100,
        id: "century-clubber",
        title: "Century Clubber",
        description: "100 supper clubs. Triple digits.",
    },
    TierSpec {
        threshold: 150,
        id: "roadhouse-ranger",
        title: "Roadhouse Ranger",
        description: "150 clubs visited, many of them at the end of a county road.",
    },
    TierSpec {
        threshold: 200,
        id: "old-fashioned-aficionado",
        title: "Old Fashioned Aficionado",
        description: "200 clubs visited. Brandy, muddled, sweet.",
    },
    TierSpec {
        threshold: 300,
        id: "statewide-sampler",
        title: "Statewide Sampler",
        description: "300 clubs. There are few menus left unread.",
    },
    TierSpec {
        threshold: 400,
        id: "supper-circuit-legend",
        title: "Supper Circuit Legend",
        description: "400 clubs visited. Staff wave when the car pulls in.",
    },
    TierSpec {
        threshold: 500,
        id: "supper-club-immortal",
        title: "Supper Club Immortal",
        description: "500 supper clubs. A lifetime achievement.",
    },
];

/// Review tiers, ascending, same shape as the visit tiers but tracking
/// authored reviews.
pub static REVIEW_TIERS: [TierSpec; 10] = [
    TierSpec {
        threshold: 5,
        id: "first-take",
        title: "First Take",
        description: "Wrote 5 reviews. Opinions: formed.",
    },
    TierSpec {
        threshold: 10,
        id: "taste-tester",
        title: "Taste Tester",
        description: "10 reviews on the record.",
    },
    TierSpec {
        threshold: 25,
        id: "seasoned-critic",
        title: "Seasoned Critic",
        description: "25 reviews. The rating scale is well worn in.",
    },
    TierSpec {
        threshold: 50,
        id: "prolific-pen",
        title: "Prolific Pen",
        description: "50 reviews written for fellow travelers.",
    },
    TierSpec {
        threshold: 100,
        id: "century-critic",
        title: "Century Critic",
        description: "100 reviews. A reference shelf of supper club knowledge.",
    },
    TierSpec {
        threshold: 150,
        id: "menu-maven",
        title: "Menu Maven",
        description: "150 reviews deep into the menu.",
    },
    TierSpec {
        threshold: 200,
        id: "word-of-mouth",
        title: "Word of Mouth",
        description: "200 reviews. Clubs quote these on the wall.",
    },
    TierSpec {
        threshold: 250,
        id: "dining-editor",
        title: "Dining Editor",
        description: "250 reviews with no sign of slowing down.",
    },
    TierSpec {
        threshold: 300,
        id: "star-maker",
        title: "Star Maker",
        description: "300 reviews. A rating here moves reservations.",
    },
    TierSpec {
        threshold: 400,
        id: "critic-laureate",
        title: "Critic Laureate",
        description: "400 reviews. The definitive body of work.",
    },
];

/// Fixed titles for the overall leaderboard, ranks 1 through 10. No scope
/// interpolation — these are global.
pub static GLOBAL_RANK_TITLES: [&str; 10] = [
    "Reigning Supper Club Champion",
    "Silver Service",
    "Bronze Old Fashioned",
    "Fourth Course",
    "Top Five Table",
    "Sixth Seat of Honor",
    "Lucky Number Seven",
    "Great Eight",
    "Cloud Nine Regular",
    "Perfect Ten",
];

/// Configurable knobs for tier progress computation.
pub struct ProgressConfig {
    /// Multiplier applied to the top tier's threshold to stand in for the
    /// next threshold that doesn't exist. Progress past the last tier is
    /// extrapolated rather than left undefined.
    pub top_tier_extrapolation: f64,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            top_tier_extrapolation: 1.5,
        }
    }
}

/// Find the highest tier reached for a counter value, scanning from the top
/// threshold downward. Returns the tier's index alongside it so progress can
/// look up the next threshold.
pub fn highest_tier(count: u32, table: &'static [TierSpec]) -> Option<(usize, &'static TierSpec)> {
    table
        .iter()
        .enumerate()
        .rev()
        .find(|(_, tier)| count >= tier.threshold)
}

/// Progress past the reached tier, toward the next one.
///
/// `current = count - reached threshold`, `max = next threshold - reached
/// threshold`. For the top tier the next threshold is extrapolated as
/// `top_tier_extrapolation * threshold`.
pub fn tier_progress(
    count: u32,
    tier_index: usize,
    table: &[TierSpec],
    config: &ProgressConfig,
) -> TierProgress {
    let reached = table[tier_index].threshold;
    let ceiling = match table.get(tier_index + 1) {
        Some(next) => next.threshold,
        None => (f64::from(reached) * config.top_tier_extrapolation).round() as u32,
    };

    TierProgress {
        current: count.saturating_sub(reached),
        max: ceiling.saturating_sub(reached),
    }
}
