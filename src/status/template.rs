// Regional title templates and the small substitution/slug helpers behind
// them.
//
// Substitution is an explicit function over (template, substitutions) pairs
// rather than ad hoc concatenation, so id and title generation are testable
// in isolation.

use crate::status::model::{StatusCategory, StatusDescriptor};

/// One rank's worth of regional copy. Both fields may contain the scope
/// placeholder (`{state}` or `{city}`), possibly more than once.
pub struct ScopeTemplate {
    pub title: &'static str,
    pub description: &'static str,
}

/// State-scope templates, ranks 1 through 10.
pub static STATE_RANK_TEMPLATES: [ScopeTemplate; 10] = [
    ScopeTemplate {
        title: "The Toast of {state}",
        description: "Ranked #1 across every supper club in {state}.",
    },
    ScopeTemplate {
        title: "{state}'s Silver Spoon",
        description: "Second place on the {state} leaderboard.",
    },
    ScopeTemplate {
        title: "{state}'s Bronze Booth",
        description: "Third place on the {state} leaderboard.",
    },
    ScopeTemplate {
        title: "{state} Dining Dignitary",
        description: "Ranked #4 in {state}.",
    },
    ScopeTemplate {
        title: "Pride of {state}",
        description: "Ranked #5 in {state}.",
    },
    ScopeTemplate {
        title: "{state} Circuit Rider",
        description: "Ranked #6 in {state}.",
    },
    ScopeTemplate {
        title: "{state} Table Captain",
        description: "Ranked #7 in {state}.",
    },
    ScopeTemplate {
        title: "Rising Star of {state}",
        description: "Ranked #8 in {state}.",
    },
    ScopeTemplate {
        title: "{state} Club Crawler",
        description: "Ranked #9 in {state}.",
    },
    ScopeTemplate {
        title: "{state} Top Ten Regular",
        description: "Ranked #10 in {state}.",
    },
];

/// City-scope templates, ranks 1 through 10.
pub static CITY_RANK_TEMPLATES: [ScopeTemplate; 10] = [
    ScopeTemplate {
        title: "The Talk of {city}",
        description: "Ranked #1 among everyone dining out in {city}.",
    },
    ScopeTemplate {
        title: "{city}'s Second Seating",
        description: "Second place on the {city} leaderboard.",
    },
    ScopeTemplate {
        title: "{city}'s Bronze Plate",
        description: "Third place on the {city} leaderboard.",
    },
    ScopeTemplate {
        title: "{city} Corner Booth Royalty",
        description: "Ranked #4 in {city}.",
    },
    ScopeTemplate {
        title: "Pride of {city}",
        description: "Ranked #5 in {city}.",
    },
    ScopeTemplate {
        title: "{city} Regular",
        description: "Ranked #6 in {city}.",
    },
    ScopeTemplate {
        title: "{city} Happy Hour Hero",
        description: "Ranked #7 in {city}.",
    },
    ScopeTemplate {
        title: "Rising Star of {city}",
        description: "Ranked #8 in {city}.",
    },
    ScopeTemplate {
        title: "{city} Supper Scout",
        description: "Ranked #9 in {city}.",
    },
    ScopeTemplate {
        title: "{city} Top Ten Regular",
        description: "Ranked #10 in {city}.",
    },
];

/// Which template table (and id prefix) a regional scope uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    State,
    City,
}

impl ScopeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScopeKind::State => "state",
            ScopeKind::City => "city",
        }
    }

    fn templates(&self) -> &'static [ScopeTemplate; 10] {
        match self {
            ScopeKind::State => &STATE_RANK_TEMPLATES,
            ScopeKind::City => &CITY_RANK_TEMPLATES,
        }
    }

    /// The placeholder key used inside this kind's templates.
    fn placeholder(&self) -> &'static str {
        match self {
            ScopeKind::State => "state",
            ScopeKind::City => "city",
        }
    }
}

/// Replace every `{key}` occurrence in the template with its value.
pub fn render(template: &str, substitutions: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (key, value) in substitutions {
        out = out.replace(&format!("{{{key}}}"), value);
    }
    out
}

/// Lowercase a display name and collapse whitespace runs into single
/// hyphens, producing an id-safe fragment.
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Resolve a regional leaderboard badge from a rank and scope name.
///
/// Returns None when the rank is outside [1, 10] or the scope name is empty.
/// Deterministic: the same (rank, scope_name) always yields the same id and
/// title.
pub fn resolve_regional_status(
    rank: u32,
    scope_name: &str,
    kind: ScopeKind,
) -> Option<StatusDescriptor> {
    if !(1..=10).contains(&rank) || scope_name.trim().is_empty() {
        return None;
    }

    let template = &kind.templates()[(rank - 1) as usize];
    let substitutions = [(kind.placeholder(), scope_name)];

    Some(StatusDescriptor {
        id: format!("{}-{}-{}", kind.as_str(), rank, slugify(scope_name)),
        title: render(template.title, &substitutions),
        description: render(template.description, &substitutions),
        category: StatusCategory::Leaderboard,
        progress: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_replaces_all_occurrences() {
        let out = render("{state}, {state}, {state}!", &[("state", "Wisconsin")]);
        assert_eq!(out, "Wisconsin, Wisconsin, Wisconsin!");
    }

    #[test]
    fn render_leaves_unknown_placeholders() {
        let out = render("{state} and {city}", &[("state", "Wisconsin")]);
        assert_eq!(out, "Wisconsin and {city}");
    }

    #[test]
    fn slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("Green Bay"), "green-bay");
        assert_eq!(slugify("  Fond   du  Lac "), "fond-du-lac");
        assert_eq!(slugify("Wisconsin"), "wisconsin");
    }

    #[test]
    fn regional_rank_zero_is_unranked() {
        assert!(resolve_regional_status(0, "Wisconsin", ScopeKind::State).is_none());
    }

    #[test]
    fn regional_rank_eleven_is_unranked() {
        assert!(resolve_regional_status(11, "Wisconsin", ScopeKind::State).is_none());
    }

    #[test]
    fn regional_empty_scope_name_is_inert() {
        assert!(resolve_regional_status(1, "", ScopeKind::City).is_none());
        assert!(resolve_regional_status(1, "   ", ScopeKind::City).is_none());
    }

    #[test]
    fn regional_state_rank_one() {
        let badge = resolve_regional_status(1, "Wisconsin", ScopeKind::State).unwrap();
        assert_eq!(badge.id, "state-1-wisconsin");
        assert_eq!(badge.title, "The Toast of Wisconsin");
        assert!(badge.description.contains("Wisconsin"));
        assert_eq!(badge.category, StatusCategory::Leaderboard);
        assert!(badge.progress.is_none());
    }

    #[test]
    fn regional_city_slug_with_spaces() {
        let badge = resolve_regional_status(3, "Green Bay", ScopeKind::City).unwrap();
        assert_eq!(badge.id, "city-3-green-bay");
        assert!(badge.title.contains("Green Bay"));
    }

    #[test]
    fn regional_rank_ten_is_valid() {
        let badge = resolve_regional_status(10, "Madison", ScopeKind::City).unwrap();
        assert_eq!(badge.id, "city-10-madison");
    }
}
