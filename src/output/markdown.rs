// Markdown report generation — a shareable snapshot of standings, badges,
// and recent reviews.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;

use crate::db::models::ReviewSummary;
use crate::leaderboard::Standing;
use crate::status::model::StatusDescriptor;

/// Generate a markdown report and return the path it was written to.
///
/// `badges` pairs each member handle with their primary badge (None when
/// they haven't earned one yet).
pub fn generate_report(
    standings: &[Standing],
    badges: &[(String, Option<StatusDescriptor>)],
    reviews: &[ReviewSummary],
    path: &str,
) -> Result<String> {
    let mut report = String::new();

    report.push_str("# Relish Report\n\n");
    report.push_str(&format!(
        "Generated: {}\n\n",
        Local::now().format("%Y-%m-%d %H:%M")
    ));

    report.push_str("## Leaderboard\n\n");
    if standings.is_empty() {
        report.push_str("No ranked members yet.\n\n");
    } else {
        report.push_str("| Rank | Member | Points | Visits | Reviews |\n");
        report.push_str("|-----:|--------|-------:|-------:|--------:|\n");
        for s in standings {
            report.push_str(&format!(
                "| {} | @{} | {} | {} | {} |\n",
                s.rank, s.handle, s.points, s.visits, s.reviews
            ));
        }
        report.push('\n');
    }

    report.push_str("## Badges\n\n");
    let earned: Vec<_> = badges
        .iter()
        .filter_map(|(handle, badge)| badge.as_ref().map(|b| (handle, b)))
        .collect();
    if earned.is_empty() {
        report.push_str("No badges earned yet.\n\n");
    } else {
        for (handle, badge) in earned {
            report.push_str(&format!(
                "- **@{}**: {} ({}). {}\n",
                handle, badge.title, badge.category, badge.description
            ));
        }
        report.push('\n');
    }

    report.push_str("## Recent reviews\n\n");
    if reviews.is_empty() {
        report.push_str("No reviews written yet.\n");
    } else {
        for review in reviews {
            report.push_str(&format!(
                "- {:.1}/5 by @{} on **{}** ({})\n",
                review.overall(),
                review.member_handle,
                review.club_name,
                review.written_at
            ));
            if let Some(notes) = &review.notes {
                report.push_str(&format!("  > {notes}\n"));
            }
        }
    }

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create report directory for {path}"))?;
        }
    }
    fs::write(path, report).with_context(|| format!("Failed to write report to {path}"))?;

    Ok(path.to_string())
}
