// Colored terminal output for badges and leaderboards.
//
// This module handles all terminal-specific formatting: colors, tables,
// progress bars. The main.rs command bodies delegate here.

use colored::{ColoredString, Colorize};

use crate::leaderboard::Standing;
use crate::output::truncate_chars;
use crate::status::model::{StatusCategory, StatusDescriptor, TierProgress};

/// Display a member's primary badge, or the first-badge prompt when they
/// have none yet.
pub fn display_primary_badge(handle: &str, badge: Option<&StatusDescriptor>) {
    println!("\n{}", format!("=== Badges for @{handle} ===").bold());

    match badge {
        Some(badge) => {
            println!(
                "  {} {}",
                category_tag(badge.category),
                badge.title.bold()
            );
            println!("  {}", badge.description.dimmed());
        }
        None => {
            println!("  No badges yet.");
            println!(
                "  {}",
                "Visit 5 clubs to earn your first badge: `relish visit <club>`.".dimmed()
            );
        }
    }
}

/// Display the full badge list with per-tier progress.
pub fn display_all_badges(handle: &str, badges: &[StatusDescriptor]) {
    println!("\n{}", format!("=== All badges for @{handle} ===").bold());

    if badges.is_empty() {
        println!("  No badges yet.");
        println!(
            "  {}",
            "Visit 5 clubs to earn your first badge — `relish visit <club>`.".dimmed()
        );
        return;
    }

    for badge in badges {
        println!(
            "  {} {}",
            category_tag(badge.category),
            badge.title.bold()
        );
        println!("      {}", badge.description.dimmed());
        if let Some(progress) = &badge.progress {
            // The degenerate {1,1} on rank badges means "held"; a bar
            // would suggest partial credit that doesn't exist.
            if progress.max > 1 {
                println!(
                    "      {} {}",
                    progress_bar(progress),
                    format!("{}/{} toward the next tier", progress.current, progress.max)
                        .dimmed()
                );
            }
        }
    }
}

/// Display ranked standings for a scope ("overall", a state, or a city).
pub fn display_standings(scope_label: &str, standings: &[Standing]) {
    if standings.is_empty() {
        println!("No ranked members for {scope_label} yet. Visits and reviews earn points.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Leaderboard: {scope_label} ===").bold()
    );
    println!();

    // Header
    println!(
        "  {:>4}  {:<24} {:>7}  {:>6}  {:>7}",
        "Rank".dimmed(),
        "Member".dimmed(),
        "Points".dimmed(),
        "Visits".dimmed(),
        "Reviews".dimmed(),
    );
    println!("  {}", "-".repeat(56).dimmed());

    for standing in standings {
        println!(
            "  {:>4}  @{:<23} {:>7}  {:>6}  {:>7}",
            colorize_rank(standing.rank),
            standing.handle,
            standing.points,
            standing.visits,
            standing.reviews,
        );
    }
}

/// Display recent reviews with their overall score and a notes preview.
pub fn display_recent_reviews(reviews: &[crate::db::models::ReviewSummary]) {
    if reviews.is_empty() {
        return;
    }

    println!("\n{}", "Recent reviews:".bold());
    for review in reviews {
        println!(
            "  {:.1}/5  {} reviewed {} ({})",
            review.overall(),
            format!("@{}", review.member_handle).bold(),
            review.club_name,
            review.written_at.as_str().dimmed(),
        );
        if let Some(notes) = &review.notes {
            println!("        \"{}\"", truncate_chars(notes, 100).dimmed());
        }
    }
}

/// A textual progress bar like `[####......]`.
fn progress_bar(progress: &TierProgress) -> String {
    const WIDTH: usize = 10;
    let max = progress.max.max(1);
    let filled = ((progress.current as f64 / max as f64) * WIDTH as f64).floor() as usize;
    let filled = filled.min(WIDTH);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(WIDTH - filled))
}

/// Category tag with the category's display color.
fn category_tag(category: StatusCategory) -> ColoredString {
    let tag = format!("[{category}]");
    match category {
        StatusCategory::Visits => tag.green(),
        StatusCategory::Reviews => tag.cyan(),
        StatusCategory::Leaderboard => tag.yellow(),
    }
}

/// Medal-color the top three ranks.
fn colorize_rank(rank: u32) -> ColoredString {
    let text = format!("{rank}.");
    match rank {
        1 => text.yellow().bold(),
        2 => text.bright_white().bold(),
        3 => text.red(),
        _ => text.normal(),
    }
}
