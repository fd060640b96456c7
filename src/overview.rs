// System overview display — shows DB stats, entity counts, recent activity.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use crate::db::Database;
use crate::output::terminal;

/// Display system status to the terminal.
pub async fn show(db: &Arc<dyn Database>, db_display_path: &str) -> Result<()> {
    if !Path::new(db_display_path).exists() {
        println!("Database: not initialized");
        println!("\nRun `relish init` to set up the database.");
        return Ok(());
    }

    // Database file size
    let file_size = std::fs::metadata(db_display_path)
        .map(|m| format_bytes(m.len()))
        .unwrap_or_else(|_| "unknown".to_string());
    println!("Database: {} ({})", db_display_path, file_size);

    let stats = db.overview_stats().await?;
    println!(
        "Directory: {} clubs, {} members",
        stats.clubs, stats.members
    );
    println!(
        "Activity: {} visits marked, {} reviews written",
        stats.visits, stats.reviews
    );

    if stats.clubs == 0 {
        println!("  Run `relish add-club` to register your first venue");
    }
    if stats.members == 0 {
        println!("  Run `relish join <handle>` to create a member");
    }

    let reviews = db.recent_reviews(5).await?;
    if reviews.is_empty() {
        println!("Recent reviews: none yet");
        println!("  Run `relish review <club>` after a visit");
    } else {
        terminal::display_recent_reviews(&reviews);
    }

    Ok(())
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
