use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use relish::config::Config;
use relish::db::Database;
use relish::leaderboard::{self, PointsWeights};
use relish::status::model::{ActivitySnapshot, ScopeRank};
use relish::status::resolve::{resolve_all_statuses, resolve_primary_status};
use relish::status::tiers::ProgressConfig;

/// Relish: a gamified supper club directory and visit tracker.
///
/// Register clubs, mark visits, write reviews, climb the leaderboards, and
/// collect status badges along the way.
#[derive(Parser)]
#[command(name = "relish", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the database
    Init,

    /// Register a supper club in the directory
    AddClub {
        /// The club's name (e.g. "The Duck Inn")
        name: String,

        #[arg(long)]
        city: String,

        #[arg(long)]
        state: String,
    },

    /// Register a member
    Join {
        /// The member's handle (e.g. alice)
        handle: String,

        /// Optional display name
        #[arg(long)]
        name: Option<String>,
    },

    /// List the club directory
    Clubs,

    /// List registered members
    Members,

    /// Mark a club as visited
    Visit {
        /// The club to mark (by name)
        club: String,

        /// Member handle (defaults to RELISH_HANDLE)
        #[arg(long)]
        member: Option<String>,
    },

    /// Review a club across four dimensions (ratings 1-5)
    Review {
        /// The club to review (by name)
        club: String,

        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        food: u8,

        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        service: u8,

        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        atmosphere: u8,

        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        value: u8,

        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,

        /// Member handle (defaults to RELISH_HANDLE)
        #[arg(long)]
        member: Option<String>,
    },

    /// Show a member's badges
    Badges {
        /// Member handle (defaults to RELISH_HANDLE)
        member: Option<String>,

        /// Show the full badge list with tier progress, not just the
        /// primary badge
        #[arg(long)]
        all: bool,

        /// Emit machine-readable JSON instead of formatted output
        #[arg(long)]
        json: bool,
    },

    /// Show the leaderboard
    Leaderboard {
        /// Restrict to clubs in one state
        #[arg(long, conflicts_with = "city")]
        state: Option<String>,

        /// Restrict to clubs in one city
        #[arg(long)]
        city: Option<String>,

        /// Max standings to show (default: 10)
        #[arg(long, default_value = "10")]
        limit: u32,
    },

    /// Generate a markdown report (standings, badges, recent reviews)
    Report {
        /// Output path
        #[arg(long, default_value = "output/relish-report.md")]
        out: String,
    },

    /// Show system status (DB stats, directory size, recent activity)
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("relish=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            info!("Initializing Relish database...");
            let config = Config::load()?;
            let db = relish::db::initialize(&config.db_path)?;
            let table_count = db.table_count().await?;
            println!("Database initialized at: {}", config.db_path);
            println!("Tables created: {table_count}");
            println!("\nRelish is ready. Next steps:");
            println!("  relish add-club \"The Duck Inn\" --city Delavan --state Wisconsin");
            println!("  relish join <your-handle>");
        }

        Commands::AddClub { name, city, state } => {
            let config = Config::load()?;
            let db = relish::db::open(&config.db_path)?;

            if db.get_club_by_name(&name).await?.is_some() {
                anyhow::bail!("Club '{name}' is already in the directory.");
            }

            db.insert_club(&name, &city, &state).await?;
            info!(club = %name, city = %city, state = %state, "Club registered");
            println!("Added {} ({city}, {state}).", name.bold());
        }

        Commands::Join { handle, name } => {
            let config = Config::load()?;
            let db = relish::db::open(&config.db_path)?;

            let handle = handle.strip_prefix('@').unwrap_or(&handle).to_string();
            if db.get_member_by_handle(&handle).await?.is_some() {
                anyhow::bail!("Member '@{handle}' already exists.");
            }

            db.insert_member(&handle, name.as_deref()).await?;
            println!("Welcome, @{}!", handle.bold());
            println!(
                "{}",
                "Mark your first visit with `relish visit <club>`.".dimmed()
            );
        }

        Commands::Clubs => {
            let config = Config::load()?;
            let db = relish::db::open(&config.db_path)?;
            let clubs = db.list_clubs().await?;
            if clubs.is_empty() {
                println!("The directory is empty. Add a venue with `relish add-club`.");
            } else {
                println!("\n{}", format!("=== Directory ({} clubs) ===", clubs.len()).bold());
                for club in &clubs {
                    println!("  {} ({}, {})", club.name.bold(), club.city, club.state);
                }
            }
        }

        Commands::Members => {
            let config = Config::load()?;
            let db = relish::db::open(&config.db_path)?;
            let members = db.list_members().await?;
            if members.is_empty() {
                println!("No members yet. Create one with `relish join <handle>`.");
            } else {
                println!(
                    "\n{}",
                    format!("=== Members ({}) ===", members.len()).bold()
                );
                for member in &members {
                    println!(
                        "  {:<24} {}",
                        member.shown_name().bold(),
                        format!("@{} · joined {}", member.handle, member.joined_at).dimmed()
                    );
                }
            }
        }

        Commands::Visit { club, member } => {
            let config = Config::load()?;
            let db = relish::db::open(&config.db_path)?;
            let handle = resolve_member_handle(&config, member)?;

            let member_row = require_member(&db, &handle).await?;
            let club_row = require_club(&db, &club).await?;

            let newly_marked = db.record_visit(member_row.id, club_row.id).await?;
            if newly_marked {
                info!(member = %handle, club = %club_row.name, "Visit recorded");
                println!("Marked {} as visited.", club_row.name.bold());

                // A new visit can push the member over a tier threshold;
                // surface the badge right away.
                let totals = db.member_totals(&handle).await?;
                let snapshot = ActivitySnapshot {
                    total_visits: totals.visits,
                    review_count: totals.reviews,
                    overall_rank: 0,
                };
                if let Some(badge) = resolve_primary_status(&snapshot, None, None) {
                    println!(
                        "  {} clubs visited. Current badge: {}",
                        totals.visits, badge.title
                    );
                }
            } else {
                println!(
                    "{} is already marked as visited (clubs count once).",
                    club_row.name
                );
            }
        }

        Commands::Review {
            club,
            food,
            service,
            atmosphere,
            value,
            notes,
            member,
        } => {
            let config = Config::load()?;
            let db = relish::db::open(&config.db_path)?;
            let handle = resolve_member_handle(&config, member)?;

            let member_row = require_member(&db, &handle).await?;
            let club_row = require_club(&db, &club).await?;

            db.upsert_review(
                member_row.id,
                club_row.id,
                food,
                service,
                atmosphere,
                value,
                notes.as_deref(),
            )
            .await?;

            let overall = f64::from(
                u32::from(food) + u32::from(service) + u32::from(atmosphere) + u32::from(value),
            ) / 4.0;
            info!(member = %handle, club = %club_row.name, overall, "Review saved");
            println!(
                "Review saved for {}: {overall:.1}/5 overall.",
                club_row.name.bold()
            );
        }

        Commands::Badges { member, all, json } => {
            let config = Config::load()?;
            let db = relish::db::open(&config.db_path)?;
            let handle = resolve_member_handle(&config, member)?;
            require_member(&db, &handle).await?;

            let weights = PointsWeights::default();
            let (snapshot, state_ctx, city_ctx) = badge_inputs(&db, &handle, &weights).await?;

            info!(
                member = %handle,
                visits = snapshot.total_visits,
                reviews = snapshot.review_count,
                overall_rank = snapshot.overall_rank,
                "Resolving badges"
            );

            if all {
                let badges = resolve_all_statuses(&snapshot, &ProgressConfig::default());
                if json {
                    println!("{}", serde_json::to_string_pretty(&badges)?);
                } else {
                    relish::output::terminal::display_all_badges(&handle, &badges);
                }
            } else {
                let badge =
                    resolve_primary_status(&snapshot, state_ctx.as_ref(), city_ctx.as_ref());
                if json {
                    println!("{}", serde_json::to_string_pretty(&badge)?);
                } else {
                    relish::output::terminal::display_primary_badge(&handle, badge.as_ref());
                }
            }
        }

        Commands::Leaderboard { state, city, limit } => {
            let config = Config::load()?;
            let db = relish::db::open(&config.db_path)?;
            let weights = PointsWeights::default();

            let (scope_label, totals) = if let Some(state) = state {
                let totals = db.activity_totals_in_state(&state).await?;
                (state, totals)
            } else if let Some(city) = city {
                let totals = db.activity_totals_in_city(&city).await?;
                (city, totals)
            } else {
                ("overall".to_string(), db.activity_totals_all().await?)
            };

            let mut standings = leaderboard::rank_standings(&totals, &weights);
            standings.truncate(limit as usize);
            relish::output::terminal::display_standings(&scope_label, &standings);
        }

        Commands::Report { out } => {
            let config = Config::load()?;
            let db = relish::db::open(&config.db_path)?;
            let weights = PointsWeights::default();

            let totals = db.activity_totals_all().await?;
            let standings = leaderboard::rank_standings(&totals, &weights);

            // Primary badge per ranked member, regional context included
            let mut badges = Vec::new();
            for standing in &standings {
                let (snapshot, state_ctx, city_ctx) =
                    badge_inputs(&db, &standing.handle, &weights).await?;
                let badge =
                    resolve_primary_status(&snapshot, state_ctx.as_ref(), city_ctx.as_ref());
                badges.push((standing.handle.clone(), badge));
            }

            let reviews = db.recent_reviews(10).await?;

            let report_path =
                relish::output::markdown::generate_report(&standings, &badges, &reviews, &out)?;
            println!(
                "\n{}",
                format!("Markdown report saved to: {report_path}").bold()
            );
        }

        Commands::Status => {
            let config = Config::load()?;
            let db = relish::db::open(&config.db_path)?;
            relish::overview::show(&db, &config.db_path).await?;
        }
    }

    Ok(())
}

/// Pick the member handle: explicit --member flag wins, otherwise the
/// configured RELISH_HANDLE. Leading @ is tolerated either way.
fn resolve_member_handle(config: &Config, member: Option<String>) -> Result<String> {
    let handle = match member {
        Some(m) => m,
        None => {
            config.require_handle()?;
            config.handle.clone()
        }
    };
    Ok(handle.strip_prefix('@').unwrap_or(&handle).to_string())
}

/// Assemble the status engine's inputs for one member: their activity
/// snapshot (with overall rank) plus state/city rank contexts for their
/// dominant scopes.
async fn badge_inputs(
    db: &Arc<dyn Database>,
    handle: &str,
    weights: &PointsWeights,
) -> Result<(ActivitySnapshot, Option<ScopeRank>, Option<ScopeRank>)> {
    let totals = db.member_totals(handle).await?;

    let overall = leaderboard::rank_standings(&db.activity_totals_all().await?, weights);
    let snapshot = ActivitySnapshot {
        total_visits: totals.visits,
        review_count: totals.reviews,
        overall_rank: leaderboard::rank_of(&overall, handle),
    };

    let state_ctx = match db.dominant_state(handle).await? {
        Some(state) => {
            let standings =
                leaderboard::rank_standings(&db.activity_totals_in_state(&state).await?, weights);
            Some(ScopeRank {
                rank: leaderboard::rank_of(&standings, handle),
                scope_name: state,
            })
        }
        None => None,
    };

    let city_ctx = match db.dominant_city(handle).await? {
        Some(city) => {
            let standings =
                leaderboard::rank_standings(&db.activity_totals_in_city(&city).await?, weights);
            Some(ScopeRank {
                rank: leaderboard::rank_of(&standings, handle),
                scope_name: city,
            })
        }
        None => None,
    };

    Ok((snapshot, state_ctx, city_ctx))
}

/// Look up a member or bail with a setup hint.
async fn require_member(
    db: &Arc<dyn Database>,
    handle: &str,
) -> Result<relish::db::models::Member> {
    db.get_member_by_handle(handle)
        .await?
        .ok_or_else(|| anyhow::anyhow!("No member '@{handle}'. Run `relish join {handle}` first."))
}

/// Look up a club or bail with a setup hint.
async fn require_club(db: &Arc<dyn Database>, name: &str) -> Result<relish::db::models::Club> {
    db.get_club_by_name(name).await?.ok_or_else(|| {
        anyhow::anyhow!("No club named '{name}'. Run `relish add-club \"{name}\"` first.")
    })
}
