// Database trait — backend-agnostic async interface for all DB operations.
//
// All methods are async so the synchronous rusqlite backend (behind a
// mutex) and any future native-async backend fit the same interface.
// The trait mirrors the queries.rs function signatures.

use anyhow::Result;
use async_trait::async_trait;

use super::models::{ActivityTotals, Club, Member, OverviewStats, ReviewSummary};

#[async_trait]
pub trait Database: Send + Sync {
    // --- Lifecycle ---

    /// Count the number of user-created tables in the database.
    async fn table_count(&self) -> Result<i64>;

    // --- Clubs ---

    /// Register a club. Returns the new row id.
    async fn insert_club(&self, name: &str, city: &str, state: &str) -> Result<i64>;

    async fn get_club_by_name(&self, name: &str) -> Result<Option<Club>>;

    async fn list_clubs(&self) -> Result<Vec<Club>>;

    // --- Members ---

    /// Register a member. Returns the new row id.
    async fn insert_member(&self, handle: &str, display_name: Option<&str>) -> Result<i64>;

    async fn get_member_by_handle(&self, handle: &str) -> Result<Option<Member>>;

    async fn list_members(&self) -> Result<Vec<Member>>;

    // --- Activity ---

    /// Mark a club visited. Returns true when this is a new mark.
    async fn record_visit(&self, member_id: i64, club_id: i64) -> Result<bool>;

    /// Write (or rewrite) a member's review of a club.
    #[allow(clippy::too_many_arguments)]
    async fn upsert_review(
        &self,
        member_id: i64,
        club_id: i64,
        food: u8,
        service: u8,
        atmosphere: u8,
        value: u8,
        notes: Option<&str>,
    ) -> Result<()>;

    /// Most recent reviews, newest first.
    async fn recent_reviews(&self, limit: u32) -> Result<Vec<ReviewSummary>>;

    // --- Totals & scopes ---

    /// One member's overall activity counters. Errors if the handle is
    /// unknown.
    async fn member_totals(&self, handle: &str) -> Result<ActivityTotals>;

    /// Every member's overall activity counters.
    async fn activity_totals_all(&self) -> Result<Vec<ActivityTotals>>;

    /// Activity counters restricted to clubs in one state.
    async fn activity_totals_in_state(&self, state: &str) -> Result<Vec<ActivityTotals>>;

    /// Activity counters restricted to clubs in one city.
    async fn activity_totals_in_city(&self, city: &str) -> Result<Vec<ActivityTotals>>;

    /// The state where a member has visited the most clubs.
    async fn dominant_state(&self, handle: &str) -> Result<Option<String>>;

    /// The city where a member has visited the most clubs.
    async fn dominant_city(&self, handle: &str) -> Result<Option<String>>;

    // --- Overview ---

    /// Entity counts for the overview display.
    async fn overview_stats(&self) -> Result<OverviewStats>;
}
