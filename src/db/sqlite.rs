// SqliteDatabase — rusqlite backend implementing the Database trait.
//
// The Connection is wrapped in tokio::sync::Mutex because Connection is !Send.
// Trait methods lock the mutex, do synchronous rusqlite work, and return.
// The lock is never held across .await points — Rust enforces this because
// MutexGuard is !Send.
//
// The free functions in queries.rs remain available so tests can work
// against a Connection directly.

use anyhow::Result;
use async_trait::async_trait;
use rusqlite::Connection;
use tokio::sync::Mutex;

use super::models::{ActivityTotals, Club, Member, OverviewStats, ReviewSummary};
use super::traits::Database;

pub struct SqliteDatabase {
    conn: Mutex<Connection>,
}

impl SqliteDatabase {
    /// Wrap an already-opened rusqlite Connection.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }
}

#[async_trait]
impl Database for SqliteDatabase {
    async fn table_count(&self) -> Result<i64> {
        let conn = self.conn.lock().await;
        super::schema::table_count(&conn)
    }

    async fn insert_club(&self, name: &str, city: &str, state: &str) -> Result<i64> {
        let conn = self.conn.lock().await;
        super::queries::insert_club(&conn, name, city, state)
    }

    async fn get_club_by_name(&self, name: &str) -> Result<Option<Club>> {
        let conn = self.conn.lock().await;
        super::queries::get_club_by_name(&conn, name)
    }

    async fn list_clubs(&self) -> Result<Vec<Club>> {
        let conn = self.conn.lock().await;
        super::queries::list_clubs(&conn)
    }

    async fn insert_member(&self, handle: &str, display_name: Option<&str>) -> Result<i64> {
        let conn = self.conn.lock().await;
        super::queries::insert_member(&conn, handle, display_name)
    }

    async fn get_member_by_handle(&self, handle: &str) -> Result<Option<Member>> {
        let conn = self.conn.lock().await;
        super::queries::get_member_by_handle(&conn, handle)
    }

    async fn list_members(&self) -> Result<Vec<Member>> {
        let conn = self.conn.lock().await;
        super::queries::list_members(&conn)
    }

    async fn record_visit(&self, member_id: i64, club_id: i64) -> Result<bool> {
        let conn = self.conn.lock().await;
        super::queries::record_visit(&conn, member_id, club_id)
    }

    async fn upsert_review(
        &self,
        member_id: i64,
        club_id: i64,
        food: u8,
        service: u8,
        atmosphere: u8,
        value: u8,
        notes: Option<&str>,
    ) -> Result<()> {
        let conn = self.conn.lock().await;
        super::queries::upsert_review(
            &conn, member_id, club_id, food, service, atmosphere, value, notes,
        )
    }

    async fn recent_reviews(&self, limit: u32) -> Result<Vec<ReviewSummary>> {
        let conn = self.conn.lock().await;
        super::queries::recent_reviews(&conn, limit)
    }

    async fn member_totals(&self, handle: &str) -> Result<ActivityTotals> {
        let conn = self.conn.lock().await;
        super::queries::member_totals(&conn, handle)
    }

    async fn activity_totals_all(&self) -> Result<Vec<ActivityTotals>> {
        let conn = self.conn.lock().await;
        super::queries::activity_totals_all(&conn)
    }

    async fn activity_totals_in_state(&self, state: &str) -> Result<Vec<ActivityTotals>> {
        let conn = self.conn.lock().await;
        super::queries::activity_totals_in_state(&conn, state)
    }

    async fn activity_totals_in_city(&self, city: &str) -> Result<Vec<ActivityTotals>> {
        let conn = self.conn.lock().await;
        super::queries::activity_totals_in_city(&conn, city)
    }

    async fn dominant_state(&self, handle: &str) -> Result<Option<String>> {
        let conn = self.conn.lock().await;
        super::queries::dominant_state(&conn, handle)
    }

    async fn dominant_city(&self, handle: &str) -> Result<Option<String>> {
        let conn = self.conn.lock().await;
        super::queries::dominant_city(&conn, handle)
    }

    async fn overview_stats(&self) -> Result<OverviewStats> {
        let conn = self.conn.lock().await;
        super::queries::overview_stats(&conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema::create_tables;

    async fn test_db() -> SqliteDatabase {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        SqliteDatabase::new(conn)
    }

    #[tokio::test]
    async fn test_trait_club_roundtrip() {
        let db = test_db().await;
        assert!(db.get_club_by_name("The Duck Inn").await.unwrap().is_none());
        db.insert_club("The Duck Inn", "Delavan", "Wisconsin")
            .await
            .unwrap();
        let club = db
            .get_club_by_name("The Duck Inn")
            .await
            .unwrap()
            .expect("club should exist");
        assert_eq!(club.city, "Delavan");
        assert_eq!(club.state, "Wisconsin");
    }

    #[tokio::test]
    async fn test_trait_visit_is_idempotent() {
        let db = test_db().await;
        let member_id = db.insert_member("alice", None).await.unwrap();
        let club_id = db
            .insert_club("Ishnala", "Lake Delton", "Wisconsin")
            .await
            .unwrap();

        assert!(db.record_visit(member_id, club_id).await.unwrap());
        assert!(!db.record_visit(member_id, club_id).await.unwrap());

        let totals = db.member_totals("alice").await.unwrap();
        assert_eq!(totals.visits, 1);
    }
}
