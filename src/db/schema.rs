// Database schema — table creation and migrations.
//
// We use a simple version-based migration approach: a `schema_version` table
// tracks which migrations have run, and each migration is a function that
// executes SQL statements.

use anyhow::{Context, Result};
use rusqlite::Connection;

/// Create all tables if they don't exist yet.
///
/// This is idempotent — safe to call on every startup.
pub fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        -- Tracks schema version for future migrations
        CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        -- Directory members
        CREATE TABLE IF NOT EXISTS members (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            handle TEXT NOT NULL UNIQUE,
            joined_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        -- The venue directory
        CREATE TABLE IF NOT EXISTS clubs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            city TEXT NOT NULL,
            state TEXT NOT NULL,
            added_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        -- Visit marks. A club counts once toward badge totals, so the
        -- (member, club) pair is unique and re-marking is a no-op.
        CREATE TABLE IF NOT EXISTS visits (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            member_id INTEGER NOT NULL REFERENCES members(id),
            club_id INTEGER NOT NULL REFERENCES clubs(id),
            visited_at TEXT NOT NULL DEFAULT (datetime('now')),
            UNIQUE(member_id, club_id)
        );

        -- Multi-dimensional reviews, ratings 1-5. One review per member per
        -- club; re-reviewing updates in place.
        CREATE TABLE IF NOT EXISTS reviews (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            member_id INTEGER NOT NULL REFERENCES members(id),
            club_id INTEGER NOT NULL REFERENCES clubs(id),
            food INTEGER NOT NULL,
            service INTEGER NOT NULL,
            atmosphere INTEGER NOT NULL,
            value INTEGER NOT NULL,
            notes TEXT,
            written_at TEXT NOT NULL DEFAULT (datetime('now')),
            UNIQUE(member_id, club_id)
        );

        -- Index for totting up a member's activity
        CREATE INDEX IF NOT EXISTS idx_visits_member
            ON visits(member_id);

        CREATE INDEX IF NOT EXISTS idx_reviews_member
            ON reviews(member_id);

        -- Indexes for scoped (state/city) leaderboards
        CREATE INDEX IF NOT EXISTS idx_clubs_state
            ON clubs(state);

        CREATE INDEX IF NOT EXISTS idx_clubs_city
            ON clubs(city);
        ",
    )
    .context("Failed to create database tables")?;

    // Record initial schema version if not already set
    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version) VALUES (?1)",
        [1],
    )?;

    // Migration v2: add display_name column to members. Handles stay the
    // stable identifier; display names are presentation only.
    run_migration(conn, 2, |c| {
        c.execute_batch("ALTER TABLE members ADD COLUMN display_name TEXT;")
    })?;

    Ok(())
}

/// Run a migration if it hasn't been applied yet.
/// The migration function receives the connection and should execute its SQL.
fn run_migration<F>(conn: &Connection, version: i64, migrate: F) -> Result<()>
where
    F: FnOnce(&Connection) -> rusqlite::Result<()>,
{
    let already_applied: bool = conn.query_row(
        "SELECT COUNT(*) > 0 FROM schema_version WHERE version = ?1",
        [version],
        |row| row.get(0),
    )?;

    if !already_applied {
        migrate(conn).with_context(|| format!("Migration v{version} failed"))?;
        conn.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            [version],
        )?;
    }

    Ok(())
}

/// Count the number of tables in the database (useful for init confirmation).
pub fn table_count(conn: &Connection) -> Result<i64> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
        [],
        |row| row.get(0),
    )?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        // Running create_tables twice should not error
        create_tables(&conn).unwrap();
        create_tables(&conn).unwrap();
    }

    #[test]
    fn test_table_count() {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        let count = table_count(&conn).unwrap();
        // schema_version, members, clubs, visits, reviews = 5 tables
        // (sqlite_sequence is excluded by the sqlite_% name filter)
        assert_eq!(count, 5i64);
    }

    #[test]
    fn test_migration_v2_adds_display_name_column() {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();

        conn.execute(
            "INSERT INTO members (handle, display_name) VALUES ('alice', 'Alice A.')",
            [],
        )
        .unwrap();

        let result: String = conn
            .query_row(
                "SELECT display_name FROM members WHERE handle = 'alice'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(result, "Alice A.");
    }

    #[test]
    fn test_migration_v2_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        // Run create_tables three times — the migration should only run once
        create_tables(&conn).unwrap();
        create_tables(&conn).unwrap();
        create_tables(&conn).unwrap();

        let versions: Vec<i64> = conn
            .prepare("SELECT version FROM schema_version ORDER BY version")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .map(|r| r.unwrap())
            .collect();
        assert_eq!(versions, vec![1, 2]);
    }
}
