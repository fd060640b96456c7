// Database queries — CRUD operations for all tables.
//
// Every database interaction goes through this module. This keeps SQL
// contained in one place and gives the rest of the app clean Rust interfaces.

use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

use super::models::{ActivityTotals, Club, Member, OverviewStats, ReviewSummary};

// --- Clubs ---

/// Register a club. Returns the new row id.
pub fn insert_club(conn: &Connection, name: &str, city: &str, state: &str) -> Result<i64> {
    conn.execute(
        "INSERT INTO clubs (name, city, state) VALUES (?1, ?2, ?3)",
        params![name, city, state],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_club_by_name(conn: &Connection, name: &str) -> Result<Option<Club>> {
    let mut stmt =
        conn.prepare("SELECT id, name, city, state, added_at FROM clubs WHERE name = ?1")?;
    let result = stmt
        .query_row(params![name], |row| {
            Ok(Club {
                id: row.get(0)?,
                name: row.get(1)?,
                city: row.get(2)?,
                state: row.get(3)?,
                added_at: row.get(4)?,
            })
        })
        .optional()?;
    Ok(result)
}

pub fn list_clubs(conn: &Connection) -> Result<Vec<Club>> {
    let mut stmt =
        conn.prepare("SELECT id, name, city, state, added_at FROM clubs ORDER BY name")?;
    let rows = stmt.query_map([], |row| {
        Ok(Club {
            id: row.get(0)?,
            name: row.get(1)?,
            city: row.get(2)?,
            state: row.get(3)?,
            added_at: row.get(4)?,
        })
    })?;
    Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
}

// --- Members ---

/// Register a member. Returns the new row id.
pub fn insert_member(conn: &Connection, handle: &str, display_name: Option<&str>) -> Result<i64> {
    conn.execute(
        "INSERT INTO members (handle, display_name) VALUES (?1, ?2)",
        params![handle, display_name],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_member_by_handle(conn: &Connection, handle: &str) -> Result<Option<Member>> {
    let mut stmt =
        conn.prepare("SELECT id, handle, display_name, joined_at FROM members WHERE handle = ?1")?;
    let result = stmt
        .query_row(params![handle], |row| {
            Ok(Member {
                id: row.get(0)?,
                handle: row.get(1)?,
                display_name: row.get(2)?,
                joined_at: row.get(3)?,
            })
        })
        .optional()?;
    Ok(result)
}

pub fn list_members(conn: &Connection) -> Result<Vec<Member>> {
    let mut stmt =
        conn.prepare("SELECT id, handle, display_name, joined_at FROM members ORDER BY handle")?;
    let rows = stmt.query_map([], |row| {
        Ok(Member {
            id: row.get(0)?,
            handle: row.get(1)?,
            display_name: row.get(2)?,
            joined_at: row.get(3)?,
        })
    })?;
    Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
}

// --- Visits ---

/// Mark a club visited. Returns true when this is a new mark; re-marking an
/// already-visited club is a no-op and returns false.
pub fn record_visit(conn: &Connection, member_id: i64, club_id: i64) -> Result<bool> {
    let inserted = conn.execute(
        "INSERT OR IGNORE INTO visits (member_id, club_id) VALUES (?1, ?2)",
        params![member_id, club_id],
    )?;
    Ok(inserted > 0)
}

// --- Reviews ---

/// Write (or rewrite) a member's review of a club.
#[allow(clippy::too_many_arguments)]
pub fn upsert_review(
    conn: &Connection,
    member_id: i64,
    club_id: i64,
    food: u8,
    service: u8,
    atmosphere: u8,
    value: u8,
    notes: Option<&str>,
) -> Result<()> {
    conn.execute(
        "INSERT INTO reviews (member_id, club_id, food, service, atmosphere, value, notes, written_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, datetime('now'))
         ON CONFLICT(member_id, club_id) DO UPDATE SET
            food = ?3,
            service = ?4,
            atmosphere = ?5,
            value = ?6,
            notes = ?7,
            written_at = datetime('now')",
        params![member_id, club_id, food, service, atmosphere, value, notes],
    )?;
    Ok(())
}

/// Most recent reviews, joined with member and club names for display.
pub fn recent_reviews(conn: &Connection, limit: u32) -> Result<Vec<ReviewSummary>> {
    let mut stmt = conn.prepare(
        "SELECT m.handle, c.name, r.food, r.service, r.atmosphere, r.value, r.notes, r.written_at
         FROM reviews r
         JOIN members m ON m.id = r.member_id
         JOIN clubs c ON c.id = r.club_id
         ORDER BY r.written_at DESC, r.id DESC
         LIMIT ?1",
    )?;
    let rows = stmt.query_map(params![limit], |row| {
        Ok(ReviewSummary {
            member_handle: row.get(0)?,
            club_name: row.get(1)?,
            food: row.get(2)?,
            service: row.get(3)?,
            atmosphere: row.get(4)?,
            value: row.get(5)?,
            notes: row.get(6)?,
            written_at: row.get(7)?,
        })
    })?;
    Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
}

// --- Activity totals ---

/// One member's overall activity counters.
pub fn member_totals(conn: &Connection, handle: &str) -> Result<ActivityTotals> {
    let mut stmt = conn.prepare(
        "SELECT m.handle,
                (SELECT COUNT(*) FROM visits v WHERE v.member_id = m.id),
                (SELECT COUNT(*) FROM reviews r WHERE r.member_id = m.id)
         FROM members m
         WHERE m.handle = ?1",
    )?;
    let result = stmt
        .query_row(params![handle], |row| {
            Ok(ActivityTotals {
                handle: row.get(0)?,
                visits: row.get::<_, i64>(1)? as u32,
                reviews: row.get::<_, i64>(2)? as u32,
            })
        })
        .optional()?;
    result.ok_or_else(|| anyhow::anyhow!("No member with handle '{handle}'"))
}

/// Every member's overall activity counters.
pub fn activity_totals_all(conn: &Connection) -> Result<Vec<ActivityTotals>> {
    let mut stmt = conn.prepare(
        "SELECT m.handle,
                (SELECT COUNT(*) FROM visits v WHERE v.member_id = m.id),
                (SELECT COUNT(*) FROM reviews r WHERE r.member_id = m.id)
         FROM members m
         ORDER BY m.handle",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(ActivityTotals {
            handle: row.get(0)?,
            visits: row.get::<_, i64>(1)? as u32,
            reviews: row.get::<_, i64>(2)? as u32,
        })
    })?;
    Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
}

/// Every member's activity counters restricted to clubs in one state.
pub fn activity_totals_in_state(conn: &Connection, state: &str) -> Result<Vec<ActivityTotals>> {
    scoped_totals(conn, "state", state)
}

/// Every member's activity counters restricted to clubs in one city.
pub fn activity_totals_in_city(conn: &Connection, city: &str) -> Result<Vec<ActivityTotals>> {
    scoped_totals(conn, "city", city)
}

fn scoped_totals(conn: &Connection, column: &str, scope: &str) -> Result<Vec<ActivityTotals>> {
    // `column` is one of two literals supplied by the wrappers above, never
    // user input, so string-building the query is safe here.
    let sql = format!(
        "SELECT m.handle,
                (SELECT COUNT(*) FROM visits v
                  JOIN clubs c ON c.id = v.club_id
                  WHERE v.member_id = m.id AND c.{column} = ?1),
                (SELECT COUNT(*) FROM reviews r
                  JOIN clubs c ON c.id = r.club_id
                  WHERE r.member_id = m.id AND c.{column} = ?1)
         FROM members m
         ORDER BY m.handle"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![scope], |row| {
        Ok(ActivityTotals {
            handle: row.get(0)?,
            visits: row.get::<_, i64>(1)? as u32,
            reviews: row.get::<_, i64>(2)? as u32,
        })
    })?;
    Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
}

// --- Dominant scopes ---

/// The state where a member has visited the most clubs, ties broken
/// alphabetically. None when the member has no visits.
pub fn dominant_state(conn: &Connection, handle: &str) -> Result<Option<String>> {
    dominant_scope(conn, "state", handle)
}

/// The city where a member has visited the most clubs, ties broken
/// alphabetically. None when the member has no visits.
pub fn dominant_city(conn: &Connection, handle: &str) -> Result<Option<String>> {
    dominant_scope(conn, "city", handle)
}

fn dominant_scope(conn: &Connection, column: &str, handle: &str) -> Result<Option<String>> {
    let sql = format!(
        "SELECT c.{column}
         FROM visits v
         JOIN clubs c ON c.id = v.club_id
         JOIN members m ON m.id = v.member_id
         WHERE m.handle = ?1
         GROUP BY c.{column}
         ORDER BY COUNT(*) DESC, c.{column} ASC
         LIMIT 1"
    );
    let mut stmt = conn.prepare(&sql)?;
    let result = stmt
        .query_row(params![handle], |row| row.get(0))
        .optional()?;
    Ok(result)
}

// --- Overview ---

/// Entity counts for the overview display.
pub fn overview_stats(conn: &Connection) -> Result<OverviewStats> {
    let count = |table: &str| -> Result<i64> {
        // Table names are the four literals below, never user input.
        Ok(conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
            row.get(0)
        })?)
    };
    Ok(OverviewStats {
        clubs: count("clubs")?,
        members: count("members")?,
        visits: count("visits")?,
        reviews: count("reviews")?,
    })
}
