//! Attendance table access: stamp insertion, range loads and corrections.

use crate::errors::{AppError, AppResult};
use crate::export::model::EventExport;
use crate::models::stamp_event::{StampEvent, TIMESTAMP_FMT};
use crate::models::stamp_kind::StampKind;
use chrono::{Local, NaiveDate, NaiveDateTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const STAMP_SELECT: &str = "SELECT a.id, a.user_id, a.store_id, a.kind, a.timestamp, a.note,
        a.is_modified, a.original_timestamp, a.modified_by, a.modified_at,
        s.name AS store_name
     FROM attendance a
     LEFT JOIN stores s ON s.id = a.store_id";

/// Row filter shared by the admin listing and the flat export.
#[derive(Debug, Default, Clone)]
pub struct LogFilter {
    pub store_id: Option<String>,
    pub user_id: Option<i64>,
    /// Substring match on the employee code.
    pub user_code: Option<String>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub limit: Option<usize>,
    pub newest_first: bool,
}

/// Inclusive date → half-open timestamp bound, as stored TEXT.
fn day_start(d: NaiveDate) -> String {
    format!("{} 00:00:00", d.format("%Y-%m-%d"))
}

fn day_after(d: NaiveDate) -> String {
    // `succ_opt` only fails at NaiveDate::MAX
    day_start(d.succ_opt().unwrap_or(d))
}

fn parse_ts(raw: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FMT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(raw.to_string())),
        )
    })
}

fn parse_opt_ts(raw: Option<String>) -> Result<Option<NaiveDateTime>> {
    raw.as_deref().map(parse_ts).transpose()
}

pub fn map_row(row: &Row) -> Result<StampEvent> {
    let kind_str: String = row.get("kind")?;
    let kind = StampKind::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidEventType(kind_str.clone())),
        )
    })?;

    let ts: String = row.get("timestamp")?;

    Ok(StampEvent {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        store_id: row.get("store_id")?,
        kind,
        timestamp: parse_ts(&ts)?,
        note: row.get("note")?,
        is_modified: row.get::<_, i32>("is_modified")? == 1,
        original_timestamp: parse_opt_ts(row.get("original_timestamp")?)?,
        modified_by: row.get("modified_by")?,
        modified_at: parse_opt_ts(row.get("modified_at")?)?,
        store_name: row.get("store_name")?,
    })
}

fn map_export_row(row: &Row) -> Result<EventExport> {
    Ok(EventExport {
        id: row.get(0)?,
        timestamp: row.get(1)?,
        store: row.get(2)?,
        name: row.get(3)?,
        kind: row.get(4)?,
        code: row.get(5)?,
        modified: row.get::<_, i32>(6)? == 1,
        original_timestamp: row.get(7)?,
    })
}

/// Insert a new stamp and return its id.
pub fn insert_stamp(conn: &Connection, ev: &StampEvent) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO attendance (user_id, store_id, kind, timestamp, note, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            ev.user_id,
            ev.store_id,
            ev.kind.to_db_str(),
            ev.timestamp_str(),
            ev.note,
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_stamp(conn: &Connection, id: i64) -> AppResult<Option<StampEvent>> {
    let sql = format!("{STAMP_SELECT} WHERE a.id = ?1");
    Ok(conn.query_row(&sql, [id], map_row).optional()?)
}

/// All stamps of one user whose local date falls in `[start, end]`.
pub fn load_stamps_for_user(
    conn: &Connection,
    user_id: i64,
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<Vec<StampEvent>> {
    let sql = format!(
        "{STAMP_SELECT}
         WHERE a.user_id = ?1 AND a.timestamp >= ?2 AND a.timestamp < ?3
         ORDER BY a.timestamp ASC, a.id ASC"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![user_id, day_start(start), day_after(end)], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Latest `limit` stamps of one user, newest first.
pub fn load_recent_for_user(conn: &Connection, user_id: i64, limit: usize) -> AppResult<Vec<StampEvent>> {
    let sql = format!(
        "{STAMP_SELECT}
         WHERE a.user_id = ?1
         ORDER BY a.timestamp DESC, a.id DESC
         LIMIT ?2"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![user_id, limit as i64], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Flat rows (stamp + store + user) for listings and bulk export.
pub fn load_event_rows(conn: &Connection, filter: &LogFilter) -> AppResult<Vec<EventExport>> {
    let order = if filter.newest_first { "DESC" } else { "ASC" };
    let sql = format!(
        "SELECT a.id, a.timestamp, s.name, u.name, a.kind, u.code,
                a.is_modified, a.original_timestamp
         FROM attendance a
         JOIN users u  ON u.id = a.user_id
         JOIN stores s ON s.id = a.store_id
         WHERE (?1 IS NULL OR a.store_id = ?1)
           AND (?2 IS NULL OR a.user_id = ?2)
           AND (?3 IS NULL OR u.code LIKE '%' || ?3 || '%')
           AND (?4 IS NULL OR a.timestamp >= ?4)
           AND (?5 IS NULL OR a.timestamp < ?5)
         ORDER BY a.timestamp {order}, a.id {order}
         LIMIT ?6"
    );

    let limit: i64 = filter.limit.map(|l| l as i64).unwrap_or(-1);

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(
        params![
            filter.store_id,
            filter.user_id,
            filter.user_code,
            filter.start.map(day_start),
            filter.end.map(day_after),
            limit,
        ],
        map_export_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Persist the audit fields set by `StampEvent::apply_correction`.
pub fn save_correction(conn: &Connection, ev: &StampEvent) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE attendance
         SET timestamp = ?1, is_modified = ?2, original_timestamp = ?3,
             modified_by = ?4, modified_at = ?5
         WHERE id = ?6",
        params![
            ev.timestamp_str(),
            if ev.is_modified { 1 } else { 0 },
            ev.original_timestamp.map(|t| t.format(TIMESTAMP_FMT).to_string()),
            ev.modified_by,
            ev.modified_at.map(|t| t.format(TIMESTAMP_FMT).to_string()),
            ev.id,
        ],
    )?;
    if changed == 0 {
        return Err(AppError::not_found(format!("Attendance log #{}", ev.id)));
    }
    Ok(())
}
