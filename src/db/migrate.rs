use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};
use tracing::debug;

/// A schema step, applied once and recorded in the `log` table.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250110_0001_core_schema",
        description: "Created stores, users and attendance tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS stores (
            id          TEXT PRIMARY KEY,
            name        TEXT NOT NULL,
            address     TEXT NOT NULL DEFAULT '',
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS users (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            code           TEXT NOT NULL UNIQUE,
            name           TEXT NOT NULL,
            pin            TEXT NOT NULL,
            home_store_id  TEXT NOT NULL REFERENCES stores(id),
            role           TEXT NOT NULL DEFAULT 'STAFF'
                           CHECK(role IN ('HEADQUARTERS','STORE_MANAGER','STAFF')),
            created_at     TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS attendance (
            id                  INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id             INTEGER NOT NULL REFERENCES users(id),
            store_id            TEXT NOT NULL REFERENCES stores(id),
            kind                TEXT NOT NULL
                                CHECK(kind IN ('CLOCK_IN','CLOCK_OUT','BREAK_START','BREAK_END')),
            timestamp           TEXT NOT NULL,
            note                TEXT,
            created_at          TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20250124_0002_attendance_corrections",
        description: "Added correction audit columns to attendance",
        sql: r#"
        ALTER TABLE attendance ADD COLUMN is_modified INTEGER NOT NULL DEFAULT 0;
        ALTER TABLE attendance ADD COLUMN original_timestamp TEXT;
        ALTER TABLE attendance ADD COLUMN modified_by INTEGER REFERENCES users(id);
        ALTER TABLE attendance ADD COLUMN modified_at TEXT;
        "#,
    },
    Migration {
        version: "20250207_0003_attendance_indexes",
        description: "Indexed attendance by user and by store",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_attendance_user_ts  ON attendance(user_id, timestamp);
        CREATE INDEX IF NOT EXISTS idx_attendance_store_ts ON attendance(store_id, timestamp);
        "#,
    },
];

/// Ensure that the `log` table exists: it doubles as migration ledger.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> Result<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(m.sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;

    tx.commit()
}

/// Public entry point: run all pending migrations, oldest first.
///
/// Returns how many were applied in this call.
pub fn run_pending_migrations(conn: &Connection) -> Result<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            debug!(version = m.version, "migration already applied");
            continue;
        }

        apply(conn, m)?;
        applied += 1;
        success(format!("Migration applied: {} → {}", m.version, m.description));
    }

    Ok(applied)
}
