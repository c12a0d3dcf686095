use crate::errors::{AppError, AppResult};
use crate::models::store::Store;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Row, params};

fn map_store(row: &Row) -> rusqlite::Result<Store> {
    Ok(Store {
        id: row.get("id")?,
        name: row.get("name")?,
        address: row.get("address")?,
    })
}

/// `true` when SQLite refused the statement because of a constraint.
pub(crate) fn is_constraint_violation(e: &rusqlite::Error) -> bool {
    matches!(
        e,
        rusqlite::Error::SqliteFailure(err, _) if err.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

pub fn insert_store(conn: &Connection, store: &Store) -> AppResult<()> {
    conn.execute(
        "INSERT INTO stores (id, name, address, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![store.id, store.name, store.address, Local::now().to_rfc3339()],
    )
    .map_err(|e| {
        if is_constraint_violation(&e) {
            AppError::Conflict(format!("store id '{}' already exists", store.id))
        } else {
            AppError::from(e)
        }
    })?;
    Ok(())
}

/// Create or refresh a store keeping its id (used by the seed data).
pub fn upsert_store(conn: &Connection, store: &Store) -> AppResult<()> {
    conn.execute(
        "INSERT INTO stores (id, name, address, created_at) VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(id) DO UPDATE SET name = excluded.name, address = excluded.address",
        params![store.id, store.name, store.address, Local::now().to_rfc3339()],
    )?;
    Ok(())
}

pub fn list_stores(conn: &Connection) -> AppResult<Vec<Store>> {
    let mut stmt = conn.prepare("SELECT id, name, address FROM stores ORDER BY name ASC")?;
    let rows = stmt.query_map([], map_store)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_store(conn: &Connection, id: &str) -> AppResult<Option<Store>> {
    let store = conn
        .query_row(
            "SELECT id, name, address FROM stores WHERE id = ?1",
            [id],
            map_store,
        )
        .optional()?;
    Ok(store)
}

pub fn update_store(conn: &Connection, store: &Store) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE stores SET name = ?1, address = ?2 WHERE id = ?3",
        params![store.name, store.address, store.id],
    )?;
    if changed == 0 {
        return Err(AppError::not_found(format!("Store '{}'", store.id)));
    }
    Ok(())
}

/// Delete a store; refused while users or stamps still point at it.
pub fn delete_store(conn: &Connection, id: &str) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM stores WHERE id = ?1", [id]).map_err(|e| {
        if is_constraint_violation(&e) {
            AppError::Conflict(format!(
                "store '{id}' could not be deleted: users or attendance logs still reference it"
            ))
        } else {
            AppError::from(e)
        }
    })?;
    if changed == 0 {
        return Err(AppError::not_found(format!("Store '{id}'")));
    }
    Ok(())
}
