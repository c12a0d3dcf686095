use crate::db::stores::is_constraint_violation;
use crate::errors::{AppError, AppResult};
use crate::models::role::Role;
use crate::models::user::User;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Row, params};

const USER_COLUMNS: &str = "id, code, name, pin, home_store_id, role";

pub fn map_user(row: &Row) -> rusqlite::Result<User> {
    let role_str: String = row.get("role")?;
    let role = Role::from_db_str(&role_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidRole(role_str.clone())),
        )
    })?;

    Ok(User {
        id: row.get("id")?,
        code: row.get("code")?,
        name: row.get("name")?,
        pin: row.get("pin")?,
        home_store_id: row.get("home_store_id")?,
        role,
    })
}

fn map_write_error(e: rusqlite::Error, user: &User) -> AppError {
    if is_constraint_violation(&e) {
        AppError::Conflict(format!(
            "employee code '{}' is already taken or store '{}' does not exist",
            user.code, user.home_store_id
        ))
    } else {
        AppError::from(e)
    }
}

/// Insert a user and return its new id.
pub fn insert_user(conn: &Connection, user: &User) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO users (code, name, pin, home_store_id, role, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            user.code,
            user.name,
            user.pin,
            user.home_store_id,
            user.role.to_db_str(),
            Local::now().to_rfc3339(),
        ],
    )
    .map_err(|e| map_write_error(e, user))?;
    Ok(conn.last_insert_rowid())
}

/// Create the user or refresh role/home store of an existing code.
pub fn upsert_user(conn: &Connection, user: &User) -> AppResult<()> {
    conn.execute(
        "INSERT INTO users (code, name, pin, home_store_id, role, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         ON CONFLICT(code) DO UPDATE SET home_store_id = excluded.home_store_id, role = excluded.role",
        params![
            user.code,
            user.name,
            user.pin,
            user.home_store_id,
            user.role.to_db_str(),
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(())
}

pub fn list_users(conn: &Connection) -> AppResult<Vec<User>> {
    let sql = format!("SELECT {USER_COLUMNS} FROM users ORDER BY code ASC");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], map_user)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_user_by_code(conn: &Connection, code: &str) -> AppResult<Option<User>> {
    let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE code = ?1");
    Ok(conn.query_row(&sql, [code], map_user).optional()?)
}

pub fn update_user(conn: &Connection, user: &User) -> AppResult<()> {
    let changed = conn
        .execute(
            "UPDATE users
             SET code = ?1, name = ?2, pin = ?3, home_store_id = ?4, role = ?5
             WHERE id = ?6",
            params![
                user.code,
                user.name,
                user.pin,
                user.home_store_id,
                user.role.to_db_str(),
                user.id,
            ],
        )
        .map_err(|e| map_write_error(e, user))?;
    if changed == 0 {
        return Err(AppError::not_found(format!("User #{}", user.id)));
    }
    Ok(())
}

/// Delete a user; refused while attendance logs reference it.
pub fn delete_user(conn: &Connection, code: &str) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM users WHERE code = ?1", [code]).map_err(|e| {
        if is_constraint_violation(&e) {
            AppError::Conflict(format!(
                "user '{code}' could not be deleted: attendance logs still reference it"
            ))
        } else {
            AppError::from(e)
        }
    })?;
    if changed == 0 {
        return Err(AppError::not_found(format!("User '{code}'")));
    }
    Ok(())
}
