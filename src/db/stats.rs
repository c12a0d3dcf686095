use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use chrono::NaiveDateTime;
use rusqlite::OptionalExtension;
use std::fs;

/// Row counts and covered period, as printed by `db --info`.
#[derive(Debug, Clone, PartialEq)]
pub struct DbStats {
    pub stores: i64,
    pub users: i64,
    pub stamps: i64,
    pub modified: i64,
    pub first: Option<String>,
    pub last: Option<String>,
}

impl DbStats {
    pub fn collect(pool: &DbPool) -> AppResult<Self> {
        let count = |sql: &str| -> rusqlite::Result<i64> { pool.conn.query_row(sql, [], |row| row.get(0)) };

        let bound = |sql: &str| -> rusqlite::Result<Option<String>> {
            pool.conn.query_row(sql, [], |row| row.get(0)).optional()
        };

        Ok(Self {
            stores: count("SELECT COUNT(*) FROM stores")?,
            users: count("SELECT COUNT(*) FROM users")?,
            stamps: count("SELECT COUNT(*) FROM attendance")?,
            modified: count("SELECT COUNT(*) FROM attendance WHERE is_modified = 1")?,
            first: bound("SELECT timestamp FROM attendance ORDER BY timestamp ASC LIMIT 1")?,
            last: bound("SELECT timestamp FROM attendance ORDER BY timestamp DESC LIMIT 1")?,
        })
    }

    /// Average stamps per calendar day over the covered period.
    pub fn stamps_per_day(&self) -> Option<f64> {
        let parse = |s: &str| NaiveDateTime::parse_from_str(s, crate::models::stamp_event::TIMESTAMP_FMT).ok();
        let first = parse(self.first.as_deref()?)?;
        let last = parse(self.last.as_deref()?)?;
        let days = (last.date() - first.date()).num_days() + 1;
        Some(self.stamps as f64 / days as f64)
    }
}

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    let stats = DbStats::collect(pool)?;

    println!();

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    println!("{}• Stores:{} {}{}{}", CYAN, RESET, GREEN, stats.stores, RESET);
    println!("{}• Users:{} {}{}{}", CYAN, RESET, GREEN, stats.users, RESET);
    println!(
        "{}• Stamps:{} {}{}{} ({} corrected)",
        CYAN, RESET, GREEN, stats.stamps, RESET, stats.modified
    );

    let dash = || format!("{GREY}--{RESET}");
    println!("{}• Period:{}", CYAN, RESET);
    println!("    from: {}", stats.first.clone().unwrap_or_else(dash));
    println!("    to:   {}", stats.last.clone().unwrap_or_else(dash));

    if let Some(avg) = stats.stamps_per_day() {
        println!("{}• Average stamps/day:{} {:.2}", CYAN, RESET, avg);
    }

    println!();
    Ok(())
}
