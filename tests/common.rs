#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDateTime;
use rtimeclock::db::pool::DbPool;
use rtimeclock::db::{queries, users};
use rtimeclock::models::stamp_event::StampEvent;
use rtimeclock::models::stamp_kind::StampKind;
use rtimeclock::models::store::DEFAULT_STORE_ID;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rtc() -> Command {
    cargo_bin_cmd!("rtimeclock")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimeclock.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Schema plus the demo store and accounts.
pub fn init_seeded(db_path: &str) {
    rtc()
        .args(["--db", db_path, "--test", "init", "--seed"])
        .assert()
        .success();
}

/// Back-dated stamp at the default store, written straight through the library.
pub fn stamp_at(db_path: &str, code: &str, kind: StampKind, ts: &str) -> i64 {
    let pool = DbPool::new(db_path).unwrap();
    let user = users::load_user_by_code(&pool.conn, code).unwrap().unwrap();
    let at = NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M").unwrap();
    let ev = StampEvent::new(user.id, DEFAULT_STORE_ID, kind, at);
    queries::insert_stamp(&pool.conn, &ev).unwrap()
}

/// Seeded DB with one full day and one open day for the staff account in May 2025.
pub fn init_with_may_stamps(db_path: &str) -> Vec<i64> {
    init_seeded(db_path);
    vec![
        stamp_at(db_path, "9999", StampKind::ClockIn, "2025-05-05 09:00"),
        stamp_at(db_path, "9999", StampKind::ClockOut, "2025-05-05 18:00"),
        stamp_at(db_path, "9999", StampKind::ClockIn, "2025-05-06 09:15"),
    ]
}
