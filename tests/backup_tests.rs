use predicates::str::contains;
use std::path::Path;

mod common;
use common::{init_seeded, rtc, setup_test_db, temp_out};

#[test]
fn test_backup_copies_database() {
    let db_path = setup_test_db("backup_plain");
    init_seeded(&db_path);
    let out = temp_out("backup_plain", "sqlite");

    rtc()
        .args(["--db", &db_path, "backup", "--file", &out, "--force"])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(Path::new(&out).exists());
}

#[cfg(not(target_os = "windows"))]
#[test]
fn test_backup_compressed_removes_plain_copy() {
    let db_path = setup_test_db("backup_gz");
    init_seeded(&db_path);
    let out = temp_out("backup_gz", "sqlite");
    let gz = format!("{out}.tar.gz");
    std::fs::remove_file(&gz).ok();

    rtc()
        .args(["--db", &db_path, "backup", "--file", &out, "--compress", "--force"])
        .assert()
        .success();

    assert!(Path::new(&gz).exists());
    assert!(!Path::new(&out).exists());
}
