use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_seeded, init_with_may_stamps, rtc, setup_test_db};

#[test]
fn test_init_seed_is_repeatable() {
    let db_path = setup_test_db("init_seed_repeat");

    init_seeded(&db_path);
    rtc()
        .args(["--db", &db_path, "--test", "init", "--seed"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    rtc()
        .args(["--db", &db_path, "user", "--code", "admin", "--pin", "admin", "list"])
        .assert()
        .success()
        .stdout(contains("Test Staff").and(contains("Store manager")));
}

#[test]
fn test_wrong_pin_is_rejected() {
    let db_path = setup_test_db("wrong_pin");
    init_seeded(&db_path);

    rtc()
        .args(["--db", &db_path, "stamp", "--code", "9999", "--pin", "0000", "in"])
        .assert()
        .failure()
        .stderr(contains("Authentication failed"));
}

#[test]
fn test_stamp_then_recent_history() {
    let db_path = setup_test_db("stamp_recent");
    init_seeded(&db_path);

    rtc()
        .args([
            "--db", &db_path, "stamp", "--code", "9999", "--pin", "1234", "in", "--note", "early shift",
        ])
        .assert()
        .success()
        .stdout(contains("Clock in recorded for Test Staff"));

    rtc()
        .args(["--db", &db_path, "history", "--code", "9999", "--pin", "1234", "--recent"])
        .assert()
        .success()
        .stdout(contains("early shift"));
}

#[test]
fn test_monthly_history_shows_worked_time() {
    let db_path = setup_test_db("monthly_history");
    init_with_may_stamps(&db_path);

    // 09:00-18:00 minus the 60 minute break
    rtc()
        .args([
            "--db", &db_path, "history", "--code", "9999", "--pin", "1234", "--month", "2025-05",
        ])
        .assert()
        .success()
        .stdout(contains("2025-05-05").and(contains("08h 00m")).and(contains("open")));
}

#[test]
fn test_logs_are_scoped_to_staff_records() {
    let db_path = setup_test_db("logs_scope");
    init_with_may_stamps(&db_path);
    common::stamp_at(
        &db_path,
        "manager",
        rtimeclock::models::stamp_kind::StampKind::ClockIn,
        "2025-05-05 07:30",
    );

    rtc()
        .args(["--db", &db_path, "logs", "--code", "9999", "--pin", "1234"])
        .assert()
        .success()
        .stdout(contains("Test Staff (9999)").and(contains("Store Manager").not()));

    rtc()
        .args(["--db", &db_path, "logs", "--code", "admin", "--pin", "admin", "--range", "2025-05-05"])
        .assert()
        .success()
        .stdout(contains("Store Manager (manager)").and(contains("2025-05-06").not()));
}

#[test]
fn test_staff_cannot_correct() {
    let db_path = setup_test_db("staff_correct");
    let ids = init_with_may_stamps(&db_path);

    rtc()
        .args([
            "--db",
            &db_path,
            "correct",
            "--code",
            "9999",
            "--pin",
            "1234",
            "--id",
            &ids[0].to_string(),
            "--at",
            "2025-05-05 08:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Not allowed"));
}

#[test]
fn test_manager_correction_keeps_original() {
    let db_path = setup_test_db("manager_correct");
    let ids = init_with_may_stamps(&db_path);
    let id = ids[0].to_string();

    for at in ["2025-05-05 08:30", "2025-05-05 08:45"] {
        rtc()
            .args([
                "--db", &db_path, "correct", "--code", "manager", "--pin", "manager", "--id", &id, "--at", at,
            ])
            .assert()
            .success()
            .stdout(contains("original 2025-05-05 09:00:00"));
    }

    rtc()
        .args(["--db", &db_path, "logs", "--code", "admin", "--pin", "admin"])
        .assert()
        .success()
        .stdout(contains("2025-05-05 08:45:00").and(contains("edited")));
}

#[test]
fn test_correct_unknown_id() {
    let db_path = setup_test_db("correct_unknown");
    init_seeded(&db_path);

    rtc()
        .args([
            "--db", &db_path, "correct", "--code", "admin", "--pin", "admin", "--id", "4242", "--at",
            "2025-05-05 08:00",
        ])
        .assert()
        .failure()
        .stderr(contains("not found"));
}

#[test]
fn test_store_and_user_administration() {
    let db_path = setup_test_db("admin_flow");
    init_seeded(&db_path);
    let admin = ["--code", "admin", "--pin", "admin"];

    rtc()
        .args(["--db", &db_path, "store"])
        .args(admin)
        .args(["add", "--name", "North Branch", "--address", "1 Main St"])
        .assert()
        .success()
        .stdout(contains("north-branch"));

    rtc()
        .args(["--db", &db_path, "user"])
        .args(admin)
        .args([
            "add", "1001", "--name", "Kim Lee", "--user-pin", "4321", "--home", "north-branch",
        ])
        .assert()
        .success();

    rtc()
        .args(["--db", &db_path, "stamp", "--code", "1001", "--pin", "4321", "in"])
        .assert()
        .success();

    // users and stamps keep the store alive
    rtc()
        .args(["--db", &db_path, "store"])
        .args(admin)
        .args(["del", "north-branch"])
        .assert()
        .failure()
        .stderr(contains("Operation rejected"));

    rtc()
        .args(["--db", &db_path, "store"])
        .args(admin)
        .args(["list"])
        .assert()
        .success()
        .stdout(contains("North Branch").and(contains("1 Main St")));
}

#[test]
fn test_non_headquarters_cannot_administer() {
    let db_path = setup_test_db("admin_denied");
    init_seeded(&db_path);

    rtc()
        .args([
            "--db", &db_path, "store", "--code", "manager", "--pin", "manager", "add", "--name", "Rogue",
        ])
        .assert()
        .failure()
        .stderr(contains("Not allowed"));
}

#[test]
fn test_internal_log_records_operations() {
    let db_path = setup_test_db("internal_log");
    init_seeded(&db_path);

    rtc()
        .args(["--db", &db_path, "stamp", "--code", "9999", "--pin", "1234", "in"])
        .assert()
        .success();

    rtc()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("seed").and(contains("stamp")).and(contains("init")));
}

#[test]
fn test_db_maintenance() {
    let db_path = setup_test_db("db_maintenance");
    init_with_may_stamps(&db_path);

    rtc()
        .args(["--db", &db_path, "db", "--check", "--vacuum", "--info"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed").and(contains("Vacuum completed")));
}
