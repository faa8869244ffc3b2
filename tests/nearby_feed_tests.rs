use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{setup_test_db, vlg};

fn checkin_at(db_path: &str, user: &str, vid: &str, name: &str, lat: &str, lon: &str) {
    vlg()
        .args([
            "--db", db_path, "--test", "checkin", user, vid, name, "--lat", lat, "--lon", lon,
        ])
        .assert()
        .success();
}

#[test]
fn test_nearby_returns_only_records_in_radius() {
    let db_path = setup_test_db("nearby_radius");

    vlg()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // One at the origin, one roughly 50 km north.
    checkin_at(&db_path, "user-1", "v1", "Origin Hall", "27.9659", "-82.8001");
    checkin_at(&db_path, "user-2", "v2", "Far Pavilion", "28.4159", "-82.8001");

    vlg()
        .args([
            "--db",
            &db_path,
            "--test",
            "list",
            "--nearby",
            "27.9659,-82.8001",
            "--radius",
            "5",
        ])
        .assert()
        .success()
        .stdout(contains("Origin Hall"))
        .stdout(contains("Far Pavilion").not());

    // A larger radius picks up both.
    vlg()
        .args([
            "--db",
            &db_path,
            "--test",
            "list",
            "--nearby",
            "27.9659,-82.8001",
            "--radius",
            "60",
        ])
        .assert()
        .success()
        .stdout(contains("Origin Hall"))
        .stdout(contains("Far Pavilion"));
}

#[test]
fn test_nearby_excludes_unlocated_checkins() {
    let db_path = setup_test_db("nearby_unlocated");

    vlg()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    checkin_at(&db_path, "user-1", "v1", "Located Venue", "27.9659", "-82.8001");

    // No coordinates: must not appear even with a huge radius.
    vlg()
        .args([
            "--db",
            &db_path,
            "--test",
            "checkin",
            "user-2",
            "v2",
            "Unlocated Venue",
        ])
        .assert()
        .success();

    vlg()
        .args([
            "--db",
            &db_path,
            "--test",
            "list",
            "--nearby",
            "27.9659,-82.8001",
            "--radius",
            "10000",
        ])
        .assert()
        .success()
        .stdout(contains("Located Venue"))
        .stdout(contains("Unlocated Venue").not());
}

#[test]
fn test_nearby_rejects_malformed_coordinates() {
    let db_path = setup_test_db("nearby_malformed");

    vlg()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    vlg()
        .args(["--db", &db_path, "--test", "list", "--nearby", "not-a-pair"])
        .assert()
        .failure()
        .stderr(contains("expected LAT,LON"));

    // In-range syntax but out-of-range latitude.
    vlg()
        .args(["--db", &db_path, "--test", "list", "--nearby", "95.0,10.0"])
        .assert()
        .failure()
        .stderr(contains("Invalid coordinate"));
}

#[test]
fn test_feed_excludes_own_and_private_checkins() {
    let db_path = setup_test_db("feed_visibility");

    vlg()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    vlg()
        .args([
            "--db",
            &db_path,
            "--test",
            "checkin",
            "user-1",
            "v1",
            "My Own Spot",
            "--visibility",
            "public",
        ])
        .assert()
        .success();

    vlg()
        .args([
            "--db",
            &db_path,
            "--test",
            "checkin",
            "user-2",
            "v2",
            "Public Spot",
            "--visibility",
            "public",
        ])
        .assert()
        .success();

    vlg()
        .args([
            "--db",
            &db_path,
            "--test",
            "checkin",
            "user-3",
            "v3",
            "Secret Spot",
            "--visibility",
            "private",
        ])
        .assert()
        .success();

    vlg()
        .args([
            "--db",
            &db_path,
            "--test",
            "list",
            "--feed",
            "--excluding",
            "user-1",
        ])
        .assert()
        .success()
        .stdout(contains("Public Spot"))
        .stdout(contains("My Own Spot").not())
        .stdout(contains("Secret Spot").not());
}
