#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn vlg() -> Command {
    cargo_bin_cmd!("venuelog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_venuelog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Pull the generated check-in id out of command output.
pub fn extract_checkin_id(stdout: &[u8]) -> String {
    let text = String::from_utf8_lossy(stdout);
    let start = text.find("checkin-").expect("no check-in id in output");
    text[start..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect()
}

/// Initialize DB and record two check-ins for user-1 at distinct venues
pub fn init_db_with_data(db_path: &str) {
    vlg()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    vlg()
        .args([
            "--db",
            db_path,
            "--test",
            "checkin",
            "user-1",
            "v1",
            "Venue One",
        ])
        .assert()
        .success();

    vlg()
        .args([
            "--db",
            db_path,
            "--test",
            "checkin",
            "user-1",
            "v2",
            "Venue Two",
        ])
        .assert()
        .success();
}
