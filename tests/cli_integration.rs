use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time")
        .as_nanos();
    let dir =
        std::env::temp_dir().join(format!("steptrek-{prefix}-{}-{nanos}", std::process::id()));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn run_steptrek(args: &[&str], home: &Path) -> (bool, Vec<u8>, Vec<u8>) {
    let bin = std::env::var("CARGO_BIN_EXE_steptrek").unwrap_or_else(|_| {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("target");
        path.push("debug");
        if cfg!(windows) {
            path.push("steptrek.exe");
        } else {
            path.push("steptrek");
        }
        path.to_string_lossy().into_owned()
    });
    let mut cmd = Command::new(bin);
    cmd.args(args);
    // Keep any real user config out of the test run.
    cmd.env("HOME", home);
    cmd.env("XDG_CONFIG_HOME", home.join(".config"));
    cmd.env("XDG_DATA_HOME", home.join(".local/share"));
    let output = cmd.output().expect("run steptrek");
    (output.status.success(), output.stdout, output.stderr)
}

fn db_arg(root: &Path) -> String {
    root.join("steps.db").to_string_lossy().into_owned()
}

#[test]
fn record_then_stats_json_reflects_entry() {
    let root = unique_temp_dir("record-stats");
    let db = db_arg(&root);

    let (ok, _, stderr) = run_steptrek(
        &["record", "8000", "2025-03-01", "--db", &db, "--user", "Alice"],
        &root,
    );
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));

    let (ok, stdout, stderr) =
        run_steptrek(&["stats", "--db", &db, "--user", "Alice", "-j"], &root);
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));

    let json: Value = serde_json::from_slice(&stdout).expect("json");
    assert_eq!(json["username"].as_str(), Some("Alice"));
    assert_eq!(json["total_steps"].as_i64(), Some(8000));
    assert_eq!(json["days_logged"].as_i64(), Some(1));
    assert_eq!(json["best_day"].as_i64(), Some(8000));
    assert_eq!(json["current_streak"].as_i64(), Some(1));
    assert_eq!(json["first_log"].as_str(), Some("2025-03-01"));
    assert_eq!(json["last_log"].as_str(), Some("2025-03-01"));

    let _ = fs::remove_dir_all(root);
}

#[test]
fn recording_twice_for_one_day_is_additive() {
    let root = unique_temp_dir("double-record");
    let db = db_arg(&root);

    for _ in 0..2 {
        let (ok, _, stderr) = run_steptrek(
            &["record", "5000", "2025-03-01", "--db", &db, "--user", "Alice"],
            &root,
        );
        assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));
    }

    let (ok, stdout, _) = run_steptrek(&["stats", "--db", &db, "--user", "Alice", "-j"], &root);
    assert!(ok);
    let json: Value = serde_json::from_slice(&stdout).expect("json");
    // Two rows, not a merge: totals double, days_logged counts rows,
    // the streak sees one distinct day.
    assert_eq!(json["total_steps"].as_i64(), Some(10000));
    assert_eq!(json["days_logged"].as_i64(), Some(2));
    assert_eq!(json["avg_steps"].as_f64(), Some(5000.0));
    assert_eq!(json["current_streak"].as_i64(), Some(1));

    let _ = fs::remove_dir_all(root);
}

#[test]
fn streak_counts_run_ending_at_latest_date() {
    let root = unique_temp_dir("streak");
    let db = db_arg(&root);

    // Gap after the first date; the run ending at 2025-03-10 is 4 days.
    for date in ["2025-03-05", "2025-03-07", "2025-03-08", "2025-03-09", "2025-03-10"] {
        let (ok, _, stderr) = run_steptrek(
            &["record", "6000", date, "--db", &db, "--user", "Alice"],
            &root,
        );
        assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));
    }

    let (ok, stdout, _) = run_steptrek(&["stats", "--db", &db, "--user", "Alice", "-j"], &root);
    assert!(ok);
    let json: Value = serde_json::from_slice(&stdout).expect("json");
    assert_eq!(json["current_streak"].as_i64(), Some(4));
    assert_eq!(json["days_logged"].as_i64(), Some(5));

    let _ = fs::remove_dir_all(root);
}

#[test]
fn leaderboard_json_orders_by_total_desc() {
    let root = unique_temp_dir("leaderboard");
    let db = db_arg(&root);

    for (user, steps) in [("A", "15000"), ("B", "30000"), ("C", "5000")] {
        let (ok, _, stderr) = run_steptrek(
            &["record", steps, "2025-03-01", "--db", &db, "--user", user],
            &root,
        );
        assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));
    }

    let (ok, stdout, _) = run_steptrek(&["leaderboard", "-n", "2", "--db", &db, "-j"], &root);
    assert!(ok);
    let json: Value = serde_json::from_slice(&stdout).expect("json");
    let arr = json.as_array().expect("array output");
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["username"].as_str(), Some("B"));
    assert_eq!(arr[0]["total_steps"].as_i64(), Some(30000));
    assert_eq!(arr[0]["rank"].as_i64(), Some(1));
    assert_eq!(arr[1]["username"].as_str(), Some("A"));
    assert_eq!(arr[1]["total_steps"].as_i64(), Some(15000));

    let _ = fs::remove_dir_all(root);
}

#[test]
fn stats_without_data_is_a_friendly_message() {
    let root = unique_temp_dir("no-data");
    let db = db_arg(&root);

    let (ok, stdout, _) = run_steptrek(&["stats", "--db", &db, "--user", "Alice"], &root);
    assert!(ok);
    let text = String::from_utf8_lossy(&stdout);
    assert!(text.contains("No step data found for you yet, Alice"));

    let _ = fs::remove_dir_all(root);
}

#[test]
fn empty_leaderboard_is_a_friendly_message() {
    let root = unique_temp_dir("empty-board");
    let db = db_arg(&root);

    let (ok, stdout, _) = run_steptrek(&["leaderboard", "--db", &db], &root);
    assert!(ok);
    let text = String::from_utf8_lossy(&stdout);
    assert!(text.contains("No step data has been logged yet"));

    let _ = fs::remove_dir_all(root);
}

#[test]
fn record_rejects_malformed_date() {
    let root = unique_temp_dir("bad-date");
    let db = db_arg(&root);

    let (ok, _, stderr) = run_steptrek(
        &["record", "8000", "03/01/2025", "--db", &db, "--user", "Alice"],
        &root,
    );
    assert!(!ok);
    assert!(String::from_utf8_lossy(&stderr).contains("Invalid date"));

    let _ = fs::remove_dir_all(root);
}

#[test]
fn chat_record_replies_and_persists() {
    let root = unique_temp_dir("chat-record");
    let db = db_arg(&root);

    let (ok, stdout, stderr) = run_steptrek(
        &[
            "chat",
            "@steptrek 12000 steps 2025-03-01",
            "--db",
            &db,
            "--user",
            "Alice",
        ],
        &root,
    );
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));
    let text = String::from_utf8_lossy(&stdout);
    assert!(text.contains("Thanks, Alice! I've logged 12,000 steps for 2025-03-01."));

    let (ok, stdout, _) = run_steptrek(&["stats", "--db", &db, "--user", "Alice", "-j"], &root);
    assert!(ok);
    let json: Value = serde_json::from_slice(&stdout).expect("json");
    assert_eq!(json["total_steps"].as_i64(), Some(12000));

    let _ = fs::remove_dir_all(root);
}

#[test]
fn chat_ignores_unrelated_text() {
    let root = unique_temp_dir("chat-silent");
    let db = db_arg(&root);

    let (ok, stdout, _) = run_steptrek(&["chat", "lunch anyone?", "--db", &db], &root);
    assert!(ok);
    assert!(stdout.is_empty());

    let _ = fs::remove_dir_all(root);
}

#[test]
fn chat_bad_date_gets_a_correction_not_a_failure() {
    let root = unique_temp_dir("chat-bad-date");
    let db = db_arg(&root);

    let (ok, stdout, _) = run_steptrek(
        &["chat", "@steptrek 8000 steps 2025-99-99", "--db", &db],
        &root,
    );
    assert!(ok);
    let text = String::from_utf8_lossy(&stdout);
    assert!(text.contains("couldn't understand that date"));

    let _ = fs::remove_dir_all(root);
}

#[test]
fn chat_mention_shows_help() {
    let root = unique_temp_dir("chat-help");
    let db = db_arg(&root);

    let (ok, stdout, _) = run_steptrek(
        &["chat", "@steptrek what do you do?", "--db", &db, "--no-color"],
        &root,
    );
    assert!(ok);
    let text = String::from_utf8_lossy(&stdout);
    assert!(text.contains("@steptrek stats"));
    assert!(text.contains("@steptrek leaderboard"));

    let _ = fs::remove_dir_all(root);
}

#[test]
fn leaderboard_table_shows_medals() {
    let root = unique_temp_dir("medals");
    let db = db_arg(&root);

    for (user, steps) in [("A", "100"), ("B", "200"), ("C", "300"), ("D", "400")] {
        let (ok, _, _) = run_steptrek(
            &["record", steps, "2025-03-01", "--db", &db, "--user", user],
            &root,
        );
        assert!(ok);
    }

    let (ok, stdout, _) = run_steptrek(&["leaderboard", "--db", &db, "--no-color"], &root);
    assert!(ok);
    let text = String::from_utf8_lossy(&stdout);
    assert!(text.contains("🥇"));
    assert!(text.contains("🥈"));
    assert!(text.contains("🥉"));
    assert!(text.contains("4."));

    let _ = fs::remove_dir_all(root);
}
