//! Basic CLI E2E tests.
//!
//! Tests run the built binary against a throwaway data directory.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

fn cli(data_dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fitos-cli"));
    cmd.env("FITOS_DATA_DIR", data_dir)
        .env_remove("GEMINI_API_KEY")
        .env_remove("FITOS_LOG");
    cmd
}

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(data_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = cli(data_dir)
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn json(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout).expect("stdout is not JSON")
}

fn onboard(data_dir: &Path) {
    let (_, stderr, code) = run_cli(
        data_dir,
        &["onboard", "--name", "Asha", "--location", "village", "--goal", "Get fit"],
    );
    assert_eq!(code, 0, "onboard failed: {stderr}");
}

#[test]
fn test_help() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["--help"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("workout"));
}

#[test]
fn test_profile_requires_onboarding() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["profile", "show"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_onboard_and_show_profile() {
    let dir = tempfile::tempdir().unwrap();
    onboard(dir.path());

    let (stdout, _, code) = run_cli(dir.path(), &["profile", "show"]);
    assert_eq!(code, 0);
    let profile = json(&stdout);
    assert_eq!(profile["name"], "Asha");
    assert_eq!(profile["location_type"], "Village");
    assert_eq!(profile["level"], 1);
    assert_eq!(profile["xp"], 0);

    let (stdout, _, code) = run_cli(dir.path(), &["profile", "progress"]);
    assert_eq!(code, 0);
    assert_eq!(json(&stdout)["next_threshold"], 100);
}

#[test]
fn test_onboard_rejects_blank_name() {
    let dir = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(dir.path(), &["onboard", "--name", "   "]);
    assert_eq!(code, 1);
}

#[test]
fn test_stats_add_updates_score() {
    let dir = tempfile::tempdir().unwrap();

    let (stdout, _, code) = run_cli(dir.path(), &["stats", "today"]);
    assert_eq!(code, 0);
    assert_eq!(json(&stdout)["score"], 50);

    let (stdout, _, code) = run_cli(dir.path(), &["stats", "add", "workouts", "1"]);
    assert_eq!(code, 0);
    assert_eq!(json(&stdout)["score"], 65);

    let (stdout, _, code) = run_cli(dir.path(), &["stats", "add", "workouts", "-5"]);
    assert_eq!(code, 0);
    let stats = json(&stdout);
    assert_eq!(stats["workouts_completed"], 0);
    assert_eq!(stats["score"], 50);

    let (stdout, _, code) = run_cli(dir.path(), &["stats", "week"]);
    assert_eq!(code, 0);
    assert_eq!(json(&stdout).as_array().unwrap().len(), 1);
}

#[test]
fn test_stats_water_uses_configured_step() {
    let dir = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(dir.path(), &["config", "set", "tracking.water_step_oz", "16"]);
    assert_eq!(code, 0);

    let (stdout, _, code) = run_cli(dir.path(), &["stats", "water"]);
    assert_eq!(code, 0);
    assert_eq!(json(&stdout)["water_intake_oz"], 16);
}

#[test]
fn test_stats_unknown_metric() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["stats", "add", "pushups", "3"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown metric"));
}

#[test]
fn test_stats_rejects_infinite_delta() {
    let dir = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(dir.path(), &["stats", "add", "steps", "5000"]);
    assert_eq!(code, 0);

    let (_, stderr, code) = run_cli(dir.path(), &["stats", "add", "sleep", "inf"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("finite"));

    let (stdout, _, code) = run_cli(dir.path(), &["stats", "today"]);
    assert_eq!(code, 0);
    assert_eq!(json(&stdout)["steps"], 5000);
}

#[test]
fn test_plan_toggle() {
    let dir = tempfile::tempdir().unwrap();

    let (stdout, _, code) = run_cli(dir.path(), &["plan", "show"]);
    assert_eq!(code, 0);
    let plan = json(&stdout);
    assert_eq!(plan.as_array().unwrap().len(), 5);

    let (stdout, _, code) = run_cli(dir.path(), &["plan", "toggle", "dp2"]);
    assert_eq!(code, 0);
    let plan = json(&stdout);
    let item = plan
        .as_array()
        .unwrap()
        .iter()
        .find(|i| i["id"] == "dp2")
        .unwrap();
    assert_eq!(item["completed"], true);
}

#[test]
fn test_workout_list_marks_locked_routines() {
    let dir = tempfile::tempdir().unwrap();
    onboard(dir.path());

    let (stdout, _, code) = run_cli(dir.path(), &["workout", "list"]);
    assert_eq!(code, 0);
    let routines = json(&stdout);
    let routines = routines.as_array().unwrap();
    assert_eq!(routines.len(), 3);
    assert!(routines.iter().any(|r| r["unlocked"] == true));
}

#[test]
fn test_workout_unknown_routine() {
    let dir = tempfile::tempdir().unwrap();
    onboard(dir.path());
    let (_, stderr, code) = run_cli(dir.path(), &["workout", "show", "w99"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Unknown routine id: w99"));
}

#[test]
fn test_workout_session_completes_by_skipping() {
    let dir = tempfile::tempdir().unwrap();
    onboard(dir.path());

    let (stdout, _, _) = run_cli(dir.path(), &["workout", "show", "w1"]);
    let routine = json(&stdout);
    let exercise_count = routine["exercises"].as_array().unwrap().len();
    let reward = routine["xp_reward"].as_u64().unwrap();

    let mut child = cli(dir.path())
        .args(["workout", "start", "w1"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn CLI");
    {
        let stdin = child.stdin.as_mut().unwrap();
        for _ in 0..exercise_count {
            writeln!(stdin, "s").unwrap();
        }
    }
    let output = child.wait_with_output().unwrap();
    assert_eq!(output.status.code(), Some(0));

    let events: Vec<serde_json::Value> = String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(events.first().unwrap()["type"], "SessionStarted");
    assert!(events.iter().any(|e| e["type"] == "SessionCompleted"));
    assert_eq!(events.last().unwrap()["type"], "SessionClosed");

    let (stdout, _, _) = run_cli(dir.path(), &["profile", "show"]);
    assert_eq!(json(&stdout)["xp"].as_u64().unwrap(), reward);
    let (stdout, _, _) = run_cli(dir.path(), &["stats", "today"]);
    assert_eq!(json(&stdout)["workouts_completed"], 1);
}

#[test]
fn test_meals_filter() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["meals", "--kind", "cheat-swap"]);
    assert_eq!(code, 0);
    let meals = json(&stdout);
    assert_eq!(meals.as_array().unwrap().len(), 1);
    assert_eq!(meals[0]["id"], "m4");
}

#[test]
fn test_media_set_and_get() {
    let dir = tempfile::tempdir().unwrap();

    let (_, _, code) = run_cli(dir.path(), &["media", "get", "e1"]);
    assert_eq!(code, 1);

    let (_, stderr, code) = run_cli(dir.path(), &["media", "set", "e1", "https://cdn.example/e1.mp4"]);
    assert_eq!(code, 0, "media set failed: {stderr}");
    let (stdout, _, code) = run_cli(dir.path(), &["media", "get", "e1"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "https://cdn.example/e1.mp4");

    let (_, _, code) = run_cli(dir.path(), &["media", "set", "r1", "https://cdn.example/r1.mp4"]);
    assert_eq!(code, 1);

    let (_, stderr, code) = run_cli(dir.path(), &["media", "set", "x9", "https://cdn.example/x9.mp4"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Unknown exercise id: x9"));
}

#[test]
fn test_config_roundtrip() {
    let dir = tempfile::tempdir().unwrap();

    let (stdout, _, code) = run_cli(dir.path(), &["config", "get", "insight.timeout_secs"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "30");

    let (_, _, code) = run_cli(dir.path(), &["config", "set", "insight.timeout_secs", "10"]);
    assert_eq!(code, 0);
    let (stdout, _, _) = run_cli(dir.path(), &["config", "get", "insight.timeout_secs"]);
    assert_eq!(stdout.trim(), "10");

    let (_, _, code) = run_cli(dir.path(), &["config", "get", "nope"]);
    assert_eq!(code, 1);

    let (_, _, code) = run_cli(dir.path(), &["config", "reset"]);
    assert_eq!(code, 0);
    let (stdout, _, _) = run_cli(dir.path(), &["config", "get", "insight.timeout_secs"]);
    assert_eq!(stdout.trim(), "30");
}

#[test]
fn test_completions() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["completions", "bash"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("fitos-cli"));
}
