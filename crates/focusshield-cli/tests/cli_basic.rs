//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against a throwaway data
//! directory and verify outputs. Each test gets its own directory so
//! they can run in parallel without sharing a record.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Run a CLI command against the given data directory.
fn run_cli(data_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "focusshield-cli", "--"])
        .args(args)
        .env("FOCUSSHIELD_DATA_DIR", data_dir)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn parse_json(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout).expect("stdout should be JSON")
}

#[test]
fn test_status_defaults() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["session", "status"]);
    assert_eq!(code, 0, "session status failed");

    let status = parse_json(&stdout);
    assert_eq!(status["clocked_in"], false);
    assert_eq!(status["running"], false);
    assert_eq!(status["phase"], "focus");
    assert_eq!(status["remaining_secs"], 1500);
    assert_eq!(status["remaining_display"], "25:00");
    assert_eq!(status["focus_minutes"], 25);
    assert_eq!(status["break_minutes"], 5);
    assert_eq!(status["checklist_total"], 4);
}

#[test]
fn test_clock_in_emits_event_and_persists() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["session", "clock-in"]);
    assert_eq!(code, 0, "clock-in failed");
    assert!(stdout.contains("\"type\": \"ClockedIn\""));

    let (stdout, _, code) = run_cli(dir.path(), &["session", "status"]);
    assert_eq!(code, 0);
    let status = parse_json(&stdout);
    assert_eq!(status["clocked_in"], true);
    assert_eq!(status["reminders_active"], true);
}

#[test]
fn test_toggle_clocks_in_and_starts() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["timer", "toggle"]);
    assert_eq!(code, 0, "timer toggle failed");
    assert!(stdout.contains("\"type\": \"ClockedIn\""));
    assert!(stdout.contains("\"type\": \"TimerStarted\""));

    let (stdout, _, _) = run_cli(dir.path(), &["session", "status"]);
    let status = parse_json(&stdout);
    assert_eq!(status["clocked_in"], true);
    assert_eq!(status["running"], true);
}

#[test]
fn test_clock_out_resets_the_countdown() {
    let dir = TempDir::new().unwrap();
    let _ = run_cli(dir.path(), &["timer", "toggle"]);
    let (stdout, _, code) = run_cli(dir.path(), &["session", "clock-out"]);
    assert_eq!(code, 0, "clock-out failed");
    assert!(stdout.contains("\"type\": \"ClockedOut\""));

    let (stdout, _, _) = run_cli(dir.path(), &["session", "status"]);
    let status = parse_json(&stdout);
    assert_eq!(status["clocked_in"], false);
    assert_eq!(status["running"], false);
    assert_eq!(status["remaining_secs"], 1500);
}

#[test]
fn test_timer_set_reshapes_phase_lengths() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(
        dir.path(),
        &["timer", "set", "--focus", "50", "--break", "10"],
    );
    assert_eq!(code, 0, "timer set failed");
    let status = parse_json(&stdout);
    assert_eq!(status["focus_minutes"], 50);
    assert_eq!(status["break_minutes"], 10);
    // current phase is focus, so the countdown reloads too
    assert_eq!(status["remaining_secs"], 3000);
}

#[test]
fn test_nudge_window_bounds_the_delay() {
    let dir = TempDir::new().unwrap();
    let (_, _, code) = run_cli(dir.path(), &["nudge", "set", "--min", "5", "--max", "9"]);
    assert_eq!(code, 0, "nudge set failed");

    // a fresh invocation re-arms from the persisted window
    let (stdout, _, _) = run_cli(dir.path(), &["session", "status"]);
    let status = parse_json(&stdout);
    let due = status["nudge_due_in_secs"].as_u64().unwrap();
    assert!((300..=540).contains(&due), "due in {due}s");
}

#[test]
fn test_affirm_add_and_list() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["affirm", "list"]);
    assert_eq!(code, 0, "affirm list failed");
    assert_eq!(stdout.lines().count(), 5);

    let (_, _, code) = run_cli(dir.path(), &["affirm", "add", "Ship the next brick."]);
    assert_eq!(code, 0, "affirm add failed");

    let (stdout, _, _) = run_cli(dir.path(), &["affirm", "list"]);
    assert_eq!(stdout.lines().count(), 6);
    assert!(stdout.contains("5: Ship the next brick."));
}

#[test]
fn test_affirm_remove_unknown_index_fails() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["affirm", "remove", "99"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("no affirmation at index 99"));
}

#[test]
fn test_affirm_test_fires_with_fallback() {
    let dir = TempDir::new().unwrap();
    // drain the pool so the stock line kicks in
    for _ in 0..5 {
        let (_, _, code) = run_cli(dir.path(), &["affirm", "remove", "0"]);
        assert_eq!(code, 0);
    }
    let (stdout, _, code) = run_cli(dir.path(), &["affirm", "test"]);
    assert_eq!(code, 0, "affirm test failed");
    assert!(stdout.contains("\"type\": \"AffirmationFired\""));
    assert!(stdout.contains("You got this!"));
}

#[test]
fn test_learning_list_carries_default_rotation() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["learning", "list"]);
    assert_eq!(code, 0, "learning list failed");

    let topics = parse_json(&stdout);
    let topics = topics.as_array().unwrap();
    assert_eq!(topics.len(), 5);
    assert_eq!(topics[0]["title"], "Git & GitHub Basics");
    assert_eq!(topics[3]["minutes"], 15);
}

#[test]
fn test_learning_add_and_remove() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(
        dir.path(),
        &[
            "learning",
            "add",
            "Rust Ownership",
            "--minutes",
            "2",
            "--link",
            "https://doc.rust-lang.org/book/",
        ],
    );
    assert_eq!(code, 0, "learning add failed");
    let id = stdout
        .lines()
        .next()
        .and_then(|line| line.strip_prefix("Added: "))
        .expect("add prints the new id")
        .to_string();
    // two-minute request floors to five
    assert!(stdout.contains("\"minutes\": 5"));

    let (stdout, _, _) = run_cli(dir.path(), &["learning", "list"]);
    assert!(stdout.contains("Rust Ownership"));

    let (_, _, code) = run_cli(dir.path(), &["learning", "remove", &id]);
    assert_eq!(code, 0, "learning remove failed");

    let (stdout, _, _) = run_cli(dir.path(), &["learning", "list"]);
    assert!(!stdout.contains("Rust Ownership"));
}

#[test]
fn test_learning_test_shows_current_topic() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["learning", "test"]);
    assert_eq!(code, 0, "learning test failed");
    assert!(stdout.contains("\"type\": \"LearningFired\""));
    assert!(stdout.contains("Git & GitHub Basics"));
    assert!(stdout.contains("\"manual\": true"));
}

#[test]
fn test_checklist_toggle_flips_the_mark() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["checklist", "toggle", "ONE main goal"]);
    assert_eq!(code, 0, "checklist toggle failed");
    assert_eq!(stdout.trim(), "checked");

    let (stdout, _, _) = run_cli(dir.path(), &["checklist", "show"]);
    assert!(stdout.contains("[x] ONE main goal"));
    assert!(stdout.contains("[ ] ONE active task"));
    assert!(stdout.contains("(1/4 done)"));

    let (stdout, _, _) = run_cli(dir.path(), &["checklist", "toggle", "ONE main goal"]);
    assert_eq!(stdout.trim(), "unchecked");
}

#[test]
fn test_checklist_add_appends() {
    let dir = TempDir::new().unwrap();
    let (_, _, code) = run_cli(dir.path(), &["checklist", "add", "Water the plants"]);
    assert_eq!(code, 0, "checklist add failed");

    let (stdout, _, _) = run_cli(dir.path(), &["checklist", "show"]);
    assert!(stdout.contains("[ ] Water the plants"));
    assert!(stdout.contains("(0/5 done)"));
}

#[test]
fn test_checklist_remove_drops_the_item() {
    let dir = TempDir::new().unwrap();
    let (_, _, code) = run_cli(dir.path(), &["checklist", "remove", "ONE active task"]);
    assert_eq!(code, 0, "checklist remove failed");

    let (stdout, _, _) = run_cli(dir.path(), &["checklist", "show"]);
    assert!(!stdout.contains("ONE active task"));
    assert!(stdout.contains("(0/3 done)"));

    let (_, stderr, code) = run_cli(dir.path(), &["checklist", "remove", "ONE active task"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("no checklist item"));
}

#[test]
fn test_tooling_add_toggle_remove() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["tooling", "add", "Terminal V2"]);
    assert_eq!(code, 0, "tooling add failed");
    let id = stdout
        .lines()
        .next()
        .and_then(|line| line.strip_prefix("Added: "))
        .expect("add prints the new id")
        .to_string();

    let (stdout, _, code) = run_cli(dir.path(), &["tooling", "toggle", &id]);
    assert_eq!(code, 0, "tooling toggle failed");
    assert_eq!(stdout.trim(), "done");

    let (_, _, code) = run_cli(dir.path(), &["tooling", "remove", &id]);
    assert_eq!(code, 0, "tooling remove failed");

    let (stdout, _, _) = run_cli(dir.path(), &["tooling", "list"]);
    assert!(!stdout.contains("Terminal V2"));
}

#[test]
fn test_tooling_rejects_a_malformed_id() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["tooling", "toggle", "not-a-uuid"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_deploy_steps_lists_defaults() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["deploy", "steps"]);
    assert_eq!(code, 0, "deploy steps failed");

    let steps = parse_json(&stdout);
    let steps = steps.as_array().unwrap();
    assert_eq!(steps.len(), 5);
    assert_eq!(steps[0]["label"], "Push repo to GitHub");
    assert_eq!(steps[0]["done"], false);
}

#[test]
fn test_deploy_commands_renders_all_providers() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["deploy", "commands"]);
    assert_eq!(code, 0, "deploy commands failed");
    assert!(stdout.contains("npm i -g vercel"));
    assert!(stdout.contains("docker compose up --build"));
    assert!(stdout.contains("gcloud run deploy"));
}

#[test]
fn test_cloud_form_flows_into_rendered_commands() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(
        dir.path(),
        &["cloud", "set", "--project", "demo", "--bucket", "bricks"],
    );
    assert_eq!(code, 0, "cloud set failed");
    let form = parse_json(&stdout);
    assert_eq!(form["project"], "demo");

    let (stdout, _, _) = run_cli(dir.path(), &["deploy", "commands", "--target", "gcloud"]);
    assert!(stdout.contains("gcloud config set project demo"));
    assert!(stdout.contains("gsutil mb -l us-central1 gs://bricks"));
    assert!(stdout.contains("us-docker.pkg.dev/demo/focusshield/core-api"));
}

#[test]
fn test_prefs_sound_off_persists() {
    let dir = TempDir::new().unwrap();
    let (_, _, code) = run_cli(dir.path(), &["prefs", "sound", "off"]);
    assert_eq!(code, 0, "prefs sound failed");

    let (stdout, _, _) = run_cli(dir.path(), &["prefs", "show"]);
    let prefs = parse_json(&stdout);
    assert_eq!(prefs["sound"], false);
    assert_eq!(prefs["pastel"], true);
}

#[test]
fn test_nudge_test_opens_overlay_and_dismiss_closes_it() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["nudge", "test"]);
    assert_eq!(code, 0, "nudge test failed");
    assert!(stdout.contains("\"type\": \"NudgeFired\""));
    assert!(stdout.contains("\"manual\": true"));

    let (stdout, _, _) = run_cli(dir.path(), &["session", "status"]);
    let status = parse_json(&stdout);
    assert_eq!(status["overlays"]["nudge_open"], true);

    let (_, _, code) = run_cli(dir.path(), &["overlay", "dismiss", "nudge"]);
    assert_eq!(code, 0, "overlay dismiss failed");

    let (stdout, _, _) = run_cli(dir.path(), &["session", "status"]);
    let status = parse_json(&stdout);
    assert_eq!(status["overlays"]["nudge_open"], false);
}

#[test]
fn test_overlay_dismiss_rejects_unknown_names() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["overlay", "dismiss", "sidebar"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown overlay: sidebar"));
}

#[test]
fn test_overlay_show_checklist_then_dismiss_all() {
    let dir = TempDir::new().unwrap();
    let _ = run_cli(dir.path(), &["overlay", "show-checklist"]);
    let _ = run_cli(dir.path(), &["nudge", "test"]);

    let (stdout, _, _) = run_cli(dir.path(), &["session", "status"]);
    let status = parse_json(&stdout);
    assert_eq!(status["overlays"]["checklist_open"], true);
    assert_eq!(status["overlays"]["nudge_open"], true);

    let (_, _, code) = run_cli(dir.path(), &["overlay", "dismiss-all"]);
    assert_eq!(code, 0, "overlay dismiss-all failed");

    let (stdout, _, _) = run_cli(dir.path(), &["session", "status"]);
    let status = parse_json(&stdout);
    assert_eq!(status["overlays"]["checklist_open"], false);
    assert_eq!(status["overlays"]["nudge_open"], false);
}
