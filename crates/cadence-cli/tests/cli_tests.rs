use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn cadence_cmd() -> Command {
    let mut cmd = Command::cargo_bin("cadence").expect("Failed to find cadence binary");
    cmd.arg("--no-color");
    cmd
}

/// Builds a well-formed schedule document with two training days.
fn schedule_document(user_id: &str, schedule_id: &str, created_at: &str) -> String {
    let strength = json!({
        "type": "Strength", "duration": "45 min", "focus": "Upper body",
        "intensity": "Moderate", "details": "Bench press, rows", "location": "Gym"
    });
    let rest = json!({
        "type": "Rest", "duration": "", "focus": "",
        "intensity": "", "details": "", "location": ""
    });
    let open = json!({ "available": true, "preferred_time": "18:00", "duration": "1 hour" });
    let closed = json!({ "available": false });

    json!({
        "user_id": user_id,
        "schedule_id": schedule_id,
        "macro_plan": "Base building phase",
        "micro_plan": {
            "Monday": strength.clone(), "Tuesday": rest.clone(), "Wednesday": rest.clone(),
            "Thursday": strength, "Friday": rest.clone(), "Saturday": rest.clone(),
            "Sunday": rest
        },
        "user_availability": {
            "Monday": open.clone(), "Tuesday": closed.clone(), "Wednesday": closed.clone(),
            "Thursday": open, "Friday": closed.clone(), "Saturday": closed.clone(),
            "Sunday": closed
        },
        "created_at": created_at,
        "status": "draft"
    })
    .to_string()
}

/// Writes a schedule document into the test directory and returns its path.
fn write_schedule(dir: &Path, name: &str, document: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, document).expect("Failed to write schedule file");
    path.to_str().unwrap().to_string()
}

#[test]
fn test_cli_import_schedule_success() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let file = write_schedule(
        temp_dir.path(),
        "schedule.json",
        &schedule_document("cf4caba2", "week_20250605_165340", "2025-06-05T16:53:40Z"),
    );

    cadence_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "schedule",
            "import",
            "cf4caba2",
            &file,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Saved schedule 'week_20250605_165340' for user 'cf4caba2'",
        ))
        .stdout(predicate::str::contains("### Monday: Strength (45 min)"));
}

#[test]
fn test_cli_import_rejects_malformed_document() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    // Six-day week: Sunday removed
    let document = schedule_document("u1", "week_20250605_165340", "2025-06-05T16:53:40Z");
    let mut value: serde_json::Value = serde_json::from_str(&document).unwrap();
    value["micro_plan"].as_object_mut().unwrap().remove("Sunday");
    let file = write_schedule(temp_dir.path(), "broken.json", &value.to_string());

    cadence_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "schedule",
            "import",
            "u1",
            &file,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Schema violation"))
        .stderr(predicate::str::contains("Sunday"));
}

#[test]
fn test_cli_list_empty_schedules() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    cadence_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "schedule",
            "list",
            "u1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No schedules found."));
}

#[test]
fn test_cli_list_schedules_text_format() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    let file = write_schedule(
        temp_dir.path(),
        "schedule.json",
        &schedule_document("u1", "week_20250605_165340", "2025-06-05T16:53:40Z"),
    );

    cadence_cmd()
        .args(["--database-file", db_arg, "schedule", "import", "u1", &file])
        .assert()
        .success();

    cadence_cmd()
        .args(["--database-file", db_arg, "schedule", "list", "u1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Schedules"))
        .stdout(predicate::str::contains(
            "## week_20250605_165340 [draft] (2 sessions, 5 rest days)",
        ));
}

#[test]
fn test_cli_show_missing_schedule() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    cadence_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "schedule",
            "show",
            "u1",
            "week_19990101_000000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: Schedule 'week_19990101_000000' not found for user 'u1'",
        ));
}

#[test]
fn test_cli_show_schedule_as_json() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    let document = schedule_document("u1", "week_20250605_165340", "2025-06-05T16:53:40Z");
    let file = write_schedule(temp_dir.path(), "schedule.json", &document);

    cadence_cmd()
        .args(["--database-file", db_arg, "schedule", "import", "u1", &file])
        .assert()
        .success();

    let output = cadence_cmd()
        .args([
            "--database-file",
            db_arg,
            "schedule",
            "show",
            "u1",
            "week_20250605_165340",
            "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    // The exported document is value-equal to the imported one
    let exported: serde_json::Value =
        serde_json::from_slice(&output).expect("stdout should be JSON");
    let imported: serde_json::Value = serde_json::from_str(&document).unwrap();
    assert_eq!(exported, imported);
}

#[test]
fn test_cli_activate_and_active() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    for (name, sid, ts) in [
        ("first.json", "week_20250601_080000", "2025-06-01T08:00:00Z"),
        ("second.json", "week_20250608_080000", "2025-06-08T08:00:00Z"),
    ] {
        let file = write_schedule(temp_dir.path(), name, &schedule_document("u1", sid, ts));
        cadence_cmd()
            .args(["--database-file", db_arg, "schedule", "import", "u1", &file])
            .assert()
            .success();
    }

    cadence_cmd()
        .args([
            "--database-file",
            db_arg,
            "schedule",
            "activate",
            "u1",
            "week_20250601_080000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status set to active"));

    // The older schedule wins over the newer one once activated
    cadence_cmd()
        .args(["--database-file", db_arg, "schedule", "active", "u1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "# Schedule week_20250601_080000 (u1)",
        ))
        .stdout(predicate::str::contains("- Status: active"));
}

#[test]
fn test_cli_delete_requires_confirmation() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    let file = write_schedule(
        temp_dir.path(),
        "schedule.json",
        &schedule_document("u1", "week_20250605_165340", "2025-06-05T16:53:40Z"),
    );

    cadence_cmd()
        .args(["--database-file", db_arg, "schedule", "import", "u1", &file])
        .assert()
        .success();

    cadence_cmd()
        .args([
            "--database-file",
            db_arg,
            "schedule",
            "delete",
            "u1",
            "week_20250605_165340",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("explicit confirmation"));

    cadence_cmd()
        .args([
            "--database-file",
            db_arg,
            "schedule",
            "delete",
            "u1",
            "week_20250605_165340",
            "--confirm",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Deleted schedule 'week_20250605_165340' for user 'u1'",
        ));
}

#[test]
fn test_cli_plan_save_and_active() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    cadence_cmd()
        .args([
            "--database-file",
            db_arg,
            "plan",
            "save",
            "u1",
            "12 week strength block",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved macro plan"));

    cadence_cmd()
        .args(["--database-file", db_arg, "plan", "active", "u1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("12 week strength block"))
        .stdout(predicate::str::contains("- Status: active"));
}

#[test]
fn test_cli_feedback_add_and_list() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    cadence_cmd()
        .args([
            "--database-file",
            db_arg,
            "feedback",
            "add",
            "u1",
            "week_20250605_165340",
            "--day",
            "Monday",
            "--rating",
            "4",
            "--comments",
            "Felt strong",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success:"));

    cadence_cmd()
        .args([
            "--database-file",
            db_arg,
            "feedback",
            "add",
            "u1",
            "week_20250605_165340",
            "--rating",
            "9",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 1 and 5"));

    cadence_cmd()
        .args(["--database-file", db_arg, "feedback", "list", "u1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(Monday)"))
        .stdout(predicate::str::contains("Rating: 4/5"))
        .stdout(predicate::str::contains("Felt strong"));
}

#[test]
fn test_cli_profile_and_stats() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let profile_path = temp_dir.path().join("profile.json");
    std::fs::write(
        &profile_path,
        json!({ "goal": "strength", "experience": "intermediate" }).to_string(),
    )
    .expect("Failed to write profile file");

    cadence_cmd()
        .args([
            "--database-file",
            db_arg,
            "profile",
            "save",
            "u1",
            profile_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved profile for user 'u1'"));

    cadence_cmd()
        .args(["--database-file", db_arg, "profile", "show", "u1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Profile for u1"))
        .stdout(predicate::str::contains("\"goal\": \"strength\""));

    cadence_cmd()
        .args(["--database-file", db_arg, "stats", "u1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Stats for u1"))
        .stdout(predicate::str::contains("- Profile: yes"))
        .stdout(predicate::str::contains("- Schedules: 0"))
        .stdout(predicate::str::contains("- Feedback entries: 0"));
}
