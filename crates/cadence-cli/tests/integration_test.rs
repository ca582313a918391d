//! Integration tests comparing CLI output with direct Display implementations
//!
//! This test suite verifies that CLI output uses the same Display traits as
//! the core handlers, so every interface renders schedules identically.

use std::process::Command;

use cadence_core::{
    params::{ListSchedules, SaveSchedule, ScheduleKey},
    Coach, CoachBuilder,
};
use serde_json::json;
use tempfile::TempDir;

/// Helper function to create a test coach with temporary database
async fn create_test_coach() -> (Coach, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("test.db");

    let coach = CoachBuilder::new()
        .with_database_path(Some(db_path))
        .build()
        .await
        .expect("Failed to create coach");

    (coach, temp_dir)
}

/// Run a CLI command and capture its output
fn run_cli_command(db_path: &str, args: &[&str]) -> String {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cadence"));
    cmd.arg("--no-color").arg("--database-file").arg(db_path);

    for arg in args {
        cmd.arg(arg);
    }

    let output = cmd.output().expect("Failed to run CLI command");
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

fn schedule_document(user_id: &str, schedule_id: &str, created_at: &str) -> String {
    let yoga = json!({
        "type": "Yoga", "duration": "60 min", "focus": "Mobility",
        "intensity": "Low", "details": "Flow session", "location": "Home"
    });
    let rest = json!({
        "type": "Rest", "duration": "", "focus": "",
        "intensity": "", "details": "", "location": ""
    });
    let open = json!({ "available": true, "preferred_time": "07:00", "duration": "1 hour" });
    let closed = json!({ "available": false });

    json!({
        "user_id": user_id,
        "schedule_id": schedule_id,
        "macro_plan": "Recovery block",
        "micro_plan": {
            "Monday": rest.clone(), "Tuesday": yoga.clone(), "Wednesday": rest.clone(),
            "Thursday": rest.clone(), "Friday": yoga, "Saturday": rest.clone(),
            "Sunday": rest
        },
        "user_availability": {
            "Monday": closed.clone(), "Tuesday": open.clone(), "Wednesday": closed.clone(),
            "Thursday": closed.clone(), "Friday": open, "Saturday": closed.clone(),
            "Sunday": closed
        },
        "created_at": created_at,
        "status": "draft"
    })
    .to_string()
}

/// Shown schedules must render identically via the CLI and via Display
#[tokio::test]
async fn test_schedule_display_consistency() {
    let (coach, temp_dir) = create_test_coach().await;
    let db_path = temp_dir.path().join("test.db");
    let db_str = db_path.to_str().unwrap();

    coach
        .import_schedule(&SaveSchedule {
            user_id: "u1".to_string(),
            document: schedule_document("u1", "week_20250605_165340", "2025-06-05T16:53:40Z"),
        })
        .await
        .expect("Failed to import schedule");

    let record = coach
        .show_schedule(&ScheduleKey {
            user_id: "u1".to_string(),
            schedule_id: "week_20250605_165340".to_string(),
        })
        .await
        .expect("Failed to show schedule")
        .expect("Schedule should exist");

    let cli_output = run_cli_command(db_str, &["schedule", "show", "u1", "week_20250605_165340"]);
    assert_eq!(cli_output, record.to_string());
}

/// Schedule lists must render the same summaries the handlers produce
#[tokio::test]
async fn test_list_display_consistency() {
    let (coach, temp_dir) = create_test_coach().await;
    let db_path = temp_dir.path().join("test.db");
    let db_str = db_path.to_str().unwrap();

    for (sid, ts) in [
        ("week_20250601_080000", "2025-06-01T08:00:00Z"),
        ("week_20250608_080000", "2025-06-08T08:00:00Z"),
    ] {
        coach
            .import_schedule(&SaveSchedule {
                user_id: "u1".to_string(),
                document: schedule_document("u1", sid, ts),
            })
            .await
            .expect("Failed to import schedule");
    }

    let summaries = coach
        .list_schedules_summary(&ListSchedules {
            user_id: "u1".to_string(),
            limit: None,
        })
        .await
        .expect("Failed to list schedules");

    let cli_output = run_cli_command(db_str, &["schedule", "list", "u1"]);
    assert_eq!(cli_output, format!("# Schedules\n\n{summaries}"));
}
