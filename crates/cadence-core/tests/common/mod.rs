use cadence_core::{Coach, CoachBuilder};
use serde_json::json;
use tempfile::TempDir;

/// Helper function to create a test coach
pub async fn create_test_coach() -> (TempDir, Coach) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let coach = CoachBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create coach");
    (temp_dir, coach)
}

/// Builds a well-formed schedule document with three training days
/// (Monday and Friday strength, Wednesday cardio).
pub fn schedule_document(user_id: &str, schedule_id: &str, created_at: &str) -> String {
    let strength = json!({
        "type": "Strength", "duration": "45 min", "focus": "Upper body",
        "intensity": "Moderate", "details": "Bench press, rows", "location": "Gym"
    });
    let cardio = json!({
        "type": "Cardio", "duration": "30 min", "focus": "Endurance",
        "intensity": "High", "details": "Intervals on the track", "location": "Outdoor"
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
            "Monday": strength.clone(), "Tuesday": rest.clone(), "Wednesday": cardio,
            "Thursday": rest.clone(), "Friday": strength, "Saturday": rest.clone(),
            "Sunday": rest
        },
        "user_availability": {
            "Monday": open.clone(), "Tuesday": closed.clone(), "Wednesday": open.clone(),
            "Thursday": closed.clone(), "Friday": open, "Saturday": closed.clone(),
            "Sunday": closed
        },
        "created_at": created_at,
        "status": "draft"
    })
    .to_string()
}
