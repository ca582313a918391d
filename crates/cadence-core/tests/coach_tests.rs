mod common;

use cadence_core::params::{ListSchedules, SaveSchedule, ScheduleKey, UserId};

use common::{create_test_coach, schedule_document};

#[tokio::test]
async fn test_imported_document_round_trips_verbatim() {
    let (_temp_dir, coach) = create_test_coach().await;
    let document = schedule_document("cf4caba2", "week_20250605_165340", "2025-06-05T16:53:40Z");

    coach
        .import_schedule(&SaveSchedule {
            user_id: "cf4caba2".to_string(),
            document: document.clone(),
        })
        .await
        .expect("Failed to import schedule");

    let shown = coach
        .show_schedule(&ScheduleKey {
            user_id: "cf4caba2".to_string(),
            schedule_id: "week_20250605_165340".to_string(),
        })
        .await
        .expect("Failed to show schedule")
        .expect("Schedule should exist");

    // Value-equal to the input document: no fields added, dropped, or reordered
    let original: serde_json::Value = serde_json::from_str(&document).unwrap();
    let round_tripped: serde_json::Value =
        serde_json::from_str(&shown.to_json().expect("Failed to serialize")).unwrap();
    assert_eq!(round_tripped, original);

    // Unavailable days still carry no time fields after the round trip
    assert_eq!(
        round_tripped["user_availability"]["Tuesday"],
        serde_json::json!({ "available": false })
    );
}

#[tokio::test]
async fn test_schedule_display_shows_week_layout() {
    let (_temp_dir, coach) = create_test_coach().await;

    coach
        .import_schedule(&SaveSchedule {
            user_id: "cf4caba2".to_string(),
            document: schedule_document(
                "cf4caba2",
                "week_20250605_165340",
                "2025-06-05T16:53:40Z",
            ),
        })
        .await
        .expect("Failed to import schedule");

    let shown = coach
        .show_schedule(&ScheduleKey {
            user_id: "cf4caba2".to_string(),
            schedule_id: "week_20250605_165340".to_string(),
        })
        .await
        .expect("Failed to show schedule")
        .expect("Schedule should exist");

    let output = format!("{shown}");
    assert!(output.contains("# Schedule week_20250605_165340 (cf4caba2)"));
    assert!(output.contains("- Status: draft"));
    assert!(output.contains("### Monday: Strength (45 min)"));
    assert!(output.contains("### Wednesday: Cardio (30 min)"));
    assert!(output.contains("### Tuesday: Rest"));
    assert!(output.contains("- Window: 18:00 (1 hour)"));
    assert!(output.contains("Base building phase"));
}

#[tokio::test]
async fn test_list_summaries_display() {
    let (_temp_dir, coach) = create_test_coach().await;

    let empty = coach
        .list_schedules_summary(&ListSchedules {
            user_id: "cf4caba2".to_string(),
            limit: None,
        })
        .await
        .expect("Failed to list schedules");
    assert_eq!(format!("{empty}"), "No schedules found.\n");

    coach
        .import_schedule(&SaveSchedule {
            user_id: "cf4caba2".to_string(),
            document: schedule_document(
                "cf4caba2",
                "week_20250605_165340",
                "2025-06-05T16:53:40Z",
            ),
        })
        .await
        .expect("Failed to import schedule");

    let summaries = coach
        .list_schedules_summary(&ListSchedules {
            user_id: "cf4caba2".to_string(),
            limit: None,
        })
        .await
        .expect("Failed to list schedules");
    let output = format!("{summaries}");
    assert!(output.contains("## week_20250605_165340 [draft] (3 sessions, 4 rest days)"));
}

#[tokio::test]
async fn test_activation_is_visible_in_summaries() {
    let (_temp_dir, coach) = create_test_coach().await;

    coach
        .import_schedule(&SaveSchedule {
            user_id: "u1".to_string(),
            document: schedule_document("u1", "week_20250601_080000", "2025-06-01T08:00:00Z"),
        })
        .await
        .expect("Failed to import schedule");
    coach
        .import_schedule(&SaveSchedule {
            user_id: "u1".to_string(),
            document: schedule_document("u1", "week_20250608_080000", "2025-06-08T08:00:00Z"),
        })
        .await
        .expect("Failed to import schedule");

    let update = coach
        .activate_schedule(&ScheduleKey {
            user_id: "u1".to_string(),
            schedule_id: "week_20250608_080000".to_string(),
        })
        .await
        .expect("Failed to activate schedule");
    assert!(format!("{update}").contains("Status set to active"));

    let summaries = coach
        .list_schedules_summary(&ListSchedules {
            user_id: "u1".to_string(),
            limit: None,
        })
        .await
        .expect("Failed to list schedules");
    let output = format!("{summaries}");
    assert!(output.contains("## week_20250608_080000 [active]"));
    assert!(output.contains("## week_20250601_080000 [inactive]"));
}

#[tokio::test]
async fn test_stats_display() {
    let (_temp_dir, coach) = create_test_coach().await;

    let stats = coach
        .user_stats(&UserId {
            user_id: "u1".to_string(),
        })
        .await
        .expect("Failed to query stats");
    let output = format!("{stats}");
    assert!(output.contains("# Stats for u1"));
    assert!(output.contains("- Profile: no"));
    assert!(output.contains("- Schedules: 0"));
    assert!(output.contains("- Feedback entries: 0"));
}
