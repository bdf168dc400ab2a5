use jiff::civil::Date;
use livery_care_core::{
    CarePlanPayload, CarePlanner, CarePlannerBuilder, FeedTime, Frequency, PhasePayload,
    TaskPayload, TaskType,
};
use tempfile::TempDir;

/// Helper function to create a test planner
#[allow(dead_code)]
pub async fn create_test_planner() -> (TempDir, CarePlanner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = CarePlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

/// Payload with phases of the given durations, chained from day 1
#[allow(dead_code)]
pub fn sample_payload(
    horse_id: u64,
    name: &str,
    start_date: Date,
    durations: &[u32],
) -> CarePlanPayload {
    let mut start_day = 1;
    let phases = durations
        .iter()
        .enumerate()
        .map(|(i, &duration_days)| {
            let phase = PhasePayload {
                phase_number: i as u32 + 1,
                name: format!("Phase {}", i + 1),
                description: None,
                duration_days,
                start_day,
                tasks: vec![
                    TaskPayload {
                        task_type: TaskType::Walking,
                        description: "Walk in hand".to_string(),
                        duration_minutes: Some(10),
                        frequency: Frequency::Daily,
                        instructions: None,
                        equipment_needed: None,
                        is_feed_based: false,
                        feed_time: None,
                        sequence: 1,
                    },
                    TaskPayload {
                        task_type: TaskType::Medication,
                        description: "Bute".to_string(),
                        duration_minutes: None,
                        frequency: Frequency::TwiceDaily,
                        instructions: Some("Half sachet".to_string()),
                        equipment_needed: None,
                        is_feed_based: true,
                        feed_time: Some(FeedTime::Both),
                        sequence: 2,
                    },
                ],
            };
            start_day += duration_days;
            phase
        })
        .collect();

    CarePlanPayload {
        horse_id,
        name: name.to_string(),
        description: None,
        reason: Some("Tendon strain".to_string()),
        prescribed_by: None,
        prescription_date: None,
        start_date,
        expected_end_date: None,
        notes: None,
        staff_managed: false,
        weekly_price: None,
        phases,
    }
}
