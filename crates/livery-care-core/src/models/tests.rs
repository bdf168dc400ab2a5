#[cfg(test)]
mod model_tests {
    use jiff::{Timestamp, civil::date};

    use crate::models::{
        CarePhase, CarePlan, CarePlanSummary, CareTask, FeedTime, Feeding, Frequency, PlanStatus,
        TaskType,
    };

    fn create_test_task(sequence: u32) -> CareTask {
        CareTask {
            task_type: TaskType::Walking,
            description: "Walk in hand".to_string(),
            duration_minutes: Some(15),
            frequency: Frequency::TwiceDaily,
            instructions: Some("Flat ground only".to_string()),
            equipment_needed: None,
            is_feed_based: false,
            feed_time: None,
            sequence,
        }
    }

    fn create_test_plan() -> CarePlan {
        CarePlan {
            id: 12,
            horse_id: 7,
            name: "Suspensory rehab".to_string(),
            description: Some("Twelve week return to work".to_string()),
            reason: Some("Suspensory strain".to_string()),
            prescribed_by: Some("Dr. Hale".to_string()),
            prescription_date: Some(date(2024, 2, 28)),
            start_date: date(2024, 3, 1),
            expected_end_date: None,
            notes: None,
            staff_managed: true,
            weekly_price: Some(75.0),
            status: PlanStatus::Active,
            created_at: Timestamp::from_second(1709251200).unwrap(), // 2024-03-01 00:00:00 UTC
            updated_at: Timestamp::from_second(1709251200).unwrap(),
            phases: vec![
                CarePhase {
                    phase_number: 1,
                    name: "Box rest".to_string(),
                    description: None,
                    duration_days: 14,
                    start_day: 1,
                    tasks: vec![create_test_task(1)],
                },
                CarePhase {
                    phase_number: 2,
                    name: "Walking".to_string(),
                    description: Some("Build up slowly".to_string()),
                    duration_days: 21,
                    start_day: 15,
                    tasks: vec![create_test_task(1), create_test_task(2)],
                },
            ],
        }
    }

    #[test]
    fn test_task_type_from_str() {
        assert_eq!("ridden".parse::<TaskType>(), Ok(TaskType::Ridden));
        assert_eq!("MEDICATION".parse::<TaskType>(), Ok(TaskType::Medication));
        assert!("grooming".parse::<TaskType>().is_err());

        for kind in TaskType::ALL {
            assert_eq!(kind.as_str().parse::<TaskType>(), Ok(kind));
        }
    }

    #[test]
    fn test_frequency_from_str_accepts_dashes() {
        assert_eq!("twice-daily".parse::<Frequency>(), Ok(Frequency::TwiceDaily));
        assert_eq!("every_other_day".parse::<Frequency>(), Ok(Frequency::EveryOtherDay));
        assert!("hourly".parse::<Frequency>().is_err());
    }

    #[test]
    fn test_kind_serde_matches_as_str() {
        let json = serde_json::to_string(&Frequency::AsNeeded).unwrap();
        assert_eq!(json, "\"as_needed\"");

        let status: PlanStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(status, PlanStatus::Cancelled);
    }

    #[test]
    fn test_feeding_from_parts() {
        assert_eq!(
            Feeding::from_parts(false, FeedTime::Evening),
            Feeding::NotFeedBased
        );
        assert_eq!(Feeding::from_parts(false, FeedTime::Evening).feed_time(), None);

        let feeding = Feeding::from_parts(true, FeedTime::Both);
        assert!(feeding.is_feed_based());
        assert_eq!(feeding.feed_time(), Some(FeedTime::Both));
    }

    #[test]
    fn test_total_days() {
        let mut plan = create_test_plan();
        assert_eq!(plan.total_days(), 35);

        plan.phases.clear();
        assert_eq!(plan.total_days(), 0);
    }

    #[test]
    fn test_summary_from_plan() {
        let plan = create_test_plan();
        let summary = CarePlanSummary::from(&plan);

        assert_eq!(summary.total_phases, 2);
        assert_eq!(summary.total_tasks, 3);
        assert_eq!(summary.end_date, Some(date(2024, 4, 4)));
        assert!(summary.staff_managed);
    }

    #[test]
    fn test_summary_prefers_expected_end_date() {
        let mut plan = create_test_plan();
        plan.expected_end_date = Some(date(2024, 6, 1));
        assert_eq!(
            CarePlanSummary::from(&plan).end_date,
            Some(date(2024, 6, 1))
        );

        plan.expected_end_date = None;
        plan.phases.clear();
        assert_eq!(CarePlanSummary::from(&plan).end_date, None);
    }

    #[test]
    fn test_plan_display() {
        let output = format!("{}", create_test_plan());

        assert!(output.starts_with("# 12. Suspensory rehab"));
        assert!(output.contains("- Status: active"));
        assert!(output.contains("- Prescribed by: Dr. Hale on 2024-02-28"));
        assert!(output.contains("- Staff managed: 75.00 per week"));
        assert!(output.contains("### Phase 2: Walking (days 15-35)"));
        assert!(output.contains("2. **Walking** (Twice Daily, 15 min): Walk in hand"));
        assert!(output.contains("   - Instructions: Flat ground only"));
    }

    #[test]
    fn test_plan_display_without_phases() {
        let mut plan = create_test_plan();
        plan.phases.clear();
        assert!(format!("{plan}").contains("No phases in this plan."));
    }

    #[test]
    fn test_feed_based_task_display() {
        let task = CareTask {
            task_type: TaskType::Medication,
            description: "Bute sachet".to_string(),
            duration_minutes: None,
            frequency: Frequency::Daily,
            instructions: None,
            equipment_needed: None,
            is_feed_based: true,
            feed_time: Some(FeedTime::Evening),
            sequence: 1,
        };

        assert_eq!(
            format!("{task}"),
            "1. **Medication** (Daily, with evening feed): Bute sachet\n"
        );
    }

    #[test]
    fn test_summary_display() {
        let summary = CarePlanSummary::from(&create_test_plan());
        let output = format!("{summary}");

        assert!(output.contains("## Suspensory rehab (ID: 12, active)"));
        assert!(output.contains("- **Dates**: 2024-03-01 to 2024-04-04"));
        assert!(output.contains("- **Phases**: 2 (3 tasks)"));
    }
}
