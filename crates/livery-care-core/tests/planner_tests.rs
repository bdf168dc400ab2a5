mod common;

use common::{create_test_planner, sample_payload};
use jiff::civil::date;
use livery_care_core::{
    CarePlanEditor, CarePlanError, EditorProps, EditorState, PhasePatch, PlanStatus, ProgramPatch,
    TaskPatch, TaskType, display::DraftView, error::SUBMIT_FAILED_MESSAGE,
};

fn describe_all_tasks(editor: &mut CarePlanEditor) {
    for p in 0..editor.program().phases.len() {
        for t in 0..editor.program().phases[p].tasks.len() {
            editor
                .update_task(
                    p,
                    t,
                    TaskPatch {
                        description: Some(format!("Task {} of phase {}", t + 1, p + 1)),
                        ..Default::default()
                    },
                )
                .expect("Failed to describe task");
        }
    }
}

#[tokio::test]
async fn test_complete_editor_workflow() {
    let (_temp_dir, planner) = create_test_planner().await;
    let props = EditorProps::new(9, "Juniper").with_admin(true);

    // Build a three phase plan from scratch
    let mut editor = CarePlanEditor::create_starting(props.clone(), date(2024, 4, 1));
    editor.add_phase();
    editor.add_phase();
    editor.update_phase(0, PhasePatch::duration(7)).unwrap();
    editor.add_task(1).unwrap();
    editor
        .update_task(
            1,
            1,
            TaskPatch {
                task_type: Some(TaskType::Medication),
                is_feed_based: Some(true),
                ..Default::default()
            },
        )
        .unwrap();
    editor
        .update_program(ProgramPatch {
            name: Some("Check ligament rehab".to_string()),
            staff_managed: Some(true),
            weekly_price: Some("55".to_string()),
            ..Default::default()
        })
        .unwrap();

    // Submitting with blank task descriptions is refused
    let submitter = planner.submitter(None);
    let err = editor.submit(&submitter).await.unwrap_err();
    assert!(err.is_validation());
    assert_eq!(
        editor.error(),
        Some("Please add a description for every task in \"Phase 1\"")
    );
    assert!(submitter.saved_id().is_none());

    describe_all_tasks(&mut editor);
    assert_eq!(editor.calculate_end_date().unwrap(), date(2024, 5, 5));
    editor.submit(&submitter).await.expect("Failed to submit");
    assert_eq!(editor.state(), EditorState::Closed);

    let id = submitter.saved_id().expect("Plan should be saved");
    let stored = planner.get_care_plan(id).await.unwrap().unwrap();
    let starts: Vec<_> = stored.phases.iter().map(|phase| phase.start_day).collect();
    assert_eq!(starts, [1, 8, 22]);
    assert_eq!(stored.weekly_price, Some(55.0));
    assert_eq!(stored.phases[1].tasks[1].feed_time, Some(livery_care_core::FeedTime::Morning));

    // Reopen, drop the middle phase and save over the original
    let mut editor = CarePlanEditor::edit(props, &stored);
    editor.remove_phase(1).unwrap();
    assert_eq!(editor.program().phases[1].start_day, 8);

    let replace = planner.submitter(Some(id));
    editor.submit(&replace).await.expect("Failed to replace");

    let summaries = planner.list_care_plan_summaries(Some(9)).await.unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].total_phases, 2);
    assert_eq!(summaries[0].end_date, Some(date(2024, 4, 21)));
}

#[tokio::test]
async fn test_failed_submit_keeps_draft_for_retry() {
    let (_temp_dir, planner) = create_test_planner().await;
    let mut editor =
        CarePlanEditor::create_starting(EditorProps::new(9, "Juniper"), date(2024, 4, 1));
    editor
        .update_program(ProgramPatch {
            name: Some("Retry".to_string()),
            ..Default::default()
        })
        .unwrap();
    describe_all_tasks(&mut editor);
    let before = editor.program().clone();

    let err = editor
        .submit(&planner.submitter(Some(404)))
        .await
        .unwrap_err();

    assert!(matches!(err, CarePlanError::SubmissionFailed { .. }));
    assert_eq!(err.to_string(), SUBMIT_FAILED_MESSAGE);
    assert_eq!(editor.program(), &before);
    assert_eq!(editor.state(), EditorState::Editing);
    assert!(DraftView(&editor).to_string().contains(SUBMIT_FAILED_MESSAGE));

    editor
        .submit(&planner.submitter(None))
        .await
        .expect("Retry should succeed");
}

#[tokio::test]
async fn test_status_changes_and_delete() {
    let (_temp_dir, planner) = create_test_planner().await;
    let plan = planner
        .create_care_plan(sample_payload(2, "Hoof abscess", date(2024, 1, 10), &[5, 5]))
        .await
        .unwrap();

    let updated = planner
        .set_status(plan.id, PlanStatus::Completed)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, PlanStatus::Completed);

    assert!(matches!(
        planner.set_status(999, PlanStatus::Completed).await,
        Err(CarePlanError::PlanNotFound { id: 999 })
    ));

    planner.delete_care_plan(plan.id).await.unwrap();
    assert!(planner.list_care_plans(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_sync_rebuilds_on_new_source() {
    let (_temp_dir, planner) = create_test_planner().await;
    let first = planner
        .create_care_plan(sample_payload(2, "First", date(2024, 1, 10), &[5]))
        .await
        .unwrap();
    let second = planner
        .create_care_plan(sample_payload(2, "Second", date(2024, 2, 10), &[3, 4]))
        .await
        .unwrap();

    let props = EditorProps::new(2, "Pip");
    let mut editor = CarePlanEditor::edit(props.clone(), &first);
    editor.add_phase();

    assert!(!editor.sync(props.clone(), Some(&first)));
    assert_eq!(editor.program().phases.len(), 2);

    assert!(editor.sync(props, Some(&second)));
    assert_eq!(editor.source_id(), Some(second.id));
    assert_eq!(editor.program().name, "Second");
    assert_eq!(editor.program().phases[1].start_day, 4);
}
