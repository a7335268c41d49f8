//! End-to-end quiz runs against the bundled content

use std::sync::Arc;

use pettype_core::{
    AnswerOutcome, Content, FixedRandom, JsonlOutcomeStore, MemoryAnalytics, MemoryOutcomeStore,
    OutcomeStore, Screen, ScoreBoard, SessionController, Telemetry, TracingAnalytics, apply_answer,
};
use tempfile::TempDir;

fn controller_with_memory() -> (SessionController, Arc<MemoryAnalytics>, Arc<MemoryOutcomeStore>) {
    let analytics = Arc::new(MemoryAnalytics::new());
    let outcomes = Arc::new(MemoryOutcomeStore::new());
    let controller = SessionController::new(
        Content::bundled().unwrap(),
        Telemetry::new(analytics.clone(), outcomes.clone()),
    )
    .with_random_source(FixedRandom(0.0));
    (controller, analytics, outcomes)
}

#[tokio::test(start_paused = true)]
async fn first_option_run_resolves_once() {
    let (mut controller, analytics, outcomes) = controller_with_memory();
    let total_questions = controller.questions().len();

    controller.start();
    let mut expected = ScoreBoard::new();
    let mut answered = 0;
    loop {
        let question = controller.current_question().unwrap().clone();
        expected = apply_answer(&expected, &question.options[0]);
        let choice = controller.choice(0).unwrap();
        answered += 1;
        match controller.answer(choice) {
            AnswerOutcome::Advanced { next } => assert_eq!(next, answered),
            AnswerOutcome::QuizComplete => break,
            AnswerOutcome::Ignored => panic!("valid answer was ignored"),
        }
    }

    assert_eq!(answered, total_questions);
    assert_eq!(controller.screen(), Screen::Loading);
    assert_eq!(controller.progress(), 1.0);
    assert_eq!(*controller.state().scores(), expected);

    assert!(controller.wait_for_loading().await);
    assert_eq!(controller.screen(), Screen::Result);
    let title = controller.result().unwrap().title.clone();
    assert!(!title.is_empty());

    // No second resolution
    assert!(!controller.wait_for_loading().await);
    assert!(!controller.poll_timers());

    controller.flush_telemetry().await;
    let records = outcomes.records().await;
    assert_eq!(records.len(), 1);
    assert_eq!(Some(records[0].type_code), controller.state().resolved());
    assert_eq!(records[0].label, title);
    assert_eq!(
        analytics.views().await,
        vec![Screen::Quiz, Screen::Loading, Screen::Result]
    );
}

#[tokio::test(start_paused = true)]
async fn restart_then_replay_records_each_session() {
    let (mut controller, _, outcomes) = controller_with_memory();

    for _ in 0..2 {
        controller.start();
        while let Some(choice) = controller.choice(0) {
            controller.answer(choice);
        }
        assert!(controller.wait_for_loading().await);
        controller.restart();
        assert_eq!(controller.screen(), Screen::Start);
        assert_eq!(controller.state().question_index(), 0);
        assert!(controller.state().scores().is_zero());
        assert!(controller.state().resolved().is_none());
    }

    controller.flush_telemetry().await;
    let records = outcomes.records().await;
    assert_eq!(records.len(), 2);
    assert_ne!(records[0].session_id, records[1].session_id);
}

#[tokio::test(start_paused = true)]
async fn jsonl_store_receives_outcome() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(JsonlOutcomeStore::new(dir.path().join("outcomes.jsonl")));
    let mut controller = SessionController::new(
        Content::bundled().unwrap(),
        Telemetry::new(Arc::new(TracingAnalytics), store.clone()),
    );

    controller.start();
    while let Some(choice) = controller.choice(1) {
        controller.answer(choice);
    }
    controller.wait_for_loading().await;
    controller.flush_telemetry().await;

    let recent = store.recent(10).await.unwrap();
    assert_eq!(recent.len(), 1);
    assert_eq!(Some(recent[0].type_code), controller.state().resolved());
}

#[tokio::test(start_paused = true)]
async fn last_options_resolve_to_bundled_introvert_type() {
    let (mut controller, _, _) = controller_with_memory();
    controller.start();
    while let Some(question) = controller.current_question() {
        let last = question.options.len() - 1;
        let choice = controller.choice(last).unwrap();
        controller.answer(choice);
    }
    controller.wait_for_loading().await;

    let code = controller.state().resolved().unwrap().to_string();
    assert!(code.starts_with('I'), "unexpected type {code}");
}
