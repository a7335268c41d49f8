//! Timer races: a loading timer from an earlier run must never resolve a later one

use std::sync::Arc;
use std::time::Duration;

use pettype_core::{
    Content, FixedRandom, MemoryOutcomeStore, NoopAnalytics, Screen, SessionController, Telemetry,
    TimerEvent,
};

fn controller(outcomes: Arc<MemoryOutcomeStore>) -> SessionController {
    SessionController::new(
        Content::bundled().unwrap(),
        Telemetry::new(Arc::new(NoopAnalytics), outcomes),
    )
    .with_random_source(FixedRandom(0.99))
    .with_loading_delay(Duration::from_millis(2000))
}

fn finish_quiz(controller: &mut SessionController) {
    while let Some(choice) = controller.choice(0) {
        controller.answer(choice);
    }
    assert_eq!(controller.screen(), Screen::Loading);
}

#[tokio::test(start_paused = true)]
async fn restart_during_loading_cancels_timer() {
    let outcomes = Arc::new(MemoryOutcomeStore::new());
    let mut controller = controller(outcomes.clone());

    controller.start();
    finish_quiz(&mut controller);
    tokio::time::sleep(Duration::from_millis(1500)).await;
    controller.restart();
    assert!(!controller.has_pending_timer());

    // Well past the original deadline
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert!(!controller.poll_timers());
    assert_eq!(controller.screen(), Screen::Start);
    assert!(controller.state().resolved().is_none());

    controller.flush_telemetry().await;
    assert!(outcomes.is_empty().await);
}

#[tokio::test(start_paused = true)]
async fn old_timer_cannot_cut_new_loading_short() {
    let outcomes = Arc::new(MemoryOutcomeStore::new());
    let mut controller = controller(outcomes.clone());

    let first = controller.start();
    finish_quiz(&mut controller);
    tokio::time::sleep(Duration::from_millis(1000)).await;

    let second = controller.start();
    finish_quiz(&mut controller);

    // A late delivery from the first run is dropped
    assert!(!controller.handle_timer(TimerEvent::LoadingElapsed { session_id: first }));
    assert_eq!(controller.screen(), Screen::Loading);

    // 1.5s into the second run: the first run's deadline has passed, the second's has not
    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert!(!controller.poll_timers());
    assert_eq!(controller.screen(), Screen::Loading);

    assert!(controller.wait_for_loading().await);
    assert_eq!(controller.screen(), Screen::Result);
    assert_eq!(controller.state().session_id(), Some(second));

    controller.flush_telemetry().await;
    let records = outcomes.records().await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].session_id, second);
}

#[tokio::test(start_paused = true)]
async fn restart_after_result_ignores_duplicate_event() {
    let outcomes = Arc::new(MemoryOutcomeStore::new());
    let mut controller = controller(outcomes.clone());

    let id = controller.start();
    finish_quiz(&mut controller);
    assert!(controller.wait_for_loading().await);
    controller.restart();

    assert!(!controller.handle_timer(TimerEvent::LoadingElapsed { session_id: id }));
    assert_eq!(controller.screen(), Screen::Start);

    controller.flush_telemetry().await;
    assert_eq!(outcomes.len().await, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn new_start_during_loading_on_real_time() {
    let outcomes = Arc::new(MemoryOutcomeStore::new());
    let mut controller = controller(outcomes.clone()).with_loading_delay(Duration::from_millis(20));

    controller.start();
    finish_quiz(&mut controller);
    let second = controller.start();
    assert_eq!(controller.screen(), Screen::Quiz);

    // The aborted timer would have fired by now
    tokio::time::sleep(Duration::from_millis(80)).await;
    assert!(!controller.poll_timers());
    assert_eq!(controller.screen(), Screen::Quiz);

    finish_quiz(&mut controller);
    assert!(controller.wait_for_loading().await);
    assert_eq!(controller.state().session_id(), Some(second));

    controller.flush_telemetry().await;
    assert_eq!(outcomes.len().await, 1);
}
