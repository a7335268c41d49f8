//! Session controller
//!
//! Owns the [`SessionState`] for one player and everything that happens around
//! its transitions: the loading delay, tie-break randomness, page-view
//! analytics and outcome recording.
//!
//! The controller is driven from a single task. Timer expiry arrives as a
//! [`TimerEvent`] on an internal channel and is applied only if it still
//! belongs to the current session.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::state::{AnswerOutcome, Choice, Screen, SessionId, SessionState};
use crate::content::{Content, Question, QuestionBank, ResultCatalog, ResultEntry};
use crate::personality::TypeCode;
use crate::scoring::{RandomSource, SeededRandom, ThreadRandom, lookup_result, resolve_type};
use crate::telemetry::{OutcomeRecord, Telemetry};

/// Default time spent on the loading screen.
pub const DEFAULT_LOADING_DELAY: Duration = Duration::from_millis(2000);

/// How score ties are broken when resolving a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    /// Fresh random draw per tie
    #[default]
    Random,
    /// Draws seeded from the answer sequence, so identical answers give identical types
    Answers,
}

impl TieBreak {
    pub fn as_str(&self) -> &'static str {
        match self {
            TieBreak::Random => "random",
            TieBreak::Answers => "answers",
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TieBreak {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(TieBreak::Random),
            "answers" => Ok(TieBreak::Answers),
            other => Err(format!(
                "unknown tie-break strategy '{other}' (expected 'random' or 'answers')"
            )),
        }
    }
}

/// Events delivered by background timers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// The loading delay for `session_id` has passed
    LoadingElapsed { session_id: SessionId },
}

/// Single owner of a quiz session
pub struct SessionController {
    content: Content,
    state: SessionState,
    tie_break: TieBreak,
    /// Overrides `tie_break` when set
    random: Option<Box<dyn RandomSource>>,
    telemetry: Telemetry,
    loading_delay: Duration,
    timer_tx: mpsc::UnboundedSender<TimerEvent>,
    timer_rx: mpsc::UnboundedReceiver<TimerEvent>,
    pending_timer: Option<JoinHandle<()>>,
    telemetry_tasks: Vec<JoinHandle<()>>,
    /// Last session whose outcome was handed to the store
    recorded_session: Option<SessionId>,
}

impl SessionController {
    pub fn new(content: Content, telemetry: Telemetry) -> Self {
        let (timer_tx, timer_rx) = mpsc::unbounded_channel();
        Self {
            content,
            state: SessionState::new(),
            tie_break: TieBreak::default(),
            random: None,
            telemetry,
            loading_delay: DEFAULT_LOADING_DELAY,
            timer_tx,
            timer_rx,
            pending_timer: None,
            telemetry_tasks: Vec::new(),
            recorded_session: None,
        }
    }

    #[must_use]
    pub fn with_loading_delay(mut self, delay: Duration) -> Self {
        self.loading_delay = delay;
        self
    }

    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Use `random` for every tie-break instead of the configured strategy.
    #[must_use]
    pub fn with_random_source(mut self, random: impl RandomSource + 'static) -> Self {
        self.random = Some(Box::new(random));
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn screen(&self) -> Screen {
        self.state.screen()
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn questions(&self) -> &QuestionBank {
        &self.content.questions
    }

    pub fn results(&self) -> &ResultCatalog {
        &self.content.results
    }

    pub fn loading_delay(&self) -> Duration {
        self.loading_delay
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.state.current_question(&self.content.questions)
    }

    pub fn progress(&self) -> f64 {
        self.state.progress(&self.content.questions)
    }

    pub fn choices(&self) -> Vec<Choice> {
        self.state.choices(&self.content.questions)
    }

    pub fn choice(&self, option: usize) -> Option<Choice> {
        self.state.choice(&self.content.questions, option)
    }

    /// Whether a loading timer is scheduled and not yet handled.
    pub fn has_pending_timer(&self) -> bool {
        self.pending_timer.is_some()
    }

    /// Report the screen currently shown, e.g. on first render.
    pub fn notify_current_screen(&mut self) {
        self.notify(self.state.screen());
    }

    /// Begin a new run, cancelling anything left from the previous one.
    pub fn start(&mut self) -> SessionId {
        self.cancel_timer();
        let id = self.state.start();
        info!(session_id = %id, questions = self.content.questions.len(), "Quiz started");
        self.notify(Screen::Quiz);
        id
    }

    /// Answer the current question.
    pub fn answer(&mut self, choice: Choice) -> AnswerOutcome {
        let outcome = self.state.answer(&self.content.questions, choice);
        if outcome == AnswerOutcome::QuizComplete {
            self.notify(Screen::Loading);
            self.schedule_loading_timer();
        }
        outcome
    }

    /// Return to the start screen.
    pub fn restart(&mut self) {
        self.cancel_timer();
        self.state.restart();
        debug!("Session restarted");
        self.notify(Screen::Start);
    }

    /// Apply any timer events that have already fired. Never blocks.
    ///
    /// Returns true if the screen changed.
    pub fn poll_timers(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.timer_rx.try_recv() {
            changed |= self.handle_timer(event);
        }
        changed
    }

    /// Wait for the pending loading timer and apply it.
    ///
    /// Returns false immediately if no timer is pending.
    pub async fn wait_for_loading(&mut self) -> bool {
        while self.pending_timer.is_some() {
            let Some(event) = self.timer_rx.recv().await else {
                return false;
            };
            if self.handle_timer(event) {
                return true;
            }
        }
        false
    }

    /// Apply a timer event. Stale events are ignored.
    ///
    /// Returns true if the session moved to the result screen.
    pub fn handle_timer(&mut self, event: TimerEvent) -> bool {
        let TimerEvent::LoadingElapsed { session_id } = event;
        if self.state.session_id() != Some(session_id) || self.state.screen() != Screen::Loading {
            debug!(%session_id, screen = %self.state.screen(), "Ignoring stale loading timer");
            return false;
        }
        self.pending_timer = None;

        let code = self.resolve();
        if !self.state.complete(code) {
            return false;
        }
        info!(%session_id, %code, "Quiz resolved");
        self.notify(Screen::Result);
        self.record_outcome(session_id, code);
        true
    }

    /// Result content for the resolved type.
    pub fn result(&self) -> Option<&ResultEntry> {
        self.state
            .resolved()
            .map(|code| lookup_result(&self.content.results, code))
    }

    /// Text suitable for sharing the result.
    pub fn share_text(&self) -> Option<String> {
        let code = self.state.resolved()?;
        let entry = self.result()?;
        Some(format!("My pet type is {} ({code})!", entry.title))
    }

    /// Wait for all in-flight analytics and outcome writes.
    pub async fn flush_telemetry(&mut self) {
        for task in self.telemetry_tasks.drain(..) {
            if let Err(e) = task.await {
                warn!(error = %e, "Telemetry task failed");
            }
        }
    }

    fn resolve(&mut self) -> TypeCode {
        let board = *self.state.scores();
        if let Some(random) = self.random.as_mut() {
            return resolve_type(&board, random.as_mut());
        }
        match self.tie_break {
            TieBreak::Random => resolve_type(&board, &mut ThreadRandom),
            TieBreak::Answers => {
                let mut seeded = SeededRandom::from_answers(
                    self.state
                        .answers()
                        .iter()
                        .map(|choice| (choice.question(), choice.option())),
                );
                resolve_type(&board, &mut seeded)
            }
        }
    }

    fn schedule_loading_timer(&mut self) {
        let Some(session_id) = self.state.session_id() else {
            return;
        };
        self.cancel_timer();

        let tx = self.timer_tx.clone();
        let delay = self.loading_delay;
        debug!(%session_id, delay_ms = delay.as_millis() as u64, "Loading timer scheduled");
        self.pending_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver lives as long as the controller
            let _ = tx.send(TimerEvent::LoadingElapsed { session_id });
        }));
    }

    fn cancel_timer(&mut self) {
        if let Some(handle) = self.pending_timer.take() {
            handle.abort();
            debug!("Pending loading timer cancelled");
        }
    }

    fn notify(&mut self, screen: Screen) {
        let analytics = Arc::clone(&self.telemetry.analytics);
        self.spawn_telemetry(async move {
            if let Err(e) = analytics.page_view(screen).await {
                warn!(error = %e, page = %screen.page_path(), "Failed to report page view");
            }
        });
    }

    fn record_outcome(&mut self, session_id: SessionId, code: TypeCode) {
        if self.recorded_session == Some(session_id) {
            debug!(%session_id, "Outcome already recorded");
            return;
        }
        self.recorded_session = Some(session_id);

        let label = lookup_result(&self.content.results, code).title.clone();
        let record = OutcomeRecord::new(session_id, code, label);
        let outcomes = Arc::clone(&self.telemetry.outcomes);
        self.spawn_telemetry(async move {
            if let Err(e) = outcomes.record(record).await {
                warn!(error = %e, %session_id, "Failed to record outcome");
            }
        });
    }

    fn spawn_telemetry<F>(&mut self, task: F)
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        self.telemetry_tasks.retain(|handle| !handle.is_finished());
        self.telemetry_tasks.push(tokio::spawn(task));
    }
}

impl Drop for SessionController {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}

impl fmt::Debug for SessionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionController")
            .field("state", &self.state)
            .field("tie_break", &self.tie_break)
            .field("loading_delay", &self.loading_delay)
            .field("pending_timer", &self.pending_timer.is_some())
            .finish_non_exhaustive()
    }
}
