//! pettype-core: the engine behind the "which pet are you?" quiz
//!
//! - **Content** - [`QuestionBank`] and [`ResultCatalog`], loaded from TOML
//! - **Scoring** - [`apply_answer`] and [`resolve_type`] turn answers into a [`TypeCode`]
//! - **Session** - [`SessionState`] transitions and the [`SessionController`] that owns them
//! - **Telemetry** - [`AnalyticsSink`] page views and [`OutcomeStore`] results
//!
//! # Quick Start
//!
//! ```no_run
//! use pettype_core::{Content, SessionController, Telemetry};
//!
//! # async fn example() -> Result<(), pettype_core::ContentError> {
//! let mut controller = SessionController::new(Content::bundled()?, Telemetry::disabled());
//! controller.start();
//! while let Some(choice) = controller.choice(0) {
//!     controller.answer(choice);
//! }
//! controller.wait_for_loading().await;
//! println!("{}", controller.result().map(|r| r.title.as_str()).unwrap_or("?"));
//! # Ok(())
//! # }
//! ```
//!
//! # Flow
//!
//! ```text
//!  start ──► quiz ──(last answer)──► loading ──(delay)──► result
//!    ▲                                                      │
//!    └──────────────────────── restart ◄────────────────────┘
//! ```

pub mod content;
pub mod error;
pub mod personality;
pub mod scoring;
pub mod session;
pub mod telemetry;

pub use content::{
    AnswerOption, Content, MatchNote, Matches, Question, QuestionBank, ResultCatalog, ResultEntry,
};
pub use error::{ContentError, PettypeError, TelemetryError};
pub use personality::{ParseTypeCodeError, Trait, TraitPair, TypeCode};
pub use scoring::{
    FixedRandom, RandomSource, ScoreBoard, SeededRandom, SequenceRandom, ThreadRandom,
    apply_answer, lookup_result, resolve_type,
};
pub use session::{
    AnswerOutcome, Choice, DEFAULT_LOADING_DELAY, Screen, SessionController, SessionId,
    SessionState, TieBreak, TimerEvent,
};
pub use telemetry::{
    AnalyticsSink, HttpOutcomeStore, JsonlOutcomeStore, MemoryAnalytics, MemoryOutcomeStore,
    NoopAnalytics, NoopOutcomeStore, OutcomeRecord, OutcomeStore, Telemetry, TracingAnalytics,
};
