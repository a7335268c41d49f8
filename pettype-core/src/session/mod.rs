//! Quiz session: the state machine and its controller

pub mod controller;
pub mod state;

pub use controller::{DEFAULT_LOADING_DELAY, SessionController, TieBreak, TimerEvent};
pub use state::{AnswerOutcome, Choice, Screen, SessionId, SessionState};
