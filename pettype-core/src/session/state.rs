//! Quiz session state machine
//!
//! `SessionState` is a plain value. Transitions are methods that either move
//! the state forward or, when called from the wrong screen, leave it untouched
//! and say so.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::content::{AnswerOption, Question, QuestionBank};
use crate::personality::TypeCode;
use crate::scoring::{ScoreBoard, apply_answer};

/// Identifier assigned to each started quiz run.
pub type SessionId = Uuid;

/// Which screen the session is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    /// Landing screen
    #[default]
    Start,
    /// Answering questions
    Quiz,
    /// Waiting for the result to be revealed
    Loading,
    /// Showing the resolved type
    Result,
}

impl Screen {
    /// Stable identifier used for page-view analytics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Start => "start",
            Screen::Quiz => "quiz",
            Screen::Loading => "loading",
            Screen::Result => "result",
        }
    }

    /// Page path reported to analytics, e.g. `/quiz`.
    pub fn page_path(&self) -> String {
        format!("/{}", self.as_str())
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An option of the current question.
///
/// Only [`SessionState::choices`] and [`SessionState::choice`] hand these out,
/// so a choice always refers to the question that was on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Choice {
    question: usize,
    option: usize,
}

impl Choice {
    pub fn question(&self) -> usize {
        self.question
    }

    pub fn option(&self) -> usize {
        self.option
    }
}

/// What an `answer` call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Moved on to question `next`
    Advanced { next: usize },
    /// The last question was answered; the session is now loading
    QuizComplete,
    /// Not in the quiz, or the choice was for another question
    Ignored,
}

/// State of one quiz run
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionState {
    screen: Screen,
    question_index: usize,
    scores: ScoreBoard,
    resolved: Option<TypeCode>,
    session_id: Option<SessionId>,
    answers: Vec<Choice>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn question_index(&self) -> usize {
        self.question_index
    }

    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    /// Resolved type, set only once the session reaches the result screen.
    pub fn resolved(&self) -> Option<TypeCode> {
        self.resolved
    }

    pub fn session_id(&self) -> Option<SessionId> {
        self.session_id
    }

    /// Answers given so far, in question order.
    pub fn answers(&self) -> &[Choice] {
        &self.answers
    }

    /// Begin a fresh run from any screen.
    pub fn start(&mut self) -> SessionId {
        let id = Uuid::new_v4();
        *self = Self {
            screen: Screen::Quiz,
            session_id: Some(id),
            ..Self::default()
        };
        debug!(session_id = %id, "Session started");
        id
    }

    /// Apply `choice` to the current question.
    pub fn answer(&mut self, bank: &QuestionBank, choice: Choice) -> AnswerOutcome {
        if self.screen != Screen::Quiz || choice.question != self.question_index {
            debug!(screen = %self.screen, ?choice, "Ignoring answer");
            return AnswerOutcome::Ignored;
        }
        let Some(option) = self.option(bank, choice) else {
            return AnswerOutcome::Ignored;
        };

        self.scores = apply_answer(&self.scores, option);
        self.answers.push(choice);

        if self.question_index < bank.last_index() {
            self.question_index += 1;
            debug!(next = self.question_index, "Advanced to next question");
            AnswerOutcome::Advanced {
                next: self.question_index,
            }
        } else {
            self.screen = Screen::Loading;
            debug!(total = self.scores.total(), "Quiz complete");
            AnswerOutcome::QuizComplete
        }
    }

    /// Record the resolved type and show the result.
    ///
    /// Returns false unless the session is loading and not yet resolved.
    pub fn complete(&mut self, code: TypeCode) -> bool {
        if self.screen != Screen::Loading || self.resolved.is_some() {
            return false;
        }
        self.resolved = Some(code);
        self.screen = Screen::Result;
        debug!(%code, "Session resolved");
        true
    }

    /// Return to the initial start screen.
    pub fn restart(&mut self) {
        *self = Self::default();
    }

    /// The question on screen, if the quiz is running.
    pub fn current_question<'a>(&self, bank: &'a QuestionBank) -> Option<&'a Question> {
        match self.screen {
            Screen::Quiz => bank.get(self.question_index),
            _ => None,
        }
    }

    /// Fraction of the quiz completed, in `[0, 1]`.
    pub fn progress(&self, bank: &QuestionBank) -> f64 {
        match self.screen {
            Screen::Start => 0.0,
            Screen::Quiz if bank.is_empty() => 0.0,
            Screen::Quiz => self.question_index as f64 / bank.len() as f64,
            Screen::Loading | Screen::Result => 1.0,
        }
    }

    /// Choices for every option of the current question.
    pub fn choices(&self, bank: &QuestionBank) -> Vec<Choice> {
        let count = self
            .current_question(bank)
            .map(|q| q.options.len())
            .unwrap_or(0);
        (0..count)
            .map(|option| Choice {
                question: self.question_index,
                option,
            })
            .collect()
    }

    /// Choice for option `option` of the current question, if it exists.
    pub fn choice(&self, bank: &QuestionBank, option: usize) -> Option<Choice> {
        let question = self.current_question(bank)?;
        (option < question.options.len()).then_some(Choice {
            question: self.question_index,
            option,
        })
    }

    fn option<'a>(&self, bank: &'a QuestionBank, choice: Choice) -> Option<&'a AnswerOption> {
        bank.get(choice.question)?.options.get(choice.option)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::AnswerOption;
    use crate::personality::Trait;

    fn bank() -> QuestionBank {
        QuestionBank::new(vec![
            Question {
                prompt: "One".into(),
                options: vec![
                    AnswerOption::new("a").weight(Trait::E, 2),
                    AnswerOption::new("b").weight(Trait::I, 2),
                ],
            },
            Question {
                prompt: "Two".into(),
                options: vec![
                    AnswerOption::new("c").weight(Trait::N, 1).weight(Trait::P, 1),
                    AnswerOption::new("d"),
                ],
            },
        ])
        .unwrap()
    }

    fn first_choice(state: &SessionState, bank: &QuestionBank) -> Choice {
        state.choice(bank, 0).unwrap()
    }

    #[test]
    fn initial_state_is_start() {
        let state = SessionState::new();
        assert_eq!(state.screen(), Screen::Start);
        assert_eq!(state.question_index(), 0);
        assert!(state.scores().is_zero());
        assert!(state.resolved().is_none());
        assert!(state.session_id().is_none());
    }

    #[test]
    fn start_enters_quiz_with_fresh_id() {
        let mut state = SessionState::new();
        let first = state.start();
        assert_eq!(state.screen(), Screen::Quiz);
        assert_eq!(state.session_id(), Some(first));

        let second = state.start();
        assert_ne!(first, second);
    }

    #[test]
    fn answering_advances_then_completes() {
        let bank = bank();
        let mut state = SessionState::new();
        state.start();

        let outcome = state.answer(&bank, first_choice(&state, &bank));
        assert_eq!(outcome, AnswerOutcome::Advanced { next: 1 });
        assert_eq!(state.scores()[Trait::E], 2);

        let outcome = state.answer(&bank, first_choice(&state, &bank));
        assert_eq!(outcome, AnswerOutcome::QuizComplete);
        assert_eq!(state.screen(), Screen::Loading);
        assert_eq!(state.scores().total(), 4);
        assert_eq!(state.answers().len(), 2);
        assert!(state.resolved().is_none());
    }

    #[test]
    fn stale_choice_is_ignored() {
        let bank = bank();
        let mut state = SessionState::new();
        state.start();
        let stale = first_choice(&state, &bank);
        state.answer(&bank, stale);

        assert_eq!(state.answer(&bank, stale), AnswerOutcome::Ignored);
        assert_eq!(state.question_index(), 1);
        assert_eq!(state.scores().total(), 2);
    }

    #[test]
    fn answer_outside_quiz_is_ignored() {
        let bank = bank();
        let mut quiz = SessionState::new();
        quiz.start();
        let choice = first_choice(&quiz, &bank);

        let mut state = SessionState::new();
        assert_eq!(state.answer(&bank, choice), AnswerOutcome::Ignored);
        assert_eq!(state, SessionState::new());
    }

    #[test]
    fn complete_only_from_loading_and_once() {
        let bank = bank();
        let code: TypeCode = "ENFP".parse().unwrap();
        let mut state = SessionState::new();
        assert!(!state.complete(code));

        state.start();
        assert!(!state.complete(code));
        state.answer(&bank, first_choice(&state, &bank));
        state.answer(&bank, first_choice(&state, &bank));

        assert!(state.complete(code));
        assert_eq!(state.screen(), Screen::Result);
        assert_eq!(state.resolved(), Some(code));
        assert!(!state.complete("INTJ".parse().unwrap()));
        assert_eq!(state.resolved(), Some(code));
    }

    #[test]
    fn restart_resets_everything() {
        let bank = bank();
        let mut state = SessionState::new();
        state.start();
        state.answer(&bank, first_choice(&state, &bank));
        state.answer(&bank, first_choice(&state, &bank));
        state.complete("ENFP".parse().unwrap());

        state.restart();
        assert_eq!(state, SessionState::new());
    }

    #[test]
    fn progress_tracks_screen_and_index() {
        let bank = bank();
        let mut state = SessionState::new();
        assert_eq!(state.progress(&bank), 0.0);
        state.start();
        assert_eq!(state.progress(&bank), 0.0);
        state.answer(&bank, first_choice(&state, &bank));
        assert_eq!(state.progress(&bank), 0.5);
        state.answer(&bank, first_choice(&state, &bank));
        assert_eq!(state.progress(&bank), 1.0);
    }

    #[test]
    fn choices_cover_current_question_only() {
        let bank = bank();
        let mut state = SessionState::new();
        assert!(state.choices(&bank).is_empty());
        assert!(state.current_question(&bank).is_none());

        state.start();
        let choices = state.choices(&bank);
        assert_eq!(choices.len(), 2);
        assert!(choices.iter().all(|c| c.question() == 0));
        assert_eq!(choices[1].option(), 1);
        assert!(state.choice(&bank, 2).is_none());
        assert_eq!(state.current_question(&bank).unwrap().prompt, "One");
    }

    #[test]
    fn screen_ids_and_paths() {
        assert_eq!(Screen::Start.as_str(), "start");
        assert_eq!(Screen::Result.page_path(), "/result");
        assert_eq!(Screen::Loading.to_string(), "loading");
        assert_eq!(serde_json::to_string(&Screen::Quiz).unwrap(), "\"quiz\"");
    }
}
