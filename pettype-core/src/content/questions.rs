//! Question bank: the ordered, immutable list of quiz questions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;
use crate::personality::Trait;

/// One selectable answer and the trait points it awards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub text: String,
    /// Points per trait. Traits not listed contribute nothing.
    #[serde(default)]
    pub weights: BTreeMap<Trait, u32>,
}

impl AnswerOption {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            weights: BTreeMap::new(),
        }
    }

    /// Add `points` for `t`, replacing any previous weight.
    #[must_use]
    pub fn weight(mut self, t: Trait, points: u32) -> Self {
        self.weights.insert(t, points);
        self
    }

    /// Sum of all weights on this option.
    pub fn total_weight(&self) -> u64 {
        self.weights.values().map(|w| u64::from(*w)).sum()
    }
}

/// A prompt and its answer options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<AnswerOption>,
}

#[derive(Debug, Deserialize)]
struct RawQuestionBank {
    #[serde(default)]
    questions: Vec<Question>,
}

/// Ordered questions, indexed `0..len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Build a bank, rejecting empty banks, blank prompts and option-less questions.
    pub fn new(questions: Vec<Question>) -> Result<Self, ContentError> {
        if questions.is_empty() {
            return Err(ContentError::NoQuestions);
        }
        for (index, question) in questions.iter().enumerate() {
            if question.prompt.trim().is_empty() {
                return Err(ContentError::EmptyPrompt { question: index });
            }
            if question.options.is_empty() {
                return Err(ContentError::NoOptions { question: index });
            }
            if let Some(option) = question
                .options
                .iter()
                .position(|o| o.text.trim().is_empty())
            {
                return Err(ContentError::EmptyOption {
                    question: index,
                    option,
                });
            }
        }
        Ok(Self { questions })
    }

    /// Parse a bank from TOML (`[[questions]]` tables).
    ///
    /// Weight keys must be trait symbols; anything else fails to parse.
    pub fn from_toml(source: &str) -> Result<Self, ContentError> {
        let raw: RawQuestionBank = toml::from_str(source).map_err(|source| ContentError::Parse {
            what: "question bank",
            source,
        })?;
        Self::new(raw.questions)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a validated bank; kept for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn last_index(&self) -> usize {
        self.questions.len().saturating_sub(1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(prompt: &str, options: Vec<AnswerOption>) -> Question {
        Question {
            prompt: prompt.to_string(),
            options,
        }
    }

    #[test]
    fn parses_questions_with_weights() {
        let bank = QuestionBank::from_toml(
            r#"
[[questions]]
prompt = "Weekend plans?"

[[questions.options]]
text = "Party"
weights = { E = 2 }

[[questions.options]]
text = "Nap"
weights = { I = 2, P = 1 }
"#,
        )
        .unwrap();

        assert_eq!(bank.len(), 1);
        let q = bank.get(0).unwrap();
        assert_eq!(q.options.len(), 2);
        assert_eq!(q.options[0].weights.get(&Trait::E), Some(&2));
        assert_eq!(q.options[1].total_weight(), 3);
    }

    #[test]
    fn option_without_weights_is_valid() {
        let bank = QuestionBank::from_toml(
            r#"
[[questions]]
prompt = "Pick one"
options = [{ text = "Whatever" }]
"#,
        )
        .unwrap();
        assert!(bank.get(0).unwrap().options[0].weights.is_empty());
    }

    #[test]
    fn unknown_trait_is_a_parse_error() {
        let error = QuestionBank::from_toml(
            r#"
[[questions]]
prompt = "Pick one"
options = [{ text = "A", weights = { X = 1 } }]
"#,
        )
        .unwrap_err();
        assert!(matches!(error, ContentError::Parse { .. }));
    }

    #[test]
    fn negative_weight_is_a_parse_error() {
        let error = QuestionBank::from_toml(
            r#"
[[questions]]
prompt = "Pick one"
options = [{ text = "A", weights = { E = -1 } }]
"#,
        )
        .unwrap_err();
        assert!(matches!(error, ContentError::Parse { .. }));
    }

    #[test]
    fn empty_bank_is_rejected() {
        assert!(matches!(
            QuestionBank::from_toml(""),
            Err(ContentError::NoQuestions)
        ));
    }

    #[test]
    fn question_without_options_is_rejected() {
        let error = QuestionBank::new(vec![
            question("ok", vec![AnswerOption::new("a")]),
            question("broken", vec![]),
        ])
        .unwrap_err();
        assert!(matches!(error, ContentError::NoOptions { question: 1 }));
    }

    #[test]
    fn blank_prompt_and_option_text_are_rejected() {
        assert!(matches!(
            QuestionBank::new(vec![question("  ", vec![AnswerOption::new("a")])]),
            Err(ContentError::EmptyPrompt { question: 0 })
        ));
        assert!(matches!(
            QuestionBank::new(vec![question(
                "q",
                vec![AnswerOption::new("a"), AnswerOption::new("")]
            )]),
            Err(ContentError::EmptyOption {
                question: 0,
                option: 1
            })
        ));
    }

    #[test]
    fn last_index_is_len_minus_one() {
        let bank = QuestionBank::new(vec![
            question("one", vec![AnswerOption::new("a")]),
            question("two", vec![AnswerOption::new("b")]),
        ])
        .unwrap();
        assert_eq!(bank.last_index(), 1);
        assert_eq!(bank.iter().count(), 2);
    }

    #[test]
    fn weight_builder_sets_points() {
        let option = AnswerOption::new("a").weight(Trait::N, 2).weight(Trait::N, 3);
        assert_eq!(option.weights.get(&Trait::N), Some(&3));
        assert_eq!(option.total_weight(), 3);
    }
}
