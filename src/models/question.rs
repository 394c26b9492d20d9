use std::fmt;

use serde::Deserialize;
use tracing::{debug, warn};

use super::AnswerOption;

/// How a question decides whether a selection is correct.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// No checking policy: every selection is rejected.
    #[default]
    Basic,
    /// The selection must equal the set of correct positions exactly.
    MultipleChoice,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    text: String,
    #[serde(default)]
    kind: QuestionKind,
    #[serde(default)]
    options: Vec<AnswerOption>,
}

impl Question {
    /// Create a basic question.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_kind(text, QuestionKind::Basic)
    }

    /// Create a multiple-choice question.
    pub fn multiple_choice(text: impl Into<String>) -> Self {
        Self::with_kind(text, QuestionKind::MultipleChoice)
    }

    pub fn with_kind(text: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            text: text.into(),
            kind,
            options: Vec::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    /// Append an option. Duplicates are kept as-is.
    pub fn add_answer_option(&mut self, option: AnswerOption) {
        self.options.push(option);
    }

    /// Positions of the options marked correct, in order.
    pub fn correct_indices(&self) -> Vec<usize> {
        self.options
            .iter()
            .enumerate()
            .filter(|(_, option)| option.is_correct())
            .map(|(i, _)| i)
            .collect()
    }

    /// Selected indices that do not point at any option, deduplicated.
    pub fn out_of_range(&self, selected: &[usize]) -> Vec<usize> {
        let mut stray: Vec<usize> = selected
            .iter()
            .copied()
            .filter(|&i| i >= self.options.len())
            .collect();
        stray.sort_unstable();
        stray.dedup();
        stray
    }

    /// Check a selection of option positions against this question.
    ///
    /// Indices past the end of the option list are ignored and repeated
    /// indices count once.
    pub fn check_answer(&self, selected: &[usize]) -> bool {
        let stray = self.out_of_range(selected);
        if !stray.is_empty() {
            warn!(question = %self.text, ?stray, "selection refers to missing options");
        }

        let verdict = match self.kind {
            QuestionKind::Basic => false,
            QuestionKind::MultipleChoice => self
                .options
                .iter()
                .enumerate()
                .all(|(i, option)| option.is_correct() == selected.contains(&i)),
        };

        debug!(question = %self.text, ?selected, verdict, "checked answer");
        verdict
    }

    /// Print the question block to stdout.
    pub fn display(&self) {
        println!("Вопрос: {}", self.text);
        for option in &self.options {
            option.display();
        }
    }
}

/// Renders the heading line and one line per option, each newline-terminated.
impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Вопрос: {}", self.text)?;
        for option in &self.options {
            writeln!(f, "{}", option)?;
        }
        Ok(())
    }
}
