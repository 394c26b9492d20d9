use std::fmt;

use serde::Deserialize;

/// Suffix printed after the text of a correct option.
pub const CORRECT_MARKER: &str = " (правильный)";

/// A single selectable choice of a question.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnswerOption {
    text: String,
    #[serde(rename = "correct")]
    is_correct: bool,
}

impl AnswerOption {
    pub fn new(text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            text: text.into(),
            is_correct,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct
    }

    /// Print the option line to stdout.
    pub fn display(&self) {
        println!("{}", self);
    }
}

impl fmt::Display for AnswerOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {}", self.text)?;
        if self.is_correct {
            f.write_str(CORRECT_MARKER)?;
        }
        Ok(())
    }
}
