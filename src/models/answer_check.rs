use serde::Deserialize;

/// One entry of an answer sheet: the option positions picked for a question.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnswerCheck {
    /// Position of the question in its discipline.
    pub question: usize,
    #[serde(default)]
    pub selected: Vec<usize>,
}

impl AnswerCheck {
    pub fn new(question: usize, selected: impl Into<Vec<usize>>) -> Self {
        Self {
            question,
            selected: selected.into(),
        }
    }
}
