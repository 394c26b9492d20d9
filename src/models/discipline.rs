use std::fmt;

use serde::Deserialize;

use super::Question;

/// A named subject owning an ordered list of questions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Discipline {
    name: String,
    #[serde(default)]
    questions: Vec<Question>,
}

impl Discipline {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            questions: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn add_question(&mut self, question: Question) {
        self.questions.push(question);
    }

    /// Print the discipline heading and every question block to stdout.
    pub fn display(&self) {
        println!("Дисциплина: {}", self.name);
        for question in &self.questions {
            question.display();
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Дисциплина: {}", self.name)?;
        for question in &self.questions {
            write!(f, "{}", question)?;
        }
        Ok(())
    }
}
