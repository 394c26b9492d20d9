//! # discipline-quiz
//!
//! A minimal quiz model: a discipline owns questions, each question owns
//! answer options marked correct or incorrect, and multiple-choice questions
//! check whether a selection matches the correct options exactly.
//!
//! ## Usage
//!
//! ```rust
//! use discipline_quiz::{AnswerOption, Discipline, Question};
//!
//! let mut question = Question::multiple_choice("Which types are built in?");
//! question.add_answer_option(AnswerOption::new("int", true));
//! question.add_answer_option(AnswerOption::new("float", true));
//! question.add_answer_option(AnswerOption::new("string", false));
//! assert!(question.check_answer(&[0, 1]));
//!
//! let mut discipline = Discipline::new("C++");
//! discipline.add_question(question);
//! assert!(discipline.to_string().starts_with("Дисциплина: C++\n"));
//! ```

mod data;
mod models;
pub mod report;

use std::io::{self, Write};
use std::path::Path;

pub use data::{LoadError, load_quiz_from_json, sample_answers, sample_discipline};
pub use models::{AnswerCheck, AnswerOption, CORRECT_MARKER, Discipline, Question, QuestionKind};

/// Error type for quiz operations.
#[derive(Debug)]
pub enum QuizError {
    /// Error loading a quiz file.
    Load(LoadError),
    /// IO error while writing the report.
    Io(io::Error),
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizError::Load(e) => write!(f, "Failed to load quiz: {}", e),
            QuizError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::Load(e) => Some(e),
            QuizError::Io(e) => Some(e),
        }
    }
}

impl From<LoadError> for QuizError {
    fn from(err: LoadError) -> Self {
        QuizError::Load(err)
    }
}

impl From<io::Error> for QuizError {
    fn from(err: io::Error) -> Self {
        QuizError::Io(err)
    }
}

/// A discipline together with the answer selections to check against it.
pub struct Quiz {
    discipline: Discipline,
    answers: Vec<AnswerCheck>,
}

impl Quiz {
    pub fn new(discipline: Discipline, answers: Vec<AnswerCheck>) -> Self {
        Self {
            discipline,
            answers,
        }
    }

    /// The built-in C++ discipline with its two hard-coded selections.
    pub fn sample() -> Self {
        Self::new(sample_discipline(), sample_answers())
    }

    /// Load a quiz from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use discipline_quiz::Quiz;
    ///
    /// let quiz = Quiz::from_json("quiz.json").expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let (discipline, answers) = load_quiz_from_json(path)?;
        Ok(Self::new(discipline, answers))
    }

    pub fn discipline(&self) -> &Discipline {
        &self.discipline
    }

    pub fn answers(&self) -> &[AnswerCheck] {
        &self.answers
    }

    /// Verdict for each answer, in answer-sheet order.
    ///
    /// Answers that refer to a missing question are skipped.
    pub fn verdicts(&self) -> Vec<(usize, bool)> {
        report::verdicts(&self.discipline, &self.answers)
    }

    /// Write the discipline and the verdict lines.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<(), QuizError> {
        report::write_report(out, &self.discipline, &self.answers)?;
        Ok(())
    }

    /// Print the discipline and the verdict lines to stdout.
    pub fn run(&self) -> Result<(), QuizError> {
        self.discipline.display();
        let stdout = io::stdout();
        let mut out = stdout.lock();
        report::write_verdicts(&mut out, &self.verdicts())?;
        Ok(())
    }
}
