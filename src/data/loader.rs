use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::models::{AnswerCheck, Discipline};

/// Error raised while loading a quiz file.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Read { path: PathBuf, source: io::Error },
    /// The file is not a valid quiz document.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// An answer refers to a question the discipline does not have.
    UnknownQuestion { index: usize, total: usize },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Read { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            LoadError::Parse { path, source } => {
                write!(f, "failed to parse {}: {}", path.display(), source)
            }
            LoadError::UnknownQuestion { index, total } => write!(
                f,
                "answer refers to question {} but the discipline has {} question(s)",
                index, total
            ),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Read { source, .. } => Some(source),
            LoadError::Parse { source, .. } => Some(source),
            LoadError::UnknownQuestion { .. } => None,
        }
    }
}

/// On-disk quiz document: a discipline plus an optional answer sheet.
#[derive(Deserialize)]
struct QuizFile {
    #[serde(flatten)]
    discipline: Discipline,
    #[serde(default)]
    answers: Vec<AnswerCheck>,
}

pub fn load_quiz_from_json<P: AsRef<Path>>(
    path: P,
) -> Result<(Discipline, Vec<AnswerCheck>), LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let quiz = parse_quiz(path, &json_content)?;

    debug!(
        path = %path.display(),
        questions = quiz.0.questions().len(),
        answers = quiz.1.len(),
        "loaded quiz"
    );
    Ok(quiz)
}

fn parse_quiz(path: &Path, json: &str) -> Result<(Discipline, Vec<AnswerCheck>), LoadError> {
    let file: QuizFile = serde_json::from_str(json).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let total = file.discipline.questions().len();
    if let Some(check) = file.answers.iter().find(|check| check.question >= total) {
        return Err(LoadError::UnknownQuestion {
            index: check.question,
            total,
        });
    }

    Ok((file.discipline, file.answers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionKind;

    const QUIZ: &str = r#"{
        "name": "Rust",
        "questions": [
            {
                "text": "Which types are Copy?",
                "kind": "multiple_choice",
                "options": [
                    {"text": "u8", "correct": true},
                    {"text": "String", "correct": false}
                ]
            },
            {"text": "Basic", "options": []}
        ],
        "answers": [{"question": 0, "selected": [0]}]
    }"#;

    #[test]
    fn test_parse_quiz() {
        let (discipline, answers) = parse_quiz(Path::new("quiz.json"), QUIZ).unwrap();
        assert_eq!(discipline.name(), "Rust");
        assert_eq!(discipline.questions().len(), 2);
        assert_eq!(discipline.questions()[0].kind(), QuestionKind::MultipleChoice);
        assert_eq!(discipline.questions()[1].kind(), QuestionKind::Basic);
        assert_eq!(answers, vec![AnswerCheck::new(0, vec![0])]);
    }

    #[test]
    fn test_answers_are_optional() {
        let (discipline, answers) =
            parse_quiz(Path::new("quiz.json"), r#"{"name": "Empty"}"#).unwrap();
        assert!(discipline.questions().is_empty());
        assert!(answers.is_empty());
    }

    #[test]
    fn test_unknown_question_is_rejected() {
        let json = r#"{"name": "D", "questions": [], "answers": [{"question": 2}]}"#;
        match parse_quiz(Path::new("quiz.json"), json) {
            Err(LoadError::UnknownQuestion { index, total }) => {
                assert_eq!((index, total), (2, 0));
            }
            other => panic!("expected UnknownQuestion, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_json_names_the_file() {
        let err = parse_quiz(Path::new("broken.json"), "{\"name\": 1}").unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
        assert!(err.to_string().starts_with("failed to parse broken.json"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_quiz_from_json("does/not/exist.json").unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
        assert!(err.to_string().contains("does/not/exist.json"));
    }
}
