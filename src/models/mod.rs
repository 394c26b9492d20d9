mod answer_check;
mod answer_option;
mod discipline;
mod question;

pub use answer_check::AnswerCheck;
pub use answer_option::{AnswerOption, CORRECT_MARKER};
pub use discipline::Discipline;
pub use question::{Question, QuestionKind};
