mod loader;
mod sample;

pub use loader::{load_quiz_from_json, LoadError};
pub use sample::{sample_answers, sample_discipline};
