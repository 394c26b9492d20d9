//! Console rendering of a discipline and its answer verdicts.

use std::io::{self, Write};

use crate::models::{AnswerCheck, Discipline};

const ORDINALS: [&str; 10] = [
    "первый",
    "второй",
    "третий",
    "четвёртый",
    "пятый",
    "шестой",
    "седьмой",
    "восьмой",
    "девятый",
    "десятый",
];

const VERDICT_CORRECT: &str = "правильный";
const VERDICT_WRONG: &str = "неправильный";

/// Russian ordinal for a 0-based question position.
pub fn ordinal(index: usize) -> String {
    ORDINALS
        .get(index)
        .map(|word| word.to_string())
        .unwrap_or_else(|| format!("{}-й", index + 1))
}

pub fn verdict_line(index: usize, is_correct: bool) -> String {
    let verdict = if is_correct {
        VERDICT_CORRECT
    } else {
        VERDICT_WRONG
    };
    format!("Ответ на {} вопрос {}", ordinal(index), verdict)
}

/// Verdict for each answer, in answer-sheet order, keyed by question position.
///
/// Answers pointing past the last question are skipped.
pub fn verdicts(discipline: &Discipline, answers: &[AnswerCheck]) -> Vec<(usize, bool)> {
    answers
        .iter()
        .filter_map(|check| {
            discipline
                .question(check.question)
                .map(|q| (check.question, q.check_answer(&check.selected)))
        })
        .collect()
}

pub fn write_verdicts<W: Write>(out: &mut W, verdicts: &[(usize, bool)]) -> io::Result<()> {
    for &(index, is_correct) in verdicts {
        writeln!(out, "{}", verdict_line(index, is_correct))?;
    }
    out.flush()
}

/// Write the discipline followed by one verdict line per answer.
pub fn write_report<W: Write>(
    out: &mut W,
    discipline: &Discipline,
    answers: &[AnswerCheck],
) -> io::Result<()> {
    write!(out, "{}", discipline)?;
    write_verdicts(out, &verdicts(discipline, answers))
}
