use crate::models::{AnswerCheck, AnswerOption, Discipline, Question};

/// The built-in C++ discipline with two questions.
pub fn sample_discipline() -> Discipline {
    let mut discipline = Discipline::new("Программирование на C++");

    let mut class_question = Question::new("Что такое класс в C++?");
    class_question.add_answer_option(AnswerOption::new("Функция", false));
    class_question.add_answer_option(AnswerOption::new("Тип данных", true));
    class_question.add_answer_option(AnswerOption::new("Переменная", false));

    let mut types_question =
        Question::multiple_choice("Какие из перечисленных типов являются встроенными в C++?");
    types_question.add_answer_option(AnswerOption::new("int", true));
    types_question.add_answer_option(AnswerOption::new("float", true));
    types_question.add_answer_option(AnswerOption::new("string", false));

    discipline.add_question(class_question);
    discipline.add_question(types_question);
    discipline
}

/// Selections checked against the sample discipline.
pub fn sample_answers() -> Vec<AnswerCheck> {
    vec![AnswerCheck::new(0, vec![1]), AnswerCheck::new(1, vec![0, 1])]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionKind;

    #[test]
    fn test_sample_shape() {
        let discipline = sample_discipline();
        let kinds: Vec<_> = discipline.questions().iter().map(Question::kind).collect();
        assert_eq!(kinds, vec![QuestionKind::Basic, QuestionKind::MultipleChoice]);
        assert_eq!(discipline.questions()[0].correct_indices(), vec![1]);
        assert_eq!(discipline.questions()[1].correct_indices(), vec![0, 1]);
    }

    #[test]
    fn test_sample_verdicts() {
        let discipline = sample_discipline();
        let verdicts: Vec<bool> = sample_answers()
            .iter()
            .map(|check| discipline.questions()[check.question].check_answer(&check.selected))
            .collect();
        // The first question has no checking policy of its own.
        assert_eq!(verdicts, vec![false, true]);
    }
}
