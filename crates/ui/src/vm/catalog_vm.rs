use quantum_core::model::{Olympiad, Progress, Quiz};

/// Card in the tests list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizCardVm {
    pub id: String,
    pub title: String,
    pub subject: String,
    pub description: String,
    pub question_count: usize,
    /// How many times the quiz has been completed.
    pub completions: usize,
}

#[must_use]
pub fn map_quiz_cards(quizzes: &[Quiz], progress: &Progress) -> Vec<QuizCardVm> {
    quizzes
        .iter()
        .map(|quiz| QuizCardVm {
            id: quiz.id().as_str().to_owned(),
            title: quiz.title().to_owned(),
            subject: quiz.subject().to_owned(),
            description: quiz.description().to_owned(),
            question_count: quiz.question_count(),
            completions: progress.completions(quiz.id()),
        })
        .collect()
}

/// "Открыта до 15 Сентября" from "15 Сентября 2024".
#[must_use]
pub fn registration_label(olympiad: &Olympiad) -> String {
    let day_month: Vec<&str> = olympiad.date.split_whitespace().take(2).collect();
    format!("Открыта до {}", day_month.join(" "))
}
