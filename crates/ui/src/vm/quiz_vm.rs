use quantum_core::model::{AttemptOutcome, AttemptResult, Progress, QuizError, QuizId};
use services::{QuizRunner, QuizRunnerError, QuizService};

use crate::views::ViewError;

/// One answer button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub letter: String,
    pub text: String,
}

/// Result screen numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizResultVm {
    pub score: u32,
    pub total: usize,
    pub percentage: u32,
    pub xp_gained: u64,
}

impl From<AttemptResult> for QuizResultVm {
    fn from(result: AttemptResult) -> Self {
        Self {
            score: result.score,
            total: result.question_count,
            percentage: result.percentage,
            xp_gained: result.xp_gained,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizStep {
    Continue,
    Completed(Progress),
}

pub struct QuizVm {
    runner: QuizRunner,
}

impl QuizVm {
    #[must_use]
    pub fn new(runner: QuizRunner) -> Self {
        Self { runner }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.runner.attempt().quiz().title()
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        self.runner.attempt().quiz().subject()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.runner.attempt().is_complete()
    }

    /// "n / N" with a 1-based current question.
    #[must_use]
    pub fn step_label(&self) -> String {
        let attempt = self.runner.attempt();
        let total = attempt.question_count();
        let current = attempt.step().map_or(total, |step| step + 1);
        format!("{current} / {total}")
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn progress_percent(&self) -> u32 {
        (self.runner.attempt().progress_fraction() * 100.0).round() as u32
    }

    #[must_use]
    pub fn question_text(&self) -> Option<&str> {
        self.runner
            .attempt()
            .current_question()
            .map(quantum_core::model::Question::text)
    }

    #[must_use]
    pub fn options(&self) -> Vec<OptionVm> {
        self.runner
            .attempt()
            .current_question()
            .map(|question| {
                question
                    .options()
                    .iter()
                    .enumerate()
                    .map(|(index, text)| OptionVm {
                        index,
                        letter: option_letter(index),
                        text: text.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub fn result(&self) -> Option<QuizResultVm> {
        self.runner.attempt().result().map(QuizResultVm::from)
    }

    /// Completed, but the result has not reached the ledger yet.
    #[must_use]
    pub fn needs_save(&self) -> bool {
        self.runner.has_unrecorded_completion()
    }

    /// # Errors
    ///
    /// Returns `ViewError::ProgressNotSaved` if the completion cannot be
    /// written, and `ViewError::Unknown` if the answer is rejected.
    pub async fn answer(&mut self, option: usize) -> Result<QuizStep, ViewError> {
        let answered = self.runner.answer(option).await.map_err(answer_error)?;
        match (answered.outcome, answered.progress) {
            (AttemptOutcome::Completed(_), Some(progress)) => Ok(QuizStep::Completed(progress)),
            (AttemptOutcome::Completed(_), None) => Err(ViewError::Unknown),
            (AttemptOutcome::Advanced { .. }, _) => Ok(QuizStep::Continue),
        }
    }

    /// Try again to credit a completion whose save failed.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::ProgressNotSaved` if the write fails again.
    pub async fn retry_save(&mut self) -> Result<Option<Progress>, ViewError> {
        self.runner.retry_record().await.map_err(answer_error)
    }

    pub fn restart(&mut self) {
        self.runner.restart();
    }
}

fn answer_error(err: QuizRunnerError) -> ViewError {
    match err {
        QuizRunnerError::Progress(_) => ViewError::ProgressNotSaved,
        _ => ViewError::Unknown,
    }
}

/// A, B, C... for the first 26 options, then 1-based numbers.
#[must_use]
pub fn option_letter(index: usize) -> String {
    u8::try_from(index)
        .ok()
        .filter(|value| *value < 26)
        .map_or_else(|| (index + 1).to_string(), |value| char::from(b'A' + value).to_string())
}

/// # Errors
///
/// Returns `ViewError::QuizNotFound` for an unknown or malformed id.
pub fn start_quiz(quizzes: &QuizService, raw_id: &str) -> Result<QuizVm, ViewError> {
    let quiz_id: QuizId = raw_id.parse().map_err(|_| ViewError::QuizNotFound)?;
    match quizzes.start(&quiz_id) {
        Ok(runner) => Ok(QuizVm::new(runner)),
        Err(QuizRunnerError::Quiz(QuizError::UnknownQuiz(_))) => Err(ViewError::QuizNotFound),
        Err(_) => Err(ViewError::Unknown),
    }
}
