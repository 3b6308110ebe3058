use thiserror::Error;

use crate::model::progress::xp_for_score;
use crate::model::quiz::{Question, Quiz};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AttemptError {
    #[error("attempt already completed")]
    AlreadyCompleted,

    #[error("option {option} is not valid for a question with {options} options")]
    InvalidOption { option: usize, options: usize },
}

/// Where a single attempt currently stands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttemptState {
    InProgress { step: usize, answers: Vec<usize> },
    Completed { score: u32, answers: Vec<usize> },
}

/// Scored result of a completed attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttemptResult {
    pub score: u32,
    pub question_count: usize,
    pub percentage: u32,
    pub xp_gained: u64,
}

impl AttemptResult {
    #[must_use]
    pub fn new(score: u32, question_count: usize) -> Self {
        Self {
            score,
            question_count,
            percentage: percentage(score, question_count),
            xp_gained: xp_for_score(score),
        }
    }
}

/// Outcome of submitting one answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// Moved on to the question at `step`.
    Advanced { step: usize },
    /// The last question was answered.
    Completed(AttemptResult),
}

/// Rounded share of correct answers, 0..=100. A zero-question count yields 0.
#[must_use]
pub fn percentage(score: u32, question_count: usize) -> u32 {
    if question_count == 0 {
        return 0;
    }
    let count = u64::try_from(question_count).unwrap_or(u64::MAX);
    let scaled = u64::from(score).saturating_mul(100);
    // round half up, matching Math.round for non-negative values
    let rounded = scaled.saturating_mul(2).saturating_add(count) / count.saturating_mul(2);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

/// One run-through of a quiz, from the first question to the result screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attempt {
    quiz: Quiz,
    state: AttemptState,
}

impl Attempt {
    #[must_use]
    pub fn new(quiz: Quiz) -> Self {
        Self {
            quiz,
            state: AttemptState::InProgress {
                step: 0,
                answers: Vec::new(),
            },
        }
    }

    #[must_use]
    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    #[must_use]
    pub fn state(&self) -> &AttemptState {
        &self.state
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self.state, AttemptState::Completed { .. })
    }

    /// Zero-based index of the question being shown; `None` once completed.
    #[must_use]
    pub fn step(&self) -> Option<usize> {
        match &self.state {
            AttemptState::InProgress { step, .. } => Some(*step),
            AttemptState::Completed { .. } => None,
        }
    }

    #[must_use]
    pub fn answers(&self) -> &[usize] {
        match &self.state {
            AttemptState::InProgress { answers, .. } | AttemptState::Completed { answers, .. } => {
                answers
            }
        }
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.step().and_then(|step| self.quiz.question(step))
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.quiz.question_count()
    }

    /// Fraction of the progress bar to fill, counting the current question.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_fraction(&self) -> f32 {
        let total = self.question_count();
        if total == 0 {
            return 0.0;
        }
        let shown = self.step().map_or(total, |step| step + 1);
        shown as f32 / total as f32
    }

    /// Result of the attempt once completed.
    #[must_use]
    pub fn result(&self) -> Option<AttemptResult> {
        match &self.state {
            AttemptState::Completed { score, .. } => {
                Some(AttemptResult::new(*score, self.question_count()))
            }
            AttemptState::InProgress { .. } => None,
        }
    }

    /// Record the selected option for the current question and advance.
    ///
    /// Answering the last question completes the attempt and scores it.
    ///
    /// # Errors
    ///
    /// Returns `AttemptError::AlreadyCompleted` once the attempt is finished,
    /// and `AttemptError::InvalidOption` if `option` is not an index into the
    /// current question's options.
    pub fn submit_answer(&mut self, option: usize) -> Result<AttemptOutcome, AttemptError> {
        let AttemptState::InProgress { step, answers } = &mut self.state else {
            return Err(AttemptError::AlreadyCompleted);
        };
        let Some(question) = self.quiz.question(*step) else {
            return Err(AttemptError::AlreadyCompleted);
        };
        if !question.has_option(option) {
            return Err(AttemptError::InvalidOption {
                option,
                options: question.options().len(),
            });
        }

        answers.push(option);
        if *step + 1 < self.quiz.question_count() {
            *step += 1;
            return Ok(AttemptOutcome::Advanced { step: *step });
        }

        let answers = std::mem::take(answers);
        let score = self.quiz.score(&answers);
        self.state = AttemptState::Completed { score, answers };
        Ok(AttemptOutcome::Completed(AttemptResult::new(
            score,
            self.quiz.question_count(),
        )))
    }

    /// Reset to the first question with no answers.
    pub fn restart(&mut self) {
        self.state = AttemptState::InProgress {
            step: 0,
            answers: Vec::new(),
        };
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
