use thiserror::Error;

use crate::model::ids::{QuestionId, QuizId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("quiz id cannot be empty")]
    EmptyId,

    #[error("quiz title cannot be empty")]
    EmptyTitle,

    #[error("quiz {0} has no questions")]
    NoQuestions(QuizId),

    #[error("question {0} text cannot be empty")]
    EmptyQuestionText(QuestionId),

    #[error("question {0} has no options")]
    NoOptions(QuestionId),

    #[error("question {id} correct answer {index} is out of range for {options} options")]
    CorrectAnswerOutOfRange {
        id: QuestionId,
        index: usize,
        options: usize,
    },

    #[error("duplicate quiz id: {0}")]
    DuplicateId(QuizId),

    #[error("unknown quiz: {0}")]
    UnknownQuiz(QuizId),
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// Unvalidated question as authored in the quiz bank.
#[derive(Clone, Debug, Default)]
pub struct QuestionDraft {
    pub id: u32,
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
}

impl QuestionDraft {
    #[must_use]
    pub fn new(
        id: u32,
        text: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
        correct_answer: usize,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct_answer,
        }
    }

    /// Validate the draft into a `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` if the text is blank, there are no options, or the
    /// correct answer does not index into the options.
    pub fn validate(self) -> Result<Question, QuizError> {
        let id = QuestionId::new(self.id);
        let text = self.text.trim().to_owned();
        if text.is_empty() {
            return Err(QuizError::EmptyQuestionText(id));
        }
        if self.options.is_empty() {
            return Err(QuizError::NoOptions(id));
        }
        if self.correct_answer >= self.options.len() {
            return Err(QuizError::CorrectAnswerOutOfRange {
                id,
                index: self.correct_answer,
                options: self.options.len(),
            });
        }

        Ok(Question {
            id,
            text,
            options: self.options,
            correct_answer: self.correct_answer,
        })
    }
}

/// A single multiple-choice question with exactly one correct option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    text: String,
    options: Vec<String>,
    correct_answer: usize,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Zero-based index of the correct option.
    #[must_use]
    pub fn correct_answer(&self) -> usize {
        self.correct_answer
    }

    #[must_use]
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_answer
    }

    #[must_use]
    pub fn has_option(&self, option: usize) -> bool {
        option < self.options.len()
    }
}

//
// ─── QUIZ ──────────────────────────────────────────────────────────────────────
//

/// Unvalidated quiz as authored in the quiz bank.
#[derive(Clone, Debug, Default)]
pub struct QuizDraft {
    pub id: String,
    pub title: String,
    pub subject: String,
    pub description: String,
    pub questions: Vec<QuestionDraft>,
}

impl QuizDraft {
    /// Validate the draft into an immutable `Quiz`.
    ///
    /// A quiz without questions is rejected here, so the runner never has to
    /// score an empty attempt.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` for a blank id/title, an empty question list, or any
    /// invalid question.
    pub fn validate(self) -> Result<Quiz, QuizError> {
        let id = self.id.trim().to_owned();
        if id.is_empty() {
            return Err(QuizError::EmptyId);
        }
        let title = self.title.trim().to_owned();
        if title.is_empty() {
            return Err(QuizError::EmptyTitle);
        }
        let id = QuizId::new(id);
        if self.questions.is_empty() {
            return Err(QuizError::NoQuestions(id));
        }

        let questions = self
            .questions
            .into_iter()
            .map(QuestionDraft::validate)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Quiz {
            id,
            title,
            subject: self.subject.trim().to_owned(),
            description: self.description.trim().to_owned(),
            questions,
        })
    }
}

/// An ordered set of questions on one subject.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quiz {
    id: QuizId,
    title: String,
    subject: String,
    description: String,
    questions: Vec<Question>,
}

impl Quiz {
    #[must_use]
    pub fn id(&self) -> &QuizId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question(&self, step: usize) -> Option<&Question> {
        self.questions.get(step)
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Count positions where the submitted answer matches the correct option.
    ///
    /// Extra answers beyond the question list are ignored.
    #[must_use]
    pub fn score(&self, answers: &[usize]) -> u32 {
        let correct = self
            .questions
            .iter()
            .zip(answers)
            .filter(|(question, answer)| question.is_correct(**answer))
            .count();
        u32::try_from(correct).unwrap_or(u32::MAX)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
