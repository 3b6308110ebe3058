use thiserror::Error;

use crate::model::{AssistantSettingsError, AttemptError, QuizError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Attempt(#[from] AttemptError),
    #[error(transparent)]
    AssistantSettings(#[from] AssistantSettingsError),
}
