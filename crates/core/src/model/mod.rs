mod app_settings;
mod attempt;
mod catalog;
mod chat;
mod ids;
mod progress;
mod quiz;

pub use app_settings::{
    AssistantSettings, AssistantSettingsDraft, AssistantSettingsError, DEFAULT_ASSISTANT_BASE_URL,
    DEFAULT_ASSISTANT_MODEL, DEFAULT_SYSTEM_INSTRUCTION,
};
pub use attempt::{Attempt, AttemptError, AttemptOutcome, AttemptResult, AttemptState, percentage};
pub use catalog::{Course, Olympiad, Teacher};
pub use chat::{ChatMessage, ChatRole, ChatTranscript, EMPTY_REPLY, FALLBACK_REPLY, GREETING};
pub use ids::{CourseId, OlympiadId, ParseIdError, QuestionId, QuizId, TeacherId};
pub use progress::{
    Progress, Rank, XP_PER_CORRECT_ANSWER, XP_PER_LEVEL, level_for_xp, xp_for_score,
};
pub use quiz::{Question, QuestionDraft, Quiz, QuizDraft, QuizError};
