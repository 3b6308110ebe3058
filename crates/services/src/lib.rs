#![forbid(unsafe_code)]

pub mod app_services;
pub mod assistant;
pub mod chat_service;
pub mod error;
pub mod progress_ledger;
pub mod quiz_runner;

pub use quantum_core::Clock;

pub use app_services::AppServices;
pub use assistant::{AssistantClient, AssistantService, assistant_settings_from_env};
pub use chat_service::ChatService;
pub use error::{AppServicesError, AssistantError, ProgressError, QuizRunnerError};
pub use progress_ledger::ProgressLedger;
pub use quiz_runner::{QuizAnswerResult, QuizRunner, QuizService};
