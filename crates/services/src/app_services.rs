use std::sync::Arc;

use quantum_core::Catalog;
use quantum_core::model::AssistantSettings;
use storage::repository::Storage;

use crate::Clock;
use crate::assistant::{AssistantClient, AssistantService};
use crate::chat_service::ChatService;
use crate::error::AppServicesError;
use crate::progress_ledger::ProgressLedger;
use crate::quiz_runner::QuizService;

/// Assembles app-facing services around one storage backend.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<Catalog>,
    ledger: Arc<ProgressLedger>,
    quizzes: Arc<QuizService>,
    chat: Arc<ChatService>,
    assistant_enabled: bool,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization, catalog
    /// validation or progress loading fails.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        settings: AssistantSettings,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        let assistant = AssistantService::new(settings);
        let enabled = assistant.enabled();
        Self::from_storage(&storage, clock, Arc::new(assistant), enabled).await
    }

    /// Build services over an existing storage and assistant.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the builtin catalog is invalid or the
    /// progress snapshot cannot be read.
    pub async fn from_storage(
        storage: &Storage,
        clock: Clock,
        assistant: Arc<dyn AssistantClient>,
        assistant_enabled: bool,
    ) -> Result<Self, AppServicesError> {
        let catalog = Arc::new(Catalog::builtin()?);
        let ledger = Arc::new(ProgressLedger::load(Arc::clone(&storage.kv)).await?);
        let quizzes = Arc::new(QuizService::new(Arc::clone(&catalog), Arc::clone(&ledger)));
        let chat = Arc::new(ChatService::new(clock, assistant));

        if !assistant_enabled {
            tracing::info!("assistant disabled: no API key configured");
        }

        Ok(Self {
            catalog,
            ledger,
            quizzes,
            chat,
            assistant_enabled,
        })
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn ledger(&self) -> Arc<ProgressLedger> {
        Arc::clone(&self.ledger)
    }

    #[must_use]
    pub fn quizzes(&self) -> Arc<QuizService> {
        Arc::clone(&self.quizzes)
    }

    #[must_use]
    pub fn chat(&self) -> Arc<ChatService> {
        Arc::clone(&self.chat)
    }

    #[must_use]
    pub fn assistant_enabled(&self) -> bool {
        self.assistant_enabled
    }
}
