use std::sync::Arc;

use dioxus::prelude::*;
use quantum_core::Catalog;
use quantum_core::model::Progress;
use services::{ChatService, ProgressLedger, QuizService};

pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<Catalog>;
    fn ledger(&self) -> Arc<ProgressLedger>;
    fn quizzes(&self) -> Arc<QuizService>;
    fn chat(&self) -> Arc<ChatService>;

    /// Ledger snapshot taken before the window opened.
    fn initial_progress(&self) -> Progress;
    fn assistant_enabled(&self) -> bool;
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<Catalog>,
    ledger: Arc<ProgressLedger>,
    quizzes: Arc<QuizService>,
    chat: Arc<ChatService>,
    initial_progress: Progress,
    assistant_enabled: bool,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            ledger: app.ledger(),
            quizzes: app.quizzes(),
            chat: app.chat(),
            initial_progress: app.initial_progress(),
            assistant_enabled: app.assistant_enabled(),
        }
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
    pub fn initial_progress(&self) -> Progress {
        self.initial_progress.clone()
    }

    #[must_use]
    pub fn assistant_enabled(&self) -> bool {
        self.assistant_enabled
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// Reactive copy of the ledger shared by the badge, home card and quiz player.
#[derive(Clone, Copy, PartialEq)]
pub struct ProgressState(Signal<Progress>);

impl ProgressState {
    #[must_use]
    pub fn get(&self) -> Progress {
        self.0.read().clone()
    }

    pub fn set(&mut self, progress: Progress) {
        self.0.set(progress);
    }
}

/// Provide `ProgressState` seeded from the context's initial snapshot.
pub fn use_progress_provider() -> ProgressState {
    let ctx = use_context::<AppContext>();
    use_context_provider(move || ProgressState(Signal::new(ctx.initial_progress())))
}

#[must_use]
pub fn use_progress() -> ProgressState {
    use_context::<ProgressState>()
}
