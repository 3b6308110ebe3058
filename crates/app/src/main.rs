mod cli;
mod db_url;

use std::sync::Arc;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quantum_core::Catalog;
use quantum_core::model::Progress;
use services::{
    AppServices, ChatService, Clock, ProgressLedger, QuizService, assistant_settings_from_env,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

use crate::cli::{Cli, Commands};
use crate::db_url::{normalize_sqlite_url, prepare_sqlite_file};

struct DesktopApp {
    services: AppServices,
    initial_progress: Progress,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Arc<Catalog> {
        self.services.catalog()
    }

    fn ledger(&self) -> Arc<ProgressLedger> {
        self.services.ledger()
    }

    fn quizzes(&self) -> Arc<QuizService> {
        self.services.quizzes()
    }

    fn chat(&self) -> Arc<ChatService> {
        self.services.chat()
    }

    fn initial_progress(&self) -> Progress {
        self.initial_progress.clone()
    }

    fn assistant_enabled(&self) -> bool {
        self.services.assistant_enabled()
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn print_progress(progress: &Progress) {
    println!("xp:     {}", progress.xp());
    println!("level:  {}", progress.level());
    println!("rank:   {}", progress.rank());
    println!("next:   {} xp", progress.xp_to_next_level());
    if progress.completed_quizzes().is_empty() {
        println!("completed: none");
    } else {
        println!("completed:");
        for quiz_id in progress.completed_quizzes() {
            println!("  {quiz_id}");
        }
    }
}

fn print_quizzes(catalog: &Catalog, progress: &Progress) {
    for quiz in catalog.quizzes() {
        let runs = progress.completions(quiz.id());
        println!(
            "{:<16} {:<12} {:>2} questions  {}x  {}",
            quiz.id(),
            quiz.subject(),
            quiz.question_count(),
            runs,
            quiz.title()
        );
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let db_url = normalize_sqlite_url(cli.db.clone());

    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    prepare_sqlite_file(&db_url)?;
    let settings = assistant_settings_from_env()?;
    let services = AppServices::new_sqlite(&db_url, Clock::system(), settings).await?;
    tracing::info!(db = %db_url, command = ?cli.command(), "services ready");

    match cli.command() {
        Commands::Ui => {
            let initial_progress = services.ledger().snapshot().await;
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                services,
                initial_progress,
            });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Quantum EC")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Commands::Progress => {
            print_progress(&services.ledger().snapshot().await);
            Ok(())
        }
        Commands::Reset => {
            let progress = services.ledger().reset().await?;
            println!("progress reset");
            print_progress(&progress);
            Ok(())
        }
        Commands::Quizzes => {
            let progress = services.ledger().snapshot().await;
            print_quizzes(&services.catalog(), &progress);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
