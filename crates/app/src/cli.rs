use clap::{Parser, Subcommand};

pub const DEFAULT_DB_URL: &str = "sqlite://dev.sqlite3";

/// Quantum EC desktop app and progress tools.
#[derive(Parser, Debug)]
#[command(name = "app")]
#[command(about = "Quantum EC learning portal", long_about = None)]
pub struct Cli {
    /// SQLite database url or file path
    #[arg(long, global = true, env = "QUANTUM_DB_URL", default_value = DEFAULT_DB_URL)]
    pub db: String,

    /// Subcommand (launches the desktop UI when omitted)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Launch the desktop UI
    Ui,
    /// Print the stored progress snapshot
    Progress,
    /// Reset stored progress to level 1
    Reset,
    /// List the quiz bank
    Quizzes,
}

impl Cli {
    pub fn command(&self) -> Commands {
        self.command.unwrap_or(Commands::Ui)
    }
}
