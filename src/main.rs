use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::api::{self, AppState};
use expense_tracker::cli::{handle_config_command, handle_summary_command};
use expense_tracker::config::{paths::ExpensePaths, settings::Settings};
use expense_tracker::logging::init_tracing;
use expense_tracker::models::SystemClock;
use expense_tracker::storage::JsonRecordStore;

#[derive(Parser)]
#[command(
    name = "expense-tracker",
    author = "Kaylee Beyene",
    version,
    about = "Personal expense tracking web service",
    long_about = "Records dated expenses by category, compares the current month \
                  against a per-category budget and your monthly income, and \
                  serves the analysis, saving tips and charts over a JSON API."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API (the default)
    Serve {
        /// Address to listen on, e.g. 127.0.0.1:5000
        #[arg(long, env = "EXPENSE_TRACKER_LISTEN_ADDR")]
        addr: Option<String>,
        /// Directory of static front-end files
        #[arg(long, env = "EXPENSE_TRACKER_STATIC_DIR")]
        static_dir: Option<PathBuf>,
    },

    /// Print this month's analysis and tips
    Summary,

    /// Show current configuration and paths
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?.apply_env_overrides();

    match cli.command {
        Some(Commands::Serve { addr, static_dir }) => {
            let mut settings = settings;
            if let Some(addr) = addr {
                settings.listen_addr = addr;
            }
            if static_dir.is_some() {
                settings.static_dir = static_dir;
            }
            run_server(&paths, &settings).await?;
        }
        None => run_server(&paths, &settings).await?,
        Some(Commands::Summary) => {
            let store = JsonRecordStore::new(&paths)?;
            handle_summary_command(&store, &SystemClock, &settings)?;
        }
        Some(Commands::Config) => handle_config_command(&paths, &settings),
    }

    Ok(())
}

async fn run_server(paths: &ExpensePaths, settings: &Settings) -> Result<()> {
    let store = JsonRecordStore::new(paths)?;
    tracing::info!(data_dir = %paths.data_dir().display(), "Using data directory");

    let state = AppState::new(Arc::new(store), Arc::new(SystemClock));
    api::serve(state, settings).await
}
