use std::path::PathBuf;

use bankdir::server::{
    config::Config,
    error::Error,
    model::app::AppState,
    router,
    service::{import::ImportService, seed::SeedService},
    startup,
};
use clap::{Parser, Subcommand};
use dioxus_logger::tracing::{self, Level};

/// Bank and branch directory lookup service
#[derive(Parser)]
#[command(name = "bankdir", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the HTTP API (default)
    Serve,
    /// Replace the directory with the banks and branches of a CSV file
    Import {
        /// Path to a CSV file with the columns
        /// ifsc, bank_id, branch, address, city, district, state, bank_name
        file: PathBuf,
    },
    /// Replace the directory with a small set of sample banks and branches
    Seed,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cli.command.unwrap_or(Command::Serve), config).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(command: Command, config: Config) -> Result<(), Error> {
    let db = startup::connect_to_database(&config).await?;

    match command {
        Command::Serve => {
            let listener = startup::bind_listener(&config).await?;
            let app = router::routes().with_state(AppState {
                db,
                page_size: config.page_size,
            });

            tracing::info!("Starting server");

            axum::serve(listener, app).await?;
        }
        Command::Import { file } => {
            let summary = ImportService::new(&db).import_file(&file).await?;

            tracing::info!(
                "Successfully loaded {} banks and {} branches",
                summary.banks_created,
                summary.branches_created
            );
        }
        Command::Seed => {
            let (banks, branches) = SeedService::new(&db).seed().await?;

            tracing::info!("Successfully created {} banks and {} branches", banks, branches);
        }
    }

    Ok(())
}
