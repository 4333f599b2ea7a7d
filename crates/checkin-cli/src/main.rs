//! Check-In CLI
//!
//! Terminal client for the vehicle check-in service.
//!
//! # Usage
//!
//! ```bash
//! checkin draft set plateNumber а123вв99
//! checkin draft show
//! checkin submit
//! checkin draft clear
//! checkin config set --api-url http://127.0.0.1:8080/api/v1
//! ```

use clap::{Parser, Subcommand};

mod commands;
mod config;
mod sink;

use config::Config;

#[derive(Parser)]
#[command(name = "checkin")]
#[command(version = "0.1.0")]
#[command(about = "Vehicle check-in client", long_about = None)]
struct Cli {
    /// API endpoint URL
    #[arg(long, env = "CHECKIN_API_URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Edit the in-progress draft
    Draft {
        #[command(subcommand)]
        action: DraftCommands,
    },
    /// Validate the draft and submit it
    Submit(commands::submit::SubmitArgs),
    /// Configure the CLI
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum DraftCommands {
    /// Set one field (input runs through the field's formatter)
    Set { field: String, value: String },
    /// Show current draft values
    Show,
    /// Cancel: wipe the draft and start over
    Clear,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the stored configuration
    Show,
    /// Update configuration values
    Set {
        #[arg(long)]
        api_url: Option<String>,
        #[arg(long)]
        draft_path: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .init();

    let cli = Cli::parse();

    let config = Config::load().unwrap_or_else(|err| {
        eprintln!("Warning: {}, using defaults", err);
        Config::default()
    });
    let api_url = cli
        .api_url
        .or_else(|| config.api_url.clone())
        .unwrap_or_else(|| "http://127.0.0.1:8080/api/v1".to_string());

    let result = match cli.command {
        Commands::Draft { action } => match action {
            DraftCommands::Set { field, value } => commands::draft::set(&config, &field, &value),
            DraftCommands::Show => commands::draft::show(&config),
            DraftCommands::Clear => commands::draft::clear(&config),
        },
        Commands::Submit(args) => commands::submit::handle(&config, &api_url, args).await,
        Commands::Config { action } => match action {
            ConfigCommands::Show => commands::config::show(&config),
            ConfigCommands::Set { api_url, draft_path } => {
                commands::config::set(config, api_url, draft_path)
            }
        },
    };

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
