//! lightbnb CLI - query and update the LightBnB store
//!
//! This is the command-line entry point over `lightbnb-db`, which provides:
//! - Property search with owner/city/price/rating filters (`properties search`)
//! - Property insertion from JSON (`properties add`)
//! - Guest reservation listing (`reservations`)
//! - User lookup and registration (`user`)

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod output;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "lightbnb",
    author,
    version,
    about = "Query the LightBnB property rental database",
    long_about = "Search property listings with optional owner, city, price, and rating filters, \
                  list guest reservations, and manage users against a LightBnB Postgres database."
)]
struct Cli {
    /// Config file (default: ~/.lightbnb/config.toml if present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Postgres connection string (overrides config and DATABASE_URL)
    #[arg(long, global = true, value_name = "URL")]
    database_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search and add properties
    Properties(commands::properties::PropertiesArgs),
    /// List reservations for a guest
    Reservations(commands::reservations::ReservationsArgs),
    /// Look up and register users
    User(commands::users::UserArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Before tracing, so RUST_LOG can come from a .env file.
    let dotenv = config::load_dotenv();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;
    dotenv.iter().for_each(config::DotenvStatus::log);

    let settings = config::resolve(cli.config.as_deref(), cli.database_url.as_deref())?;

    match cli.command {
        Commands::Properties(args) => commands::run_properties(args, &settings).await,
        Commands::Reservations(args) => commands::run_reservations(args, &settings).await,
        Commands::User(args) => commands::run_user(args, &settings).await,
    }
}
