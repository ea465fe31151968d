//! Properties command - search listings and add new properties

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use lightbnb_db::query::properties;
use lightbnb_db::{DbConfig, FilterOptions, NewProperty, PropertyRepo, DEFAULT_LIMIT};
use rust_decimal::Decimal;
use tracing::info;

use super::connect;
use crate::output;

#[derive(Parser, Debug)]
#[command(about = "Search and add properties")]
pub struct PropertiesArgs {
    #[command(subcommand)]
    pub command: PropertiesCommand,
}

#[derive(Subcommand, Debug)]
pub enum PropertiesCommand {
    /// Search properties, cheapest first
    Search(SearchArgs),
    /// Add a property from a JSON file
    Add {
        /// Path to the property JSON (cost_per_night in dollars)
        #[arg(long, short = 'f')]
        file: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Only properties owned by this user id
    #[arg(long)]
    pub owner_id: Option<i32>,
    /// City name substring
    #[arg(long)]
    pub city: Option<String>,
    /// Minimum price per night, in dollars
    #[arg(long, value_name = "DOLLARS")]
    pub min_price: Option<Decimal>,
    /// Maximum price per night, in dollars
    #[arg(long, value_name = "DOLLARS")]
    pub max_price: Option<Decimal>,
    /// Minimum average rating
    #[arg(long)]
    pub min_rating: Option<f64>,
    /// Number of results to return
    #[arg(long, short = 'n', default_value_t = DEFAULT_LIMIT)]
    pub limit: i64,
    /// Print the generated SQL and parameters without connecting
    #[arg(long)]
    pub dry_run: bool,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl SearchArgs {
    fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            owner_id: self.owner_id,
            city: self.city.clone(),
            min_price: self.min_price,
            max_price: self.max_price,
            min_rating: self.min_rating,
        }
    }
}

pub async fn run_properties(args: PropertiesArgs, config: &DbConfig) -> Result<()> {
    match args.command {
        PropertiesCommand::Search(search) => run_search(search, config).await,
        PropertiesCommand::Add { file, json } => run_add(&file, json, config).await,
    }
}

async fn run_search(args: SearchArgs, config: &DbConfig) -> Result<()> {
    let options = args.filter_options();
    options.validate().context("Invalid search filters")?;

    if args.dry_run {
        output::print_statement(&properties::search(&options, Some(args.limit)));
        return Ok(());
    }

    let executor = connect(config).await?;
    let listings = PropertyRepo::new(&executor)
        .search(&options, Some(args.limit))
        .await
        .context("Property search failed")?;
    info!("found {} properties", listings.len());

    if args.json {
        output::print_json(&listings)
    } else {
        output::print_listings(&listings);
        Ok(())
    }
}

async fn run_add(file: &Path, json: bool, config: &DbConfig) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let property: NewProperty = serde_json::from_str(&content)
        .with_context(|| format!("Invalid property JSON in {}", file.display()))?;
    property.validate()?;

    let executor = connect(config).await?;
    let created = PropertyRepo::new(&executor)
        .create(&property)
        .await
        .context("Failed to add property")?;

    if json {
        output::print_json(&created)
    } else {
        output::print_property(&created);
        Ok(())
    }
}
