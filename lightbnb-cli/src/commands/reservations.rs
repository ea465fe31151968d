//! Reservations command - list a guest's upcoming and past stays

use anyhow::{Context, Result};
use clap::Parser;
use lightbnb_db::{DbConfig, ReservationRepo, DEFAULT_LIMIT};

use super::connect;
use crate::output;

#[derive(Parser, Debug)]
#[command(about = "List reservations for a guest")]
pub struct ReservationsArgs {
    /// Guest user id
    #[arg(long)]
    pub guest_id: i32,
    /// Number of results to return
    #[arg(long, short = 'n', default_value_t = DEFAULT_LIMIT)]
    pub limit: i64,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run_reservations(args: ReservationsArgs, config: &DbConfig) -> Result<()> {
    let executor = connect(config).await?;
    let reservations = ReservationRepo::new(&executor)
        .list_for_guest(args.guest_id, Some(args.limit))
        .await
        .with_context(|| format!("Failed to list reservations for guest {}", args.guest_id))?;

    if args.json {
        output::print_json(&reservations)
    } else {
        output::print_reservations(&reservations);
        Ok(())
    }
}
