//! User command - look up and register users

use anyhow::{bail, Context, Result};
use clap::{ArgGroup, Args, Parser, Subcommand};
use lightbnb_db::{DbConfig, NewUser, UserRepo};

use super::connect;
use crate::output;

#[derive(Parser, Debug)]
#[command(about = "Look up and register users")]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommand,
}

#[derive(Subcommand, Debug)]
pub enum UserCommand {
    /// Show a user by id or email
    Show(ShowArgs),
    /// Register a new user
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// Stored as given
        #[arg(long, env = "LIGHTBNB_USER_PASSWORD", hide_env_values = true)]
        password: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("lookup").required(true).args(["id", "email"])))]
pub struct ShowArgs {
    /// User id
    #[arg(long)]
    pub id: Option<i32>,
    /// Email address (case-insensitive)
    #[arg(long)]
    pub email: Option<String>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run_user(args: UserArgs, config: &DbConfig) -> Result<()> {
    match args.command {
        UserCommand::Show(show) => run_show(show, config).await,
        UserCommand::Add {
            name,
            email,
            password,
            json,
        } => {
            let user = NewUser::new(&name, &email, &password)?;
            let executor = connect(config).await?;
            let created = UserRepo::new(&executor)
                .create(&user)
                .await
                .context("Failed to add user")?;

            if json {
                output::print_json(&created)
            } else {
                output::print_user(&created);
                Ok(())
            }
        }
    }
}

async fn run_show(args: ShowArgs, config: &DbConfig) -> Result<()> {
    let executor = connect(config).await?;
    let repo = UserRepo::new(&executor);

    let user = match (args.id, args.email.as_deref()) {
        (Some(id), _) => repo.find_by_id(id).await?,
        (None, Some(email)) => repo.find_by_email(email).await?,
        (None, None) => bail!("Either --id or --email is required"),
    };

    let Some(user) = user else {
        bail!("User not found");
    };

    if args.json {
        output::print_json(&user)
    } else {
        output::print_user(&user);
        Ok(())
    }
}
