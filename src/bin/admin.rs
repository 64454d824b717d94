//! CLI administration tool for the dog adoption registry.
//!
//! Provides commands for inspecting and cleaning up records without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Registry counts
//! cargo run --bin admin -- stats
//!
//! # List dogs (optionally only adopted ones)
//! cargo run --bin admin -- dog list --adopted
//!
//! # Remove a dog by name
//! cargo run --bin admin -- dog delete Rex
//!
//! # List users with their dogs
//! cargo run --bin admin -- user list
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same database settings as the server (`DATABASE_URL` or `DB_*`).

use dog_adoption::config::Config;
use dog_adoption::server::connect_pool;
use dog_adoption::state::AppState;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing the dog adoption registry.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage dogs
    Dog {
        #[command(subcommand)]
        action: DogAction,
    },

    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Show registry counts
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Dog subcommands.
#[derive(Subcommand)]
enum DogAction {
    /// List dogs
    List {
        /// Only show adopted dogs
        #[arg(short, long)]
        adopted: bool,
    },

    /// Delete a dog by name
    Delete {
        /// Exact dog name
        name: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// User subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// List users with their dogs
    List,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let pool = connect_pool(&config).await?;
    let state = AppState::from_pool(Arc::new(pool.clone()));

    match cli.command {
        Commands::Dog { action } => handle_dog_action(action, &state).await?,
        Commands::User { action } => handle_user_action(action, &state).await?,
        Commands::Stats => handle_stats(&state).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches dog commands.
async fn handle_dog_action(action: DogAction, state: &AppState) -> Result<()> {
    match action {
        DogAction::List { adopted } => list_dogs(state, adopted).await,
        DogAction::Delete { name, yes } => delete_dog(state, name, yes).await,
    }
}

/// Prints dogs as a table.
///
/// ```text
///   ID    Name                 Adopted  Owner  Registered
///   ────────────────────────────────────────────────────────────
///   1     Rex                  no       -      2024-01-15 10:30
/// ```
async fn list_dogs(state: &AppState, only_adopted: bool) -> Result<()> {
    let title = if only_adopted { "Adopted dogs" } else { "Dogs" };
    println!("{}", title.bright_blue().bold());
    println!();

    let dogs = if only_adopted {
        state.dog_service.list_adopted_dogs().await?
    } else {
        state.dog_service.list_dogs().await?
    };

    if dogs.is_empty() {
        println!("{}", "  No dogs found".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {:<20} {:<8} {:<6} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Adopted".bright_white().bold(),
        "Owner".bright_white().bold(),
        "Registered".bright_white().bold()
    );
    println!("  {}", "─".repeat(60).bright_black());

    for dog in &dogs {
        let adopted = if dog.is_adopted {
            "yes".green()
        } else {
            "no".yellow()
        };
        let owner = dog
            .id_user
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());

        println!(
            "  {:<5} {:<20} {:<8} {:<6} {}",
            dog.id.to_string().bright_black(),
            dog.name.cyan(),
            adopted,
            owner,
            dog.create_date
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!("  Total: {}", dogs.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Deletes a dog after confirmation (default: No).
async fn delete_dog(state: &AppState, name: String, skip_confirm: bool) -> Result<()> {
    println!("{}", "Delete dog".bright_blue().bold());
    println!();

    let dog = state.dog_service.get_dog(&name).await?;

    println!("  Name:    {}", dog.name.cyan());
    println!("  ID:      {}", dog.id.to_string().bright_black());
    println!("  Picture: {}", dog.picture.bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this dog?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    state.dog_service.delete_dog(&name).await?;

    println!("{}", "Dog deleted".green().bold());
    println!();

    Ok(())
}

/// Dispatches user commands.
async fn handle_user_action(action: UserAction, state: &AppState) -> Result<()> {
    match action {
        UserAction::List => {
            println!("{}", "Users".bright_blue().bold());
            println!();

            let users = state.user_service.list_users().await?;

            if users.is_empty() {
                println!("{}", "  No users found".yellow());
                return Ok(());
            }

            for owner in &users {
                let dogs: Vec<&str> = owner.dogs.iter().map(|d| d.name.as_str()).collect();
                let dogs = if dogs.is_empty() {
                    "-".to_string()
                } else {
                    dogs.join(", ")
                };

                println!(
                    "  {:<5} {} {} <{}>  dogs: {}",
                    owner.user.id.to_string().bright_black(),
                    owner.user.name.cyan(),
                    owner.user.last_name.cyan(),
                    owner.user.email,
                    dogs
                );
            }

            println!();
        }
    }

    Ok(())
}

/// Displays registry counts.
async fn handle_stats(state: &AppState) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let dogs = state.dog_service.count_dogs(false).await?;
    let adopted = state.dog_service.count_dogs(true).await?;
    let users = state.user_service.count_users().await?;

    println!("  Dogs:    {}", dogs.to_string().bright_green().bold());
    println!("  Adopted: {}", adopted.to_string().bright_green().bold());
    println!("  Users:   {}", users.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
