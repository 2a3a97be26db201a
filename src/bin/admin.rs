//! CLI administration tool for business-snapshot.
//!
//! Inspects stored business records and performs maintenance without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all records, newest first
//! cargo run --bin admin -- list
//!
//! # Show one record (created on first request)
//! cargo run --bin admin -- show --name "Cake & Co" --location Mumbai
//!
//! # Regenerate a headline
//! cargo run --bin admin -- regenerate --name "Cake & Co" --location Mumbai -y
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_*` components (required): PostgreSQL connection

use business_snapshot::config::{self, StoreBackend};
use business_snapshot::domain::entities::{Business, BusinessKey};
use business_snapshot::domain::repositories::BusinessRepository;
use business_snapshot::infrastructure::persistence::PgBusinessRepository;
use business_snapshot::server;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing business-snapshot records.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all business records, newest first
    List,

    /// Show a business snapshot, creating it if absent
    Show {
        /// Business name (exact match)
        #[arg(short, long)]
        name: String,

        /// Business location (exact match)
        #[arg(short, long)]
        location: String,
    },

    /// Replace the headline of an existing record
    Regenerate {
        /// Business name (exact match)
        #[arg(short, long)]
        name: String,

        /// Business location (exact match)
        #[arg(short, long)]
        location: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

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

    let config = config::load_from_env()?;
    if config.store_backend != StoreBackend::Postgres {
        bail!("admin requires STORE_BACKEND=postgres");
    }

    let pool = server::connect_pool(&config).await?;

    let result = match cli.command {
        Commands::List => list_businesses(&pool).await,
        Commands::Show { name, location } => show_business(&pool, name, location).await,
        Commands::Regenerate {
            name,
            location,
            yes,
        } => regenerate_headline(&pool, name, location, yes).await,
        Commands::Db { action } => handle_db_action(action, &pool).await,
    };

    pool.close().await;
    result
}

fn service(pool: &PgPool) -> business_snapshot::application::services::BusinessService {
    let repo = Arc::new(PgBusinessRepository::new(Arc::new(pool.clone())));
    server::build_service(repo)
}

/// Prints every record as a table.
///
/// ```text
///   ID  Name                     Location             Rating  Reviews  Created
///   1   Cake & Co                Mumbai               4.3     102      2025-01-15 10:30
/// ```
async fn list_businesses(pool: &PgPool) -> Result<()> {
    println!("{}", "📋 Businesses".bright_blue().bold());
    println!();

    let businesses = service(pool).list_all().await?;

    if businesses.is_empty() {
        println!("{}", "  No businesses found".yellow());
        return Ok(());
    }

    println!(
        "  {:<4} {:<24} {:<20} {:<7} {:<8} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Location".bright_white().bold(),
        "Rating".bright_white().bold(),
        "Reviews".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(85).bright_black());

    for b in &businesses {
        println!(
            "  {:<4} {:<24} {:<20} {:<7} {:<8} {}",
            b.id.to_string().bright_black(),
            b.name.cyan(),
            b.location,
            b.rating.to_string().bright_green(),
            b.reviews,
            b.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!(
        "  Total: {}",
        businesses.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Prints the snapshot for a business, creating it on first request like the API does.
async fn show_business(pool: &PgPool, name: String, location: String) -> Result<()> {
    let key = BusinessKey::new(name, location)?;

    let business = service(pool).get_or_create(&key).await?;

    print_business(&business);
    Ok(())
}

/// Regenerates a headline after showing the current one.
///
/// Asks for confirmation (default: No) unless `--yes` is given.
async fn regenerate_headline(
    pool: &PgPool,
    name: String,
    location: String,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "✨ Regenerate Headline".bright_blue().bold());
    println!();

    let key = BusinessKey::new(name, location)?;
    let repo = PgBusinessRepository::new(Arc::new(pool.clone()));

    let current = repo.find_one(&key).await?.context("Business not found")?;
    println!("  Current: {}", current.headline.bright_white());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Replace this headline?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let updated = service(pool).regenerate_headline(&key).await?;

    println!("  New:     {}", updated.headline.bright_yellow().bold());
    println!();
    println!("{}", "✅ Headline regenerated".green().bold());

    Ok(())
}

async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            service(pool).check_store().await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM businesses")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Records:    {}", count.to_string().bright_green().bold());
            println!();
        }
    }

    Ok(())
}

fn print_business(b: &Business) {
    println!("  {}  {}", "Name:    ".bright_white(), b.name.cyan());
    println!("  {}  {}", "Location:".bright_white(), b.location);
    println!("  {}  {}", "Rating:  ".bright_white(), b.rating.to_string().bright_green());
    println!("  {}  {}", "Reviews: ".bright_white(), b.reviews);
    println!("  {}  {}", "Headline:".bright_white(), b.headline.bright_yellow());
    println!(
        "  {}  {}",
        "Created: ".bright_white(),
        b.created_at.format("%Y-%m-%d %H:%M:%S")
    );
    println!(
        "  {}  {}",
        "Updated: ".bright_white(),
        b.updated_at.format("%Y-%m-%d %H:%M:%S")
    );
}
