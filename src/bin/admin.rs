//! CLI administration tool for contacts-api.
//!
//! Provides commands for managing users, loading demo data and checking the
//! database without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create a user (prompts for the username, generates a password)
//! cargo run --bin admin -- user create
//!
//! # List users
//! cargo run --bin admin -- user list
//!
//! # Remove a user
//! cargo run --bin admin -- user remove frankzappa
//!
//! # Load demo users and contacts
//! cargo run --bin admin -- seed
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_*` (required): PostgreSQL connection

use contacts_api::application::services::{ContactService, UserService};
use contacts_api::config::{Config, mask_connection_string};
use contacts_api::domain::entities::{ContactPatch, Credentials};
use contacts_api::error::AppError;
use contacts_api::infrastructure::persistence::{PgContactRepository, PgUserRepository};
use contacts_api::utils::password::generate_password;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

const GENERATED_PASSWORD_LEN: usize = 20;

const SEED_USERS: &[(&str, &str)] = &[("user", "password"), ("admin", "admin")];

const SEED_CONTACTS: &[(&str, &str)] = &[
    ("Stewart", "Copeland"),
    ("Terry", "Bozzio"),
    ("Neal", "Peart"),
    ("Tim", "Alexander"),
    ("Dave", "Lombardo"),
    ("Frank", "Zappa"),
    ("Dweezil", "Zappa"),
];

/// CLI tool for managing contacts-api.
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
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Insert demo users and contacts, skipping any that already exist
    Seed,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Create a new user
    Create {
        /// Username
        #[arg(short, long)]
        username: Option<String>,

        /// Password (auto-generated if not provided)
        #[arg(short, long)]
        password: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all users
    List,

    /// Remove a user
    Remove {
        /// Username to remove
        username: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
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

    let database_url = Config::load_database_url().context("Database is not configured")?;

    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| format!("Failed to connect to {}", mask_connection_string(&database_url)))?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    let pool = Arc::new(pool);
    let users = UserService::new(Arc::new(PgUserRepository::new(pool.clone())));

    match cli.command {
        Commands::User { action } => handle_user_action(action, &users).await?,
        Commands::Seed => {
            let contacts = ContactService::new(Arc::new(PgContactRepository::new(pool.clone())));
            handle_seed(&users, &contacts).await?
        }
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, users: &UserService) -> Result<()> {
    match action {
        UserAction::Create {
            username,
            password,
            yes,
        } => create_user(users, username, password, yes).await,
        UserAction::List => list_users(users).await,
        UserAction::Remove { username, yes } => remove_user(users, username, yes).await,
    }
}

/// Creates a user with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for username (or use provided)
/// 2. Generate a random password or use provided value
/// 3. Confirm creation (unless `--yes` flag)
/// 4. Store the user with an Argon2id password digest
/// 5. Display login instructions
async fn create_user(
    users: &UserService,
    username: Option<String>,
    password: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Create User".bright_blue().bold());
    println!();

    let username = match username {
        Some(u) => u,
        None => Input::new().with_prompt("Username").interact_text()?,
    };

    let password = match password {
        Some(p) => {
            println!("{}", "⚠️  Using provided password".yellow());
            p
        }
        None => {
            println!("{}", "✨ Generated new password".green());
            generate_password(GENERATED_PASSWORD_LEN)
        }
    };

    println!();
    println!("{}", "User details:".bright_white().bold());
    println!("  Username: {}", username.cyan());
    println!("  Password: {}", password.bright_yellow().bold());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this user?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let user = users
        .create(Credentials::new(Some(&username), Some(&password)))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    println!();
    println!("{}", "✅ User created successfully!".green().bold());
    println!();
    println!("{}", "Log in with:".bright_white());
    println!(
        "  curl -X POST -H \"Content-Type: application/json\" -d '{{\"username\":\"{}\",\"password\":\"{}\"}}' http://localhost:3000/api/auth/login",
        user.username.bright_yellow(),
        password.bright_yellow()
    );
    println!();

    Ok(())
}

/// Lists all users.
///
/// # Output Format
///
/// ```text
/// 📋 Users
///
///   ID                         Username             Created
///   ─────────────────────────────────────────────────────────────────
///   65f1c0de8a1b2c3d4e5f6a7b   admin                2026-03-01 10:30
/// ```
async fn list_users(users: &UserService) -> Result<()> {
    println!("{}", "📋 Users".bright_blue().bold());
    println!();

    let all = users
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if all.is_empty() {
        println!("{}", "  No users found".yellow());
        println!();
        println!(
            "  Create one with: {} admin user create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<26} {:<20} {:<16}",
        "ID".bright_white().bold(),
        "Username".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(65).bright_black());

    for user in &all {
        println!(
            "  {:<26} {:<20} {}",
            user.id.to_string().bright_black(),
            user.username.cyan(),
            user.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!("  Total: {}", all.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Removes a user after confirmation (default: No).
async fn remove_user(users: &UserService, username: String, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Remove User".bright_blue().bold());
    println!();

    let user = users
        .get(&username)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("  Username: {}", user.username.cyan());
    println!("  ID:       {}", user.id.to_string().bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Remove this user?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    users
        .delete(&user.username)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to remove user: {}", e))?;

    println!();
    println!("{}", "✅ User removed".green().bold());
    println!();

    Ok(())
}

/// Inserts the demo users and contacts.
///
/// Entries colliding with existing ones are reported and skipped.
async fn handle_seed(users: &UserService, contacts: &ContactService) -> Result<()> {
    println!("{}", "🌱 Seeding demo data".bright_blue().bold());
    println!();

    for &(username, password) in SEED_USERS {
        let outcome = users
            .create(Credentials::new(Some(username), Some(password)))
            .await;
        report_seed("user", username, outcome.map(|_| ()))?;
    }

    for &(first, last) in SEED_CONTACTS {
        let patch = ContactPatch {
            first_name: Some(Some(first.to_string())),
            last_name: Some(Some(last.to_string())),
        };
        let outcome = contacts.create(patch).await;
        report_seed("contact", &format!("{first} {last}"), outcome.map(|_| ()))?;
    }

    println!();
    println!("{}", "✅ Seed complete".green().bold());
    println!();

    Ok(())
}

fn report_seed(kind: &str, name: &str, outcome: Result<(), AppError>) -> Result<()> {
    match outcome {
        Ok(()) => {
            println!("  {} {} {}", "+".green(), kind, name.cyan());
            Ok(())
        }
        Err(AppError::UniquenessConflict { .. }) => {
            println!("  {} {} {} (exists)", "=".bright_black(), kind, name.bright_black());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to seed {} {}: {}", kind, name, e)),
    }
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let contacts_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contacts")
                .fetch_one(pool)
                .await?;

            let users_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!(
                "  Contacts:   {}",
                contacts_count.to_string().bright_green().bold()
            );
            println!(
                "  Users:      {}",
                users_count.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}
