//! `folio-setup` -- one-shot bootstrap tool.
//!
//! Runs migrations, creates the admin account, and seeds a placeholder
//! profile row so the public site renders something before the first edit.
//! Safe to re-run: existing rows are left untouched.
//!
//! # Environment variables
//!
//! | Variable         | Required | Default               | Description                |
//! |------------------|----------|-----------------------|----------------------------|
//! | `DATABASE_URL`   | yes      | --                    | PostgreSQL connection URL  |
//! | `ADMIN_USERNAME` | no       | `admin`               | Admin login name           |
//! | `ADMIN_EMAIL`    | no       | `admin@example.com`   | Admin contact address      |
//! | `ADMIN_PASSWORD` | yes      | --                    | Admin password (min 12)    |

use anyhow::{bail, Context};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_api::auth::password::{hash_password, validate_password_strength};
use folio_db::models::profile::UpsertProfile;
use folio_db::models::user::CreateUser;
use folio_db::repositories::{ProfileRepo, UserRepo};

/// Minimum admin password length. The account guards every write endpoint,
/// so a short password is a setup error, not a preference.
const MIN_PASSWORD_LENGTH: usize = 12;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_setup=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL must be set in the environment")?;

    let username = std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".into());
    let email = std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@example.com".into());
    let password =
        std::env::var("ADMIN_PASSWORD").context("ADMIN_PASSWORD must be set in the environment")?;

    if let Err(msg) = validate_password_strength(&password, MIN_PASSWORD_LENGTH) {
        bail!("Refusing to create admin account: {msg}");
    }

    let pool = folio_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;

    folio_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database migrations applied");

    // --- Admin account (idempotent) ---
    match UserRepo::find_by_username(&pool, &username).await? {
        Some(existing) => {
            tracing::info!(
                user_id = existing.id,
                username = %existing.username,
                "Admin account already exists, leaving it untouched"
            );
        }
        None => {
            let password_hash = hash_password(&password)
                .map_err(|e| anyhow::anyhow!("Password hashing failed: {e}"))?;
            let input = CreateUser {
                username: username.clone(),
                email,
                password_hash,
            };
            let user = UserRepo::create(&pool, &input).await?;
            tracing::info!(user_id = user.id, username = %user.username, "Admin account created");
        }
    }

    // --- Placeholder profile (idempotent) ---
    if ProfileRepo::get(&pool).await?.is_none() {
        let placeholder = UpsertProfile {
            full_name: "Your Name".into(),
            tagline: Some("Your tagline goes here".into()),
            bio: Some("Tell visitors about yourself from the admin dashboard.".into()),
            email: None,
            phone: None,
            location: None,
            avatar_url: None,
            github_url: None,
            linkedin_url: None,
            twitter_url: None,
            stats: Some(serde_json::json!([])),
        };
        ProfileRepo::upsert(&pool, &placeholder).await?;
        tracing::info!("Placeholder profile seeded");
    } else {
        tracing::info!("Profile already present, skipping seed");
    }

    tracing::info!("Setup complete");
    Ok(())
}
