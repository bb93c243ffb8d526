use anyhow::{Context, Result};
use canvas_config::{Backend, CanvasConfig};
use canvas_migrate::{MigrationOptions, MigrationOutcome, preview_migrations};
use colored::Colorize;
use sea_orm::{ConnectOptions, Database};
use tracing::info;

use crate::utils::{load_config, query_backend};

pub async fn cmd_migrate(database_url: Option<String>, dry_run: bool) -> Result<()> {
    let config = load_config()?;
    let url = database_url.or_else(|| config.database_url().map(str::to_string));
    let options = MigrationOptions::default()
        .version_table(config.version_table())
        .dry_run(dry_run);

    if dry_run {
        let backend = dry_run_backend(url.as_deref(), &config);
        info!(%backend, "dry run, not connecting");
        let outcome = preview_migrations(query_backend(backend), &canvas_ai::schema(), &options)
            .context("render migration")?;
        report(&outcome);
        return Ok(());
    }

    let url = url.context(
        "no database URL: pass --database-url, set DATABASE_URL, or add databaseUrl to canvas.json",
    )?;
    let mut opt = ConnectOptions::new(url);
    opt.sqlx_logging(false);
    let db = Database::connect(opt)
        .await
        .context("connect to database")?;
    info!(backend = ?db.get_database_backend(), "connected");

    let outcome = canvas_ai::migrate(&db, options)
        .await
        .context("run migration")?;
    report(&outcome);
    Ok(())
}

/// The URL scheme decides when one is known; otherwise the configured backend.
fn dry_run_backend(url: Option<&str>, config: &CanvasConfig) -> Backend {
    url.and_then(Backend::from_url)
        .unwrap_or_else(|| config.backend())
}

fn report(outcome: &MigrationOutcome) {
    match outcome {
        MigrationOutcome::Applied {
            version,
            statements,
        } => println!(
            "{} version {} ({} statements)",
            "Applied".bright_green().bold(),
            version.to_string().bright_magenta(),
            statements.len()
        ),
        MigrationOutcome::UpToDate { version } => println!(
            "{} at version {}",
            "Schema is up to date".bright_green(),
            version.to_string().bright_magenta()
        ),
        MigrationOutcome::DryRun {
            version,
            statements,
        } => {
            println!(
                "{} version {} would run {} statements",
                "Dry run:".bright_cyan().bold(),
                version.to_string().bright_magenta(),
                statements.len()
            );
            for sql in statements {
                println!("{};", sql.bright_white());
            }
        }
    }
}
