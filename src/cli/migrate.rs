//! Migrate command: applies embedded migrations over a blocking
//! connection, since diesel_migrations drives a synchronous harness.

use crate::config::Settings;
use crate::db::MIGRATIONS;
use crate::error::{AppError, AppResult};

pub async fn run_migrations(settings: &Settings) -> AppResult<()> {
    settings.database.validate()?;

    println!("Running database migrations...");

    let database_url = settings.database.url.clone();
    let applied: Vec<String> = tokio::task::spawn_blocking(move || {
        use diesel::pg::PgConnection;
        use diesel::Connection;
        use diesel_migrations::MigrationHarness;

        let mut conn = PgConnection::establish(&database_url).map_err(|e| AppError::Database {
            operation: "establish connection for migrations".to_string(),
            source: anyhow::anyhow!(e),
        })?;

        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| AppError::Database {
                operation: "run pending migrations".to_string(),
                source: anyhow::anyhow!(e),
            })?;

        Ok::<_, AppError>(applied.iter().map(|m| m.to_string()).collect())
    })
    .await
    .map_err(|e| AppError::Internal {
        source: anyhow::Error::from(e),
    })??;

    if applied.is_empty() {
        println!("✓ No migrations to apply - database is already up to date");
    } else {
        println!("✓ Applied {} migration(s):", applied.len());
        for migration in &applied {
            println!("  - {}", migration);
        }
    }

    Ok(())
}
