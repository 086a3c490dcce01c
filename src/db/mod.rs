//! Database connection pool module.
//!
//! Provides async PostgreSQL connection pooling using diesel_async with bb8.

mod pool;

use diesel_migrations::{embed_migrations, EmbeddedMigrations};

pub use pool::{establish_async_connection_pool, AsyncDbPool};

/// Embedded migrations, applied via the `migrate` CLI command.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");
