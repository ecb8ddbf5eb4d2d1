//! Embedded Diesel migrations.
//!
//! The SQL under `backend/migrations` is compiled into the binary so the
//! server and the test harness apply exactly the same schema.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

/// Migrations from the `backend/migrations` directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Failure while bringing a database schema up to date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MigrationError {
    /// The database could not be reached.
    #[error("failed to connect for migrations: {message}")]
    Connection {
        /// Underlying Diesel error text.
        message: String,
    },
    /// A migration failed to apply.
    #[error("failed to apply migrations: {message}")]
    Apply {
        /// Underlying Diesel error text.
        message: String,
    },
}

/// Apply every pending migration to the database at `database_url`.
///
/// Blocking: uses a synchronous Diesel connection. Call it from a blocking
/// context such as `actix_web::web::block`.
///
/// # Errors
///
/// Returns [`MigrationError`] when the connection or a migration fails.
pub fn run_pending_migrations(database_url: &str) -> Result<usize, MigrationError> {
    let mut conn =
        PgConnection::establish(database_url).map_err(|err| MigrationError::Connection {
            message: err.to_string(),
        })?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| MigrationError::Apply {
            message: err.to_string(),
        })?;
    for version in &applied {
        info!(%version, "applied migration");
    }
    Ok(applied.len())
}
