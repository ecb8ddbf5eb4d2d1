//! Shared helpers for integration tests backed by embedded PostgreSQL.
//!
//! Integration tests compile as separate crates, so each suite includes this
//! module with `mod support;` and uses only the helpers it needs.
//!
//! The fixture chain mirrors the order data must exist in:
//! [`TestDatabase::provision`] creates and migrates a throwaway database,
//! [`TestDatabase::seed_users`] adds `user_1..user_3`, and
//! [`TestDatabase::seed_feature`] adds the three canonical sample rows.

#![allow(dead_code, reason = "each test crate uses a different subset")]

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use diesel::Connection;
use diesel::pg::PgConnection;
use pg_embedded_setup_unpriv::{ClusterHandle, TemporaryDatabase};
use sample_app::domain::FeatureArea;
use sample_app::inbound::http::state::HttpState;
use sample_app::outbound::persistence::{
    DbPool, DieselFeatureSampleRepository, PoolConfig, SessionFactory, run_pending_migrations,
};
use sample_app::test_support::{seed_feature_samples, seed_users};

const SHARED_CLUSTER_RETRIES: usize = 5;
const SHARED_CLUSTER_RETRY_DELAY: Duration = Duration::from_millis(500);
const REQUIRE_PG_ENV: &str = "SAMPLE_APP_REQUIRE_PG_EMBEDDED";

/// Returns true when embedded PostgreSQL failures must fail the test run.
pub fn pg_embedded_required() -> bool {
    std::env::var(REQUIRE_PG_ENV).is_ok_and(|value| value == "1")
}

/// Handles embedded cluster setup failures consistently across suites.
///
/// Prints a `SKIP-TEST-CLUSTER` marker and returns `None`, or panics when
/// `SAMPLE_APP_REQUIRE_PG_EMBEDDED=1` so CI cannot silently skip.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if pg_embedded_required() {
        panic!("Test cluster setup failed: {reason}. Unset {REQUIRE_PG_ENV} to skip.");
    }
    eprintln!("SKIP-TEST-CLUSTER: {reason}");
    None
}

/// Process-wide embedded cluster, started on first use.
pub fn shared_cluster() -> Result<&'static ClusterHandle, String> {
    let mut attempt = 1;
    loop {
        match pg_embedded_setup_unpriv::test_support::shared_cluster_handle() {
            Ok(handle) => return Ok(handle),
            Err(error) if attempt >= SHARED_CLUSTER_RETRIES => {
                return Err(format!("shared cluster: {error:?}"));
            }
            Err(_) => {
                std::thread::sleep(SHARED_CLUSTER_RETRY_DELAY);
                attempt += 1;
            }
        }
    }
}

/// Drive `future` to completion on a fresh Actix system.
///
/// Database tests stay synchronous so cluster bootstrap and temporary
/// database teardown never run inside an async runtime; only the work under
/// test runs here.
pub fn block_on<F: Future>(future: F) -> F::Output {
    actix_rt::System::new().block_on(future)
}

/// Render a `postgres` error with enough detail to be useful in CI logs.
///
/// The `Display` implementation often collapses database errors to a bare
/// `db error`, so prefer the SQLSTATE and server message when present.
pub fn format_postgres_error(error: &postgres::Error) -> String {
    let Some(db_error) = error.as_db_error() else {
        return error.to_string();
    };

    let mut summary = format!(
        "postgres error {:?}: {}",
        db_error.code(),
        db_error.message()
    );
    if let Some(detail) = db_error.detail() {
        summary.push_str("; detail: ");
        summary.push_str(detail);
    }
    summary
}

/// Uniquely named, fully migrated database dropped with the value.
pub struct TestDatabase {
    database: TemporaryDatabase,
}

impl TestDatabase {
    /// Create a temporary database on the shared cluster and migrate it.
    pub fn provision() -> Result<Self, String> {
        let cluster = shared_cluster()?;
        let name = format!("sample_app_test_{}", uuid::Uuid::new_v4().simple());
        let database = cluster
            .temporary_database(name.as_str())
            .map_err(|err| format!("create temporary database: {err:?}"))?;
        run_pending_migrations(database.url()).map_err(|err| err.to_string())?;
        Ok(Self { database })
    }

    /// Connection string for this database.
    pub fn url(&self) -> &str {
        self.database.url()
    }

    /// Open a synchronous Diesel connection.
    pub fn connect(&self) -> Result<PgConnection, String> {
        PgConnection::establish(self.url()).map_err(|err| err.to_string())
    }

    /// Insert `user_1..user_3`.
    pub fn seed_users(self) -> Result<Self, String> {
        let mut conn = self.connect()?;
        seed_users(&mut conn).map_err(|err| format!("seed users: {err}"))?;
        Ok(self)
    }

    /// Insert `column1_i` / `column2_i` for i in 1..=3 into `area`'s table.
    pub fn seed_feature(self, area: FeatureArea) -> Result<Self, String> {
        let mut conn = self.connect()?;
        seed_feature_samples(&mut conn, area)
            .map_err(|err| format!("seed {area} samples: {err}"))?;
        Ok(self)
    }

    /// Small pool against this database. Call from inside [`block_on`].
    pub async fn pool(&self) -> Result<DbPool, String> {
        let config = PoolConfig::new(self.url())
            .with_max_size(2)
            .with_min_idle(Some(1));
        DbPool::new(config).await.map_err(|err| err.to_string())
    }

    /// Session factory over a fresh pool.
    pub async fn sessions(&self) -> Result<SessionFactory, String> {
        Ok(SessionFactory::new(self.pool().await?))
    }

    /// HTTP state whose repositories read this database.
    pub async fn http_state(&self) -> Result<HttpState, String> {
        let sessions = self.sessions().await?;
        Ok(HttpState::new(
            Arc::new(DieselFeatureSampleRepository::new(
                sessions.clone(),
                FeatureArea::Feature1,
            )),
            Arc::new(DieselFeatureSampleRepository::new(
                sessions,
                FeatureArea::Feature2,
            )),
        ))
    }
}

/// `TestDatabase::provision`, skipping when the cluster is unavailable.
pub fn provision_or_skip() -> Option<TestDatabase> {
    match TestDatabase::provision() {
        Ok(database) => Some(database),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}
