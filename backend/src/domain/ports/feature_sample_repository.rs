//! Port abstraction for reading feature sample records.
//!
//! The HTTP adapter only sees this trait. Production binds it to the Diesel
//! repository; handler tests bind it to a mock or to
//! [`FixtureFeatureSampleRepository`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{AuditTimestamps, FeatureSample, FeatureSampleId};

/// Persistence errors raised by feature sample repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeatureSamplePersistenceError {
    /// Repository connection could not be established.
    #[error("feature sample repository connection failed: {message}")]
    Connection {
        /// Adapter-supplied failure description.
        message: String,
    },
    /// Query failed during execution or returned an invalid row.
    #[error("feature sample repository query failed: {message}")]
    Query {
        /// Adapter-supplied failure description.
        message: String,
    },
}

impl FeatureSamplePersistenceError {
    /// Build a [`Self::Connection`] error.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Build a [`Self::Query`] error.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Read access to one feature area's sample records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeatureSampleRepository: Send + Sync {
    /// Fetch a record by primary key. `Ok(None)` when no row matches.
    async fn find_by_id(
        &self,
        id: FeatureSampleId,
    ) -> Result<Option<FeatureSample>, FeatureSamplePersistenceError>;
}

/// In-memory repository holding the canonical seed rows.
///
/// Used when the server starts without a database pool and by handler tests.
#[derive(Debug, Clone)]
pub struct FixtureFeatureSampleRepository {
    samples: Vec<FeatureSample>,
}

impl FixtureFeatureSampleRepository {
    /// Fixture holding exactly the given samples.
    pub fn new(samples: Vec<FeatureSample>) -> Self {
        Self { samples }
    }

    /// Fixture mirroring the test seed: ids 1..=3 with `column1_{i}` and
    /// `column2_{i}`.
    pub fn seeded(created_at: DateTime<Utc>) -> Self {
        let samples = (1..=3)
            .map(|i| {
                FeatureSample::new(
                    FeatureSampleId::new(i),
                    Some(format!("column1_{i}")),
                    Some(format!("column2_{i}")),
                    AuditTimestamps::created(created_at),
                )
            })
            .collect();
        Self::new(samples)
    }
}

impl Default for FixtureFeatureSampleRepository {
    fn default() -> Self {
        Self::seeded(Utc::now())
    }
}

#[async_trait]
impl FeatureSampleRepository for FixtureFeatureSampleRepository {
    async fn find_by_id(
        &self,
        id: FeatureSampleId,
    ) -> Result<Option<FeatureSample>, FeatureSamplePersistenceError> {
        Ok(self.samples.iter().find(|sample| sample.id() == id).cloned())
    }
}
