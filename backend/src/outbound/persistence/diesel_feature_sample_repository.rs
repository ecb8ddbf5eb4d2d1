//! Diesel-backed `FeatureSampleRepository`.
//!
//! Every lookup opens its own session, so one HTTP request maps to exactly
//! one transaction.

use async_trait::async_trait;
use diesel_async::scoped_futures::ScopedFutureExt;
use tracing::debug;

use crate::domain::ports::{FeatureSamplePersistenceError, FeatureSampleRepository};
use crate::domain::{FeatureArea, FeatureSample, FeatureSampleId};

use super::feature_sample_queries::{get_feature1_by_id, get_feature2_by_id};
use super::session::{SessionError, SessionFactory};
use super::session_error_mapping::map_session_error;

/// Repository reading one feature area's sample table.
#[derive(Clone)]
pub struct DieselFeatureSampleRepository {
    sessions: SessionFactory,
    area: FeatureArea,
}

impl DieselFeatureSampleRepository {
    /// Create a repository for `area` using sessions from `sessions`.
    pub fn new(sessions: SessionFactory, area: FeatureArea) -> Self {
        Self { sessions, area }
    }

    /// Feature area this repository reads.
    pub fn area(&self) -> FeatureArea {
        self.area
    }
}

#[async_trait]
impl FeatureSampleRepository for DieselFeatureSampleRepository {
    async fn find_by_id(
        &self,
        id: FeatureSampleId,
    ) -> Result<Option<FeatureSample>, FeatureSamplePersistenceError> {
        let area = self.area;
        let found = self
            .sessions
            .scoped(|conn| {
                async move {
                    let sample = match area {
                        FeatureArea::Feature1 => get_feature1_by_id(conn, id).await?,
                        FeatureArea::Feature2 => get_feature2_by_id(conn, id).await?,
                    };
                    Ok::<_, SessionError>(sample)
                }
                .scope_boxed()
            })
            .await
            .map_err(map_session_error)?;

        debug!(%area, %id, hit = found.is_some(), "feature sample lookup");
        Ok(found)
    }
}
