//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` and only see domain ports,
//! so tests can swap the Diesel repositories for fixtures or mocks.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::FeatureArea;
use crate::domain::ports::{FeatureSampleRepository, FixtureFeatureSampleRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub feature1: Arc<dyn FeatureSampleRepository>,
    pub feature2: Arc<dyn FeatureSampleRepository>,
}

impl HttpState {
    /// Construct state from one repository per feature area.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use sample_app::domain::ports::FixtureFeatureSampleRepository;
    /// use sample_app::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(FixtureFeatureSampleRepository::default()),
    ///     Arc::new(FixtureFeatureSampleRepository::default()),
    /// );
    /// let _feature1 = state.feature1.clone();
    /// ```
    pub fn new(
        feature1: Arc<dyn FeatureSampleRepository>,
        feature2: Arc<dyn FeatureSampleRepository>,
    ) -> Self {
        Self { feature1, feature2 }
    }

    /// State backed by in-memory fixtures seeded with ids 1..=3.
    pub fn fixtures() -> Self {
        let seeded = Arc::new(FixtureFeatureSampleRepository::seeded(Utc::now()));
        Self::new(seeded.clone(), seeded)
    }

    /// Repository serving `area`.
    pub fn repository(&self, area: FeatureArea) -> &Arc<dyn FeatureSampleRepository> {
        match area {
            FeatureArea::Feature1 => &self.feature1,
            FeatureArea::Feature2 => &self.feature2,
        }
    }
}
