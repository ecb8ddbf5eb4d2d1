//! Builders for the HTTP state handed to handlers.

use std::sync::Arc;

use sample_app::domain::FeatureArea;
use sample_app::inbound::http::state::HttpState;
use sample_app::outbound::persistence::{DieselFeatureSampleRepository, SessionFactory};
use tracing::warn;

use super::ServerConfig;

/// Bind each feature area to its Diesel repository when a pool is configured,
/// otherwise to the in-memory fixtures.
pub(super) fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => {
            let sessions = SessionFactory::new(pool.clone());
            HttpState::new(
                Arc::new(DieselFeatureSampleRepository::new(
                    sessions.clone(),
                    FeatureArea::Feature1,
                )),
                Arc::new(DieselFeatureSampleRepository::new(
                    sessions,
                    FeatureArea::Feature2,
                )),
            )
        }
        None => {
            warn!("no database pool configured; serving fixture data");
            HttpState::fixtures()
        }
    }
}
