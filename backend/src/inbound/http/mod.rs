//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod feature_samples;
pub mod health;
pub mod state;

pub use error::ApiResult;

use actix_web::web;

/// Register the feature sample routes and their path extractor settings.
///
/// Callers provide `web::Data<HttpState>` on the app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(feature_samples::path_config())
        .service(feature_samples::get_feature1)
        .service(feature_samples::get_feature2);
}
