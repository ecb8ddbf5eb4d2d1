//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the feature sample and health endpoints together with
//! the response bodies they produce. Swagger UI serves it in debug builds and
//! `openapi-dump` prints it for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::feature_samples::FeatureSampleResponse;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sample app API",
        description = "Read access to feature sample records and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::feature_samples::get_feature1,
        crate::inbound::http::feature_samples::get_feature2,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(FeatureSampleResponse, ErrorBody)),
    tags(
        (name = "feature1", description = "Feature 1 sample records"),
        (name = "feature2", description = "Feature 2 sample records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
