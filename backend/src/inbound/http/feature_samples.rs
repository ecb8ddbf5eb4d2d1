//! Feature sample read endpoints.
//!
//! ```text
//! GET /feature1/{id}
//! GET /feature2/{id}
//! ```
//!
//! A hit returns only the two data columns; a miss is a 404 with
//! `{"detail": "FeatureN not found"}`.

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::domain::ports::FeatureSamplePersistenceError;
use crate::domain::{Error, FeatureArea, FeatureSample, FeatureSampleId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;

/// Response body for a found feature sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FeatureSampleResponse {
    /// First data column; `null` when unset.
    #[schema(example = "column1_1")]
    pub column1: Option<String>,
    /// Second data column; `null` when unset.
    #[schema(example = "column2_1")]
    pub column2: Option<String>,
}

impl From<FeatureSample> for FeatureSampleResponse {
    fn from(sample: FeatureSample) -> Self {
        Self {
            column1: sample.column1().map(str::to_owned),
            column2: sample.column2().map(str::to_owned),
        }
    }
}

/// Path-extraction settings that report malformed ids as 422.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use sample_app::inbound::http::feature_samples::{get_feature1, path_config};
///
/// let _app = App::new().app_data(path_config()).service(get_feature1);
/// ```
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        warn!(error = %err, "rejected malformed path parameter");
        Error::invalid_request(format!("invalid path parameter: {err}")).into()
    })
}

fn map_persistence_error(area: FeatureArea, err: FeatureSamplePersistenceError) -> Error {
    match err {
        FeatureSamplePersistenceError::Connection { message } => {
            error!(%area, %message, "feature sample repository unavailable");
            Error::service_unavailable("Database unavailable")
        }
        FeatureSamplePersistenceError::Query { message } => {
            error!(%area, %message, "feature sample query failed");
            Error::internal(message)
        }
    }
}

async fn fetch(
    state: &HttpState,
    area: FeatureArea,
    id: i32,
) -> ApiResult<web::Json<FeatureSampleResponse>> {
    let sample = state
        .repository(area)
        .find_by_id(FeatureSampleId::new(id))
        .await
        .map_err(|err| map_persistence_error(area, err))?
        .ok_or_else(|| Error::not_found(area.not_found_message()))?;
    Ok(web::Json(sample.into()))
}

/// Fetch a `feature1_sample` record by id.
#[utoipa::path(
    get,
    path = "/feature1/{id}",
    params(("id" = i32, Path, description = "Primary key of the record")),
    responses(
        (status = 200, description = "Record found", body = FeatureSampleResponse),
        (status = 404, description = "No record with this id", body = ErrorBody),
        (status = 422, description = "Id is not an integer", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody),
        (status = 503, description = "Database unavailable", body = ErrorBody)
    ),
    tags = ["feature1"],
    operation_id = "getFeature1"
)]
#[get("/feature1/{id}")]
pub async fn get_feature1(
    state: web::Data<HttpState>,
    id: web::Path<i32>,
) -> ApiResult<web::Json<FeatureSampleResponse>> {
    fetch(&state, FeatureArea::Feature1, id.into_inner()).await
}

/// Fetch a `feature2_sample` record by id.
#[utoipa::path(
    get,
    path = "/feature2/{id}",
    params(("id" = i32, Path, description = "Primary key of the record")),
    responses(
        (status = 200, description = "Record found", body = FeatureSampleResponse),
        (status = 404, description = "No record with this id", body = ErrorBody),
        (status = 422, description = "Id is not an integer", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody),
        (status = 503, description = "Database unavailable", body = ErrorBody)
    ),
    tags = ["feature2"],
    operation_id = "getFeature2"
)]
#[get("/feature2/{id}")]
pub async fn get_feature2(
    state: web::Data<HttpState>,
    id: web::Path<i32>,
) -> ApiResult<web::Json<FeatureSampleResponse>> {
    fetch(&state, FeatureArea::Feature2, id.into_inner()).await
}
