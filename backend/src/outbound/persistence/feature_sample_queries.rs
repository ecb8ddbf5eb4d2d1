//! Primary-key lookups for the feature sample tables.
//!
//! These functions run on a connection supplied by the caller, normally from
//! inside [`SessionFactory::scoped`](super::SessionFactory::scoped), and
//! have no side effects beyond the read. A missing row is `Ok(None)`.

use diesel::prelude::*;
use diesel::result::Error as DieselError;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::domain::{FeatureSample, FeatureSampleId, FeatureSampleValidationError};

use super::models::{Feature1SampleRow, Feature2SampleRow};
use super::schema::{feature1_sample, feature2_sample};

fn invalid_row(err: FeatureSampleValidationError) -> DieselError {
    DieselError::DeserializationError(Box::new(err))
}

/// Fetch one `feature1_sample` row by id.
///
/// # Errors
///
/// Returns the Diesel error when the query fails, or
/// [`DieselError::DeserializationError`] when the stored timestamps violate
/// `created_at <= updated_at`.
pub async fn get_feature1_by_id(
    conn: &mut AsyncPgConnection,
    id: FeatureSampleId,
) -> QueryResult<Option<FeatureSample>> {
    let row = feature1_sample::table
        .find(id.get())
        .select(Feature1SampleRow::as_select())
        .first(conn)
        .await
        .optional()?;

    row.map(FeatureSample::try_from)
        .transpose()
        .map_err(invalid_row)
}

/// Fetch one `feature2_sample` row by id.
///
/// # Errors
///
/// Same as [`get_feature1_by_id`].
pub async fn get_feature2_by_id(
    conn: &mut AsyncPgConnection,
    id: FeatureSampleId,
) -> QueryResult<Option<FeatureSample>> {
    let row = feature2_sample::table
        .find(id.get())
        .select(Feature2SampleRow::as_select())
        .first(conn)
        .await
        .optional()?;

    row.map(FeatureSample::try_from)
        .transpose()
        .map_err(invalid_row)
}
