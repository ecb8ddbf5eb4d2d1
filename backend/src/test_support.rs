//! Seed helpers shared by integration tests.
//!
//! Compiled only with the `test-support` feature. The helpers use a
//! synchronous Diesel connection so fixtures can run outside an async
//! runtime. Rows are inserted one at a time so `SERIAL` ids follow the seed
//! order: the i-th row gets id `i`.

use diesel::pg::PgConnection;
use diesel::prelude::*;
use tracing::debug;

use crate::domain::FeatureArea;
use crate::outbound::persistence::models::{NewFeature1SampleRow, NewFeature2SampleRow, NewUserRow};
use crate::outbound::persistence::schema::{feature1_sample, feature2_sample, users};

/// Number of rows each seed helper inserts.
pub const SEED_ROWS: i32 = 3;

/// Expected `(column1, column2)` values for the seeded row with `id`.
///
/// # Examples
/// ```
/// use sample_app::test_support::seeded_columns;
///
/// assert_eq!(seeded_columns(2), ("column1_2".to_owned(), "column2_2".to_owned()));
/// ```
pub fn seeded_columns(id: i32) -> (String, String) {
    (format!("column1_{id}"), format!("column2_{id}"))
}

/// Insert `user_1` .. `user_3`.
///
/// # Errors
///
/// Returns the Diesel error if an insert fails.
pub fn seed_users(conn: &mut PgConnection) -> QueryResult<()> {
    for i in 1..=SEED_ROWS {
        let name = format!("user_{i}");
        diesel::insert_into(users::table)
            .values(&NewUserRow { name: &name })
            .execute(conn)?;
    }
    debug!(rows = SEED_ROWS, "seeded users");
    Ok(())
}

/// Insert the canonical rows into the table backing `area`.
///
/// # Errors
///
/// Returns the Diesel error if an insert fails.
pub fn seed_feature_samples(conn: &mut PgConnection, area: FeatureArea) -> QueryResult<()> {
    for i in 1..=SEED_ROWS {
        let (column1, column2) = seeded_columns(i);
        let column1 = Some(column1.as_str());
        let column2 = Some(column2.as_str());
        match area {
            FeatureArea::Feature1 => diesel::insert_into(feature1_sample::table)
                .values(&NewFeature1SampleRow { column1, column2 })
                .execute(conn)?,
            FeatureArea::Feature2 => diesel::insert_into(feature2_sample::table)
                .values(&NewFeature2SampleRow { column1, column2 })
                .execute(conn)?,
        };
    }
    debug!(%area, rows = SEED_ROWS, "seeded feature samples");
    Ok(())
}
