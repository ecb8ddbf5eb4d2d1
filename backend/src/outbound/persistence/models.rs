//! Internal Diesel row structs.
//!
//! These types are implementation details of the persistence layer and never
//! reach the domain; rows are converted into [`FeatureSample`] on read.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::{AuditTimestamps, FeatureSample, FeatureSampleId, FeatureSampleValidationError};

#[cfg(feature = "test-support")]
use super::schema::users;
use super::schema::{feature1_sample, feature2_sample};

/// Declares the read and insert row structs for one feature sample table.
///
/// Both sample tables share a column layout, so the row shapes and their
/// conversion into the domain type are generated from one definition.
macro_rules! feature_sample_rows {
    ($table:ident, $row:ident, $new_row:ident) => {
        #[doc = concat!("Row read from `", stringify!($table), "`.")]
        #[derive(Debug, Clone, Queryable, Selectable)]
        #[diesel(table_name = $table)]
        #[diesel(check_for_backend(diesel::pg::Pg))]
        pub(crate) struct $row {
            pub id: i32,
            pub column1: Option<String>,
            pub column2: Option<String>,
            pub created_at: DateTime<Utc>,
            pub updated_at: DateTime<Utc>,
        }

        #[doc = concat!("Insertable row for `", stringify!($table), "`; timestamps come from column defaults.")]
        #[cfg(feature = "test-support")]
        #[derive(Debug, Clone, Insertable)]
        #[diesel(table_name = $table)]
        pub(crate) struct $new_row<'a> {
            pub column1: Option<&'a str>,
            pub column2: Option<&'a str>,
        }

        impl TryFrom<$row> for FeatureSample {
            type Error = FeatureSampleValidationError;

            fn try_from(row: $row) -> Result<Self, Self::Error> {
                let timestamps = AuditTimestamps::new(row.created_at, row.updated_at)?;
                Ok(FeatureSample::new(
                    FeatureSampleId::new(row.id),
                    row.column1,
                    row.column2,
                    timestamps,
                ))
            }
        }
    };
}

feature_sample_rows!(feature1_sample, Feature1SampleRow, NewFeature1SampleRow);
feature_sample_rows!(feature2_sample, Feature2SampleRow, NewFeature2SampleRow);

/// Insertable user row used by seed fixtures.
#[cfg(feature = "test-support")]
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
}
