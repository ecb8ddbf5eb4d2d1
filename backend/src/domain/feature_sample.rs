//! Feature sample records.
//!
//! Each feature area owns a table of near-identical sample records: a
//! server-assigned integer identifier, two free-text columns, and audit
//! timestamps maintained by the database.

use std::fmt;

use chrono::{DateTime, Utc};

/// Feature area a sample record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureArea {
    /// Records stored in `feature1_sample`.
    Feature1,
    /// Records stored in `feature2_sample`.
    Feature2,
}

impl FeatureArea {
    /// Display label used in client-facing messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Feature1 => "Feature1",
            Self::Feature2 => "Feature2",
        }
    }

    /// Message returned when a lookup in this area misses.
    ///
    /// # Examples
    /// ```
    /// use sample_app::domain::FeatureArea;
    ///
    /// assert_eq!(FeatureArea::Feature1.not_found_message(), "Feature1 not found");
    /// ```
    pub fn not_found_message(self) -> String {
        format!("{} not found", self.label())
    }
}

impl fmt::Display for FeatureArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Primary key of a feature sample row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeatureSampleId(i32);

impl FeatureSampleId {
    /// Wrap a raw identifier. Any value is a valid lookup key; identifiers
    /// the database never assigned simply miss.
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Raw integer value.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for FeatureSampleId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for FeatureSampleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Validation failures for [`AuditTimestamps`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeatureSampleValidationError {
    /// `updated_at` precedes `created_at`.
    #[error("updated_at ({updated_at}) precedes created_at ({created_at})")]
    UpdatedBeforeCreated {
        /// Insertion timestamp.
        created_at: DateTime<Utc>,
        /// Last modification timestamp.
        updated_at: DateTime<Utc>,
    },
}

/// Creation and modification timestamps assigned by the storage layer.
///
/// ## Invariants
/// - `created_at <= updated_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditTimestamps {
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AuditTimestamps {
    /// Validate and pair the timestamps.
    pub fn new(
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, FeatureSampleValidationError> {
        if updated_at < created_at {
            return Err(FeatureSampleValidationError::UpdatedBeforeCreated {
                created_at,
                updated_at,
            });
        }
        Ok(Self {
            created_at,
            updated_at,
        })
    }

    /// Timestamps for a record that has never been updated.
    pub fn created(at: DateTime<Utc>) -> Self {
        Self {
            created_at: at,
            updated_at: at,
        }
    }

    /// Insertion time.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Last modification time.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// A persisted feature sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSample {
    id: FeatureSampleId,
    column1: Option<String>,
    column2: Option<String>,
    timestamps: AuditTimestamps,
}

impl FeatureSample {
    /// Assemble a sample from its parts.
    pub fn new(
        id: FeatureSampleId,
        column1: Option<String>,
        column2: Option<String>,
        timestamps: AuditTimestamps,
    ) -> Self {
        Self {
            id,
            column1,
            column2,
            timestamps,
        }
    }

    /// Primary key.
    pub fn id(&self) -> FeatureSampleId {
        self.id
    }

    /// First text column.
    pub fn column1(&self) -> Option<&str> {
        self.column1.as_deref()
    }

    /// Second text column.
    pub fn column2(&self) -> Option<&str> {
        self.column2.as_deref()
    }

    /// Storage-assigned timestamps.
    pub fn timestamps(&self) -> &AuditTimestamps {
        &self.timestamps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use rstest::rstest;

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    #[rstest]
    #[case(FeatureArea::Feature1, "Feature1 not found")]
    #[case(FeatureArea::Feature2, "Feature2 not found")]
    fn not_found_message_names_area(#[case] area: FeatureArea, #[case] expected: &str) {
        assert_eq!(area.not_found_message(), expected);
    }

    #[rstest]
    #[case(Duration::zero())]
    #[case(Duration::seconds(30))]
    fn timestamps_accept_ordered_pairs(#[case] delta: Duration) {
        let created = instant();
        let stamps = AuditTimestamps::new(created, created + delta).expect("ordered");
        assert_eq!(stamps.created_at(), created);
        assert_eq!(stamps.updated_at(), created + delta);
    }

    #[test]
    fn timestamps_reject_update_before_creation() {
        let created = instant();
        let err = AuditTimestamps::new(created, created - Duration::seconds(1))
            .expect_err("reversed timestamps");
        assert!(matches!(
            err,
            FeatureSampleValidationError::UpdatedBeforeCreated { .. }
        ));
    }

    #[test]
    fn sample_exposes_columns() {
        let sample = FeatureSample::new(
            FeatureSampleId::new(7),
            Some("column1_7".to_owned()),
            None,
            AuditTimestamps::created(instant()),
        );
        assert_eq!(sample.id().get(), 7);
        assert_eq!(sample.column1(), Some("column1_7"));
        assert_eq!(sample.column2(), None);
    }
}
