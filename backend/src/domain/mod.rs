//! Domain primitives and ports.
//!
//! Purpose: define the records the API serves and the ports adapters
//! implement, without depending on Actix or Diesel.
//!
//! Public surface:
//! - [`FeatureSample`] and its [`FeatureSampleId`] / [`AuditTimestamps`].
//! - [`FeatureArea`], naming the feature an endpoint or table belongs to.
//! - [`Error`] / [`ErrorCode`], transport-agnostic failures.
//! - [`TraceId`], the request correlation identifier.

pub mod error;
pub mod feature_sample;
pub mod ports;
pub mod trace_id;

pub use self::error::{Error, ErrorCode};
pub use self::feature_sample::{
    AuditTimestamps, FeatureArea, FeatureSample, FeatureSampleId, FeatureSampleValidationError,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
