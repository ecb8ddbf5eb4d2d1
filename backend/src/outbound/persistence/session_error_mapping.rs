//! Translation of session failures into feature sample port errors.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::FeatureSamplePersistenceError;

use super::session::SessionError;

/// Map a [`SessionError`] onto the repository port's error type.
///
/// Pool exhaustion and dropped connections become `Connection` errors so the
/// HTTP layer can answer 503; everything else is a `Query` error.
pub(crate) fn map_session_error(error: SessionError) -> FeatureSamplePersistenceError {
    match error {
        SessionError::Pool(pool_error) => {
            debug!(error = %pool_error, "session checkout failed");
            FeatureSamplePersistenceError::connection(pool_error.message())
        }
        SessionError::Query(diesel_error) => map_diesel_error(diesel_error),
    }
}

fn map_diesel_error(error: DieselError) -> FeatureSamplePersistenceError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _)
        | DieselError::BrokenTransactionManager => {
            FeatureSamplePersistenceError::connection("database connection error")
        }
        DieselError::DeserializationError(cause) => {
            FeatureSamplePersistenceError::query(format!("invalid stored row: {cause}"))
        }
        DieselError::QueryBuilderError(_) => {
            FeatureSamplePersistenceError::query("database query error")
        }
        _ => FeatureSamplePersistenceError::query("database error"),
    }
}
