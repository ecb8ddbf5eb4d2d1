//! Request-scoped database sessions.
//!
//! A session is one pooled connection wrapped in one transaction. Callers
//! never hold a connection directly: they hand a unit of work to
//! [`SessionFactory::scoped`], which commits when the work returns `Ok`,
//! rolls back when it returns `Err` or unwinds, and returns the connection to
//! the pool on every exit path.

use diesel_async::scoped_futures::ScopedBoxFuture;
use diesel_async::{AsyncConnection, AsyncPgConnection};
use tracing::{debug, warn};

use super::pool::{DbPool, PoolError};

/// Failure while acquiring or using a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// No connection could be checked out.
    #[error(transparent)]
    Pool(#[from] PoolError),
    /// A statement, commit, or rollback failed.
    #[error("database session failed: {0}")]
    Query(#[from] diesel::result::Error),
}

/// Factory for transactional sessions over a shared [`DbPool`].
///
/// Constructed once at startup and cloned into each adapter that needs
/// database access. Tests substitute a factory bound to their own throwaway
/// database.
///
/// # Example
///
/// ```ignore
/// use diesel_async::scoped_futures::ScopedFutureExt;
///
/// let sessions = SessionFactory::new(pool);
/// let sample = sessions
///     .scoped(|conn| async move { get_feature1_by_id(conn, id).await.map_err(SessionError::from) }.scope_boxed())
///     .await?;
/// ```
#[derive(Clone)]
pub struct SessionFactory {
    pool: DbPool,
}

impl SessionFactory {
    /// Bind a factory to `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Run `work` inside a fresh session.
    ///
    /// The transaction begins before `work` runs. It is committed when `work`
    /// resolves to `Ok` and rolled back when it resolves to `Err`. The pooled
    /// connection is released when this future completes or is dropped.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `work`, or a pool/Diesel failure
    /// converted into `E` when the session cannot be opened or finished.
    pub async fn scoped<'a, T, E, F>(&self, work: F) -> Result<T, E>
    where
        F: for<'r> FnOnce(&'r mut AsyncPgConnection) -> ScopedBoxFuture<'a, 'r, Result<T, E>>
            + Send
            + 'a,
        E: From<diesel::result::Error> + From<PoolError> + Send + 'a,
        T: Send + 'a,
    {
        let mut pooled = self.pool.get().await?;
        let conn: &mut AsyncPgConnection = &mut pooled;
        debug!("database session opened");

        let outcome = conn.transaction(work).await;
        match &outcome {
            Ok(_) => debug!("database session committed"),
            Err(_) => warn!("database session rolled back"),
        }
        outcome
    }
}
