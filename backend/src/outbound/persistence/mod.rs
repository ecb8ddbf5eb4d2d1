//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! # Architecture
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Scoped sessions**: all reads go through [`SessionFactory::scoped`],
//!   which owns commit, rollback, and connection release.
//!
//! # Example
//!
//! ```ignore
//! use sample_app::domain::FeatureArea;
//! use sample_app::outbound::persistence::{
//!     DbPool, DieselFeatureSampleRepository, PoolConfig, SessionFactory,
//! };
//!
//! let pool = DbPool::new(PoolConfig::new("postgresql://localhost:5432/app")).await?;
//! let repo = DieselFeatureSampleRepository::new(SessionFactory::new(pool), FeatureArea::Feature1);
//! ```

mod diesel_feature_sample_repository;
mod feature_sample_queries;
mod migrations;
pub(crate) mod models;
mod pool;
pub(crate) mod schema;
mod session;
mod session_error_mapping;

pub use diesel_feature_sample_repository::DieselFeatureSampleRepository;
pub use feature_sample_queries::{get_feature1_by_id, get_feature2_by_id};
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
pub use session::{SessionError, SessionFactory};
