//! Domain ports for the hexagonal boundary.

mod feature_sample_repository;

#[cfg(test)]
pub use feature_sample_repository::MockFeatureSampleRepository;
pub use feature_sample_repository::{
    FeatureSamplePersistenceError, FeatureSampleRepository, FixtureFeatureSampleRepository,
};
