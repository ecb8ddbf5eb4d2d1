//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `SAMPLE_APP_*` environment variables, and an
//! optional configuration file, with the defaults below filling any gaps.

use std::net::{AddrParseError, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_DATABASE_URL: &str = "postgresql://localhost:5432/app";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_POOL_MAX_SIZE: u32 = 10;
const DEFAULT_RUN_MIGRATIONS: bool = true;

/// Settings for the `sample-app` server binary.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SAMPLE_APP")]
pub struct AppSettings {
    /// PostgreSQL connection string.
    pub database_url: Option<String>,
    /// Socket address the HTTP server listens on.
    pub bind_addr: Option<String>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Apply pending migrations before serving traffic.
    pub run_migrations: Option<bool>,
}

impl AppSettings {
    /// Return the configured database URL, falling back to the local default.
    pub fn database_url(&self) -> &str {
        self.database_url.as_deref().unwrap_or(DEFAULT_DATABASE_URL)
    }

    /// Parse the configured bind address.
    ///
    /// # Errors
    ///
    /// Returns [`AddrParseError`] when the value is not `host:port`.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR).parse()
    }

    /// Return the configured pool size, falling back to the default.
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }

    /// Whether to apply pending migrations at startup; on unless disabled.
    pub fn run_migrations(&self) -> bool {
        self.run_migrations.unwrap_or(DEFAULT_RUN_MIGRATIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 4] = [
        "SAMPLE_APP_DATABASE_URL",
        "SAMPLE_APP_BIND_ADDR",
        "SAMPLE_APP_POOL_MAX_SIZE",
        "SAMPLE_APP_RUN_MIGRATIONS",
    ];

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("sample-app")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|key| (key, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(settings.database_url(), DEFAULT_DATABASE_URL);
        assert_eq!(
            settings.bind_addr().expect("default parses"),
            SocketAddr::from(([0, 0, 0, 0], 8080))
        );
        assert_eq!(settings.pool_max_size(), DEFAULT_POOL_MAX_SIZE);
        assert!(settings.run_migrations());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            (
                "SAMPLE_APP_DATABASE_URL",
                Some("postgresql://app:secret@db:5432/samples".to_owned()),
            ),
            ("SAMPLE_APP_BIND_ADDR", Some("127.0.0.1:9000".to_owned())),
            ("SAMPLE_APP_POOL_MAX_SIZE", Some("4".to_owned())),
            ("SAMPLE_APP_RUN_MIGRATIONS", Some("false".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.database_url(),
            "postgresql://app:secret@db:5432/samples"
        );
        assert_eq!(
            settings.bind_addr().expect("override parses"),
            SocketAddr::from(([127, 0, 0, 1], 9000))
        );
        assert_eq!(settings.pool_max_size(), 4);
        assert!(!settings.run_migrations());
    }

    #[rstest]
    fn malformed_bind_addr_is_reported() {
        let _guard = lock_env([("SAMPLE_APP_BIND_ADDR", Some("not an address".to_owned()))]);

        let settings = load_from_empty_args();
        assert!(settings.bind_addr().is_err());
    }
}
