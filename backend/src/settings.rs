//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `WEDDING_*` environment variables and an
//! optional configuration file, in OrthoConfig's usual precedence.

use std::net::{AddrParseError, IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Startup configuration for the wedding backend.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "WEDDING")]
pub struct AppSettings {
    /// IP address to listen on.
    pub host: Option<String>,
    /// TCP port to listen on.
    pub port: Option<u16>,
    /// PostgreSQL connection string. In-memory stores are used when absent.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Leave pending migrations unapplied at startup.
    #[ortho_config(default = false)]
    pub skip_migrations: bool,
}

impl AppSettings {
    /// Configured host, defaulting to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Configured port, defaulting to 8080.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Pool size, defaulting to 10.
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }

    /// Socket address built from `host` and `port`.
    ///
    /// # Errors
    ///
    /// Returns [`AddrParseError`] when `host` is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let ip: IpAddr = self.host().parse()?;
        Ok(SocketAddr::new(ip, self.port()))
    }
}

#[cfg(test)]
mod tests {
    //! Settings defaults and environment overrides.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 5] = [
        "WEDDING_HOST",
        "WEDDING_PORT",
        "WEDDING_DATABASE_URL",
        "WEDDING_DB_MAX_CONNECTIONS",
        "WEDDING_SKIP_MIGRATIONS",
    ];

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("wedding-backend")])
            .expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(settings.host(), "0.0.0.0");
        assert_eq!(settings.port(), 8080);
        assert_eq!(settings.database_url(), None);
        assert_eq!(settings.db_max_connections(), 10);
        assert!(!settings.skip_migrations);
        assert_eq!(
            settings.bind_addr().expect("default address parses"),
            "0.0.0.0:8080".parse::<SocketAddr>().expect("literal parses")
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("WEDDING_HOST", Some("127.0.0.1".to_owned())),
            ("WEDDING_PORT", Some("9000".to_owned())),
            (
                "WEDDING_DATABASE_URL",
                Some("postgres://localhost/wedding".to_owned()),
            ),
            ("WEDDING_DB_MAX_CONNECTIONS", Some("3".to_owned())),
            ("WEDDING_SKIP_MIGRATIONS", Some("true".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("address parses"),
            "127.0.0.1:9000".parse::<SocketAddr>().expect("literal parses")
        );
        assert_eq!(settings.database_url(), Some("postgres://localhost/wedding"));
        assert_eq!(settings.db_max_connections(), 3);
        assert!(settings.skip_migrations);
    }

    #[rstest]
    fn blank_database_url_counts_as_absent() {
        let _guard = lock_env([
            ("WEDDING_HOST", None::<String>),
            ("WEDDING_PORT", None),
            ("WEDDING_DATABASE_URL", Some("   ".to_owned())),
            ("WEDDING_DB_MAX_CONNECTIONS", None),
            ("WEDDING_SKIP_MIGRATIONS", None),
        ]);

        assert_eq!(load_from_empty_args().database_url(), None);
    }

    #[rstest]
    fn hostnames_are_rejected_as_bind_addresses() {
        let settings = AppSettings {
            host: Some("localhost".into()),
            port: None,
            database_url: None,
            db_max_connections: None,
            skip_migrations: false,
        };
        assert!(settings.bind_addr().is_err());
    }
}
