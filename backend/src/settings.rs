//! Server settings loaded via OrthoConfig.
//!
//! Values layer defaults, an optional configuration file, `TOUR_RATINGS_*`
//! environment variables, and command-line flags, in increasing precedence.

use std::net::{AddrParseError, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::PoolConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Runtime configuration for the ratings server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TOUR_RATINGS")]
pub struct ServerSettings {
    /// Socket address the HTTP listener binds to.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection URL. Without it the server runs on fixture
    /// adapters that know no tours.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Idle connections the pool keeps open.
    pub db_min_idle: Option<u32>,
    /// Seconds to wait for a pooled connection.
    pub db_connection_timeout_secs: Option<u64>,
    /// Skip applying embedded migrations at startup.
    #[ortho_config(default = false)]
    pub skip_migrations: bool,
}

impl ServerSettings {
    /// Parse the configured bind address, falling back to `0.0.0.0:8080`.
    ///
    /// # Errors
    ///
    /// Returns [`AddrParseError`] when the configured value is not a socket
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.bind_addr
            .as_deref()
            .unwrap_or(DEFAULT_BIND_ADDR)
            .parse()
    }

    /// Database URL, if persistence is configured.
    #[must_use]
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    /// Pool options derived from these settings, `None` without a database
    /// URL.
    #[must_use]
    pub fn pool_config(&self) -> Option<PoolConfig> {
        let url = self.database_url()?;
        let timeout = self
            .db_connection_timeout_secs
            .map_or(PoolConfig::DEFAULT_CONNECTION_TIMEOUT, Duration::from_secs);
        Some(
            PoolConfig::new(url)
                .with_max_size(
                    self.db_max_connections
                        .unwrap_or(PoolConfig::DEFAULT_MAX_SIZE),
                )
                .with_min_idle(Some(
                    self.db_min_idle.unwrap_or(PoolConfig::DEFAULT_MIN_IDLE),
                ))
                .with_connection_timeout(timeout),
        )
    }
}
