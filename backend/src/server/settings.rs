//! Server settings loaded via OrthoConfig.
//!
//! Values layer CLI flags over `PROJECTHUB_*` environment variables over
//! configuration files.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use projecthub::domain::RegistrationPolicy;
use projecthub::outbound::persistence::PoolConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Configuration for the HTTP server and its store.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PROJECTHUB")]
pub struct ServerSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection string; the in-memory store is used without it.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Require an admin or manager identity for `POST /users`.
    #[ortho_config(default = false)]
    pub restrict_registration: bool,
}

impl ServerSettings {
    /// Parsed listen address, falling back to `0.0.0.0:8080`.
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR).parse()
    }

    pub fn registration(&self) -> RegistrationPolicy {
        if self.restrict_registration {
            RegistrationPolicy::Restricted
        } else {
            RegistrationPolicy::Open
        }
    }

    /// Pool settings when a database is configured.
    pub fn pool_config(&self) -> Option<PoolConfig> {
        let url = self.database_url.as_deref()?;
        let config = PoolConfig::new(url);
        Some(match self.pool_max_size {
            Some(max_size) => config.with_max_size(max_size),
            None => config,
        })
    }
}
