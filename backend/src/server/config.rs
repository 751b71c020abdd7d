//! HTTP server configuration object.

use std::net::SocketAddr;

use projecthub::domain::RegistrationPolicy;
use projecthub::outbound::persistence::DbPool;

/// Builder-style configuration consumed by [`super::create_server`].
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) registration: RegistrationPolicy,
}

impl ServerConfig {
    /// Configuration serving from the in-memory store with open registration.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            registration: RegistrationPolicy::default(),
        }
    }

    /// Serve from PostgreSQL through `pool` instead of the in-memory store.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    #[must_use]
    pub fn with_registration(mut self, registration: RegistrationPolicy) -> Self {
        self.registration = registration;
        self
    }
}
