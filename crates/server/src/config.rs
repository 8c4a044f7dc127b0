//! Server configuration.

use std::net::SocketAddr;

use tracing::warn;

/// Configuration for the playground server.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// Path the GraphQL endpoint is mounted at.
    pub graphql_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3001)),
            graphql_path: "/api/graphql".to_string(),
        }
    }
}

impl ServerConfig {
    /// Read overrides from the environment, falling back to defaults.
    ///
    /// `PLAYGROUND_ADDR` overrides the bind address (e.g. `127.0.0.1:8080`).
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(addr) = std::env::var("PLAYGROUND_ADDR") {
            match addr.parse() {
                Ok(addr) => config.bind_addr = addr,
                Err(e) => warn!("Ignoring invalid PLAYGROUND_ADDR {:?}: {}", addr, e),
            }
        }
        config
    }
}
