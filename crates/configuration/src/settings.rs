use crate::error::ConfigError;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: Server,
    #[serde(default)]
    pub catalog: Catalog,
}

/// Network settings for the HTTP server.
#[derive(Debug, Clone, Deserialize)]
pub struct Server {
    /// The interface to bind (e.g., "127.0.0.1" or "0.0.0.0").
    pub host: String,
    pub port: u16,
}

/// Where the entity catalog comes from.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    /// Path to a catalog JSON file. When unset, the server starts with the
    /// built-in demo catalog.
    pub data_file: Option<PathBuf>,
}

impl Config {
    /// The socket address the server binds, assembled from host and port.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|_| {
                ConfigError::ValidationError(format!(
                    "'{}:{}' is not a valid socket address",
                    self.server.host, self.server.port
                ))
            })
    }
}
