//! Server configuration loaded from environment variables.

use crate::errors::{Error, Result};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 5000;

/// Network settings for the API service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind (`HOST`, defaults to all interfaces)
    pub host: IpAddr,
    /// Port to listen on (`PORT`, defaults to 5000)
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Reads `HOST` and `PORT` from the process environment.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if either variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        Self::from_values(
            std::env::var("HOST").ok().as_deref(),
            std::env::var("PORT").ok().as_deref(),
        )
    }

    fn from_values(host: Option<&str>, port: Option<&str>) -> Result<Self> {
        let defaults = Self::default();

        let host = match host {
            Some(raw) => raw.trim().parse().map_err(|e| Error::Config {
                message: format!("Invalid HOST `{raw}`: {e}"),
            })?,
            None => defaults.host,
        };
        let port = match port {
            Some(raw) => raw.trim().parse().map_err(|e| Error::Config {
                message: format!("Invalid PORT `{raw}`: {e}"),
            })?,
            None => defaults.port,
        };

        Ok(Self { host, port })
    }

    /// Socket address the server binds to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = ServerConfig::from_values(None, None).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:5000");
    }

    #[test]
    fn test_explicit_values() {
        let config = ServerConfig::from_values(Some("127.0.0.1"), Some(" 8080 ")).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_invalid_port_is_config_error() {
        let result = ServerConfig::from_values(None, Some("not-a-port"));
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        let result = ServerConfig::from_values(None, Some("70000"));
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));
    }

    #[test]
    fn test_invalid_host_is_config_error() {
        let result = ServerConfig::from_values(Some("localhost:80"), None);
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));
    }
}
