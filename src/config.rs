//! Environment-derived runtime configuration.

use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

/// Environment variable naming the `PostgreSQL` connection string.
pub const DATABASE_URL_VAR: &str = "ATELIER_DATABASE_URL";
/// Environment variable naming the HTTP bind address.
pub const BIND_ADDR_VAR: &str = "ATELIER_BIND_ADDR";
/// Environment variable naming the scheduler poll interval in seconds.
pub const POLL_INTERVAL_VAR: &str = "ATELIER_POLL_INTERVAL_SECS";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_POLL_INTERVAL_SECS: u64 = 30;

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is absent.
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    /// An environment variable holds an unparsable value.
    #[error("invalid value for {name}: {value}")]
    InvalidVar {
        /// The offending variable.
        name: &'static str,
        /// The value that failed to parse.
        value: String,
    },
}

/// Runtime configuration for the server binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// `PostgreSQL` connection string.
    pub database_url: String,
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
    /// How often the reminder scheduler polls for due runs.
    pub poll_interval: Duration,
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    ///
    /// Only the database URL is required; the bind address defaults to
    /// `127.0.0.1:8080` and the poll interval to 30 seconds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the database URL is absent or a
    /// value fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var(DATABASE_URL_VAR)
            .map_err(|_| ConfigError::MissingVar(DATABASE_URL_VAR))?;

        let bind_raw =
            std::env::var(BIND_ADDR_VAR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr: SocketAddr = bind_raw.parse().map_err(|_| ConfigError::InvalidVar {
            name: BIND_ADDR_VAR,
            value: bind_raw.clone(),
        })?;

        let poll_interval = match std::env::var(POLL_INTERVAL_VAR) {
            Ok(value) => {
                let secs: u64 = value.parse().map_err(|_| ConfigError::InvalidVar {
                    name: POLL_INTERVAL_VAR,
                    value,
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
        };

        Ok(Self {
            database_url,
            bind_addr,
            poll_interval,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::ConfigError;

    #[test]
    fn missing_database_url_is_reported_by_name() {
        let err = ConfigError::MissingVar(super::DATABASE_URL_VAR);
        assert!(err.to_string().contains("ATELIER_DATABASE_URL"));
    }

    #[test]
    fn invalid_value_is_reported_with_the_offender() {
        let err = ConfigError::InvalidVar {
            name: super::POLL_INTERVAL_VAR,
            value: "soon".to_owned(),
        };
        assert!(err.to_string().contains("soon"));
    }
}
