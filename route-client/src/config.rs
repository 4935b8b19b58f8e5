//! Process configuration read from the environment.

use std::net::SocketAddr;

use crate::backend::{BackendConfig, DEFAULT_TIMEOUT_SECS};
use crate::planner::{ResponseOrdering, UnknownOrdering};

pub const BACKEND_URL_VAR: &str = "ROUTE_BACKEND_URL";
pub const BACKEND_TIMEOUT_VAR: &str = "ROUTE_BACKEND_TIMEOUT_SECS";
pub const LISTEN_ADDR_VAR: &str = "ROUTE_CLIENT_ADDR";
pub const ORDERING_VAR: &str = "ROUTE_RESPONSE_ORDERING";

/// Address the UI is served on unless overridden.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

/// Errors from reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}: invalid timeout {value:?}, expected a positive number of seconds")]
    Timeout { var: &'static str, value: String },

    #[error("{var}: invalid socket address {value:?}")]
    ListenAddr { var: &'static str, value: String },

    #[error("ROUTE_RESPONSE_ORDERING: {0}")]
    Ordering(#[from] UnknownOrdering),
}

/// Everything the binary needs to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub backend: BackendConfig,
    pub listen_addr: SocketAddr,
    pub ordering: ResponseOrdering,
}

impl ClientConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's value
    /// if set. Unset and empty variables fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let mut backend = BackendConfig::default();
        if let Some(url) = get(BACKEND_URL_VAR) {
            backend = backend.with_base_url(url.trim());
        }

        let timeout_secs = match get(BACKEND_TIMEOUT_VAR) {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::Timeout {
                        var: BACKEND_TIMEOUT_VAR,
                        value,
                    });
                }
            },
            None => DEFAULT_TIMEOUT_SECS,
        };
        backend = backend.with_timeout(timeout_secs);

        let addr = get(LISTEN_ADDR_VAR).unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::ListenAddr {
                var: LISTEN_ADDR_VAR,
                value: addr.clone(),
            })?;

        let ordering = match get(ORDERING_VAR) {
            Some(value) => value.parse::<ResponseOrdering>()?,
            None => ResponseOrdering::default(),
        };

        Ok(Self {
            backend,
            listen_addr,
            ordering,
        })
    }
}
