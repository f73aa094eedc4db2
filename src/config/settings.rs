use crate::error::ConfigError;
use std::collections::HashMap;
use std::net::SocketAddr;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres { database_url: String, max_connections: u32 },
    /// Process-local store; data is lost on restart.
    Memory,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub bind_addr: SocketAddr,
    pub store: StoreBackend,
    pub body_limit_bytes: usize,
}

impl Settings {
    /// Read settings from the process environment (call `dotenvy::dotenv()` first to honour `.env`).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&std::env::vars().collect())
    }

    /// `STORE_BACKEND` is `postgres` (default, requires `DATABASE_URL`) or `memory`.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let get = |key: &str| vars.get(key).map(|v| v.trim()).filter(|v| !v.is_empty());

        let bind_raw = get("BIND_ADDR").unwrap_or(DEFAULT_BIND_ADDR);
        let bind_addr = bind_raw.parse().map_err(|_| ConfigError::Invalid {
            key: "BIND_ADDR",
            value: bind_raw.to_string(),
        })?;

        let body_limit_bytes = match get("BODY_LIMIT_BYTES") {
            Some(v) => v.parse().map_err(|_| ConfigError::Invalid {
                key: "BODY_LIMIT_BYTES",
                value: v.to_string(),
            })?,
            None => DEFAULT_BODY_LIMIT_BYTES,
        };

        let store = match get("STORE_BACKEND").map(str::to_lowercase).as_deref() {
            None | Some("postgres") => {
                let database_url = get("DATABASE_URL")
                    .ok_or(ConfigError::Missing("DATABASE_URL"))?
                    .to_string();
                let max_connections = match get("DATABASE_MAX_CONNECTIONS") {
                    Some(v) => v
                        .parse::<u32>()
                        .ok()
                        .filter(|n| *n > 0)
                        .ok_or_else(|| ConfigError::Invalid {
                            key: "DATABASE_MAX_CONNECTIONS",
                            value: v.to_string(),
                        })?,
                    None => DEFAULT_MAX_CONNECTIONS,
                };
                StoreBackend::Postgres {
                    database_url,
                    max_connections,
                }
            }
            Some("memory") => StoreBackend::Memory,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "STORE_BACKEND",
                    value: other.to_string(),
                })
            }
        };

        Ok(Settings {
            bind_addr,
            store,
            body_limit_bytes,
        })
    }
}
