use std::env;
use std::net::SocketAddr;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Reads `TICKET_PROVIDER_HOST` and `TICKET_PROVIDER_PORT`, after loading `.env` when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("TICKET_PROVIDER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("TICKET_PROVIDER_PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "TICKET_PROVIDER_PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::Invalid {
                name: "TICKET_PROVIDER_HOST",
                value: self.host.clone(),
            })
    }
}
