use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3001";
const DEFAULT_WORKSPACE: &str = "Default";

pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,

    /// Workspace used when a request carries no `df-workspace-id` header.
    pub default_workspace: String,

    /// Allowed browser origin; CORS is disabled when unset.
    pub cors_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidEnvVar {
                name: "BIND_ADDR".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url,
            bind_addr,
            default_workspace: lookup("DEFAULT_WORKSPACE")
                .unwrap_or_else(|| DEFAULT_WORKSPACE.to_string()),
            cors_origin: lookup("CORS_ORIGIN"),
        })
    }
}
