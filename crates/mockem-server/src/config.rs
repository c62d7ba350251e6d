use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use mockem_core::{ForeignKeyPolicy, PREVIEW_ROWS};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
    #[error("invalid listen address: {0}")]
    Address(#[from] std::net::AddrParseError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub host: String,
    pub port: u16,
    /// Mark the session cookie `Secure`; turn off for plain-http local development.
    pub cookie_secure: bool,
    /// Origins allowed by CORS; empty allows none.
    pub allowed_origins: Vec<String>,
}

impl ServerSection {
    /// Parsed CORS origins. `*` is not allowed alongside credentials.
    pub fn cors_origins(&self) -> Result<Vec<HeaderValue>, ConfigError> {
        self.allowed_origins
            .iter()
            .map(|origin| {
                let invalid = || ConfigError::InvalidValue {
                    key: "server.allowed_origins".to_string(),
                    value: origin.clone(),
                };
                if origin.trim() == "*" {
                    return Err(invalid());
                }
                HeaderValue::from_str(origin).map_err(|_| invalid())
            })
            .collect()
    }
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4000,
            cookie_secure: true,
            allowed_origins: vec!["http://localhost:5173".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSection {
    pub ttl_hours: u64,
    pub purge_interval_secs: u64,
}

impl Default for SessionSection {
    fn default() -> Self {
        Self {
            ttl_hours: 24,
            purge_interval_secs: 600,
        }
    }
}

impl SessionSection {
    pub fn ttl(&self) -> Result<chrono::TimeDelta, ConfigError> {
        i64::try_from(self.ttl_hours)
            .ok()
            .and_then(chrono::TimeDelta::try_hours)
            .filter(|ttl| *ttl > chrono::TimeDelta::zero())
            .ok_or_else(|| ConfigError::InvalidValue {
                key: "session.ttl_hours".to_string(),
                value: self.ttl_hours.to_string(),
            })
    }

    pub fn purge_interval(&self) -> Duration {
        Duration::from_secs(self.purge_interval_secs.max(1))
    }
}

/// Daily per-session quotas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsSection {
    pub max_rows: u64,
    pub max_exports: u64,
    pub max_schema_batches: u64,
}

impl Default for LimitsSection {
    fn default() -> Self {
        Self {
            max_rows: 500,
            max_exports: 1,
            max_schema_batches: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSection {
    pub preview_rows: usize,
    /// Reject requests that select a child schema without its parent schemas.
    pub require_parents: bool,
}

impl Default for GenerationSection {
    fn default() -> Self {
        Self {
            preview_rows: PREVIEW_ROWS,
            require_parents: false,
        }
    }
}

impl GenerationSection {
    pub fn foreign_key_policy(&self) -> ForeignKeyPolicy {
        if self.require_parents {
            ForeignKeyPolicy::RequireParents
        } else {
            ForeignKeyPolicy::Placeholder
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub format: LogFormat,
    /// Default filter directive when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            filter: "info,tower_http=info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub server: ServerSection,
    pub session: SessionSection,
    pub limits: LimitsSection,
    pub generation: GenerationSection,
    pub logging: LoggingSection,
}

impl ServerConfig {
    /// Load from an optional TOML file, apply `MOCKEM_*` environment overrides, then validate.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                toml::from_str(&content)?
            }
            None => ServerConfig::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that cannot be served: bad listen address, CORS origins or session ttl.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.listen_addr()?;
        self.server.cors_origins()?;
        self.session.ttl()?;
        Ok(())
    }

    /// Apply overrides from an environment lookup.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("MOCKEM_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("MOCKEM_PORT") {
            self.server.port = parse_value("MOCKEM_PORT", &port)?;
        }
        if let Some(secure) = lookup("MOCKEM_COOKIE_SECURE") {
            self.server.cookie_secure = parse_value("MOCKEM_COOKIE_SECURE", &secure)?;
        }
        if let Some(format) = lookup("MOCKEM_LOG_FORMAT") {
            self.logging.format = format.parse().map_err(|_| ConfigError::InvalidValue {
                key: "MOCKEM_LOG_FORMAT".to_string(),
                value: format.clone(),
            })?;
        }
        Ok(())
    }

    /// Bind address; `host` is an IPv4 or IPv6 literal, or `localhost`.
    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        let host = self.server.host.trim();
        let ip = if host.eq_ignore_ascii_case("localhost") {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        } else {
            host.trim_start_matches('[').trim_end_matches(']').parse::<IpAddr>()?
        };
        Ok(SocketAddr::new(ip, self.server.port))
    }

    /// Log settings that make the deployment unusual.
    pub fn warn_on_risky_settings(&self) {
        if !self.server.cookie_secure {
            warn!("session cookie is not marked Secure");
        }
        if self.server.allowed_origins.is_empty() {
            warn!("no CORS origins configured; browsers on other origins will be rejected");
        }
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}
