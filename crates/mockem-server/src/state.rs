use std::sync::Arc;

use axum::http::HeaderValue;
use chrono::TimeDelta;
use mockem_core::{Catalog, validate_catalog};
use mockem_generate::GenerateOptions;

use super::ServerError;
use super::config::ServerConfig;
use super::session::{InMemorySessionStore, SessionStore};
use super::waitlist::Waitlist;

/// Shared, read-mostly state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub catalog: Arc<Catalog>,
    pub sessions: Arc<dyn SessionStore>,
    pub waitlist: Arc<Waitlist>,
    /// Lifetime of a session and of its cookie.
    pub session_ttl: TimeDelta,
    pub cors_origins: Vec<HeaderValue>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Result<Self, ServerError> {
        let sessions = InMemorySessionStore::new(config.session.ttl()?, config.limits);
        Self::with_store(config, Arc::new(sessions))
    }

    pub fn with_store(
        config: ServerConfig,
        sessions: Arc<dyn SessionStore>,
    ) -> Result<Self, ServerError> {
        config.validate()?;
        let session_ttl = config.session.ttl()?;
        let cors_origins = config.server.cors_origins()?;

        let catalog = Catalog::builtin();
        validate_catalog(&catalog)?;

        Ok(Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            sessions,
            waitlist: Arc::new(Waitlist::new()?),
            session_ttl,
            cors_origins,
        })
    }

    /// Engine options for one request; `seed` and `generated_at` replay an earlier run.
    pub fn generate_options(
        &self,
        seed: Option<u64>,
        generated_at: Option<chrono::DateTime<chrono::Utc>>,
    ) -> GenerateOptions {
        GenerateOptions {
            seed,
            reference_time: generated_at,
            preview_rows: self.config.generation.preview_rows,
            foreign_keys: self.config.generation.foreign_key_policy(),
        }
    }
}
