//! HTTP surface of MockEm: session quotas, generation, CSV export and the waitlist.
//!
//! # Routes
//! - `GET /session` creates or resumes the quota session and sets the `session` cookie
//! - `GET /session/info` reports counters for the current cookie, zeroed without one
//! - `POST /generate` returns rows for every requested schema plus a preview slice
//! - `POST /export` returns one CSV file or a bundle of CSV files with a manifest
//! - `POST /waitlist` registers interest in API access
//! - `GET /catalog` lists categories, platforms, schemas and their dependencies
//! - `GET /health`
//!
//! Sessions live in memory. A background task drops expired sessions periodically.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

pub mod config;
pub mod error;
pub mod logging;
pub mod routes;
pub mod session;
pub mod state;
pub mod waitlist;

use config::{ConfigError, ServerConfig};
use logging::LoggingError;
use routes::{
    catalog_handler, export_handler, generate_handler, health_handler, session_handler,
    session_info_handler, waitlist_handler,
};
use session::SessionStore;
use state::AppState;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Logging(#[from] LoggingError),
    #[error("catalog error: {0}")]
    Catalog(#[from] mockem_core::Error),
    #[error("regex error: {0}")]
    Regex(#[from] regex::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(state.cors_origins.clone()))
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/session", get(session_handler))
        .route("/session/info", get(session_info_handler))
        .route("/generate", post(generate_handler))
        .route("/export", post(export_handler))
        .route("/waitlist", post(waitlist_handler))
        .route("/catalog", get(catalog_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve until Ctrl+C or SIGTERM.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    info!("Initializing state...");
    let state = AppState::new(config)?;
    let address = state.config.listen_addr()?;

    spawn_session_purge(
        state.sessions.clone(),
        state.config.session.purge_interval(),
    );

    let app = build_router(state);

    let listener = TcpListener::bind(address).await?;
    info!(%address, "Server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutting down...");
    Ok(())
}

fn spawn_session_purge(sessions: Arc<dyn SessionStore>, every: Duration) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        // first tick completes immediately
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let removed = sessions.purge_expired().await;
            if removed > 0 {
                info!(removed, "expired sessions purged");
            } else {
                debug!("no expired sessions");
            }
        }
    });
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(err) => {
                error!(error = %err, "failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(err) => {
                error!(error = %err, "failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
