//! HTTP front end for the phrase generator.
//!
//! ## Structure
//!
//! - [`handler`]: the three endpoints and their response types.
//! - [`middleware`]: CORS, security headers, and the request timeout.
//! - [`error`]: JSON error responses.
//!
//! Layers are applied outermost first: request tracing, security headers,
//! CORS, then the per-request timeout closest to the handlers.

pub mod error;
pub mod handler;
pub mod middleware;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{Router, routing::get};
use godsays::PhraseSource;
use tokio::net::TcpListener;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tower::ServiceBuilder;
use tower_http::{
    LatencyUnit,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::config::ServerConfig;
use handler::AppState;

/// Builds the application router around `generator`.
pub fn router(generator: Arc<dyn PhraseSource>, request_timeout: Duration) -> Router {
    let security_headers = ServiceBuilder::new()
        .layer(middleware::content_type_options())
        .layer(middleware::frame_options())
        .layer(middleware::xss_protection())
        .layer(middleware::referrer_policy());

    Router::new()
        .route("/", get(handler::speak_text))
        .route("/json", get(handler::speak_json))
        .route("/health", get(handler::health))
        .layer(axum::middleware::from_fn_with_state(
            request_timeout,
            middleware::timeout,
        ))
        .layer(middleware::cors())
        .layer(security_headers)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Micros),
                ),
        )
        .with_state(AppState::new(generator))
}

/// Binds `config.server_addr` and serves until Ctrl+C or SIGTERM.
///
/// After a signal, in-flight requests get `config.shutdown_timeout` to finish
/// before the server is abandoned.
pub async fn run(config: ServerConfig, generator: Arc<dyn PhraseSource>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&config.server_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.server_addr))?;
    log_startup_info(&listener, &config, generator.as_ref());

    let app = router(generator, config.request_timeout);
    let shutdown_token = CancellationToken::new();
    let mut server = tokio::spawn({
        let token = shutdown_token.clone();
        async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(token.cancelled_owned())
                .await
        }
    });

    tokio::select! {
        res = &mut server => {
            // The server only stops on its own if something went wrong.
            res.context("server task panicked")?
                .context("server stopped unexpectedly")?;
            return Ok(());
        }
        () = shutdown_signal() => {}
    }

    tracing::info!("Shutdown signal received, terminating gracefully...");
    shutdown_token.cancel();

    match tokio::time::timeout(config.shutdown_timeout, server).await {
        Ok(res) => {
            res.context("server task panicked")??;
            tracing::info!("Server gracefully stopped");
        }
        Err(_) => {
            tracing::warn!(
                "Server forced to shutdown after {:?}",
                config.shutdown_timeout
            );
        }
    }
    Ok(())
}

fn log_startup_info(listener: &TcpListener, config: &ServerConfig, generator: &dyn PhraseSource) {
    let addr = listener
        .local_addr()
        .map_or_else(|_| config.server_addr.clone(), |addr| addr.to_string());

    if cfg!(debug_assertions) {
        tracing::info!("Starting God Says HTTP server on {addr} with config: {config:#?}");
    } else {
        tracing::info!("Starting God Says HTTP server on {addr}");
    }
    tracing::info!(
        words = generator.words_count(),
        default_amount = generator.amount(),
        "Wordlist loaded"
    );
    tracing::info!("Endpoints:");
    tracing::info!("  GET /        - Plain text response");
    tracing::info!("  GET /json    - JSON response");
    tracing::info!("  GET /health  - Health check");
}

async fn shutdown_signal() {
    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C signal"),
        () = terminate => tracing::info!("Received SIGTERM signal"),
    }
}
