//! Wayfarer gateway server
//!
//! Main entry point for the HTTP API server.

use std::sync::Arc;

use ai_core::{CompletionConfig, CompletionRouter};
use ai_speech::{OpenAiTtsProvider, SpeechConfig, TextToSpeech};
use presentation_http::{
    config::AppConfig, error::set_expose_internal_errors, routes, state::AppState,
};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wayfarer_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Wayfarer Gateway v{} starting...", env!("CARGO_PKG_VERSION"));

    // Configuration is read once here; nothing re-reads the environment later
    let config = AppConfig::from_env();
    set_expose_internal_errors(config.expose_error_details());

    let completion_config = CompletionConfig::from_env();
    let router = CompletionRouter::from_config(&completion_config)
        .map_err(|e| anyhow::anyhow!("Failed to build completion router: {e}"))?;

    if router.provider_names().is_empty() {
        tracing::warn!(
            "No completion provider configured; /chat and /generate-text will return errors"
        );
    } else {
        info!(providers = ?router.provider_names(), "Completion fallback chain ready");
    }

    let speech_config = SpeechConfig::from_env();
    if !speech_config.is_configured() {
        tracing::warn!("Speech provider not configured; /text-to-speech will return 503");
    }
    let speech: Arc<dyn TextToSpeech> = Arc::new(
        OpenAiTtsProvider::new(speech_config)
            .map_err(|e| anyhow::anyhow!("Failed to build speech provider: {e}"))?,
    );

    let state = AppState::new(Arc::new(router), speech);

    // Build router with middleware (first added = outermost)
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer);

    // Start server
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        // Log error but continue waiting - this is a best-effort signal handler
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
