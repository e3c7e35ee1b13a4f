use clap::Parser; // for cli
use prompt_relay::config::{Args, RelayConfig};
use prompt_relay::logging::configure_logging;
use prompt_relay::startup::build_router;
use prompt_relay::state::AppState;
use std::sync::Arc;
use tokio::signal;

// this is main async function with tokio
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional, API_KEY may also come from the real environment
    dotenvy::dotenv().ok();

    // parse cli arguments
    let args = Args::parse();
    let config = RelayConfig::from_args(args).map_err(|e| {
        eprintln!("!!! {} !!!", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    configure_logging(config.log_format)?;

    let state = Arc::new(AppState::new(config.upstream.clone()));
    let app = build_router(state, &config.cors);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
        anyhow::anyhow!("Failed to bind to address {}: {}", addr, e)
    })?;

    tracing::info!("Relay running on http://localhost:{}", config.port);
    tracing::info!("Forwarding prompts to {}", config.upstream.url);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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

    tracing::info!("Shutdown signal received");
}
