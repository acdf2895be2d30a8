use anyhow::Result;
use tokio::net::TcpListener;
use tokio::signal;

use extra_placeholders::config::Settings;
use extra_placeholders::server::{create_app, AppState};
use extra_placeholders::telemetry::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration; an invalid provider config stops startup here
    let settings = match Settings::new() {
        Ok(settings) => settings,
        Err(e) if e.is_config_error() => {
            return Err(anyhow::Error::new(e).context("refusing to start with invalid configuration"));
        }
        Err(e) => return Err(e.into()),
    };

    // Initialize tracing
    init_tracing(&settings.logging);
    tracing::info!(
        rand_int_min = settings.placeholders.rand_int_min,
        rand_int_max = settings.placeholders.rand_int_max,
        time_format_custom = %settings.placeholders.time_format_custom,
        disable_loadavg = settings.placeholders.disable_loadavg_placeholders,
        "Configuration loaded"
    );

    // Create application state
    let state = AppState::new(settings.clone());

    // Create Axum app
    let app = create_app(state);

    // Start server
    let addr = settings.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal_handler())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal_handler() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
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
                tracing::error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}
