use breach_checker_api::{create_api_routes, AppState};
use breach_checker_domain::config::ServerConfig;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::info;

pub async fn start_web_server(
    cfg: &ServerConfig,
    state: AppState,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", cfg.bind_address, cfg.port).parse()?;

    let app = create_api_routes(state, &cfg.cors_allowed_origins).layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(addr).await?;
    info!(bind_address = %addr, "Web server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;

    info!("Web server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM and cancels `token` so background jobs stop
/// with the server.
async fn shutdown_signal(token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
        _ = token.cancelled() => {},
    }

    info!("Shutdown signal received");
    token.cancel();
}
