//! HTTP server initialization and runtime setup.
//!
//! Builds the storage backends selected by configuration, wires the link service
//! and runs the Axum server until a shutdown signal arrives.

use crate::application::LinkService;
use crate::config::{Config, StorageBackend};
use crate::domain::repositories::{ClickRepository, LinkRepository};
use crate::infrastructure::persistence::{
    InMemoryClickRepository, InMemoryLinkRepository, NullClickRepository, RedisClickRepository,
    RedisLinkRepository, connect_redis,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tokio::sync::oneshot;

type Repositories = (Arc<dyn LinkRepository>, Arc<dyn ClickRepository>);

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Link and click repositories for the configured backend
/// - Link service and shared state
/// - Axum HTTP server with graceful shutdown on Ctrl-C / SIGTERM
///
/// After the signal, open connections get `shutdown_timeout` to finish before
/// the server returns anyway. In-flight click recordings are detached tasks
/// and are not awaited on shutdown.
///
/// # Errors
///
/// Returns an error if:
/// - Redis is selected and unreachable
/// - Listen address is invalid or bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let (links, clicks) = build_repositories(&config).await?;

    let link_service = LinkService::new(links, clicks, config.link_service_config());
    tracing::info!(
        code_length = link_service.generator().length(),
        combinations = %link_service.generator().combinations(),
        "Link service ready"
    );

    let state = AppState::new(Arc::new(link_service));
    let app = app_router(state, config.request_timeout());

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let server = axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(async move {
        shutdown_signal().await;
        let _ = shutdown_tx.send(());
    })
    .into_future();

    drain_with_deadline(server, shutdown_rx, config.shutdown_timeout()).await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn build_repositories(config: &Config) -> Result<Repositories> {
    match config.storage_backend {
        StorageBackend::Memory => {
            tracing::info!("Storage: in-memory (data is lost on exit)");

            let clicks: Arc<dyn ClickRepository> = if config.click_history {
                Arc::new(InMemoryClickRepository::new())
            } else {
                Arc::new(NullClickRepository::new())
            };

            Ok((Arc::new(InMemoryLinkRepository::new()), clicks))
        }
        StorageBackend::Redis => {
            let redis_url = config
                .redis_url
                .as_deref()
                .context("Redis backend selected without a Redis URL")?;

            let conn = connect_redis(redis_url)
                .await
                .context("Failed to initialize Redis storage")?;
            tracing::info!(prefix = %config.redis_key_prefix, "Storage: Redis");

            let clicks: Arc<dyn ClickRepository> = if config.click_history {
                Arc::new(RedisClickRepository::new(
                    conn.clone(),
                    &config.redis_key_prefix,
                ))
            } else {
                Arc::new(NullClickRepository::new())
            };

            Ok((
                Arc::new(RedisLinkRepository::new(conn, &config.redis_key_prefix)),
                clicks,
            ))
        }
    }
}

/// Drives `server` to completion, but once `shutdown_started` fires gives it
/// only `grace` more to drain open connections.
async fn drain_with_deadline<F, E>(
    server: F,
    shutdown_started: oneshot::Receiver<()>,
    grace: Duration,
) -> Result<()>
where
    F: Future<Output = Result<(), E>>,
    E: std::error::Error + Send + Sync + 'static,
{
    tokio::pin!(server);

    tokio::select! {
        result = &mut server => return Ok(result?),
        Ok(()) = shutdown_started => {}
    }

    match tokio::time::timeout(grace, server).await {
        Ok(result) => Ok(result?),
        Err(_) => {
            tracing::warn!(
                grace_secs = grace.as_secs_f64(),
                "Connections still open after shutdown timeout, exiting anyway"
            );
            Ok(())
        }
    }
}

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
