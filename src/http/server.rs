//! HTTP server startup logic.
//!
//! Binding is a single attempt. The startup line is logged only once the
//! socket is listening, so a failed bind never reports a running server.

use std::future::IntoFuture;
use std::net::{AddrParseError, SocketAddr};
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use crate::config::{AppConfig, HttpServerConfig, SHUTDOWN_GRACE_SECS, STARTUP_LOG_TARGET};

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid http.host or http.port '{addr}': {source}")]
    InvalidAddress {
        addr: String,
        #[source]
        source: AddrParseError,
    },

    #[error("Failed to bind server to {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Bind the listening socket described by `config`.
pub async fn bind(config: &HttpServerConfig) -> Result<TcpListener, ServerError> {
    let addr = format!("{}:{}", config.host, config.port);
    let addr: SocketAddr = addr
        .parse()
        .map_err(|source| ServerError::InvalidAddress { addr, source })?;

    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serve `app` on an already bound listener until a shutdown signal arrives.
///
/// After the signal, in-flight requests get [`SHUTDOWN_GRACE_SECS`] to finish
/// before the remaining connections are dropped.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), ServerError> {
    let addr = listener.local_addr()?;
    tracing::info!(
        target: STARTUP_LOG_TARGET,
        %addr,
        "Server running on port {}",
        addr.port()
    );

    let (signalled_tx, signalled_rx) = oneshot::channel::<()>();
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown::shutdown_signal().await;
            let _ = signalled_tx.send(());
        })
        .into_future();

    let grace = async move {
        if signalled_rx.await.is_err() {
            std::future::pending::<()>().await;
        }
        tokio::time::sleep(Duration::from_secs(SHUTDOWN_GRACE_SECS)).await;
    };

    tokio::select! {
        result = server => {
            result?;
            tracing::info!("Server stopped");
            Ok(())
        }
        _ = grace => {
            tracing::warn!(
                grace_secs = SHUTDOWN_GRACE_SECS,
                "Grace period elapsed, dropping remaining connections"
            );
            Ok(())
        }
    }
}

/// Start the HTTP server based on configuration.
///
/// This function blocks until the server shuts down.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let listener = bind(&config.http).await?;
    serve(listener, app).await
}
