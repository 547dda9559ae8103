//! HTTP server
//!
//! Binds the listener and serves the router until a shutdown signal.

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::Config;

/// A bound, not yet running server
pub struct Server {
    listener: TcpListener,
    app: Router,
}

impl Server {
    /// Bind to the configured address
    pub async fn bind(config: &Config, app: Router) -> anyhow::Result<Self> {
        let addr = config.addr()?;
        let listener = TcpListener::bind(addr).await?;
        Ok(Self { listener, app })
    }

    /// Address actually bound (useful with port 0)
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests
    pub async fn run<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tracing::info!("Listening on http://{}", self.local_addr()?);

        axum::serve(self.listener, self.app)
            .with_graceful_shutdown(shutdown)
            .await?;

        Ok(())
    }
}
