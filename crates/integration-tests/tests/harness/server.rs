//! Test server wrapper that starts tonebridge on a random port

use std::net::SocketAddr;

use tokio_util::sync::CancellationToken;
use tonebridge_config::Config;
use tonebridge_server::Server;

/// A running test server instance
pub struct TestServer {
    addr: SocketAddr,
    shutdown: CancellationToken,
    client: reqwest::Client,
}

impl TestServer {
    /// Build and start a test server with the given configuration
    pub async fn start(config: Config) -> anyhow::Result<Self> {
        Self::launch(Server::new(config)).await
    }

    /// Start an already-built server
    ///
    /// Binds to port 0 for automatic port assignment. Useful when the
    /// caller needs to control the environment during `Server::new`.
    pub async fn launch(server: Server) -> anyhow::Result<Self> {
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        // Bind the listener here so we know the actual port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            axum::serve(listener, server.into_router())
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        let client = reqwest::Client::new();

        Ok(Self { addr, shutdown, client })
    }

    /// Base URL of the running test server
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Get a reference to the HTTP client
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
