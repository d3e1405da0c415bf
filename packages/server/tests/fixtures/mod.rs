//! Test fixtures for HTTP integration tests.

use std::{net::SocketAddr, sync::Arc, time::Duration};

use irori_server::{
    infrastructure::repository,
    ui::{AppState, create_router},
};
use tokio::{net::TcpListener, task::JoinHandle};

/// Server running in the test process on an ephemeral port.
///
/// The server task is aborted when the fixture is dropped.
pub struct TestServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server backed by in-memory room storage
    pub async fn start() -> Self {
        Self::start_with_database_url("memory://").await
    }

    /// Start a server backed by the storage selected by `database_url`
    pub async fn start_with_database_url(database_url: &str) -> Self {
        // One connection keeps `sqlite::memory:` a single database
        Self::start_with_pool(database_url, 1).await
    }

    /// Start a server whose storage pool holds up to `max_connections` connections
    pub async fn start_with_pool(database_url: &str, max_connections: u32) -> Self {
        let repository =
            repository::connect(database_url, max_connections, Duration::from_secs(5))
                .await
                .expect("Failed to connect room storage");
        let app = create_router(Arc::new(AppState::new(repository)));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Test server failed");
        });

        Self { addr, handle }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
