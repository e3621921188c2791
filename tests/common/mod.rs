//! Shared utilities for integration tests.

use std::net::SocketAddr;

use greeting_service::config::ServiceConfig;
use greeting_service::http::ServerError;
use greeting_service::{HttpServer, Shutdown};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A running service bound to an ephemeral local port.
pub struct TestService {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<Result<(), ServerError>>,
}

impl TestService {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Trigger shutdown and wait for the server task to finish.
    pub async fn stop(self) -> Result<(), ServerError> {
        self.shutdown.trigger();
        self.handle.await.expect("server task panicked")
    }
}

/// Start the service with `config` on 127.0.0.1 and a random port.
pub async fn start_service(mut config: ServiceConfig) -> TestService {
    config.listener.host = "127.0.0.1".into();
    config.listener.port = 0;

    let listener = TcpListener::bind(config.listener.socket_addr().unwrap())
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let handle = tokio::spawn(HttpServer::new(config).run(listener, server_shutdown));

    TestService {
        addr,
        shutdown,
        handle,
    }
}

/// A client that never reuses connections, so shutdown is not held up by idle keep-alives.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
