//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpListener;
use urlshort::config::ServerConfig;
use urlshort::redirect::{RouteTable, RouteTableHandle};
use urlshort::{HttpServer, Shutdown};

/// A server running in the background on an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub table: RouteTableHandle,
    pub shutdown: Shutdown,
    task: tokio::task::JoinHandle<Result<(), std::io::Error>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Trigger shutdown and wait for the server to stop.
    #[allow(dead_code)]
    pub async fn stop(self) {
        self.shutdown.trigger();
        let result = tokio::time::timeout(Duration::from_secs(5), self.task)
            .await
            .expect("server did not stop in time")
            .expect("server task panicked");
        assert!(result.is_ok());
    }
}

/// Start an `HttpServer` serving `table`.
pub async fn start_server(config: ServerConfig, table: RouteTable) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(config, table);
    let table = server.table();
    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();

    let task = tokio::spawn(async move { server.run(listener, rx).await });

    TestServer {
        addr,
        table,
        shutdown,
        task,
    }
}

/// HTTP client that reports redirects instead of following them.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}
