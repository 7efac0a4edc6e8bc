//! Local GeoJSON fixture server for adapter tests.

use std::net::SocketAddr;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;

/// An axum server on an ephemeral port answering fixed bodies.
pub(crate) struct FixtureServer {
    addr: SocketAddr,
}

impl FixtureServer {
    /// Serve each `(path, status, body)` triple until the runtime stops.
    pub(crate) async fn start(routes: Vec<(&'static str, u16, String)>) -> Self {
        let mut router = Router::new();
        for (path, status, body) in routes {
            let status = StatusCode::from_u16(status).unwrap();
            router = router.route(
                path,
                get(move || {
                    let body = body.clone();
                    async move { (status, body) }
                }),
            );
        }

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        Self { addr }
    }

    /// Absolute URL of `path` on this server.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Base URL without a trailing slash.
    pub(crate) fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}
