#![allow(dead_code)]

use beacon::identity::DeploymentIdentity;
use beacon::routes;
use beacon::state::AppState;

/// Test server that owns a fixed Deployment Identity.
/// Each instance is isolated — safe for parallel tests.
pub struct TestServer {
    pub state: AppState,
}

impl TestServer {
    /// Create a TestServer with the given version tag and a fixed hostname,
    /// bypassing environment and OS lookups.
    pub fn with_version(version: &str) -> Self {
        let identity =
            DeploymentIdentity::with_hostname(version.to_string(), "test-host".to_string());
        Self {
            state: AppState::new(identity),
        }
    }

    /// Returns an Axum Router wired to this server's state for `oneshot()` calls.
    pub fn router(&self) -> axum::Router {
        routes::router(self.state.clone())
    }

    /// Binds a TCP listener on port 0, spawns the server, and returns the base URL.
    pub async fn spawn(&self) -> String {
        let app = self.router();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://127.0.0.1:{}", addr.port())
    }
}

/// Creates a test app reporting the default `v1` tag.
pub fn test_app() -> axum::Router {
    TestServer::with_version("v1").router()
}

/// Parse a response body into a `serde_json::Value`.
pub async fn parse_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
