//! In-process server for route tests: the real router on an ephemeral port.

use tempfile::TempDir;
use tokio::net::TcpListener;

use crate::state::{AppState, test_helpers};

pub(crate) struct TestServer {
    pub base_url: String,
    pub client: reqwest::Client,
    pub state: AppState,
    pub uploads: TempDir,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

pub(crate) async fn spawn() -> TestServer {
    let uploads = tempfile::tempdir().expect("tempdir");
    let state = test_helpers::test_app_state(uploads.path());
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");

    let app = super::app(state.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server failed");
    });

    TestServer { base_url: format!("http://{addr}"), client: reqwest::Client::new(), state, uploads }
}
