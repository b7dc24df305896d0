use std::time::Duration;

use aqar_portal::backend::HttpPortalBackend;
use aqar_portal::config::BackendConfig;
use axum::Router;
use tokio::net::TcpListener;

/// Bind the router to an ephemeral local port and return its base URL.
pub async fn spawn_backend(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("listener address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("mock backend serves");
    });
    format!("http://{addr}")
}

pub fn http_backend(base_url: &str) -> HttpPortalBackend {
    HttpPortalBackend::new(&BackendConfig {
        base_url: base_url.to_string(),
        timeout: Duration::from_secs(5),
    })
    .expect("client builds")
}
