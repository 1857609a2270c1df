//! Listing test utilities

use tokio::net::TcpListener;

use gl_latest_version::config::ResolverConfig;

/// Build a GCS `objects.list` response body containing the given object names
pub fn listing_body(names: &[&str]) -> String {
    let items: Vec<serde_json::Value> = names
        .iter()
        .map(|name| {
            serde_json::json!({
                "kind": "storage#object",
                "bucket": "gh-af",
                "name": name,
                "contentType": "application/octet-stream"
            })
        })
        .collect();

    serde_json::json!({ "kind": "storage#objects", "items": items }).to_string()
}

/// Config pointing at a test server with the default bucket and prefix
pub fn config_for(base_url: &str, timeout_secs: u64) -> ResolverConfig {
    ResolverConfig {
        base_url: base_url.to_string(),
        timeout_secs,
        ..Default::default()
    }
}

/// Spawn a server that accepts connections and never responds
///
/// Returns its base URL.
pub async fn spawn_silent_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });

    format!("http://{}", addr)
}
