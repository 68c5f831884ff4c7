//! Mock changelog pages served over HTTP

use mockito::{Mock, Server, ServerGuard};

/// A Confluence-like page listing the given versions, newest first
pub fn changelog_page(versions: &[&str]) -> String {
    let entries: String = versions
        .iter()
        .map(|version| format!("<h5>h5. Version {version}</h5>\n<ul><li>Changes</li></ul>\n"))
        .collect();

    format!("<html><head><title>Changelog</title></head><body>\n{entries}</body></html>")
}

/// Serve `body` at `/changelog` from a blocking-context server
pub fn serve_page(status: usize, body: &str) -> (ServerGuard, Mock, String) {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/changelog")
        .with_status(status)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(body)
        .create();
    let url = format!("{}/changelog", server.url());

    (server, mock, url)
}

/// Serve `body` at `/changelog` from inside a tokio test
pub async fn serve_page_async(status: usize, body: &str) -> (ServerGuard, Mock, String) {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/changelog")
        .with_status(status)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(body)
        .create_async()
        .await;
    let url = format!("{}/changelog", server.url());

    (server, mock, url)
}
