//! `reqwest` backed fetcher

use std::time::Duration;

use tracing::{debug, warn};

use crate::config::USER_AGENT;
use crate::version::error::RegistryError;
use crate::version::registry::{FetchedPage, Fetcher};

/// Fetcher performing plain HTTP GET requests
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Creates a new HttpFetcher whose requests time out after `timeout`
    pub fn new(timeout: Duration) -> Result<Self, RegistryError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, RegistryError> {
        debug!("Fetching {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(url.to_string()));
        }

        if !status.is_success() {
            warn!("{} returned status {}", url, status);
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let final_url = response.url().to_string();
        let body = response.text().await.map_err(|e| {
            warn!("Failed to read response from {}: {}", url, e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        debug!("Fetched {} bytes from {}", body.len(), final_url);

        Ok(FetchedPage {
            url: final_url,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::registry::latest_tag;
    use mockito::Server;

    fn fetcher() -> HttpFetcher {
        HttpFetcher::new(Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn fetch_returns_body_and_url() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/api/releases/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"major": 8, "minor": 3, "release": 4}]"#)
            .create_async()
            .await;

        let url = format!("{}/api/releases/", server.url());
        let page = fetcher().fetch(&url).await.unwrap();

        mock.assert_async().await;
        assert_eq!(page.url, url);
        assert_eq!(page.body, r#"[{"major": 8, "minor": 3, "release": 4}]"#);
    }

    #[tokio::test]
    async fn fetch_follows_redirect_to_release_tag() {
        let mut server = Server::new_async().await;

        let redirect = server
            .mock("GET", "/actions/python-versions/releases/latest/")
            .with_status(302)
            .with_header(
                "location",
                &format!(
                    "{}/actions/python-versions/releases/tag/3.12.4-9947065640",
                    server.url()
                ),
            )
            .create_async()
            .await;
        let tag_page = server
            .mock("GET", "/actions/python-versions/releases/tag/3.12.4-9947065640")
            .with_status(200)
            .with_body("<html></html>")
            .create_async()
            .await;

        let releases_url = format!("{}/actions/python-versions/releases/latest/", server.url());
        let tag = latest_tag(&fetcher(), &releases_url).await.unwrap();

        redirect.assert_async().await;
        tag_page.assert_async().await;
        assert_eq!(tag, "3.12.4-9947065640");
    }

    #[tokio::test]
    async fn fetch_returns_not_found_for_404() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/missing.json")
            .with_status(404)
            .with_body("Not Found")
            .create_async()
            .await;

        let result = fetcher()
            .fetch(&format!("{}/missing.json", server.url()))
            .await;

        mock.assert_async().await;
        assert!(matches!(result, Err(RegistryError::NotFound(_))));
    }

    #[tokio::test]
    async fn fetch_returns_invalid_response_for_server_error() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/api/go.json")
            .with_status(503)
            .create_async()
            .await;

        let result = fetcher()
            .fetch(&format!("{}/api/go.json", server.url()))
            .await;

        mock.assert_async().await;
        assert!(matches!(result, Err(RegistryError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn fetch_returns_network_error_when_unreachable() {
        // Port 9 (discard) is not expected to accept HTTP connections
        let result = HttpFetcher::new(Duration::from_millis(500))
            .unwrap()
            .fetch("http://127.0.0.1:9/")
            .await;

        assert!(matches!(result, Err(RegistryError::Network(_))));
    }
}
