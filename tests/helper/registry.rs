//! Release endpoint test utilities

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use mockito::{Mock, Server, ServerGuard};

use get_language_versions::config::{Configuration, ConfigurationInput};
use get_language_versions::language::Endpoints;
use get_language_versions::version::http::HttpFetcher;
use get_language_versions::version::lookup::VersionLookup;

/// Date end-of-life feeds are evaluated against
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, 10).unwrap()
}

/// Mock server standing in for GitHub, the manifest hosts and endoflife.date
pub struct ReleaseServer {
    server: ServerGuard,
}

impl ReleaseServer {
    pub async fn start() -> Self {
        Self {
            server: Server::new_async().await,
        }
    }

    pub fn url(&self) -> String {
        self.server.url()
    }

    /// `/{repo}/releases/latest/` redirecting to `/{repo}/releases/tag/{tag}`
    pub async fn mock_latest_release(&mut self, repo: &str, tag: &str) -> (Mock, Mock) {
        let tag_path = format!("/{}/releases/tag/{}", repo, tag);
        let redirect = self
            .server
            .mock("GET", format!("/{}/releases/latest/", repo).as_str())
            .with_status(302)
            .with_header("location", &format!("{}{}", self.server.url(), tag_path))
            .create_async()
            .await;
        let tag_page = self
            .server
            .mock("GET", tag_path.as_str())
            .with_status(200)
            .with_body("<html></html>")
            .create_async()
            .await;
        (redirect, tag_page)
    }

    pub async fn mock_document(&mut self, path: &str, content_type: &str, body: &str) -> Mock {
        self.server
            .mock("GET", path)
            .with_status(200)
            .with_header("content-type", content_type)
            .with_body(body)
            .create_async()
            .await
    }

    pub async fn mock_json(&mut self, path: &str, body: &str) -> Mock {
        self.mock_document(path, "application/json", body).await
    }

    pub async fn mock_status(&mut self, path: &str, status: usize) -> Mock {
        self.server
            .mock("GET", path)
            .with_status(status)
            .create_async()
            .await
    }

    /// Endpoints for a manifest behind a latest-release redirect
    pub fn tagged_endpoints(&self, repo: &str, manifest_path: &str, eol_path: &str) -> Endpoints {
        Endpoints {
            versions_url: format!("{}/{}/LATEST_TAG{}", self.url(), repo, manifest_path),
            releases_url: Some(format!("{}/{}/releases/latest/", self.url(), repo)),
            eol_url: format!("{}{}", self.url(), eol_path),
        }
    }

    /// Endpoints for a manifest fetched directly
    pub fn direct_endpoints(&self, manifest_path: &str, eol_path: &str) -> Endpoints {
        Endpoints {
            versions_url: format!("{}{}", self.url(), manifest_path),
            releases_url: None,
            eol_url: format!("{}{}", self.url(), eol_path),
        }
    }
}

/// Lookup over real HTTP against the given endpoints
pub fn create_test_lookup(endpoints: Endpoints) -> VersionLookup {
    let fetcher = HttpFetcher::new(Duration::from_secs(5)).unwrap();
    VersionLookup::new(Arc::new(fetcher))
        .with_endpoints(endpoints)
        .with_today(today())
}

pub fn create_test_config(language: &str, input: ConfigurationInput) -> Configuration {
    Configuration::new(ConfigurationInput {
        language: language.to_string(),
        ..input
    })
    .unwrap()
}
