//! One complete version lookup: resolve bounds, fetch, extract, reduce

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::config::{Configuration, LATEST_TAG_PLACEHOLDER};
use crate::language::Endpoints;
use crate::version::eol::resolve_minimum_version;
use crate::version::error::LookupError;
use crate::version::reducer::{reduce, truncate};
use crate::version::registry::{Fetcher, latest_tag};

/// Runs lookups against a fetcher.
///
/// Every fetch is awaited in turn; a lookup never has more than one request
/// in flight.
pub struct VersionLookup {
    fetcher: Arc<dyn Fetcher>,
    endpoints: Option<Endpoints>,
    today: NaiveDate,
}

impl VersionLookup {
    /// Create a lookup using the language's public endpoints and today's date
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            fetcher,
            endpoints: None,
            today: chrono::Local::now().date_naive(),
        }
    }

    /// Use these endpoints instead of the language's public ones
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = Some(endpoints);
        self
    }

    /// Evaluate end-of-life dates against `today`
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Fetch and reduce the versions for `config`
    pub async fn run(&self, config: &Configuration) -> Result<Vec<String>, LookupError> {
        let language = config.language;
        let endpoints = self
            .endpoints
            .clone()
            .unwrap_or_else(|| language.endpoints());

        let min_version = resolve_minimum_version(
            &config.min_version,
            &endpoints.eol_url,
            self.fetcher.as_ref(),
            self.today,
        )
        .await?;
        info!(
            "Looking up {} versions between {} and {}",
            language, min_version, config.max_version
        );

        let versions_url = self.versions_url(&endpoints).await?;
        let shape = language.payload_shape();
        debug!(html = shape.is_html(), "Fetching manifest {}", versions_url);
        let page = self.fetcher.fetch(&versions_url).await?;

        let raw_versions = shape.extract(&page.body)?;
        debug!("Extracted {} raw versions", raw_versions.len());

        let versions = reduce(&raw_versions, &config.range_policy(min_version));
        let versions = truncate(versions, config.selection());
        info!("Found {} {} versions", versions.len(), language);

        Ok(versions)
    }

    /// Manifest URL with the latest release tag filled in where needed
    async fn versions_url(&self, endpoints: &Endpoints) -> Result<String, LookupError> {
        match &endpoints.releases_url {
            Some(releases_url) => {
                let tag = latest_tag(self.fetcher.as_ref(), releases_url).await?;
                debug!("Latest release tag is {}", tag);
                Ok(endpoints.versions_url.replace(LATEST_TAG_PLACEHOLDER, &tag))
            }
            None => Ok(endpoints.versions_url.clone()),
        }
    }
}
