//! Fetcher trait for retrieving remote documents

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;

/// A fetched document together with the URL it was finally served from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// URL after following redirects
    pub url: String,
    pub body: String,
}

/// Trait for fetching release data from remote sources
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches a document, following redirects
    ///
    /// # Returns
    /// * `Ok(FetchedPage)` - Final URL and body text
    /// * `Err(RegistryError)` - On transport failure or a non-success status
    async fn fetch(&self, url: &str) -> Result<FetchedPage, RegistryError>;
}

/// Resolve the tag a "latest release" URL redirects to.
///
/// `https://github.com/o/r/releases/latest/` redirects to
/// `https://github.com/o/r/releases/tag/<tag>`; the last path segment is the tag.
pub async fn latest_tag(fetcher: &dyn Fetcher, releases_url: &str) -> Result<String, RegistryError> {
    let page = fetcher.fetch(releases_url).await?;

    let tag = page
        .url
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();

    if tag.is_empty() || page.url.trim_end_matches('/') == releases_url.trim_end_matches('/') {
        return Err(RegistryError::InvalidResponse(format!(
            "{} did not redirect to a release tag",
            releases_url
        )));
    }

    Ok(tag.to_string())
}
