//! releases.hashicorp.com HTML index

use scraper::{Html, Selector};

use crate::version::error::LookupError;

/// Path prefix of every release link on the index page
const PATH_PREFIX: &str = "/terraform/";

pub fn extract(payload: &str) -> Result<Vec<String>, LookupError> {
    let document = Html::parse_document(payload);
    let anchors = Selector::parse("a[href]")
        .map_err(|e| LookupError::Payload(format!("Failed to parse anchor selector: {}", e)))?;

    Ok(document
        .select(&anchors)
        .filter_map(|anchor| anchor.value().attr("href"))
        .map(|href| {
            href.strip_prefix(PATH_PREFIX)
                .unwrap_or(href)
                .trim_end_matches('/')
                .to_string()
        })
        .collect())
}
