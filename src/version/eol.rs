//! End-of-life feed handling and minimum version resolution
//!
//! The feed is the endoflife.date product API: a list of release cycles, each
//! with an `eol` field that is `false` (supported), `true` (end of life) or
//! the date support ends.

use chrono::NaiveDate;
use semver::Version;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::{MAX_VERSION, MIN_VERSION, MinimumVersion};
use crate::version::adapters::scalar_to_string;
use crate::version::error::LookupError;
use crate::version::registry::Fetcher;
use crate::version::semver::parse_version;

/// End-of-life marker of a release cycle
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum EolStatus {
    /// `true` once the cycle is end of life, `false` while open-ended
    Flag(bool),
    /// ISO date support ends
    Date(String),
}

/// One release cycle from the feed
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EolRecord {
    pub cycle: Value,
    #[serde(default)]
    pub eol: Option<EolStatus>,
}

impl EolRecord {
    fn cycle_version(&self) -> Option<Version> {
        scalar_to_string(&self.cycle).and_then(|cycle| parse_version(&cycle))
    }
}

/// Reduce a feed to the lowest cycle still supported on `today`.
///
/// Open-ended cycles lower a running minimum, while a cycle with a future
/// end-of-life date replaces the result outright, so the last such cycle in
/// feed order wins. With nothing supported the result is [`MAX_VERSION`].
pub fn minimum_from_feed(records: &[EolRecord], today: NaiveDate) -> Version {
    let mut min_version = MAX_VERSION;

    for record in records {
        let Some(cycle) = record.cycle_version() else {
            debug!("Skipping release cycle {}", record.cycle);
            continue;
        };

        match &record.eol {
            None | Some(EolStatus::Flag(true)) => continue,
            Some(EolStatus::Flag(false)) => min_version = min_version.min(cycle),
            Some(EolStatus::Date(date)) => match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
                Ok(eol) if today < eol => min_version = cycle,
                Ok(_) => {}
                Err(e) => warn!("Ignoring cycle {} with eol {:?}: {}", cycle, date, e),
            },
        }
    }

    min_version
}

/// Turn a minimum version directive into a concrete bound.
///
/// Only [`MinimumVersion::Eol`] touches the network.
pub async fn resolve_minimum_version(
    directive: &MinimumVersion,
    eol_url: &str,
    fetcher: &dyn Fetcher,
    today: NaiveDate,
) -> Result<Version, LookupError> {
    match directive {
        MinimumVersion::All => Ok(MIN_VERSION),
        MinimumVersion::Exact(version) => Ok(version.clone()),
        MinimumVersion::Eol => {
            let page = fetcher.fetch(eol_url).await?;
            let records: Vec<EolRecord> = serde_json::from_str(&page.body)?;
            let min_version = minimum_from_feed(&records, today);
            info!(
                "Resolved minimum version {} from {} release cycles",
                min_version,
                records.len()
            );
            Ok(min_version)
        }
    }
}
