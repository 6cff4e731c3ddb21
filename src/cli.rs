//! Command line arguments and output rendering

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::{ConfigurationInput, DEFAULT_REQUEST_TIMEOUT_SECS};
use crate::language::Language;

#[derive(Debug, Parser)]
#[command(name = "get-language-versions")]
#[command(
    version,
    disable_version_flag = true,
    about = "Query the supported release versions of a language"
)]
pub struct Cli {
    /// Show program's version number and exit
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,

    /// Only return the highest version found
    #[arg(short = 'H', long)]
    pub highest_only: bool,

    /// List the supported languages
    #[arg(short = 'L', long, conflicts_with = "language")]
    pub list_languages: bool,

    /// Include pre-release versions
    #[arg(short = 'P', long, conflicts_with = "remove_patch_version")]
    pub include_pre_releases: bool,

    /// Strip the patch version from the returned versions
    #[arg(short = 'R', long)]
    pub remove_patch_version: bool,

    /// The minimum version to start from (EOL, ALL or a version)
    #[arg(short = 'm', long, default_value = "EOL")]
    pub min_version: String,

    /// The maximum version to include (LATEST or a version)
    #[arg(short = 'M', long, default_value = "LATEST")]
    pub max_version: String,

    /// The maximum number of versions to return (0 returns all)
    #[arg(short = 'V', long, default_value_t = 0, allow_negative_numbers = true)]
    pub max_versions: i64,

    /// The language to check
    #[arg(short = 'l', long, required_unless_present = "list_languages")]
    pub language: Option<String>,

    /// Timeout for each HTTP request in seconds
    #[arg(short = 't', long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Log debug output
    #[arg(long)]
    pub verbose: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    /// Settings for a lookup; `None` when only listing languages
    pub fn configuration_input(&self) -> Option<ConfigurationInput> {
        let language = self.language.clone()?;

        Some(ConfigurationInput {
            language,
            min_version: self.min_version.clone(),
            max_version: self.max_version.clone(),
            include_pre_releases: self.include_pre_releases,
            remove_patch_version: self.remove_patch_version,
            highest_only: self.highest_only,
            max_versions: self.max_versions,
            timeout_secs: self.timeout,
        })
    }
}

pub fn render_languages() -> String {
    format!("Supported Languages: {}", Language::SUPPORTED.join(", "))
}

/// `language` is printed as the user spelled it, so `nodejs` stays `nodejs`
pub fn render_versions(language: &str, versions: &[String]) -> String {
    format!("{} Versions: {}", language, versions.join(", "))
}

/// One-line report for a failed run, including the error's causes
pub fn render_error(err: &anyhow::Error) -> String {
    format!("error: {:#}", err)
}
