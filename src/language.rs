//! Supported languages and where their release data lives

use crate::config::LATEST_TAG_PLACEHOLDER;
use crate::version::adapters::PayloadShape;
use crate::version::error::ConfigError;

/// A language (or tool) whose releases can be looked up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Go,
    Node,
    Perl,
    Php,
    Python,
    Ruby,
    Terraform,
}

/// Remote locations consulted for one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Versions manifest; may contain the `LATEST_TAG` placeholder
    pub versions_url: String,
    /// Redirects to the latest release, whose tag replaces the placeholder
    pub releases_url: Option<String>,
    /// endoflife.date release cycle feed
    pub eol_url: String,
}

impl Language {
    /// Identifiers accepted on the command line, in display order
    pub const SUPPORTED: &'static [&'static str] = &[
        "go",
        "node",
        "nodejs",
        "perl",
        "php",
        "python",
        "ruby",
        "terraform",
    ];

    /// Returns the canonical identifier of the language
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Go => "go",
            Language::Node => "node",
            Language::Perl => "perl",
            Language::Php => "php",
            Language::Python => "python",
            Language::Ruby => "ruby",
            Language::Terraform => "terraform",
        }
    }

    /// Returns the adapter for this language's versions manifest
    pub fn payload_shape(&self) -> PayloadShape {
        match self {
            Language::Go | Language::Node | Language::Python => PayloadShape::Manifest,
            Language::Perl => PayloadShape::Perl,
            Language::Php => PayloadShape::Php,
            Language::Ruby => PayloadShape::Ruby,
            Language::Terraform => PayloadShape::Terraform,
        }
    }

    /// Returns the public endpoints for this language
    pub fn endpoints(&self) -> Endpoints {
        match self {
            Language::Go => github_manifest(
                "actions/go-versions",
                "versions-manifest.json",
                "go",
            ),
            Language::Node => github_manifest(
                "actions/node-versions",
                "versions-manifest.json",
                "nodejs",
            ),
            Language::Perl => github_manifest(
                "shogo82148/actions-setup-perl",
                "versions/linux.json",
                "perl",
            ),
            Language::Php => Endpoints {
                versions_url: "https://phpreleases.com/api/releases/".to_string(),
                releases_url: None,
                eol_url: eol_url("php"),
            },
            Language::Python => github_manifest(
                "actions/python-versions",
                "versions-manifest.json",
                "python",
            ),
            Language::Ruby => github_manifest(
                "ruby/setup-ruby",
                "ruby-builder-versions.json",
                "ruby",
            ),
            Language::Terraform => Endpoints {
                versions_url: "https://releases.hashicorp.com/terraform/".to_string(),
                releases_url: None,
                eol_url: eol_url("terraform"),
            },
        }
    }
}

fn eol_url(product: &str) -> String {
    format!("https://endoflife.date/api/{}.json", product)
}

/// Manifest served from a GitHub repository at its latest release tag
fn github_manifest(repo: &str, path: &str, eol_product: &str) -> Endpoints {
    Endpoints {
        versions_url: format!(
            "https://raw.githubusercontent.com/{}/{}/{}",
            repo, LATEST_TAG_PLACEHOLDER, path
        ),
        releases_url: Some(format!("https://github.com/{}/releases/latest/", repo)),
        eol_url: eol_url(eol_product),
    }
}

impl std::str::FromStr for Language {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "go" => Ok(Language::Go),
            "node" | "nodejs" => Ok(Language::Node),
            "perl" => Ok(Language::Perl),
            "php" => Ok(Language::Php),
            "python" => Ok(Language::Python),
            "ruby" => Ok(Language::Ruby),
            "terraform" => Ok(Language::Terraform),
            _ => Err(ConfigError::UnsupportedLanguage(s.to_string())),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
