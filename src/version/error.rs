use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unsupported language: {0} [use -L/--list-languages to see a list of supported languages]")]
    UnsupportedLanguage(String),

    #[error(
        "argument -P/--include-pre-releases: not allowed with argument -R/--remove-patch-version"
    )]
    ConflictingFlags,

    #[error("Invalid version: {0}")]
    InvalidVersion(String),
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("Malformed payload: {0}")]
    Payload(String),
}

impl From<serde_json::Error> for LookupError {
    fn from(err: serde_json::Error) -> Self {
        LookupError::Payload(err.to_string())
    }
}
