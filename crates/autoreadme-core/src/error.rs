use std::path::PathBuf;

use thiserror::Error;

/// Why a dependency manifest could not be turned into a list of names.
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path} as TOML: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse {path} as JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path}: `{field}` is not a {expected}")]
    Shape {
        path: PathBuf,
        field: &'static str,
        expected: &'static str,
    },
}

/// Failure of the optional enhancement hook. Never fatal.
#[derive(Error, Debug)]
pub enum EnhanceError {
    #[error("enhancer returned empty content")]
    Empty,

    #[error("enhancement unavailable: {0}")]
    Unavailable(String),

    #[error("{0}")]
    Other(String),
}
