/// Error types for loading property data and settings
///
/// The table logic itself cannot fail; everything here comes from reading
/// and parsing files at startup.
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON (or does not match the settings shape)
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A segment of `data.propertiesPage.properties` is absent
    #[error("document has no `{0}` entry")]
    MissingPath(String),

    /// The properties entry holds something other than a list of objects
    #[error("property record {index} is not an object")]
    InvalidRecord { index: usize },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
