#![deny(unsafe_code)]

use std::path::PathBuf;

use course_model::ModelError;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML catalog {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse JSON catalog {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported catalog format for {path} (expected .toml or .json)")]
    UnsupportedFormat { path: PathBuf },

    #[error("duplicate course id in catalog: {id}")]
    DuplicateCourse { id: String },

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl CatalogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
