//! Catalog file loading.
//!
//! Two formats are accepted, chosen by file extension:
//!
//! ```toml
//! [bounds]
//! min = 9
//! max = 21
//!
//! [[courses]]
//! id = "BCS3013-01"
//! code = "BCS3013"
//! name = "Software Engineering"
//! lecturer = "Dr. Siti Aminah"
//! schedule = "Mon 8:00–11:00"
//! credit_hours = 3
//! category = "Core"
//! ```
//!
//! and the equivalent JSON object. `bounds` is optional and defaults to
//! 9–21.

use std::path::Path;

use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::error::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Toml,
    Json,
}

impl CatalogFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Load and validate a catalog file.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let format = CatalogFormat::from_path(path).ok_or_else(|| CatalogError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let contents = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    let catalog = parse_catalog(&contents, format, path)?;
    info!(
        path = %path.display(),
        course_count = catalog.len(),
        min_credits = catalog.bounds.min(),
        max_credits = catalog.bounds.max(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// Parse catalog text; `origin` is only used in error messages.
pub fn parse_catalog(
    contents: &str,
    format: CatalogFormat,
    origin: &Path,
) -> Result<Catalog, CatalogError> {
    let catalog: Catalog = match format {
        CatalogFormat::Toml => toml::from_str(contents).map_err(|e| CatalogError::Toml {
            path: origin.to_path_buf(),
            source: e,
        })?,
        CatalogFormat::Json => serde_json::from_str(contents).map_err(|e| CatalogError::Json {
            path: origin.to_path_buf(),
            source: e,
        })?,
    };
    catalog.validate()?;
    debug!(?format, course_count = catalog.len(), "catalog parsed");
    Ok(catalog)
}
