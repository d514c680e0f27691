//! User settings, stored as TOML.
//!
//! Looked up in the platform config folder unless `--config` names a file:
//! - macOS: ~/Library/Application Support/com.course-registration.Course Registration/
//! - Windows: %APPDATA%/course-registration/Course Registration/config/
//! - Linux: ~/.config/courseregistration/
//!
//! ```toml
//! [bounds]
//! min_credits = 12
//! max_credits = 18
//!
//! [catalog]
//! path = "/srv/registrar/semester-2.toml"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "course-registration";
const APP_NAME: &str = "Course Registration";
const CONFIG_FILENAME: &str = "settings.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub bounds: BoundsSettings,
    pub catalog: CatalogSettings,
}

/// Credit bounds overriding the ones in the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundsSettings {
    pub min_credits: Option<u32>,
    pub max_credits: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Catalog file used when `--catalog` is not given.
    pub path: Option<PathBuf>,
}

/// Get the path to the default settings file.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

impl Settings {
    /// Load settings.
    ///
    /// An explicit path must exist and parse. The default location falls
    /// back to defaults when the file is absent or unreadable.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => Ok(Self::load_default()),
        }
    }

    /// Load settings from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("read settings file {}", path.display()))?;
        let settings = toml::from_str(&content)
            .with_context(|| format!("parse settings file {}", path.display()))?;
        tracing::info!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    fn load_default() -> Self {
        let Some(path) = settings_path() else {
            tracing::debug!("Could not determine settings path, using defaults");
            return Self::default();
        };

        match fs::read_to_string(&path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(settings) => {
                    tracing::info!("Loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    tracing::warn!("Failed to parse settings file: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No settings file found at {:?}, using defaults", path);
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Failed to read settings file: {}, using defaults", e);
                Self::default()
            }
        }
    }
}
