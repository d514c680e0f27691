//! Builds the registration state the commands operate on.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use course_catalog::{Catalog, load_catalog, load_sample_catalog};
use course_model::CreditBounds;
use course_registration::RegistrationState;

use crate::config::Settings;

/// Where the catalog and bounds come from.
#[derive(Debug, Clone, Default)]
pub struct StateOptions {
    pub catalog: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub min_credits: Option<u32>,
    pub max_credits: Option<u32>,
}

/// Load settings and catalog, then build the state.
///
/// Bounds precedence: command-line flags, then settings, then the catalog
/// file, then the 9–21 default.
pub fn build_state(options: &StateOptions) -> Result<RegistrationState> {
    let settings = Settings::load(options.config.as_deref())?;
    let catalog = load_configured_catalog(options, &settings)?;
    let bounds = resolve_bounds(catalog.bounds, &settings, options)?;
    info!(
        course_count = catalog.len(),
        min_credits = bounds.min(),
        max_credits = bounds.max(),
        "registration state ready"
    );
    let (courses, _) = catalog.into_parts();
    Ok(RegistrationState::new(courses, bounds))
}

fn load_configured_catalog(options: &StateOptions, settings: &Settings) -> Result<Catalog> {
    let path = options.catalog.as_ref().or(settings.catalog.path.as_ref());
    match path {
        Some(path) => load_catalog(path).with_context(|| format!("load catalog {}", path.display())),
        None => load_sample_catalog().context("load sample catalog"),
    }
}

pub fn resolve_bounds(
    catalog_bounds: CreditBounds,
    settings: &Settings,
    options: &StateOptions,
) -> Result<CreditBounds> {
    let min = options
        .min_credits
        .or(settings.bounds.min_credits)
        .unwrap_or(catalog_bounds.min());
    let max = options
        .max_credits
        .or(settings.bounds.max_credits)
        .unwrap_or(catalog_bounds.max());
    CreditBounds::new(min, max).context("invalid credit bounds")
}
