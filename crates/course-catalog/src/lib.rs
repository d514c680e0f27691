#![deny(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod loader;
pub mod sample;

pub use crate::catalog::Catalog;
pub use crate::error::CatalogError;
pub use crate::loader::{CatalogFormat, load_catalog, parse_catalog};
pub use crate::sample::load_sample_catalog;
