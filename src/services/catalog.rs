use crate::models::{Catalog, Listing};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while reading the listing catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a catalog from a JSON array of listings
pub fn parse_catalog(json: &str) -> Result<Catalog, CatalogError> {
    let listings: Vec<Listing> = serde_json::from_str(json)?;
    Ok(Catalog::new(listings))
}

/// Read a catalog file, failing on a missing or malformed file
pub fn try_load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let raw = std::fs::read_to_string(path.as_ref())?;
    parse_catalog(&raw)
}

/// Read a catalog file, degrading to an empty catalog on any failure
///
/// The service keeps running with no data; the recommend endpoint reports
/// that nothing is available instead of the process failing to start.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Catalog {
    let path = path.as_ref();

    match try_load_catalog(path) {
        Ok(catalog) => {
            tracing::info!("Loaded {} listings from {}", catalog.len(), path.display());
            catalog
        }
        Err(e) => {
            tracing::error!("Failed to load catalog from {}, continuing with no listings: {}", path.display(), e);
            Catalog::empty()
        }
    }
}
