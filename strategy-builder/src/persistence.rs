use anyhow::{Context, Result};
use std::path::Path;
use strategy::Catalog;

/// Loads the pool and asset catalog from a JSON file.
///
/// # Returns
///
/// * `Ok(Catalog)` on success.
/// * `Err` if the file cannot be read or is not a valid catalog.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    let catalog = Catalog::from_json(&json).context("Failed to parse catalog")?;
    log::info!(
        "Loaded catalog from {}: {} pools, {} assets",
        path.display(),
        catalog.get_pools().len(),
        catalog.get_assets().len()
    );
    Ok(catalog)
}
