//! Catalog document persistence.
//!
//! One JSON document per project holds the ordered entry list. Loading a
//! missing document creates an empty catalog on disk so later saves always
//! have a location, mirroring the load-or-create behavior of the editing
//! surface.

use std::fs;
use std::io;
use std::path::Path;

use crate::catalog::Catalog;

/// Errors from loading or saving a catalog document.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed catalog document: {0}")]
    Format(#[from] serde_json::Error),
}

/// Load the catalog document at `path`, creating an empty one if missing.
/// The returned catalog is clean regardless of whether a file was written.
pub fn load_or_create(path: &Path) -> Result<Catalog, PersistError> {
    if path.exists() {
        let text = fs::read_to_string(path)?;
        let catalog: Catalog = serde_json::from_str(&text)?;
        return Ok(catalog);
    }
    let catalog = Catalog::new();
    save(path, &catalog)?;
    Ok(catalog)
}

/// Write the catalog document, creating parent directories as needed. Does
/// not clear the catalog's dirty flag; the caller owns that.
pub fn save(path: &Path, catalog: &Catalog) -> Result<(), PersistError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let text = serde_json::to_string_pretty(catalog)?;
    fs::write(path, text)?;
    Ok(())
}
