//! Loading a page definition from a JSON file

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::document::{Page, Section};
use crate::error::VitrineError;

#[derive(Debug, Deserialize)]
struct PageSpec {
    sections: Vec<Section>,
}

/// Load a page from a JSON file
///
/// The file holds `{"sections": [{"classes": [...], "anchor": ..., "blocks":
/// [{"classes": [...], "lines": [...], "height": ...}]}]}`. Heights default
/// to the line count; everything else defaults to empty.
pub fn load_page(path: &Path) -> Result<Page, VitrineError> {
    let contents = fs::read_to_string(path)?;
    let spec: PageSpec = serde_json::from_str(&contents)
        .map_err(|e| VitrineError::InvalidPage(format!("{}: {}", path.display(), e)))?;
    Ok(Page::new(spec.sections))
}
