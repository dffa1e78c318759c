use crate::GalleryItem;
use anyhow::{Context as _, Error};
use std::fs;
use std::path::Path;

/// Load a JSON manifest: an array of gallery items with dimensions and
/// display metadata.
pub fn load_manifest(path: &Path) -> Result<Vec<GalleryItem>, Error> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading manifest {}", path.display()))?;
    let items: Vec<GalleryItem> = serde_json::from_str(&data)
        .with_context(|| format!("parsing manifest {}", path.display()))?;
    Ok(items)
}
