//! Delete the output directory

use anyhow::{Context, Result};
use std::fs;

use crate::Site;

/// Remove the output directory and everything in it.
///
/// A missing output directory is fine; the next build recreates it.
pub fn run(site: &Site) -> Result<()> {
    if site.output_dir.exists() {
        fs::remove_dir_all(&site.output_dir)
            .with_context(|| format!("Failed to delete {:?}", site.output_dir))?;
        tracing::info!("Deleted: {:?}", site.output_dir);
    }

    Ok(())
}
