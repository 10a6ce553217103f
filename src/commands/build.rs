//! Run the full build pipeline

use anyhow::{bail, Result};
use std::time::Instant;

use crate::content::ContentLoader;
use crate::generator::{BuildSummary, Generator};
use crate::helpers::fs::ensure_dir;
use crate::Site;

/// Build the site: clean the output tree, mirror static assets, then
/// render every content file into its HTML page.
pub fn run(site: &Site) -> Result<BuildSummary> {
    let start = Instant::now();

    if !site.source_dir.is_dir() {
        bail!(
            "Source directory not found: {:?} (set source_dir in site.yml)",
            site.source_dir
        );
    }

    if site.config.clean_output {
        super::clean::run(site)?;
    }
    ensure_dir(&site.output_dir)?;

    let loader = ContentLoader::new(site);
    let documents = loader.load_all()?;
    tracing::info!("Loaded {} content files", documents.len());

    let generator = Generator::new(site)?;
    let mut summary = generator.generate(&documents)?;
    summary.elapsed = start.elapsed();

    tracing::info!(
        "Generated {} pages in {:.2}s",
        summary.rendered(),
        summary.elapsed.as_secs_f64()
    );

    Ok(summary)
}
