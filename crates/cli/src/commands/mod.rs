pub mod build;
pub mod fetch_post;
pub mod serve;
pub mod validate;

use anyhow::{Context, Result};
use folio_core::{FolioConfig, load_config, resolve_site_url};
use std::path::Path;

/// Load folio.toml from the site directory and apply a site URL override.
pub(crate) fn load_site_config(path: &Path, site_url: Option<&str>) -> Result<FolioConfig> {
    if !path.exists() {
        anyhow::bail!("Site directory does not exist: {}", path.display());
    }

    let mut config = load_config(path).context("Failed to load folio.toml")?;
    resolve_site_url(&mut config, site_url).context("Invalid site URL override")?;
    Ok(config)
}
