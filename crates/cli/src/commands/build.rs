use anyhow::{Context, Result};
use folio_generator::{GeneratedSite, generate_site};
use std::fs;
use std::path::{Path, PathBuf};

use super::load_site_config;
use super::validate::print_report;

/// Build static site for deployment
pub async fn run(path: PathBuf, output: PathBuf, site_url: Option<String>) -> Result<()> {
    println!("🔨 Building static site...");
    println!("   Source: {}", path.display());
    println!("   Output: {}", output.display());
    println!();

    let config = load_site_config(&path, site_url.as_deref())?;
    let base = config.require_site_url()?;
    println!("✓ Base URL: {}", base);

    println!("🔍 Validating content...");
    let report = folio_validator::validate_site();
    print_report(&report);
    if !report.is_ok() {
        anyhow::bail!(
            "Content validation failed with {} error(s)",
            report.errors.len()
        );
    }
    println!();

    println!("📄 Generating pages...");
    let site = generate_site(base).context("Failed to generate site")?;
    let written = write_site(&site, &output)?;
    println!("   ✓ Wrote {} files", written);

    println!();
    println!("✅ Build complete!");
    println!("   Output: {}", output.display());
    println!();

    Ok(())
}

/// Write every generated file under `output`, creating directories as needed
fn write_site(site: &GeneratedSite, output: &Path) -> Result<usize> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    for (relative, contents) in &site.files {
        let dst = output.join(relative);
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&dst, contents).with_context(|| format!("Failed to write {}", dst.display()))?;
    }

    Ok(site.files.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    #[test]
    fn test_write_site_layout() {
        let dir = tempfile::tempdir().unwrap();
        let base = Url::parse("https://example.dev/").unwrap();
        let site = generate_site(&base).unwrap();

        let written = write_site(&site, dir.path()).unwrap();
        assert_eq!(written, site.files.len());

        assert!(dir.path().join("index.html").is_file());
        assert!(dir.path().join("projects/index.html").is_file());
        assert!(dir.path().join("sitemap-0.xml").is_file());

        let robots = fs::read_to_string(dir.path().join("robots.txt")).unwrap();
        assert!(robots.ends_with("Sitemap: https://example.dev/sitemap-index.xml"));
    }

    #[tokio::test]
    async fn test_build_requires_site_url() {
        let site_dir = tempfile::tempdir().unwrap();
        let output = site_dir.path().join("dist");

        let err = run(site_dir.path().to_path_buf(), output.clone(), None)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("No site URL configured"));
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_build_with_config_file() {
        let site_dir = tempfile::tempdir().unwrap();
        fs::write(
            site_dir.path().join("folio.toml"),
            "[site]\nurl = \"https://erengun.dev/\"\n",
        )
        .unwrap();
        let output = site_dir.path().join("dist");

        run(site_dir.path().to_path_buf(), output.clone(), None)
            .await
            .unwrap();

        let robots = fs::read_to_string(output.join("robots.txt")).unwrap();
        assert!(robots.ends_with("Sitemap: https://erengun.dev/sitemap-index.xml"));
    }

    #[tokio::test]
    async fn test_build_rejects_malformed_override() {
        let site_dir = tempfile::tempdir().unwrap();
        let result = run(
            site_dir.path().to_path_buf(),
            site_dir.path().join("dist"),
            Some("example.dev".to_string()),
        )
        .await;
        assert!(result.is_err());
    }
}
