use anyhow::Result;
use folio_validator::{ValidationReport, validate_site};
use std::path::PathBuf;

use super::load_site_config;

pub async fn run(path: Option<PathBuf>) -> Result<()> {
    println!("Validating site content");

    let report = validate_site();
    print_report(&report);

    if let Some(path) = path {
        let config = load_site_config(&path, None)?;
        match &config.site_url {
            Some(url) => println!("✓ folio.toml valid (site URL: {})", url),
            None => println!("⚠ folio.toml has no site URL; pass --site-url when serving"),
        }
    }

    if !report.is_ok() {
        anyhow::bail!("{} validation error(s)", report.errors.len());
    }

    println!("✓ Content valid");
    Ok(())
}

pub(crate) fn print_report(report: &ValidationReport) {
    for line in &report.info {
        println!("   {}", line);
    }
    for warning in &report.warnings {
        println!("   ⚠ {}", warning);
    }
    for error in &report.errors {
        eprintln!("   ✗ {}", error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn test_validate_rejects_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("not-here");

        let err = run(Some(missing)).await.unwrap_err();
        assert!(err.to_string().contains("Site directory does not exist"));
    }

    #[tokio::test]
    async fn test_validate_without_path() {
        assert!(run(None).await.is_ok());
    }

    #[tokio::test]
    async fn test_validate_with_config_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("folio.toml"),
            "[site]\nurl = \"https://erengun.dev/\"\n",
        )
        .unwrap();
        assert!(run(Some(dir.path().to_path_buf())).await.is_ok());
    }

    #[tokio::test]
    async fn test_validate_rejects_malformed_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("folio.toml"), "[site]\nurl = \"erengun.dev\"\n").unwrap();
        assert!(run(Some(dir.path().to_path_buf())).await.is_err());
    }
}
