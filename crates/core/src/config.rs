use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use url::Url;

pub const CONFIG_FILE: &str = "folio.toml";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 4321;

/// Raw TOML configuration structure
/// This matches the folio.toml file structure exactly
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    site: RawSite,
    #[serde(default)]
    server: RawServer,
}

#[derive(Debug, Default, Deserialize)]
struct RawSite {
    url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawServer {
    host: Option<String>,
    port: Option<u16>,
}

/// Runtime configuration for serving and building the site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolioConfig {
    /// Absolute base URL, `None` until supplied by file, env or CLI
    pub site_url: Option<Url>,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl FolioConfig {
    /// The site URL, or a configuration error when none was supplied
    pub fn require_site_url(&self) -> Result<&Url> {
        self.site_url.as_ref().ok_or_else(|| {
            Error::ConfigParse(format!(
                "No site URL configured. Set [site] url in {}, FOLIO_SITE_URL or --site-url",
                CONFIG_FILE
            ))
        })
    }
}

/// Load folio.toml from a site directory.
///
/// A missing file is not an error: every field has a default except the
/// site URL, which can still come from the environment or the command line.
pub fn load_config<P: AsRef<Path>>(dir: P) -> Result<FolioConfig> {
    let path = dir.as_ref().join(CONFIG_FILE);
    if !path.exists() {
        return Ok(FolioConfig {
            site_url: None,
            server: ServerConfig::default(),
        });
    }

    let content = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
    parse_config_str(&content)
}

/// Parse folio.toml from a string (useful for testing)
pub fn parse_config_str(content: &str) -> Result<FolioConfig> {
    let raw: RawConfig = toml::from_str(content)?;

    let site_url = raw.site.url.as_deref().map(validate_site_url).transpose()?;

    let defaults = ServerConfig::default();
    let server = ServerConfig {
        host: raw.server.host.unwrap_or(defaults.host),
        port: raw.server.port.unwrap_or(defaults.port),
    };

    Ok(FolioConfig { site_url, server })
}

/// Apply a command-line or environment override on top of the file value.
pub fn resolve_site_url(config: &mut FolioConfig, override_url: Option<&str>) -> Result<()> {
    if let Some(raw) = override_url {
        config.site_url = Some(validate_site_url(raw)?);
    }
    Ok(())
}

/// Validate the site base URL.
///
/// The sitemap location is resolved against this value, so it must be an
/// absolute `http` or `https` URL with a host.
pub fn validate_site_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_url(raw, "empty URL"));
    }

    let url = Url::parse(trimmed).map_err(|e| Error::invalid_url(raw, e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::invalid_url(
            raw,
            format!("unsupported scheme '{}', expected http or https", url.scheme()),
        ));
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(Error::invalid_url(raw, "missing host"));
    }

    Ok(url)
}
