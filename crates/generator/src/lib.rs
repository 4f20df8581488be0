// Site generation: pages, robots.txt, sitemaps, and post import

pub mod markdown;
pub mod pages;
pub mod robots;
pub mod sitemap;

use folio_core::{Error, Result};
use folio_core::content::LINKS;
use pages::SitePage;
use sitemap::Sitemap;
use url::Url;

/// Every generated file, keyed by its path relative to the output root
pub struct GeneratedSite {
    pub files: Vec<(String, String)>, // (path, contents)
}

impl GeneratedSite {
    pub fn get(&self, path: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, contents)| contents.as_str())
    }

    /// Add a file, refusing to overwrite one already generated
    pub fn add(&mut self, path: impl Into<String>, contents: String) -> Result<()> {
        let path = path.into();
        if self.get(&path).is_some() {
            return Err(Error::InvalidData(format!(
                "Two generated files share the output path '{}'",
                path
            )));
        }
        self.files.push((path, contents));
        Ok(())
    }
}

pub fn generate_site(base: &Url) -> Result<GeneratedSite> {
    let mut site = GeneratedSite { files: Vec::new() };

    for page in SitePage::ALL {
        site.add(page.output_file(), pages::render_page(page))?;
    }

    site.add("robots.txt", robots::robots_txt(base)?)?;

    let sitemap = Sitemap::build(base, LINKS)?;
    for (name, contents) in sitemap.files() {
        site.add(name, contents.to_string())?;
    }

    Ok(site)
}
