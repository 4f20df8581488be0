//! Sitemap generation.
//!
//! The index at `sitemap-index.xml` points at a single `sitemap-0.xml`
//! that lists every navigation page.

use crate::robots::SITEMAP_INDEX;
use folio_core::{Error, NavLink, Result};
use url::Url;

pub const CONTENT_TYPE: &str = "application/xml";
pub const SITEMAP_PAGE: &str = "sitemap-0.xml";

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Both sitemap documents, rendered once per site URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sitemap {
    pub index: String,
    pub pages: String,
}

impl Sitemap {
    pub fn build(base: &Url, links: &[NavLink]) -> Result<Self> {
        let page_url = join(base, SITEMAP_PAGE)?;

        let mut locations = Vec::with_capacity(links.len());
        for link in links {
            // Root-relative hrefs resolve from the site base, not the host root
            let relative = link.href.trim_start_matches('/');
            let loc = join(base, relative)?;
            if !locations.contains(&loc) {
                locations.push(loc);
            }
        }

        Ok(Self {
            index: index_xml(&page_url),
            pages: urlset_xml(&locations),
        })
    }

    /// Output files as (file name, contents)
    pub fn files(&self) -> [(&'static str, &str); 2] {
        [(SITEMAP_INDEX, &self.index), (SITEMAP_PAGE, &self.pages)]
    }
}

fn join(base: &Url, path: &str) -> Result<Url> {
    base.join(path)
        .map_err(|e| Error::invalid_url(base.as_str(), e.to_string()))
}

fn index_xml(page_url: &Url) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<sitemapindex xmlns=\"{}\">\n  <sitemap>\n    <loc>{}</loc>\n  </sitemap>\n</sitemapindex>\n",
        SITEMAP_NS,
        escape_xml(page_url.as_str())
    )
}

fn urlset_xml(locations: &[Url]) -> String {
    let mut xml = String::with_capacity(128 + locations.len() * 64);
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str(&format!("<urlset xmlns=\"{}\">\n", SITEMAP_NS));
    for loc in locations {
        xml.push_str(&format!(
            "  <url>\n    <loc>{}</loc>\n  </url>\n",
            escape_xml(loc.as_str())
        ));
    }
    xml.push_str("</urlset>\n");
    xml
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
