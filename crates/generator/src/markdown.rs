//! HTML-to-Markdown conversion for importing blog posts.
//!
//! Picks the article content out of a fetched page with `scraper`, converts
//! it with `htmd`, and optionally prepends YAML frontmatter.

use scraper::{Html, Selector};

/// Elements tried in order when looking for the post body
const CONTENT_SELECTORS: &[&str] = &["article", "main", "body"];

const SKIPPED_TAGS: &[&str] = &[
    "script", "style", "nav", "iframe", "noscript", "svg", "button", "footer",
];

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("document has no content to convert")]
    Empty,

    #[error("htmd conversion failed: {0}")]
    Htmd(String),
}

/// A converted post
#[derive(Debug, Clone)]
pub struct ConvertedPost {
    pub title: Option<String>,
    pub markdown: String,
}

/// Frontmatter fields for an imported post
#[derive(Debug, Clone)]
pub struct Frontmatter<'a> {
    pub title: &'a str,
    pub source: &'a str,
    pub fetched_at: &'a str,
}

/// Convert a full HTML page into Markdown
pub fn convert_page(page_html: &str) -> Result<ConvertedPost, ConvertError> {
    let document = Html::parse_document(page_html);
    let title = extract_title(&document);
    let content = extract_content_html(&document).ok_or(ConvertError::Empty)?;

    let converter = htmd::HtmlToMarkdown::builder()
        .skip_tags(SKIPPED_TAGS.to_vec())
        .build();
    let markdown = converter
        .convert(&content)
        .map_err(|e| ConvertError::Htmd(e.to_string()))?;

    let markdown = collapse_blank_lines(markdown.trim());
    if markdown.is_empty() {
        return Err(ConvertError::Empty);
    }

    Ok(ConvertedPost { title, markdown })
}

/// YAML frontmatter block, terminated by a newline
pub fn build_frontmatter(fm: &Frontmatter<'_>) -> String {
    format!(
        "---\ntitle: {}\nsource: {}\nfetched_at: {}\n---\n",
        yaml_quote(fm.title),
        yaml_quote(fm.source),
        yaml_quote(fm.fetched_at)
    )
}

fn extract_content_html(document: &Html) -> Option<String> {
    CONTENT_SELECTORS.iter().find_map(|css| {
        let selector = Selector::parse(css).ok()?;
        let element = document.select(&selector).next()?;
        let inner = element.inner_html();
        (!inner.trim().is_empty()).then_some(inner)
    })
}

/// First `<h1>` wins over `<title>`, which usually carries a site suffix
fn extract_title(document: &Html) -> Option<String> {
    ["h1", "title"].iter().find_map(|css| {
        let selector = Selector::parse(css).ok()?;
        let text: String = document.select(&selector).next()?.text().collect();
        let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
        (!text.is_empty()).then_some(text)
    })
}

fn collapse_blank_lines(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut blank_run = 0;
    for line in s.lines() {
        if line.trim().is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out.trim_end().to_string()
}

fn yaml_quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    const POST: &str = r#"<!DOCTYPE html>
<html>
<head><title>Making texts selectable | by Eren | Medium</title></head>
<body>
<nav><a href="/">Medium</a></nav>
<article>
  <h1>Making texts selectable in your Flutter web app</h1>
  <p>Use <em>SelectionArea</em> to make text <strong>selectable</strong>.</p>
  <p>See the <a href="https://api.flutter.dev/">docs</a>.</p>
  <script>track()</script>
</article>
<footer>Sign up</footer>
</body>
</html>"#;

    #[test]
    fn test_convert_prefers_article() {
        let post = convert_page(POST).unwrap();
        assert!(
            post.markdown
                .starts_with("# Making texts selectable in your Flutter web app\n")
        );
        assert!(post.markdown.contains("*SelectionArea*") || post.markdown.contains("_SelectionArea_"));
        assert!(post.markdown.contains("**selectable**"));
        assert!(post.markdown.contains("[docs](https://api.flutter.dev/)"));
        assert!(!post.markdown.contains("Sign up"));
        assert!(!post.markdown.contains("track()"));
    }

    #[test]
    fn test_convert_keeps_heading_levels() {
        let html = "<html><body><article><h1>Title</h1><h2>Sub</h2><p>x</p></article></body></html>";
        let post = convert_page(html).unwrap();
        assert_eq!(post.markdown, "# Title\n\n## Sub\n\nx");
    }

    #[test]
    fn test_title_from_h1() {
        let post = convert_page(POST).unwrap();
        assert_eq!(
            post.title.as_deref(),
            Some("Making texts selectable in your Flutter web app")
        );
    }

    #[test]
    fn test_falls_back_to_body() {
        let html = "<html><head><title>Plain</title></head><body><p>Just text</p></body></html>";
        let post = convert_page(html).unwrap();
        assert_eq!(post.markdown, "Just text");
        assert_eq!(post.title.as_deref(), Some("Plain"));
    }

    #[test]
    fn test_empty_document_is_an_error() {
        let result = convert_page("<html><body>   </body></html>");
        assert!(matches!(result, Err(ConvertError::Empty)));
    }

    #[test]
    fn test_frontmatter() {
        let fm = build_frontmatter(&Frontmatter {
            title: "Say \"hi\"",
            source: "https://example.dev/post",
            fetched_at: "2026-10-19",
        });
        assert_eq!(
            fm,
            "---\ntitle: \"Say \\\"hi\\\"\"\nsource: \"https://example.dev/post\"\nfetched_at: \"2026-10-19\"\n---\n"
        );
    }

    #[test]
    fn test_collapse_blank_lines() {
        assert_eq!(collapse_blank_lines("a\n\n\n\nb  \n"), "a\n\nb");
    }
}
