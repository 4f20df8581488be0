use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use folio_generator::markdown::{ConvertedPost, Frontmatter, build_frontmatter, convert_page};
use std::time::Duration;
use url::Url;

pub const DEFAULT_POST_URL: &str =
    "https://erengun.medium.com/making-texts-selectable-in-your-flutter-web-app-7e682931efd9";

const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));

/// Fetch a published post and print it as Markdown.
///
/// Progress goes to stderr so stdout can be redirected straight into a
/// post file. There is no retry: any network, status or conversion error
/// ends the command.
pub async fn run(url: Option<String>, frontmatter: bool) -> Result<()> {
    let source = url.unwrap_or_else(|| DEFAULT_POST_URL.to_string());
    let source = Url::parse(&source).with_context(|| format!("Invalid post URL: {}", source))?;

    eprintln!("📥 Fetching {}", source);

    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(30))
        .build()
        .context("Failed to build HTTP client")?;

    let response = client
        .get(source.clone())
        .send()
        .await
        .with_context(|| format!("Failed to fetch {}", source))?
        .error_for_status()
        .with_context(|| format!("Server rejected request for {}", source))?;

    let html = response
        .text()
        .await
        .context("Failed to read response body")?;
    tracing::debug!(bytes = html.len(), url = %source, "fetched post");

    let post = convert_page(&html).context("Failed to convert post to Markdown")?;
    let fetched_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);

    eprintln!("   ✓ Converted {} lines", post.markdown.lines().count());
    println!("{}", render_post(&post, source.as_str(), &fetched_at, frontmatter));

    Ok(())
}

fn render_post(post: &ConvertedPost, source: &str, fetched_at: &str, frontmatter: bool) -> String {
    if !frontmatter {
        return post.markdown.clone();
    }

    let fm = build_frontmatter(&Frontmatter {
        title: post.title.as_deref().unwrap_or("Untitled"),
        source,
        fetched_at,
    });
    format!("{}\n{}", fm, post.markdown)
}
