use anyhow::{Context, Result};
use axum::{
    Router,
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse},
    routing::{MethodRouter, get},
};
use folio_core::content::LINKS;
use folio_generator::pages::{self, SitePage};
use folio_generator::{robots, sitemap::Sitemap};
use std::{path::PathBuf, sync::Arc};
use tower_http::trace::TraceLayer;
use url::Url;

use super::load_site_config;

/// Responses that depend on the site URL, computed once at startup
#[derive(Clone)]
struct AppState {
    robots: Arc<str>,
    sitemap: Arc<Sitemap>,
}

/// Serve the site over HTTP.
///
/// The site URL is resolved before binding, so a missing or malformed URL
/// stops the server from starting instead of failing per request.
///
/// # Arguments
///
/// * `path` - Site directory containing folio.toml
/// * `port` - Port override (default from folio.toml, then 4321)
/// * `site_url` - Site URL override (`--site-url` / `FOLIO_SITE_URL`)
pub async fn run(path: PathBuf, port: Option<u16>, site_url: Option<String>) -> Result<()> {
    println!("🌐 Starting site server...");
    println!("   Site: {}", path.display());

    let config = load_site_config(&path, site_url.as_deref())?;
    let base = config.require_site_url()?.clone();
    println!("   ✓ Base URL: {}", base);

    let app = router(&base).context("Failed to prepare site routes")?;

    let port = port.unwrap_or(config.server.port);
    let addr = format!("{}:{}", config.server.host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    println!("\n🚀 Serving at: http://{}", addr);
    println!("   Press Ctrl+C to stop\n");
    tracing::info!(%addr, base = %base, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

/// Build the site router for a base URL.
pub fn router(base: &Url) -> folio_core::Result<Router> {
    let state = AppState {
        robots: Arc::from(robots::robots_txt(base)?),
        sitemap: Arc::new(Sitemap::build(base, LINKS)?),
    };

    let mut app = Router::new()
        .route("/robots.txt", get(robots_handler))
        .route("/sitemap-index.xml", get(sitemap_index_handler))
        .route("/sitemap-0.xml", get(sitemap_pages_handler));

    for page in SitePage::ALL {
        app = app.route(page.path(), page_route(page));
    }

    Ok(app
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

fn page_route(page: SitePage) -> MethodRouter<AppState> {
    get(move || async move { Html(pages::render_page(page)) })
}

async fn robots_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, robots::CONTENT_TYPE)],
        state.robots.to_string(),
    )
}

async fn sitemap_index_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, folio_generator::sitemap::CONTENT_TYPE)],
        state.sitemap.index.clone(),
    )
}

async fn sitemap_pages_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, folio_generator::sitemap::CONTENT_TYPE)],
        state.sitemap.pages.clone(),
    )
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not found")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl+C");
        return;
    }
    println!("\n👋 Shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;

    async fn get_path(app: Router, path: &str) -> (StatusCode, Option<String>, String) {
        let response = app
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    fn app(base: &str) -> Router {
        router(&Url::parse(base).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_robots_txt_response() {
        let (status, content_type, body) = get_path(app("https://example.dev/"), "/robots.txt").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("text/plain; charset=utf-8"));
        assert!(body.starts_with("User-agent: AI2Bot"));
        assert_eq!(
            body.lines().last(),
            Some("Sitemap: https://example.dev/sitemap-index.xml")
        );
    }

    #[tokio::test]
    async fn test_robots_txt_is_identical_across_requests() {
        let app = app("https://erengun.dev/");
        let (_, _, first) = get_path(app.clone(), "/robots.txt").await;
        let (_, _, second) = get_path(app, "/robots.txt").await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_sitemap_routes() {
        let app = app("https://example.dev/");

        let (status, content_type, body) = get_path(app.clone(), "/sitemap-index.xml").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/xml"));
        assert!(body.contains("https://example.dev/sitemap-0.xml"));

        let (status, _, body) = get_path(app, "/sitemap-0.xml").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<loc>https://example.dev/projects</loc>"));
    }

    #[tokio::test]
    async fn test_page_routes() {
        let app = app("https://example.dev/");
        for page in SitePage::ALL {
            let (status, content_type, body) = get_path(app.clone(), page.path()).await;
            assert_eq!(status, StatusCode::OK, "{}", page.path());
            assert!(content_type.unwrap().starts_with("text/html"));
            assert!(body.contains(page.meta().title));
        }
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let (status, _, body) = get_path(app("https://example.dev/"), "/missing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "Not found");
    }
}
