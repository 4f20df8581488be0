//! Server-rendered HTML pages built from the site content.

use folio_core::content::{
    BLOG, LINKS, PRESENTATION, PROJECT_LIST, PROJECTS, SEARCH, SITE, SOCIALS, WORK,
};
use folio_core::{Page, Presentation, Project};
use pulldown_cmark::{Event, Parser, html};

/// Every page the site renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SitePage {
    Home,
    Work,
    Blog,
    Projects,
    Search,
}

impl SitePage {
    pub const ALL: [SitePage; 5] = [
        SitePage::Home,
        SitePage::Work,
        SitePage::Blog,
        SitePage::Projects,
        SitePage::Search,
    ];

    /// Route path, as used in navigation links
    pub fn path(self) -> &'static str {
        match self {
            SitePage::Home => "/",
            SitePage::Work => "/work",
            SitePage::Blog => "/blog",
            SitePage::Projects => "/projects",
            SitePage::Search => "/search",
        }
    }

    /// Title and description for `<head>`
    pub fn meta(self) -> Page {
        match self {
            SitePage::Home => Page {
                title: SITE.title,
                description: SITE.description,
            },
            SitePage::Work => WORK,
            SitePage::Blog => BLOG,
            SitePage::Projects => PROJECTS,
            SitePage::Search => SEARCH,
        }
    }

    /// Output file relative to the build directory
    pub fn output_file(self) -> String {
        match self {
            SitePage::Home => "index.html".to_string(),
            other => format!("{}/index.html", other.path().trim_start_matches('/')),
        }
    }
}

/// HTML-escape a string to prevent XSS attacks
///
/// Escapes: & < > " '
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render short rich text (`*emphasis*`, links) to HTML.
///
/// Raw HTML in the source is escaped rather than passed through.
pub fn render_rich_text(source: &str) -> String {
    let parser = Parser::new(source).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Render a complete HTML document for a page
pub fn render_page(page: SitePage) -> String {
    let body = match page {
        SitePage::Home => home_body(&PRESENTATION, PROJECT_LIST),
        SitePage::Projects => projects_body(&page.meta(), PROJECT_LIST),
        _ => heading_body(&page.meta()),
    };
    layout(page, &body)
}

fn layout(page: SitePage, body: &str) -> String {
    let meta = page.meta();
    let title = if page == SitePage::Home {
        html_escape(SITE.title)
    } else {
        format!("{} | {}", html_escape(meta.title), html_escape(SITE.title))
    };

    let nav: String = LINKS
        .iter()
        .map(|link| {
            let current = if link.href == page.path() {
                r#" aria-current="page""#
            } else {
                ""
            };
            format!(
                r#"<a href="{}"{}>{}</a>"#,
                html_escape(link.href),
                current,
                html_escape(link.text)
            )
        })
        .collect::<Vec<_>>()
        .join("\n            ");

    let socials: String = SOCIALS
        .iter()
        .map(|social| {
            format!(
                r#"<a href="{}" class="social social-{}" aria-label="{}">{}</a>"#,
                html_escape(social.href),
                html_escape(social.icon),
                html_escape(social.name),
                html_escape(social.text)
            )
        })
        .collect::<Vec<_>>()
        .join("\n            ");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="description" content="{}">
    <meta name="author" content="{}">
    <title>{}</title>
    <link rel="sitemap" href="/sitemap-index.xml">
</head>
<body>
    <header>
        <nav>
            {}
        </nav>
    </header>
    <main>
{}
    </main>
    <footer>
        <div class="socials">
            {}
        </div>
        <p>&copy; {}</p>
    </footer>
</body>
</html>
"#,
        html_escape(meta.description),
        html_escape(SITE.author),
        title,
        nav,
        body,
        socials,
        html_escape(SITE.author)
    )
}

fn home_body(presentation: &Presentation, projects: &[Project]) -> String {
    let profile = presentation
        .profile
        .map(|src| {
            format!(
                r#"<img src="{}" alt="{}" class="profile">"#,
                html_escape(src),
                html_escape(SITE.author)
            )
        })
        .unwrap_or_default();

    let socials: String = presentation
        .socials
        .iter()
        .map(|s| {
            format!(
                r#"<li><a href="{}">{}</a></li>"#,
                html_escape(s.link),
                html_escape(s.label)
            )
        })
        .collect();

    format!(
        r#"        <section class="presentation">
            {}
            <h1>{}</h1>
            <div class="description">{}</div>
            <ul class="socials">{}</ul>
            <a href="mailto:{}" class="contact">{}</a>
        </section>
        <section class="projects">
            <h2>{}</h2>
            {}
        </section>"#,
        profile,
        html_escape(presentation.title),
        render_rich_text(presentation.description),
        socials,
        html_escape(presentation.mail),
        html_escape(presentation.mail),
        html_escape(PROJECTS.title),
        project_list(projects)
    )
}

fn projects_body(meta: &Page, projects: &[Project]) -> String {
    format!(
        "{}\n        {}",
        heading_body(meta),
        project_list(projects)
    )
}

fn heading_body(meta: &Page) -> String {
    format!(
        "        <h1>{}</h1>\n        <p class=\"lead\">{}</p>",
        html_escape(meta.title),
        html_escape(meta.description)
    )
}

fn project_list(projects: &[Project]) -> String {
    let items: String = projects
        .iter()
        .map(|project| {
            let techs: String = project
                .techs
                .iter()
                .map(|t| format!("<li>{}</li>", html_escape(t)))
                .collect();
            let badge = if project.is_coming_soon {
                r#" <span class="badge">Coming soon</span>"#
            } else {
                ""
            };
            format!(
                r#"<li class="project" id="{}"><a href="{}">{}</a>{}<ul class="techs">{}</ul></li>"#,
                project.slug(),
                html_escape(project.link),
                html_escape(project.title),
                badge,
                techs
            )
        })
        .collect();
    format!(r#"<ul class="project-list">{}</ul>"#, items)
}
