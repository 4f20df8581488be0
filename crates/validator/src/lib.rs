//! Authoring checks for the site content.
//!
//! Content is declared as literals, so a broken link or an empty field is an
//! authoring mistake. These checks run before a build and from `folio validate`.

use folio_core::content;
use folio_core::{NavLink, Page, Presentation, Project, Site, SocialLink};
use std::collections::HashSet;
use url::Url;

/// Schemes a rendered `href` may use
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto"];

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub info: Vec<String>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Everything a page can be rendered from, borrowed for validation
pub struct ContentSet<'a> {
    pub site: &'a Site,
    pub pages: &'a [(&'static str, Page)],
    pub links: &'a [NavLink],
    pub socials: &'a [SocialLink],
    pub presentation: &'a Presentation,
    pub projects: &'a [Project],
}

/// Validate the content shipped with the site
pub fn validate_site() -> ValidationReport {
    let pages = [
        ("WORK", content::WORK),
        ("BLOG", content::BLOG),
        ("PROJECTS", content::PROJECTS),
        ("SEARCH", content::SEARCH),
    ];

    validate_content(&ContentSet {
        site: &content::SITE,
        pages: &pages,
        links: content::LINKS,
        socials: content::SOCIALS,
        presentation: &content::PRESENTATION,
        projects: content::PROJECT_LIST,
    })
}

pub fn validate_content(set: &ContentSet<'_>) -> ValidationReport {
    let mut report = ValidationReport::default();

    require_text(&mut report, "SITE.title", set.site.title);
    require_text(&mut report, "SITE.description", set.site.description);
    require_text(&mut report, "SITE.author", set.site.author);

    for (name, page) in set.pages {
        require_text(&mut report, &format!("{}.title", name), page.title);
        require_text(&mut report, &format!("{}.description", name), page.description);
    }

    let mut seen_hrefs = HashSet::new();
    for (i, link) in set.links.iter().enumerate() {
        let field = format!("LINKS[{}]", i);
        require_text(&mut report, &format!("{}.text", field), link.text);
        require_link(&mut report, &format!("{}.href", field), link.href);
        if !seen_hrefs.insert(link.href) {
            report
                .warnings
                .push(format!("{}: duplicate navigation target '{}'", field, link.href));
        }
    }

    for (i, social) in set.socials.iter().enumerate() {
        let field = format!("SOCIALS[{}]", i);
        require_text(&mut report, &format!("{}.name", field), social.name);
        require_text(&mut report, &format!("{}.icon", field), social.icon);
        require_text(&mut report, &format!("{}.text", field), social.text);
        require_absolute_url(&mut report, &format!("{}.href", field), social.href);
    }

    validate_presentation(&mut report, set.presentation);

    for (i, project) in set.projects.iter().enumerate() {
        validate_project(&mut report, &format!("PROJECT_LIST[{}]", i), project);
    }

    report.info.push(format!(
        "{} pages, {} navigation links, {} socials, {} projects",
        set.pages.len() + 1,
        set.links.len(),
        set.socials.len(),
        set.projects.len()
    ));

    report
}

fn validate_presentation(report: &mut ValidationReport, presentation: &Presentation) {
    require_text(report, "PRESENTATION.title", presentation.title);
    require_text(report, "PRESENTATION.description", presentation.description);

    if !is_valid_email(presentation.mail) {
        report.errors.push(format!(
            "PRESENTATION.mail: '{}' is not a valid email address",
            presentation.mail
        ));
    }

    for (i, social) in presentation.socials.iter().enumerate() {
        let field = format!("PRESENTATION.socials[{}]", i);
        require_text(report, &format!("{}.label", field), social.label);
        require_absolute_url(report, &format!("{}.link", field), social.link);
    }

    if let Some(profile) = presentation.profile {
        require_link(report, "PRESENTATION.profile", profile);
    }

    // Emphasis markers must pair up or the rendered text shows a stray '*'
    if presentation.description.matches('*').count() % 2 != 0 {
        report
            .warnings
            .push("PRESENTATION.description: unbalanced '*' emphasis marker".to_string());
    }
}

fn validate_project(report: &mut ValidationReport, field: &str, project: &Project) {
    require_text(report, &format!("{}.title", field), project.title);
    require_link(report, &format!("{}.link", field), project.link);

    if project.techs.is_empty() {
        report
            .errors
            .push(format!("{}.techs: at least one technology is required", field));
    }

    let mut seen = HashSet::new();
    for (i, tech) in project.techs.iter().enumerate() {
        require_text(report, &format!("{}.techs[{}]", field, i), tech);
        if !seen.insert(tech.trim()) {
            report
                .warnings
                .push(format!("{}.techs: duplicate entry '{}'", field, tech));
        }
    }

    if project.links_home() && !project.is_coming_soon {
        report.warnings.push(format!(
            "{}: '{}' links to the home page but is not marked coming soon",
            field, project.title
        ));
    }
}

fn require_text(report: &mut ValidationReport, field: &str, value: &str) {
    if value.trim().is_empty() {
        report.errors.push(format!("{}: must not be empty", field));
    }
}

/// Accepts absolute URLs and root-relative paths
fn require_link(report: &mut ValidationReport, field: &str, value: &str) {
    if is_root_relative(value) {
        return;
    }
    require_absolute_url(report, field, value);
}

fn require_absolute_url(report: &mut ValidationReport, field: &str, value: &str) {
    if value.trim().is_empty() {
        report.errors.push(format!("{}: must not be empty", field));
        return;
    }
    match Url::parse(value) {
        Ok(url) if !ALLOWED_SCHEMES.contains(&url.scheme()) => {
            report.errors.push(format!(
                "{}: '{}' uses unsupported scheme '{}' (expected http, https or mailto)",
                field,
                value,
                url.scheme()
            ));
        }
        Ok(_) => {}
        Err(e) => {
            report
                .errors
                .push(format!("{}: '{}' is not a valid URL ({})", field, value, e));
        }
    }
}

fn is_root_relative(value: &str) -> bool {
    value.starts_with('/') && !value.starts_with("//") && !value.contains(char::is_whitespace)
}

/// Validate email format
/// Checks for basic RFC 5322 compliance without full regex
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || local.len() > 64 || domain.contains('@') {
        return false;
    }

    if domain.is_empty() || domain.len() > 255 || !domain.contains('.') {
        return false;
    }

    if domain.starts_with('.')
        || domain.ends_with('.')
        || domain.starts_with('-')
        || domain.ends_with('-')
        || domain.contains("..")
    {
        return false;
    }

    domain
        .rsplit_once('.')
        .is_some_and(|(_, tld)| tld.len() >= 2)
}
