/// Global site metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Site {
    pub title: &'static str,
    pub description: &'static str,
    pub author: &'static str,
}

/// Title and description of a single page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub title: &'static str,
    pub description: &'static str,
}

/// Navigation entry, rendered in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub text: &'static str,
    pub href: &'static str,
}

/// Social profile shown in the footer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    /// Icon identifier, matched against the stylesheet's icon set
    pub icon: &'static str,
    pub text: &'static str,
    pub href: &'static str,
}

/// Labelled link in the presentation block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Social {
    pub label: &'static str,
    pub link: &'static str,
}

/// Home page introduction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub mail: &'static str,
    pub title: &'static str,
    /// Short rich text; `*word*` marks emphasis
    pub description: &'static str,
    pub socials: &'static [Social],
    pub profile: Option<&'static str>,
}

/// Portfolio project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub techs: &'static [&'static str],
    pub link: &'static str,
    pub is_coming_soon: bool,
}

impl Project {
    /// Get a URL-safe slug from the title
    pub fn slug(&self) -> String {
        let mut slug = String::with_capacity(self.title.len());
        for c in self.title.to_lowercase().chars() {
            if c.is_alphanumeric() {
                slug.push(c);
            } else if !slug.ends_with('-') {
                slug.push('-');
            }
        }
        slug.trim_matches('-').to_string()
    }

    /// True when the project has no page of its own yet
    pub fn links_home(&self) -> bool {
        self.link == "/"
    }
}
