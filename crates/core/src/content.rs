//! Site content, declared once and shared by every page.

use crate::types::{NavLink, Page, Presentation, Project, Site, Social, SocialLink};

pub const SITE: Site = Site {
    title: "Eren Gün",
    description: "Hi, I'm Eren. I'm a software developer based in Istanbul, Turkey.",
    author: "Eren Gün",
};

pub const WORK: Page = Page {
    title: "Work",
    description: "Places I have worked.",
};

pub const BLOG: Page = Page {
    title: "Blog",
    description: "Writing on topics I am passionate about.",
};

pub const PROJECTS: Page = Page {
    title: "Projects",
    description: "Recent projects I have worked on.",
};

pub const SEARCH: Page = Page {
    title: "Search",
    description: "Search all posts and projects by keyword.",
};

pub const LINKS: &[NavLink] = &[
    NavLink {
        text: "Home",
        href: "/",
    },
    NavLink {
        text: "Work",
        href: "/work",
    },
    NavLink {
        text: "Blog",
        href: "/blog",
    },
    NavLink {
        text: "Projects",
        href: "/projects",
    },
];

pub const SOCIALS: &[SocialLink] = &[
    SocialLink {
        name: "Email",
        icon: "email",
        text: "hi@erengun.dev",
        href: "mailto:hi@erengun.dev",
    },
    SocialLink {
        name: "Github",
        icon: "github",
        text: "erengun",
        href: "https://github.com/erengun",
    },
    SocialLink {
        name: "LinkedIn",
        icon: "linkedin",
        text: "erengun",
        href: "https://www.linkedin.com/in/erengun/",
    },
    SocialLink {
        name: "Mastodon",
        icon: "mastodon",
        text: "erengun",
        href: "https://mastodon.social/@erengun",
    },
];

pub const PRESENTATION: Presentation = Presentation {
    mail: "hi@erengun.dev",
    title: "Hi, I’m Eren Gün 👋",
    description: "Hello, I create and maintain *web and mobile applications* that provide seamless user experience and robust data handling capabilities. I love to work with *Flutter*, *Node.js*, *TypeScript*, and *Firebase*. I am currently working as a *Mobile Application Developer* at *Ofis.work*.",
    socials: &[
        Social {
            label: "Linkedin",
            link: "https://www.linkedin.com/in/erengun",
        },
        Social {
            label: "Github",
            link: "https://github.com/Erengun",
        },
        Social {
            label: "Medium",
            link: "https://medium.com/@erengun",
        },
        Social {
            label: "Stack Overflow",
            link: "https://stackoverflow.com/users/18449412/eren-g%c3%bcn",
        },
        Social {
            label: "Resume",
            link: "https://drive.google.com/file/d/15STnxPXJfzzjb6T62ZBQu7r_KbGg7ESR/view?usp=sharing",
        },
    ],
    // Set to Some("/profile.webp") once the image is added to the assets.
    profile: None,
};

pub const PROJECT_LIST: &[Project] = &[
    Project {
        title: "Flutter Riverpod 2.0 Template",
        techs: &["Flutter", "Riverpod", "Freezed", "Go Router", "Dio", "Hive", "GetIt"],
        link: "https://github.com/Erengun/Flutter-Riverpod-2.0-Template",
        is_coming_soon: false,
    },
    Project {
        title: "Pati Pati App",
        techs: &[
            "Flutter", "Firebase", "Riverpod", "Freezed", "Go Router", "Dio", "Hive", "GetIt",
        ],
        link: "https://play.google.com/apps/testing/app.patipati",
        is_coming_soon: false,
    },
    Project {
        title: "Tinywall",
        techs: &["Flutter", "MobX", "Hive", "Dio", "GetIt", "MVVM", "Clean Architecture"],
        link: "https://tinywall.app",
        is_coming_soon: false,
    },
    Project {
        title: "Grog app",
        techs: &[
            "Flutter",
            "Firebase",
            "Cloud Firestore",
            "Firebase Auth",
            "Firebase Functions",
            "Riverpod",
        ],
        link: "/",
        is_coming_soon: true,
    },
    Project {
        title: "GOHouse - Mobile app",
        techs: &["Flutter", "Firebase", "Cloud Firestore", "Firebase Auth", "GetIt"],
        link: "/",
        is_coming_soon: false,
    },
    Project {
        title: "Firebase Flutter Snippets",
        techs: &[
            "Flutter",
            "Firebase",
            "Cloud Firestore",
            "Firebase Auth",
            "Firebase Functions",
        ],
        link: "https://github.com/Erengun/snippets-flutter",
        is_coming_soon: false,
    },
    Project {
        title: "Browser Image Compression - Flutter Package",
        techs: &["Flutter", "Dart", "Image Compression"],
        link: "https://github.com/ChampionsGoal/browser_image_compression",
        is_coming_soon: false,
    },
];
