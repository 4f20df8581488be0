mod commands;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version, about = "Personal portfolio and blog site", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the site, including robots.txt and sitemaps
    Serve {
        /// Path to site directory (containing folio.toml)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Port to serve on (overrides folio.toml)
        #[arg(short, long)]
        port: Option<u16>,

        /// Absolute site URL used for the sitemap location
        #[arg(long, env = "FOLIO_SITE_URL")]
        site_url: Option<String>,
    },

    /// Build the static site into an output directory
    Build {
        /// Path to site directory (containing folio.toml)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output directory for generated site
        #[arg(short, long)]
        output: PathBuf,

        /// Absolute site URL used for the sitemap location
        #[arg(long, env = "FOLIO_SITE_URL")]
        site_url: Option<String>,
    },

    /// Check site content and configuration
    Validate {
        /// Path to site directory (optional, checks folio.toml when given)
        path: Option<PathBuf>,
    },

    /// Fetch a published blog post and print it as Markdown
    FetchPost {
        /// Post URL (defaults to the Flutter selectable text post)
        url: Option<String>,

        /// Print the Markdown body only
        #[arg(long)]
        no_frontmatter: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Command::Serve {
            path,
            port,
            site_url,
        } => commands::serve::run(path, port, site_url).await,
        Command::Build {
            path,
            output,
            site_url,
        } => commands::build::run(path, output, site_url).await,
        Command::Validate { path } => commands::validate::run(path).await,
        Command::FetchPost {
            url,
            no_frontmatter,
        } => commands::fetch_post::run(url, !no_frontmatter).await,
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "folio", &mut io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_fetch_post_defaults() {
        let cli = Cli::try_parse_from(["folio", "fetch-post"]).unwrap();
        match cli.command {
            Command::FetchPost {
                url,
                no_frontmatter,
            } => {
                assert!(url.is_none());
                assert!(!no_frontmatter);
            }
            _ => panic!("expected fetch-post"),
        }
    }

    #[test]
    fn test_parse_build() {
        let cli = Cli::try_parse_from([
            "folio",
            "build",
            "site",
            "--output",
            "dist",
            "--site-url",
            "https://example.dev/",
        ])
        .unwrap();
        match cli.command {
            Command::Build {
                path,
                output,
                site_url,
            } => {
                assert_eq!(path, PathBuf::from("site"));
                assert_eq!(output, PathBuf::from("dist"));
                assert_eq!(site_url.as_deref(), Some("https://example.dev/"));
            }
            _ => panic!("expected build"),
        }
    }
}
