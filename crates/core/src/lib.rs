pub mod config;
pub mod content;
pub mod error;
pub mod types;

pub use config::{FolioConfig, load_config, resolve_site_url};
pub use error::{Error, Result};
pub use types::*;
