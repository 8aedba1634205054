//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::{Path, PathBuf};

use crate::feed;

/// Command line configuration for Daybook.
#[derive(Debug, Clone, Parser)]
#[command(name = "daybook", version, about, long_about = None)]
pub struct Config {
    /// Feed source: path to a JSON feed file or base URL of the post API
    #[arg(default_value = "feed.json")]
    pub feed: String,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Site name shown in the page header
    #[arg(long)]
    pub name: Option<String>,

    /// Contact email shown in the page header
    #[arg(long)]
    pub email: Option<String>,

    /// Posts per listing page
    #[arg(long, default_value_t = 20)]
    pub per_page: usize,

    /// Also render a search results page for this query
    #[arg(long)]
    pub query: Option<String>,

    /// Open the generated site in the default browser
    #[arg(long)]
    pub open: bool,
}

/// Site identity rendered into page headers.
#[derive(Debug, Clone)]
pub struct Site {
    pub name: String,
    pub email: Option<String>,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the page size is zero or a local feed file does not
    /// exist.
    pub fn validate(&self) -> Result<()> {
        if self.per_page == 0 {
            bail!("Posts per page must be at least 1");
        }

        if !feed::is_remote(&self.feed) && !Path::new(&self.feed).exists() {
            bail!("Feed file does not exist: {}", self.feed);
        }

        Ok(())
    }

    /// Returns the site name from configuration or the feed file stem.
    pub fn site_name(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }

        if feed::is_remote(&self.feed) {
            return "daybook".to_string();
        }

        Path::new(&self.feed)
            .file_stem()
            .and_then(|n| n.to_str())
            .map(String::from)
            .unwrap_or_else(|| "daybook".to_string())
    }

    /// Site identity for page rendering.
    pub fn site(&self) -> Site {
        Site {
            name: self.site_name(),
            email: self.email.clone(),
        }
    }
}
