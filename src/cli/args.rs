//! Command-line arguments.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::ProfileConfig;

/// View the signed-in user's campus profile.
#[derive(Debug, Clone, Default, PartialEq, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Backend origin, e.g. https://campus.example.edu
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Session token to send instead of the stored one
    #[arg(long, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Read the session token from this file
    #[arg(long, value_name = "PATH")]
    pub credentials_file: Option<PathBuf>,

    /// Give up on the request after this many seconds
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Fetch once and print the complete profile record as JSON
    #[arg(long, conflicts_with = "summary")]
    pub json: bool,

    /// Fetch once and print a plain-text profile summary
    #[arg(long)]
    pub summary: bool,
}

/// What to do after argument parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// The interactive terminal screen
    Interactive,
    Json,
    Summary,
}

impl Cli {
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.summary {
            OutputMode::Summary
        } else {
            OutputMode::Interactive
        }
    }

    /// Layer flags over `config`; flags that were not given leave it untouched.
    pub fn apply(&self, mut config: ProfileConfig) -> ProfileConfig {
        if let Some(url) = &self.base_url {
            config.base_url = url.clone();
        }
        if let Some(token) = &self.token {
            config.token = Some(token.clone());
        }
        if let Some(path) = &self.credentials_file {
            config.credentials_file = Some(path.clone());
            // An explicit file beats a token inherited from the environment
            if self.token.is_none() {
                config.token = None;
            }
        }
        if let Some(secs) = self.timeout_secs.filter(|s| *s > 0) {
            config.timeout = Some(Duration::from_secs(secs));
        }
        config
    }
}
