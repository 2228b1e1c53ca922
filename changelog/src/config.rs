use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ChangelogError;
use crate::types::Result;

/// Configuration options for the snapshots changelog
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ChangelogConfig {
    /// The HTML document that is updated in place
    pub document: PathBuf,
    /// Commits are linked as `<commit_url_base>/<commit>`
    pub commit_url_base: String,
    /// Bare file names are rewritten to `<download_url_base>/<tag>/<file>`
    pub download_url_base: String,
    /// Stylesheet link that must never be rewritten
    pub stylesheet: String,
    pub github: GitHubConfig,
    pub verbose: bool,
}

/// Where published releases are looked up when backfilling
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GitHubConfig {
    pub api_url: String,
    pub owner: String,
    pub repo: String,
    pub token: Option<String>,
    pub timeout_seconds: u64,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            document: PathBuf::from("index.html"),
            commit_url_base: "https://github.com/git-for-windows/git/commit".to_string(),
            download_url_base:
                "https://github.com/git-for-windows/git-snapshots/releases/download".to_string(),
            stylesheet: "GitForWindows.css".to_string(),
            github: GitHubConfig::default(),
            verbose: false,
        }
    }
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.github.com".to_string(),
            owner: "git-for-windows".to_string(),
            repo: "git".to_string(),
            token: None,
            timeout_seconds: 30,
        }
    }
}

impl ChangelogConfig {
    /// Parses a TOML configuration; missing keys keep their defaults
    ///
    /// # Errors
    /// Returns a config error when the TOML is malformed
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ChangelogError::Config(e.to_string()))
    }

    /// Loads configuration from a TOML file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ChangelogError::Io(e).with_context(format!("Reading {}", path.display()))
        })?;
        Self::from_toml(&content)
            .map_err(|e| e.with_context(format!("Parsing {}", path.display())))
    }

    /// Loads `path` when given, defaults otherwise
    ///
    /// # Errors
    /// Returns an error if a given file cannot be read or parsed
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}
