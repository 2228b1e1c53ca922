//! Maintains the HTML changelog of Git for Windows snapshot builds.
//!
//! Download URLs are classified by artifact kind and architecture, rendered
//! into a section and spliced into the document either at the top or by date.

pub mod architecture;
pub mod classifier;
pub mod config;
pub mod core;
pub mod date;
pub mod error;
pub mod formatter;
pub mod hrefs;
pub mod parser;
pub mod position;
pub mod regex_utils;
pub mod types;
pub mod utils;

pub use architecture::Architecture;
pub use classifier::{ARTIFACT_TEMPLATES, ArtifactTemplate, UrlClassifier};
pub use config::{ChangelogConfig, GitHubConfig};
pub use crate::core::{Changelog, InsertedSection, adjust_hrefs};
pub use date::ReleaseDate;
pub use error::ChangelogError;
pub use formatter::{HtmlSectionFormatter, SectionFormatter};
pub use hrefs::{HrefRewrite, HrefRewriter, RewriteState};
pub use parser::Document;
pub use position::InsertMode;
pub use types::{ArtifactKind, ClassifiedUrl, ReleaseArtifacts, ReleaseEntry, Result};

use std::path::Path;

/// Adds a release section to the changelog at `changelog_path`.
///
/// # Arguments
///
/// * `changelog_path` - Path to the HTML changelog
/// * `entry` - The validated release to add
/// * `mode` - Where the section goes
/// * `config` - Link bases used while rendering
///
/// # Returns
///
/// The id and position of the new section
///
/// # Errors
///
/// Returns an error if the document cannot be read, is not in the expected
/// format, or cannot be written. Nothing is written on error.
pub fn add_entry(
    changelog_path: &Path,
    entry: &ReleaseEntry,
    mode: InsertMode,
    config: &ChangelogConfig,
) -> Result<InsertedSection> {
    let mut changelog = Changelog::open(changelog_path, config)?;
    let inserted = changelog.add_release(entry, mode)?;
    changelog.save()?;
    Ok(inserted)
}
