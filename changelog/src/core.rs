use crate::config::ChangelogConfig;
use crate::error::ChangelogError;
use crate::formatter::{HtmlSectionFormatter, SectionFormatter, unique_id};
use crate::hrefs::{HrefRewrite, HrefRewriter};
use crate::parser::Document;
use crate::position::{InsertMode, find_insert_position};
use crate::types::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Where a newly added section ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertedSection {
    pub id: String,
    /// Index among the document's sections, 0 being the topmost
    pub position: usize,
}

/// The snapshots changelog document, loaded from disk
pub struct Changelog {
    path: PathBuf,
    document: Document,
    formatter: Box<dyn SectionFormatter>,
}

impl Changelog {
    /// Reads and parses the changelog at `path`
    ///
    /// # Errors
    /// Returns error if file cannot be read or is not in the expected format
    pub fn open(path: impl Into<PathBuf>, config: &ChangelogConfig) -> Result<Self> {
        let path = path.into();
        let content = fs::read_to_string(&path).map_err(ChangelogError::Io)?;
        Self::from_content(path, &content, config)
    }

    /// Parses changelog text that will later be saved to `path`
    ///
    /// # Errors
    /// Returns a format error when the text has no section header
    pub fn from_content(
        path: impl Into<PathBuf>,
        content: &str,
        config: &ChangelogConfig,
    ) -> Result<Self> {
        let path = path.into();
        let document = Document::parse(content).map_err(|e| {
            e.with_context(format!("'{}' is not in the expected format", path.display()))
        })?;

        Ok(Self {
            path,
            document,
            formatter: Box::new(HtmlSectionFormatter::new(config.commit_url_base.clone())),
        })
    }

    /// Renders `entry` under a fresh id and inserts it according to `mode`.
    /// Only the in-memory document changes; call [`Changelog::save`] to write it.
    ///
    /// # Errors
    /// Returns a format error if the rendered section cannot be spliced in
    pub fn add_release(&mut self, entry: &ReleaseEntry, mode: InsertMode) -> Result<InsertedSection> {
        let id = unique_id(&entry.date.stamp(), &self.document.ids());
        let section = self.formatter.format(&id, entry);
        let position = find_insert_position(&self.document, &section, mode);
        self.document.insert(position, &section)?;

        Ok(InsertedSection { id, position })
    }

    /// Writes the whole document back, replacing the previous content
    ///
    /// # Errors
    /// Returns an error if the file cannot be written
    pub fn save(&self) -> Result<()> {
        fs::write(&self.path, self.document.render()).map_err(ChangelogError::Io)
    }

    #[must_use]
    pub fn content(&self) -> String {
        self.document.render()
    }

    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Rewrites bare download links of the document at `path` in place
///
/// # Errors
/// Returns an error if the file cannot be read or written
pub fn adjust_hrefs(path: &Path, config: &ChangelogConfig) -> Result<HrefRewrite> {
    let content = fs::read_to_string(path).map_err(ChangelogError::Io)?;
    let rewriter = HrefRewriter::new(config.download_url_base.clone(), config.stylesheet.clone());
    let result = rewriter.rewrite(&content);
    fs::write(path, &result.content).map_err(ChangelogError::Io)?;
    Ok(result)
}
