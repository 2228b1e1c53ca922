use crate::architecture::Architecture;
use crate::date::ReleaseDate;
use crate::error::ChangelogError;

/// Type alias for Result with `ChangelogError`
pub type Result<T> = std::result::Result<T, ChangelogError>;

/// The package categories a snapshot release is published as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Installer,
    Portable,
    MinGit,
    MinGitBusyBox,
}

impl ArtifactKind {
    /// Order in which kinds are listed in a rendered section
    pub const DISPLAY_ORDER: [ArtifactKind; 4] = [
        Self::Installer,
        Self::Portable,
        Self::MinGit,
        Self::MinGitBusyBox,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Installer => "Git for Windows installer",
            Self::Portable => "Portable Git (self-extracting <tt>.7z</tt> archive)",
            Self::MinGit => "MinGit",
            Self::MinGitBusyBox => "MinGit (BusyBox)",
        }
    }
}

/// A download URL with the artifact kind and architecture derived from its file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedUrl {
    pub url: String,
    pub kind: ArtifactKind,
    pub architecture: Architecture,
}

/// Classified download URLs of one release, bucketed by artifact kind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseArtifacts {
    installers: Vec<ClassifiedUrl>,
    portable_gits: Vec<ClassifiedUrl>,
    min_gits: Vec<ClassifiedUrl>,
    busybox_min_gits: Vec<ClassifiedUrl>,
}

impl ReleaseArtifacts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, url: ClassifiedUrl) {
        self.bucket_mut(url.kind).push(url);
    }

    #[must_use]
    pub fn get(&self, kind: ArtifactKind) -> &[ClassifiedUrl] {
        match kind {
            ArtifactKind::Installer => &self.installers,
            ArtifactKind::Portable => &self.portable_gits,
            ArtifactKind::MinGit => &self.min_gits,
            ArtifactKind::MinGitBusyBox => &self.busybox_min_gits,
        }
    }

    fn bucket_mut(&mut self, kind: ArtifactKind) -> &mut Vec<ClassifiedUrl> {
        match kind {
            ArtifactKind::Installer => &mut self.installers,
            ArtifactKind::Portable => &mut self.portable_gits,
            ArtifactKind::MinGit => &mut self.min_gits,
            ArtifactKind::MinGitBusyBox => &mut self.busybox_min_gits,
        }
    }

    /// Total number of URLs across all buckets
    #[must_use]
    pub fn len(&self) -> usize {
        ArtifactKind::DISPLAY_ORDER
            .iter()
            .map(|kind| self.get(*kind).len())
            .sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over all URLs, bucket by bucket in display order
    pub fn iter(&self) -> impl Iterator<Item = &ClassifiedUrl> + '_ {
        ArtifactKind::DISPLAY_ORDER
            .into_iter()
            .flat_map(move |kind| self.get(kind).iter())
    }
}

/// A validated release, ready to be rendered as a changelog section
#[derive(Debug, Clone)]
pub struct ReleaseEntry {
    pub date: ReleaseDate,
    pub commit: String,
    pub artifacts: ReleaseArtifacts,
}

impl ReleaseEntry {
    /// Builds an entry from optional user input
    ///
    /// # Errors
    /// Returns a validation error when the date or commit is missing, the date
    /// cannot be understood, or no URL was classified
    pub fn new(
        date: Option<&str>,
        commit: Option<&str>,
        artifacts: ReleaseArtifacts,
    ) -> Result<Self> {
        let date = date
            .filter(|d| !d.trim().is_empty())
            .ok_or_else(|| ChangelogError::validation("Need a date!"))?;
        let commit = commit
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| ChangelogError::validation("Need a commit!"))?;

        Self::from_parts(ReleaseDate::parse(date)?, commit, artifacts)
    }

    /// Builds an entry from an already resolved date
    ///
    /// # Errors
    /// Returns a validation error when the commit is empty or no URL was classified
    pub fn from_parts(
        date: ReleaseDate,
        commit: impl Into<String>,
        artifacts: ReleaseArtifacts,
    ) -> Result<Self> {
        let commit = commit.into();
        if commit.trim().is_empty() {
            return Err(ChangelogError::validation("Need a commit!"));
        }
        if artifacts.is_empty() {
            return Err(ChangelogError::validation("Need at least one URL!"));
        }

        Ok(Self {
            date,
            commit,
            artifacts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classified(url: &str, kind: ArtifactKind, architecture: Architecture) -> ClassifiedUrl {
        ClassifiedUrl {
            url: url.to_string(),
            kind,
            architecture,
        }
    }

    #[test]
    fn test_artifacts_bucket_by_kind() {
        let mut artifacts = ReleaseArtifacts::new();
        artifacts.push(classified("a", ArtifactKind::MinGit, Architecture::X86));
        artifacts.push(classified("b", ArtifactKind::Installer, Architecture::X64));
        artifacts.push(classified("c", ArtifactKind::MinGit, Architecture::X64));

        assert_eq!(artifacts.len(), 3);
        assert_eq!(artifacts.get(ArtifactKind::MinGit).len(), 2);
        assert!(artifacts.get(ArtifactKind::Portable).is_empty());
        let order: Vec<&str> = artifacts.iter().map(|u| u.url.as_str()).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_entry_requires_date_commit_and_urls() {
        let mut artifacts = ReleaseArtifacts::new();
        artifacts.push(classified("a", ArtifactKind::Installer, Architecture::X64));

        let err = ReleaseEntry::new(None, Some("abc123"), artifacts.clone()).unwrap_err();
        assert_eq!(err.user_message(), "Need a date!");

        let err = ReleaseEntry::new(Some("Tue Apr 04 2023"), None, artifacts.clone()).unwrap_err();
        assert_eq!(err.user_message(), "Need a commit!");

        let err = ReleaseEntry::new(Some("Tue Apr 04 2023"), Some("abc123"), ReleaseArtifacts::new())
            .unwrap_err();
        assert_eq!(err.user_message(), "Need at least one URL!");

        let entry = ReleaseEntry::new(Some("Tue Apr 04 2023"), Some("abc123"), artifacts).unwrap();
        assert_eq!(entry.commit, "abc123");
    }

    #[test]
    fn test_entry_rejects_unparseable_date() {
        let mut artifacts = ReleaseArtifacts::new();
        artifacts.push(classified("a", ArtifactKind::Installer, Architecture::X64));

        let err = ReleaseEntry::new(Some("next tuesday"), Some("abc123"), artifacts).unwrap_err();
        assert!(matches!(err, ChangelogError::Validation(_)));
    }
}
