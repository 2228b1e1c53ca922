use std::fmt::{self, Display, Formatter};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ReleaseError, Result};

static RELEASE_PAGE_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https://github\.com/[^/]+/[^/]+/releases/tag/")
        .expect("Failed to compile release page regex")
});

static RELEASE_TAG_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^v[1-9][0-9]*(\.\d+){2}(-rc\d+)?\.windows\.\d+$")
        .expect("Failed to compile release tag regex")
});

/// A Git for Windows release tag such as `v2.40.0.windows.1`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseTag(String);

impl ReleaseTag {
    /// Accepts a bare tag or the URL of its release page
    ///
    /// # Errors
    /// Returns `ReleaseError::InvalidTag` when the tag does not have the
    /// `v<major>.<minor>.<patch>[-rc<N>].windows.<build>` shape
    pub fn parse(input: &str) -> Result<Self> {
        let tag = RELEASE_PAGE_PREFIX.replace(input.trim(), "");
        if !RELEASE_TAG_PATTERN.is_match(&tag) {
            return Err(ReleaseError::invalid_tag(tag.into_owned()));
        }
        Ok(Self(tag.into_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ReleaseTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_tags() {
        for tag in ["v2.40.0.windows.1", "v2.41.0-rc2.windows.1", "v10.0.12.windows.3"] {
            assert_eq!(ReleaseTag::parse(tag).unwrap().as_str(), tag);
        }
    }

    #[test]
    fn test_release_page_url_is_stripped() {
        let tag = ReleaseTag::parse(
            "https://github.com/git-for-windows/git/releases/tag/v2.40.0.windows.1",
        )
        .unwrap();
        assert_eq!(tag.to_string(), "v2.40.0.windows.1");
    }

    #[test]
    fn test_malformed_tags() {
        for tag in [
            "v2.40.windows.1",
            "2.40.0.windows.1",
            "v0.40.0.windows.1",
            "v2.40.0",
            "v2.40.0.windows",
            "v2.40.0-rc.windows.1",
            "prerelease-2.40.0.windows.1.1",
        ] {
            let err = ReleaseTag::parse(tag).unwrap_err();
            assert!(matches!(err, ReleaseError::InvalidTag { .. }), "{tag}");
            assert!(!err.is_remote());
        }
    }
}
