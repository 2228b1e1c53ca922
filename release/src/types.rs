use chrono::{DateTime, Utc};
use serde::Deserialize;

/// `GET /repos/{owner}/{repo}/git/ref/tags/{tag}`
#[derive(Debug, Deserialize)]
pub struct GitRef {
    pub object: GitObject,
}

#[derive(Debug, Deserialize)]
pub struct GitObject {
    pub sha: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// `GET /repos/{owner}/{repo}/git/tags/{sha}`
#[derive(Debug, Deserialize)]
pub struct GitTag {
    pub object: GitObject,
}

/// `GET /repos/{owner}/{repo}/git/commits/{sha}`
#[derive(Debug, Deserialize)]
pub struct GitCommit {
    pub committer: GitSignature,
}

#[derive(Debug, Deserialize)]
pub struct GitSignature {
    pub date: DateTime<Utc>,
}

/// `GET /repos/{owner}/{repo}/releases/tags/{tag}`
#[derive(Debug, Deserialize)]
pub struct GithubRelease {
    pub tag_name: String,
    pub assets: Vec<GithubAsset>,
}

#[derive(Debug, Deserialize)]
pub struct GithubAsset {
    pub name: String,
    pub browser_download_url: String,
}

impl GithubAsset {
    /// Source tarballs and debug symbols never get a changelog link
    pub fn is_listed(&self) -> bool {
        !self.name.ends_with(".tar.bz2") && !self.name.starts_with("pdbs")
    }
}

/// Everything a changelog section needs from a published release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseMetadata {
    pub tag: String,
    pub commit: String,
    pub committed_at: DateTime<Utc>,
    pub urls: Vec<String>,
    /// Names of assets that were left out
    pub skipped_assets: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(name: &str) -> GithubAsset {
        GithubAsset {
            name: name.to_string(),
            browser_download_url: format!("https://example.com/{name}"),
        }
    }

    #[test]
    fn test_listed_assets() {
        assert!(asset("Git-2.40.0-64-bit.exe").is_listed());
        assert!(asset("MinGit-2.40.0-busybox-64-bit.zip").is_listed());
        assert!(!asset("git-2.40.0.tar.bz2").is_listed());
        assert!(!asset("pdbs-for-git-64-bit-2.40.0.zip").is_listed());
    }

    #[test]
    fn test_commit_date_deserializes() {
        let commit: GitCommit =
            serde_json::from_str(r#"{"committer": {"name": "x", "date": "2023-04-04T14:03:05Z"}}"#)
                .unwrap();
        assert_eq!(commit.committer.date.to_rfc3339(), "2023-04-04T14:03:05+00:00");
    }
}
