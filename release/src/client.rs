use crate::error::{ReleaseError, Result};
use crate::tag::ReleaseTag;
use crate::traits::ReleaseSource;
use crate::types::{GitCommit, GitRef, GitTag, GithubRelease, ReleaseMetadata};
use changelog::GitHubConfig;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

const USER_AGENT: &str = concat!("snapshots-changelog/", env!("CARGO_PKG_VERSION"));

/// Resolves releases through the GitHub REST API
#[derive(Clone)]
pub struct GitHubReleaseSource {
    client: Client,
    repo_url: String,
}

impl GitHubReleaseSource {
    /// Create a new client for the configured repository
    pub fn new(config: &GitHubConfig) -> Result<Self> {
        if config.owner.is_empty() || config.repo.is_empty() {
            return Err(ReleaseError::InvalidConfig {
                message: "GitHub owner and repo must not be empty".to_string(),
            });
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        if let Some(token) = config.token.as_deref().filter(|t| !t.is_empty()) {
            let value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|e| {
                ReleaseError::InvalidConfig {
                    message: format!("GitHub token is not a valid header value: {e}"),
                }
            })?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            repo_url: format!(
                "{}/repos/{}/{}",
                config.api_url.trim_end_matches('/'),
                config.owner,
                config.repo
            ),
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}/{path}", self.repo_url);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReleaseError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| ReleaseError::unexpected_response(url, e.to_string()))
    }

    /// Follows the tag ref to the commit it names; annotated tags take one
    /// extra hop through the tag object
    async fn resolve_commit(&self, tag: &ReleaseTag) -> Result<String> {
        let GitRef { object } = self.get(&format!("git/ref/tags/{tag}")).await?;
        match object.kind.as_str() {
            "commit" => Ok(object.sha),
            "tag" => {
                let GitTag { object } = self.get(&format!("git/tags/{}", object.sha)).await?;
                Ok(object.sha)
            }
            other => Err(ReleaseError::unexpected_response(
                format!("{}/git/ref/tags/{tag}", self.repo_url),
                format!("tag points to a {other}, not a commit"),
            )),
        }
    }
}

impl ReleaseSource for GitHubReleaseSource {
    async fn fetch_release(&self, tag: &ReleaseTag) -> Result<ReleaseMetadata> {
        let commit = self.resolve_commit(tag).await?;
        let GitCommit { committer } = self.get(&format!("git/commits/{commit}")).await?;
        let release: GithubRelease = self.get(&format!("releases/tags/{tag}")).await?;

        let (listed, skipped): (Vec<_>, Vec<_>) =
            release.assets.into_iter().partition(|asset| asset.is_listed());

        Ok(ReleaseMetadata {
            tag: release.tag_name,
            commit,
            committed_at: committer.date,
            urls: listed
                .into_iter()
                .map(|asset| asset.browser_download_url)
                .collect(),
            skipped_assets: skipped.into_iter().map(|asset| asset.name).collect(),
        })
    }
}
