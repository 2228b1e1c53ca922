//! Looks up published Git for Windows releases so that their changelog
//! sections can be reconstructed.

pub mod client;
pub mod error;
pub mod tag;
pub mod traits;
pub mod types;

pub use client::GitHubReleaseSource;
pub use error::{ReleaseError, Result};
pub use tag::ReleaseTag;
pub use traits::ReleaseSource;
pub use types::ReleaseMetadata;

use changelog::GitHubConfig;

/// Validates `tag` and resolves it against the configured repository.
///
/// The tag shape is checked before any request is made.
pub async fn fetch_release(config: &GitHubConfig, tag: &str) -> Result<ReleaseMetadata> {
    let tag = ReleaseTag::parse(tag)?;
    let source = GitHubReleaseSource::new(config)?;
    source.fetch_release(&tag).await
}
