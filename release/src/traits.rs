use crate::error::Result;
use crate::tag::ReleaseTag;
use crate::types::ReleaseMetadata;
use std::future::Future;

/// Trait for anything that can describe a published release
pub trait ReleaseSource: Send + Sync {
    /// Resolve the commit, commit date and downloadable assets of `tag`
    fn fetch_release(
        &self,
        tag: &ReleaseTag,
    ) -> impl Future<Output = Result<ReleaseMetadata>> + Send;
}
