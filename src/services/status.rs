use async_trait::async_trait;

use crate::data::CiStatus;
use crate::error::Result;

/// Looks up the CI result for a commit.
///
/// `GitHubClient` implements this against the combined status endpoint;
/// tests swap in an in-memory table.
#[async_trait]
pub trait StatusResolver: Send + Sync {
    async fn resolve(&self, sha: &str) -> Result<CiStatus>;
}
