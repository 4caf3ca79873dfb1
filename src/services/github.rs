use async_trait::async_trait;
use log::{debug, info};

use super::http::{create_client, read_json};
use super::status::StatusResolver;
use crate::config::Config;
use crate::data::{CiStatus, CombinedStatus, PullRequest};
use crate::error::{Error, RequestError, Result};

/// REST client for the pull request list and commit status endpoints.
pub struct GitHubClient {
    http: reqwest::Client,
    config: Config,
}

impl GitHubClient {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self::with_http(create_client(&config.token)?, config))
    }

    /// Reuse an already configured `reqwest::Client`.
    pub fn with_http(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            config: config.clone(),
        }
    }

    /// Fetch the open pull requests, in the order GitHub returns them.
    pub async fn fetch_pull_requests(&self) -> Result<Vec<PullRequest>> {
        debug!("GET {}", self.config.pulls_url);

        let prs: Vec<PullRequest> = self
            .get_json(&self.config.pulls_url)
            .await
            .map_err(Error::FetchPullRequests)?;

        info!("fetched {} open pull requests", prs.len());
        Ok(prs)
    }

    async fn fetch_combined_status(
        &self,
        sha: &str,
    ) -> std::result::Result<CombinedStatus, RequestError> {
        let url = self.config.status_url(sha);
        debug!("GET {}", url);
        self.get_json(&url).await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
    ) -> std::result::Result<T, RequestError> {
        let response = self.http.get(url).send().await?;
        read_json(response).await
    }
}

#[async_trait]
impl StatusResolver for GitHubClient {
    async fn resolve(&self, sha: &str) -> Result<CiStatus> {
        let status = self
            .fetch_combined_status(sha)
            .await
            .map_err(|source| Error::FetchCiStatus {
                sha: sha.to_string(),
                source,
            })?;

        let ci_status = status.ci_status();
        debug!(
            "commit {} state={:?} -> {}",
            sha,
            status.state,
            ci_status.to_str()
        );
        Ok(ci_status)
    }
}
