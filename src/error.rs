use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures that abort a reminder run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("missing required environment variable {0}")]
    MissingConfig(&'static str),

    #[error("invalid value for header {name}")]
    InvalidHeader {
        name: &'static str,
        #[source]
        source: reqwest::header::InvalidHeaderValue,
    },

    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("error fetching GitHub pull requests")]
    FetchPullRequests(#[source] RequestError),

    #[error("error fetching CI status for {sha}")]
    FetchCiStatus {
        sha: String,
        #[source]
        source: RequestError,
    },

    #[error("error sending Slack notification")]
    SendNotification(#[source] RequestError),
}

/// Why a single HTTP exchange failed.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("unexpected status {0}")]
    Status(StatusCode),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("malformed response body")]
    Parse(#[from] serde_json::Error),
}
