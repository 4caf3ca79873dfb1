use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::{Error, RequestError, Result};

pub const USER_AGENT_VALUE: &str = "SmartSystem";
pub const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// Create an HTTP client carrying the GitHub auth headers.
///
/// The same client is used for the webhook POST, so Slack receives these
/// headers too.
pub fn create_client(token: &str) -> Result<reqwest::Client> {
    let mut headers = HeaderMap::new();

    let mut auth = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|source| {
        Error::InvalidHeader {
            name: "Authorization",
            source,
        }
    })?;
    auth.set_sensitive(true);

    headers.insert(AUTHORIZATION, auth);
    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
    headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));

    reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .map_err(Error::Client)
}

/// Anything but a plain 200 is treated as a failure.
pub fn ensure_ok(response: &Response) -> std::result::Result<(), RequestError> {
    match response.status() {
        StatusCode::OK => Ok(()),
        status => Err(RequestError::Status(status)),
    }
}

/// Check the status, then decode the body as JSON.
pub async fn read_json<T: DeserializeOwned>(
    response: Response,
) -> std::result::Result<T, RequestError> {
    ensure_ok(&response)?;
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
