use std::env;
use std::fmt;

use crate::error::{Error, Result};

pub const TOKEN_VAR: &str = "GITHUB_TOKEN";
pub const WEBHOOK_URL_VAR: &str = "SLACK_GITHUB_NOTIFICATIONS_REMINDER_WEBHOOK_URL";
pub const BASE_URL_VAR: &str = "GITHUB_BASE_URL_API";
pub const CI_STATUS_URL_VAR: &str = "GITHUB_CI_STATUS_URL";
pub const PULL_REQUEST_URL_VAR: &str = "GITHUB_PULL_REQUEST_URL";

/// Runtime parameters for one reminder run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub token: String,
    pub webhook_url: String,
    /// Endpoint listing the open pull requests.
    pub pulls_url: String,
    /// Prefix for commit status lookups; `{sha}/status` is appended.
    pub status_url_template: String,
    /// Prefix for PR page links; the PR number is appended.
    pub pull_request_url_template: String,
}

/// A variable whose absence turns the run into a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingToken,
    MissingWebhookUrl,
    MissingBaseUrl,
}

impl SkipReason {
    pub fn variable(self) -> &'static str {
        match self {
            SkipReason::MissingToken => TOKEN_VAR,
            SkipReason::MissingWebhookUrl => WEBHOOK_URL_VAR,
            SkipReason::MissingBaseUrl => BASE_URL_VAR,
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not set", self.variable())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Loaded {
    Ready(Config),
    Skip(SkipReason),
}

impl Config {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Loaded> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read the configuration through `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Loaded>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let Some(token) = get(TOKEN_VAR) else {
            return Ok(Loaded::Skip(SkipReason::MissingToken));
        };
        let Some(webhook_url) = get(WEBHOOK_URL_VAR) else {
            return Ok(Loaded::Skip(SkipReason::MissingWebhookUrl));
        };
        let Some(pulls_url) = get(BASE_URL_VAR) else {
            return Ok(Loaded::Skip(SkipReason::MissingBaseUrl));
        };

        let status_url_template =
            get(CI_STATUS_URL_VAR).ok_or(Error::MissingConfig(CI_STATUS_URL_VAR))?;
        let pull_request_url_template =
            get(PULL_REQUEST_URL_VAR).ok_or(Error::MissingConfig(PULL_REQUEST_URL_VAR))?;

        Ok(Loaded::Ready(Config {
            token,
            webhook_url,
            pulls_url,
            status_url_template,
            pull_request_url_template,
        }))
    }

    pub fn status_url(&self, sha: &str) -> String {
        format!("{}{}/status", self.status_url_template, sha)
    }

    pub fn pull_request_url(&self, number: u64) -> String {
        format!("{}{}", self.pull_request_url_template, number)
    }
}
