use chrono::NaiveDate;
use log::{info, warn};

use super::filter::build_display_blocks;
use crate::config::{Config, Loaded, SkipReason};
use crate::error::Result;
use crate::services::{create_client, GitHubClient, SlackNotifier};
use crate::utils::DateWindow;
use crate::view::Payload;

/// How a run ended when nothing went wrong.
#[derive(Debug)]
pub enum Outcome {
    /// Configuration was absent; no request was made.
    Skipped(SkipReason),
    Sent { pull_requests: usize },
    /// `--dry-run`: the payload that would have been posted.
    DryRun(Payload),
}

/// One reminder run: fetch, filter, resolve CI, post.
pub struct Reminder {
    config: Config,
    github: GitHubClient,
    slack: SlackNotifier,
}

impl Reminder {
    pub fn new(config: Config) -> Result<Self> {
        let http = create_client(&config.token)?;
        Ok(Self {
            github: GitHubClient::with_http(http.clone(), &config),
            slack: SlackNotifier::with_http(http, &config),
            config,
        })
    }

    /// Fetch the PRs and build the message without sending it.
    pub async fn prepare(&self, today: NaiveDate) -> Result<Payload> {
        let window = DateWindow::ending(today);
        let prs = self.github.fetch_pull_requests().await?;
        let blocks = build_display_blocks(&prs, &self.github, &self.config, &window).await?;

        info!(
            "{} of {} pull requests qualify for {}",
            blocks.len(),
            prs.len(),
            window.caption()
        );
        Ok(Payload::reminder(&blocks, &window))
    }

    pub async fn run(&self, today: NaiveDate, dry_run: bool) -> Result<Outcome> {
        let payload = self.prepare(today).await?;

        if dry_run {
            return Ok(Outcome::DryRun(payload));
        }

        self.slack.send(&payload).await?;
        Ok(Outcome::Sent {
            pull_requests: payload.pull_request_count(),
        })
    }
}

/// Entry point shared by the binary and the integration tests.
pub async fn run(loaded: Loaded, today: NaiveDate, dry_run: bool) -> Result<Outcome> {
    match loaded {
        Loaded::Skip(reason) => {
            warn!("nothing to do: {}", reason);
            Ok(Outcome::Skipped(reason))
        }
        Loaded::Ready(config) => Reminder::new(config)?.run(today, dry_run).await,
    }
}
