use log::debug;

use crate::config::Config;
use crate::data::{CiStatus, DisplayBlock, PullRequest};
use crate::error::Result;
use crate::icons;
use crate::services::StatusResolver;
use crate::utils::DateWindow;

/// Titles longer than this are cut down.
pub const TITLE_MAX_LENGTH: usize = 43;
const TRUNCATED_LENGTH: usize = TITLE_MAX_LENGTH - 3;
const TRUNCATION_MARKER: &str = "..";

/// Substring that flags a label as a migration/environment change.
pub const MIGRATION_LABEL: &str = "migration";

/// Non-draft PRs created or touched inside the window.
pub fn is_reviewable(pr: &PullRequest, window: &DateWindow) -> bool {
    !pr.draft && (window.is_recent(&pr.created_at) || window.is_recent(&pr.updated_at))
}

/// Uppercase the title and truncate it to fit the Slack line.
pub fn display_title(title: &str) -> String {
    truncate_title(&title.to_uppercase())
}

pub fn truncate_title(title: &str) -> String {
    if title.chars().count() > TITLE_MAX_LENGTH {
        let mut short: String = title.chars().take(TRUNCATED_LENGTH).collect();
        short.push_str(TRUNCATION_MARKER);
        short
    } else {
        title.to_string()
    }
}

pub fn has_migration_label(pr: &PullRequest) -> bool {
    pr.has_label_containing(MIGRATION_LABEL)
}

pub fn button_text(ci_status: CiStatus, migration: bool) -> String {
    if migration {
        format!(
            "CI: {} | MI/ENV: {}",
            ci_status.glyph(),
            icons::MIGRATION_WARNING
        )
    } else {
        format!("CI: {}", ci_status.glyph())
    }
}

/// Build one block per reviewable PR, keeping the fetched order.
///
/// CI status is only looked up for PRs that pass the filter, and the first
/// failed lookup aborts the whole batch.
pub async fn build_display_blocks(
    prs: &[PullRequest],
    resolver: &dyn StatusResolver,
    config: &Config,
    window: &DateWindow,
) -> Result<Vec<DisplayBlock>> {
    let mut blocks = Vec::new();

    for pr in prs {
        if !is_reviewable(pr, window) {
            debug!("skipping #{} (draft={})", pr.number, pr.draft);
            continue;
        }

        let ci_status = resolver.resolve(pr.head_sha()).await?;

        blocks.push(DisplayBlock {
            number: pr.number,
            url: config.pull_request_url(pr.number),
            title: display_title(&pr.title),
            author: pr.author().to_string(),
            button_text: button_text(ci_status, has_migration_label(pr)),
        });
    }

    Ok(blocks)
}
