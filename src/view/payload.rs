use serde::Serialize;

use super::blocks::{Accessory, Block, Text};
use crate::data::DisplayBlock;
use crate::icons;
use crate::utils::DateWindow;

pub const BUTTON_ACTION_ID: &str = "button-action";

/// Body POSTed to the Slack webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Payload {
    pub blocks: Vec<Block>,
}

impl Payload {
    /// Header, date range, legend and divider, followed by one section per PR.
    pub fn reminder(prs: &[DisplayBlock], window: &DateWindow) -> Self {
        let mut blocks = Vec::with_capacity(prs.len() + 4);

        blocks.push(Block::header(header_text(prs.len())));
        blocks.push(Block::section(format!("_Intervalo: {}_", window.caption())));
        blocks.push(Block::section(legend_text()));
        blocks.push(Block::Divider);
        blocks.extend(prs.iter().map(pr_section));

        Self { blocks }
    }

    /// Number of PR sections, i.e. the blocks after the divider.
    pub fn pull_request_count(&self) -> usize {
        self.blocks
            .iter()
            .position(|b| matches!(b, Block::Divider))
            .map(|idx| self.blocks.len() - idx - 1)
            .unwrap_or(0)
    }
}

pub fn header_text(count: usize) -> String {
    format!("Existem {} PRs abertos {}", count, icons::HEADER)
}

fn legend_text() -> String {
    format!(
        "*Labels:* _ Migrations/Envs:_ {} | _Semaphore CI:_ {} or {}",
        icons::MIGRATION_WARNING,
        icons::CI_SUCCESS,
        icons::CI_FAILURE
    )
}

fn pr_section(pr: &DisplayBlock) -> Block {
    Block::Section {
        text: Text::mrkdwn(format!(
            "{} <{}|{}> *_by: {}_*",
            icons::BULLET,
            pr.url,
            pr.title,
            pr.author
        )),
        accessory: Some(Accessory::Button {
            text: Text::plain(pr.button_text.clone()),
            value: format!("click_me_{}", pr.number),
            url: pr.url.clone(),
            action_id: BUTTON_ACTION_ID.to_string(),
        }),
    }
}
