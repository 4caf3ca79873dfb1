use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::types::{Head, Label, User};

/// An open pull request as listed by `GET /repos/{owner}/{repo}/pulls`.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub user: User,
    #[serde(default)]
    pub draft: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub head: Head,
    #[serde(default)]
    pub labels: Vec<Label>,
}

impl PullRequest {
    pub fn author(&self) -> &str {
        &self.user.login
    }

    pub fn head_sha(&self) -> &str {
        &self.head.sha
    }

    pub fn has_label_containing(&self, needle: &str) -> bool {
        self.labels.iter().any(|label| label.name.contains(needle))
    }
}

/// One line of the reminder: a qualifying PR with its CI result baked into
/// the button text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayBlock {
    pub number: u64,
    pub url: String,
    pub title: String,
    pub author: String,
    pub button_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rest_payload() {
        let json = r#"{
            "url": "https://api.github.com/repos/acme/app/pulls/7",
            "number": 7,
            "state": "open",
            "title": "Add billing export",
            "user": {"login": "octocat", "id": 1},
            "draft": false,
            "created_at": "2024-03-01T10:15:00Z",
            "updated_at": "2024-03-04T08:00:00Z",
            "head": {"ref": "feature/export", "sha": "6dcb09b5b57875f334f61aebed695e2e4193db5e"},
            "labels": [{"id": 1, "name": "db-migration", "color": "f29513"}]
        }"#;

        let pr: PullRequest = serde_json::from_str(json).unwrap();
        assert_eq!(pr.number, 7);
        assert_eq!(pr.author(), "octocat");
        assert_eq!(pr.head_sha(), "6dcb09b5b57875f334f61aebed695e2e4193db5e");
        assert!(pr.has_label_containing("migration"));
        assert!(!pr.has_label_containing("Migration"));
    }

    #[test]
    fn draft_and_labels_default() {
        let json = r#"{
            "number": 8,
            "title": "t",
            "user": {"login": "u"},
            "created_at": "2024-03-01T10:15:00Z",
            "updated_at": "2024-03-01T10:15:00Z",
            "head": {"sha": "abc"}
        }"#;

        let pr: PullRequest = serde_json::from_str(json).unwrap();
        assert!(!pr.draft);
        assert!(pr.labels.is_empty());
    }
}
