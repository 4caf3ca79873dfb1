use serde::Deserialize;

use crate::icons;

// CI Status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CiStatus {
    Success,
    Failure,
}

impl CiStatus {
    /// Map a combined commit status `state`. Only an exact `"success"` passes;
    /// pending, error and missing states all count as failures.
    pub fn from_state(state: Option<&str>) -> Self {
        match state {
            Some("success") => CiStatus::Success,
            _ => CiStatus::Failure,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            CiStatus::Success => icons::CI_SUCCESS,
            CiStatus::Failure => icons::CI_FAILURE,
        }
    }

    pub fn to_str(self) -> &'static str {
        match self {
            CiStatus::Success => "success",
            CiStatus::Failure => "failure",
        }
    }
}

// REST response types

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub login: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Head {
    pub sha: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Label {
    pub name: String,
}

/// Body of `GET /repos/{owner}/{repo}/commits/{ref}/status`
#[derive(Debug, Deserialize)]
pub struct CombinedStatus {
    #[serde(default)]
    pub state: Option<String>,
}

impl CombinedStatus {
    pub fn ci_status(&self) -> CiStatus {
        CiStatus::from_state(self.state.as_deref())
    }
}
