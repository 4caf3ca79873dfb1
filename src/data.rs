pub mod models;
pub mod types;

pub use models::{DisplayBlock, PullRequest};
pub use types::{CiStatus, CombinedStatus, Head, Label, User};
