pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod icons;
pub mod services;
pub mod utils;
pub mod view;

pub use app::{run, Outcome, Reminder};
pub use config::{Config, Loaded, SkipReason};
pub use data::{CiStatus, DisplayBlock, PullRequest};
pub use error::{Error, RequestError, Result};
pub use services::StatusResolver;
pub use view::Payload;
