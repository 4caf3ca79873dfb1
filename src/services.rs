pub mod github;
pub mod http;
pub mod slack;
pub mod status;

pub use github::GitHubClient;
pub use http::create_client;
pub use slack::SlackNotifier;
pub use status::StatusResolver;
