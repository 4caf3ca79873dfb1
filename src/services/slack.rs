use log::{debug, info};

use super::http::{create_client, ensure_ok};
use crate::config::Config;
use crate::error::{Error, RequestError, Result};
use crate::view::Payload;

/// Posts the reminder to the Slack incoming webhook.
pub struct SlackNotifier {
    http: reqwest::Client,
    webhook_url: String,
}

impl SlackNotifier {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self::with_http(create_client(&config.token)?, config))
    }

    pub fn with_http(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            webhook_url: config.webhook_url.clone(),
        }
    }

    pub async fn send(&self, payload: &Payload) -> Result<()> {
        debug!("POST Slack webhook with {} blocks", payload.blocks.len());

        let response = self
            .http
            .post(&self.webhook_url)
            .json(payload)
            .send()
            .await
            .map_err(|e| Error::SendNotification(RequestError::Transport(e)))?;
        ensure_ok(&response).map_err(Error::SendNotification)?;

        info!(
            "sent Slack reminder for {} pull requests",
            payload.pull_request_count()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::DateWindow;
    use chrono::NaiveDate;
    use httpmock::prelude::*;

    fn config_for(server: &MockServer) -> Config {
        Config {
            token: "test-token".to_string(),
            webhook_url: server.url("/services/T000/B000/XXXX"),
            pulls_url: server.url("/pulls"),
            status_url_template: server.url("/commits/"),
            pull_request_url_template: "https://github.com/acme/app/pull/".to_string(),
        }
    }

    fn empty_payload() -> Payload {
        let today = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        Payload::reminder(&[], &DateWindow::ending(today))
    }

    #[tokio::test]
    async fn posts_json_payload_with_auth_headers() {
        let server = MockServer::start_async().await;
        let payload = empty_payload();
        let hook = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/services/T000/B000/XXXX")
                    .header("Authorization", "Bearer test-token")
                    .header("User-Agent", "SmartSystem")
                    .json_body(serde_json::to_value(&payload).unwrap());
                then.status(200).body("ok");
            })
            .await;

        let notifier = SlackNotifier::new(&config_for(&server)).unwrap();
        notifier.send(&payload).await.unwrap();

        hook.assert_async().await;
    }

    #[tokio::test]
    async fn non_200_is_an_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/services/T000/B000/XXXX");
                then.status(400).body("invalid_blocks");
            })
            .await;

        let notifier = SlackNotifier::new(&config_for(&server)).unwrap();
        let err = notifier.send(&empty_payload()).await.unwrap_err();

        assert!(matches!(
            err,
            Error::SendNotification(RequestError::Status(s)) if s.as_u16() == 400
        ));
    }
}
