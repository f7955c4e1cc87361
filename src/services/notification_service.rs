use std::time::Duration;

use serde_json::json;
use tracing::debug;

use crate::config::Config;
use crate::error::{Error, Result};

/// Forwards formatted reports to a Telegram channel via the Bot API.
/// When the token or channel is not configured the service degrades to a
/// no-op so local development never requires Telegram credentials.
#[derive(Clone)]
pub struct NotificationService {
    client: reqwest::Client,
    bot_token: Option<String>,
    channel_id: Option<String>,
}

impl NotificationService {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.notify_timeout_secs))
            .build()
            .map_err(|e| Error::Notify(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            bot_token: config.telegram_bot_token.clone(),
            channel_id: config.telegram_channel_id.clone(),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.bot_token.is_some() && self.channel_id.is_some()
    }

    pub async fn send(&self, text: &str) -> Result<()> {
        let (token, channel) = match (&self.bot_token, &self.channel_id) {
            (Some(token), Some(channel)) => (token, channel),
            _ => {
                debug!("Telegram not configured, skipping notification");
                return Ok(());
            }
        };

        let url = format!("https://api.telegram.org/bot{}/sendMessage", token);
        let response = self
            .client
            .post(&url)
            .json(&json!({
                "chat_id": channel,
                "text": text,
                "parse_mode": "Markdown",
                "disable_web_page_preview": true,
            }))
            .send()
            .await
            .map_err(|e| Error::Notify(format!("Telegram request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Notify(format!(
                "Telegram API returned {}: {}",
                status, body
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unconfigured() -> NotificationService {
        let config = Config {
            server_address: "127.0.0.1:0".to_string(),
            database_url: "sqlite::memory:".to_string(),
            telegram_bot_token: None,
            telegram_channel_id: None,
            notify_timeout_secs: 1,
        };
        NotificationService::new(&config).unwrap()
    }

    #[test]
    fn send_without_credentials_is_a_noop() {
        let service = unconfigured();
        assert!(!service.is_configured());
        tokio_test::block_on(async {
            service.send("hello").await.unwrap();
        });
    }
}
