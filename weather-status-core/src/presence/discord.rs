use async_trait::async_trait;
use reqwest::{Client, header};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::{config::Config, error::StatusError};

use super::StatusPublisher;

const DISCORD_API_BASE: &str = "https://discordapp.com";
const SERVICE: &str = "Discord";

#[derive(Clone)]
pub struct DiscordPublisher {
    token: String,
    base_url: String,
    http: Client,
}

// Keeps the token out of logs and panic messages.
impl std::fmt::Debug for DiscordPublisher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordPublisher")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Serialize)]
struct CustomStatus<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct SettingsPatch<'a> {
    custom_status: CustomStatus<'a>,
}

impl DiscordPublisher {
    pub fn new(token: String) -> Self {
        Self::with_base_url(token, DISCORD_API_BASE)
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.auth_token.clone())
    }

    /// Point the publisher at a different host, e.g. a mock server.
    pub fn with_base_url(token: String, base_url: &str) -> Self {
        Self {
            token,
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    #[instrument(skip(self), level = "debug")]
    async fn patch_settings(&self, text: &str) -> Result<serde_json::Value, StatusError> {
        let url = format!("{}/api/v6/users/@me/settings", self.base_url);
        let payload = SettingsPatch {
            custom_status: CustomStatus { text },
        };

        let res = self
            .http
            .patch(&url)
            .header(header::AUTHORIZATION, &self.token)
            .json(&payload)
            .send()
            .await?;

        // Error replies (401, 429, ...) still carry a JSON body worth classifying.
        let status = res.status();
        let body = res.text().await?;
        debug!(%status, "Discord responded");

        serde_json::from_str(&body).map_err(|source| StatusError::Decode { service: SERVICE, source })
    }
}

#[async_trait]
impl StatusPublisher for DiscordPublisher {
    async fn publish(&self, text: &str) -> Result<serde_json::Value, StatusError> {
        self.patch_settings(text).await
    }
}
