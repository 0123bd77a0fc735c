use async_trait::async_trait;
use std::fmt::Debug;

use crate::error::StatusError;

pub mod discord;

pub use discord::DiscordPublisher;

/// Destination for the formatted status text.
///
/// Implementations return the service's raw JSON reply; judging whether the
/// update took effect is left to [`crate::outcome::classify`].
#[async_trait]
pub trait StatusPublisher: Send + Sync + Debug {
    async fn publish(&self, text: &str) -> Result<serde_json::Value, StatusError>;
}
