//! Interpreting the presence API's reply.
//!
//! Discord does not give a structured result for a settings update, so the
//! outcome is judged purely by the shape of the returned JSON.

use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum PublishOutcome {
    /// The reply echoed the user settings (it carries a `locale`).
    Updated,
    /// The token was rejected.
    InvalidToken,
    /// Any other `message` the API sent back.
    Rejected(String),
    /// Neither `locale` nor `message`; keeps the whole reply for the log.
    Unrecognized(Value),
}

impl PublishOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, PublishOutcome::Updated)
    }
}

impl fmt::Display for PublishOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublishOutcome::Updated => f.write_str("Successfully updated custom status."),
            PublishOutcome::InvalidToken => {
                f.write_str("Seems like your Discord personal access token is invalid...")
            }
            PublishOutcome::Rejected(message) => {
                write!(f, "Something happened. Message is the following: {message}")
            }
            PublishOutcome::Unrecognized(raw) => {
                write!(f, "Something happened. Here is the Discord API response: {raw}")
            }
        }
    }
}

pub fn classify(response: &Value) -> PublishOutcome {
    if response.get("locale").is_some() {
        return PublishOutcome::Updated;
    }

    match response.get("message") {
        Some(Value::String(message)) if message == "Unauthorized" => PublishOutcome::InvalidToken,
        Some(Value::String(message)) => PublishOutcome::Rejected(message.clone()),
        Some(other) => PublishOutcome::Rejected(other.to_string()),
        None => PublishOutcome::Unrecognized(response.clone()),
    }
}
