//! Error type shared by every step of a status update run.

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatusError {
    #[error("Failed to read config file {}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {message}", .path.display())]
    ConfigParse { path: PathBuf, message: String },

    #[error("Config field `{0}` must not be empty")]
    MissingField(&'static str),

    #[error("Could not determine platform config directory")]
    NoConfigDir,

    #[error("Network error")]
    Network(#[source] reqwest::Error),

    #[error("{service} request failed with status {status}: {body}")]
    Api {
        service: &'static str,
        status: StatusCode,
        body: String,
    },

    #[error("Failed to parse {service} response")]
    Decode {
        service: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("OpenWeather response contained no weather conditions")]
    NoConditions,
}

// Request URLs carry the OpenWeather `appid`, so they never reach the message.
impl From<reqwest::Error> for StatusError {
    fn from(err: reqwest::Error) -> Self {
        StatusError::Network(err.without_url())
    }
}

/// Shortens a response body for inclusion in an error message.
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_is_kept() {
        assert_eq!(truncate_body("{\"cod\":401}"), "{\"cod\":401}");
    }

    #[test]
    fn long_body_is_cut_on_char_boundary() {
        let body = "é".repeat(250);
        let out = truncate_body(&body);

        assert!(out.ends_with("..."));
        assert_eq!(out.chars().count(), 203);
    }

    #[test]
    fn api_error_mentions_service_and_status() {
        let err = StatusError::Api {
            service: "OpenWeather",
            status: StatusCode::NOT_FOUND,
            body: "city not found".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("OpenWeather"));
        assert!(msg.contains("404"));
        assert!(msg.contains("city not found"));
    }

    #[test]
    fn decode_error_shows_cause_once() {
        let source = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let cause = source.to_string();
        let err = anyhow::Error::from(StatusError::Decode { service: "Discord", source });

        let rendered = format!("{err:#}");
        assert!(rendered.starts_with("Failed to parse Discord response: "));
        assert_eq!(rendered.matches(cause.as_str()).count(), 1);
    }
}
