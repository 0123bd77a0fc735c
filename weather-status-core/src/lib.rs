//! Core library for the `weather-status` tool.
//!
//! This crate defines:
//! - Configuration loading
//! - The OpenWeather provider and the Discord presence publisher
//! - Status formatting and classification of the publish reply
//! - A one-shot driver tying them together
//!
//! It is used by `weather-status-cli`, but the driver only depends on the
//! [`WeatherProvider`] and [`StatusPublisher`] traits, so other frontends can
//! plug in their own implementations.

pub mod config;
pub mod error;
pub mod model;
pub mod outcome;
pub mod presence;
pub mod provider;
pub mod runner;
pub mod status;

pub use config::Config;
pub use error::StatusError;
pub use model::{UnitSystem, WeatherSnapshot};
pub use outcome::{PublishOutcome, classify};
pub use presence::{DiscordPublisher, StatusPublisher};
pub use provider::{OpenWeatherProvider, WeatherProvider};
pub use runner::{log_line, run_once};
pub use status::format_status;
