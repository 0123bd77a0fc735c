use chrono::NaiveTime;
use std::fmt::Display;
use tracing::{debug, info, warn};

use crate::{
    config::Config,
    error::StatusError,
    outcome::{PublishOutcome, classify},
    presence::StatusPublisher,
    provider::WeatherProvider,
    status::{CLOCK_FORMAT, format_status},
};

/// One full update: fetch, format, publish, classify.
///
/// Exactly one weather request and one presence request are made; nothing is
/// retried. `clock` is read once the weather has arrived and stamps the
/// "Last update" field.
pub async fn run_once(
    config: &Config,
    provider: &dyn WeatherProvider,
    publisher: &dyn StatusPublisher,
    clock: &dyn Fn() -> NaiveTime,
) -> Result<PublishOutcome, StatusError> {
    let weather = provider.current_weather(&config.city).await?;
    debug!(?weather, "fetched weather");

    let text = format_status(&config.city, config.unit_system, &weather, clock());
    debug!(%text, "formatted custom status");

    let response = publisher.publish(&text).await?;
    let outcome = classify(&response);

    if outcome.is_success() {
        info!(city = %config.city, "custom status updated");
    } else {
        warn!(%outcome, "custom status was not updated");
    }

    Ok(outcome)
}

/// Prefix a message with the wall-clock stamp, e.g. `[02:05 PM] ...`.
pub fn log_line(now: NaiveTime, message: impl Display) -> String {
    format!("[{}] {message}", now.format(CLOCK_FORMAT))
}
