use anyhow::Context;
use chrono::{Local, NaiveTime};
use clap::Parser;
use std::{path::PathBuf, process::ExitCode};
use tracing::{debug, error};

use weather_status_core::{
    Config, DiscordPublisher, OpenWeatherProvider, PublishOutcome, StatusError, log_line, run_once,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "weather-status",
    version,
    about = "Put the current weather for your city into your Discord custom status"
)]
pub struct Cli {
    /// Config file to use instead of ./config.json or the platform config dir.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        let path = Config::resolve_path(self.config)?;
        debug!(path = %path.display(), "loading config");

        let config = Config::load(&path)
            .with_context(|| format!("Could not load configuration from {}", path.display()))?;

        let provider = OpenWeatherProvider::from_config(&config);
        let publisher = DiscordPublisher::from_config(&config);

        let clock = || Local::now().time();
        let result = run_once(&config, &provider, &publisher, &clock).await;

        // Stamp with the time the run finished.
        let (line, code) = report(clock(), result);
        println!("{line}");
        Ok(code)
    }
}

/// Turn a run result into the printed outcome line and the exit code.
/// Only an updated status exits with success.
fn report(now: NaiveTime, result: Result<PublishOutcome, StatusError>) -> (String, ExitCode) {
    match result {
        Ok(outcome) => {
            let code = if outcome.is_success() { ExitCode::SUCCESS } else { ExitCode::FAILURE };
            (log_line(now, &outcome), code)
        }
        Err(err) => {
            error!(error = %err, "status update failed");
            let err = anyhow::Error::from(err);
            (log_line(now, format!("Something happened: {err:#}")), ExitCode::FAILURE)
        }
    }
}
