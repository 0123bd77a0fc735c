use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{
    config::Config,
    error::{StatusError, truncate_body},
    model::{UnitSystem, WeatherSnapshot},
};

use super::WeatherProvider;

const OPENWEATHER_API_BASE: &str = "https://api.openweathermap.org";
const SERVICE: &str = "OpenWeather";

#[derive(Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    units: UnitSystem,
    base_url: String,
    http: Client,
}

impl std::fmt::Debug for OpenWeatherProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherProvider")
            .field("units", &self.units)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl OpenWeatherProvider {
    pub fn new(api_key: String, units: UnitSystem) -> Self {
        Self::with_base_url(api_key, units, OPENWEATHER_API_BASE)
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.weather_api_key.clone(), config.unit_system)
    }

    /// Point the provider at a different host, e.g. a mock server.
    pub fn with_base_url(api_key: String, units: UnitSystem, base_url: &str) -> Self {
        Self {
            api_key,
            units,
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    #[instrument(skip(self), level = "debug")]
    async fn fetch_current(&self, city: &str) -> Result<WeatherSnapshot, StatusError> {
        let url = format!("{}/data/2.5/weather", self.base_url);
        debug!(%url, units = %self.units, "requesting current weather");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("appid", self.api_key.as_str()),
                ("q", city),
                ("units", self.units.as_query()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        debug!(%status, "OpenWeather responded");

        if !status.is_success() {
            return Err(StatusError::Api {
                service: SERVICE,
                status,
                body: truncate_body(&body),
            });
        }

        parse_current(&body)
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    main: OwMain,
    weather: Vec<OwWeather>,
}

fn parse_current(body: &str) -> Result<WeatherSnapshot, StatusError> {
    let parsed: OwCurrentResponse = serde_json::from_str(body)
        .map_err(|source| StatusError::Decode { service: SERVICE, source })?;

    let description = parsed
        .weather
        .into_iter()
        .next()
        .map(|w| w.description)
        .ok_or(StatusError::NoConditions)?;

    Ok(WeatherSnapshot {
        description,
        temperature: parsed.main.temp,
        feels_like: parsed.main.feels_like,
    })
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, city: &str) -> Result<WeatherSnapshot, StatusError> {
        self.fetch_current(city).await
    }
}
