//! Best-effort gateway to the two external telemetry providers.
//!
//! Each lookup is a single attempt with a fixed timeout. Transport errors,
//! non-success statuses and malformed bodies are recovered here and
//! surface only as missing fields; the pipeline never aborts because a
//! provider was slow or down.

use crate::config::Config;
use crate::error::DashboardError;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tempo_core::quality::round2;

/// Raw weather fields as returned by the forecast provider. Every field is
/// optional; defaults are applied when the snapshot is assembled.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeatherObservation {
    pub temperature: Option<f64>,
    pub wind_speed: Option<f64>,
    pub humidity: Option<f64>,
}

pub struct ProviderGateway {
    http: Client,
    openaq_url: String,
    open_meteo_url: String,
    station_radius_m: u32,
}

#[derive(Debug, Deserialize)]
struct OpenAqResponse {
    #[serde(default)]
    results: Vec<OpenAqResult>,
}

#[derive(Debug, Deserialize)]
struct OpenAqResult {
    #[serde(default)]
    measurements: Vec<OpenAqMeasurement>,
}

#[derive(Debug, Deserialize)]
struct OpenAqMeasurement {
    parameter: String,
    value: f64,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: Option<CurrentWeather>,
    hourly: Option<HourlyBlock>,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature: Option<f64>,
    windspeed: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct HourlyBlock {
    #[serde(default)]
    relative_humidity_2m: Vec<f64>,
}

impl ProviderGateway {
    pub fn new(config: &Config) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.provider_timeout_s))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            http,
            openaq_url: config.openaq_url.clone(),
            open_meteo_url: config.open_meteo_url.clone(),
            station_radius_m: config.station_radius_m,
        }
    }

    /// Nearest-station PM2.5 measurement, or `None` when the provider
    /// degrades for any reason.
    pub async fn fetch_pm25(&self, lat: f64, lon: f64) -> Option<f64> {
        match self.request_pm25(lat, lon).await {
            Ok(value) => value.map(round2),
            Err(err) => {
                tracing::warn!("PM2.5 lookup degraded: {}", err);
                None
            }
        }
    }

    async fn request_pm25(&self, lat: f64, lon: f64) -> Result<Option<f64>, DashboardError> {
        let response = self
            .http
            .get(&self.openaq_url)
            .query(&[
                ("coordinates", format!("{lat},{lon}")),
                ("radius", self.station_radius_m.to_string()),
                ("limit", "1".to_string()),
            ])
            .send()
            .await
            .map_err(|err| DashboardError::ProviderUnavailable(err.to_string()))?;

        if !response.status().is_success() {
            return Err(DashboardError::ProviderUnavailable(format!(
                "air-quality provider HTTP {}",
                response.status()
            )));
        }

        let payload: OpenAqResponse = response
            .json()
            .await
            .map_err(|err| DashboardError::ProviderUnavailable(err.to_string()))?;

        Ok(payload.results.first().and_then(|result| {
            result
                .measurements
                .iter()
                .find(|m| m.parameter == "pm25")
                .map(|m| m.value)
        }))
    }

    /// Current weather fields, all absent when the provider degrades.
    pub async fn fetch_weather(&self, lat: f64, lon: f64) -> WeatherObservation {
        match self.request_weather(lat, lon).await {
            Ok(observation) => observation,
            Err(err) => {
                tracing::warn!("weather lookup degraded: {}", err);
                WeatherObservation::default()
            }
        }
    }

    async fn request_weather(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<WeatherObservation, DashboardError> {
        let response = self
            .http
            .get(&self.open_meteo_url)
            .query(&[
                ("latitude", lat.to_string()),
                ("longitude", lon.to_string()),
                ("current_weather", "true".to_string()),
                ("hourly", "relative_humidity_2m".to_string()),
            ])
            .send()
            .await
            .map_err(|err| DashboardError::ProviderUnavailable(err.to_string()))?;

        if !response.status().is_success() {
            return Err(DashboardError::ProviderUnavailable(format!(
                "weather provider HTTP {}",
                response.status()
            )));
        }

        let payload: ForecastResponse = response
            .json()
            .await
            .map_err(|err| DashboardError::ProviderUnavailable(err.to_string()))?;

        let current = payload.current_weather.as_ref();
        Ok(WeatherObservation {
            temperature: current.and_then(|c| c.temperature),
            wind_speed: current.and_then(|c| c.windspeed),
            humidity: payload
                .hourly
                .as_ref()
                .and_then(|h| h.relative_humidity_2m.first().copied()),
        })
    }
}
