//! NEA open-data weather client and payload normalization
//!
//! Fetches the current air-temperature feed and the multi-day forecast
//! feed concurrently and reduces both to the fixed-shape
//! [`WeatherSnapshot`] the advisory engine consumes. The fetch boundary
//! is total: any transport failure or malformed payload collapses into
//! the synthetic fallback snapshot instead of an error.

use crate::config::WeatherConfig;
use crate::fallback;
use crate::models::weather::{
    CurrentConditions, DailyForecast, MAX_FORECAST_DAYS, TemperatureBand, WeatherSnapshot,
};
use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Station identifiers closest to the cleanup area, in preference order
pub const PREFERRED_STATIONS: [&str; 3] = ["S24", "S06", "S43"];

/// Observation area attached to every current-conditions record
pub const OBSERVATION_LOCATION: &str = "Pasir Ris Area";

/// Client for the two NEA weather feeds
pub struct WeatherService {
    client: Client,
    config: WeatherConfig,
}

impl WeatherService {
    /// Create a new weather service client
    pub fn new(config: WeatherConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_seconds.into());

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("ShoreSquad/", env!("CARGO_PKG_VERSION")))
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    /// Fetch both feeds and reduce them to a usable snapshot.
    ///
    /// Never fails: the two requests are issued concurrently and joined,
    /// and any failure on either side yields the fallback snapshot.
    #[instrument(skip(self))]
    pub async fn fetch_snapshot(&self) -> WeatherSnapshot {
        match self.try_fetch().await {
            Ok(snapshot) => {
                info!(
                    "Weather snapshot ready: {}°C, {} forecast days",
                    snapshot.current.temperature,
                    snapshot.forecast.len()
                );
                snapshot
            }
            Err(err) => {
                warn!("Weather feeds unavailable, serving fallback data: {err:#}");
                fallback::snapshot()
            }
        }
    }

    async fn try_fetch(&self) -> Result<WeatherSnapshot> {
        let (current, forecast) = tokio::join!(self.fetch_current(), self.fetch_forecast());

        Ok(WeatherSnapshot {
            current: normalize_current(&current?),
            forecast: normalize_forecast(&forecast?),
        })
    }

    async fn fetch_current(&self) -> Result<nea::CurrentResponse> {
        debug!(
            "Requesting current air temperature from {}",
            self.config.current_endpoint
        );

        let response = self
            .client
            .get(&self.config.current_endpoint)
            .send()
            .await?
            .error_for_status()?;

        response
            .json()
            .await
            .with_context(|| "Failed to parse air-temperature response")
    }

    async fn fetch_forecast(&self) -> Result<nea::ForecastResponse> {
        debug!(
            "Requesting multi-day forecast from {}",
            self.config.forecast_endpoint
        );

        let response = self
            .client
            .get(&self.config.forecast_endpoint)
            .send()
            .await?
            .error_for_status()?;

        response
            .json()
            .await
            .with_context(|| "Failed to parse forecast response")
    }
}

/// Reduce a raw air-temperature payload to one rounded station reading.
///
/// Prefers the stations in [`PREFERRED_STATIONS`] order and falls back to
/// the first reading in the payload. Total over malformed input: an empty
/// feed yields the fallback current record.
#[must_use]
pub fn normalize_current(raw: &nea::CurrentResponse) -> CurrentConditions {
    let Some(latest) = raw.items.first() else {
        return fallback::current_conditions();
    };

    let preferred = PREFERRED_STATIONS
        .iter()
        .find_map(|id| latest.readings.iter().find(|r| r.station_id == *id));

    let Some(reading) = preferred.or_else(|| latest.readings.first()) else {
        return fallback::current_conditions();
    };

    CurrentConditions {
        temperature: reading.value.round() as i32,
        condition: TemperatureBand::classify(reading.value),
        location: OBSERVATION_LOCATION.to_string(),
        timestamp: latest.timestamp,
    }
}

/// Reduce a raw forecast payload to at most [`MAX_FORECAST_DAYS`] daily
/// entries in source order, lower-casing the condition text.
///
/// Total over malformed input: an empty feed yields the fallback forecast
/// (always exactly 7 entries).
#[must_use]
pub fn normalize_forecast(raw: &nea::ForecastResponse) -> Vec<DailyForecast> {
    let entries = raw
        .items
        .first()
        .map(|item| item.forecasts.as_slice())
        .unwrap_or_default();

    if entries.is_empty() {
        return fallback::forecast();
    }

    entries
        .iter()
        .take(MAX_FORECAST_DAYS)
        .map(|entry| DailyForecast {
            date: entry.date,
            condition: entry.forecast.to_lowercase(),
            temp_high: entry.temperature.high.round() as i32,
            temp_low: entry.temperature.low.round() as i32,
            humidity: entry.relative_humidity.round().clamp(0.0, 100.0) as u8,
            wind_direction: entry.wind.direction.clone(),
            wind_speed_kmh: entry.wind.speed,
        })
        .collect()
}

/// Raw payload types for the NEA realtime endpoints
pub mod nea {
    use chrono::{DateTime, FixedOffset, NaiveDate};
    use serde::Deserialize;

    /// Current air-temperature feed: station readings grouped by
    /// observation timestamp
    #[derive(Debug, Deserialize)]
    pub struct CurrentResponse {
        #[serde(default)]
        pub items: Vec<CurrentItem>,
    }

    #[derive(Debug, Deserialize)]
    pub struct CurrentItem {
        pub timestamp: DateTime<FixedOffset>,
        #[serde(default)]
        pub readings: Vec<StationReading>,
    }

    #[derive(Debug, Deserialize)]
    pub struct StationReading {
        pub station_id: String,
        pub value: f64,
    }

    /// Multi-day forecast feed: one or more forecast issues, each with an
    /// ordered sequence of daily entries
    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        #[serde(default)]
        pub items: Vec<ForecastItem>,
    }

    #[derive(Debug, Deserialize)]
    pub struct ForecastItem {
        #[serde(default)]
        pub forecasts: Vec<DailyEntry>,
    }

    #[derive(Debug, Deserialize)]
    pub struct DailyEntry {
        pub date: NaiveDate,
        pub forecast: String,
        pub temperature: TemperatureRange,
        pub relative_humidity: f64,
        pub wind: Wind,
    }

    #[derive(Debug, Deserialize)]
    pub struct TemperatureRange {
        pub high: f64,
        pub low: f64,
    }

    #[derive(Debug, Deserialize)]
    pub struct Wind {
        pub direction: String,
        pub speed: f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::weather::TemperatureBand;

    fn current_payload(json: &str) -> nea::CurrentResponse {
        serde_json::from_str(json).expect("valid test payload")
    }

    fn forecast_payload(json: &str) -> nea::ForecastResponse {
        serde_json::from_str(json).expect("valid test payload")
    }

    #[test]
    fn test_normalize_current_prefers_listed_stations() {
        let raw = current_payload(
            r#"{
                "items": [{
                    "timestamp": "2026-08-07T09:00:00+08:00",
                    "readings": [
                        {"station_id": "S99", "value": 35.1},
                        {"station_id": "S06", "value": 30.6},
                        {"station_id": "S24", "value": 29.4}
                    ]
                }]
            }"#,
        );

        let current = normalize_current(&raw);
        assert_eq!(current.temperature, 29);
        assert_eq!(current.condition, TemperatureBand::Warm);
        assert_eq!(current.location, OBSERVATION_LOCATION);
    }

    #[test]
    fn test_normalize_current_falls_back_to_first_reading() {
        let raw = current_payload(
            r#"{
                "items": [{
                    "timestamp": "2026-08-07T09:00:00+08:00",
                    "readings": [
                        {"station_id": "S99", "value": 26.2},
                        {"station_id": "S50", "value": 31.0}
                    ]
                }]
            }"#,
        );

        let current = normalize_current(&raw);
        assert_eq!(current.temperature, 26);
        assert_eq!(current.condition, TemperatureBand::Pleasant);
    }

    #[test]
    fn test_normalize_current_empty_payload_yields_fallback_shape() {
        let raw = current_payload(r#"{"items": []}"#);
        let current = normalize_current(&raw);

        assert_eq!(current.location, OBSERVATION_LOCATION);
        assert_eq!(current.condition, TemperatureBand::Pleasant);

        let raw = current_payload(
            r#"{"items": [{"timestamp": "2026-08-07T09:00:00+08:00", "readings": []}]}"#,
        );
        let current = normalize_current(&raw);
        assert_eq!(current.location, OBSERVATION_LOCATION);
    }

    #[test]
    fn test_normalize_current_missing_items_field_yields_fallback_shape() {
        let raw = current_payload(r#"{}"#);
        let current = normalize_current(&raw);
        assert_eq!(current.location, OBSERVATION_LOCATION);
    }

    #[test]
    fn test_normalize_forecast_lowercases_and_copies_fields() {
        let raw = forecast_payload(
            r#"{
                "items": [{
                    "forecasts": [{
                        "date": "2026-08-07",
                        "forecast": "Partly Cloudy",
                        "temperature": {"high": 31.4, "low": 25.6},
                        "relative_humidity": 72.3,
                        "wind": {"direction": "NE", "speed": 14.0}
                    }]
                }]
            }"#,
        );

        let forecast = normalize_forecast(&raw);
        assert_eq!(forecast.len(), 1);
        assert_eq!(forecast[0].condition, "partly cloudy");
        assert_eq!(forecast[0].temp_high, 31);
        assert_eq!(forecast[0].temp_low, 26);
        assert_eq!(forecast[0].humidity, 72);
        assert_eq!(forecast[0].wind_direction, "NE");
        assert_eq!(forecast[0].wind_speed_kmh, 14.0);
    }

    #[test]
    fn test_normalize_forecast_truncates_to_seven_days() {
        let entry = r#"{
            "date": "2026-08-07",
            "forecast": "Sunny",
            "temperature": {"high": 31.0, "low": 25.0},
            "relative_humidity": 70.0,
            "wind": {"direction": "NE", "speed": 12.0}
        }"#;
        let entries = vec![entry; 10].join(",");
        let raw = forecast_payload(&format!(r#"{{"items": [{{"forecasts": [{entries}]}}]}}"#));

        let forecast = normalize_forecast(&raw);
        assert_eq!(forecast.len(), MAX_FORECAST_DAYS);
    }

    #[test]
    fn test_normalize_forecast_empty_payload_yields_seven_fallback_days() {
        for json in [r#"{}"#, r#"{"items": []}"#, r#"{"items": [{"forecasts": []}]}"#] {
            let forecast = normalize_forecast(&forecast_payload(json));
            assert_eq!(forecast.len(), MAX_FORECAST_DAYS);
        }
    }
}
