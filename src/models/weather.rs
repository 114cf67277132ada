//! Weather data models and display methods

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of daily forecast entries carried by a snapshot.
/// Index 0 is always today.
pub const MAX_FORECAST_DAYS: usize = 7;

/// Temperature above which conditions read as "hot", in °C (exclusive)
pub const HOT_ABOVE_C: f64 = 32.0;
/// Temperature above which conditions read as "warm", in °C (exclusive)
pub const WARM_ABOVE_C: f64 = 28.0;
/// Temperature above which conditions read as "pleasant", in °C (exclusive)
pub const PLEASANT_ABOVE_C: f64 = 24.0;

/// Qualitative condition label derived from air temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureBand {
    /// Above 32 °C
    Hot,
    /// Above 28 °C
    Warm,
    /// Above 24 °C
    Pleasant,
    /// 24 °C and below
    Cool,
}

impl TemperatureBand {
    /// Classify a temperature reading, checking thresholds in descending
    /// order. First match wins.
    #[must_use]
    pub fn classify(celsius: f64) -> Self {
        match celsius {
            t if t > HOT_ABOVE_C => TemperatureBand::Hot,
            t if t > WARM_ABOVE_C => TemperatureBand::Warm,
            t if t > PLEASANT_ABOVE_C => TemperatureBand::Pleasant,
            _ => TemperatureBand::Cool,
        }
    }

    /// Lower-case label as shown in condition text
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            TemperatureBand::Hot => "hot",
            TemperatureBand::Warm => "warm",
            TemperatureBand::Pleasant => "pleasant",
            TemperatureBand::Cool => "cool",
        }
    }
}

impl fmt::Display for TemperatureBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One current-conditions observation, produced fresh on each fetch
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CurrentConditions {
    /// Air temperature rounded to the nearest degree Celsius
    pub temperature: i32,
    /// Condition band derived from the temperature
    pub condition: TemperatureBand,
    /// Observation area name
    pub location: String,
    /// Observation timestamp as reported by the feed
    pub timestamp: DateTime<FixedOffset>,
}

impl CurrentConditions {
    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{}°C", self.temperature)
    }
}

/// One day of the forecast sequence
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DailyForecast {
    /// Calendar date of this entry
    pub date: NaiveDate,
    /// Condition text from the feed, lower-cased
    pub condition: String,
    /// Daily high in °C
    pub temp_high: i32,
    /// Daily low in °C
    pub temp_low: i32,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
    /// Compass wind direction (N, NE, etc.)
    pub wind_direction: String,
    /// Wind speed in km/h
    pub wind_speed_kmh: f64,
}

impl DailyForecast {
    /// Format the high/low range with units
    #[must_use]
    pub fn format_temperature_range(&self) -> String {
        format!("{}° / {}°", self.temp_high, self.temp_low)
    }

    /// Format wind information
    #[must_use]
    pub fn format_wind(&self) -> String {
        format!("{:.0} km/h {}", self.wind_speed_kmh, self.wind_direction)
    }
}

/// Aggregate passed to the advisory engine: one observation plus the
/// ordered forecast sequence (at most [`MAX_FORECAST_DAYS`] entries)
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WeatherSnapshot {
    /// Latest observed conditions
    pub current: CurrentConditions,
    /// Daily forecasts, index 0 = soonest day
    pub forecast: Vec<DailyForecast>,
}

impl WeatherSnapshot {
    /// Today's forecast entry, the only one the advisory inspects
    #[must_use]
    pub fn today(&self) -> Option<&DailyForecast> {
        self.forecast.first()
    }
}
