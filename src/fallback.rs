//! Synthetic weather data used when the live feeds are unavailable
//!
//! The generated snapshot is shape-correct and bounded but cosmetically
//! randomized; nothing downstream may depend on exact values.

use crate::models::weather::{
    CurrentConditions, DailyForecast, MAX_FORECAST_DAYS, TemperatureBand, WeatherSnapshot,
};
use crate::weather::OBSERVATION_LOCATION;
use chrono::{Duration, Local};
use rand::RngExt;

/// Condition labels the synthetic forecast draws from
pub const FALLBACK_CONDITIONS: [&str; 4] = ["sunny", "partly cloudy", "cloudy", "light rain"];

/// Wind direction for every synthetic forecast day
pub const FALLBACK_WIND_DIRECTION: &str = "NE";

const FALLBACK_TEMPERATURE_C: i32 = 28;

/// Complete fallback snapshot: fixed current conditions plus a 7-day
/// synthetic forecast
#[must_use]
pub fn snapshot() -> WeatherSnapshot {
    WeatherSnapshot {
        current: current_conditions(),
        forecast: forecast(),
    }
}

/// Fixed current-conditions record
#[must_use]
pub fn current_conditions() -> CurrentConditions {
    CurrentConditions {
        temperature: FALLBACK_TEMPERATURE_C,
        condition: TemperatureBand::Pleasant,
        location: OBSERVATION_LOCATION.to_string(),
        timestamp: Local::now().fixed_offset(),
    }
}

/// Synthetic forecast: exactly [`MAX_FORECAST_DAYS`] entries dated
/// consecutively starting today
#[must_use]
pub fn forecast() -> Vec<DailyForecast> {
    let mut rng = rand::rng();
    let today = Local::now().date_naive();

    (0..MAX_FORECAST_DAYS)
        .map(|offset| DailyForecast {
            date: today + Duration::days(offset as i64),
            condition: FALLBACK_CONDITIONS[rng.random_range(0..FALLBACK_CONDITIONS.len())]
                .to_string(),
            temp_high: rng.random_range(28..=34),
            temp_low: rng.random_range(24..=28),
            humidity: rng.random_range(60..=85),
            wind_direction: FALLBACK_WIND_DIRECTION.to_string(),
            wind_speed_kmh: f64::from(rng.random_range(10i32..=20)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_has_seven_consecutive_days_from_today() {
        let forecast = forecast();
        assert_eq!(forecast.len(), MAX_FORECAST_DAYS);

        let today = Local::now().date_naive();
        for (offset, day) in forecast.iter().enumerate() {
            assert_eq!(day.date, today + Duration::days(offset as i64));
        }
    }

    #[test]
    fn test_forecast_values_stay_in_bounds() {
        for day in forecast() {
            assert!(FALLBACK_CONDITIONS.contains(&day.condition.as_str()));
            assert!((28..=34).contains(&day.temp_high));
            assert!((24..=28).contains(&day.temp_low));
            assert!((60..=85).contains(&day.humidity));
            assert_eq!(day.wind_direction, FALLBACK_WIND_DIRECTION);
            assert!((10.0..=20.0).contains(&day.wind_speed_kmh));
        }
    }

    #[test]
    fn test_current_conditions_shape() {
        let current = current_conditions();
        assert_eq!(current.temperature, 28);
        assert_eq!(current.condition, TemperatureBand::Pleasant);
        assert_eq!(current.location, OBSERVATION_LOCATION);
    }

    #[test]
    fn test_snapshot_always_has_today() {
        let snapshot = snapshot();
        assert!(snapshot.today().is_some());
        assert_eq!(snapshot.forecast.len(), MAX_FORECAST_DAYS);
    }
}
