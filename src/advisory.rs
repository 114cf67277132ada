//! Cleanup-suitability advisory engine
//!
//! A fixed four-branch decision table over the current reading and
//! today's forecast. Branch order is contractual: rain first, then the
//! heat/wind caution checks (temperature before wind), then the ideal
//! window, then the catch-all.

use crate::models::weather::{CurrentConditions, DailyForecast, WeatherSnapshot};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Temperature above which cleanup is advised only with caution, °C
pub const CAUTION_TEMPERATURE_C: i32 = 35;
/// Wind speed above which cleanup is advised only with caution, km/h
pub const CAUTION_WIND_KMH: f64 = 25.0;
/// Ideal temperature window for a cleanup, °C (inclusive)
pub const IDEAL_TEMPERATURE_C: RangeInclusive<i32> = 25..=32;
/// Wind ceiling for ideal conditions, km/h (inclusive)
pub const IDEAL_WIND_KMH: f64 = 20.0;

/// Cleanup-suitability tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvisoryRating {
    /// Ideal conditions
    Excellent,
    /// Favorable, default tier
    Good,
    /// Doable with extra precautions
    Caution,
    /// Rain expected, reschedule
    Poor,
}

impl AdvisoryRating {
    /// Display icon token for this tier
    #[must_use]
    pub fn icon(&self) -> &'static str {
        match self {
            AdvisoryRating::Excellent => "fas fa-thumbs-up",
            AdvisoryRating::Good => "fas fa-check-circle",
            AdvisoryRating::Caution => "fas fa-exclamation-triangle",
            AdvisoryRating::Poor => "fas fa-cloud-rain",
        }
    }
}

impl fmt::Display for AdvisoryRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdvisoryRating::Excellent => write!(f, "excellent"),
            AdvisoryRating::Good => write!(f, "good"),
            AdvisoryRating::Caution => write!(f, "caution"),
            AdvisoryRating::Poor => write!(f, "poor"),
        }
    }
}

/// Cleanup recommendation derived from a snapshot; never stored
#[derive(Debug, Clone, Serialize)]
pub struct Advisory {
    /// Suitability tier
    pub rating: AdvisoryRating,
    /// Display icon token
    pub icon: &'static str,
    /// Short headline
    pub title: String,
    /// One-sentence recommendation
    pub message: String,
}

impl Advisory {
    /// Derive the advisory from the current reading and today's forecast.
    /// First matching rule wins; there is no fallthrough after a match.
    #[must_use]
    pub fn evaluate(current: &CurrentConditions, today: &DailyForecast) -> Self {
        let temperature = current.temperature;
        let wind = today.wind_speed_kmh;

        if today.condition.contains("rain") {
            return Self::with_rating(
                AdvisoryRating::Poor,
                "Not Ideal for Cleanup",
                "Rain expected today. Consider rescheduling for better conditions.",
            );
        }

        if temperature > CAUTION_TEMPERATURE_C || wind > CAUTION_WIND_KMH {
            // Temperature takes priority when both thresholds trigger
            let message = if temperature > CAUTION_TEMPERATURE_C {
                "Very hot conditions. Bring extra water and take frequent breaks."
            } else {
                "Strong winds expected. Secure loose items and be extra careful."
            };
            return Self::with_rating(AdvisoryRating::Caution, "Cleanup with Caution", message);
        }

        if IDEAL_TEMPERATURE_C.contains(&temperature) && wind <= IDEAL_WIND_KMH {
            return Self::with_rating(
                AdvisoryRating::Excellent,
                "Perfect Cleanup Weather!",
                "Ideal conditions for beach cleanup. Great temperature and gentle winds.",
            );
        }

        Self::with_rating(
            AdvisoryRating::Good,
            "Good Cleanup Conditions",
            "Weather looks favorable for outdoor activities. Have a great cleanup!",
        )
    }

    /// Evaluate a whole snapshot against its first forecast day
    #[must_use]
    pub fn for_snapshot(snapshot: &WeatherSnapshot) -> Option<Self> {
        snapshot
            .today()
            .map(|today| Self::evaluate(&snapshot.current, today))
    }

    fn with_rating(rating: AdvisoryRating, title: &str, message: &str) -> Self {
        Self {
            rating,
            icon: rating.icon(),
            title: title.to_string(),
            message: message.to_string(),
        }
    }
}
