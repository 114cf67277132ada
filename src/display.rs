//! Presentation helpers for the forecast payloads
//!
//! Pure formatting only; the static frontend renders these values as-is.

use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDate};

/// Map a condition label to its display icon token
#[must_use]
pub fn weather_icon(condition: &str) -> &'static str {
    match condition.to_lowercase().as_str() {
        "sunny" | "clear" | "pleasant" => "fas fa-sun",
        "partly cloudy" => "fas fa-cloud-sun",
        "cloudy" | "overcast" => "fas fa-cloud",
        "light rain" | "rain" => "fas fa-cloud-rain",
        "heavy rain" => "fas fa-cloud-showers-heavy",
        "thunderstorm" => "fas fa-bolt",
        "hot" => "fas fa-thermometer-full",
        "warm" => "fas fa-thermometer-half",
        "cool" => "fas fa-thermometer-quarter",
        _ => "fas fa-sun",
    }
}

/// Label a forecast date relative to `today`: "Today", "Tomorrow", or the
/// weekday abbreviation
#[must_use]
pub fn day_label_from(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if date == today + Duration::days(1) {
        "Tomorrow".to_string()
    } else {
        date.format("%a").to_string()
    }
}

/// Label a forecast date against the host's local date
#[must_use]
pub fn day_label(date: NaiveDate) -> String {
    day_label_from(date, Local::now().date_naive())
}

/// Format an observation timestamp as wall-clock time
#[must_use]
pub fn observation_time(timestamp: &DateTime<FixedOffset>) -> String {
    timestamp.format("%H:%M").to_string()
}

/// Capitalize the first letter of a label
#[must_use]
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
