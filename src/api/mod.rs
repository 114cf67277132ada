//! JSON API served to the static frontend

use std::sync::Arc;

use axum::{Router, extract::State, response::Json, routing::get};
use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    advisory::Advisory,
    display,
    models::{
        crew::CrewSummary,
        weather::{CurrentConditions, DailyForecast, WeatherSnapshot},
    },
    weather::WeatherService,
};

/// Shared state handed to every API handler
#[derive(Clone)]
pub struct ApiState {
    pub weather: Arc<WeatherService>,
}

/// Full weather payload: current conditions, forecast and advisory
#[derive(Serialize)]
pub struct ApiWeather {
    pub current: ApiCurrent,
    pub forecast: Vec<ApiForecastDay>,
    pub advisory: Option<Advisory>,
}

/// Current conditions with presentation fields attached
#[derive(Serialize)]
pub struct ApiCurrent {
    pub temperature: i32,
    pub condition: String,
    pub icon: &'static str,
    pub location: String,
    pub updated_at: String,
}

/// One forecast day with presentation fields attached
#[derive(Serialize)]
pub struct ApiForecastDay {
    pub date: NaiveDate,
    pub day: String,
    pub condition: String,
    pub icon: &'static str,
    pub temp_high: i32,
    pub temp_low: i32,
    pub humidity: u8,
    pub wind_direction: String,
    pub wind_speed_kmh: f64,
}

impl From<&CurrentConditions> for ApiCurrent {
    fn from(current: &CurrentConditions) -> Self {
        Self {
            temperature: current.temperature,
            condition: display::capitalize_first(current.condition.label()),
            icon: display::weather_icon(current.condition.label()),
            location: current.location.clone(),
            updated_at: display::observation_time(&current.timestamp),
        }
    }
}

impl From<&DailyForecast> for ApiForecastDay {
    fn from(day: &DailyForecast) -> Self {
        Self {
            date: day.date,
            day: display::day_label(day.date),
            condition: display::capitalize_first(&day.condition),
            icon: display::weather_icon(&day.condition),
            temp_high: day.temp_high,
            temp_low: day.temp_low,
            humidity: day.humidity,
            wind_direction: day.wind_direction.clone(),
            wind_speed_kmh: day.wind_speed_kmh,
        }
    }
}

impl From<&WeatherSnapshot> for ApiWeather {
    fn from(snapshot: &WeatherSnapshot) -> Self {
        Self {
            current: ApiCurrent::from(&snapshot.current),
            forecast: snapshot.forecast.iter().map(ApiForecastDay::from).collect(),
            advisory: Advisory::for_snapshot(snapshot),
        }
    }
}

pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/weather", get(get_weather))
        .route("/weather/forecast", get(get_forecast))
        .route("/crew", get(get_crew))
        .with_state(state)
}

async fn get_weather(State(state): State<ApiState>) -> Json<ApiWeather> {
    let snapshot = state.weather.fetch_snapshot().await;
    Json(ApiWeather::from(&snapshot))
}

async fn get_forecast(State(state): State<ApiState>) -> Json<Vec<ApiForecastDay>> {
    let snapshot = state.weather.fetch_snapshot().await;
    Json(snapshot.forecast.iter().map(ApiForecastDay::from).collect())
}

async fn get_crew() -> Json<CrewSummary> {
    Json(CrewSummary::demo())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisory::AdvisoryRating;
    use crate::fallback;
    use crate::models::weather::TemperatureBand;
    use chrono::Local;

    #[test]
    fn test_api_weather_from_snapshot() {
        let snapshot = WeatherSnapshot {
            current: CurrentConditions {
                temperature: 27,
                condition: TemperatureBand::Pleasant,
                location: "Pasir Ris Area".to_string(),
                timestamp: Local::now().fixed_offset(),
            },
            forecast: vec![DailyForecast {
                date: Local::now().date_naive(),
                condition: "sunny".to_string(),
                temp_high: 31,
                temp_low: 25,
                humidity: 70,
                wind_direction: "NE".to_string(),
                wind_speed_kmh: 12.0,
            }],
        };

        let api = ApiWeather::from(&snapshot);
        assert_eq!(api.current.condition, "Pleasant");
        assert_eq!(api.current.icon, "fas fa-sun");
        assert_eq!(api.forecast.len(), 1);
        assert_eq!(api.forecast[0].day, "Today");
        assert_eq!(api.forecast[0].condition, "Sunny");
        assert_eq!(
            api.advisory.expect("snapshot has a today entry").rating,
            AdvisoryRating::Excellent
        );
    }

    #[test]
    fn test_api_weather_from_fallback_snapshot() {
        let api = ApiWeather::from(&fallback::snapshot());
        assert_eq!(api.forecast.len(), 7);
        assert!(api.advisory.is_some());
    }
}
