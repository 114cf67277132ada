//! Data models for the ShoreSquad service

pub mod crew;
pub mod weather;

pub use crew::{CrewMember, CrewSummary};
pub use weather::{CurrentConditions, DailyForecast, TemperatureBand, WeatherSnapshot};
