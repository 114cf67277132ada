//! ShoreSquad - beach cleanup crew coordination with live weather advisories
//!
//! The library hosts the weather advisory pipeline as pure, DOM-free
//! functions over plain data records: fetch the two NEA feeds, normalize
//! them into a fixed-shape snapshot, and derive a cleanup-suitability
//! recommendation. The binary wires the pipeline behind a small JSON API
//! next to the static site.

pub mod advisory;
pub mod api;
pub mod config;
pub mod display;
pub mod error;
pub mod fallback;
pub mod models;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use advisory::{Advisory, AdvisoryRating};
pub use config::ShoreSquadConfig;
pub use error::ShoreSquadError;
pub use models::weather::{CurrentConditions, DailyForecast, TemperatureBand, WeatherSnapshot};
pub use weather::WeatherService;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, ShoreSquadError>;
