//! Configuration management for the ShoreSquad service
//!
//! Handles loading configuration from an optional TOML file and
//! `SHORESQUAD_*` environment variables, and validates all settings.

use crate::ShoreSquadError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the ShoreSquad service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoreSquadConfig {
    /// Weather feed configuration
    #[serde(default)]
    pub weather: WeatherConfig,
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Weather feed configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Current air-temperature feed URL
    #[serde(default = "default_current_endpoint")]
    pub current_endpoint: String,
    /// Multi-day forecast feed URL
    #[serde(default = "default_forecast_endpoint")]
    pub forecast_endpoint: String,
    /// Request timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_seconds: u32,
}

/// HTTP server configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to listen on
    #[serde(default = "default_server_port")]
    pub port: u16,
    /// Directory the static frontend is served from
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or compact)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_current_endpoint() -> String {
    "https://api.data.gov.sg/v1/environment/air-temperature".to_string()
}

fn default_forecast_endpoint() -> String {
    "https://api.data.gov.sg/v1/environment/4-day-weather-forecast".to_string()
}

fn default_weather_timeout() -> u32 {
    10
}

fn default_server_port() -> u16 {
    8080
}

fn default_static_dir() -> String {
    "site".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            current_endpoint: default_current_endpoint(),
            forecast_endpoint: default_forecast_endpoint(),
            timeout_seconds: default_weather_timeout(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_server_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for ShoreSquadConfig {
    fn default() -> Self {
        Self {
            weather: WeatherConfig::default(),
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ShoreSquadConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| PathBuf::from("shoresquad.toml"));

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment variable overrides with SHORESQUAD_ prefix
        builder = builder.add_source(
            Environment::with_prefix("SHORESQUAD")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: ShoreSquadConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_endpoints()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate weather feed URLs
    fn validate_endpoints(&self) -> Result<()> {
        for endpoint in [
            &self.weather.current_endpoint,
            &self.weather.forecast_endpoint,
        ] {
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(ShoreSquadError::config(format!(
                    "Weather feed URL must be a valid HTTP or HTTPS URL, got '{endpoint}'"
                ))
                .into());
            }
        }

        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.weather.timeout_seconds == 0 {
            return Err(
                ShoreSquadError::config("Weather feed timeout must be at least 1 second").into(),
            );
        }

        if self.weather.timeout_seconds > 300 {
            return Err(
                ShoreSquadError::config("Weather feed timeout cannot exceed 300 seconds").into(),
            );
        }

        if self.server.port == 0 {
            return Err(ShoreSquadError::config("Server port cannot be 0").into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(ShoreSquadError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "compact"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(ShoreSquadError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if self.server.static_dir.is_empty() {
            return Err(ShoreSquadError::config("Static directory cannot be empty").into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ShoreSquadConfig::default();
        assert_eq!(
            config.weather.current_endpoint,
            "https://api.data.gov.sg/v1/environment/air-temperature"
        );
        assert_eq!(
            config.weather.forecast_endpoint,
            "https://api.data.gov.sg/v1/environment/4-day-weather-forecast"
        );
        assert_eq!(config.weather.timeout_seconds, 10);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = ShoreSquadConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_endpoint() {
        let mut config = ShoreSquadConfig::default();
        config.weather.forecast_endpoint = "ftp://example.com/feed".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("valid HTTP or HTTPS URL")
        );
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = ShoreSquadConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = ShoreSquadConfig::default();
        config.weather.timeout_seconds = 500;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("cannot exceed"));

        config.weather.timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = ShoreSquadConfig::load_from_path(Some(PathBuf::from(
            "definitely-missing-config.toml",
        )))
        .expect("defaults should load");
        assert_eq!(config.server.port, ShoreSquadConfig::default().server.port);
    }
}
