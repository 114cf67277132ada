use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use shoresquad::api::ApiState;
use shoresquad::config::ShoreSquadConfig;
use shoresquad::models::crew::CrewSummary;
use shoresquad::weather::WeatherService;
use shoresquad::web;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ShoreSquadConfig::load().with_context(|| "Failed to load configuration")?;

    init_tracing(&config);

    info!("ShoreSquad initializing");

    let weather = WeatherService::new(config.weather.clone())
        .with_context(|| "Failed to create weather service")?;
    let state = ApiState {
        weather: Arc::new(weather),
    };

    let crew = CrewSummary::demo();
    info!(
        "Crew features ready: {} members, {} cleanups, {}",
        crew.members.len(),
        crew.total_cleanups,
        crew.impact
    );
    info!("All systems ready");

    web::run(&config.server, state).await
}

fn init_tracing(config: &ShoreSquadConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.logging.format == "compact" {
        builder.compact().init();
    } else {
        builder.init();
    }
}
