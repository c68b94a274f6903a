mod app;

use anyhow::Result;
use std::fs::{self, OpenOptions};

use tracing_subscriber::{prelude::*, EnvFilter};

use meeple_core::{
    config::{self, AppConfig},
    i18n, services,
    stores::{GamesStore, PlayersStore, PlaysStore, TeamsStore},
};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;

    config::ensure_default_config()?;
    let config = AppConfig::load()?;
    if !i18n::set_locale(&config.locale) {
        tracing::warn!(locale = %config.locale, "unsupported locale, keeping default");
    }

    let games = GamesStore::new(services::games_service_from(&config));
    let plays = PlaysStore::new(services::plays_service_from(&config));
    let players = PlayersStore::new();
    let teams = TeamsStore::new();

    let mut app = app::MeepleApp::new(config, games, players, teams, plays);
    app.run().await
}

fn init_logging() -> Result<()> {
    let log_dir = std::env::current_dir()?.join("logs");
    fs::create_dir_all(&log_dir)?;
    let log_path = log_dir.join("meeple.log");

    let env_filter = EnvFilter::from_default_env();

    // Log to a file only; stdout belongs to the alternate screen.
    let file_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .compact()
        .with_writer(move || {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_path)
                .expect("failed to open log file")
        });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    Ok(())
}
