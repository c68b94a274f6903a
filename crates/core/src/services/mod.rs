//! Data services bridging the stores to a backend.
//!
//! Each entity family gets a capability trait with two interchangeable
//! variants: a remote one speaking HTTP and an in-memory one holding
//! seeded fixtures. The variant is picked once at startup from the
//! configuration; store logic never branches on which one it got.

pub mod mock;
pub mod remote;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    config::AppConfig,
    error::DataError,
    models::{Game, GameCreate, Genre, Play},
};

pub use mock::{MockGamesService, MockPlaysService};
pub use remote::ApiGamesService;

/// Backend operations for the game library.
#[async_trait]
pub trait GamesService: Send + Sync {
    /// All games in the library.
    async fn list_games(&self) -> Result<Vec<Game>, DataError>;
    /// All known genres.
    async fn list_genres(&self) -> Result<Vec<Genre>, DataError>;
    /// A single game by id, failing with [`DataError::NotFound`] when absent.
    async fn get_game(&self, id: &str) -> Result<Game, DataError>;
    /// Create a game and return it with its server-assigned fields.
    async fn create_game(&self, payload: GameCreate) -> Result<Game, DataError>;
}

/// Backend operations for play-session records.
#[async_trait]
pub trait PlaysService: Send + Sync {
    /// All recorded plays.
    async fn list_plays(&self) -> Result<Vec<Play>, DataError>;
}

/// Pick the games backend once at startup.
pub fn games_service_from(config: &AppConfig) -> Arc<dyn GamesService> {
    if config.use_mock {
        Arc::new(MockGamesService::new())
    } else {
        Arc::new(ApiGamesService::new(config.api_base_url.clone()))
    }
}

/// Pick the plays backend. The backend exposes no plays endpoints, so
/// this is always the seeded variant regardless of the mock flag.
pub fn plays_service_from(_config: &AppConfig) -> Arc<dyn PlaysService> {
    Arc::new(MockPlaysService::new())
}
