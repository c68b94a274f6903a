#![warn(clippy::all, missing_docs)]

//! Core data layer for Meeple, a board-game collection client.
//!
//! This crate hosts the domain models, the remote/mock data services,
//! the reactive entity stores, and the configuration, localization,
//! navigation and routing tables shared by the terminal UI and any
//! future frontends.

pub mod config;
pub mod error;
pub mod i18n;
pub mod models;
pub mod navigation;
pub mod routing;
pub mod services;
pub mod stats;
pub mod stores;

pub use config::AppConfig;
pub use error::DataError;
pub use models::{Difficulty, Game, GameCreate, GamePatch, Genre, Play, Player, Team};
pub use stores::{GamesStore, PlayersStore, PlaysStore, TeamsStore};
