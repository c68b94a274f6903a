//! Shared domain models.

mod game;
mod play;
mod player;

pub use game::{Difficulty, Game, GameCreate, GamePatch, Genre};
pub use play::Play;
pub use player::{Player, Team};
