//! In-memory service variants pre-seeded with fixture data.
//!
//! Both services hand out deep copies of their seed rows, so callers can
//! never reach the internal state through a returned reference.

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::Mutex;

use crate::{
    error::DataError,
    models::{Difficulty, Game, GameCreate, Genre, Play},
};

use super::{GamesService, PlaysService};

/// Cover substituted for freshly created games.
const NEW_GAME_COVER: &str = "https://picsum.photos/seed/new/400/280";

fn day(year: i32, month: u32, dom: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, dom).expect("valid fixture date")
}

/// Seeded stand-in for the games backend.
pub struct MockGamesService {
    inner: Mutex<MockGamesInner>,
}

struct MockGamesInner {
    genres: Vec<Genre>,
    games: Vec<Game>,
    // Monotonic id counter, seeded past the fixtures so issued ids never
    // collide with them or with each other.
    next_id: u32,
}

impl MockGamesService {
    /// Build a service holding the standard seven-game library.
    pub fn new() -> Self {
        let games = seed_games();
        let next_id = games.len() as u32;
        Self {
            inner: Mutex::new(MockGamesInner {
                genres: seed_genres(),
                games,
                next_id,
            }),
        }
    }
}

impl Default for MockGamesService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GamesService for MockGamesService {
    async fn list_games(&self) -> Result<Vec<Game>, DataError> {
        Ok(self.inner.lock().games.clone())
    }

    async fn list_genres(&self) -> Result<Vec<Genre>, DataError> {
        Ok(self.inner.lock().genres.clone())
    }

    async fn get_game(&self, id: &str) -> Result<Game, DataError> {
        self.inner
            .lock()
            .games
            .iter()
            .find(|game| game.id == id)
            .cloned()
            .ok_or_else(|| DataError::not_found("game", id))
    }

    async fn create_game(&self, payload: GameCreate) -> Result<Game, DataError> {
        payload.validate()?;
        let mut inner = self.inner.lock();
        inner.next_id += 1;
        let id = format!("g{}", inner.next_id);

        let mut info = payload;
        info.rating = 0;
        info.favorite = false;
        info.last_played_at = None;
        info.cover_url = Some(NEW_GAME_COVER.to_string());

        let game = Game::from_parts(id, info);
        inner.games.insert(0, game.clone());
        Ok(game)
    }
}

/// Seeded stand-in for the plays backend.
pub struct MockPlaysService {
    plays: Vec<Play>,
}

impl MockPlaysService {
    /// Build a service holding the standard play history.
    pub fn new() -> Self {
        Self {
            plays: seed_plays(),
        }
    }
}

impl Default for MockPlaysService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlaysService for MockPlaysService {
    async fn list_plays(&self) -> Result<Vec<Play>, DataError> {
        Ok(self.plays.clone())
    }
}

fn seed_genres() -> Vec<Genre> {
    [
        ("party", "Party"),
        ("strategy", "Strategy"),
        ("family", "Family"),
        ("thematic", "Thematic"),
    ]
    .into_iter()
    .map(|(id, name)| Genre {
        id: id.to_string(),
        name: name.to_string(),
    })
    .collect()
}

fn seed_games() -> Vec<Game> {
    vec![
        Game::from_parts(
            "g1",
            GameCreate {
                name: "Catan".to_string(),
                cover_url: Some("https://picsum.photos/seed/catan/400/280".to_string()),
                min_age: 10,
                players_min: 3,
                players_max: 4,
                difficulty: Difficulty::Medium,
                rating: 4,
                duration_mins: 75,
                genre_id: "strategy".to_string(),
                is_one_shot: true,
                is_coop: false,
                is_competitive: true,
                favorite: true,
                last_played_at: Some(day(2025, 6, 15)),
                description: None,
                manual_url: None,
            },
        ),
        Game::from_parts(
            "g2",
            GameCreate {
                name: "Pandemic".to_string(),
                cover_url: Some("https://picsum.photos/seed/pandemic/400/280".to_string()),
                min_age: 8,
                players_min: 2,
                players_max: 4,
                difficulty: Difficulty::Medium,
                rating: 5,
                duration_mins: 60,
                genre_id: "family".to_string(),
                is_one_shot: true,
                is_coop: true,
                is_competitive: false,
                favorite: false,
                last_played_at: Some(day(2025, 7, 8)),
                description: None,
                manual_url: None,
            },
        ),
        Game::from_parts(
            "g3",
            GameCreate {
                name: "The Crew".to_string(),
                cover_url: Some("https://picsum.photos/seed/crew/400/280".to_string()),
                min_age: 10,
                players_min: 3,
                players_max: 5,
                difficulty: Difficulty::Easy,
                rating: 4,
                duration_mins: 20,
                genre_id: "party".to_string(),
                is_one_shot: true,
                is_coop: true,
                is_competitive: false,
                favorite: false,
                last_played_at: Some(day(2025, 8, 2)),
                description: None,
                manual_url: None,
            },
        ),
        Game::from_parts(
            "g4",
            GameCreate {
                name: "Ticket to Ride".to_string(),
                cover_url: Some("https://picsum.photos/seed/ttr/400/280".to_string()),
                min_age: 8,
                players_min: 2,
                players_max: 5,
                difficulty: Difficulty::Easy,
                rating: 4,
                duration_mins: 60,
                genre_id: "family".to_string(),
                is_one_shot: true,
                is_coop: false,
                is_competitive: true,
                favorite: true,
                last_played_at: Some(day(2025, 9, 10)),
                description: None,
                manual_url: None,
            },
        ),
        Game::from_parts(
            "g5",
            GameCreate {
                name: "7 Wonders".to_string(),
                cover_url: Some("https://picsum.photos/seed/7wonders/400/280".to_string()),
                min_age: 10,
                players_min: 2,
                players_max: 7,
                difficulty: Difficulty::Medium,
                rating: 4,
                duration_mins: 30,
                genre_id: "strategy".to_string(),
                is_one_shot: true,
                is_coop: false,
                is_competitive: true,
                favorite: false,
                last_played_at: Some(day(2025, 10, 1)),
                description: None,
                manual_url: None,
            },
        ),
        Game::from_parts(
            "g6",
            GameCreate {
                name: "Codenames".to_string(),
                cover_url: Some("https://picsum.photos/seed/codenames/400/280".to_string()),
                min_age: 14,
                players_min: 2,
                players_max: 8,
                difficulty: Difficulty::Easy,
                rating: 4,
                duration_mins: 15,
                genre_id: "party".to_string(),
                is_one_shot: true,
                is_coop: false,
                is_competitive: true,
                favorite: false,
                last_played_at: Some(day(2025, 10, 22)),
                description: None,
                manual_url: None,
            },
        ),
        Game::from_parts(
            "g7",
            GameCreate {
                name: "Gloomhaven".to_string(),
                cover_url: Some("https://picsum.photos/seed/gloomhaven/400/280".to_string()),
                min_age: 14,
                players_min: 1,
                players_max: 4,
                difficulty: Difficulty::Hard,
                rating: 5,
                duration_mins: 120,
                genre_id: "thematic".to_string(),
                is_one_shot: false,
                is_coop: true,
                is_competitive: false,
                favorite: false,
                last_played_at: Some(day(2025, 11, 5)),
                description: None,
                manual_url: None,
            },
        ),
    ]
}

fn seed_plays() -> Vec<Play> {
    [
        ("p1", "g1", "t1", (2025, 10, 26), 4),
        ("p2", "g2", "t2", (2025, 11, 5), 5),
        ("p3", "g3", "t1", (2025, 8, 2), 4),
        ("p4", "g4", "t2", (2025, 9, 10), 3),
        ("p5", "g1", "t1", (2025, 7, 15), 5),
        ("p6", "g5", "t2", (2025, 10, 1), 4),
        ("p7", "g6", "t1", (2025, 10, 22), 3),
        ("p8", "g7", "t2", (2025, 11, 5), 5),
        ("p9", "g1", "t1", (2025, 6, 15), 4),
        ("p10", "g2", "t2", (2025, 7, 8), 5),
    ]
    .into_iter()
    .map(|(id, game_id, team_id, (y, m, d), rating)| Play {
        id: id.to_string(),
        game_id: game_id.to_string(),
        team_id: team_id.to_string(),
        date: day(y, m, d),
        rating,
    })
    .collect()
}
