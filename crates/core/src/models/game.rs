#![allow(missing_docs)]

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// How demanding a game is on a typical table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A game genre. Games reference genres by id; a dangling `genre_id`
/// is tolerated rather than validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: String,
    pub name: String,
}

/// Client-chosen fields of a game; everything except the server-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameCreate {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    pub min_age: u8,
    pub players_min: u8,
    pub players_max: u8,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub rating: u8,
    pub duration_mins: u32,
    pub genre_id: String,
    pub is_one_shot: bool,
    pub is_coop: bool,
    pub is_competitive: bool,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_played_at: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_url: Option<String>,
}

impl GameCreate {
    /// Check the payload invariants enforced at creation time.
    pub fn validate(&self) -> Result<(), DataError> {
        if self.name.trim().is_empty() {
            return Err(DataError::Validation("name must not be empty".to_string()));
        }
        if self.players_min > self.players_max {
            return Err(DataError::Validation(format!(
                "playersMin {} exceeds playersMax {}",
                self.players_min, self.players_max
            )));
        }
        if self.rating > 5 {
            return Err(DataError::Validation(format!(
                "rating {} outside 0..=5",
                self.rating
            )));
        }
        Ok(())
    }
}

/// A game in the library: the create shape plus its identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    #[serde(flatten)]
    pub info: GameCreate,
}

impl Game {
    /// Assemble a game from a server-assigned id and its details.
    pub fn from_parts(id: impl Into<String>, info: GameCreate) -> Self {
        Self {
            id: id.into(),
            info,
        }
    }
}

/// Partial update applied to a game held in the store. Only the fields
/// that are set are merged into the existing entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GamePatch {
    pub name: Option<String>,
    pub cover_url: Option<String>,
    pub min_age: Option<u8>,
    pub players_min: Option<u8>,
    pub players_max: Option<u8>,
    pub difficulty: Option<Difficulty>,
    pub rating: Option<u8>,
    pub duration_mins: Option<u32>,
    pub genre_id: Option<String>,
    pub is_one_shot: Option<bool>,
    pub is_coop: Option<bool>,
    pub is_competitive: Option<bool>,
    pub favorite: Option<bool>,
    pub last_played_at: Option<NaiveDate>,
    pub description: Option<String>,
    pub manual_url: Option<String>,
}

impl GamePatch {
    /// Merge the set fields into `info`, leaving the rest untouched.
    pub fn apply_to(&self, info: &mut GameCreate) {
        if let Some(name) = &self.name {
            info.name = name.clone();
        }
        if let Some(cover_url) = &self.cover_url {
            info.cover_url = Some(cover_url.clone());
        }
        if let Some(min_age) = self.min_age {
            info.min_age = min_age;
        }
        if let Some(players_min) = self.players_min {
            info.players_min = players_min;
        }
        if let Some(players_max) = self.players_max {
            info.players_max = players_max;
        }
        if let Some(difficulty) = self.difficulty {
            info.difficulty = difficulty;
        }
        if let Some(rating) = self.rating {
            info.rating = rating;
        }
        if let Some(duration_mins) = self.duration_mins {
            info.duration_mins = duration_mins;
        }
        if let Some(genre_id) = &self.genre_id {
            info.genre_id = genre_id.clone();
        }
        if let Some(is_one_shot) = self.is_one_shot {
            info.is_one_shot = is_one_shot;
        }
        if let Some(is_coop) = self.is_coop {
            info.is_coop = is_coop;
        }
        if let Some(is_competitive) = self.is_competitive {
            info.is_competitive = is_competitive;
        }
        if let Some(favorite) = self.favorite {
            info.favorite = favorite;
        }
        if let Some(last_played_at) = self.last_played_at {
            info.last_played_at = Some(last_played_at);
        }
        if let Some(description) = &self.description {
            info.description = Some(description.clone());
        }
        if let Some(manual_url) = &self.manual_url {
            info.manual_url = Some(manual_url.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> GameCreate {
        GameCreate {
            name: "Azul".to_string(),
            cover_url: None,
            min_age: 8,
            players_min: 2,
            players_max: 4,
            difficulty: Difficulty::Easy,
            rating: 0,
            duration_mins: 40,
            genre_id: "family".to_string(),
            is_one_shot: true,
            is_coop: false,
            is_competitive: true,
            favorite: false,
            last_played_at: None,
            description: None,
            manual_url: None,
        }
    }

    #[test]
    fn game_serializes_to_wire_shape() {
        let game = Game::from_parts("g1", payload());
        let value = serde_json::to_value(&game).expect("serialize game");
        assert_eq!(value["id"], "g1");
        assert_eq!(value["name"], "Azul");
        assert_eq!(value["minAge"], 8);
        assert_eq!(value["playersMin"], 2);
        assert_eq!(value["difficulty"], "easy");
        assert_eq!(value["genreId"], "family");
        assert!(value.get("coverUrl").is_none());
    }

    #[test]
    fn game_deserializes_from_backend_json() {
        let raw = r#"{
            "id": "g9",
            "name": "Cascadia",
            "coverUrl": "https://example.com/cascadia.jpg",
            "minAge": 10,
            "playersMin": 1,
            "playersMax": 4,
            "difficulty": "medium",
            "rating": 4,
            "durationMins": 45,
            "genreId": "family",
            "isOneShot": true,
            "isCoop": false,
            "isCompetitive": true,
            "favorite": false,
            "lastPlayedAt": "2025-05-30"
        }"#;
        let game: Game = serde_json::from_str(raw).expect("deserialize game");
        assert_eq!(game.id, "g9");
        assert_eq!(game.info.rating, 4);
        assert_eq!(
            game.info.last_played_at,
            NaiveDate::from_ymd_opt(2025, 5, 30)
        );
        assert_eq!(game.info.description, None);
    }

    #[test]
    fn validate_rejects_inverted_player_range() {
        let mut bad = payload();
        bad.players_min = 5;
        bad.players_max = 2;
        let err = bad.validate().unwrap_err();
        assert!(matches!(err, DataError::Validation(_)));
    }

    #[test]
    fn validate_rejects_out_of_range_rating() {
        let mut bad = payload();
        bad.rating = 6;
        assert!(bad.validate().is_err());
    }

    #[test]
    fn patch_merges_only_set_fields() {
        let mut info = payload();
        let patch = GamePatch {
            rating: Some(5),
            favorite: Some(true),
            ..GamePatch::default()
        };
        patch.apply_to(&mut info);
        assert_eq!(info.rating, 5);
        assert!(info.favorite);
        assert_eq!(info.name, "Azul");
        assert_eq!(info.players_max, 4);
    }
}
