//! Aggregation helpers over the play history.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::models::Play;

/// Aggregated play figures for one game.
#[derive(Debug, Clone, PartialEq)]
pub struct GamePlayStats {
    /// Game the figures belong to.
    pub game_id: String,
    /// Number of recorded plays.
    pub play_count: usize,
    /// Mean session rating, when any play exists.
    pub average_rating: Option<f32>,
    /// Most recent session date.
    pub last_played: Option<NaiveDate>,
}

/// Figures for a single game.
pub fn for_game(plays: &[Play], game_id: &str) -> GamePlayStats {
    let mut count = 0usize;
    let mut rating_sum = 0u32;
    let mut last_played: Option<NaiveDate> = None;

    for play in plays.iter().filter(|play| play.game_id == game_id) {
        count += 1;
        rating_sum += u32::from(play.rating);
        if last_played.is_none_or(|known| play.date > known) {
            last_played = Some(play.date);
        }
    }

    GamePlayStats {
        game_id: game_id.to_string(),
        play_count: count,
        average_rating: (count > 0).then(|| rating_sum as f32 / count as f32),
        last_played,
    }
}

/// Figures for every game appearing in the history, most-played first.
pub fn per_game(plays: &[Play]) -> Vec<GamePlayStats> {
    let mut ids: Vec<&str> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    for play in plays {
        if seen.insert(play.game_id.as_str()) {
            ids.push(play.game_id.as_str());
        }
    }

    let mut stats: Vec<GamePlayStats> = ids.iter().map(|id| for_game(plays, id)).collect();
    stats.sort_by(|a, b| b.play_count.cmp(&a.play_count));
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::services::{MockPlaysService, PlaysService};

    async fn history() -> Vec<Play> {
        let service: Arc<dyn PlaysService> = Arc::new(MockPlaysService::new());
        service.list_plays().await.unwrap()
    }

    #[tokio::test]
    async fn for_game_averages_ratings() {
        let plays = history().await;
        let stats = for_game(&plays, "g1");
        assert_eq!(stats.play_count, 3);
        // Ratings 4, 5, 4.
        assert!((stats.average_rating.unwrap() - 13.0 / 3.0).abs() < f32::EPSILON);
        assert_eq!(
            stats.last_played,
            NaiveDate::from_ymd_opt(2025, 10, 26)
        );
    }

    #[tokio::test]
    async fn for_game_with_no_history_is_empty() {
        let plays = history().await;
        let stats = for_game(&plays, "g99");
        assert_eq!(stats.play_count, 0);
        assert_eq!(stats.average_rating, None);
        assert_eq!(stats.last_played, None);
    }

    #[tokio::test]
    async fn per_game_orders_by_play_count() {
        let plays = history().await;
        let stats = per_game(&plays);
        assert_eq!(stats[0].game_id, "g1");
        assert!(stats
            .windows(2)
            .all(|pair| pair[0].play_count >= pair[1].play_count));
        // Every referenced game shows up exactly once.
        assert_eq!(stats.len(), 7);
    }
}
