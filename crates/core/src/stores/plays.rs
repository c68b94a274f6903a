use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

use crate::{error::DataError, models::Play, services::PlaysService};

/// Owner of the play history.
#[derive(Clone)]
pub struct PlaysStore {
    service: Arc<dyn PlaysService>,
    inner: Arc<RwLock<Vec<Play>>>,
}

impl PlaysStore {
    /// Build a store over the given backend.
    pub fn new(service: Arc<dyn PlaysService>) -> Self {
        Self {
            service,
            inner: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Replace the whole collection from the backend.
    pub async fn fetch_plays(&self) -> Result<(), DataError> {
        let plays = self.service.list_plays().await?;
        info!(plays = plays.len(), "play history loaded");
        *self.inner.write() = plays;
        Ok(())
    }

    /// Synchronous lookup by id; `None` when absent.
    pub fn get_by_id(&self, id: &str) -> Option<Play> {
        self.inner.read().iter().find(|play| play.id == id).cloned()
    }

    /// Snapshot of the play history.
    pub fn plays(&self) -> Vec<Play> {
        self.inner.read().clone()
    }

    /// Plays recorded for one game, newest first.
    pub fn plays_for_game(&self, game_id: &str) -> Vec<Play> {
        let mut plays: Vec<Play> = self
            .inner
            .read()
            .iter()
            .filter(|play| play.game_id == game_id)
            .cloned()
            .collect();
        plays.sort_by(|a, b| b.date.cmp(&a.date));
        plays
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MockPlaysService;

    fn store() -> PlaysStore {
        PlaysStore::new(Arc::new(MockPlaysService::new()))
    }

    #[tokio::test]
    async fn fetch_replaces_the_collection() {
        let store = store();
        assert!(store.plays().is_empty());
        store.fetch_plays().await.unwrap();
        assert_eq!(store.plays().len(), 10);
    }

    #[tokio::test]
    async fn get_by_id_never_fails() {
        let store = store();
        assert!(store.get_by_id("p1").is_none());
        store.fetch_plays().await.unwrap();
        assert_eq!(store.get_by_id("p1").unwrap().game_id, "g1");
        assert!(store.get_by_id("p99").is_none());
    }

    #[tokio::test]
    async fn plays_for_game_sorts_newest_first() {
        let store = store();
        store.fetch_plays().await.unwrap();
        let plays = store.plays_for_game("g1");
        assert_eq!(plays.len(), 3);
        assert!(plays.windows(2).all(|pair| pair[0].date >= pair[1].date));
    }
}
