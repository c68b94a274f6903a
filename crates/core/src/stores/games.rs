use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{info, warn};

use crate::{
    error::DataError,
    models::{Game, GameCreate, GamePatch, Genre},
    services::GamesService,
};

/// Owner of the game library state: the games and genres collections,
/// the currently focused game, and the loading/error bookkeeping.
#[derive(Clone)]
pub struct GamesStore {
    service: Arc<dyn GamesService>,
    inner: Arc<RwLock<Inner>>,
}

#[derive(Default)]
struct Inner {
    games: Vec<Game>,
    genres: Vec<Genre>,
    current: Option<Game>,
    is_loading: bool,
    error: Option<String>,
    // Bumped on every fetch_all; completions carrying a stale token do
    // not commit.
    fetch_seq: u64,
}

impl GamesStore {
    /// Build a store over the given backend.
    pub fn new(service: Arc<dyn GamesService>) -> Self {
        Self {
            service,
            inner: Arc::new(RwLock::new(Inner::default())),
        }
    }

    /// Load genres and games concurrently, replacing both collections
    /// only when both calls succeed. On any failure the previous
    /// collections stay untouched and the failure message lands in
    /// [`error`](Self::error). The loading flag is cleared on every exit
    /// path.
    pub async fn fetch_all(&self) {
        let seq = {
            let mut inner = self.inner.write();
            inner.is_loading = true;
            inner.error = None;
            inner.fetch_seq += 1;
            inner.fetch_seq
        };

        let (genres, games) = tokio::join!(self.service.list_genres(), self.service.list_games());

        let mut inner = self.inner.write();
        if inner.fetch_seq != seq {
            // A later fetch_all superseded this one and owns the state
            // (including the loading flag) now.
            return;
        }
        inner.is_loading = false;
        match (genres, games) {
            (Ok(genres), Ok(games)) => {
                info!(games = games.len(), genres = genres.len(), "library loaded");
                inner.genres = genres;
                inner.games = games;
            }
            (Err(err), _) | (_, Err(err)) => {
                warn!(%err, "library fetch failed");
                inner.error = Some(err.to_string());
            }
        }
    }

    /// Load one game and make it the current one. The loaded game is
    /// appended to the collection only when no entry with its id exists
    /// yet; an existing cached copy wins over the fresh fetch.
    pub async fn load_by_id(&self, id: &str) {
        {
            let mut inner = self.inner.write();
            inner.is_loading = true;
            inner.error = None;
        }

        let result = self.service.get_game(id).await;

        let mut inner = self.inner.write();
        inner.is_loading = false;
        match result {
            Ok(game) => {
                if !inner.games.iter().any(|known| known.id == game.id) {
                    inner.games.push(game.clone());
                }
                inner.current = Some(game);
            }
            Err(err) => {
                warn!(%err, id, "game load failed");
                inner.error = Some(err.to_string());
            }
        }
    }

    /// Create a game through the backend and prepend it to the
    /// collection. Failures propagate to the caller; the store's
    /// `error` field is not involved.
    pub async fn create(&self, payload: GameCreate) -> Result<Game, DataError> {
        let created = self.service.create_game(payload).await?;
        info!(id = %created.id, name = %created.info.name, "game created");
        self.inner.write().games.insert(0, created.clone());
        Ok(created)
    }

    /// Merge a patch into the stored game with the given id, replacing
    /// it at the same position. Client-side only: no backend exposes an
    /// update endpoint, so the merge never leaves this process.
    pub fn update(&self, id: &str, patch: &GamePatch) -> Result<Game, DataError> {
        let mut inner = self.inner.write();
        let index = inner
            .games
            .iter()
            .position(|game| game.id == id)
            .ok_or_else(|| DataError::not_found("game", id))?;

        let mut updated = inner.games[index].clone();
        patch.apply_to(&mut updated.info);
        inner.games[index] = updated.clone();
        if inner
            .current
            .as_ref()
            .is_some_and(|current| current.id == id)
        {
            inner.current = Some(updated.clone());
        }
        Ok(updated)
    }

    /// Synchronous lookup in the in-memory collection. Returns `None`
    /// for an unknown id instead of failing; use
    /// [`load_by_id`](Self::load_by_id) to go to the backend.
    pub fn get_by_id(&self, id: &str) -> Option<Game> {
        self.inner
            .read()
            .games
            .iter()
            .find(|game| game.id == id)
            .cloned()
    }

    /// Display name of a genre, falling back to its raw id.
    pub fn genre_name(&self, genre_id: &str) -> String {
        self.inner
            .read()
            .genres
            .iter()
            .find(|genre| genre.id == genre_id)
            .map(|genre| genre.name.clone())
            .unwrap_or_else(|| genre_id.to_string())
    }

    /// Snapshot of the games collection.
    pub fn games(&self) -> Vec<Game> {
        self.inner.read().games.clone()
    }

    /// Snapshot of the genres collection.
    pub fn genres(&self) -> Vec<Genre> {
        self.inner.read().genres.clone()
    }

    /// The currently focused game, if any.
    pub fn current(&self) -> Option<Game> {
        self.inner.read().current.clone()
    }

    /// Whether an asynchronous operation is in flight.
    pub fn is_loading(&self) -> bool {
        self.inner.read().is_loading
    }

    /// Message of the last failed fetch, cleared when a new one starts.
    pub fn error(&self) -> Option<String> {
        self.inner.read().error.clone()
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use parking_lot::Mutex;

    use super::*;
    use crate::models::Difficulty;
    use crate::services::MockGamesService;

    fn payload(name: &str) -> GameCreate {
        GameCreate {
            name: name.to_string(),
            cover_url: None,
            min_age: 8,
            players_min: 2,
            players_max: 4,
            difficulty: Difficulty::Easy,
            rating: 0,
            duration_mins: 30,
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

    /// Backend whose list calls can be made to fail per entity family.
    struct FlakyGames {
        delegate: MockGamesService,
        fail_games: Mutex<bool>,
        fail_genres: Mutex<bool>,
    }

    impl FlakyGames {
        fn new() -> Self {
            Self {
                delegate: MockGamesService::new(),
                fail_games: Mutex::new(false),
                fail_genres: Mutex::new(false),
            }
        }
    }

    #[async_trait]
    impl GamesService for FlakyGames {
        async fn list_games(&self) -> Result<Vec<Game>, DataError> {
            if *self.fail_games.lock() {
                return Err(DataError::network("list_games", "connection refused"));
            }
            self.delegate.list_games().await
        }

        async fn list_genres(&self) -> Result<Vec<Genre>, DataError> {
            if *self.fail_genres.lock() {
                return Err(DataError::network("list_genres", "connection refused"));
            }
            self.delegate.list_genres().await
        }

        async fn get_game(&self, id: &str) -> Result<Game, DataError> {
            self.delegate.get_game(id).await
        }

        async fn create_game(&self, payload: GameCreate) -> Result<Game, DataError> {
            self.delegate.create_game(payload).await
        }
    }

    fn mock_store() -> GamesStore {
        GamesStore::new(Arc::new(MockGamesService::new()))
    }

    #[tokio::test]
    async fn fetch_all_populates_both_collections() {
        let store = mock_store();
        store.fetch_all().await;
        assert_eq!(store.games().len(), 7);
        assert_eq!(store.genres().len(), 4);
        assert_eq!(store.error(), None);
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn fetch_all_failure_keeps_prior_state() {
        let service = Arc::new(FlakyGames::new());
        let store = GamesStore::new(Arc::clone(&service) as Arc<dyn GamesService>);

        store.fetch_all().await;
        let games_before = store.games();
        let genres_before = store.genres();

        *service.fail_games.lock() = true;
        store.fetch_all().await;

        assert_eq!(store.games(), games_before);
        assert_eq!(store.genres(), genres_before);
        let message = store.error().expect("error surfaced");
        assert!(!message.is_empty());
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn fetch_all_is_all_or_nothing() {
        // One half succeeding must not be applied when the other fails.
        let service = Arc::new(FlakyGames::new());
        let store = GamesStore::new(Arc::clone(&service) as Arc<dyn GamesService>);

        *service.fail_genres.lock() = true;
        store.fetch_all().await;

        assert!(store.games().is_empty());
        assert!(store.genres().is_empty());
        assert!(store.error().is_some());
    }

    #[tokio::test]
    async fn fetch_all_clears_previous_error() {
        let service = Arc::new(FlakyGames::new());
        let store = GamesStore::new(Arc::clone(&service) as Arc<dyn GamesService>);

        *service.fail_games.lock() = true;
        store.fetch_all().await;
        assert!(store.error().is_some());

        *service.fail_games.lock() = false;
        store.fetch_all().await;
        assert_eq!(store.error(), None);
        assert_eq!(store.games().len(), 7);
    }

    #[tokio::test]
    async fn load_by_id_does_not_duplicate_cached_entries() {
        let store = mock_store();
        store.fetch_all().await;
        let size_before = store.games().len();

        store.load_by_id("g3").await;
        assert_eq!(store.games().len(), size_before);
        assert_eq!(store.current().map(|game| game.id), Some("g3".to_string()));
    }

    #[tokio::test]
    async fn load_by_id_appends_unknown_entries() {
        let store = mock_store();
        // No fetch_all: the collection starts empty.
        store.load_by_id("g5").await;
        let games = store.games();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].id, "g5");
        assert_eq!(store.current().map(|game| game.id), Some("g5".to_string()));
    }

    #[tokio::test]
    async fn load_by_id_failure_sets_error_and_keeps_current() {
        let store = mock_store();
        store.load_by_id("g1").await;
        store.load_by_id("nope").await;

        assert!(store.error().is_some());
        assert_eq!(store.current().map(|game| game.id), Some("g1".to_string()));
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn create_prepends_the_new_game() {
        let store = mock_store();
        store.fetch_all().await;

        let created = store.create(payload("Azul")).await.unwrap();
        let games = store.games();
        assert_eq!(games[0].id, created.id);
        assert_eq!(games[0].info.name, "Azul");
        assert_eq!(games[0].info.rating, 0);
        assert!(!games[0].info.favorite);
        assert_eq!(games[0].info.last_played_at, None);
    }

    #[tokio::test]
    async fn create_failure_propagates_without_touching_error_field() {
        let store = mock_store();
        store.fetch_all().await;

        let mut bad = payload("Broken");
        bad.rating = 9;
        assert!(store.create(bad).await.is_err());
        assert_eq!(store.error(), None);
        assert_eq!(store.games().len(), 7);
    }

    #[tokio::test]
    async fn update_replaces_in_place_and_refreshes_current() {
        let store = mock_store();
        store.fetch_all().await;
        store.load_by_id("g1").await;

        let index_before = store
            .games()
            .iter()
            .position(|game| game.id == "g1")
            .unwrap();
        assert_eq!(store.get_by_id("g1").unwrap().info.rating, 4);

        let patch = GamePatch {
            rating: Some(5),
            ..GamePatch::default()
        };
        store.update("g1", &patch).unwrap();

        let games = store.games();
        assert_eq!(games[index_before].id, "g1");
        assert_eq!(games[index_before].info.rating, 5);
        assert_eq!(store.current().unwrap().info.rating, 5);
    }

    #[tokio::test]
    async fn update_missing_id_rejects_and_leaves_state() {
        let store = mock_store();
        store.fetch_all().await;
        let before = store.games();

        let patch = GamePatch {
            rating: Some(1),
            ..GamePatch::default()
        };
        let err = store.update("does-not-exist", &patch).unwrap_err();
        assert!(matches!(err, DataError::NotFound { .. }));
        assert_eq!(store.games(), before);
    }

    #[test]
    fn get_by_id_on_empty_store_returns_none() {
        let store = mock_store();
        assert!(store.get_by_id("g1").is_none());
    }

    #[tokio::test]
    async fn genre_name_falls_back_to_the_raw_id() {
        let store = mock_store();
        store.fetch_all().await;
        assert_eq!(store.genre_name("strategy"), "Strategy");
        assert_eq!(store.genre_name("dangling"), "dangling");
    }
}
