use crate::models::Player;

/// Owner of the player roster. Players are seeded at store creation and
/// never fetched; there is no create or update for them in scope.
#[derive(Clone)]
pub struct PlayersStore {
    players: Vec<Player>,
}

impl PlayersStore {
    /// Build a store holding the fixture roster.
    pub fn new() -> Self {
        let players = ["Alice", "Bob", "Charlie", "David", "Eve", "Frank"]
            .into_iter()
            .enumerate()
            .map(|(index, name)| Player {
                id: (index + 1).to_string(),
                name: name.to_string(),
                avatar_url: None,
            })
            .collect();
        Self { players }
    }

    /// Synchronous lookup by id; `None` when absent.
    pub fn get_by_id(&self, id: &str) -> Option<Player> {
        self.players.iter().find(|player| player.id == id).cloned()
    }

    /// Snapshot of the roster.
    pub fn players(&self) -> Vec<Player> {
        self.players.clone()
    }
}

impl Default for PlayersStore {
    fn default() -> Self {
        Self::new()
    }
}
