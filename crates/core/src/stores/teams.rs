use crate::models::Team;

/// Owner of the team list. Teams are seeded at store creation; deleting
/// a player never cascades into the teams referencing them.
#[derive(Clone)]
pub struct TeamsStore {
    teams: Vec<Team>,
}

impl TeamsStore {
    /// Build a store holding the fixture teams.
    pub fn new() -> Self {
        let teams = [
            ("t1", "Team A", ["1", "2", "3"]),
            ("t2", "Team B", ["4", "5", "6"]),
        ]
        .into_iter()
        .map(|(id, name, player_ids)| Team {
            id: id.to_string(),
            name: name.to_string(),
            player_ids: player_ids.into_iter().map(str::to_string).collect(),
            avatar_url: None,
        })
        .collect();
        Self { teams }
    }

    /// Synchronous lookup by id; `None` when absent.
    pub fn get_by_id(&self, id: &str) -> Option<Team> {
        self.teams.iter().find(|team| team.id == id).cloned()
    }

    /// Snapshot of the team list.
    pub fn teams(&self) -> Vec<Team> {
        self.teams.clone()
    }
}

impl Default for TeamsStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn teams_are_seeded_with_member_references() {
        let store = TeamsStore::new();
        assert_eq!(store.teams().len(), 2);
        let team = store.get_by_id("t1").unwrap();
        assert_eq!(team.player_ids, vec!["1", "2", "3"]);
        assert!(store.get_by_id("t9").is_none());
    }
}
