//! # Player Registry
//!
//! The canonical, immutable list of every player the league knows about.
//!
//! Players are sorted with [`by_name`] once at construction, so a
//! [`PlayerId`] is simply a position in that list and every derived view
//! comes out in name order without re-sorting.

use crate::ordering::by_name;
use crate::{Player, PlayerId, Team};
use std::collections::BTreeSet;

/// Immutable, name-ordered set of players.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    players: Vec<Player>,
}

impl Registry {
    /// Build a registry from the injected start-up list.
    ///
    /// Identical records collapse into a single entry.
    #[must_use]
    pub fn new(players: impl IntoIterator<Item = Player>) -> Self {
        let mut players: Vec<Player> = players.into_iter().collect();
        players.sort_by(by_name);
        players.dedup();
        Self { players }
    }

    /// Look up a player by handle.
    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.0 as usize)
    }

    /// Find the handle of an identical player record.
    #[must_use]
    pub fn find(&self, player: &Player) -> Option<PlayerId> {
        self.players
            .binary_search_by(|probe| by_name(probe, player))
            .ok()
            .map(|index| PlayerId(index as u32))
    }

    /// Number of registered players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// True when no players are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// All players with their handles, in name order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players
            .iter()
            .enumerate()
            .map(|(index, player)| (PlayerId(index as u32), player))
    }

    /// Players not on any of the given rosters, in name order.
    ///
    /// Computed as the set difference between the registry and the union of
    /// all rosters, so the result never depends on assignment history.
    #[must_use]
    pub fn available<'a>(&self, teams: impl IntoIterator<Item = &'a Team>) -> Vec<PlayerId> {
        let assigned: BTreeSet<PlayerId> = teams
            .into_iter()
            .flat_map(|team| team.roster().iter().copied())
            .collect();

        self.iter()
            .map(|(id, _)| id)
            .filter(|id| !assigned.contains(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TeamId;

    fn sample() -> Registry {
        Registry::new(vec![
            Player::new("Cy", 44, false),
            Player::new("Ada", 42, true),
            Player::new("Bo", 39, false),
        ])
    }

    #[test]
    fn sorted_by_name_on_construction() {
        let registry = sample();
        let names: Vec<_> = registry.iter().map(|(_, p)| p.name.as_str()).collect();
        assert_eq!(names, vec!["Ada", "Bo", "Cy"]);
    }

    #[test]
    fn identical_records_collapse() {
        let registry = Registry::new(vec![
            Player::new("Ada", 42, true),
            Player::new("Ada", 42, true),
            Player::new("Ada", 41, true),
        ]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn find_returns_handle_of_identical_record() {
        let registry = sample();
        assert_eq!(registry.find(&Player::new("Bo", 39, false)), Some(PlayerId(1)));
        assert_eq!(registry.find(&Player::new("Bo", 40, false)), None);
    }

    #[test]
    fn available_excludes_rostered_players() {
        let registry = sample();
        let mut team = Team::new(TeamId(0), "Sharks", "Jo");
        team.add_player(PlayerId(1));

        let available = registry.available([&team]);
        assert_eq!(available, vec![PlayerId(0), PlayerId(2)]);
    }

    #[test]
    fn available_order_ignores_assignment_history() {
        let registry = sample();
        let mut team = Team::new(TeamId(0), "Sharks", "Jo");
        team.add_player(PlayerId(2));
        team.add_player(PlayerId(0));
        assert!(team.remove_player(PlayerId(2)).is_ok());
        assert!(team.remove_player(PlayerId(0)).is_ok());

        assert_eq!(
            registry.available([&team]),
            vec![PlayerId(0), PlayerId(1), PlayerId(2)]
        );
    }

    #[test]
    fn empty_registry() {
        let registry = Registry::default();
        assert!(registry.is_empty());
        assert!(registry.available(std::iter::empty()).is_empty());
        assert!(registry.get(PlayerId(0)).is_none());
    }
}
