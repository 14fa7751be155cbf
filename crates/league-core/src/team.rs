//! # Teams
//!
//! A named roster and its two mutations. Capacity is checked by
//! [`crate::League`] before it calls [`Team::add_player`]; the entity itself
//! only keeps order.

use crate::{LeagueError, PlayerId, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable handle for a team, assigned in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u32);

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A team: name, coach and an insertion-ordered roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    id: TeamId,
    name: String,
    coach: String,
    roster: Vec<PlayerId>,
}

impl Team {
    /// Create a team with an empty roster. Name and coach are free-form.
    #[must_use]
    pub fn new(id: TeamId, name: impl Into<String>, coach: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            coach: coach.into(),
            roster: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> TeamId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn coach(&self) -> &str {
        &self.coach
    }

    /// Append a player to the roster.
    ///
    /// The caller must already have checked capacity and that the player is
    /// on no roster.
    pub fn add_player(&mut self, player: PlayerId) {
        self.roster.push(player);
    }

    /// Remove the first occurrence of `player`.
    pub fn remove_player(&mut self, player: PlayerId) -> Result<()> {
        let index = self
            .roster
            .iter()
            .position(|&p| p == player)
            .ok_or(LeagueError::NotOnTeam {
                team: self.id,
                player,
            })?;
        self.roster.remove(index);
        Ok(())
    }

    /// Current roster length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.roster.len()
    }

    /// Roster in insertion order.
    #[must_use]
    pub fn roster(&self) -> &[PlayerId] {
        &self.roster
    }

    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        self.roster.contains(&player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_team_is_empty() {
        let team = Team::new(TeamId(0), "Sharks", "Jo");
        assert_eq!(team.name(), "Sharks");
        assert_eq!(team.coach(), "Jo");
        assert_eq!(team.size(), 0);
        assert!(team.roster().is_empty());
    }

    #[test]
    fn add_keeps_insertion_order() {
        let mut team = Team::new(TeamId(0), "Sharks", "Jo");
        team.add_player(PlayerId(5));
        team.add_player(PlayerId(1));
        team.add_player(PlayerId(3));
        assert_eq!(team.roster(), &[PlayerId(5), PlayerId(1), PlayerId(3)]);
        assert!(team.contains(PlayerId(1)));
    }

    #[test]
    fn remove_first_occurrence() {
        let mut team = Team::new(TeamId(0), "Sharks", "Jo");
        team.add_player(PlayerId(1));
        team.add_player(PlayerId(2));
        team.add_player(PlayerId(3));

        assert!(team.remove_player(PlayerId(2)).is_ok());
        assert_eq!(team.roster(), &[PlayerId(1), PlayerId(3)]);
    }

    #[test]
    fn remove_missing_player_fails_and_keeps_roster() {
        let mut team = Team::new(TeamId(2), "Sharks", "Jo");
        team.add_player(PlayerId(1));

        let err = team.remove_player(PlayerId(9));
        assert_eq!(
            err,
            Err(LeagueError::NotOnTeam {
                team: TeamId(2),
                player: PlayerId(9)
            })
        );
        assert_eq!(team.roster(), &[PlayerId(1)]);
    }
}
