//! # Error Types
//!
//! Every failure the engine can report. All of them are recoverable: the
//! operation is aborted and league state is left exactly as it was.

use crate::{PlayerId, TeamId};
use thiserror::Error;

/// Errors returned by [`crate::League`] and [`crate::Team`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeagueError {
    /// The league already holds the maximum number of teams.
    #[error("team limit reached: a league holds at most {max} teams")]
    TeamLimit { max: usize },

    /// The roster already holds the maximum number of players.
    #[error("roster of team {team} is full: at most {max} players")]
    RosterFull { team: TeamId, max: usize },

    /// The player is not on the given team's roster.
    #[error("player {player} is not on team {team}")]
    NotOnTeam { team: TeamId, player: PlayerId },

    /// The player is already on a roster (possibly a different team).
    #[error("player {player} is already assigned to team {team}")]
    AlreadyAssigned { team: TeamId, player: PlayerId },

    /// No team with this handle exists.
    #[error("unknown team {0}")]
    UnknownTeam(TeamId),

    /// No player with this handle exists in the registry.
    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),
}

impl LeagueError {
    /// True for structural limit violations (team count or roster size).
    #[must_use]
    pub fn is_capacity(&self) -> bool {
        matches!(self, Self::TeamLimit { .. } | Self::RosterFull { .. })
    }

    /// True when a removal targeted a player who is not on the roster.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotOnTeam { .. })
    }
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, LeagueError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_classification() {
        assert!(LeagueError::TeamLimit { max: 3 }.is_capacity());
        assert!(
            LeagueError::RosterFull {
                team: TeamId(0),
                max: 11
            }
            .is_capacity()
        );
        assert!(!LeagueError::UnknownTeam(TeamId(4)).is_capacity());
    }

    #[test]
    fn not_found_classification() {
        let err = LeagueError::NotOnTeam {
            team: TeamId(1),
            player: PlayerId(7),
        };
        assert!(err.is_not_found());
        assert!(!err.is_capacity());
    }

    #[test]
    fn messages_name_the_limit() {
        let err = LeagueError::TeamLimit { max: 3 };
        assert_eq!(
            err.to_string(),
            "team limit reached: a league holds at most 3 teams"
        );
    }
}
