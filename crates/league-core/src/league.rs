//! # League
//!
//! Owns the registry and the team list and enforces the cross-team rules.
//!
//! Capacity and membership are checked before anything is touched, so a
//! failed call leaves the league exactly as it was.

use crate::ordering::{by_height, team_by_name};
use crate::report::{BalanceReport, RosterLine, TeamBalanceRow};
use crate::{
    LeagueError, MAX_ROSTER, MAX_TEAMS, Player, PlayerId, Registry, Result, Team, TeamId,
};

/// The league: a fixed player registry plus up to [`MAX_TEAMS`] teams.
#[derive(Debug, Clone, Default)]
pub struct League {
    registry: Registry,
    /// Kept ordered by team name.
    teams: Vec<Team>,
    next_team_id: u32,
}

impl League {
    /// Create a league over the given start-up player list.
    #[must_use]
    pub fn new(players: impl IntoIterator<Item = Player>) -> Self {
        Self::with_registry(Registry::new(players))
    }

    #[must_use]
    pub fn with_registry(registry: Registry) -> Self {
        Self {
            registry,
            teams: Vec::new(),
            next_team_id: 0,
        }
    }

    // =========================================================================
    // MUTATIONS
    // =========================================================================

    /// Create a team and insert it in name order.
    pub fn create_team(
        &mut self,
        name: impl Into<String>,
        coach: impl Into<String>,
    ) -> Result<TeamId> {
        if self.teams.len() >= MAX_TEAMS {
            return Err(LeagueError::TeamLimit { max: MAX_TEAMS });
        }

        let id = TeamId(self.next_team_id);
        self.next_team_id = self.next_team_id.saturating_add(1);

        let team = Team::new(id, name, coach);
        // Insert after any equal names so ties keep creation order.
        let index = self
            .teams
            .partition_point(|existing| team_by_name(existing, &team).is_le());
        self.teams.insert(index, team);

        Ok(id)
    }

    /// Put an available player on a team.
    pub fn assign_player(&mut self, team: TeamId, player: PlayerId) -> Result<()> {
        if self.registry.get(player).is_none() {
            return Err(LeagueError::UnknownPlayer(player));
        }

        let target = self.team(team).ok_or(LeagueError::UnknownTeam(team))?;
        if target.size() >= MAX_ROSTER {
            return Err(LeagueError::RosterFull {
                team,
                max: MAX_ROSTER,
            });
        }

        if let Some(holder) = self.team_of(player) {
            return Err(LeagueError::AlreadyAssigned {
                team: holder,
                player,
            });
        }

        self.team_mut(team)?.add_player(player);
        Ok(())
    }

    /// Take a player off a team, returning them to the available pool.
    pub fn unassign_player(&mut self, team: TeamId, player: PlayerId) -> Result<()> {
        self.team_mut(team)?.remove_player(player)
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// All teams, ordered by name.
    #[must_use]
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    #[must_use]
    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|team| team.id() == id)
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.registry.get(id)
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Which team, if any, currently holds `player`.
    #[must_use]
    pub fn team_of(&self, player: PlayerId) -> Option<TeamId> {
        self.teams
            .iter()
            .find(|team| team.contains(player))
            .map(Team::id)
    }

    /// Players on no roster, in name order.
    #[must_use]
    pub fn available_players(&self) -> Vec<PlayerId> {
        self.registry.available(&self.teams)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.teams.len() >= MAX_TEAMS
    }

    // =========================================================================
    // REPORTS
    // =========================================================================

    /// The team's roster, stable-sorted ascending by height.
    ///
    /// Sorts a copy; the stored roster order is untouched.
    pub fn height_report(&self, team: TeamId) -> Result<Vec<RosterLine<'_>>> {
        let mut players = self.resolve_roster(team)?;
        players.sort_by(|(_, a), (_, b)| by_height(a, b));
        Ok(number(players))
    }

    /// The team's roster in stored order with 1-based positions.
    pub fn roster_report(&self, team: TeamId) -> Result<Vec<RosterLine<'_>>> {
        Ok(number(self.resolve_roster(team)?))
    }

    /// Experience balance and height distribution for every team.
    #[must_use]
    pub fn balance_report(&self) -> BalanceReport {
        let rows = self
            .teams
            .iter()
            .map(|team| {
                let players = team
                    .roster()
                    .iter()
                    .filter_map(|&id| self.registry.get(id));
                TeamBalanceRow::from_roster(team.id(), team.name(), players)
            })
            .collect();

        BalanceReport { rows }
    }

    // =========================================================================
    // HELPERS
    // =========================================================================

    fn team_mut(&mut self, id: TeamId) -> Result<&mut Team> {
        self.teams
            .iter_mut()
            .find(|team| team.id() == id)
            .ok_or(LeagueError::UnknownTeam(id))
    }

    fn resolve_roster(&self, team: TeamId) -> Result<Vec<(PlayerId, &Player)>> {
        let team = self.team(team).ok_or(LeagueError::UnknownTeam(team))?;
        team.roster()
            .iter()
            .map(|&id| {
                self.registry
                    .get(id)
                    .map(|player| (id, player))
                    .ok_or(LeagueError::UnknownPlayer(id))
            })
            .collect()
    }
}

fn number(players: Vec<(PlayerId, &Player)>) -> Vec<RosterLine<'_>> {
    players
        .into_iter()
        .enumerate()
        .map(|(index, (id, player))| RosterLine {
            position: index + 1,
            id,
            player,
        })
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
