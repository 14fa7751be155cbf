//! # League Core
//!
//! The deterministic roster engine behind the league manager.
//!
//! This crate owns the rules: which players may join which team, how the
//! unassigned pool is derived, and how the height and balance reports are
//! aggregated. It performs no I/O. The interactive shell in `apps/league`
//! drives it through [`League`].
//!
//! ## Invariants
//!
//! - A league never holds more than [`MAX_TEAMS`] teams.
//! - A roster never holds more than [`MAX_ROSTER`] players.
//! - A player is on at most one roster; the available pool and the rosters
//!   partition the registry.

pub mod error;
pub mod league;
pub mod ordering;
pub mod player;
pub mod registry;
pub mod report;
pub mod team;

pub use error::{LeagueError, Result};
pub use league::League;
pub use player::{Player, PlayerId};
pub use registry::Registry;
pub use report::{BalanceReport, RosterLine, TeamBalanceRow};
pub use team::{Team, TeamId};

// =============================================================================
// CAPACITY LIMITS
// =============================================================================

/// Maximum number of teams a league may hold.
pub const MAX_TEAMS: usize = 3;

/// Maximum number of players on a single roster.
pub const MAX_ROSTER: usize = 11;
