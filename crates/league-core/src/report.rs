//! # Reports
//!
//! Read-only views produced by [`crate::League`] queries.
//!
//! Reports carry data only. [`BalanceReport::to_text`] renders the standard
//! plain-text layout for callers that just want to print it.

use crate::{Player, PlayerId, TeamId};
use serde::Serialize;
use std::collections::BTreeMap;

/// One numbered line of a roster or height listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterLine<'a> {
    /// 1-based position in the listing.
    pub position: usize,
    pub id: PlayerId,
    pub player: &'a Player,
}

/// Per-team row of the balance report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamBalanceRow {
    pub team: TeamId,
    pub name: String,
    /// Players with previous experience.
    pub experienced: usize,
    pub inexperienced: usize,
    /// Share of experienced players, 0.0 to 100.0. An empty team reports 0.0.
    pub experience_pct: f64,
    /// Height in inches -> number of players on this team at that height.
    pub height_histogram: BTreeMap<u32, usize>,
}

impl TeamBalanceRow {
    /// Summarise one roster.
    pub(crate) fn from_roster<'a>(
        team: TeamId,
        name: &str,
        players: impl IntoIterator<Item = &'a Player>,
    ) -> Self {
        let mut experienced = 0usize;
        let mut size = 0usize;
        let mut height_histogram = BTreeMap::new();

        for player in players {
            size += 1;
            if player.previous_experience {
                experienced += 1;
            }
            *height_histogram.entry(player.height_inches).or_insert(0) += 1;
        }

        Self {
            team,
            name: name.to_owned(),
            experienced,
            inexperienced: size - experienced,
            experience_pct: experience_pct(experienced, size),
            height_histogram,
        }
    }

    /// Number of players the row was computed from.
    #[must_use]
    pub fn size(&self) -> usize {
        self.experienced + self.inexperienced
    }
}

/// Percentage of experienced players; 0.0 for an empty roster.
#[allow(clippy::float_arithmetic)]
fn experience_pct(experienced: usize, size: usize) -> f64 {
    if size == 0 {
        return 0.0;
    }
    100.0 * experienced as f64 / size as f64
}

/// League-wide balance report, one row per team in listing order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BalanceReport {
    pub rows: Vec<TeamBalanceRow>,
}

impl BalanceReport {
    /// Row for a specific team, if it exists.
    #[must_use]
    pub fn row(&self, team: TeamId) -> Option<&TeamBalanceRow> {
        self.rows.iter().find(|row| row.team == team)
    }

    /// Render as plain text: the experience summary for every team first,
    /// then each team's height distribution.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut output = String::from("League Balance Report\n\n");

        if self.rows.is_empty() {
            output.push_str("(no teams)\n");
            return output;
        }

        for row in &self.rows {
            output.push_str(&format!(
                "{}, Experienced Players: {}, Inexperienced Players: {}, Average Experience Level: {:.1}%\n",
                row.name, row.experienced, row.inexperienced, row.experience_pct
            ));
        }

        for row in &self.rows {
            output.push('\n');
            if row.height_histogram.is_empty() {
                output.push_str(&format!("Team: {}  (no players)\n", row.name));
                continue;
            }
            for (height, count) in &row.height_histogram {
                output.push_str(&format!(
                    "Team: {}  Height: {}  Number of Players: {}\n",
                    row.name, height, count
                ));
            }
        }

        output
    }
}

// =============================================================================
// TESTS
// =============================================================================
