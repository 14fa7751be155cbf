//! # Interactive Shell
//!
//! Turns menu choices into [`League`] calls and renders the results.
//!
//! The menu is an explicit [`Action`] enum and [`Shell::dispatch`] returns a
//! [`Flow`], so the loop can be driven and tested without a terminal.

use crate::ShellError;
use crate::prompt::Prompter;
use league_core::{League, LeagueError, MAX_ROSTER, PlayerId, RosterLine, Team, TeamId};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

// =============================================================================
// ACTIONS
// =============================================================================

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CreateTeam,
    AddPlayer,
    RemovePlayer,
    HeightReport,
    BalanceReport,
    PrintRoster,
    Exit,
}

impl Action {
    /// Menu entries in display order.
    pub const ALL: [Action; 7] = [
        Action::CreateTeam,
        Action::AddPlayer,
        Action::RemovePlayer,
        Action::HeightReport,
        Action::BalanceReport,
        Action::PrintRoster,
        Action::Exit,
    ];

    /// Map a 1-based menu number to an action.
    #[must_use]
    pub fn from_choice(choice: usize) -> Option<Self> {
        choice
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index).copied())
    }

    /// The 1-based menu number.
    #[must_use]
    pub fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|&action| action == self)
            .map_or(0, |index| index + 1)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Action::CreateTeam => "Create a new team",
            Action::AddPlayer => "Add a player to a team",
            Action::RemovePlayer => "Remove a player from a team",
            Action::HeightReport => "View report of a team grouped by height",
            Action::BalanceReport => "View League Balance Report",
            Action::PrintRoster => "Print out a team roster",
            Action::Exit => "Exit the program",
        }
    }
}

/// Whether the menu loop keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

// =============================================================================
// SHELL
// =============================================================================

/// The menu-driven shell around a [`League`].
pub struct Shell<R, W> {
    league: League,
    prompter: Prompter<R, W>,
    json_reports: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(league: League, reader: R, writer: W) -> Self {
        Self {
            league,
            prompter: Prompter::new(reader, writer),
            json_reports: false,
        }
    }

    /// Emit the balance report as JSON instead of text.
    #[must_use]
    pub fn with_json_reports(mut self, enabled: bool) -> Self {
        self.json_reports = enabled;
        self
    }

    pub fn into_parts(self) -> (League, W) {
        (self.league, self.prompter.into_writer())
    }

    /// Run the menu loop until the user exits or input runs out.
    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            let action = match self.prompt_action() {
                Ok(action) => action,
                Err(ShellError::InputClosed) => {
                    info!("input closed, leaving menu");
                    return Ok(());
                }
                Err(err) => return Err(err),
            };

            match self.dispatch(action) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(ShellError::InputClosed) => {
                    info!(?action, "input closed mid-action");
                    return Ok(());
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Show the menu and read a valid action.
    fn prompt_action(&mut self) -> Result<Action, ShellError> {
        loop {
            self.prompter.say("Your options are:")?;
            for action in Action::ALL {
                self.prompter
                    .say(&format!("{} - {}", action.number(), action.label()))?;
            }

            let choice = self.prompter.read_number("\nWhat do you want to do:  ")?;
            match Action::from_choice(choice) {
                Some(action) => return Ok(action),
                None => {
                    debug!(choice, "unknown menu choice");
                    self.prompter
                        .say(&format!("\nUnknown choice: '{choice}'. Try again.\n"))?;
                }
            }
        }
    }

    /// Perform one action.
    pub fn dispatch(&mut self, action: Action) -> Result<Flow, ShellError> {
        debug!(?action, "dispatching");
        match action {
            Action::CreateTeam => self.create_team()?,
            Action::AddPlayer => self.add_player()?,
            Action::RemovePlayer => self.remove_player()?,
            Action::HeightReport => self.height_report()?,
            Action::BalanceReport => self.balance_report()?,
            Action::PrintRoster => self.print_roster()?,
            Action::Exit => {
                self.prompter.say("Goodbye!")?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    // =========================================================================
    // ACTION HANDLERS
    // =========================================================================

    fn create_team(&mut self) -> Result<(), ShellError> {
        if self.league.is_full() {
            self.prompter.say(
                "\nSorry, the team limit has been reached - no new teams may be created.\n",
            )?;
            return Ok(());
        }

        let name = self.prompter.read_line("Please enter a new team name: ")?;
        let coach = self
            .prompter
            .read_line("Please enter the coach's name for the new team: ")?;

        match self.league.create_team(name.clone(), coach.clone()) {
            Ok(team) => {
                info!(%team, name = %name, coach = %coach, "team created");
                self.prompter
                    .say(&format!("{name} created with coach {coach}\n"))
            }
            Err(err) => self.report_rejection(&err),
        }
    }

    fn add_player(&mut self) -> Result<(), ShellError> {
        let Some(team) = self.select_team()? else {
            return Ok(());
        };
        let (team_name, size) = self.describe(team);

        if size >= MAX_ROSTER {
            return self.prompter.say(&format!(
                "\nTeam {team_name} already has the maximum of {MAX_ROSTER} players.\n"
            ));
        }

        let available = self.league.available_players();
        let Some(player) = self.select_player(&available)? else {
            return self.prompter.say("\nNo players are available.\n");
        };

        match self.league.assign_player(team, player) {
            Ok(()) => {
                let summary = self.summary(player);
                info!(%team, %player, "player assigned");
                self.prompter
                    .say(&format!("\nAdded {summary} to team {team_name}.\n"))
            }
            Err(err) => self.report_rejection(&err),
        }
    }

    fn remove_player(&mut self) -> Result<(), ShellError> {
        let Some(team) = self.select_team()? else {
            return Ok(());
        };
        let (team_name, _) = self.describe(team);

        let roster = self
            .league
            .team(team)
            .map(|t| t.roster().to_vec())
            .unwrap_or_default();
        let Some(player) = self.select_player(&roster)? else {
            return self
                .prompter
                .say(&format!("\nTeam {team_name} has no players.\n"));
        };

        match self.league.unassign_player(team, player) {
            Ok(()) => {
                let summary = self.summary(player);
                info!(%team, %player, "player unassigned");
                self.prompter
                    .say(&format!("\nRemoved {summary} from team {team_name}.\n"))
            }
            Err(err) => self.report_rejection(&err),
        }
    }

    fn height_report(&mut self) -> Result<(), ShellError> {
        let Some(team) = self.select_team()? else {
            return Ok(());
        };
        let (team_name, _) = self.describe(team);

        let title = format!("Height report for {team_name}");
        match self
            .league
            .height_report(team)
            .map(|lines| render_lines(&title, &lines))
        {
            Ok(text) => self.prompter.say(&text),
            Err(err) => self.report_rejection(&err),
        }
    }

    fn print_roster(&mut self) -> Result<(), ShellError> {
        let Some(team) = self.select_team()? else {
            return Ok(());
        };
        let (team_name, _) = self.describe(team);
        let coach = self
            .league
            .team(team)
            .map(|t| t.coach().to_owned())
            .unwrap_or_default();

        let title = format!("Team roster for {team_name} (coach {coach})");
        match self
            .league
            .roster_report(team)
            .map(|lines| render_lines(&title, &lines))
        {
            Ok(text) => self.prompter.say(&text),
            Err(err) => self.report_rejection(&err),
        }
    }

    fn balance_report(&mut self) -> Result<(), ShellError> {
        let report = self.league.balance_report();
        let text = if self.json_reports {
            serde_json::to_string_pretty(&report)?
        } else {
            report.to_text()
        };
        self.prompter.say(&text)
    }

    // =========================================================================
    // HELPERS
    // =========================================================================

    fn select_team(&mut self) -> Result<Option<TeamId>, ShellError> {
        let teams: Vec<(TeamId, String)> = self
            .league
            .teams()
            .iter()
            .map(|team: &Team| (team.id(), team.name().to_owned()))
            .collect();

        if teams.is_empty() {
            self.prompter.say("\nNo teams yet. Create a team first.\n")?;
            return Ok(None);
        }

        let names: Vec<String> = teams.iter().map(|(_, name)| name.clone()).collect();
        let index = self.prompter.choose("Select the team:  ", &names)?;
        Ok(index.and_then(|i| teams.get(i)).map(|(id, _)| *id))
    }

    fn select_player(&mut self, candidates: &[PlayerId]) -> Result<Option<PlayerId>, ShellError> {
        let summaries: Vec<String> = candidates.iter().map(|&id| self.summary(id)).collect();
        let index = self.prompter.choose("Select a player:  ", &summaries)?;
        Ok(index.and_then(|i| candidates.get(i)).copied())
    }

    fn describe(&self, team: TeamId) -> (String, usize) {
        self.league
            .team(team)
            .map(|t| (t.name().to_owned(), t.size()))
            .unwrap_or_else(|| (team.to_string(), 0))
    }

    fn summary(&self, player: PlayerId) -> String {
        self.league
            .player(player)
            .map(|p| p.summary())
            .unwrap_or_else(|| player.to_string())
    }

    fn report_rejection(&mut self, err: &LeagueError) -> Result<(), ShellError> {
        warn!(error = %err, "operation rejected");
        let message = self.rejection_message(err);
        self.prompter.say(&format!("\n{message}\n"))
    }

    /// User-facing text for a rejected operation, with handles resolved to
    /// team and player names.
    fn rejection_message(&self, err: &LeagueError) -> String {
        match *err {
            LeagueError::TeamLimit { max } => {
                format!("Sorry, the league already has the maximum of {max} teams.")
            }
            LeagueError::RosterFull { team, max } => {
                let (name, _) = self.describe(team);
                format!("Team {name} already has the maximum of {max} players.")
            }
            LeagueError::NotOnTeam { team, player } => {
                let (name, _) = self.describe(team);
                format!("{} is not on team {name}.", self.summary(player))
            }
            LeagueError::AlreadyAssigned { team, player } => {
                let (name, _) = self.describe(team);
                format!("{} is already on team {name}.", self.summary(player))
            }
            LeagueError::UnknownTeam(_) => "That team does not exist.".to_owned(),
            LeagueError::UnknownPlayer(_) => "That player is not in the player list.".to_owned(),
        }
    }
}

/// Numbered listing under a title.
fn render_lines(title: &str, lines: &[RosterLine<'_>]) -> String {
    let mut output = format!("{title}\n\n");
    if lines.is_empty() {
        output.push_str("(no players)\n");
    }
    for line in lines {
        output.push_str(&format!("{}.)  {}\n", line.position, line.player.summary()));
    }
    output
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use league_core::Player;
    use std::io::Cursor;

    fn shell_with_team() -> (Shell<Cursor<Vec<u8>>, Vec<u8>>, TeamId) {
        let mut league = League::new(vec![
            Player::new("P1", 62, false),
            Player::new("P2", 70, true),
        ]);
        let team = league.create_team("Sharks", "Jo").unwrap();
        league.assign_player(team, PlayerId(0)).unwrap();
        (Shell::new(league, Cursor::new(Vec::new()), Vec::new()), team)
    }

    #[test]
    fn menu_numbers_round_trip() {
        for action in Action::ALL {
            assert_eq!(Action::from_choice(action.number()), Some(action));
        }
        assert_eq!(Action::from_choice(0), None);
        assert_eq!(Action::from_choice(8), None);
        assert_eq!(Action::Exit.number(), 7);
    }

    #[test]
    fn render_lines_numbers_players() {
        let ada = league_core::Player::new("Ada", 42, true);
        let lines = vec![RosterLine {
            position: 1,
            id: PlayerId(0),
            player: &ada,
        }];
        let text = render_lines("Roster", &lines);
        assert!(text.starts_with("Roster\n\n"));
        assert!(text.contains("1.)  Ada (42 in, experienced)"));
        assert!(render_lines("Empty", &[]).contains("(no players)"));
    }

    #[test]
    fn rejections_name_teams_and_players() {
        let (shell, team) = shell_with_team();

        let assigned = LeagueError::AlreadyAssigned {
            team,
            player: PlayerId(0),
        };
        assert_eq!(
            shell.rejection_message(&assigned),
            "P1 (62 in, inexperienced) is already on team Sharks."
        );

        let missing = LeagueError::NotOnTeam {
            team,
            player: PlayerId(1),
        };
        assert_eq!(
            shell.rejection_message(&missing),
            "P2 (70 in, experienced) is not on team Sharks."
        );

        let full = LeagueError::RosterFull { team, max: 11 };
        assert_eq!(
            shell.rejection_message(&full),
            "Team Sharks already has the maximum of 11 players."
        );
    }

    #[test]
    fn rejection_is_printed_without_handles() {
        let (mut shell, team) = shell_with_team();
        let err = shell.league.assign_player(team, PlayerId(0)).unwrap_err();
        shell.report_rejection(&err).unwrap();

        let (_, output) = shell.into_parts();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("P1 (62 in, inexperienced) is already on team Sharks."));
        assert!(!output.contains('#'));
    }
}
