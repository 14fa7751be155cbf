//! # CLI
//!
//! Command-line flags, logging setup and start-up player loading.

use crate::ShellError;
use crate::shell::Shell;
use clap::Parser;
use league_core::{League, Player};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Start-up player list shipped with the binary.
const BUILTIN_PLAYERS: &str = include_str!("../data/players.json");

/// Interactive league manager: build up to three teams from a fixed pool of
/// players and print height and balance reports.
#[derive(Debug, Parser)]
#[command(name = "league", version, about)]
pub struct Cli {
    /// JSON file with the player list, replacing the built-in one.
    #[arg(long, value_name = "FILE")]
    pub players: Option<PathBuf>,

    /// Print the balance report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging on stderr (RUST_LOG takes precedence).
    #[arg(short, long)]
    pub verbose: bool,
}

/// Install the stderr log subscriber.
///
/// Filter comes from `RUST_LOG`, falling back to `warn` (or `debug` with
/// `--verbose`). Calling this twice is harmless.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Parse a JSON array of players.
pub fn parse_players(json: &str) -> Result<Vec<Player>, ShellError> {
    let players: Vec<Player> = serde_json::from_str(json).map_err(ShellError::PlayerList)?;
    if players.is_empty() {
        return Err(ShellError::NoPlayers);
    }
    Ok(players)
}

/// The built-in start-up list.
pub fn builtin_players() -> Result<Vec<Player>, ShellError> {
    parse_players(BUILTIN_PLAYERS)
}

/// Load players from `path`, or the built-in list when no path is given.
pub fn load_players(path: Option<&Path>) -> Result<Vec<Player>, ShellError> {
    let Some(path) = path else {
        return builtin_players();
    };

    let json = std::fs::read_to_string(path).map_err(|source| ShellError::PlayerFile {
        path: path.to_path_buf(),
        source,
    })?;
    let players = parse_players(&json)?;
    info!(path = %path.display(), count = players.len(), "loaded player list");
    Ok(players)
}

/// Build the league and run the menu over the given reader and writer.
pub fn run_session<R: BufRead, W: Write>(
    cli: &Cli,
    reader: R,
    writer: W,
) -> Result<League, ShellError> {
    let league = League::new(load_players(cli.players.as_deref())?);
    info!(players = league.registry().len(), "league ready");

    let mut shell = Shell::new(league, reader, writer).with_json_reports(cli.json);
    shell.run()?;

    let (league, _) = shell.into_parts();
    Ok(league)
}

/// Run the interactive session on stdin/stdout.
pub fn run(cli: &Cli) -> Result<(), ShellError> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let league = run_session(cli, stdin.lock(), stdout.lock())?;
    info!(teams = league.teams().len(), "session finished");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use league_core::{MAX_ROSTER, MAX_TEAMS};

    #[test]
    fn builtin_list_fills_every_roster() {
        let players = builtin_players().unwrap();
        let league = League::new(players);
        assert_eq!(league.registry().len(), MAX_TEAMS * MAX_ROSTER);
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(matches!(parse_players("[]"), Err(ShellError::NoPlayers)));
    }

    #[test]
    fn malformed_list_is_rejected() {
        assert!(matches!(
            parse_players(r#"[{"name": "Ada"}]"#),
            Err(ShellError::PlayerList(_))
        ));
    }

    #[test]
    fn flags_parse() {
        let cli = Cli::try_parse_from(["league", "--players", "kids.json", "--json", "-v"]).unwrap();
        assert_eq!(cli.players, Some(PathBuf::from("kids.json")));
        assert!(cli.json);
        assert!(cli.verbose);
    }
}
