//! Errors that end a shell session.
//!
//! Engine errors never appear here: the shell reports those to the user and
//! keeps going.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Input reached end of file while a prompt was waiting.
    #[error("input closed")]
    InputClosed,

    #[error("failed to read player list {}: {source}", path.display())]
    PlayerFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid player list: {0}")]
    PlayerList(serde_json::Error),

    #[error("failed to render report: {0}")]
    Render(#[from] serde_json::Error),

    #[error("player list is empty")]
    NoPlayers,
}
