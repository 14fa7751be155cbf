//! # Players
//!
//! The immutable player record and the handle rosters use to refer to it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle for a player in the [`crate::Registry`].
///
/// Handles are positions in the registry's name-sorted list, so they stay
/// valid for the lifetime of the league.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A player known to the league.
///
/// Two players are the same player when every field matches. Ordering lives
/// in [`crate::ordering`] rather than on this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    pub name: String,
    /// Height in inches.
    pub height_inches: u32,
    /// Whether the player has played in a league before.
    pub previous_experience: bool,
}

impl Player {
    /// Create a new player record.
    #[must_use]
    pub fn new(name: impl Into<String>, height_inches: u32, previous_experience: bool) -> Self {
        Self {
            name: name.into(),
            height_inches,
            previous_experience,
        }
    }

    /// One-line summary used in listings, e.g. `Ada Lane (42 in, experienced)`.
    #[must_use]
    pub fn summary(&self) -> String {
        let experience = if self.previous_experience {
            "experienced"
        } else {
            "inexperienced"
        };
        format!("{} ({} in, {})", self.name, self.height_inches, experience)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_all_fields() {
        let a = Player::new("Ada", 42, true);
        assert_eq!(a, Player::new("Ada", 42, true));
        assert_ne!(a, Player::new("Ada", 43, true));
        assert_ne!(a, Player::new("Ada", 42, false));
    }

    #[test]
    fn summary_format() {
        assert_eq!(
            Player::new("Ada Lane", 42, true).summary(),
            "Ada Lane (42 in, experienced)"
        );
        assert_eq!(
            Player::new("Bo Reed", 39, false).to_string(),
            "Bo Reed (39 in, inexperienced)"
        );
    }

    #[test]
    fn deserializes_from_json_record() {
        let json = r#"{"name": "Cy Moss", "height_inches": 44, "previous_experience": false}"#;
        let player: Player = serde_json::from_str(json).unwrap();
        assert_eq!(player, Player::new("Cy Moss", 44, false));
    }
}
