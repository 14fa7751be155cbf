//! # Orderings
//!
//! Comparators handed to containers. Players and teams carry no intrinsic
//! order, so name-based listing and height-based reporting never collide.

use crate::{Player, Team};
use std::cmp::Ordering;

/// Default listing order: name, then height, then experience.
///
/// Total over [`Player`], so equal results mean identical players.
pub fn by_name(a: &Player, b: &Player) -> Ordering {
    a.name
        .cmp(&b.name)
        .then(a.height_inches.cmp(&b.height_inches))
        .then(a.previous_experience.cmp(&b.previous_experience))
}

/// Height ascending. Ties compare equal so a stable sort keeps input order.
pub fn by_height(a: &Player, b: &Player) -> Ordering {
    a.height_inches.cmp(&b.height_inches)
}

/// Teams listed by name. Ties compare equal (creation order is kept).
pub fn team_by_name(a: &Team, b: &Team) -> Ordering {
    a.name().cmp(b.name())
}
