//! Fixed game parameters.

use std::time::Duration;

use super::entities::{Points, TeamColor};

/// Fewest teams a game can be started with.
pub const MIN_TEAMS: usize = 2;

/// Most teams a game can be started with.
pub const MAX_TEAMS: usize = 4;

/// Number of answer slots on every board.
pub const ANSWER_SLOTS: usize = 4;

/// Points awarded per slot, most popular answer first. Remote popularity
/// scores only decide the order; these values are what teams actually earn.
pub const SLOT_POINTS: [Points; ANSWER_SLOTS] = [40, 30, 20, 10];

/// Strikes shown on the board. The counter itself keeps going.
pub const MAX_DISPLAYED_STRIKES: u32 = 3;

/// How long a presentation layer should keep the strike flash on screen
/// before acknowledging it.
pub const STRIKE_FLASH_DURATION: Duration = Duration::from_millis(1500);

/// Display tags handed out to teams by roster position.
pub const TEAM_COLORS: [TeamColor; MAX_TEAMS] = [
    TeamColor::Blue,
    TeamColor::Red,
    TeamColor::Green,
    TeamColor::Purple,
];
