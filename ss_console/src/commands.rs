use std::fmt;
use survey_says::{ANSWER_SLOTS, entities::TeamId};

/// A moderator command typed at the console prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Start a game with `teams` teams. Missing names get placeholders.
    Start { teams: usize, names: Vec<String> },
    /// Reveal the answer in a board slot, counted from zero.
    Reveal(usize),
    Strike,
    Award(TeamId),
    Next,
    End,
    Reset,
    Show,
    Dump,
    Help,
    Quit,
}

/// Errors that can occur during command parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Start command without a team count.
    StartMissingTeamCount,
    /// Team count that isn't a number.
    InvalidTeamCount(String),
    /// Reveal command without a slot.
    RevealMissingSlot,
    /// Slot outside 1 to 4.
    InvalidSlot(String),
    /// Award command without a team.
    AwardMissingTeam,
    /// Team number that isn't a positive number.
    InvalidTeam(String),
    /// Unrecognized command.
    UnrecognizedCommand(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartMissingTeamCount => {
                write!(f, "Start requires a team count (e.g., 'start 2 Alfa, Beta')")
            }
            Self::InvalidTeamCount(value) => {
                write!(f, "Invalid team count '{value}'. Must be a number (e.g., 'start 3')")
            }
            Self::RevealMissingSlot => write!(f, "Reveal requires a slot (e.g., 'reveal 1')"),
            Self::InvalidSlot(value) => {
                write!(f, "Invalid slot '{value}'. Must be 1 to {ANSWER_SLOTS}")
            }
            Self::AwardMissingTeam => write!(f, "Award requires a team number (e.g., 'award 2')"),
            Self::InvalidTeam(value) => {
                write!(f, "Invalid team '{value}'. Use the team number shown on the board")
            }
            Self::UnrecognizedCommand(cmd) => write!(
                f,
                "Unrecognized command '{cmd}'. Type 'help' to see available commands"
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a line of console input into a command.
///
/// Slot and team numbers are typed counting from one, the way they are
/// shown on the board.
///
/// # Examples
///
/// ```
/// use ss_console::commands::{ConsoleCommand, parse_command};
/// use survey_says::entities::TeamId;
///
/// assert_eq!(parse_command("strike"), Ok(ConsoleCommand::Strike));
/// assert_eq!(parse_command("reveal 1"), Ok(ConsoleCommand::Reveal(0)));
/// assert_eq!(parse_command("award 2"), Ok(ConsoleCommand::Award(TeamId::new(1))));
/// ```
pub fn parse_command(input: &str) -> Result<ConsoleCommand, ParseError> {
    let trimmed = input.trim();

    match trimmed {
        "strike" | "x" => return Ok(ConsoleCommand::Strike),
        "next" => return Ok(ConsoleCommand::Next),
        "end" => return Ok(ConsoleCommand::End),
        "reset" => return Ok(ConsoleCommand::Reset),
        "show" => return Ok(ConsoleCommand::Show),
        "dump" => return Ok(ConsoleCommand::Dump),
        "help" | "?" => return Ok(ConsoleCommand::Help),
        "quit" | "exit" => return Ok(ConsoleCommand::Quit),
        _ => {}
    }

    let parts: Vec<&str> = trimmed.split_ascii_whitespace().collect();
    match parts.first() {
        Some(&"start") => parse_start_command(&parts),
        Some(&"reveal") => parse_reveal_command(&parts),
        Some(&"award") => parse_award_command(&parts),
        _ => Err(ParseError::UnrecognizedCommand(trimmed.to_string())),
    }
}

/// Splits a comma-separated team name list. Names may contain spaces.
pub fn split_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a start command: "start N [NAME, NAME...]"
fn parse_start_command(parts: &[&str]) -> Result<ConsoleCommand, ParseError> {
    let count = parts.get(1).ok_or(ParseError::StartMissingTeamCount)?;
    let teams = count
        .parse::<usize>()
        .map_err(|_| ParseError::InvalidTeamCount(count.to_string()))?;
    let names = split_names(&parts[2..].join(" "));
    Ok(ConsoleCommand::Start { teams, names })
}

/// Parse a reveal command: "reveal SLOT"
fn parse_reveal_command(parts: &[&str]) -> Result<ConsoleCommand, ParseError> {
    let value = parts.get(1).ok_or(ParseError::RevealMissingSlot)?;
    match value.parse::<usize>() {
        Ok(slot @ 1..=ANSWER_SLOTS) => Ok(ConsoleCommand::Reveal(slot - 1)),
        _ => Err(ParseError::InvalidSlot(value.to_string())),
    }
}

/// Parse an award command: "award TEAM"
fn parse_award_command(parts: &[&str]) -> Result<ConsoleCommand, ParseError> {
    let value = parts.get(1).ok_or(ParseError::AwardMissingTeam)?;
    match value.parse::<usize>() {
        Ok(team) if team > 0 => Ok(ConsoleCommand::Award(TeamId::new(team - 1))),
        _ => Err(ParseError::InvalidTeam(value.to_string())),
    }
}
