//! Plain text rendering of the game for the moderator.

use std::fmt::Write;
use survey_says::{
    GamePhase, GameState, constants::MAX_DISPLAYED_STRIKES, signal::StrikeFlash,
};

const HIDDEN: &str = "??????";

/// Board as the moderator sees it: hidden answers stay hidden.
pub fn render_board(state: &GameState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== Round {} ({}) ==", state.round_number(), state.phase());

    match state.current_question() {
        Some(question) => {
            let _ = writeln!(out, "{}", question.text);
            for (slot, answer) in question.answers().iter().enumerate() {
                if answer.is_revealed() {
                    let _ = writeln!(out, "  {}. {:<24} {:>3}", slot + 1, answer.text, answer.points);
                } else {
                    let _ = writeln!(out, "  {}. {HIDDEN}", slot + 1);
                }
            }
        }
        None if state.phase() == GamePhase::Loading => {
            let _ = writeln!(out, "Fetching a question...");
        }
        None => {
            let _ = writeln!(out, "No question on the board. Type 'start N' to begin.");
        }
    }

    let _ = writeln!(
        out,
        "Round score: {}   Strikes: {}",
        state.round_score(),
        render_strikes(state.displayed_strikes())
    );
    for (number, team) in state.teams().iter().enumerate() {
        let _ = writeln!(out, "  [{}] {} ({}): {}", number + 1, team.name, team.color, team.score());
    }
    out
}

/// Strike marks, one per strike up to the display cap.
pub fn render_strikes(strikes: u32) -> String {
    let shown = strikes.min(MAX_DISPLAYED_STRIKES) as usize;
    let marks = vec!["X"; shown].join(" ");
    if marks.is_empty() { "-".to_string() } else { marks }
}

pub fn render_flash(flash: &StrikeFlash) -> String {
    format!("  >>> {} <<<", render_strikes(flash.strikes))
}

/// Winner line and final standings.
pub fn render_standings(state: &GameState) -> String {
    let mut out = String::new();
    match state.winner() {
        Ok(winner) => {
            let _ = writeln!(out, "Winner: {} with {} points", winner.name, winner.score());
        }
        Err(_) => {
            let _ = writeln!(out, "No teams played.");
        }
    }
    for (place, team) in state.standings().iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", place + 1, team);
    }
    out
}
