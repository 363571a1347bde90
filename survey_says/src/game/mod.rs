//! Survey game engine - round state machine and board entities.
//!
//! This module provides:
//! - A pure state machine over [`GameState`] with one transition table
//! - Board entities (questions, answers, teams)
//! - The strike flash signal handed to the presentation layer
//! - Game events for whoever narrates the game

pub mod constants;
pub mod entities;
pub mod signal;

mod state_machine;

pub use state_machine::{GameError, GameEvent, GamePhase, GameState, Operation};
