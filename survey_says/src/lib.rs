//! # Survey Says
//!
//! A moderator-driven survey party game in the style of Family Feud.
//!
//! Teams take turns guessing the most popular answers to a survey
//! question. The moderator reveals answers, registers strikes for wrong
//! guesses and awards the round pot. The game engine is a pure state
//! machine; questions come from a remote generator with a local pool to
//! fall back on.
//!
//! ## Phases
//!
//! - **Setup**: Choosing between 2 and 4 teams
//! - **Loading**: Waiting on the next question
//! - **FaceOff**: Teams are guessing
//! - **RoundOver**: Board cleared or pot awarded
//! - **GameOver**: Final scores
//!
//! ## Core Modules
//!
//! - [`game`]: State machine, entities and constants
//! - [`provider`]: Question generator, fallback pool and configuration
//! - [`session`]: Async actor owning a running game
//!
//! ## Example
//!
//! ```
//! use survey_says::{GameState, entities::TeamId};
//!
//! let state = GameState::new().try_start_game(2, &["Alfa", "Beta"]).unwrap();
//! assert_eq!(state.teams()[1].id, TeamId::new(1));
//! ```

/// Core game logic, entities, and state machine.
pub mod game;
pub use game::{
    GameError, GameEvent, GamePhase, GameState, Operation,
    constants::{self, ANSWER_SLOTS, MAX_TEAMS, MIN_TEAMS, SLOT_POINTS, STRIKE_FLASH_DURATION},
    entities, signal,
};

/// Question sourcing.
pub mod provider;
pub use provider::{GeneratorConfig, QuestionProvider, QuestionService};

/// Running games.
pub mod session;
pub use session::{GameSession, SessionActor, SessionHandle};
