//! Session actor message types.

use tokio::sync::oneshot;

use crate::game::{
    GameError, GameEvent, GameState,
    entities::{AnswerId, Team, TeamId},
    signal::StrikeFlash,
};

/// Reply channel for operations that can be rejected
pub type Reply<T> = oneshot::Sender<Result<T, GameError>>;

/// Messages that can be sent to a SessionActor
#[derive(Debug)]
pub enum SessionMessage {
    /// Build the roster and load the first question
    StartGame {
        team_count: usize,
        names: Vec<String>,
        response: Reply<GameState>,
    },

    /// Reveal an answer by id
    RevealAnswer {
        answer_id: AnswerId,
        response: Reply<GameState>,
    },

    /// Reveal an answer by board slot (0-based)
    RevealSlot {
        slot: usize,
        response: Reply<GameState>,
    },

    /// Count a wrong guess
    RegisterStrike { response: Reply<StrikeFlash> },

    /// Give the round pot to a team and close the round
    AwardPoints {
        team_id: TeamId,
        response: Reply<GameState>,
    },

    /// Load the next question
    AdvanceRound { response: Reply<GameState> },

    /// Finish the game
    EndGame { response: Reply<GameState> },

    /// Back to setup
    FullReset { response: Reply<GameState> },

    /// Snapshot of the current state
    GetState { response: oneshot::Sender<GameState> },

    /// Current leader
    GetWinner { response: Reply<Team> },

    /// Strike flash waiting to be shown, if any
    PendingStrike {
        response: oneshot::Sender<Option<StrikeFlash>>,
    },

    /// Clear a strike flash after it has been shown
    AcknowledgeStrike {
        generation: u64,
        response: oneshot::Sender<bool>,
    },

    /// Take all events recorded since the last drain
    DrainEvents {
        response: oneshot::Sender<Vec<GameEvent>>,
    },

    /// Stop the actor
    Close,
}
