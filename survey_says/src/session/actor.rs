//! Session actor implementation with async message handling.

use log::{debug, info};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

use super::{game::GameSession, messages::SessionMessage};
use crate::{
    game::{
        GameError, GameEvent, GameState,
        entities::{AnswerId, Team, TeamId},
        signal::StrikeFlash,
    },
    provider::QuestionProvider,
};

const INBOX_CAPACITY: usize = 32;

/// Session actor handle for sending messages
#[derive(Clone, Debug)]
pub struct SessionHandle {
    sender: mpsc::Sender<SessionMessage>,
}

impl SessionHandle {
    /// Create a new session handle
    pub fn new(sender: mpsc::Sender<SessionMessage>) -> Self {
        Self { sender }
    }

    /// Sends a message built around a fresh reply channel and waits for
    /// the answer.
    async fn request<T>(
        &self,
        message: impl FnOnce(oneshot::Sender<T>) -> SessionMessage,
    ) -> Result<T, GameError> {
        let (response, reply) = oneshot::channel();
        self.sender
            .send(message(response))
            .await
            .map_err(|_| GameError::SessionClosed)?;
        reply.await.map_err(|_| GameError::SessionClosed)
    }

    /// # Errors
    ///
    /// See [`GameSession::start_game`]; also if the actor has stopped.
    pub async fn start_game(
        &self,
        team_count: usize,
        names: Vec<String>,
    ) -> Result<GameState, GameError> {
        self.request(|response| SessionMessage::StartGame {
            team_count,
            names,
            response,
        })
        .await?
    }

    /// # Errors
    ///
    /// See [`GameSession::reveal_answer`]; also if the actor has stopped.
    pub async fn reveal_answer(&self, answer_id: AnswerId) -> Result<GameState, GameError> {
        self.request(|response| SessionMessage::RevealAnswer {
            answer_id,
            response,
        })
        .await?
    }

    /// # Errors
    ///
    /// See [`GameSession::reveal_slot`]; also if the actor has stopped.
    pub async fn reveal_slot(&self, slot: usize) -> Result<GameState, GameError> {
        self.request(|response| SessionMessage::RevealSlot { slot, response })
            .await?
    }

    /// # Errors
    ///
    /// See [`GameSession::register_strike`]; also if the actor has stopped.
    pub async fn register_strike(&self) -> Result<StrikeFlash, GameError> {
        self.request(|response| SessionMessage::RegisterStrike { response })
            .await?
    }

    /// # Errors
    ///
    /// See [`GameSession::award_points`]; also if the actor has stopped.
    pub async fn award_points(&self, team_id: TeamId) -> Result<GameState, GameError> {
        self.request(|response| SessionMessage::AwardPoints { team_id, response })
            .await?
    }

    /// # Errors
    ///
    /// See [`GameSession::advance_round`]; also if the actor has stopped.
    pub async fn advance_round(&self) -> Result<GameState, GameError> {
        self.request(|response| SessionMessage::AdvanceRound { response })
            .await?
    }

    /// # Errors
    ///
    /// See [`GameSession::end_game`]; also if the actor has stopped.
    pub async fn end_game(&self) -> Result<GameState, GameError> {
        self.request(|response| SessionMessage::EndGame { response })
            .await?
    }

    /// # Errors
    ///
    /// See [`GameSession::full_reset`]; also if the actor has stopped.
    pub async fn full_reset(&self) -> Result<GameState, GameError> {
        self.request(|response| SessionMessage::FullReset { response })
            .await?
    }

    /// # Errors
    ///
    /// If the actor has stopped.
    pub async fn state(&self) -> Result<GameState, GameError> {
        self.request(|response| SessionMessage::GetState { response })
            .await
    }

    /// # Errors
    ///
    /// With no teams in play, or if the actor has stopped.
    pub async fn winner(&self) -> Result<Team, GameError> {
        self.request(|response| SessionMessage::GetWinner { response })
            .await?
    }

    /// # Errors
    ///
    /// If the actor has stopped.
    pub async fn pending_strike(&self) -> Result<Option<StrikeFlash>, GameError> {
        self.request(|response| SessionMessage::PendingStrike { response })
            .await
    }

    /// # Errors
    ///
    /// If the actor has stopped.
    pub async fn acknowledge_strike(&self, generation: u64) -> Result<bool, GameError> {
        self.request(|response| SessionMessage::AcknowledgeStrike {
            generation,
            response,
        })
        .await
    }

    /// # Errors
    ///
    /// If the actor has stopped.
    pub async fn drain_events(&self) -> Result<Vec<GameEvent>, GameError> {
        self.request(|response| SessionMessage::DrainEvents { response })
            .await
    }

    /// Asks the actor to stop. Stopping twice is fine.
    pub async fn close(&self) {
        let _ = self.sender.send(SessionMessage::Close).await;
    }
}

/// Session actor owning one game
pub struct SessionActor {
    session: GameSession,
    inbox: mpsc::Receiver<SessionMessage>,
}

impl SessionActor {
    /// Create a new session actor
    ///
    /// # Returns
    ///
    /// * `(SessionActor, SessionHandle)` - Actor and handle for sending messages
    pub fn new(provider: Arc<dyn QuestionProvider>) -> (Self, SessionHandle) {
        let (sender, inbox) = mpsc::channel(INBOX_CAPACITY);
        let actor = Self {
            session: GameSession::new(provider),
            inbox,
        };
        (actor, SessionHandle::new(sender))
    }

    /// Run the session actor event loop until closed or every handle is
    /// dropped.
    pub async fn run(mut self) {
        info!("Game session starting");

        while let Some(message) = self.inbox.recv().await {
            if matches!(message, SessionMessage::Close) {
                break;
            }
            self.handle_message(message).await;
        }

        info!("Game session closed");
    }

    async fn handle_message(&mut self, message: SessionMessage) {
        let session = &mut self.session;
        // A dropped reply channel only means the caller stopped waiting.
        match message {
            SessionMessage::StartGame {
                team_count,
                names,
                response,
            } => {
                let result = session.start_game(team_count, names.as_slice()).await.cloned();
                let _ = response.send(result);
            }

            SessionMessage::RevealAnswer {
                answer_id,
                response,
            } => {
                let _ = response.send(session.reveal_answer(&answer_id).cloned());
            }

            SessionMessage::RevealSlot { slot, response } => {
                let _ = response.send(session.reveal_slot(slot).cloned());
            }

            SessionMessage::RegisterStrike { response } => {
                let _ = response.send(session.register_strike());
            }

            SessionMessage::AwardPoints { team_id, response } => {
                let _ = response.send(session.award_points(team_id).cloned());
            }

            SessionMessage::AdvanceRound { response } => {
                let result = session.advance_round().await.cloned();
                let _ = response.send(result);
            }

            SessionMessage::EndGame { response } => {
                let _ = response.send(session.end_game().cloned());
            }

            SessionMessage::FullReset { response } => {
                let _ = response.send(session.full_reset().cloned());
            }

            SessionMessage::GetState { response } => {
                let _ = response.send(session.state().clone());
            }

            SessionMessage::GetWinner { response } => {
                let _ = response.send(session.winner().cloned());
            }

            SessionMessage::PendingStrike { response } => {
                let _ = response.send(session.pending_strike());
            }

            SessionMessage::AcknowledgeStrike {
                generation,
                response,
            } => {
                let _ = response.send(session.acknowledge_strike(generation));
            }

            SessionMessage::DrainEvents { response } => {
                let events: Vec<GameEvent> = session.drain_events().into();
                debug!("Draining {} events", events.len());
                let _ = response.send(events);
            }

            SessionMessage::Close => {}
        }
    }
}
