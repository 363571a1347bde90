//! A single running game: state, question provider, strike flash and
//! event log, owned together.

use futures_util::FutureExt;
use log::{debug, error};
use std::{any::Any, collections::VecDeque, panic::AssertUnwindSafe, sync::Arc};

use crate::{
    game::{
        GameError, GameEvent, GamePhase, GameState,
        entities::{AnswerId, Question, Team, TeamId},
        signal::{StrikeFlash, StrikeSignal},
    },
    provider::QuestionProvider,
};

fn log_ignored(error: &GameError) {
    debug!("Ignored operation: {error}");
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "question provider panicked".to_string())
}

/// One game session. Methods take `&mut self`, so a question fetch can
/// never overlap with another operation on the same session.
pub struct GameSession {
    state: GameState,
    provider: Arc<dyn QuestionProvider>,
    strike_signal: StrikeSignal,
    events: VecDeque<GameEvent>,
}

impl GameSession {
    #[must_use]
    pub fn new(provider: Arc<dyn QuestionProvider>) -> Self {
        Self {
            state: GameState::new(),
            provider,
            strike_signal: StrikeSignal::new(),
            events: VecDeque::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn pending_strike(&self) -> Option<StrikeFlash> {
        self.strike_signal.pending()
    }

    /// Clears the strike flash once the presentation is done showing it.
    pub fn acknowledge_strike(&mut self, generation: u64) -> bool {
        self.strike_signal.acknowledge(generation)
    }

    pub fn drain_events(&mut self) -> VecDeque<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Asks the provider for a question, excluding everything played so
    /// far. A panicking provider becomes an error instead of taking the
    /// session down with it.
    async fn fetch(&self) -> Result<Question, GameError> {
        AssertUnwindSafe(self.provider.fetch_question(self.state.history()))
            .catch_unwind()
            .await
            .map_err(|payload| GameError::QuestionUnavailable(panic_message(payload.as_ref())))
    }

    fn push_round_started(&mut self) {
        if let Some(question) = self.state.current_question() {
            self.events.push_back(GameEvent::RoundStarted {
                round: self.state.round_number(),
                prompt: question.text.clone(),
            });
        }
    }

    /// Builds the roster and opens round one.
    ///
    /// # Errors
    ///
    /// Rejected outside setup or for a bad team count, with the state
    /// unchanged. If no question can be had, the session stays loading and
    /// the moderator can only end the game.
    pub async fn start_game<S: AsRef<str>>(
        &mut self,
        team_count: usize,
        names: &[S],
    ) -> Result<&GameState, GameError> {
        self.state = self
            .state
            .try_start_game(team_count, names)
            .inspect_err(log_ignored)?;

        let question = self
            .fetch()
            .await
            .inspect_err(|e| error!("Game start stalled while loading: {e}"))?;
        self.state = self.state.try_install_question(question)?;

        self.events.push_back(GameEvent::GameStarted {
            teams: self.state.teams().iter().map(|t| t.name.clone()).collect(),
        });
        self.push_round_started();
        Ok(&self.state)
    }

    /// Loads the next question and opens a new round.
    ///
    /// # Errors
    ///
    /// Rejected outside face-off and round over. If no question can be
    /// had, the previous round is restored.
    pub async fn advance_round(&mut self) -> Result<&GameState, GameError> {
        let previous = self.state.clone();
        self.state = self.state.try_begin_round().inspect_err(log_ignored)?;

        match self.fetch().await {
            Ok(question) => {
                self.state = self.state.try_install_question(question)?;
                self.push_round_started();
                Ok(&self.state)
            }
            Err(e) => {
                error!("Next round failed, keeping round {}: {e}", previous.round_number());
                self.state = previous;
                Err(e)
            }
        }
    }

    /// # Errors
    ///
    /// When the reveal is not possible; the state is unchanged.
    pub fn reveal_answer(&mut self, id: &AnswerId) -> Result<&GameState, GameError> {
        let next = self.state.try_reveal_answer(id).inspect_err(log_ignored)?;
        if let Some(answer) = next.current_question().and_then(|q| q.answer(id)) {
            self.events.push_back(GameEvent::AnswerRevealed {
                text: answer.text.clone(),
                points: answer.points,
            });
        }
        self.state = next;
        Ok(&self.state)
    }

    /// Reveals by board slot, counted from zero.
    ///
    /// # Errors
    ///
    /// When the slot is empty or the reveal is not possible.
    pub fn reveal_slot(&mut self, slot: usize) -> Result<&GameState, GameError> {
        let id = self
            .state
            .answer_id_at(slot)
            .cloned()
            .ok_or(GameError::UnknownSlot(slot))
            .inspect_err(log_ignored)?;
        self.reveal_answer(&id)
    }

    /// Counts a strike and raises the strike flash.
    ///
    /// # Errors
    ///
    /// Outside face-off.
    pub fn register_strike(&mut self) -> Result<StrikeFlash, GameError> {
        self.state = self.state.try_register_strike().inspect_err(log_ignored)?;
        let strikes = self.state.current_strikes();
        self.events.push_back(GameEvent::StrikeRegistered { strikes });
        Ok(self.strike_signal.fire(strikes))
    }

    /// # Errors
    ///
    /// Outside face-off and round over.
    pub fn award_points(&mut self, team_id: TeamId) -> Result<&GameState, GameError> {
        let points = self.state.round_score();
        let next = self
            .state
            .try_award_points(team_id)
            .inspect_err(log_ignored)?;
        let event = match next.team(team_id) {
            Some(team) => GameEvent::PointsAwarded {
                team: team.name.clone(),
                points,
            },
            None => GameEvent::RoundClosed,
        };
        self.events.push_back(event);
        self.state = next;
        Ok(&self.state)
    }

    /// # Errors
    ///
    /// During setup.
    pub fn end_game(&mut self) -> Result<&GameState, GameError> {
        let already_over = self.state.phase() == GamePhase::GameOver;
        self.state = self.state.try_end_game().inspect_err(log_ignored)?;
        if !already_over {
            // No winner for a game that never got a question on the board.
            let winner = self
                .state
                .current_question()
                .and_then(|_| self.state.winner().ok())
                .map(|team| team.name.clone());
            self.events.push_back(GameEvent::GameEnded { winner });
        }
        Ok(&self.state)
    }

    /// # Errors
    ///
    /// Unless the game is over.
    pub fn full_reset(&mut self) -> Result<&GameState, GameError> {
        self.state = self.state.try_full_reset().inspect_err(log_ignored)?;
        if let Some(flash) = self.strike_signal.pending() {
            self.strike_signal.acknowledge(flash.generation);
        }
        self.events.push_back(GameEvent::GameReset);
        Ok(&self.state)
    }

    /// # Errors
    ///
    /// With no teams in play.
    pub fn winner(&self) -> Result<&Team, GameError> {
        self.state.winner()
    }
}
