//! Round and game state machine.
//!
//! Every operation takes the current [`GameState`] by reference and returns
//! the next one; nothing is written in place. Legality of each operation is
//! decided in one place, [`GamePhase::allows`].

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::constants::{MAX_DISPLAYED_STRIKES, MAX_TEAMS, MIN_TEAMS};
use super::entities::{AnswerId, Points, Question, Team, TeamId};

/// Phase of a game.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GamePhase {
    /// Choosing teams.
    Setup,
    /// Waiting on the question provider.
    Loading,
    /// Teams are guessing.
    FaceOff,
    /// Board is closed, points can still be moved around.
    RoundOver,
    /// Final scores are in.
    GameOver,
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Setup => "setup",
            Self::Loading => "loading",
            Self::FaceOff => "face-off",
            Self::RoundOver => "round over",
            Self::GameOver => "game over",
        };
        write!(f, "{repr}")
    }
}

/// Moderator operations that are subject to the phase guard.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Operation {
    StartGame,
    RevealAnswer,
    RegisterStrike,
    AwardPoints,
    AdvanceRound,
    EndGame,
    FullReset,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::StartGame => "start a game",
            Self::RevealAnswer => "reveal an answer",
            Self::RegisterStrike => "register a strike",
            Self::AwardPoints => "award points",
            Self::AdvanceRound => "advance the round",
            Self::EndGame => "end the game",
            Self::FullReset => "reset the game",
        };
        write!(f, "{repr}")
    }
}

impl GamePhase {
    /// The transition table. Anything not listed is rejected.
    ///
    /// Revealing and awarding stay open in [`GamePhase::RoundOver`] so the
    /// moderator can settle steals after the board is cleared. Ending an
    /// already finished game is allowed and changes nothing.
    #[must_use]
    pub const fn allows(self, operation: Operation) -> bool {
        use GamePhase as P;
        use Operation as O;
        matches!(
            (self, operation),
            (P::Setup, O::StartGame)
                | (
                    P::FaceOff | P::RoundOver,
                    O::RevealAnswer | O::AwardPoints | O::AdvanceRound
                )
                | (P::FaceOff, O::RegisterStrike)
                | (
                    P::Loading | P::FaceOff | P::RoundOver | P::GameOver,
                    O::EndGame
                )
                | (P::GameOver, O::FullReset)
        )
    }
}

/// Errors that can occur during game operations
#[derive(Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum GameError {
    #[error("can't {operation} during {phase}")]
    InvalidOperationForPhase {
        operation: Operation,
        phase: GamePhase,
    },
    #[error("need 2 to 4 teams, got {0}")]
    InvalidTeamCount(usize),
    #[error("answer {0} is not on the board")]
    UnknownAnswer(AnswerId),
    #[error("answer {0} is already revealed")]
    AnswerAlreadyRevealed(AnswerId),
    #[error("no answer in slot {0}")]
    UnknownSlot(usize),
    #[error("no question on the board")]
    NoCurrentQuestion,
    #[error("no question was requested (phase is {0})")]
    NotLoading(GamePhase),
    #[error("no teams in play")]
    NoTeams,
    #[error("couldn't get a question: {0}")]
    QuestionUnavailable(String),
    #[error("game session is closed")]
    SessionClosed,
}

/// Events that occur during gameplay
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum GameEvent {
    GameStarted { teams: Vec<String> },
    RoundStarted { round: u32, prompt: String },
    AnswerRevealed { text: String, points: Points },
    StrikeRegistered { strikes: u32 },
    PointsAwarded { team: String, points: Points },
    RoundClosed,
    GameEnded { winner: Option<String> },
    GameReset,
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::GameStarted { teams } => format!("game started with {}", teams.join(", ")),
            Self::RoundStarted { round, prompt } => format!("round {round}: {prompt}"),
            Self::AnswerRevealed { text, points } => format!("revealed {text} for {points}"),
            Self::StrikeRegistered { strikes } => format!("strike {strikes}"),
            Self::PointsAwarded { team, points } => format!("{team} won {points} points"),
            Self::RoundClosed => "round closed without a winner".to_string(),
            Self::GameEnded {
                winner: Some(winner),
            } => format!("game over, {winner} wins"),
            Self::GameEnded { winner: None } => "game over".to_string(),
            Self::GameReset => "back to setup".to_string(),
        };
        write!(f, "{repr}")
    }
}

/// Complete state of one game.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GameState {
    phase: GamePhase,
    current_question: Option<Question>,
    teams: Vec<Team>,
    /// Not capped. See [`GameState::displayed_strikes`].
    current_strikes: u32,
    round_score: Points,
    /// Prompts used so far this game, oldest first.
    history: Vec<String>,
    round_number: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Setup,
            current_question: None,
            teams: Vec::new(),
            current_strikes: 0,
            round_score: 0,
            history: Vec::new(),
            round_number: 1,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_question.as_ref()
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|team| team.id == id)
    }

    pub fn current_strikes(&self) -> u32 {
        self.current_strikes
    }

    pub fn displayed_strikes(&self) -> u32 {
        self.current_strikes.min(MAX_DISPLAYED_STRIKES)
    }

    pub fn round_score(&self) -> Points {
        self.round_score
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    /// Id of the answer in board slot `slot`, counted from zero.
    pub fn answer_id_at(&self, slot: usize) -> Option<&AnswerId> {
        self.current_question
            .as_ref()
            .and_then(|question| question.answers().get(slot))
            .map(|answer| &answer.id)
    }

    fn guard(&self, operation: Operation) -> Result<(), GameError> {
        if self.phase.allows(operation) {
            Ok(())
        } else {
            Err(GameError::InvalidOperationForPhase {
                operation,
                phase: self.phase,
            })
        }
    }

    fn or_unchanged(&self, result: Result<Self, GameError>) -> Self {
        result.unwrap_or_else(|error| {
            debug!("Ignored operation: {error}");
            self.clone()
        })
    }

    /// First half of starting a game: builds the roster and enters
    /// [`GamePhase::Loading`]. Names past `team_count` are ignored and
    /// missing or blank names get a "Team N" placeholder.
    ///
    /// # Errors
    ///
    /// Outside setup, or with a team count other than 2, 3 or 4.
    pub fn try_start_game<S: AsRef<str>>(
        &self,
        team_count: usize,
        names: &[S],
    ) -> Result<Self, GameError> {
        self.guard(Operation::StartGame)?;
        if !(MIN_TEAMS..=MAX_TEAMS).contains(&team_count) {
            return Err(GameError::InvalidTeamCount(team_count));
        }

        let teams = (0..team_count)
            .map(|position| Team::new(position, names.get(position).map_or("", |name| name.as_ref())))
            .collect();
        Ok(Self {
            phase: GamePhase::Loading,
            teams,
            ..Self::new()
        })
    }

    /// First half of advancing: enters [`GamePhase::Loading`] while the
    /// previous board stays up.
    ///
    /// # Errors
    ///
    /// Outside face-off and round over.
    pub fn try_begin_round(&self) -> Result<Self, GameError> {
        self.guard(Operation::AdvanceRound)?;
        let mut next = self.clone();
        next.phase = GamePhase::Loading;
        Ok(next)
    }

    /// Second half of starting or advancing: puts `question` on the board
    /// and opens the face-off. The first question of a game is round 1.
    ///
    /// # Errors
    ///
    /// When no question was requested.
    pub fn try_install_question(&self, question: Question) -> Result<Self, GameError> {
        if self.phase != GamePhase::Loading {
            return Err(GameError::NotLoading(self.phase));
        }

        let round_number = if self.current_question.is_some() {
            self.round_number + 1
        } else {
            1
        };
        let mut history = self.history.clone();
        history.push(question.text.clone());
        info!("Round {round_number} started: {}", question.text);

        Ok(Self {
            phase: GamePhase::FaceOff,
            current_question: Some(question),
            teams: self.teams.clone(),
            current_strikes: 0,
            round_score: 0,
            history,
            round_number,
        })
    }

    /// # Errors
    ///
    /// Outside face-off and round over, or when the id is unknown or
    /// already revealed.
    pub fn try_reveal_answer(&self, id: &AnswerId) -> Result<Self, GameError> {
        self.guard(Operation::RevealAnswer)?;
        let mut question = self
            .current_question
            .clone()
            .ok_or(GameError::NoCurrentQuestion)?;
        match question.answer(id) {
            None => return Err(GameError::UnknownAnswer(id.clone())),
            Some(answer) if answer.is_revealed() => {
                return Err(GameError::AnswerAlreadyRevealed(id.clone()));
            }
            Some(_) => {}
        }

        let points = question
            .reveal(id)
            .ok_or_else(|| GameError::UnknownAnswer(id.clone()))?;
        let mut next = self.clone();
        if question.all_revealed() {
            next.phase = GamePhase::RoundOver;
        }
        next.round_score += points;
        next.current_question = Some(question);
        Ok(next)
    }

    /// Reveals an answer, or returns the state unchanged if the reveal is
    /// not possible.
    #[must_use]
    pub fn reveal_answer(&self, id: &AnswerId) -> Self {
        self.or_unchanged(self.try_reveal_answer(id))
    }

    /// # Errors
    ///
    /// Outside face-off.
    pub fn try_register_strike(&self) -> Result<Self, GameError> {
        self.guard(Operation::RegisterStrike)?;
        let mut next = self.clone();
        next.current_strikes += 1;
        Ok(next)
    }

    #[must_use]
    pub fn register_strike(&self) -> Self {
        self.or_unchanged(self.try_register_strike())
    }

    /// Moves the round pot to `team_id` and closes the round. An unknown
    /// team still closes the round and empties the pot.
    ///
    /// # Errors
    ///
    /// Outside face-off and round over.
    pub fn try_award_points(&self, team_id: TeamId) -> Result<Self, GameError> {
        self.guard(Operation::AwardPoints)?;
        let mut next = self.clone();
        let points = next.round_score;
        match next.teams.iter_mut().find(|team| team.id == team_id) {
            Some(team) => {
                team.score += points;
                info!("{} awarded {points} points", team.name);
            }
            None => warn!("Award to unknown {team_id}, closing round without scoring"),
        }
        next.phase = GamePhase::RoundOver;
        next.round_score = 0;
        Ok(next)
    }

    #[must_use]
    pub fn award_points(&self, team_id: TeamId) -> Self {
        self.or_unchanged(self.try_award_points(team_id))
    }

    /// # Errors
    ///
    /// During setup.
    pub fn try_end_game(&self) -> Result<Self, GameError> {
        self.guard(Operation::EndGame)?;
        let mut next = self.clone();
        next.phase = GamePhase::GameOver;
        Ok(next)
    }

    #[must_use]
    pub fn end_game(&self) -> Self {
        self.or_unchanged(self.try_end_game())
    }

    /// Back to setup with an empty history. Teams and scores go too.
    ///
    /// # Errors
    ///
    /// Unless the game is over.
    pub fn try_full_reset(&self) -> Result<Self, GameError> {
        self.guard(Operation::FullReset)?;
        Ok(Self::new())
    }

    #[must_use]
    pub fn full_reset(&self) -> Self {
        self.or_unchanged(self.try_full_reset())
    }

    /// Team with the highest score; ties go to the team listed first.
    ///
    /// # Errors
    ///
    /// With an empty roster, which only happens if the game was never
    /// started.
    pub fn winner(&self) -> Result<&Team, GameError> {
        self.teams
            .iter()
            .reduce(|best, team| if team.score > best.score { team } else { best })
            .ok_or(GameError::NoTeams)
    }

    /// Teams from highest to lowest score, roster order on ties.
    pub fn standings(&self) -> Vec<&Team> {
        let mut standings: Vec<&Team> = self.teams.iter().collect();
        standings.sort_by(|a, b| b.score.cmp(&a.score));
        standings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entities::Answer;

    fn board(prompt: &str) -> Question {
        Question::new(
            prompt,
            [
                Answer::new("s1".into(), "First", 40),
                Answer::new("s2".into(), "Second", 30),
                Answer::new("s3".into(), "Third", 20),
                Answer::new("s4".into(), "Fourth", 10),
            ],
        )
        .unwrap()
    }

    fn face_off(names: &[&str]) -> GameState {
        GameState::new()
            .try_start_game(names.len(), names)
            .unwrap()
            .try_install_question(board("Name a fruit."))
            .unwrap()
    }

    fn with_scores(state: GameState, scores: &[Points]) -> GameState {
        let mut state = state;
        for (team, score) in state.teams.iter_mut().zip(scores) {
            team.score = *score;
        }
        state
    }

    // === Transition Table Tests ===

    #[test]
    fn test_transition_table() {
        use GamePhase as P;
        use Operation as O;

        assert!(P::Setup.allows(O::StartGame));
        assert!(!P::Loading.allows(O::StartGame));
        assert!(!P::GameOver.allows(O::StartGame));

        for op in [O::RevealAnswer, O::RegisterStrike, O::AwardPoints, O::AdvanceRound] {
            assert!(!P::Setup.allows(op));
            assert!(!P::Loading.allows(op));
            assert!(!P::GameOver.allows(op));
            assert!(P::FaceOff.allows(op));
        }

        assert!(P::RoundOver.allows(O::RevealAnswer));
        assert!(P::RoundOver.allows(O::AwardPoints));
        assert!(P::RoundOver.allows(O::AdvanceRound));
        assert!(!P::RoundOver.allows(O::RegisterStrike));

        assert!(!P::Setup.allows(O::EndGame));
        assert!(P::Loading.allows(O::EndGame));
        assert!(P::GameOver.allows(O::EndGame));

        assert!(P::GameOver.allows(O::FullReset));
        assert!(!P::RoundOver.allows(O::FullReset));
    }

    // === Start Game Tests ===

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.phase(), GamePhase::Setup);
        assert!(state.current_question().is_none());
        assert_eq!(state.round_number(), 1);
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_start_game_builds_roster_and_loads() {
        let state = GameState::new()
            .try_start_game(3, &["Alfa", "", "Gamma"])
            .unwrap();
        assert_eq!(state.phase(), GamePhase::Loading);
        assert!(state.current_question().is_none());
        let names: Vec<&str> = state.teams().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Alfa", "Team 2", "Gamma"]);
        assert!(state.teams().iter().all(|t| t.score() == 0));
    }

    #[test]
    fn test_start_game_missing_names() {
        let state = GameState::new().try_start_game(2, &["Solo"]).unwrap();
        assert_eq!(state.teams()[1].name, "Team 2");
    }

    #[test]
    fn test_start_game_rejects_team_count() {
        assert_eq!(
            GameState::new().try_start_game(1, &["a"]),
            Err(GameError::InvalidTeamCount(1))
        );
        assert_eq!(
            GameState::new().try_start_game::<&str>(5, &[]),
            Err(GameError::InvalidTeamCount(5))
        );
    }

    #[test]
    fn test_start_game_outside_setup() {
        let state = face_off(&["Alfa", "Beta"]);
        assert!(matches!(
            state.try_start_game(2, &["x", "y"]),
            Err(GameError::InvalidOperationForPhase {
                operation: Operation::StartGame,
                phase: GamePhase::FaceOff,
            })
        ));
    }

    #[test]
    fn test_first_question_opens_round_one() {
        let state = face_off(&["Alfa", "Beta"]);
        assert_eq!(state.phase(), GamePhase::FaceOff);
        assert_eq!(state.round_number(), 1);
        assert_eq!(state.history(), ["Name a fruit."]);
        assert_eq!(state.round_score(), 0);
        assert_eq!(state.current_strikes(), 0);
    }

    #[test]
    fn test_install_question_requires_loading() {
        let state = GameState::new();
        assert_eq!(
            state.try_install_question(board("x")),
            Err(GameError::NotLoading(GamePhase::Setup))
        );
    }

    // === Reveal Tests ===

    #[test]
    fn test_reveal_adds_points() {
        let state = face_off(&["Alfa", "Beta"]).reveal_answer(&"s2".into());
        assert_eq!(state.round_score(), 30);
        assert_eq!(state.phase(), GamePhase::FaceOff);
        assert!(state.current_question().unwrap().answers()[1].is_revealed());
    }

    #[test]
    fn test_reveal_all_ends_round() {
        let mut state = face_off(&["Alfa", "Beta"]);
        for id in ["s4", "s1", "s3", "s2"] {
            state = state.reveal_answer(&id.into());
        }
        assert_eq!(state.phase(), GamePhase::RoundOver);
        assert_eq!(state.round_score(), 100);
    }

    #[test]
    fn test_reveal_twice_is_noop() {
        let once = face_off(&["Alfa", "Beta"]).reveal_answer(&"s1".into());
        assert_eq!(
            once.try_reveal_answer(&"s1".into()),
            Err(GameError::AnswerAlreadyRevealed("s1".into()))
        );
        assert_eq!(once.reveal_answer(&"s1".into()), once);
    }

    #[test]
    fn test_reveal_unknown_is_noop() {
        let state = face_off(&["Alfa", "Beta"]);
        assert_eq!(
            state.try_reveal_answer(&"nope".into()),
            Err(GameError::UnknownAnswer("nope".into()))
        );
        assert_eq!(state.reveal_answer(&"nope".into()), state);
    }

    #[test]
    fn test_reveal_rejected_while_loading() {
        let state = face_off(&["Alfa", "Beta"]).try_begin_round().unwrap();
        assert_eq!(state.reveal_answer(&"s1".into()), state);
    }

    #[test]
    fn test_reveal_after_award_keeps_scoring() {
        let state = face_off(&["Alfa", "Beta"])
            .reveal_answer(&"s1".into())
            .award_points(TeamId::new(0))
            .reveal_answer(&"s2".into());
        assert_eq!(state.phase(), GamePhase::RoundOver);
        assert_eq!(state.round_score(), 30);

        let state = state.award_points(TeamId::new(1));
        assert_eq!(state.teams()[0].score(), 40);
        assert_eq!(state.teams()[1].score(), 30);
    }

    // === Strike Tests ===

    #[test]
    fn test_strikes_keep_counting() {
        let mut state = face_off(&["Alfa", "Beta"]);
        for _ in 0..5 {
            state = state.register_strike();
        }
        assert_eq!(state.current_strikes(), 5);
        assert_eq!(state.displayed_strikes(), 3);
        assert_eq!(state.phase(), GamePhase::FaceOff);
    }

    #[test]
    fn test_strike_rejected_after_round() {
        let state = face_off(&["Alfa", "Beta"]).award_points(TeamId::new(0));
        assert!(state.try_register_strike().is_err());
        assert_eq!(state.register_strike().current_strikes(), 0);
    }

    // === Award Tests ===

    #[test]
    fn test_award_moves_pot() {
        let state = face_off(&["Alfa", "Beta"])
            .reveal_answer(&"s1".into())
            .reveal_answer(&"s3".into())
            .award_points(TeamId::new(1));
        assert_eq!(state.teams()[0].score(), 0);
        assert_eq!(state.teams()[1].score(), 60);
        assert_eq!(state.round_score(), 0);
        assert_eq!(state.phase(), GamePhase::RoundOver);
    }

    #[test]
    fn test_award_unknown_team_still_closes_round() {
        let before = face_off(&["Alfa", "Beta"]).reveal_answer(&"s1".into());
        let after = before.award_points(TeamId::new(9));
        assert_eq!(after.phase(), GamePhase::RoundOver);
        assert_eq!(after.round_score(), 0);
        assert_eq!(after.teams(), before.teams());
    }

    #[test]
    fn test_award_rejected_after_game() {
        let state = face_off(&["Alfa", "Beta"])
            .reveal_answer(&"s1".into())
            .end_game();
        assert_eq!(state.award_points(TeamId::new(0)), state);
    }

    // === Round Advance Tests ===

    #[test]
    fn test_advance_round() {
        let state = face_off(&["Alfa", "Beta"])
            .register_strike()
            .reveal_answer(&"s1".into())
            .award_points(TeamId::new(0));
        let loading = state.try_begin_round().unwrap();
        assert_eq!(loading.phase(), GamePhase::Loading);
        assert!(loading.current_question().is_some());

        let next = loading.try_install_question(board("Name a color.")).unwrap();
        assert_eq!(next.phase(), GamePhase::FaceOff);
        assert_eq!(next.round_number(), 2);
        assert_eq!(next.current_strikes(), 0);
        assert_eq!(next.round_score(), 0);
        assert_eq!(next.history(), ["Name a fruit.", "Name a color."]);
        assert_eq!(next.teams()[0].score(), 40);
    }

    #[test]
    fn test_advance_rejected_in_setup_and_game_over() {
        assert!(GameState::new().try_begin_round().is_err());
        assert!(face_off(&["a", "b"]).end_game().try_begin_round().is_err());
    }

    // === End / Reset Tests ===

    #[test]
    fn test_end_game_idempotent() {
        let over = face_off(&["Alfa", "Beta"]).end_game();
        assert_eq!(over.phase(), GamePhase::GameOver);
        assert_eq!(over.try_end_game(), Ok(over.clone()));
    }

    #[test]
    fn test_end_game_rejected_in_setup() {
        assert!(GameState::new().try_end_game().is_err());
    }

    #[test]
    fn test_full_reset() {
        let state = face_off(&["Alfa", "Beta"]).end_game().full_reset();
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn test_full_reset_only_from_game_over() {
        let state = face_off(&["Alfa", "Beta"]);
        assert_eq!(state.full_reset(), state);
    }

    // === Winner Tests ===

    #[test]
    fn test_winner_highest_score() {
        let state = with_scores(face_off(&["Alfa", "Beta"]), &[100, 40]).end_game();
        assert_eq!(state.winner().unwrap().name, "Alfa");
    }

    #[test]
    fn test_winner_tie_goes_to_first() {
        let state = with_scores(face_off(&["Alfa", "Beta", "Gamma"]), &[10, 50, 50]);
        assert_eq!(state.winner().unwrap().name, "Beta");
    }

    #[test]
    fn test_winner_without_teams() {
        assert_eq!(GameState::new().winner(), Err(GameError::NoTeams));
    }

    #[test]
    fn test_standings_stable() {
        let state = with_scores(face_off(&["A", "B", "C", "D"]), &[20, 70, 20, 5]);
        let order: Vec<&str> = state.standings().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(order, ["B", "A", "C", "D"]);
    }

    #[test]
    fn test_answer_id_at() {
        let state = face_off(&["Alfa", "Beta"]);
        assert_eq!(state.answer_id_at(0), Some(&AnswerId::new("s1")));
        assert_eq!(state.answer_id_at(4), None);
        assert_eq!(GameState::new().answer_id_at(0), None);
    }

    #[test]
    fn test_event_display() {
        let event = GameEvent::PointsAwarded {
            team: "Alfa".to_string(),
            points: 100,
        };
        assert_eq!(event.to_string(), "Alfa won 100 points");
    }
}
