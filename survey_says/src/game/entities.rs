use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt};
use thiserror::Error;
use uuid::Uuid;

use super::constants::{ANSWER_SLOTS, TEAM_COLORS};

/// Type alias for board points. Team scores and round pots are both
/// counted in these.
pub type Points = u32;

/// Identifier of an answer, unique within its question.
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct AnswerId(String);

impl AnswerId {
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    /// A fresh random id for generated content.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnswerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for AnswerId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// One hidden answer on the board.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Answer {
    pub id: AnswerId,
    pub text: String,
    pub points: Points,
    pub(crate) revealed: bool,
}

impl Answer {
    #[must_use]
    pub fn new(id: AnswerId, text: &str, points: Points) -> Self {
        Self {
            id,
            text: text.to_string(),
            points,
            revealed: false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// Errors building a question
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum QuestionError {
    #[error("answer id {0} is used more than once")]
    DuplicateAnswerId(AnswerId),
}

/// A survey prompt with its four ranked answers. Slot order is the
/// popularity rank, so it is kept even when two answers carry equal points.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(try_from = "QuestionRepr")]
pub struct Question {
    pub text: String,
    answers: [Answer; ANSWER_SLOTS],
}

/// Unchecked wire shape of a [`Question`].
#[derive(Deserialize)]
struct QuestionRepr {
    text: String,
    answers: [Answer; ANSWER_SLOTS],
}

impl TryFrom<QuestionRepr> for Question {
    type Error = QuestionError;

    fn try_from(repr: QuestionRepr) -> Result<Self, Self::Error> {
        Self::new(&repr.text, repr.answers)
    }
}

impl Question {
    /// # Errors
    ///
    /// If two answers share an id.
    pub fn new(text: &str, answers: [Answer; ANSWER_SLOTS]) -> Result<Self, QuestionError> {
        let duplicate = {
            let mut seen = HashSet::new();
            answers
                .iter()
                .map(|answer| &answer.id)
                .find(|id| !seen.insert(*id))
                .cloned()
        };
        if let Some(id) = duplicate {
            return Err(QuestionError::DuplicateAnswerId(id));
        }
        Ok(Self::with_distinct_ids(text, answers))
    }

    /// For boards whose ids are distinct by construction.
    pub(crate) fn with_distinct_ids(text: &str, answers: [Answer; ANSWER_SLOTS]) -> Self {
        Self {
            text: text.to_string(),
            answers,
        }
    }

    pub fn answers(&self) -> &[Answer; ANSWER_SLOTS] {
        &self.answers
    }

    pub fn answer(&self, id: &AnswerId) -> Option<&Answer> {
        self.answers.iter().find(|answer| &answer.id == id)
    }

    pub fn all_revealed(&self) -> bool {
        self.answers.iter().all(Answer::is_revealed)
    }

    pub fn revealed_count(&self) -> usize {
        self.answers.iter().filter(|answer| answer.revealed).count()
    }

    /// Flips the answer to revealed and returns its points. `None` when the
    /// id is unknown or the answer is already showing.
    pub(crate) fn reveal(&mut self, id: &AnswerId) -> Option<Points> {
        let answer = self
            .answers
            .iter_mut()
            .find(|answer| &answer.id == id && !answer.revealed)?;
        answer.revealed = true;
        Some(answer.points)
    }
}

/// Display-only tag for a team. Carries no game meaning.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamColor {
    Blue,
    Red,
    Green,
    Purple,
}

impl TeamColor {
    /// Color for the team at `position` in the roster.
    #[must_use]
    pub fn for_position(position: usize) -> Self {
        TEAM_COLORS[position % TEAM_COLORS.len()]
    }
}

impl fmt::Display for TeamColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Blue => "blue",
            Self::Red => "red",
            Self::Green => "green",
            Self::Purple => "purple",
        };
        write!(f, "{repr}")
    }
}

/// Identifier of a team, unique within one game.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct TeamId(usize);

impl TeamId {
    #[must_use]
    pub const fn new(position: usize) -> Self {
        Self(position)
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "team-{}", self.0)
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub(crate) score: Points,
    pub color: TeamColor,
}

impl Team {
    /// Builds the team at roster `position`. A blank name falls back to
    /// "Team N" with N counted from one.
    #[must_use]
    pub fn new(position: usize, name: &str) -> Self {
        let trimmed = name.trim();
        let name = if trimmed.is_empty() {
            format!("Team {}", position + 1)
        } else {
            trimmed.to_string()
        };
        Self {
            id: TeamId::new(position),
            name,
            score: 0,
            color: TeamColor::for_position(position),
        }
    }

    pub fn score(&self) -> Points {
        self.score
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.score)
    }
}
