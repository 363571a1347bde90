//! Question sourcing: a remote generator with a local fallback pool.
//!
//! This module implements:
//! - [`QuestionProvider`]: the total "give me a question" capability the
//!   game depends on
//! - [`QuestionGenerator`]: the fallible remote capability
//! - [`QuestionService`]: generator first, [`FallbackPool`] on any failure
//!
//! ## Example
//!
//! ```
//! use survey_says::provider::{QuestionProvider, QuestionService};
//!
//! # async fn example() {
//! let provider = QuestionService::offline();
//! let question = provider.fetch_question(&[]).await;
//! assert_eq!(question.answers().len(), 4);
//! # }
//! ```

pub mod config;
pub mod errors;
pub mod pool;
pub mod remote;

pub use config::GeneratorConfig;
pub use errors::{ConfigError, GeneratorError, GeneratorResult, PoolError};
pub use pool::FallbackPool;
pub use remote::{CandidateAnswer, CandidateQuestion, LlmGenerator};

use async_trait::async_trait;
use log::{info, warn};
use std::sync::Arc;

use crate::game::entities::Question;

/// Source of questions for the game. Implementations must always produce
/// a question; there is no error path.
#[async_trait]
pub trait QuestionProvider: Send + Sync {
    /// A question whose prompt is not in `excluded`, when one can be found.
    async fn fetch_question(&self, excluded: &[String]) -> Question;
}

/// Remote question writer. Any error sends the caller to the fallback pool.
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    async fn generate(&self, excluded: &[String]) -> GeneratorResult<Question>;
}

/// The game's question provider.
#[derive(Clone)]
pub struct QuestionService {
    generator: Option<Arc<dyn QuestionGenerator>>,
    pool: FallbackPool,
}

impl QuestionService {
    #[must_use]
    pub fn new(generator: Option<Arc<dyn QuestionGenerator>>, pool: FallbackPool) -> Self {
        Self { generator, pool }
    }

    /// Fallback pool only.
    #[must_use]
    pub fn offline() -> Self {
        Self::new(None, FallbackPool::default())
    }

    /// Builds the service from optional generator settings. A missing
    /// config or a client that can't be built both mean offline play.
    #[must_use]
    pub fn from_config(config: Option<GeneratorConfig>) -> Self {
        let Some(config) = config else {
            warn!("No question generator configured, using fallback pool only");
            return Self::offline();
        };

        match LlmGenerator::new(config) {
            Ok(generator) => {
                info!("Questions from {} at {}", generator.config().model, generator.config().api_base);
                Self::new(Some(Arc::new(generator)), FallbackPool::default())
            }
            Err(e) => {
                warn!("Question generator unavailable ({e}), using fallback pool only");
                Self::offline()
            }
        }
    }

    pub fn is_online(&self) -> bool {
        self.generator.is_some()
    }

    pub fn pool(&self) -> &FallbackPool {
        &self.pool
    }
}

#[async_trait]
impl QuestionProvider for QuestionService {
    async fn fetch_question(&self, excluded: &[String]) -> Question {
        if let Some(generator) = &self.generator {
            match generator.generate(excluded).await {
                Ok(question) => return question,
                Err(e) => warn!("Question generator failed, using fallback pool: {e}"),
            }
        }
        self.pool.pick_random(excluded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entities::{Answer, AnswerId};
    use std::sync::Mutex;

    /// Generator that replays scripted results and records what it was asked.
    struct Scripted {
        results: Mutex<Vec<GeneratorResult<Question>>>,
        calls: Mutex<Vec<Vec<String>>>,
    }

    impl Scripted {
        fn new(results: Vec<GeneratorResult<Question>>) -> Arc<Self> {
            Arc::new(Self {
                results: Mutex::new(results),
                calls: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl QuestionGenerator for Scripted {
        async fn generate(&self, excluded: &[String]) -> GeneratorResult<Question> {
            self.calls.lock().unwrap().push(excluded.to_vec());
            self.results.lock().unwrap().remove(0)
        }
    }

    fn remote_question() -> Question {
        Question::new(
            "Name a board game.",
            [
                Answer::new(AnswerId::random(), "Chess", 40),
                Answer::new(AnswerId::random(), "Monopoly", 30),
                Answer::new(AnswerId::random(), "Scrabble", 20),
                Answer::new(AnswerId::random(), "Risk", 10),
            ],
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_remote_success_used() {
        let generator = Scripted::new(vec![Ok(remote_question())]);
        let service = QuestionService::new(Some(generator.clone()), FallbackPool::default());
        let excluded = vec!["Name a pet.".to_string()];

        let question = service.fetch_question(&excluded).await;
        assert_eq!(question.text, "Name a board game.");
        assert_eq!(generator.calls.lock().unwrap().as_slice(), [excluded]);
    }

    #[tokio::test]
    async fn test_remote_failure_falls_back() {
        let generator = Scripted::new(vec![Err(GeneratorError::TooFewAnswers(2))]);
        let service = QuestionService::new(Some(generator), FallbackPool::default());

        let question = service.fetch_question(&[]).await;
        assert!(service.pool().prompts().any(|prompt| prompt == question.text));
    }

    #[tokio::test]
    async fn test_offline_uses_pool() {
        let service = QuestionService::offline();
        assert!(!service.is_online());
        let question = service.fetch_question(&[]).await;
        assert!(service.pool().prompts().any(|prompt| prompt == question.text));
    }

    #[tokio::test]
    async fn test_offline_with_everything_excluded() {
        let service = QuestionService::offline();
        let excluded: Vec<String> = service.pool().prompts().map(str::to_string).collect();
        let question = service.fetch_question(&excluded).await;
        assert_eq!(question.answers().len(), 4);
        assert!(excluded.contains(&question.text));
    }

    #[test]
    fn test_from_config_without_settings() {
        assert!(!QuestionService::from_config(None).is_online());
    }

    #[test]
    fn test_from_config_with_settings() {
        let service = QuestionService::from_config(Some(GeneratorConfig::new("sk-test")));
        assert!(service.is_online());
    }
}
