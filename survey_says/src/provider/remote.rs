//! OpenAI-compatible chat completions client that writes survey questions.

use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};

use super::{
    QuestionGenerator,
    config::GeneratorConfig,
    errors::{GeneratorError, GeneratorResult},
};
use crate::game::{
    constants::{ANSWER_SLOTS, SLOT_POINTS},
    entities::{Answer, AnswerId, Question},
};

const SYSTEM_PROMPT: &str = "\
You write questions for a survey party game in the style of Family Feud. \
Reply with a single JSON object of the form \
{\"question\": string, \"answers\": [{\"text\": string, \"points\": number}]} \
and nothing else. \"points\" is the estimated share of people who would give \
that answer.";

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    max_tokens: u32,
    response_format: ResponseFormat,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

/// Answer as the generator returned it. `points` is only a sort key.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CandidateAnswer {
    pub text: String,
    pub points: f64,
}

/// Question as the generator returned it, before validation.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CandidateQuestion {
    pub question: String,
    pub answers: Vec<CandidateAnswer>,
}

impl CandidateQuestion {
    /// Parses the JSON text of a completion.
    ///
    /// # Errors
    ///
    /// If the text is not the expected JSON shape.
    pub fn parse(content: &str) -> GeneratorResult<Self> {
        Ok(serde_json::from_str(content.trim())?)
    }

    /// Validates the candidate and turns it into a board.
    ///
    /// Answers are ranked by descending score (ties keep their order, scores
    /// that aren't finite rank last), cut to four and re-scored with the
    /// fixed slot points. Only the four kept answers are checked. Each
    /// answer gets a fresh id.
    ///
    /// # Errors
    ///
    /// On a blank prompt, fewer than four answers, or a kept answer that is
    /// blank or has a non-finite score. A short list is never padded.
    pub fn into_question(self) -> GeneratorResult<Question> {
        let prompt = self.question.trim();
        if prompt.is_empty() {
            return Err(GeneratorError::EmptyPrompt);
        }
        if self.answers.len() < ANSWER_SLOTS {
            return Err(GeneratorError::TooFewAnswers(self.answers.len()));
        }

        let mut ranked = self.answers;
        ranked.sort_by(|a, b| rank_key(b).total_cmp(&rank_key(a)));
        ranked.truncate(ANSWER_SLOTS);
        for (slot, answer) in ranked.iter().enumerate() {
            if answer.text.trim().is_empty() {
                return Err(GeneratorError::EmptyAnswer(slot));
            }
            if !answer.points.is_finite() {
                return Err(GeneratorError::InvalidScore(slot));
            }
        }

        let answers = std::array::from_fn(|slot| {
            Answer::new(AnswerId::random(), ranked[slot].text.trim(), SLOT_POINTS[slot])
        });
        Ok(Question::new(prompt, answers)?)
    }
}

fn rank_key(answer: &CandidateAnswer) -> f64 {
    if answer.points.is_finite() {
        answer.points
    } else {
        f64::NEG_INFINITY
    }
}

/// Task text sent as the user message.
pub fn build_prompt(audience: &str, excluded: &[String]) -> String {
    let mut prompt = format!(
        "Write one survey question that 100 people from {audience} could answer. \
         It can be about daily life, habits, stereotypes or small annoyances; \
         relatable and a little cheeky is good. Give exactly {ANSWER_SLOTS} answers, \
         most popular first."
    );
    if !excluded.is_empty() {
        prompt.push_str("\n\nDo not repeat any of these questions: ");
        prompt.push_str(&excluded.join("; "));
    }
    prompt
}

/// Generator backed by a chat completions endpoint.
#[derive(Clone, Debug)]
pub struct LlmGenerator {
    config: GeneratorConfig,
    client: reqwest::Client,
}

impl LlmGenerator {
    /// Create a new generator
    ///
    /// # Errors
    ///
    /// If the HTTP client can't be built.
    pub fn new(config: GeneratorConfig) -> GeneratorResult<Self> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    async fn complete(&self, user_prompt: &str) -> GeneratorResult<String> {
        let request = CompletionRequest {
            model: &self.config.model,
            messages: vec![
                Message {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                Message {
                    role: "user",
                    content: user_prompt,
                },
            ],
            max_tokens: self.config.max_tokens,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.api_base))
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("Failed to read error response: {e}"));
            return Err(GeneratorError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let completion: CompletionResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(GeneratorError::EmptyCompletion)
    }
}

#[async_trait]
impl QuestionGenerator for LlmGenerator {
    async fn generate(&self, excluded: &[String]) -> GeneratorResult<Question> {
        let prompt = build_prompt(&self.config.audience, excluded);
        debug!(
            "Requesting question from {} ({} excluded)",
            self.config.model,
            excluded.len()
        );
        let content = self.complete(&prompt).await?;
        CandidateQuestion::parse(&content)?.into_question()
    }
}
