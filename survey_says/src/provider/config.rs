//! Remote generator configuration.
//!
//! Consolidates all environment variable reads for the question generator.

use log::debug;
use std::{fmt, time::Duration};

use super::errors::ConfigError;

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_MAX_TOKENS: u32 = 512;
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;
pub const DEFAULT_AUDIENCE: &str = "a general adult audience at a party";

/// Settings for the OpenAI-compatible question generator
///
/// `Debug` output leaves the API key out.
#[derive(Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// API key sent as a bearer token
    pub api_key: String,
    /// Base URL of the chat completions API, without trailing slash
    pub api_base: String,
    /// Model name
    pub model: String,
    /// Completion token limit
    pub max_tokens: u32,
    /// Whole-request timeout enforced by the HTTP client
    pub timeout: Duration,
    /// Who the questions are written for; goes into the prompt
    pub audience: String,
}

impl GeneratorConfig {
    /// Config with defaults for everything but the key.
    #[must_use]
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            audience: DEFAULT_AUDIENCE.to_string(),
        }
    }

    /// Load configuration from environment variables
    ///
    /// # Returns
    ///
    /// * `Ok(None)` - No API key set; the game runs on the fallback pool
    /// * `Ok(Some(config))` - Remote generation is configured
    ///
    /// # Errors
    ///
    /// Returns error if a numeric variable is present but invalid
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`GeneratorConfig::from_env`], reading variables through
    /// `lookup`.
    ///
    /// # Errors
    ///
    /// Returns error if a numeric variable is present but invalid
    pub fn from_lookup<F>(lookup: F) -> Result<Option<Self>, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let Some(api_key) = non_blank("SURVEY_API_KEY").or_else(|| non_blank("OPENAI_API_KEY"))
        else {
            debug!("No API key found");
            return Ok(None);
        };

        let mut config = Self::new(api_key.trim());
        if let Some(api_base) = non_blank("SURVEY_API_BASE") {
            config.api_base = api_base.trim().trim_end_matches('/').to_string();
        }
        if let Some(model) = non_blank("SURVEY_MODEL") {
            config.model = model.trim().to_string();
        }
        if let Some(audience) = non_blank("SURVEY_AUDIENCE") {
            config.audience = audience.trim().to_string();
        }
        config.max_tokens = parse_or(&non_blank, "SURVEY_MAX_TOKENS", DEFAULT_MAX_TOKENS)?;

        let timeout_secs = parse_or(&non_blank, "SURVEY_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                var: "SURVEY_TIMEOUT_SECS".to_string(),
                reason: "must be at least 1 second".to_string(),
            });
        }
        config.timeout = Duration::from_secs(timeout_secs);

        Ok(Some(config))
    }
}

impl fmt::Debug for GeneratorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorConfig")
            .field("api_key", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("timeout", &self.timeout)
            .field("audience", &self.audience)
            .finish()
    }
}

fn parse_or<F, T>(lookup: &F, var: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var: var.to_string(),
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}
