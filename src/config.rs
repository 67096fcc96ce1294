//! Runtime configuration
//!
//! All settings are read from the environment exactly once, at startup, and
//! handed around as an explicit [`Config`] value. Nothing else in the crate
//! touches environment variables.

use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required setting is absent
    #[error("required setting {0} is not set")]
    Missing(&'static str),

    /// A setting has an unusable value
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Connection settings for the graph store, plus optional LLM settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the graph store HTTP API
    pub uri: String,
    /// Basic-auth username
    pub username: String,
    /// Basic-auth password
    pub password: String,
    /// LLM settings; `None` disables natural-language querying
    pub llm: Option<LlmConfig>,
}

/// Settings for the LLM call-outs used by natural-language querying.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// The LLM provider to use
    pub provider: LlmProvider,
    /// Model name (e.g. "gpt-4o", "llama3")
    pub model: String,
    /// API key (not needed for Ollama)
    pub api_key: Option<String>,
    /// API base URL (required for self-hosted endpoints, optional otherwise)
    pub api_base_url: Option<String>,
    /// System prompt override
    pub system_prompt: Option<String>,
}

/// Supported LLM providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LlmProvider {
    OpenAI,
    Ollama,
    Gemini,
}

impl LlmProvider {
    fn parse(value: &str) -> ConfigResult<Self> {
        match value.to_ascii_lowercase().as_str() {
            "openai" => Ok(Self::OpenAI),
            "ollama" => Ok(Self::Ollama),
            "gemini" => Ok(Self::Gemini),
            _ => Err(ConfigError::Invalid {
                name: "SUTRA_LLM_PROVIDER",
                value: value.to_string(),
            }),
        }
    }
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// `SUTRA_URI`, `SUTRA_USERNAME` and `SUTRA_PASSWORD` are required.
    /// Setting `SUTRA_LLM_MODEL` enables natural-language querying; the
    /// provider defaults to OpenAI and can be changed with
    /// `SUTRA_LLM_PROVIDER` (openai | ollama | gemini).
    pub fn from_env() -> ConfigResult<Self> {
        let uri = require("SUTRA_URI")?;
        let username = require("SUTRA_USERNAME")?;
        let password = require("SUTRA_PASSWORD")?;

        let llm = match env::var("SUTRA_LLM_MODEL") {
            Ok(model) => {
                let provider = match env::var("SUTRA_LLM_PROVIDER") {
                    Ok(value) => LlmProvider::parse(&value)?,
                    Err(_) => LlmProvider::OpenAI,
                };
                Some(LlmConfig {
                    provider,
                    model,
                    api_key: env::var("SUTRA_LLM_API_KEY").ok(),
                    api_base_url: env::var("SUTRA_LLM_BASE_URL").ok(),
                    system_prompt: None,
                })
            }
            Err(_) => None,
        };

        Ok(Self {
            uri,
            username,
            password,
            llm,
        })
    }
}

fn require(name: &'static str) -> ConfigResult<String> {
    env::var(name).map_err(|_| ConfigError::Missing(name))
}
