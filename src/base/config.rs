//! Load configuration via `config` crate with env-override support.

use std::{ops::Deref, sync::Arc};

use serde::Deserialize;

use crate::base::prompts;

use super::types::Res;

/// Default OpenAI model to use
fn default_openai_model() -> String {
    "gpt-5".to_string()
}

/// Default sampling temperature for the answer agent
fn default_openai_temperature() -> f32 {
    0.7
}

/// Default max output tokens for OpenAI model
fn default_openai_max_tokens() -> u32 {
    4096
}

/// Default reasoning effort for reasoning models
fn default_openai_reasoning_effort() -> String {
    "medium".to_string()
}

/// Default system directive for the answer agent.
fn default_answer_agent_system_directive() -> String {
    prompts::ANSWER_AGENT_SYSTEM_DIRECTIVE.to_string()
}

/// Configuration for the pm-knowledge-agent application.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ConfigInner {
    /// OpenAI API key (`OPENAI_API_KEY`).
    pub openai_api_key: String,
    /// OpenAI model to use for the answer agent (`OPENAI_MODEL`).
    #[serde(default = "default_openai_model")]
    pub openai_model: String,
    /// Optional custom system directive to override the default (`ANSWER_AGENT_SYSTEM_DIRECTIVE`).
    #[serde(default = "default_answer_agent_system_directive")]
    pub answer_agent_system_directive: String,
    /// Sampling temperature to use for the answer agent model (`OPENAI_TEMPERATURE`).
    /// Value between 0 and 2. Higher values like 0.8 make output more random,
    /// while lower values like 0.2 make it more focused and deterministic.
    #[serde(default = "default_openai_temperature")]
    pub openai_temperature: f32,
    /// Max output tokens for OpenAI model (`OPENAI_MAX_TOKENS`).
    /// Maximum number of tokens that can be generated in the response.
    #[serde(default = "default_openai_max_tokens")]
    pub openai_max_tokens: u32,
    /// Reasoning effort for `o`-series models (`OPENAI_REASONING_EFFORT`).
    /// One of `low`, `medium`, or `high`; ignored by non-reasoning models.
    #[serde(default = "default_openai_reasoning_effort")]
    pub openai_reasoning_effort: String,
}

impl Config {
    pub fn load(explicit_path: Option<&std::path::Path>) -> Res<Self> {
        let mut cfg = config::Config::builder().add_source(config::Environment::default().prefix("PM_KNOWLEDGE_AGENT"));

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if std::path::Path::new(".hidden/config.toml").exists() {
            cfg = cfg.add_source(config::File::with_name(".hidden/config.toml"));
        }

        let result = Config {
            inner: Arc::new(cfg.build()?.try_deserialize()?),
        };

        result.validate()?;

        Ok(result)
    }

    /// Range-check the loaded values.
    pub fn validate(&self) -> Res<()> {
        if self.openai_temperature < 0.0 || self.openai_temperature > 2.0 {
            return Err(anyhow::anyhow!("OpenAI temperature must be between 0 and 2."));
        }

        if self.openai_max_tokens < 1 || self.openai_max_tokens > 128000 {
            return Err(anyhow::anyhow!("OpenAI max tokens must be between 1 and 128000."));
        }

        if !matches!(self.openai_reasoning_effort.to_lowercase().as_str(), "low" | "medium" | "high") {
            return Err(anyhow::anyhow!("OpenAI reasoning effort must be one of: low, medium, high."));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(inner: ConfigInner) -> Config {
        Config { inner: Arc::new(inner) }
    }

    #[test]
    fn default_values_validate() {
        let config = config_with(ConfigInner {
            openai_api_key: "test_key".to_string(),
            openai_model: default_openai_model(),
            answer_agent_system_directive: default_answer_agent_system_directive(),
            openai_temperature: default_openai_temperature(),
            openai_max_tokens: default_openai_max_tokens(),
            openai_reasoning_effort: default_openai_reasoning_effort(),
        });

        assert!(config.validate().is_ok());
        assert_eq!(config.openai_model, "gpt-5");
    }

    #[test]
    fn out_of_range_temperature_is_rejected() {
        let config = config_with(ConfigInner {
            openai_temperature: 3.5,
            openai_max_tokens: 4096,
            openai_reasoning_effort: "medium".to_string(),
            ..Default::default()
        });

        assert!(config.validate().is_err());
    }

    #[test]
    fn out_of_range_max_tokens_is_rejected() {
        let config = config_with(ConfigInner {
            openai_temperature: 0.7,
            openai_max_tokens: 0,
            openai_reasoning_effort: "medium".to_string(),
            ..Default::default()
        });

        assert!(config.validate().is_err());
    }

    #[test]
    fn unknown_reasoning_effort_is_rejected() {
        let config = config_with(ConfigInner {
            openai_temperature: 0.7,
            openai_max_tokens: 4096,
            openai_reasoning_effort: "maximum".to_string(),
            ..Default::default()
        });

        assert!(config.validate().is_err());
    }
}
