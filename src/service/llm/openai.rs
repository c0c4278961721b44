//! Integration with Large Language Model services.
//!
//! This module provides a thin wrapper around LLM clients (e.g., OpenAI)
//! for generating answers to program management questions.
//!
//! The `GenericLlmClient` trait can be implemented for different LLM
//! providers; this is the default implementation for OpenAI.

use std::sync::Arc;
use std::time::Duration;

use crate::base::{config::Config, types::Res};
use async_openai::{
    Client,
    config::OpenAIConfig,
    types::{
        ReasoningEffort,
        responses::{Content, CreateResponseArgs, Input, InputItem, InputMessageArgs, OutputContent, ReasoningConfigArgs, Response, Role, TextConfig, TextResponseFormat},
    },
};
use async_trait::async_trait;
use tokio::time::timeout;
use tracing::{info, instrument, warn};

use super::{GenericLlmClient, LlmClient};

// Extra methods on `LlmClient` applied by the openai implementation.

impl LlmClient {
    pub fn openai(config: &Config) -> Self {
        let client = OpenAiLlmClient::new(config);
        Self { inner: Arc::new(client) }
    }
}

// Specific implementations.

/// Total attempts per question, including the first.
const ANSWER_ATTEMPTS: u32 = 4;
/// Per-attempt cap; reasoning models can take a while to finish.
const ANSWER_TIMEOUT: Duration = Duration::from_secs(120);
/// Backoff before the second attempt; doubles on each attempt after that.
const ANSWER_BACKOFF: Duration = Duration::from_millis(1000);

/// OpenAI LLM client implementation.
#[derive(Clone)]
pub struct OpenAiLlmClient {
    client: Client<OpenAIConfig>,
    config: Config,
}

impl OpenAiLlmClient {
    /// Build a client around the configured API key.
    #[instrument(name = "OpenAiLlmClient::new", skip_all)]
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new().with_api_key(config.openai_api_key.clone());
        let client = Client::with_config(openai_config);

        Self { client, config: config.clone() }
    }

    /// Build the answer agent input.
    #[instrument(name = "OpenAiLlmClient::build_answer_input", skip_all)]
    fn build_answer_input(&self, question: &str) -> Res<Input> {
        Ok(Input::Items(vec![InputItem::Message(
            InputMessageArgs::default()
                .role(Role::User)
                .content(format!("# User Question\n\n{question}\n\n"))
                .build()?,
        )]))
    }

    /// Send the request, retrying failed or timed-out attempts.
    ///
    /// Attempts are capped at [`ANSWER_TIMEOUT`] each and separated by an
    /// exponentially growing backoff starting at [`ANSWER_BACKOFF`].
    async fn send_with_retries(&self, request_builder: CreateResponseArgs) -> Res<Response> {
        let mut last_failure = String::new();

        for attempt in 1..=ANSWER_ATTEMPTS {
            if attempt > 1 {
                tokio::time::sleep(ANSWER_BACKOFF * 2_u32.pow(attempt - 2)).await;
            }

            let request = request_builder.build()?;

            match timeout(ANSWER_TIMEOUT, self.client.responses().create(request)).await {
                Ok(Ok(response)) => {
                    info!("Answer request completed on attempt {attempt}");
                    return Ok(response);
                }
                Ok(Err(err)) => {
                    warn!("Answer request attempt {attempt}/{ANSWER_ATTEMPTS} failed: {err}");
                    last_failure = err.to_string();
                }
                Err(_) => {
                    warn!("Answer request attempt {attempt}/{ANSWER_ATTEMPTS} timed out");
                    last_failure = format!("timed out after {}s", ANSWER_TIMEOUT.as_secs());
                }
            }
        }

        Err(anyhow::anyhow!("Giving up on OpenAI after {ANSWER_ATTEMPTS} attempts: {last_failure}"))
    }
}

#[async_trait]
impl GenericLlmClient for OpenAiLlmClient {
    /// Generate an answer from the system directive and user question.
    #[instrument(name = "OpenAiLlmClient::get_answer_response", skip_all)]
    async fn get_answer_response(&self, question: &str) -> Res<String> {
        // Create the answer-specific prompt input
        let input = self.build_answer_input(question)?;

        // Text config for the answer response
        let text_config = TextConfig { format: TextResponseFormat::Text };

        // Create the request.
        let mut request = CreateResponseArgs::default();
        request
            .instructions(self.config.answer_agent_system_directive.clone())
            .max_output_tokens(self.config.openai_max_tokens)
            .model(&self.config.openai_model)
            .text(text_config)
            .input(input);

        // Add the temperature for the non-reasoning models.
        if self.config.openai_model.starts_with("gpt") {
            request.temperature(self.config.openai_temperature);
        }

        // Add the reasoning effort for `o` models.
        if self.config.openai_model.starts_with("o") {
            let reasoning_effort = reasoning_effort_from_config(&self.config.openai_reasoning_effort)?;
            request.reasoning(ReasoningConfigArgs::default().effort(reasoning_effort).build()?);
        }

        // Execute the request
        let response = self.send_with_retries(request).await?;

        // Parse the text response
        let answers = parse_openai_response(&response)?;

        // Combine the outputs into a single answer string
        Ok(answers.join("\n\n"))
    }
}

/// Parse the OpenAI text response.
#[instrument(skip_all)]
pub fn parse_openai_response(response: &Response) -> Res<Vec<String>> {
    let mut result = Vec::new();

    info!("LLM response has {} outputs.", response.output.len());
    for output in &response.output {
        match output {
            OutputContent::Message(message) => {
                info!("LLM response has {} messages.", message.content.len());

                for message_content in &message.content {
                    match message_content {
                        Content::OutputText(text) => {
                            result.push(text.text.clone());
                        }
                        Content::Refusal(reason) => {
                            return Err(anyhow::anyhow!("Request refused: {reason:#?}"));
                        }
                    }
                }
            }
            _ => {
                warn!("Unknown output: {output:#?}");
            }
        }
    }

    Ok(result)
}

/// Map the configured effort string onto the client enum.
fn reasoning_effort_from_config(effort: &str) -> Res<ReasoningEffort> {
    match effort.to_lowercase().as_str() {
        "low" => Ok(ReasoningEffort::Low),
        "medium" => Ok(ReasoningEffort::Medium),
        "high" => Ok(ReasoningEffort::High),
        other => Err(anyhow::anyhow!("Unsupported reasoning effort {other:?}; use low, medium, or high.")),
    }
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::config::ConfigInner;

    fn create_test_config() -> Config {
        Config {
            inner: Arc::new(ConfigInner {
                openai_api_key: "test_key".to_string(),
                openai_model: "gpt-4.1-mini".to_string(),
                openai_temperature: 0.1,
                openai_max_tokens: 200u32, // Small for tests
                openai_reasoning_effort: "medium".to_string(),
                ..Default::default()
            }),
        }
    }

    #[test]
    fn test_openai_client_construction_requires_no_network() {
        let config = create_test_config();
        let client = OpenAiLlmClient::new(&config);

        assert_eq!(client.config.openai_model, "gpt-4.1-mini");
    }

    #[test]
    fn test_build_answer_input_wraps_question() {
        let config = create_test_config();
        let client = OpenAiLlmClient::new(&config);

        let input = client.build_answer_input("What is a sprint?").unwrap();

        let Input::Items(items) = input else {
            panic!("Expected an item list input");
        };
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_reasoning_effort_from_config() {
        assert!(matches!(reasoning_effort_from_config("low").unwrap(), ReasoningEffort::Low));
        assert!(matches!(reasoning_effort_from_config("Medium").unwrap(), ReasoningEffort::Medium));
        assert!(matches!(reasoning_effort_from_config("HIGH").unwrap(), ReasoningEffort::High));
        assert!(reasoning_effort_from_config("maximum").is_err());
    }
}
