pub mod openai;

use crate::base::types::Res;
use async_trait::async_trait;
use std::ops::Deref;
use std::sync::Arc;

// Traits.

/// Generic LLM client trait that clients must implement.
///
/// This trait defines the core functionality for interacting with large language models.
/// Implementing this trait allows different LLM providers to be used with the agent.
#[async_trait]
pub trait GenericLlmClient: Send + Sync + 'static {
    /// Generate an answer to a program management question.
    ///
    /// This method sends the question to the underlying model along with the
    /// answer agent's system directive and returns the generated answer text.
    async fn get_answer_response(&self, question: &str) -> Res<String>;
}

// Structs.

/// LLM client for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct LlmClient {
    inner: Arc<dyn GenericLlmClient>,
}

impl LlmClient {
    /// Create a new LLM client from any provider implementation.
    pub fn new(inner: Arc<dyn GenericLlmClient>) -> Self {
        Self { inner }
    }

    /// Ask the provider a question, always producing a string.
    ///
    /// Any provider failure is converted into a descriptive error message
    /// rather than propagated, so callers receive a string in all cases.
    pub async fn ask(&self, question: &str) -> String {
        match self.get_answer_response(question).await {
            Ok(answer) => answer,
            Err(err) => format!("Error generating response: {err}"),
        }
    }
}

impl Deref for LlmClient {
    type Target = dyn GenericLlmClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}
