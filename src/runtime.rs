//! Runtime services and shared state for pm-knowledge-agent.

use tracing::instrument;

use crate::{
    base::{
        config::Config,
        types::{Res, Void},
    },
    interaction::demo,
    service::llm::LlmClient,
};

/// Runtime service context that can be shared across the application.
///
/// This struct holds the LLM client and configuration. It is designed to be
/// trivially cloneable, allowing it to be passed around without the need for
/// `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The LLM client instance.
    pub llm: LlmClient,
}

impl Runtime {
    /// Create a new runtime instance.
    #[instrument(skip_all)]
    pub fn new(config: Config) -> Res<Self> {
        // Initialize the LLM client.
        let llm = LlmClient::openai(&config);

        Ok(Self { config, llm })
    }

    /// Run the comparison demo over the built-in question list.
    pub async fn start(&self, json: bool) -> Void {
        if !json {
            demo::print_banner();
        }

        for question in demo::DEMO_QUESTIONS {
            self.compare_one(question, json).await?;
        }

        Ok(())
    }

    /// Compare both answer sources for a single question.
    pub async fn compare_one(&self, question: &str, json: bool) -> Void {
        let comparison = demo::compare_answers(question, &self.llm).await;

        if json {
            println!("{}", demo::render_comparison_json(&comparison)?);
        } else {
            demo::print_comparison(&comparison);
        }

        Ok(())
    }
}
