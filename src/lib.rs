//! Library root for `pm-knowledge-agent`.
//!
//! Pm-knowledge-agent is a small demo assistant for program management
//! questions that answers each question two ways:
//! - A hardcoded knowledge base of keyword-triggered canned answers
//! - An OpenAI-backed answer agent
//!
//! Both answers are printed side by side so the two approaches can be
//! compared directly. The architecture is built around an extensible
//! LLM client trait that allows different providers (or mocks) to be
//! swapped in without touching the knowledge base.

pub mod base;
pub mod interaction;
pub mod prelude;
pub mod runtime;
pub mod service;

use base::{config::Config, types::Void};
use tracing::info;

/// Public async entry for the binary crate.
///
/// Runs the full comparison demo over the built-in question list:
/// - Creates the runtime context with the LLM client
/// - Compares the hardcoded and LLM answers for each demo question
pub async fn start(config: Config, json: bool) -> Void {
    info!("Starting pm-knowledge-agent demo ...");

    // Initialize the runtime.
    let runtime = runtime::Runtime::new(config)?;

    // Run the demo.
    runtime.start(json).await?;

    Ok(())
}

/// Compare both answer sources for a single caller-supplied question.
pub async fn ask(config: Config, question: &str, json: bool) -> Void {
    info!("Answering a single question ...");

    let runtime = runtime::Runtime::new(config)?;

    runtime.compare_one(question, json).await?;

    Ok(())
}
