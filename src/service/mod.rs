//! Service integrations and answer sources for pm-knowledge-agent.
//!
//! This module contains the two answer sources the demo compares:
//! - The hardcoded knowledge base (keyword-triggered canned answers)
//! - LLM services (e.g., OpenAI)
//!
//! The LLM service module defines both a generic trait and a concrete
//! implementation, allowing for extensibility and easy testing.

pub mod knowledge;
pub mod llm;
