//! Question handling and console interaction for pm-knowledge-agent.
//!
//! This module provides the comparison demo:
//! - Answering each question from both sources (knowledge base and LLM)
//! - Rendering the paired answers to the console

pub mod demo;
