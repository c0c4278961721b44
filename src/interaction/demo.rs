use colored::Colorize;
use tracing::{info, instrument};

use crate::{
    base::types::{AnswerComparison, Res},
    service::{knowledge, llm::LlmClient},
};

/// The demo question list.
pub const DEMO_QUESTIONS: [&str; 5] = [
    "How do you decide when to use a Gantt chart versus an Agile board?",
    "What role do milestones play in tracking program progress?",
    "How do you identify and manage the critical path in a complex program?",
    "What strategies do you use to keep stakeholders aligned across multiple projects?",
    "How do you ensure clear communication between project teams and executives?",
];

/// Answer a question from both sources.
///
/// The knowledge base side is pure and cannot fail; the LLM side is total
/// by contract, so the comparison always carries two answer strings.
#[instrument(skip_all)]
pub async fn compare_answers(question: &str, llm: &LlmClient) -> AnswerComparison {
    let hardcoded = knowledge::get_answer(question).to_string();

    info!("Asking the LLM ...");
    let llm_answer = llm.ask(question).await;

    AnswerComparison {
        question: question.to_string(),
        hardcoded,
        llm: llm_answer,
    }
}

/// Render a comparison to the console.
pub fn print_comparison(comparison: &AnswerComparison) {
    println!();
    println!("{} {}", "Question:".bold().cyan(), comparison.question);
    println!("{}", "-".repeat(50).dimmed());

    println!("{}", "Hardcoded answer:".bold());
    println!("{}", comparison.hardcoded);
    println!();

    println!("{}", "LLM answer:".bold());
    println!("{}", comparison.llm);
    println!();

    println!("{}", "=".repeat(50).dimmed());
}

/// Serialize a comparison as pretty-printed JSON.
pub fn render_comparison_json(comparison: &AnswerComparison) -> Res<String> {
    Ok(serde_json::to_string_pretty(comparison)?)
}

/// Print the demo banner.
pub fn print_banner() {
    println!("{}", "PROGRAM MANAGEMENT KNOWLEDGE AGENT DEMO".bold());
    println!("{}", "=".repeat(50).dimmed());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_comparison_json_includes_both_answers() {
        let comparison = AnswerComparison {
            question: "What is a sprint?".to_string(),
            hardcoded: knowledge::DEFAULT_ANSWER.to_string(),
            llm: "A short, time-boxed iteration.".to_string(),
        };

        let json = render_comparison_json(&comparison).unwrap();

        assert!(json.contains("\"question\""));
        assert!(json.contains("What is a sprint?"));
        assert!(json.contains(knowledge::DEFAULT_ANSWER));
        assert!(json.contains("A short, time-boxed iteration."));
    }
}
