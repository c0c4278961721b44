//! Hardcoded knowledge base of program management answers.
//!
//! Questions are matched against an ordered list of keyword triggers.
//! Each trigger is a lowercase substring; the question is lowercased and
//! the first trigger found anywhere in it selects the canned answer.
//! Order matters: matching stops at the first hit, so a question that
//! contains several keywords always gets the answer of the earliest
//! trigger in the list.

/// A single keyword trigger and the answer it selects.
pub struct Trigger {
    /// Lowercase substring searched for in the lowercased question.
    pub keyword: &'static str,
    /// Canned answer returned verbatim when the keyword matches.
    pub answer: &'static str,
}

/// Fallback answer when no trigger matches.
pub const DEFAULT_ANSWER: &str = "That question is not in my knowledge base.";

/// The ordered trigger list.
///
/// Note the first trigger is the plural "gantt charts": a question that
/// says "Gantt chart" (singular) does not hit it and falls through to
/// the later triggers.
pub static TRIGGERS: [Trigger; 5] = [
    Trigger {
        keyword: "gantt charts",
        answer: "A Gantt chart is a horizontal bar chart that visualizes a project's schedule, showing tasks, their start and end dates, durations, and dependencies over a timeline. It is used for project management.",
    },
    Trigger {
        keyword: "agile",
        answer: "Agile software development is a group of iterative and incremental methodologies that emphasize collaboration, flexibility, and rapid delivery of high-quality software.",
    },
    Trigger {
        keyword: "sprints",
        answer: "Agile teams are typically self-organizing and cross-functional, working in short cycles called sprints to continuously inspect and adapt their products and processes.",
    },
    Trigger {
        keyword: "critical path",
        answer: "The Critical Path Method (CPM) is a project management technique that identifies the sequence of tasks—the \"critical path\"—that determines the shortest possible project completion time.",
    },
    Trigger {
        keyword: "milestones",
        answer: "A \"milestone\" is a significant point in development, a marker on a project's timeline, or a physical roadside marker indicating distance.",
    },
];

/// Answer a question from the hardcoded knowledge base.
///
/// Matching is case-insensitive and purely substring-based; no other
/// normalization is applied. Total over all inputs: an empty question, or
/// one that matches no trigger, gets [`DEFAULT_ANSWER`].
pub fn get_answer(question: &str) -> &'static str {
    let question = question.to_lowercase();

    TRIGGERS.iter().find(|t| question.contains(t.keyword)).map(|t| t.answer).unwrap_or(DEFAULT_ANSWER)
}

// Tests.
