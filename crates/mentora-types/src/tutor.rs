//! Classification tags produced by the tutoring core.
//!
//! [`MessageKind`] is the result of the fixed-priority message
//! classifier; [`Subject`] is the conversation-wide topic inferred from
//! keyword groups. Both are dispatched through total `match` arms in
//! the template and fallback catalogs, so an unhandled tag is a compile
//! error rather than a runtime hole.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of the latest learner message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// One of the first two messages of the conversation.
    FirstContact,
    /// Text ending with `?`.
    Question,
    /// A short acknowledgment ("oui", "ok", ...) or any very short text.
    Short,
    /// Contains "merci" without being a bare acknowledgment.
    Thanks,
    /// Asks for an explanation ("explique", "comment", "pourquoi").
    Explanation,
    /// Asks for examples.
    Example,
    /// Anything else.
    General,
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            MessageKind::FirstContact => "first_contact",
            MessageKind::Question => "question",
            MessageKind::Short => "short",
            MessageKind::Thanks => "thanks",
            MessageKind::Explanation => "explanation",
            MessageKind::Example => "example",
            MessageKind::General => "general",
        };
        write!(f, "{tag}")
    }
}

/// Conversation subject inferred from the message history.
///
/// `Display` yields the French label embedded into prompts and
/// fallback texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Mathematics,
    Programming,
    History,
    Languages,
    Science,
    General,
}

impl Subject {
    /// French label used in prompt templates.
    pub fn label(&self) -> &'static str {
        match self {
            Subject::Mathematics => "mathématiques",
            Subject::Programming => "programmation",
            Subject::History => "histoire",
            Subject::Languages => "langues",
            Subject::Science => "sciences",
            Subject::General => "général",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
