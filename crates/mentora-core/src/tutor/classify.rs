//! Fixed-priority classifier for the latest learner message.
//!
//! A single deterministic pass over the trimmed, lowercased text.
//! Priority order is significant: a message matching several rules takes
//! the first ("ok?" is a `Question`, not a `Short` acknowledgment).

use mentora_types::tutor::MessageKind;

/// Exact-match short acknowledgments (checked after the `?` rule).
const SHORT_ACKS: &[&str] = &[
    "oui", "non", "ok", "d'accord", "parfait", "super", "génial", "merci",
];

/// Keywords marking a request for an explanation.
const EXPLANATION_MARKERS: &[&str] = &["explique", "comment", "pourquoi"];

/// Messages shorter than this (in characters) count as `Short`.
const SHORT_THRESHOLD: usize = 15;

/// Classify the latest message given the total history length
/// (including the message itself).
pub fn classify(latest: &str, history_len: usize) -> MessageKind {
    let text = latest.trim().to_lowercase();

    if history_len <= 2 {
        return MessageKind::FirstContact;
    }
    if text.ends_with('?') {
        return MessageKind::Question;
    }
    if SHORT_ACKS.contains(&text.as_str()) {
        return MessageKind::Short;
    }
    if text.contains("merci") {
        return MessageKind::Thanks;
    }
    if EXPLANATION_MARKERS.iter().any(|m| text.contains(m)) {
        return MessageKind::Explanation;
    }
    // "exemple" also covers the plural form.
    if text.contains("exemple") {
        return MessageKind::Example;
    }
    if text.chars().count() < SHORT_THRESHOLD {
        return MessageKind::Short;
    }

    MessageKind::General
}
