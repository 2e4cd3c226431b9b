//! Subject inference over the whole conversation.
//!
//! Scans the joined, lowercased text of every message for fixed keyword
//! groups; the first group with a hit wins, so early mentions anchor the
//! subject for the rest of the conversation.

use mentora_types::chat::ChatMessage;
use mentora_types::tutor::Subject;

/// Keyword groups checked in order.
const KEYWORD_GROUPS: &[(&[&str], Subject)] = &[
    (&["fraction", "math"], Subject::Mathematics),
    (&["python", "programme"], Subject::Programming),
    (&["histoire", "france"], Subject::History),
    (&["anglais", "english"], Subject::Languages),
    (&["physique", "chimie"], Subject::Science),
];

/// Infer the conversation subject from the full message history.
pub fn infer_subject(history: &[ChatMessage]) -> Subject {
    let all_text = history
        .iter()
        .map(|m| m.content.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    for (keywords, subject) in KEYWORD_GROUPS {
        if keywords.iter().any(|k| all_text.contains(k)) {
            return *subject;
        }
    }

    Subject::General
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(contents: &[&str]) -> Vec<ChatMessage> {
        contents.iter().map(|c| ChatMessage::user(*c)).collect()
    }

    #[test]
    fn test_no_keywords_is_general() {
        assert_eq!(infer_subject(&history(&["Bonjour"])), Subject::General);
        assert_eq!(infer_subject(&[]), Subject::General);
    }

    #[test]
    fn test_each_keyword_group() {
        assert_eq!(
            infer_subject(&history(&["Comment simplifier une fraction ?"])),
            Subject::Mathematics
        );
        assert_eq!(
            infer_subject(&history(&["Mon programme ne compile pas"])),
            Subject::Programming
        );
        assert_eq!(
            infer_subject(&history(&["Parle-moi de l'histoire de la Révolution"])),
            Subject::History
        );
        assert_eq!(
            infer_subject(&history(&["Je veux progresser en anglais"])),
            Subject::Languages
        );
        assert_eq!(
            infer_subject(&history(&["La chimie organique me dépasse"])),
            Subject::Science
        );
    }

    #[test]
    fn test_first_group_wins() {
        // Mentions both math and python; the math group is checked first.
        let h = history(&["Des maths avec python"]);
        assert_eq!(infer_subject(&h), Subject::Mathematics);
    }

    #[test]
    fn test_keyword_anywhere_in_history() {
        let h = history(&["On parlait de fractions hier", "Et maintenant ?"]);
        assert_eq!(infer_subject(&h), Subject::Mathematics);
    }

    #[test]
    fn test_stable_under_keyword_free_filler() {
        let mut h = history(&["Je révise la physique"]);
        let before = infer_subject(&h);
        h.insert(0, ChatMessage::assistant("Très bien, continuons."));
        h.push(ChatMessage::user("D'accord"));
        assert_eq!(infer_subject(&h), before);
    }
}
