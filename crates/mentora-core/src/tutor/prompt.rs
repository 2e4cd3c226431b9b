//! Prompt assembly for the generative endpoint.
//!
//! Each [`MessageKind`] selects a distinct French instructional
//! template embedding the latest message, the rendered prior turns, and
//! the inferred subject where relevant. A fixed trailing-instruction
//! block and the fixed sampling parameters complete the request.

use mentora_types::chat::{ChatMessage, MessageRole};
use mentora_types::llm::{GenerationParams, GenerationRequest};
use mentora_types::tutor::{MessageKind, Subject};

/// Trailing instructions appended to every template.
const FINAL_INSTRUCTIONS: &str = "INSTRUCTIONS FINALES:
- Réponds en français naturel et conversationnel
- Évite les formats structurés (pas de 1., 2., 3.)
- Limite ta réponse à 3-4 phrases maximum
- Sois bienveillant et encourageant
- Adapte-toi au niveau de l'élève
- Utilise des émojis pédagogiques si pertinent (🧮, 📝, 💡, ❓)

Réponse du tuteur:";

/// Render the prior turns (everything but the latest message) as
/// `Élève:` / `Tuteur:` lines.
fn render_history(history: &[ChatMessage]) -> String {
    let prior = &history[..history.len().saturating_sub(1)];
    prior
        .iter()
        .map(|m| {
            let label = match m.role {
                MessageRole::User => "Élève",
                MessageRole::Assistant => "Tuteur",
            };
            format!("{label}: {}", m.content)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Select and fill the instructional template for a message kind.
fn template(latest: &str, rendered_history: &str, kind: MessageKind, subject: Subject) -> String {
    let context = if rendered_history.is_empty() {
        String::new()
    } else {
        format!("Contexte de la conversation:\n{rendered_history}\n\n")
    };

    match kind {
        MessageKind::FirstContact => format!(
            "Tu es un tuteur pédagogique enthousiaste et bienveillant.\n\n\
             L'élève commence la conversation: \"{latest}\"\n\n\
             Accueille l'élève chaleureusement, présente-toi brièvement comme son tuteur IA, \
             et propose de commencer l'apprentissage d'une manière engageante."
        ),
        MessageKind::Question => format!(
            "Tu es un expert pédagogique.\n\n\
             {context}\
             L'élève pose cette question: \"{latest}\"\n\n\
             Donne une réponse claire et directe, ajoute un exemple concret pertinent, \
             et termine par une question pour vérifier la compréhension.\n\n\
             Important: Formule ta réponse comme une conversation naturelle, sans listes ni points."
        ),
        MessageKind::Short => format!(
            "Conversation en cours:\n{rendered_history}\n\n\
             Réponse courte de l'élève: \"{latest}\"\n\n\
             Réponds de manière naturelle pour valider la réponse de l'élève, \
             encourager à développer la pensée, et poser une question pour continuer.\n\n\
             Sois bref et chaleureux."
        ),
        MessageKind::Thanks => format!(
            "L'élève dit: \"{latest}\"\n\n\
             Réponds avec gratitude et encourage la poursuite de l'apprentissage.\n\
             Propose le prochain pas naturellement."
        ),
        MessageKind::Explanation => format!(
            "L'élève demande une explication: \"{latest}\"\n\n\
             {context}\
             Fournis une explication pédagogique: commence par l'essentiel, \
             utilise une analogie ou métaphore simple, limite-toi à 3-4 phrases, \
             et termine par une question ouverte.\n\n\
             Sujet: {subject}"
        ),
        MessageKind::Example => format!(
            "L'élève demande des exemples: \"{latest}\"\n\n\
             Donne 1-2 exemples concrets et pertinents.\n\
             Relie les exemples au quotidien si possible.\n\
             Pose une question pour appliquer les exemples."
        ),
        MessageKind::General => format!(
            "Élève: \"{latest}\"\n\n\
             {context}\
             Réponds comme un tuteur patient et encourageant, avec une réponse \
             pertinente au message, un élément pédagogique (fait, astuce, perspective), \
             et une invitation à continuer.\n\n\
             Sujet: {subject}"
        ),
    }
}

/// Build the full generation request for a synthesis turn.
pub fn build_request(
    history: &[ChatMessage],
    kind: MessageKind,
    subject: Subject,
) -> GenerationRequest {
    let latest = history.last().map(|m| m.content.as_str()).unwrap_or("");
    let rendered = render_history(history);
    let body = template(latest, &rendered, kind, subject);

    GenerationRequest {
        prompt: format!("{body}\n\n{FINAL_INSTRUCTIONS}"),
        params: GenerationParams::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(history: &[ChatMessage]) -> (MessageKind, Subject) {
        let latest = history.last().map(|m| m.content.as_str()).unwrap_or("");
        (
            crate::tutor::classify(latest, history.len()),
            crate::tutor::infer_subject(history),
        )
    }

    #[test]
    fn test_first_contact_uses_greeting_template() {
        let history = vec![ChatMessage::user("Bonjour")];
        let (kind, subject) = turn(&history);
        assert_eq!(kind, MessageKind::FirstContact);
        assert_eq!(subject, Subject::General);

        let request = build_request(&history, kind, subject);
        assert!(request.prompt.contains("Accueille l'élève chaleureusement"));
        assert!(request.prompt.contains("\"Bonjour\""));
    }

    #[test]
    fn test_history_rendered_with_role_labels() {
        let history = vec![
            ChatMessage::user("Je veux réviser les fractions"),
            ChatMessage::assistant("Très bien, commençons."),
            ChatMessage::user("Comment on simplifie une fraction?"),
        ];
        let (kind, subject) = turn(&history);
        assert_eq!(kind, MessageKind::Question);
        assert_eq!(subject, Subject::Mathematics);

        let request = build_request(&history, kind, subject);
        assert!(request.prompt.contains("Élève: Je veux réviser les fractions"));
        assert!(request.prompt.contains("Tuteur: Très bien, commençons."));
        // The latest message lives in the template, not the history block.
        assert!(!request.prompt.contains("Élève: Comment on simplifie"));
    }

    #[test]
    fn test_subject_label_embedded_where_relevant() {
        let history = vec![
            ChatMessage::user("On travaille python"),
            ChatMessage::assistant("D'accord."),
            ChatMessage::user("Explique-moi les boucles pas à pas"),
        ];
        let (kind, subject) = turn(&history);
        assert_eq!(kind, MessageKind::Explanation);

        let request = build_request(&history, kind, subject);
        assert!(request.prompt.contains("Sujet: programmation"));
    }

    #[test]
    fn test_final_instructions_always_present() {
        for contents in [vec!["Bonjour"], vec!["a", "b", "merci pour tout cela"]] {
            let history: Vec<ChatMessage> =
                contents.iter().map(|c| ChatMessage::user(*c)).collect();
            let (kind, subject) = turn(&history);
            let request = build_request(&history, kind, subject);
            assert!(request.prompt.contains("INSTRUCTIONS FINALES:"));
            assert!(request.prompt.ends_with("Réponse du tuteur:"));
        }
    }

    #[test]
    fn test_fixed_generation_params() {
        let history = vec![ChatMessage::user("Bonjour")];
        let (kind, subject) = turn(&history);
        let request = build_request(&history, kind, subject);
        assert_eq!(request.params, GenerationParams::default());
    }
}
