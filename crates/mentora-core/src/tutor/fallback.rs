//! Canned replies used when no usable response comes back.
//!
//! Two-level lookup: a subject-specific text when one is defined for
//! the (subject, kind) pair, otherwise the per-kind generic. Both
//! levels are total `match` expressions, so adding a [`MessageKind`]
//! variant without a fallback is a compile error.

use mentora_types::tutor::{MessageKind, Subject};

/// Apology shown when the endpoint signals quota exhaustion.
pub const QUOTA_NOTICE: &str =
    "Limite d'utilisation atteinte. Réessaie plus tard ou utilise le mode démo.";

/// Apology shown when the synthesis turn itself fails.
pub const CONNECTION_NOTICE: &str = "Problème de connexion. Réessaie dans un instant.";

/// Subject-specific fallback, when one exists for this kind.
fn subject_fallback(subject: Subject, kind: MessageKind) -> Option<&'static str> {
    match (subject, kind) {
        (Subject::Mathematics, MessageKind::FirstContact) => Some(
            "Bonjour ! Je suis ton tuteur en mathématiques. Prêt(e) à explorer les nombres \
             ensemble ? Par où souhaites-tu commencer ?",
        ),
        (Subject::Mathematics, MessageKind::Question) => Some(
            "Excellente question mathématique ! Prenons un exemple concret pour y répondre. \
             As-tu d'autres questions sur ce sujet ?",
        ),
        (Subject::Mathematics, MessageKind::Explanation) => Some(
            "Je vais t'expliquer cela pas à pas, avec une image simple. \
             Maintenant, essaie de me l'expliquer avec tes propres mots !",
        ),
        (Subject::Programming, MessageKind::FirstContact) => Some(
            "Salut futur développeur ! Je suis ton tuteur en programmation Python. \
             Quel projet aimerais-tu réaliser ?",
        ),
        (Subject::Programming, MessageKind::Question) => Some(
            "Super question technique ! En Python, cela s'écrit en quelques lignes, \
             par exemple : `print('Hello')`. Veux-tu essayer toi-même ?",
        ),
        (Subject::Programming, MessageKind::Explanation) => Some(
            "En programmation, ce concept se comprend mieux avec une analogie. \
             Essaie de coder un petit exemple !",
        ),
        (Subject::History, MessageKind::FirstContact) => Some(
            "Bonjour ! Je suis ton guide en histoire de France. Prêt(e) à voyager dans \
             le temps ? Quelle période t'intéresse ?",
        ),
        (Subject::History, MessageKind::Question) => Some(
            "Question historique intéressante ! Pense par exemple à ce qui s'est joué \
             pendant la Révolution. Quel autre aspect veux-tu explorer ?",
        ),
        (Subject::History, MessageKind::Explanation) => Some(
            "Historiquement, cela s'est construit étape par étape. \
             Que penses-tu de cette période maintenant ?",
        ),
        _ => None,
    }
}

/// Per-kind generic fallback. Total over [`MessageKind`].
fn kind_fallback(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::FirstContact => {
            "🎓 Bonjour ! Je suis ton tuteur IA. Je vais t'aider à comprendre les concepts \
             simplement. Sur quel sujet veux-tu travailler aujourd'hui ?"
        }
        MessageKind::Question => {
            "💡 Excellente question ! Laisse-moi t'expliquer cela clairement. \
             As-tu compris ou veux-tu plus de détails ?"
        }
        MessageKind::Short => {
            "👍 Parfait ! Continuons notre exploration. Que souhaites-tu approfondir \
             maintenant ?"
        }
        MessageKind::Thanks => {
            "🙏 Merci à toi ! C'est un plaisir de t'accompagner dans ton apprentissage. \
             Veux-tu continuer avec un autre aspect ?"
        }
        MessageKind::Explanation => {
            "🔍 Je vais t'expliquer cela étape par étape, du plus simple au plus complet. \
             Maintenant, peux-tu me donner un exemple ?"
        }
        MessageKind::Example => {
            "📝 Voici l'idée avec un exemple tiré du quotidien. \
             Veux-tu essayer d'en trouver un autre toi-même ?"
        }
        MessageKind::General => {
            "🤖 Je comprends ta question, et voici ce que je peux t'expliquer. \
             As-tu d'autres interrogations sur ce sujet ?"
        }
    }
}

/// Resolve the canned reply for a (kind, subject) pair.
pub fn fallback_text(kind: MessageKind, subject: Subject) -> &'static str {
    subject_fallback(subject, kind).unwrap_or_else(|| kind_fallback(kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_specific_takes_priority() {
        let text = fallback_text(MessageKind::FirstContact, Subject::Mathematics);
        assert!(text.contains("mathématiques"));
    }

    #[test]
    fn test_generic_kind_when_subject_has_no_entry() {
        // Languages defines no subject-specific texts.
        let text = fallback_text(MessageKind::Question, Subject::Languages);
        assert!(text.contains("Excellente question"));
    }

    #[test]
    fn test_kind_without_subject_entry_falls_through() {
        // Mathematics defines no `Short` entry.
        let text = fallback_text(MessageKind::Short, Subject::Mathematics);
        assert!(text.contains("Continuons"));
    }

    #[test]
    fn test_every_kind_has_a_fallback() {
        for kind in [
            MessageKind::FirstContact,
            MessageKind::Question,
            MessageKind::Short,
            MessageKind::Thanks,
            MessageKind::Explanation,
            MessageKind::Example,
            MessageKind::General,
        ] {
            for subject in [
                Subject::Mathematics,
                Subject::Programming,
                Subject::History,
                Subject::Languages,
                Subject::Science,
                Subject::General,
            ] {
                assert!(!fallback_text(kind, subject).is_empty());
            }
        }
    }
}
