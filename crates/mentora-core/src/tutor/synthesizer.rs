//! Response synthesizer.
//!
//! `synthesize` never fails: every error from the provider collapses to
//! canned text, so the conversation stays usable after any failure. A
//! failing turn's text is cached under the same fingerprint a success
//! would use (kept as-designed; see DESIGN.md for the stickiness
//! caveat).

use std::sync::Mutex;

use tracing::{debug, warn};

use mentora_types::chat::ChatMessage;
use mentora_types::llm::LlmError;

use crate::llm::TutorProvider;
use crate::tutor::cache::{fingerprint, ReplyCache};
use crate::tutor::fallback::{fallback_text, QUOTA_NOTICE};
use crate::tutor::{build_request, classify, infer_subject, normalize_reply};

/// Computes one tutor reply per conversation turn.
///
/// Owns the provider and the bounded reply cache. The cache mutex is
/// held only across lookups and stores, never across the provider call,
/// so the single-in-flight design stays lock-friendly even if the
/// advisory busy gate upstream is bypassed.
pub struct ResponseSynthesizer<P: TutorProvider> {
    provider: P,
    cache: Mutex<ReplyCache>,
}

impl<P: TutorProvider> ResponseSynthesizer<P> {
    /// Create a synthesizer with a fresh reply cache.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            cache: Mutex::new(ReplyCache::new()),
        }
    }

    /// Access the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Number of cached replies (for tests and diagnostics).
    pub fn cached_replies(&self) -> usize {
        self.cache.lock().expect("reply cache poisoned").len()
    }

    /// Compute the reply for a message history ending with the
    /// just-appended learner message. Always resolves to some text.
    pub async fn synthesize(&self, history: &[ChatMessage]) -> String {
        let key = fingerprint(history);

        if let Some(hit) = self
            .cache
            .lock()
            .expect("reply cache poisoned")
            .get(&key)
            .map(str::to_string)
        {
            debug!("reply served from cache");
            return hit;
        }

        let latest = history.last().map(|m| m.content.as_str()).unwrap_or("");
        let kind = classify(latest, history.len());
        let subject = infer_subject(history);
        let request = build_request(history, kind, subject);

        debug!(provider = self.provider.name(), %kind, %subject, "requesting tutor reply");

        let reply = match self.provider.generate(&request).await {
            Ok(raw) => normalize_reply(&raw),
            Err(LlmError::RateLimited { message }) => {
                warn!(%message, "endpoint quota exhausted, substituting notice");
                QUOTA_NOTICE.to_string()
            }
            Err(err) => {
                warn!(error = %err, %kind, %subject, "provider call failed, using canned reply");
                fallback_text(kind, subject).to_string()
            }
        };

        self.cache
            .lock()
            .expect("reply cache poisoned")
            .insert(key, reply.clone());

        reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use mentora_types::llm::GenerationRequest;
    use mentora_types::tutor::{MessageKind, Subject};

    /// Scripted provider: returns a fixed outcome and counts calls.
    struct ScriptedProvider {
        outcome: Result<String, fn() -> LlmError>,
        calls: AtomicUsize,
    }

    impl ScriptedProvider {
        fn replying(text: &str) -> Self {
            Self {
                outcome: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing(make_err: fn() -> LlmError) -> Self {
            Self {
                outcome: Err(make_err),
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl TutorProvider for ScriptedProvider {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn generate(&self, _request: &GenerationRequest) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.outcome {
                Ok(text) => Ok(text.clone()),
                Err(make_err) => Err(make_err()),
            }
        }
    }

    fn long_history() -> Vec<ChatMessage> {
        vec![
            ChatMessage::user("Je veux réviser les fractions"),
            ChatMessage::assistant("Très bien, commençons."),
            ChatMessage::user("Comment on simplifie une fraction?"),
        ]
    }

    #[tokio::test]
    async fn test_reply_is_normalized() {
        let synth = ResponseSynthesizer::new(ScriptedProvider::replying(
            "Tuteur: voici l'explication\n\ndétaillée",
        ));
        let reply = synth.synthesize(&long_history()).await;
        assert_eq!(reply, "Voici l'explication détaillée.");
    }

    #[tokio::test]
    async fn test_cache_hit_skips_provider() {
        let synth = ResponseSynthesizer::new(ScriptedProvider::replying("Une réponse."));
        let history = long_history();

        let first = synth.synthesize(&history).await;
        let second = synth.synthesize(&history).await;

        assert_eq!(first, second);
        assert_eq!(synth.provider().call_count(), 1);
    }

    #[tokio::test]
    async fn test_timeout_yields_kind_subject_fallback_and_caches_it() {
        let synth = ResponseSynthesizer::new(ScriptedProvider::failing(|| LlmError::Timeout));
        let history = long_history();

        let reply = synth.synthesize(&history).await;
        assert_eq!(reply, fallback_text(MessageKind::Question, Subject::Mathematics));
        assert_eq!(synth.cached_replies(), 1);

        // The failure text is sticky for this fingerprint.
        let again = synth.synthesize(&history).await;
        assert_eq!(again, reply);
        assert_eq!(synth.provider().call_count(), 1);
    }

    #[tokio::test]
    async fn test_quota_failure_yields_distinct_notice() {
        let synth = ResponseSynthesizer::new(ScriptedProvider::failing(|| LlmError::RateLimited {
            message: "quota exceeded".to_string(),
        }));
        let reply = synth.synthesize(&long_history()).await;
        assert_eq!(reply, QUOTA_NOTICE);
    }

    #[tokio::test]
    async fn test_empty_candidates_fall_back() {
        let synth =
            ResponseSynthesizer::new(ScriptedProvider::failing(|| LlmError::EmptyCandidates));
        let history = vec![ChatMessage::user("Bonjour")];
        let reply = synth.synthesize(&history).await;
        // First contact with no subject keywords: generic greeting fallback.
        assert_eq!(reply, fallback_text(MessageKind::FirstContact, Subject::General));
    }

    #[tokio::test]
    async fn test_distinct_fingerprints_fill_cache_independently() {
        let synth = ResponseSynthesizer::new(ScriptedProvider::replying("Bien."));
        for i in 0..3 {
            let history = vec![ChatMessage::user(format!("message numéro {i}"))];
            synth.synthesize(&history).await;
        }
        assert_eq!(synth.cached_replies(), 3);
        assert_eq!(synth.provider().call_count(), 3);
    }
}
