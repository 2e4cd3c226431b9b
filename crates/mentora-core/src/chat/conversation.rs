//! Conversation state keeper.
//!
//! Owns the ordered message sequence, the busy flag, and the active
//! (subject, level) session, and drives one synthesis turn per learner
//! message. The UI holds a cloned handle: it reads snapshots through
//! the accessors and re-renders after each turn.
//!
//! Every state change is tagged with a generation counter. Clearing the
//! conversation or starting a new session bumps the generation, so a
//! reply still in flight for the old conversation is discarded when it
//! arrives instead of being appended to the new one. The provider call
//! itself is never cancelled.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::{debug, info, warn};

use mentora_types::chat::{ChatMessage, Session};

use crate::llm::TutorProvider;
use crate::tutor::{ResponseSynthesizer, CONNECTION_NOTICE};

/// Delay before the initial greeting of a new session is enqueued,
/// letting the UI settle after the screen transition.
const SESSION_WARMUP_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Default)]
struct ChatState {
    messages: Vec<ChatMessage>,
    busy: bool,
    session: Option<Session>,
    generation: u64,
}

/// Shared handle to a single tutoring conversation.
///
/// Cloning is cheap; all clones observe the same state. The busy flag
/// is advisory — the UI disables input while it is set, but nothing
/// here prevents overlapping `send_message` calls from a caller that
/// bypasses it.
pub struct Conversation<P: TutorProvider + 'static> {
    state: Arc<Mutex<ChatState>>,
    synthesizer: Arc<ResponseSynthesizer<P>>,
}

impl<P: TutorProvider + 'static> Clone for Conversation<P> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            synthesizer: Arc::clone(&self.synthesizer),
        }
    }
}

impl<P: TutorProvider + 'static> Conversation<P> {
    /// Create a conversation backed by the given synthesizer.
    pub fn new(synthesizer: ResponseSynthesizer<P>) -> Self {
        Self {
            state: Arc::new(Mutex::new(ChatState::default())),
            synthesizer: Arc::new(synthesizer),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ChatState> {
        self.state.lock().expect("conversation state poisoned")
    }

    /// Snapshot of the message sequence.
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.lock().messages.clone()
    }

    /// Whether a synthesis turn is in flight.
    pub fn is_loading(&self) -> bool {
        self.lock().busy
    }

    /// The active session, if any.
    pub fn session(&self) -> Option<Session> {
        self.lock().session.clone()
    }

    /// Append a learner message and run one synthesis turn.
    ///
    /// Failures never surface as errors: if the synthesis task itself
    /// dies, a canned apology is appended instead. The reply is dropped
    /// if the conversation was cleared or replaced while the request
    /// was in flight.
    pub async fn send_message(&self, content: impl Into<String>) {
        let (history, generation) = {
            let mut state = self.lock();
            state.messages.push(ChatMessage::user(content));
            state.busy = true;
            (state.messages.clone(), state.generation)
        };

        let synthesizer = Arc::clone(&self.synthesizer);
        let reply = match tokio::spawn(async move { synthesizer.synthesize(&history).await }).await
        {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "synthesis task failed");
                CONNECTION_NOTICE.to_string()
            }
        };

        let mut state = self.lock();
        if state.generation == generation {
            state.messages.push(ChatMessage::assistant(reply));
            state.busy = false;
        } else {
            debug!("discarding reply for a superseded conversation");
        }
    }

    /// Clear the messages and the session, and invalidate any reply
    /// still in flight. The provider call is not cancelled.
    pub fn clear_messages(&self) {
        let mut state = self.lock();
        state.messages.clear();
        state.session = None;
        state.busy = false;
        state.generation += 1;
        debug!("conversation cleared");
    }

    /// Restart the conversation for a (subject, level) pair.
    ///
    /// Clears the messages, records the session, then — after a short
    /// fixed delay — enqueues the initial greeting as a synthetic
    /// learner message. Calling this twice for the same pair restarts
    /// the conversation both times. The greeting is skipped if the
    /// session was superseded during the delay.
    pub async fn start_new_session(&self, subject: &str, level: &str) {
        let generation = {
            let mut state = self.lock();
            state.messages.clear();
            state.session = Some(Session::new(subject, level));
            state.busy = false;
            state.generation += 1;
            state.generation
        };
        info!(subject, level, "new tutoring session");

        tokio::time::sleep(SESSION_WARMUP_DELAY).await;

        if self.lock().generation != generation {
            debug!("session superseded during warmup, skipping greeting");
            return;
        }

        self.send_message(format!(
            "Bonjour ! Je veux apprendre \"{subject}\" au niveau \"{level}\". \
             Commence par m'expliquer les bases."
        ))
        .await;
    }
}
