//! Bounded reply cache keyed by recent message content.
//!
//! The key is a fingerprint of the last three messages' contents joined
//! by `|`; the value is the synthesized reply text. Eviction is FIFO on
//! insertion order — access never promotes an entry, and re-inserting
//! an existing key keeps its original position.
//!
//! The cache is an explicit instance owned by the synthesizer (created
//! at construction, fresh per test), not process-wide state.

use std::collections::{HashMap, VecDeque};

use mentora_types::chat::ChatMessage;

/// Hard capacity bound for the reply cache.
pub const REPLY_CACHE_CAPACITY: usize = 50;

/// Number of trailing messages folded into the fingerprint.
const FINGERPRINT_WINDOW: usize = 3;

/// Derive the cache key from the last three messages (fewer if the
/// history is shorter).
pub fn fingerprint(history: &[ChatMessage]) -> String {
    let start = history.len().saturating_sub(FINGERPRINT_WINDOW);
    history[start..]
        .iter()
        .map(|m| m.content.as_str())
        .collect::<Vec<_>>()
        .join("|")
}

/// Insertion-ordered reply cache with FIFO eviction.
#[derive(Debug)]
pub struct ReplyCache {
    entries: HashMap<String, String>,
    order: VecDeque<String>,
    capacity: usize,
}

impl ReplyCache {
    /// Create a cache with the standard capacity of 50 entries.
    pub fn new() -> Self {
        Self::with_capacity(REPLY_CACHE_CAPACITY)
    }

    /// Create a cache with an explicit capacity (for tests).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Look up a reply by fingerprint. Does not affect eviction order.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Insert a reply, evicting the oldest-inserted entry when the
    /// capacity bound is exceeded.
    pub fn insert(&mut self, key: String, value: String) {
        if self.entries.insert(key.clone(), value).is_none() {
            self.order.push_back(key);
        }
        while self.entries.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
            } else {
                break;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ReplyCache {
    fn default() -> Self {
        Self::new()
    }
}
