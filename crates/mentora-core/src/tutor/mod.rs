//! Response synthesis pipeline.
//!
//! `synthesize` runs, in order: fingerprint + cache lookup,
//! classification of the latest message, subject inference over the
//! whole history, prompt assembly, the provider call, normalization of
//! the returned text (or fallback substitution), and the cache store.

pub mod cache;
pub mod classify;
pub mod fallback;
pub mod normalize;
pub mod prompt;
pub mod subject;
pub mod synthesizer;

pub use cache::{fingerprint, ReplyCache};
pub use classify::classify;
pub use fallback::{fallback_text, CONNECTION_NOTICE, QUOTA_NOTICE};
pub use normalize::normalize_reply;
pub use prompt::build_request;
pub use subject::infer_subject;
pub use synthesizer::ResponseSynthesizer;
