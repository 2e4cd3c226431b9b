//! Provider abstraction for the generative endpoint.

pub mod provider;

pub use provider::TutorProvider;
