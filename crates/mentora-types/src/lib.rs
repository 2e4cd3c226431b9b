//! Shared domain types for Mentora.
//!
//! This crate holds the data shapes exchanged between the conversation
//! core and the infrastructure layer: chat messages and sessions,
//! classification tags, generation requests, provider errors, and the
//! tutor configuration. It carries no business logic.

pub mod chat;
pub mod config;
pub mod llm;
pub mod tutor;
