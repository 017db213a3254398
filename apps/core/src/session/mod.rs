//! # Chat Session
//!
//! The caller of the intent classifier: keeps the conversation, decides what
//! each classified message turns into, and guards against replies arriving
//! after the chat was closed.

pub mod controller;
pub mod quick_actions;
pub mod reply;

pub use controller::{ChatSession, Generation, PendingTurn, ResolvedTurn};
pub use quick_actions::QuickAction;
pub use reply::{fallback_error_message, TurnOutcome, DATA_LOAD_ERROR};
