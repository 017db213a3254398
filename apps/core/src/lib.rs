//! Portfolio chat core.
//!
//! Routes visitor messages to portfolio panels with a rule-based intent
//! classifier, loads panel data through a caching store and forwards
//! everything else to the remote assistant.

pub mod brain;
pub mod config;
pub mod error;
pub mod models;
pub mod portfolio;
pub mod render;
pub mod session;

#[cfg(test)]
mod tests;

pub use brain::{classify, Category, IntentClassifier};
pub use config::ChatConfig;
pub use error::AppError;
pub use session::ChatSession;
