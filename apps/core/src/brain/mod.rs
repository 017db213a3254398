//! # Brain Module
//!
//! Fast, deterministic routing of chat messages to portfolio panels.
//! Runs synchronously on every submitted message before anything touches
//! the network.
//!
//! ## Components
//! - `intent`: Category enum, precedence table and the classifier
//! - `rules`: Utterance normalization and the rule/matcher data types
//! - `lexicon`: Phrase and qualifier tables

pub mod intent;
pub mod lexicon;
pub mod rules;

pub use intent::{classify, Category, CategoryRules, ClassificationResult, IntentClassifier};
pub use rules::{Exclusion, Matcher, Rule, Utterance};
