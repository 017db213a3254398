use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

use super::quick_actions::QuickAction;
use super::reply::{fallback_error_message, TurnOutcome, DATA_LOAD_ERROR};
use crate::brain::{Category, IntentClassifier};
use crate::config::ChatConfig;
use crate::models::{ChatMessage, PortfolioData};
use crate::portfolio::{PortfolioBackend, PortfolioStore};

/// Identifies the session lifetime a turn was started in.
///
/// Closing the session advances the generation, so results of turns started
/// before the close no longer match and are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Generation(u64);

/// A submitted message waiting for its reply.
///
/// Holds no borrow of the session, so the async work can run while the
/// session keeps handling input.
#[derive(Debug, Clone)]
pub struct PendingTurn {
    generation: Generation,
    category: Category,
    rule: Option<&'static str>,
    message: String,
    delay: Duration,
}

impl PendingTurn {
    pub fn category(&self) -> Category {
        self.category
    }

    pub fn rule(&self) -> Option<&'static str> {
        self.rule
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Produces the reply: panel data after the simulated delay, or the
    /// remote assistant's answer for unmatched messages. Never fails; errors
    /// become part of the outcome.
    #[instrument(skip(self, store), fields(category = %self.category))]
    pub async fn resolve<B: PortfolioBackend>(self, store: &PortfolioStore<B>) -> ResolvedTurn {
        let outcome = if self.category.is_panel() {
            tokio::time::sleep(self.delay).await;
            match store.load_panel(self.category).await {
                Ok(Some(panel)) => TurnOutcome::Panel { panel },
                Ok(None) => TurnOutcome::PanelUnavailable {
                    category: self.category,
                    error: DATA_LOAD_ERROR.to_string(),
                },
                Err(e) => {
                    warn!("Panel data for {} unavailable: {}", self.category, e);
                    TurnOutcome::PanelUnavailable {
                        category: self.category,
                        error: e.to_string(),
                    }
                }
            }
        } else {
            match store.chat(self.message).await {
                Ok(text) => TurnOutcome::Text { text },
                Err(e) => {
                    error!("Remote assistant request failed: {}", e);
                    TurnOutcome::Text {
                        text: fallback_error_message(&e),
                    }
                }
            }
        };

        ResolvedTurn {
            generation: self.generation,
            category: self.category,
            outcome,
        }
    }
}

/// A finished turn, ready to be applied to the session that started it.
#[derive(Debug, Clone)]
pub struct ResolvedTurn {
    generation: Generation,
    pub category: Category,
    pub outcome: TurnOutcome,
}

impl ResolvedTurn {
    pub fn generation(&self) -> Generation {
        self.generation
    }
}

/// Controller for one chat window.
///
/// Owns the conversation history and UI flags, classifies each submitted
/// message and applies replies only while the generation they were started
/// in is still current.
pub struct ChatSession<B: PortfolioBackend> {
    id: Uuid,
    classifier: IntentClassifier,
    store: Arc<PortfolioStore<B>>,
    history: Vec<ChatMessage>,
    visible: bool,
    chat_started: bool,
    options_visible: bool,
    thinking: bool,
    generation: u64,
    data: Option<PortfolioData>,
    data_error: Option<String>,
    response_delay: Duration,
}

impl<B: PortfolioBackend> ChatSession<B> {
    /// Creates a session with its own cache in front of `backend`.
    pub fn new(backend: Arc<B>, config: &ChatConfig) -> Self {
        let store = Arc::new(PortfolioStore::new(backend, config.cache_ttl()));
        Self::with_store(store, config.response_delay())
    }

    /// Creates a session over an existing (possibly shared) store.
    pub fn with_store(store: Arc<PortfolioStore<B>>, response_delay: Duration) -> Self {
        Self {
            id: Uuid::new_v4(),
            classifier: IntentClassifier::new(),
            store,
            history: Vec::new(),
            visible: false,
            chat_started: false,
            options_visible: true,
            thinking: false,
            generation: 0,
            data: None,
            data_error: None,
            response_delay,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn store(&self) -> &Arc<PortfolioStore<B>> {
        &self.store
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn chat_started(&self) -> bool {
        self.chat_started
    }

    pub fn options_visible(&self) -> bool {
        self.options_visible
    }

    pub fn is_thinking(&self) -> bool {
        self.thinking
    }

    pub fn current_generation(&self) -> Generation {
        Generation(self.generation)
    }

    /// Reference data loaded by the last successful [`open`](Self::open) or retry.
    pub fn data(&self) -> Option<&PortfolioData> {
        self.data.as_ref()
    }

    pub fn data_error(&self) -> Option<&str> {
        self.data_error.as_deref()
    }

    pub fn quick_actions(&self) -> &'static [QuickAction] {
        &QuickAction::ALL
    }

    /// Shows the chat and preloads all reference data.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub async fn open(&mut self) {
        info!("Chat session opened");
        self.visible = true;
        self.options_visible = true;
        self.load_data().await;
    }

    /// Retries the preload after a failure.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub async fn retry_load(&mut self) {
        info!("Retrying portfolio data load");
        self.load_data().await;
    }

    async fn load_data(&mut self) {
        self.data_error = None;
        match self.store.load_all().await {
            Ok(data) => {
                debug!("Portfolio data loaded");
                self.data = Some(data);
            }
            Err(e) => {
                error!("Error fetching portfolio data: {}", e);
                self.data_error = Some(DATA_LOAD_ERROR.to_string());
            }
        }
    }

    /// Hides the chat and invalidates every turn still in flight.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn close(&mut self) {
        info!("Chat session closed");
        self.visible = false;
        self.chat_started = false;
        self.thinking = false;
        self.generation += 1;
    }

    /// Records a user message and classifies it.
    ///
    /// Returns `None` for blank input, which is ignored entirely.
    #[instrument(skip(self, text), fields(session_id = %self.id))]
    pub fn submit(&mut self, text: &str) -> Option<PendingTurn> {
        let message = text.trim();
        if message.is_empty() {
            return None;
        }

        self.chat_started = true;
        self.options_visible = false;
        self.thinking = true;
        self.history.push(ChatMessage::user(message));

        let result = self.classifier.classify_detailed(message);
        info!(category = %result.category, rule = ?result.rule, "Message classified");

        Some(PendingTurn {
            generation: self.current_generation(),
            category: result.category,
            rule: result.rule,
            message: message.to_string(),
            delay: self.response_delay,
        })
    }

    /// Submits the prompt behind a quick-action button.
    pub fn submit_quick_action(&mut self, action: QuickAction) -> Option<PendingTurn> {
        self.submit(action.prompt())
    }

    /// Appends a resolved reply if it belongs to the current generation.
    ///
    /// Returns `false` when the turn is stale and was dropped.
    pub fn apply(&mut self, turn: &ResolvedTurn) -> bool {
        if turn.generation != self.current_generation() {
            debug!(session_id = %self.id, "Discarding reply from a closed session");
            return false;
        }

        if let TurnOutcome::PanelUnavailable { .. } = &turn.outcome {
            self.data_error = Some(DATA_LOAD_ERROR.to_string());
        }

        self.history.push(ChatMessage::assistant(turn.outcome.content()));
        self.thinking = false;
        self.options_visible = true;
        true
    }

    /// Submits, resolves and applies a message in one step.
    ///
    /// Returns the applied turn, or `None` for blank input or a stale reply.
    pub async fn handle(&mut self, text: &str) -> Option<ResolvedTurn> {
        let pending = self.submit(text)?;
        let store = Arc::clone(&self.store);
        let resolved = pending.resolve(&store).await;
        if self.apply(&resolved) {
            Some(resolved)
        } else {
            None
        }
    }
}
