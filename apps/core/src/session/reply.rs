use serde::Serialize;

use crate::brain::Category;
use crate::error::AppError;
use crate::models::{MessageContent, Panel};

/// Shown when the reference data cannot be loaded.
pub const DATA_LOAD_ERROR: &str =
    "Failed to load portfolio data. Please check your network connection and try again.";

const APOLOGY: &str = "Sorry, I encountered an error while processing your request.";

/// What a resolved turn produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TurnOutcome {
    /// Panel data loaded.
    Panel { panel: Panel },
    /// The message was classified for a panel but its data failed to load.
    PanelUnavailable { category: Category, error: String },
    /// Reply text from the remote assistant, or a user-facing error.
    Text { text: String },
}

impl TurnOutcome {
    /// The history entry recorded for this outcome.
    pub fn content(&self) -> MessageContent {
        match self {
            TurnOutcome::Panel { panel } => MessageContent::Panel(panel.category()),
            TurnOutcome::PanelUnavailable { category, .. } => MessageContent::Panel(*category),
            TurnOutcome::Text { text } => MessageContent::Text(text.clone()),
        }
    }
}

/// Turns a failed remote-assistant call into the text shown in the chat.
pub fn fallback_error_message(err: &AppError) -> String {
    match err {
        AppError::Status { message, .. } => format!("Error: {}", message),
        AppError::Network(_) => format!("{} Please check your network connection and try again.", APOLOGY),
        AppError::Timeout(_) => format!("{} The request timed out. Please try again.", APOLOGY),
        _ => format!("{} Please try again later.", APOLOGY),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_fallback_error_messages() {
        let status = AppError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Unknown error occurred".into(),
        };
        assert_eq!(fallback_error_message(&status), "Error: Unknown error occurred");

        let network = fallback_error_message(&AppError::Network("refused".into()));
        assert!(network.starts_with("Sorry, I encountered an error"));
        assert!(network.ends_with("Please check your network connection and try again."));

        let timeout = fallback_error_message(&AppError::Timeout("slow".into()));
        assert!(timeout.ends_with("The request timed out. Please try again."));

        let other = fallback_error_message(&AppError::Validation("bad json".into()));
        assert!(other.ends_with("Please try again later."));
    }

    #[test]
    fn test_outcome_history_content() {
        let unavailable = TurnOutcome::PanelUnavailable {
            category: Category::Skills,
            error: "offline".into(),
        };
        assert_eq!(unavailable.content(), MessageContent::Panel(Category::Skills));

        let text = TurnOutcome::Text { text: "hi".into() };
        assert_eq!(text.content(), MessageContent::Text("hi".into()));
    }
}
