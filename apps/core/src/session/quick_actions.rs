use serde::Serialize;

use crate::brain::Category;

/// The quick-action buttons shown under the chat input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QuickAction {
    Me,
    Experience,
    Skills,
    Projects,
    Contact,
    Research,
}

impl QuickAction {
    pub const ALL: [QuickAction; 6] = [
        QuickAction::Me,
        QuickAction::Experience,
        QuickAction::Skills,
        QuickAction::Projects,
        QuickAction::Contact,
        QuickAction::Research,
    ];

    /// Button label.
    pub fn title(&self) -> &'static str {
        match self {
            QuickAction::Me => "Me",
            QuickAction::Experience => "Experience",
            QuickAction::Skills => "Skills",
            QuickAction::Projects => "Projects",
            QuickAction::Contact => "Contact",
            QuickAction::Research => "Research",
        }
    }

    /// Message submitted when the button is pressed.
    pub fn prompt(&self) -> &'static str {
        match self {
            QuickAction::Me => "Who is Ahib?",
            QuickAction::Experience => "Tell me about your work experience",
            QuickAction::Skills => "What are your technical skills?",
            QuickAction::Projects => "Show me your projects",
            QuickAction::Contact => "How can I contact you?",
            QuickAction::Research => "Tell me about your research work and blogs",
        }
    }

    /// The panel the prompt is expected to open.
    pub fn category(&self) -> Category {
        match self {
            QuickAction::Me => Category::Identity,
            QuickAction::Experience => Category::Experience,
            QuickAction::Skills => Category::Skills,
            QuickAction::Projects => Category::Projects,
            QuickAction::Contact => Category::Contact,
            QuickAction::Research => Category::Research,
        }
    }

    /// Looks up a button by its 1-based position.
    pub fn from_position(position: usize) -> Option<Self> {
        position.checked_sub(1).and_then(|i| Self::ALL.get(i)).copied()
    }
}
