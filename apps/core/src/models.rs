use serde::{Deserialize, Serialize};

use crate::brain::Category;

/// A portfolio project card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    /// Link to the live project or its repository.
    pub link: String,
    /// Shown as the card badge; the renderer uses "Project" when absent.
    #[serde(default)]
    pub category: Option<String>,
    /// Styling hint for the card background.
    #[serde(default)]
    pub theme: Option<String>,
    /// Name of the bundled icon asset.
    #[serde(default, rename = "iconUrl")]
    pub icon_url: Option<String>,
}

/// Free-text introduction shown above the project cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectsDescription {
    pub description: String,
}

/// A titled group of skills (e.g. "AI & Machine Learning").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    #[serde(default)]
    pub icon: Option<String>,
    pub skills: Vec<String>,
}

/// One position in the work history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company_name: String,
    /// Display string such as "Jan 2024 - Present".
    pub date: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default, rename = "iconBg")]
    pub icon_bg: Option<String>,
    #[serde(default)]
    pub points: Vec<String>,
}

/// A contact channel (phone, email, LinkedIn...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(rename = "type")]
    pub kind: String,
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub icon: Option<String>,
}

impl ContactInfo {
    /// Whether `value` is a profile URL rather than plain text.
    pub fn is_link(&self) -> bool {
        self.kind == "linkedin"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchWork {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    pub title: String,
    pub description: String,
    pub link: String,
}

/// Everything the chat panels can show, as loaded when the chat opens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioData {
    pub projects: Vec<Project>,
    pub projects_description: String,
    pub skills_categories: Vec<SkillCategory>,
    pub experiences: Vec<Experience>,
    pub contact_info: Vec<ContactInfo>,
    pub research_works: Vec<ResearchWork>,
    pub blogs: Vec<Blog>,
}

/// Data needed to render one canned answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "panel", rename_all = "snake_case")]
pub enum Panel {
    AboutMe,
    Experience {
        experiences: Vec<Experience>,
    },
    Skills {
        categories: Vec<SkillCategory>,
    },
    Projects {
        description: String,
        projects: Vec<Project>,
    },
    Contact {
        channels: Vec<ContactInfo>,
    },
    Research {
        works: Vec<ResearchWork>,
        blogs: Vec<Blog>,
    },
}

impl Panel {
    pub fn category(&self) -> Category {
        match self {
            Panel::AboutMe => Category::Identity,
            Panel::Experience { .. } => Category::Experience,
            Panel::Skills { .. } => Category::Skills,
            Panel::Projects { .. } => Category::Projects,
            Panel::Contact { .. } => Category::Contact,
            Panel::Research { .. } => Category::Research,
        }
    }
}

/// Who sent a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Assistant,
}

/// Body of a chat message: free text, or a marker for a rendered panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum MessageContent {
    Text(String),
    Panel(Category),
}

/// Represents a single message within a chat session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub content: MessageContent,
    /// Unix timestamp of when the message was added to the history.
    pub created_at: i64,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self::now(Speaker::User, MessageContent::Text(text.into()))
    }

    pub fn assistant(content: MessageContent) -> Self {
        Self::now(Speaker::Assistant, content)
    }

    fn now(speaker: Speaker, content: MessageContent) -> Self {
        Self {
            speaker,
            content,
            created_at: chrono::Utc::now().timestamp(),
        }
    }
}
