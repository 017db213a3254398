//! # Portfolio Data
//!
//! Access to the portfolio backend: the read-only reference data behind the
//! chat panels and the free-form assistant used for unmatched messages.
//!
//! ## Components
//! - `traits`: the `PortfolioBackend` seam
//! - `client`: reqwest implementation of the backend
//! - `cache`: time-to-live cache for reference data
//! - `store`: cache-backed accessor used by the chat session

pub mod cache;
pub mod client;
pub mod store;
pub mod traits;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::brain::Category;

pub use cache::ResponseCache;
pub use client::HttpPortfolioClient;
pub use store::PortfolioStore;
pub use traits::PortfolioBackend;

/// Path of the free-form assistant endpoint.
pub const CHAT_ENDPOINT: &str = "/api/ai/chat";

/// A reference-data resource served under `/api/data/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceKey {
    Projects,
    ProjectsDescription,
    SkillsCategories,
    Experiences,
    ContactInfo,
    ResearchWorks,
    Blogs,
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ResourceKey {
    pub const ALL: [ResourceKey; 7] = [
        ResourceKey::Projects,
        ResourceKey::ProjectsDescription,
        ResourceKey::SkillsCategories,
        ResourceKey::Experiences,
        ResourceKey::ContactInfo,
        ResourceKey::ResearchWorks,
        ResourceKey::Blogs,
    ];

    /// Cache key and last path segment of the endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKey::Projects => "projects",
            ResourceKey::ProjectsDescription => "projects-description",
            ResourceKey::SkillsCategories => "skills-categories",
            ResourceKey::Experiences => "experiences",
            ResourceKey::ContactInfo => "contact-info",
            ResourceKey::ResearchWorks => "research-works",
            ResourceKey::Blogs => "blogs",
        }
    }

    pub fn path(&self) -> String {
        format!("/api/data/{}", self.as_str())
    }

    /// Resources a panel for `category` is rendered from.
    pub fn for_category(category: Category) -> &'static [ResourceKey] {
        match category {
            Category::Experience => &[ResourceKey::Experiences],
            Category::Skills => &[ResourceKey::SkillsCategories],
            Category::Projects => &[ResourceKey::Projects, ResourceKey::ProjectsDescription],
            Category::Contact => &[ResourceKey::ContactInfo],
            Category::Research => &[ResourceKey::ResearchWorks, ResourceKey::Blogs],
            Category::Identity | Category::Fallback => &[],
        }
    }
}
