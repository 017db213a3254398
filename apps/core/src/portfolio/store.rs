use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, instrument};

use super::cache::ResponseCache;
use super::traits::PortfolioBackend;
use super::ResourceKey;
use crate::brain::Category;
use crate::error::AppError;
use crate::models::{
    Blog, ContactInfo, Experience, Panel, PortfolioData, Project, ProjectsDescription,
    ResearchWork, SkillCategory,
};

/// Cache-backed access to the portfolio backend.
///
/// Reference data is served from the cache while fresh and refetched once it
/// expires. Chat requests always go to the backend.
pub struct PortfolioStore<B: PortfolioBackend> {
    backend: Arc<B>,
    cache: Mutex<ResponseCache>,
}

impl<B: PortfolioBackend> PortfolioStore<B> {
    pub fn new(backend: Arc<B>, ttl: Duration) -> Self {
        Self {
            backend,
            cache: Mutex::new(ResponseCache::new(ttl)),
        }
    }

    pub fn backend(&self) -> &Arc<B> {
        &self.backend
    }

    /// Returns the raw JSON for `key`, fetching only when the cache has no fresh copy.
    ///
    /// The lock is not held across the fetch, so concurrent misses for the same
    /// key are not merged and each issues its own request.
    #[instrument(skip(self))]
    pub async fn get(&self, key: ResourceKey) -> Result<serde_json::Value, AppError> {
        let requested_at = Instant::now();

        if let Some(data) = self.cache.lock().await.get_fresh(key, requested_at) {
            debug!("Cache hit for {}", key);
            return Ok(data);
        }

        debug!("Cache miss for {}", key);
        let data = self.backend.fetch(key).await?;
        self.cache.lock().await.insert(key, data.clone(), requested_at);
        Ok(data)
    }

    pub async fn get_as<T: DeserializeOwned>(&self, key: ResourceKey) -> Result<T, AppError> {
        Ok(serde_json::from_value(self.get(key).await?)?)
    }

    /// Loads every resource in parallel.
    pub async fn load_all(&self) -> Result<PortfolioData, AppError> {
        let (
            projects,
            description,
            skills_categories,
            experiences,
            contact_info,
            research_works,
            blogs,
        ) = tokio::try_join!(
            self.get_as::<Vec<Project>>(ResourceKey::Projects),
            self.get_as::<ProjectsDescription>(ResourceKey::ProjectsDescription),
            self.get_as::<Vec<SkillCategory>>(ResourceKey::SkillsCategories),
            self.get_as::<Vec<Experience>>(ResourceKey::Experiences),
            self.get_as::<Vec<ContactInfo>>(ResourceKey::ContactInfo),
            self.get_as::<Vec<ResearchWork>>(ResourceKey::ResearchWorks),
            self.get_as::<Vec<Blog>>(ResourceKey::Blogs),
        )?;

        Ok(PortfolioData {
            projects,
            projects_description: description.description,
            skills_categories,
            experiences,
            contact_info,
            research_works,
            blogs,
        })
    }

    /// Loads the data behind the panel for `category`.
    ///
    /// Returns `None` for [`Category::Fallback`], which has no panel.
    pub async fn load_panel(&self, category: Category) -> Result<Option<Panel>, AppError> {
        let panel = match category {
            Category::Identity => Panel::AboutMe,
            Category::Experience => Panel::Experience {
                experiences: self.get_as(ResourceKey::Experiences).await?,
            },
            Category::Skills => Panel::Skills {
                categories: self.get_as(ResourceKey::SkillsCategories).await?,
            },
            Category::Projects => {
                let (projects, description) = tokio::try_join!(
                    self.get_as::<Vec<Project>>(ResourceKey::Projects),
                    self.get_as::<ProjectsDescription>(ResourceKey::ProjectsDescription),
                )?;
                Panel::Projects {
                    description: description.description,
                    projects,
                }
            }
            Category::Contact => Panel::Contact {
                channels: self.get_as(ResourceKey::ContactInfo).await?,
            },
            Category::Research => {
                let (works, blogs) = tokio::try_join!(
                    self.get_as::<Vec<ResearchWork>>(ResourceKey::ResearchWorks),
                    self.get_as::<Vec<Blog>>(ResourceKey::Blogs),
                )?;
                Panel::Research { works, blogs }
            }
            Category::Fallback => return Ok(None),
        };
        Ok(Some(panel))
    }

    /// Forwards a message to the remote assistant.
    pub async fn chat(&self, message: String) -> Result<String, AppError> {
        self.backend.chat(message).await
    }

    pub async fn invalidate(&self, key: ResourceKey) {
        self.cache.lock().await.invalidate(key);
    }
}
