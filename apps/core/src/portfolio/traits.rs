use async_trait::async_trait;

use super::ResourceKey;
use crate::error::AppError;

/// Defines the public interface of the portfolio backend.
///
/// This trait abstracts the transport so the session can be driven by the
/// real HTTP client or by an in-memory double in tests.
#[async_trait]
pub trait PortfolioBackend: Send + Sync + 'static {
    /// Fetches one reference-data resource as raw JSON.
    async fn fetch(&self, key: ResourceKey) -> Result<serde_json::Value, AppError>;

    /// Sends a free-form message to the remote assistant and returns its reply text.
    async fn chat(&self, message: String) -> Result<String, AppError>;
}
