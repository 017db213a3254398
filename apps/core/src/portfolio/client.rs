use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::traits::PortfolioBackend;
use super::{ResourceKey, CHAT_ENDPOINT};
use crate::config::ChatConfig;
use crate::error::AppError;

const UNKNOWN_ERROR: &str = "Unknown error occurred";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    response: String,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// reqwest-backed client for the portfolio backend.
#[derive(Clone)]
pub struct HttpPortfolioClient {
    client: Client,
    config: ChatConfig,
}

impl HttpPortfolioClient {
    /// Builds a client whose requests are bounded by `config.request_timeout()`.
    pub fn new(config: ChatConfig) -> Result<Self, AppError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }
}

#[async_trait]
impl PortfolioBackend for HttpPortfolioClient {
    async fn fetch(&self, key: ResourceKey) -> Result<serde_json::Value, AppError> {
        let url = self.config.endpoint(&key.path())?;
        debug!("Fetching {} from {}", key, url);

        let res = self.client.get(url).send().await?;
        let status = res.status();

        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("");
            warn!("Fetching {} failed with status {}", key, status);
            return Err(AppError::Status {
                status,
                message: format!("Failed to fetch {}: {} {}", key, status.as_u16(), reason)
                    .trim_end()
                    .to_string(),
            });
        }

        Ok(res.json().await?)
    }

    async fn chat(&self, message: String) -> Result<String, AppError> {
        let url = self.config.endpoint(CHAT_ENDPOINT)?;
        info!("Forwarding message to remote assistant ({} chars)", message.len());

        let res = self
            .client
            .post(url)
            .json(&ChatRequest { message: &message })
            .send()
            .await?;
        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            let error: ErrorBody = serde_json::from_str(&body).unwrap_or_default();
            warn!("Remote assistant returned status {}", status);
            return Err(AppError::Status {
                status,
                message: error
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
            });
        }

        let reply: ChatReply = serde_json::from_str(&body)?;
        Ok(reply.response)
    }
}
