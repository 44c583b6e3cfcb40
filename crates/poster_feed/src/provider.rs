use std::time::Duration;

use crate::{FeedError, FeedFailureKind, FeedPost};

#[derive(Debug, Clone)]
pub struct FeedSettings {
    /// Endpoint returning a JSON array of recent posts, newest-first.
    /// The embedding application points this at its authenticated relay.
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Upper bound applied to the returned sequence; the display layer caps
    /// again, this keeps payload handling bounded.
    pub max_items: usize,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8787/recent".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_items: 5,
        }
    }
}

/// The only network-facing dependency: "give me the most recent posts".
#[async_trait::async_trait]
pub trait FeedProvider: Send + Sync {
    async fn recent_posts(&self) -> Result<Vec<FeedPost>, FeedError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFeedProvider {
    settings: FeedSettings,
}

impl ReqwestFeedProvider {
    pub fn new(settings: FeedSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, FeedError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| FeedError::new(FeedFailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl FeedProvider for ReqwestFeedProvider {
    async fn recent_posts(&self) -> Result<Vec<FeedPost>, FeedError> {
        let endpoint = reqwest::Url::parse(&self.settings.endpoint)
            .map_err(|err| FeedError::new(FeedFailureKind::InvalidEndpoint, err.to_string()))?;
        let client = self.build_client()?;

        let response = client
            .get(endpoint)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::new(
                FeedFailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = response.text().await.map_err(map_reqwest_error)?;
        let mut posts: Vec<FeedPost> = serde_json::from_str(&body)
            .map_err(|err| FeedError::new(FeedFailureKind::InvalidBody, err.to_string()))?;
        posts.truncate(self.settings.max_items);
        Ok(posts)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FeedError {
    if err.is_timeout() {
        return FeedError::new(FeedFailureKind::Timeout, err.to_string());
    }
    FeedError::new(FeedFailureKind::Network, err.to_string())
}
