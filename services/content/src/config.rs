use std::time::Duration;

use crate::infra::llm::{ProviderConfig, SentimentShape, SummaryShape};

/// Content service configuration loaded from environment variables.
#[derive(Debug)]
pub struct ContentConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HMAC secret for signing JWT access tokens.
    pub jwt_secret: String,
    /// Access-token lifetime in minutes (default 30). Env var: `ACCESS_TOKEN_EXPIRE_MINUTES`.
    pub access_token_expire_minutes: u64,
    /// TCP port to listen on (default 3114). Env var: `CONTENT_PORT`.
    pub content_port: u16,
    /// API key for the text-analysis provider.
    pub provider_api_key: String,
    /// Provider base URL (default Hugging Face inference).
    pub provider_base_url: String,
    /// Model id for summarization.
    pub provider_summary_model: String,
    /// Model id for sentiment classification.
    pub provider_sentiment_model: String,
    /// Per-call provider timeout in seconds (default 20).
    pub provider_timeout_secs: u64,
    /// Response-shape adapter for summaries. Env var: `PROVIDER_SUMMARY_SHAPE`.
    pub provider_summary_shape: SummaryShape,
    /// Response-shape adapter for sentiment. Env var: `PROVIDER_SENTIMENT_SHAPE`.
    pub provider_sentiment_shape: SentimentShape,
}

impl ContentConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            access_token_expire_minutes: std::env::var("ACCESS_TOKEN_EXPIRE_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            content_port: std::env::var("CONTENT_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3114),
            provider_api_key: std::env::var("PROVIDER_API_KEY").expect("PROVIDER_API_KEY"),
            provider_base_url: std::env::var("PROVIDER_BASE_URL")
                .unwrap_or_else(|_| "https://api-inference.huggingface.co".to_owned()),
            provider_summary_model: std::env::var("PROVIDER_SUMMARY_MODEL")
                .unwrap_or_else(|_| "facebook/bart-large-cnn".to_owned()),
            provider_sentiment_model: std::env::var("PROVIDER_SENTIMENT_MODEL").unwrap_or_else(
                |_| "cardiffnlp/twitter-roberta-base-sentiment-latest".to_owned(),
            ),
            provider_timeout_secs: std::env::var("PROVIDER_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(20),
            provider_summary_shape: std::env::var("PROVIDER_SUMMARY_SHAPE")
                .ok()
                .and_then(|v| SummaryShape::from_name(&v))
                .unwrap_or(SummaryShape::SummaryTextList),
            provider_sentiment_shape: std::env::var("PROVIDER_SENTIMENT_SHAPE")
                .ok()
                .and_then(|v| SentimentShape::from_name(&v))
                .unwrap_or(SentimentShape::NestedLabelScores),
        }
    }

    pub fn provider(&self) -> ProviderConfig {
        ProviderConfig {
            base_url: self.provider_base_url.clone(),
            api_key: self.provider_api_key.clone(),
            summary_model: self.provider_summary_model.clone(),
            sentiment_model: self.provider_sentiment_model.clone(),
            timeout: Duration::from_secs(self.provider_timeout_secs),
            summary_shape: self.provider_summary_shape,
            sentiment_shape: self.provider_sentiment_shape,
        }
    }
}
