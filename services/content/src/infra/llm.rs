//! HTTP integration with the external text-analysis provider.
//!
//! Summarization and sentiment classification are two independent model
//! endpoints. They are queried concurrently, each bounded by the client
//! timeout, and every failure mode folds into an absent field of the
//! returned [`Analysis`] — this module logs, it never errors upward.

use std::time::Duration;

use serde_json::{Value, json};
use tracing::{error, warn};

use crate::domain::repository::AnalyzerPort;
use crate::domain::types::{Analysis, Sentiment};

// ── Response-shape adapters ──────────────────────────────────────────────────
//
// Providers ship several envelope shapes for the same logical payload. Each
// shape gets one adapter; which one applies is fixed by configuration, not
// guessed per response.

/// Envelope shape of the summarization response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryShape {
    /// `[{"summary_text": "..."}]`
    SummaryTextList,
    /// `{"summary_text": "..."}`
    SummaryTextObject,
}

impl SummaryShape {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "summary_text_list" => Some(Self::SummaryTextList),
            "summary_text_object" => Some(Self::SummaryTextObject),
            _ => None,
        }
    }

    pub fn parse(self, body: &Value) -> Option<String> {
        let obj = match self {
            Self::SummaryTextList => body.as_array()?.first()?,
            Self::SummaryTextObject => body,
        };
        let text = obj.get("summary_text")?.as_str()?;
        if text.is_empty() {
            return None;
        }
        Some(text.to_owned())
    }
}

/// Envelope shape of the sentiment-classification response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentShape {
    /// `[[{"label": "...", "score": 0.99}, ...]]`
    NestedLabelScores,
    /// `[{"label": "...", "score": 0.99}, ...]`
    FlatLabelScores,
}

impl SentimentShape {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "nested_label_scores" => Some(Self::NestedLabelScores),
            "flat_label_scores" => Some(Self::FlatLabelScores),
            _ => None,
        }
    }

    /// Extract the top-scored label from the envelope.
    pub fn parse(self, body: &Value) -> Option<String> {
        let scores = match self {
            Self::NestedLabelScores => body.as_array()?.first()?.as_array()?,
            Self::FlatLabelScores => body.as_array()?,
        };
        scores
            .iter()
            .filter_map(|entry| {
                let label = entry.get("label")?.as_str()?;
                let score = entry.get("score")?.as_f64()?;
                Some((label, score))
            })
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(label, _)| label.to_owned())
    }
}

// ── Analyzer ─────────────────────────────────────────────────────────────────

/// Configuration for [`HttpAnalyzer`], carved out of the service config.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub base_url: String,
    pub api_key: String,
    pub summary_model: String,
    pub sentiment_model: String,
    pub timeout: Duration,
    pub summary_shape: SummaryShape,
    pub sentiment_shape: SentimentShape,
}

#[derive(Clone)]
pub struct HttpAnalyzer {
    client: reqwest::Client,
    config: ProviderConfig,
}

impl HttpAnalyzer {
    pub fn new(config: ProviderConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// One provider round trip: POST the raw text to a model endpoint and
    /// return the parsed JSON body, or `None` with the failure logged.
    async fn query_model(&self, model: &str, raw_text: &str) -> Option<Value> {
        let url = format!("{}/models/{}", self.config.base_url, model);

        let response = match self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&json!({ "inputs": raw_text }))
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                // Covers connect failures and the per-call timeout alike.
                error!(model, error = %e, "provider unreachable");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            error!(model, status = status.as_u16(), "provider returned error status");
            return None;
        }

        match response.json::<Value>().await {
            Ok(body) => Some(body),
            Err(e) => {
                error!(model, error = %e, "provider response is not valid JSON");
                None
            }
        }
    }

    async fn fetch_summary(&self, raw_text: &str) -> Option<String> {
        let body = self.query_model(&self.config.summary_model, raw_text).await?;
        let summary = self.config.summary_shape.parse(&body);
        if summary.is_none() {
            warn!(
                model = %self.config.summary_model,
                "provider summary response lacked the expected shape"
            );
        }
        summary
    }

    async fn fetch_sentiment(&self, raw_text: &str) -> Option<Sentiment> {
        let body = self
            .query_model(&self.config.sentiment_model, raw_text)
            .await?;
        let Some(label) = self.config.sentiment_shape.parse(&body) else {
            warn!(
                model = %self.config.sentiment_model,
                "provider sentiment response lacked the expected shape"
            );
            return None;
        };
        let sentiment = Sentiment::from_label(&label);
        if sentiment.is_none() {
            warn!(label, "unrecognized sentiment label");
        }
        sentiment
    }
}

impl AnalyzerPort for HttpAnalyzer {
    async fn analyze(&self, raw_text: &str) -> Analysis {
        // The two model calls are independent: they run concurrently and a
        // failure or timeout in one leaves the other's result intact.
        let (summary, sentiment) =
            tokio::join!(self.fetch_summary(raw_text), self.fetch_sentiment(raw_text));
        Analysis { summary, sentiment }
    }
}
