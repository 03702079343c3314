use chrono::{DateTime, Utc};

/// Registered account owned by the content service.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a new account. The id is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// A submitted piece of text plus its derived analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    pub id: i32,
    pub owner_id: i32,
    pub raw_content: String,
    pub summary: Option<String>,
    pub sentiment: Option<Sentiment>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a new content row. Enrichment fields start unset.
#[derive(Debug, Clone)]
pub struct NewContent {
    pub owner_id: i32,
    pub raw_content: String,
    pub created_at: DateTime<Utc>,
}

/// Canonical sentiment classification of a content row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Parse a provider label, case-insensitively. Returns `None` for any
    /// label outside the canonical three — unknown labels are dropped, not
    /// coerced.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_uppercase().as_str() {
            "POSITIVE" => Some(Self::Positive),
            "NEGATIVE" => Some(Self::Negative),
            "NEUTRAL" => Some(Self::Neutral),
            _ => None,
        }
    }

    /// Canonical wire/store representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "POSITIVE",
            Self::Negative => "NEGATIVE",
            Self::Neutral => "NEUTRAL",
        }
    }
}

/// Best-effort enrichment result. Each side is independently present or
/// absent; `(None, None)` is a valid, normal outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analysis {
    pub summary: Option<String>,
    pub sentiment: Option<Sentiment>,
}

impl Analysis {
    pub fn is_empty(&self) -> bool {
        self.summary.is_none() && self.sentiment.is_none()
    }
}
