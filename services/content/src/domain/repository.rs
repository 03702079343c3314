#![allow(async_fn_in_trait)]

use crate::domain::types::{Analysis, Content, NewContent, NewUser, Sentiment, User};
use crate::error::ContentServiceError;

/// Repository for registered accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ContentServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, ContentServiceError>;
    /// Insert a new account and return it with the store-assigned id.
    /// Yields `EmailTaken` when the email is already registered, including
    /// when a concurrent registration won the race after the caller's
    /// duplicate check.
    async fn create(&self, user: &NewUser) -> Result<User, ContentServiceError>;
}

/// Repository for content rows. Every read/delete takes `owner_id` and
/// applies it as a query-level filter, never as a post-fetch check.
pub trait ContentRepository: Send + Sync {
    /// Insert a new row with unset enrichment fields, returning it with the
    /// store-assigned id.
    async fn create(&self, content: &NewContent) -> Result<Content, ContentServiceError>;

    async fn list_by_owner(&self, owner_id: i32) -> Result<Vec<Content>, ContentServiceError>;

    async fn get(
        &self,
        owner_id: i32,
        content_id: i32,
    ) -> Result<Option<Content>, ContentServiceError>;

    /// Merge enrichment results into a row. Only `Some` fields are written;
    /// a field that is already set is never cleared by a `None`.
    async fn set_analysis(
        &self,
        content_id: i32,
        summary: Option<&str>,
        sentiment: Option<Sentiment>,
    ) -> Result<(), ContentServiceError>;

    /// Delete a row. Returns `true` if a row matched both `owner_id` and
    /// `content_id`.
    async fn delete(&self, owner_id: i32, content_id: i32) -> Result<bool, ContentServiceError>;
}

/// Port for the external text-analysis provider. Infallible by contract:
/// every provider failure degrades to absent fields in the returned
/// [`Analysis`], surfaced only through logging.
pub trait AnalyzerPort: Send + Sync {
    async fn analyze(&self, raw_text: &str) -> Analysis;
}
