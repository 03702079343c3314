use chrono::Utc;

use crate::domain::repository::{AnalyzerPort, ContentRepository};
use crate::domain::types::{Content, NewContent};
use crate::error::ContentServiceError;

// ── SubmitContent ────────────────────────────────────────────────────────────

pub struct SubmitContentInput {
    pub raw_content: String,
}

pub struct SubmitContentUseCase<R: ContentRepository, A: AnalyzerPort> {
    pub repo: R,
    pub analyzer: A,
}

impl<R: ContentRepository, A: AnalyzerPort> SubmitContentUseCase<R, A> {
    /// Two-phase write: persist the row first (id assigned, enrichment
    /// fields unset), then run the analyzer on the persisted text, then
    /// merge whatever it produced. The analyzer port cannot fail, so the
    /// submission succeeds even when enrichment yields nothing.
    pub async fn execute(
        &self,
        owner_id: i32,
        input: SubmitContentInput,
    ) -> Result<Content, ContentServiceError> {
        let mut content = self
            .repo
            .create(&NewContent {
                owner_id,
                raw_content: input.raw_content,
                created_at: Utc::now(),
            })
            .await?;

        let analysis = self.analyzer.analyze(&content.raw_content).await;
        if analysis.is_empty() {
            return Ok(content);
        }

        self.repo
            .set_analysis(
                content.id,
                analysis.summary.as_deref(),
                analysis.sentiment,
            )
            .await?;

        // The row was created with both fields unset in this same call, so
        // merging in memory matches exactly what set_analysis wrote.
        content.summary = analysis.summary;
        content.sentiment = analysis.sentiment;
        Ok(content)
    }
}

// ── ListContents ─────────────────────────────────────────────────────────────

pub struct ListContentsUseCase<R: ContentRepository> {
    pub repo: R,
}

impl<R: ContentRepository> ListContentsUseCase<R> {
    pub async fn execute(&self, owner_id: i32) -> Result<Vec<Content>, ContentServiceError> {
        self.repo.list_by_owner(owner_id).await
    }
}

// ── GetContent ───────────────────────────────────────────────────────────────

pub struct GetContentUseCase<R: ContentRepository> {
    pub repo: R,
}

impl<R: ContentRepository> GetContentUseCase<R> {
    /// Absent and not-owned rows are indistinguishable: both are
    /// `ContentNotFound`.
    pub async fn execute(
        &self,
        owner_id: i32,
        content_id: i32,
    ) -> Result<Content, ContentServiceError> {
        self.repo
            .get(owner_id, content_id)
            .await?
            .ok_or(ContentServiceError::ContentNotFound)
    }
}

// ── DeleteContent ────────────────────────────────────────────────────────────

pub struct DeleteContentUseCase<R: ContentRepository> {
    pub repo: R,
}

impl<R: ContentRepository> DeleteContentUseCase<R> {
    pub async fn execute(
        &self,
        owner_id: i32,
        content_id: i32,
    ) -> Result<(), ContentServiceError> {
        let deleted = self.repo.delete(owner_id, content_id).await?;
        if !deleted {
            return Err(ContentServiceError::ContentNotFound);
        }
        Ok(())
    }
}
