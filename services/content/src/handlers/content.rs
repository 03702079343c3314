use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::domain::types::Content;
use crate::error::ContentServiceError;
use crate::identity::Identity;
use crate::state::AppState;
use crate::usecase::content::{
    DeleteContentUseCase, GetContentUseCase, ListContentsUseCase, SubmitContentInput,
    SubmitContentUseCase,
};

// ── Response type ────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ContentResponse {
    pub id: i32,
    pub owner_id: i32,
    pub raw_content: String,
    pub summary: Option<String>,
    pub sentiment: Option<&'static str>,
    #[serde(serialize_with = "digest_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Content> for ContentResponse {
    fn from(content: Content) -> Self {
        Self {
            id: content.id,
            owner_id: content.owner_id,
            raw_content: content.raw_content,
            summary: content.summary,
            sentiment: content.sentiment.map(|s| s.as_str()),
            created_at: content.created_at,
        }
    }
}

// ── POST /contents ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateContentRequest {
    pub raw_content: String,
}

/// Enrichment runs inline: the response already carries the final state of
/// the record, whether the provider produced anything or not.
pub async fn create_content(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateContentRequest>,
) -> Result<(StatusCode, Json<ContentResponse>), ContentServiceError> {
    let usecase = SubmitContentUseCase {
        repo: state.content_repo(),
        analyzer: state.analyzer(),
    };
    let content = usecase
        .execute(
            identity.user_id,
            SubmitContentInput {
                raw_content: body.raw_content,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(content.into())))
}

// ── GET /contents ────────────────────────────────────────────────────────────

pub async fn list_contents(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<Vec<ContentResponse>>, ContentServiceError> {
    let usecase = ListContentsUseCase {
        repo: state.content_repo(),
    };
    let contents = usecase.execute(identity.user_id).await?;
    Ok(Json(contents.into_iter().map(Into::into).collect()))
}

// ── GET /contents/{id} ───────────────────────────────────────────────────────

pub async fn get_content(
    identity: Identity,
    State(state): State<AppState>,
    Path(content_id): Path<i32>,
) -> Result<Json<ContentResponse>, ContentServiceError> {
    let usecase = GetContentUseCase {
        repo: state.content_repo(),
    };
    let content = usecase.execute(identity.user_id, content_id).await?;
    Ok(Json(content.into()))
}

// ── DELETE /contents/{id} ────────────────────────────────────────────────────

pub async fn delete_content(
    identity: Identity,
    State(state): State<AppState>,
    Path(content_id): Path<i32>,
) -> Result<StatusCode, ContentServiceError> {
    let usecase = DeleteContentUseCase {
        repo: state.content_repo(),
    };
    usecase.execute(identity.user_id, content_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
