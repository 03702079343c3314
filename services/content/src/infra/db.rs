use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, SqlErr,
};

use digest_content_schema::{contents, users};

use crate::domain::repository::{ContentRepository, UserRepository};
use crate::domain::types::{Content, NewContent, NewUser, Sentiment, User};
use crate::error::ContentServiceError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ContentServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, ContentServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &NewUser) -> Result<User, ContentServiceError> {
        let result = users::ActiveModel {
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
            is_active: Set(user.is_active),
            created_at: Set(user.created_at),
            ..Default::default()
        }
        .insert(&self.db)
        .await;
        match result {
            Ok(model) => Ok(user_from_model(model)),
            // Two concurrent registrations can both pass the pre-insert
            // lookup; the unique index on users.email settles the race.
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(ContentServiceError::EmailTaken)
            }
            Err(e) => Err(anyhow::Error::new(e).context("create user").into()),
        }
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        email: model.email,
        password_hash: model.password_hash,
        is_active: model.is_active,
        created_at: model.created_at,
    }
}

// ── Content repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbContentRepository {
    pub db: DatabaseConnection,
}

impl ContentRepository for DbContentRepository {
    async fn create(&self, content: &NewContent) -> Result<Content, ContentServiceError> {
        let model = contents::ActiveModel {
            owner_id: Set(content.owner_id),
            raw_content: Set(content.raw_content.clone()),
            summary: Set(None),
            sentiment: Set(None),
            created_at: Set(content.created_at),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create content")?;
        Ok(content_from_model(model))
    }

    async fn list_by_owner(&self, owner_id: i32) -> Result<Vec<Content>, ContentServiceError> {
        let models = contents::Entity::find()
            .filter(contents::Column::OwnerId.eq(owner_id))
            .order_by_asc(contents::Column::Id)
            .all(&self.db)
            .await
            .context("list contents by owner")?;
        Ok(models.into_iter().map(content_from_model).collect())
    }

    async fn get(
        &self,
        owner_id: i32,
        content_id: i32,
    ) -> Result<Option<Content>, ContentServiceError> {
        // Both predicates in the query itself — ownership is a filter, not
        // a post-fetch check.
        let model = contents::Entity::find()
            .filter(contents::Column::Id.eq(content_id))
            .filter(contents::Column::OwnerId.eq(owner_id))
            .one(&self.db)
            .await
            .context("get content")?;
        Ok(model.map(content_from_model))
    }

    async fn set_analysis(
        &self,
        content_id: i32,
        summary: Option<&str>,
        sentiment: Option<Sentiment>,
    ) -> Result<(), ContentServiceError> {
        if summary.is_none() && sentiment.is_none() {
            return Ok(());
        }
        let mut am = contents::ActiveModel {
            id: Set(content_id),
            ..Default::default()
        };
        // Only Some fields are written — a previously set field is never
        // cleared by an absent result.
        if let Some(text) = summary {
            am.summary = Set(Some(text.to_owned()));
        }
        if let Some(label) = sentiment {
            am.sentiment = Set(Some(label.as_str().to_owned()));
        }
        am.update(&self.db).await.context("merge content analysis")?;
        Ok(())
    }

    async fn delete(&self, owner_id: i32, content_id: i32) -> Result<bool, ContentServiceError> {
        let result = contents::Entity::delete_many()
            .filter(contents::Column::Id.eq(content_id))
            .filter(contents::Column::OwnerId.eq(owner_id))
            .exec(&self.db)
            .await
            .context("delete content")?;
        Ok(result.rows_affected > 0)
    }
}

fn content_from_model(model: contents::Model) -> Content {
    Content {
        id: model.id,
        owner_id: model.owner_id,
        raw_content: model.raw_content,
        summary: model.summary,
        sentiment: model.sentiment.as_deref().and_then(Sentiment::from_label),
        created_at: model.created_at,
    }
}
