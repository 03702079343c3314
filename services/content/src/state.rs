use sea_orm::DatabaseConnection;

use crate::infra::db::{DbContentRepository, DbUserRepository};
use crate::infra::llm::HttpAnalyzer;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
    pub token_lifetime_secs: u64,
    pub analyzer: HttpAnalyzer,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn content_repo(&self) -> DbContentRepository {
        DbContentRepository {
            db: self.db.clone(),
        }
    }

    pub fn analyzer(&self) -> HttpAnalyzer {
        self.analyzer.clone()
    }
}
