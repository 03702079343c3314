use std::sync::{Arc, Mutex};

use chrono::Utc;

use digest_content::domain::repository::{AnalyzerPort, ContentRepository, UserRepository};
use digest_content::domain::types::{Analysis, Content, NewContent, NewUser, Sentiment, User};
use digest_content::error::ContentServiceError;

pub const TEST_JWT_SECRET: &str = "test-jwt-secret-for-integration-tests-only";

// ── MockUserRepo ─────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockUserRepo {
    pub users: Arc<Mutex<Vec<User>>>,
}

impl MockUserRepo {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }
}

impl UserRepository for MockUserRepo {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ContentServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, ContentServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn create(&self, user: &NewUser) -> Result<User, ContentServiceError> {
        let mut users = self.users.lock().unwrap();
        // Mirror the store contract: the unique index rejects duplicates
        // even when they slipped past the caller's pre-insert lookup.
        if users.iter().any(|u| u.email == user.email) {
            return Err(ContentServiceError::EmailTaken);
        }
        let created = User {
            id: users.iter().map(|u| u.id).max().unwrap_or(0) + 1,
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            is_active: user.is_active,
            created_at: user.created_at,
        };
        users.push(created.clone());
        Ok(created)
    }
}

// ── MockContentRepo ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockContentRepo {
    pub rows: Arc<Mutex<Vec<Content>>>,
}

impl MockContentRepo {
    pub fn empty() -> Self {
        Self {
            rows: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn rows_handle(&self) -> Arc<Mutex<Vec<Content>>> {
        Arc::clone(&self.rows)
    }
}

impl ContentRepository for MockContentRepo {
    async fn create(&self, content: &NewContent) -> Result<Content, ContentServiceError> {
        let mut rows = self.rows.lock().unwrap();
        let created = Content {
            id: rows.iter().map(|c| c.id).max().unwrap_or(0) + 1,
            owner_id: content.owner_id,
            raw_content: content.raw_content.clone(),
            summary: None,
            sentiment: None,
            created_at: content.created_at,
        };
        rows.push(created.clone());
        Ok(created)
    }

    async fn list_by_owner(&self, owner_id: i32) -> Result<Vec<Content>, ContentServiceError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn get(
        &self,
        owner_id: i32,
        content_id: i32,
    ) -> Result<Option<Content>, ContentServiceError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == content_id && c.owner_id == owner_id)
            .cloned())
    }

    async fn set_analysis(
        &self,
        content_id: i32,
        summary: Option<&str>,
        sentiment: Option<Sentiment>,
    ) -> Result<(), ContentServiceError> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|c| c.id == content_id) {
            // Mirror the store contract: only Some fields are written.
            if let Some(text) = summary {
                row.summary = Some(text.to_owned());
            }
            if let Some(label) = sentiment {
                row.sentiment = Some(label);
            }
        }
        Ok(())
    }

    async fn delete(&self, owner_id: i32, content_id: i32) -> Result<bool, ContentServiceError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|c| !(c.id == content_id && c.owner_id == owner_id));
        Ok(rows.len() < before)
    }
}

// ── MockAnalyzer ─────────────────────────────────────────────────────────────

/// Stub provider: yields a fixed result, or nothing at all for the
/// unreachable/timed-out case.
#[derive(Clone)]
pub struct MockAnalyzer {
    pub result: Analysis,
}

impl MockAnalyzer {
    pub fn returning(summary: Option<&str>, sentiment: Option<Sentiment>) -> Self {
        Self {
            result: Analysis {
                summary: summary.map(str::to_owned),
                sentiment,
            },
        }
    }

    /// Provider unreachable / timed out: both fields absent.
    pub fn unavailable() -> Self {
        Self {
            result: Analysis::default(),
        }
    }
}

impl AnalyzerPort for MockAnalyzer {
    async fn analyze(&self, _raw_text: &str) -> Analysis {
        self.result.clone()
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn test_user(id: i32, email: &str) -> User {
    User {
        id,
        email: email.to_owned(),
        password_hash: "$argon2id$unused-in-this-test".to_owned(),
        is_active: true,
        created_at: Utc::now(),
    }
}
