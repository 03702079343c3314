use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use chrono::Utc;

use crate::domain::repository::UserRepository;
use crate::domain::types::{NewUser, User};
use crate::error::ContentServiceError;

/// Hash a password into an argon2id PHC string for storage.
pub fn hash_password(password: &str) -> Result<String, ContentServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| ContentServiceError::Internal(anyhow::anyhow!("hash password: {e}")))?;
    Ok(hash.to_string())
}

/// Verify a plain password against a stored PHC string. An unparsable hash
/// counts as a mismatch rather than an error.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

// ── RegisterUser ─────────────────────────────────────────────────────────────

pub struct RegisterUserInput {
    pub email: String,
    pub password: String,
}

pub struct RegisterUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> RegisterUserUseCase<R> {
    pub async fn execute(&self, input: RegisterUserInput) -> Result<User, ContentServiceError> {
        if input.email.trim().is_empty() || input.password.is_empty() {
            return Err(ContentServiceError::MissingData);
        }
        // Email matching is exact-as-stored; no case folding here. The
        // unique index on users.email backs this check against races.
        if self.repo.find_by_email(&input.email).await?.is_some() {
            return Err(ContentServiceError::EmailTaken);
        }

        let user = NewUser {
            email: input.email,
            password_hash: hash_password(&input.password)?,
            is_active: true,
            created_at: Utc::now(),
        };
        self.repo.create(&user).await
    }
}
