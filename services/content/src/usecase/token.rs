use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::repository::UserRepository;
use crate::domain::types::User;
use crate::error::ContentServiceError;
use crate::usecase::user::verify_password;

/// JWT claims for access tokens. `sub` is the user id as a string.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub exp: u64,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

pub fn issue_access_token(
    user_id: i32,
    lifetime_secs: u64,
    secret: &str,
) -> Result<(String, u64), ContentServiceError> {
    let exp = now_secs() + lifetime_secs;
    let claims = TokenClaims {
        sub: user_id.to_string(),
        exp,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ContentServiceError::Internal(e.into()))?;
    Ok((token, exp))
}

/// Validate a bearer token and return its claims. Expired, malformed and
/// wrongly-signed tokens all collapse to `Unauthenticated` — callers must
/// not be able to tell which.
pub fn validate_token(token: &str, secret: &str) -> Result<TokenClaims, ContentServiceError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|_| ContentServiceError::Unauthenticated)?;

    Ok(data.claims)
}

// ── CreateToken (login) ───────────────────────────────────────────────────────

pub struct CreateTokenInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct CreateTokenOutput {
    pub access_token: String,
    pub access_token_exp: u64,
}

pub struct CreateTokenUseCase<U: UserRepository> {
    pub users: U,
    pub jwt_secret: String,
    pub token_lifetime_secs: u64,
}

impl<U: UserRepository> CreateTokenUseCase<U> {
    /// Unknown email, wrong password and inactive account all yield the
    /// single `InvalidCredentials` variant.
    pub async fn execute(
        &self,
        input: CreateTokenInput,
    ) -> Result<CreateTokenOutput, ContentServiceError> {
        let user = self
            .users
            .find_by_email(&input.email)
            .await?
            .ok_or(ContentServiceError::InvalidCredentials)?;

        if !verify_password(&input.password, &user.password_hash) {
            return Err(ContentServiceError::InvalidCredentials);
        }
        if !user.is_active {
            return Err(ContentServiceError::InvalidCredentials);
        }

        let (access_token, access_token_exp) =
            issue_access_token(user.id, self.token_lifetime_secs, &self.jwt_secret)?;

        Ok(CreateTokenOutput {
            access_token,
            access_token_exp,
        })
    }
}

// ── ResolveIdentity ──────────────────────────────────────────────────────────

pub struct ResolveIdentityUseCase<U: UserRepository> {
    pub users: U,
    pub jwt_secret: String,
}

impl<U: UserRepository> ResolveIdentityUseCase<U> {
    /// Resolve a bearer token to a live, active account. Every failure mode
    /// (missing/expired/malformed token, unknown id, inactive account) is
    /// `Unauthenticated`.
    pub async fn execute(&self, bearer_token: &str) -> Result<User, ContentServiceError> {
        let claims = validate_token(bearer_token, &self.jwt_secret)?;

        let user_id = claims
            .sub
            .parse::<i32>()
            .map_err(|_| ContentServiceError::Unauthenticated)?;

        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(ContentServiceError::Unauthenticated)?;

        if !user.is_active {
            return Err(ContentServiceError::Unauthenticated);
        }

        Ok(user)
    }
}
