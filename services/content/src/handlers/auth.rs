use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::error::ContentServiceError;
use crate::state::AppState;
use crate::usecase::token::{CreateTokenInput, CreateTokenUseCase};
use crate::usecase::user::{RegisterUserInput, RegisterUserUseCase};

// ── POST /signup ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
}

/// Public view of an account — `password_hash` stays out by construction.
#[derive(Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
    #[serde(serialize_with = "digest_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignupRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ContentServiceError> {
    let usecase = RegisterUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase
        .execute(RegisterUserInput {
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            id: user.id,
            email: user.email,
            is_active: user.is_active,
            created_at: user.created_at,
        }),
    ))
}

// ── POST /login ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub access_token_exp: u64,
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ContentServiceError> {
    let usecase = CreateTokenUseCase {
        users: state.user_repo(),
        jwt_secret: state.jwt_secret.clone(),
        token_lifetime_secs: state.token_lifetime_secs,
    };
    let out = usecase
        .execute(CreateTokenInput {
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok(Json(TokenResponse {
        access_token: out.access_token,
        token_type: "bearer",
        access_token_exp: out.access_token_exp,
    }))
}
