//! Bearer-token identity extractor.

use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;

use crate::error::ContentServiceError;
use crate::state::AppState;
use crate::usecase::token::ResolveIdentityUseCase;

/// Authenticated identity resolved from the `Authorization: Bearer` header.
///
/// Resolution goes through [`ResolveIdentityUseCase`]: signature and expiry
/// are validated, the account is loaded, and inactive accounts are rejected.
/// Every failure mode is the same `Unauthenticated` rejection.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: i32,
}

impl FromRequestParts<AppState> for Identity {
    type Rejection = ContentServiceError;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // In Rust 1.82+ precise capturing, `async fn` captures lifetimes differently,
    // causing E0195. Fix: extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::to_owned);
        let state = state.clone();

        async move {
            let token = token.ok_or(ContentServiceError::Unauthenticated)?;
            let usecase = ResolveIdentityUseCase {
                users: state.user_repo(),
                jwt_secret: state.jwt_secret.clone(),
            };
            let user = usecase.execute(&token).await?;
            Ok(Self { user_id: user.id })
        }
    }
}
