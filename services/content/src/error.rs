use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Content service domain error variants.
///
/// `InvalidCredentials` deliberately covers unknown email, wrong password
/// and inactive account alike; `ContentNotFound` deliberately covers both
/// "no such row" and "row owned by someone else". Collapsing these pairs
/// keeps existence of other users' data out of the response surface.
#[derive(Debug, thiserror::Error)]
pub enum ContentServiceError {
    #[error("unauthenticated")]
    Unauthenticated,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("email already registered")]
    EmailTaken,
    #[error("content not found")]
    ContentNotFound,
    #[error("missing data")]
    MissingData,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ContentServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::ContentNotFound => "CONTENT_NOT_FOUND",
            Self::MissingData => "MISSING_DATA",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for ContentServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Unauthenticated | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::EmailTaken => StatusCode::CONFLICT,
            Self::ContentNotFound => StatusCode::NOT_FOUND,
            Self::MissingData => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status
        // for all requests. 4xx are expected client errors.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
