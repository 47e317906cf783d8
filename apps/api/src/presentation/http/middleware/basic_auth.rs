use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use base64::{Engine, engine::general_purpose::STANDARD};

use crate::presentation::http::{errors::AppError, state::AppState};

/// Decoded `Authorization: Basic` credentials.
#[derive(Debug, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

/// Extracts Basic credentials from the headers.
///
/// Returns `Ok(None)` when no Basic authorization is present, and
/// `Err(AppError::Unauthorized)` when it is present but undecodable.
pub fn parse_basic_credentials(headers: &HeaderMap) -> Result<Option<BasicCredentials>, AppError> {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        return Ok(None);
    };
    let value = value.to_str().map_err(|_| AppError::Unauthorized)?.trim();

    let Some((scheme, encoded)) = value.split_once(' ') else {
        return Ok(None);
    };
    if !scheme.eq_ignore_ascii_case("basic") {
        return Ok(None);
    }

    let decoded = STANDARD
        .decode(encoded.trim())
        .map_err(|_| AppError::Unauthorized)?;
    let decoded = String::from_utf8(decoded).map_err(|_| AppError::Unauthorized)?;
    let (username, password) = decoded.split_once(':').ok_or(AppError::Unauthorized)?;

    Ok(Some(BasicCredentials {
        username: username.to_string(),
        password: password.to_string(),
    }))
}

/// Resolves the caller from Basic credentials and stores the
/// [`Principal`](crate::domain::shared::principal::Principal) in request extensions.
///
/// Requests without credentials pass through anonymously. Requests with
/// credentials that fail to authenticate are rejected with 401 on every route.
pub async fn basic_auth_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(credentials) = parse_basic_credentials(req.headers())? {
        let principal = state
            .user_store
            .authenticate(&credentials.username, &credentials.password)
            .await
            .ok_or_else(|| {
                tracing::warn!(user = %credentials.username, "Basic authentication failed");
                AppError::Unauthorized
            })?;

        tracing::debug!(user = %principal.username, "authenticated request");
        req.extensions_mut().insert(principal);
    }

    Ok(next.run(req).await)
}
