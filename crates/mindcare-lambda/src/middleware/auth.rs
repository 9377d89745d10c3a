use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use mindcare_auth::jwt::Claims;

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from verified JWT claims.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub sub: String,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self { sub: claims.sub }
    }
}

/// JWT validation middleware.
///
/// Verifies the `Authorization: Bearer <token>` header and inserts
/// [`AuthUser`] into request extensions for handlers to use.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let claims = verify_request(&state, &req)?;
    req.extensions_mut().insert(AuthUser::from(claims));
    Ok(next.run(req).await)
}

/// Like [`require_auth`], additionally requiring the `admin` claim.
pub async fn require_admin(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let claims = verify_request(&state, &req)?;
    if let Err(e) = claims.require_admin() {
        tracing::warn!(sub = %claims.sub, path = %req.uri().path(), "non-admin denied");
        return Err(e.into());
    }
    req.extensions_mut().insert(AuthUser::from(claims));
    Ok(next.run(req).await)
}

fn verify_request(state: &AppState, req: &Request) -> Result<Claims, ApiError> {
    let verifier = state
        .verifier
        .as_ref()
        .ok_or_else(|| ApiError::Unauthorized("authentication is not configured".to_string()))?;

    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    Ok(verifier.verify_header(header)?)
}
