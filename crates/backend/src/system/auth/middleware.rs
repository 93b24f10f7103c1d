use axum::{
    body::Body,
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use contracts::system::auth::Principal;

use crate::shared::state::AppState;
use crate::system::users::service as user_service;

/// Resolve the caller from `Authorization: Bearer <token>`.
///
/// A valid token naming an existing user puts a [`Principal`] into the request
/// extensions. Anything else leaves the request anonymous; handlers that need
/// a caller reject it through the `CurrentUser` extractor.
pub async fn resolve_principal(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    if let Some(token) = bearer_token(req.headers()) {
        match principal_from_token(&state, &token).await {
            Ok(Some(principal)) => {
                req.extensions_mut().insert(principal);
            }
            Ok(None) => tracing::debug!("token subject is not a known user"),
            Err(e) => tracing::debug!("ignoring bearer token: {:#}", e),
        }
    }

    next.run(req).await
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(|t| t.trim().to_string())
}

async fn principal_from_token(state: &AppState, token: &str) -> anyhow::Result<Option<Principal>> {
    let claims = super::jwt::validate_token(&state.auth, token)?;
    let user = user_service::get_by_id(&state.db, &claims.sub).await?;
    Ok(user.map(|u| Principal {
        id: u.id,
        display_name: u.display_name,
        roles: u.roles,
    }))
}
