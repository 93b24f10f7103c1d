use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use contracts::system::auth::Principal;

use crate::shared::error::ApiError;

/// Extractor for the caller resolved by `resolve_principal`
/// Usage in handlers: `async fn handler(CurrentUser(principal): CurrentUser) -> Response`
pub struct CurrentUser(pub Principal);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(ApiError::not_authorized)
    }
}
