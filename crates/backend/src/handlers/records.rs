use axum::{
    body::Body,
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Request, State,
    },
    middleware::{self, Next},
    response::Response,
    routing::{get, put},
    Extension, Json, Router,
};
use contracts::domain::common::{Record, ResourceDescriptor};
use contracts::system::auth::Principal;
use sea_orm::DatabaseConnection;
use serde_json::{Map, Value};

use crate::domain::records::service;
use crate::shared::error::{ApiError, ApiResult};
use crate::system::auth::extractor::CurrentUser;

/// Per-collection handler state
#[derive(Clone)]
pub struct ResourceState {
    pub db: DatabaseConnection,
    pub descriptor: &'static ResourceDescriptor,
}

/// Routes of one collection:
///
/// - `GET /api/<collection>` list, public
/// - `POST /api/<collection>` create, signed in
/// - `GET /api/<collection>/:id` read, public
/// - `PUT /api/<collection>/:id` update, owner or admin
/// - `DELETE /api/<collection>/:id` delete, owner or admin
pub fn router(db: DatabaseConnection, descriptor: &'static ResourceDescriptor) -> Router {
    let state = ResourceState { db, descriptor };
    let collection_path = format!("/api/{}", descriptor.collection_name);
    let record_path = format!("{}/:id", collection_path);

    Router::new()
        .route(&collection_path, get(list_all).post(create))
        .route(
            &record_path,
            get(read)
                .merge(
                    put(update)
                        .delete(delete)
                        .layer(middleware::from_fn(require_owner)),
                )
                .route_layer(middleware::from_fn_with_state(state.clone(), record_by_id)),
        )
        .with_state(state)
}

/// Guard for `/:id` routes: validates the identifier, loads the record and
/// hands it to the handlers through the request extensions
pub async fn record_by_id(
    State(state): State<ResourceState>,
    id: Result<Path<String>, PathRejection>,
    mut req: Request<Body>,
    next: Next,
) -> ApiResult<Response> {
    // undecodable segments (e.g. invalid UTF-8) are malformed identifiers too
    let Path(id) =
        id.map_err(|_| ApiError::InvalidIdentifier(state.descriptor.invalid_id_message()))?;
    let record = service::resolve(&state.db, state.descriptor, &id).await?;
    req.extensions_mut().insert(record);
    Ok(next.run(req).await)
}

/// Allows the request only for the record's owner or an admin.
/// Must run inside `record_by_id`.
pub async fn require_owner(req: Request<Body>, next: Next) -> ApiResult<Response> {
    let principal = req.extensions().get::<Principal>();
    let record = req.extensions().get::<Record>();
    let (principal, record) = match (principal, record) {
        (Some(principal), Some(record)) => (principal, record),
        _ => return Err(ApiError::not_authorized()),
    };

    let grant = if record.owner_id() == Some(principal.id.as_str()) {
        "owner"
    } else if principal.is_admin() {
        "admin role"
    } else {
        return Err(ApiError::not_authorized());
    };
    tracing::debug!(
        "{} {} on {} allowed for {} as {}",
        req.method(),
        req.uri().path(),
        record.id,
        principal.id,
        grant
    );

    Ok(next.run(req).await)
}

/// GET /api/<collection>
pub async fn list_all(State(state): State<ResourceState>) -> ApiResult<Json<Vec<Record>>> {
    service::list_all(&state.db, state.descriptor).await.map(Json)
}

/// POST /api/<collection>
pub async fn create(
    State(state): State<ResourceState>,
    CurrentUser(principal): CurrentUser,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> ApiResult<Json<Record>> {
    let Json(payload) = payload?;
    service::create(&state.db, state.descriptor, &principal, &payload)
        .await
        .map(Json)
}

/// GET /api/<collection>/:id
pub async fn read(Extension(record): Extension<Record>) -> Json<Record> {
    Json(record)
}

/// PUT /api/<collection>/:id
pub async fn update(
    State(state): State<ResourceState>,
    Extension(record): Extension<Record>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> ApiResult<Json<Record>> {
    let Json(payload) = payload?;
    service::update(&state.db, state.descriptor, record, &payload)
        .await
        .map(Json)
}

/// DELETE /api/<collection>/:id
pub async fn delete(
    State(state): State<ResourceState>,
    Extension(record): Extension<Record>,
) -> ApiResult<Json<Record>> {
    service::delete(&state.db, state.descriptor, record)
        .await
        .map(Json)
}
