use axum::{middleware, routing::get, Router};
use contracts::domain::a001_customer;
use contracts::domain::a002_item;
use contracts::domain::common::ResourceDescriptor;

use crate::handlers;
use crate::shared::state::AppState;
use crate::system;

/// Collections served under `/api/<collection>`
pub static RESOURCES: &[&ResourceDescriptor] = &[&a001_customer::DESCRIPTOR, &a002_item::DESCRIPTOR];

/// Configure all application routes
pub fn configure_routes(state: AppState) -> Router {
    let mut app = Router::new().route("/health", get(|| async { "ok" }));

    // ========================================
    // OWNED RECORD COLLECTIONS
    // ========================================
    for descriptor in RESOURCES.iter().copied() {
        app = app.merge(handlers::records::router(state.db.clone(), descriptor));
    }

    app.layer(middleware::from_fn_with_state(
        state,
        system::auth::middleware::resolve_principal,
    ))
}
