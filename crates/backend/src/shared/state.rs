use sea_orm::DatabaseConnection;

use crate::shared::config::AuthConfig;

/// Process-wide immutable state handed to every request through axum `State`
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub auth: AuthConfig,
}
