use anyhow::Result;
use chrono::Utc;
use contracts::system::users::{CreateUserDto, User};
use sea_orm::DatabaseConnection;

use super::repository;

/// Create a new user, returning its id
pub async fn create(db: &DatabaseConnection, dto: CreateUserDto) -> Result<String> {
    let username = dto.username.trim();
    if username.is_empty() {
        return Err(anyhow::anyhow!("Username cannot be empty"));
    }

    if repository::get_by_username(db, username).await?.is_some() {
        return Err(anyhow::anyhow!("Username already exists"));
    }

    if let Some(ref email) = dto.email {
        if !email.trim().is_empty() && !email.contains('@') {
            return Err(anyhow::anyhow!("Invalid email format"));
        }
    }

    let display_name = match dto.display_name.trim() {
        "" => username.to_string(),
        name => name.to_string(),
    };
    let roles = if dto.roles.is_empty() {
        vec!["user".to_string()]
    } else {
        dto.roles
    };

    let user = User {
        id: uuid::Uuid::new_v4().to_string(),
        username: username.to_string(),
        display_name,
        email: dto.email,
        roles,
        created_at: Utc::now().to_rfc3339(),
    };
    repository::insert(db, &user).await?;

    tracing::info!("Created user {} ({})", user.username, user.id);
    Ok(user.id)
}

/// Get user by ID
pub async fn get_by_id(db: &DatabaseConnection, id: &str) -> Result<Option<User>> {
    repository::get_by_id(db, id).await
}
