use anyhow::Result;
use contracts::system::auth::ADMIN_ROLE;
use contracts::system::users::CreateUserDto;
use sea_orm::DatabaseConnection;

use crate::shared::config::AuthConfig;
use crate::system::auth::jwt;
use crate::system::users::{repository, service};

/// Ensure an admin user exists (create one if the table is empty)
pub async fn ensure_admin_user_exists(db: &DatabaseConnection, auth: &AuthConfig) -> Result<()> {
    if repository::count_users(db).await? > 0 {
        return Ok(());
    }

    tracing::info!("No users found. Creating default admin user...");

    let admin_dto = CreateUserDto {
        username: "admin".to_string(),
        display_name: "Administrator".to_string(),
        email: None,
        roles: vec!["user".to_string(), ADMIN_ROLE.to_string()],
    };

    let admin_id = service::create(db, admin_dto).await?;
    let token = jwt::generate_access_token(auth, &admin_id)?;

    tracing::warn!("Default admin user created (id {})", admin_id);
    tracing::warn!("Admin access token: {}", token);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::open_in_memory;

    #[tokio::test]
    async fn test_admin_is_created_once() {
        let db = open_in_memory().await;
        let auth = AuthConfig {
            jwt_secret: "secret".into(),
            token_lifetime_hours: 1,
        };

        ensure_admin_user_exists(&db, &auth).await.unwrap();
        ensure_admin_user_exists(&db, &auth).await.unwrap();

        assert_eq!(repository::count_users(&db).await.unwrap(), 1);
        let admin = repository::get_by_username(&db, "admin").await.unwrap().unwrap();
        assert_eq!(admin.display_name, "Administrator");
        assert!(admin.roles.iter().any(|r| r == ADMIN_ROLE));

        let principal = contracts::system::auth::Principal {
            id: admin.id,
            display_name: admin.display_name,
            roles: admin.roles,
        };
        assert!(principal.is_admin());
    }
}
