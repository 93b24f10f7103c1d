use anyhow::{Context, Result};
use contracts::system::users::User;
use sea_orm::entity::prelude::*;
use sea_orm::{PaginatorTrait, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sys_users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub email: Option<String>,
    /// Comma-separated role names
    pub roles: String,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for User {
    fn from(m: Model) -> Self {
        User {
            id: m.id,
            username: m.username,
            display_name: m.display_name,
            email: m.email,
            roles: split_roles(&m.roles),
            created_at: m.created_at,
        }
    }
}

fn split_roles(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(str::to_string)
        .collect()
}

/// Insert a new user
pub async fn insert(db: &DatabaseConnection, user: &User) -> Result<()> {
    let active = ActiveModel {
        id: Set(user.id.clone()),
        username: Set(user.username.clone()),
        display_name: Set(user.display_name.clone()),
        email: Set(user.email.clone()),
        roles: Set(user.roles.join(",")),
        created_at: Set(user.created_at.clone()),
    };
    active.insert(db).await.context("Failed to insert user")?;
    Ok(())
}

/// Get user by ID
pub async fn get_by_id(db: &DatabaseConnection, id: &str) -> Result<Option<User>> {
    let result = Entity::find_by_id(id.to_string()).one(db).await?;
    Ok(result.map(Into::into))
}

/// Get user by username
pub async fn get_by_username(db: &DatabaseConnection, username: &str) -> Result<Option<User>> {
    let result = Entity::find()
        .filter(Column::Username.eq(username))
        .one(db)
        .await?;
    Ok(result.map(Into::into))
}

/// Count total users
pub async fn count_users(db: &DatabaseConnection) -> Result<u64> {
    Ok(Entity::find().count(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::open_in_memory;

    #[test]
    fn test_split_roles() {
        assert_eq!(split_roles("user, admin"), vec!["user", "admin"]);
        assert!(split_roles("").is_empty());
    }

    #[tokio::test]
    async fn test_insert_and_lookup() {
        let db = open_in_memory().await;
        let user = User {
            id: uuid::Uuid::new_v4().to_string(),
            username: "username".into(),
            display_name: "Full Name".into(),
            email: Some("test@test.com".into()),
            roles: vec!["user".into()],
            created_at: chrono::Utc::now().to_rfc3339(),
        };
        insert(&db, &user).await.unwrap();

        assert_eq!(count_users(&db).await.unwrap(), 1);
        let by_id = get_by_id(&db, &user.id).await.unwrap().unwrap();
        assert_eq!(by_id.display_name, "Full Name");
        assert_eq!(by_id.roles, vec!["user"]);
        let by_name = get_by_username(&db, "username").await.unwrap().unwrap();
        assert_eq!(by_name.id, user.id);
        assert!(get_by_id(&db, "missing").await.unwrap().is_none());
    }
}
