use anyhow::Context;
use chrono::Utc;
use contracts::domain::common::{AggregateId, Fields, OwnerSummary, Record, RecordId};
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::system::users::repository as users;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "documents")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub collection: String,
    pub created_at: DateTimeUtc,
    pub user_id: Option<String>,
    /// JSON object with the collection-specific string fields
    pub body: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::system::users::repository::Entity",
        from = "Column::UserId",
        to = "crate::system::users::repository::Column::Id"
    )]
    User,
}

impl Related<users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

fn to_record(doc: Model, owner: Option<users::Model>) -> anyhow::Result<Record> {
    let id = RecordId::from_string(&doc.id).map_err(|e| anyhow::anyhow!("document {}: {}", doc.id, e))?;
    let fields: Fields = serde_json::from_str(&doc.body)
        .with_context(|| format!("document {} has a malformed body", doc.id))?;

    Ok(Record {
        id,
        created_at: doc.created_at,
        fields,
        user: owner.map(|u| OwnerSummary {
            id: u.id,
            display_name: u.display_name,
        }),
    })
}

/// All records of a collection, newest first, with owners denormalized
pub async fn list_all(db: &DatabaseConnection, collection: &str) -> anyhow::Result<Vec<Record>> {
    Entity::find()
        .filter(Column::Collection.eq(collection))
        .order_by_desc(Column::CreatedAt)
        .find_also_related(users::Entity)
        .all(db)
        .await?
        .into_iter()
        .map(|(doc, owner)| to_record(doc, owner))
        .collect()
}

pub async fn get_by_id(
    db: &DatabaseConnection,
    collection: &str,
    id: RecordId,
) -> anyhow::Result<Option<Record>> {
    let result = Entity::find_by_id(id.as_string())
        .filter(Column::Collection.eq(collection))
        .find_also_related(users::Entity)
        .one(db)
        .await?;
    result.map(|(doc, owner)| to_record(doc, owner)).transpose()
}

pub async fn insert(db: &DatabaseConnection, collection: &str, record: &Record) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(record.id.as_string()),
        collection: Set(collection.to_string()),
        created_at: Set(record.created_at),
        user_id: Set(record.owner_id().map(str::to_string)),
        body: Set(serde_json::to_string(&record.fields)?),
    };
    active.insert(db).await.context("Failed to insert record")?;
    Ok(())
}

/// Persist the record's fields. `id`, `created_at` and the owner are never written.
pub async fn update_fields(db: &DatabaseConnection, record: &Record) -> anyhow::Result<bool> {
    let body = serde_json::to_string(&record.fields)?;
    let result = Entity::update_many()
        .col_expr(Column::Body, Expr::value(body))
        .filter(Column::Id.eq(record.id.as_string()))
        .exec(db)
        .await
        .context("Failed to update record")?;
    Ok(result.rows_affected > 0)
}

pub async fn delete(db: &DatabaseConnection, id: RecordId) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id.as_string())
        .exec(db)
        .await
        .context("Failed to delete record")?;
    Ok(result.rows_affected > 0)
}
