use contracts::domain::common::{AggregateId, OwnerSummary, Record, RecordId, ResourceDescriptor};
use contracts::system::auth::Principal;
use sea_orm::DatabaseConnection;
use serde_json::{Map, Value};

use super::repository;
use crate::shared::error::{ApiError, ApiResult};

/// Load the record named by a raw path identifier.
///
/// Malformed identifiers are rejected before storage is touched.
pub async fn resolve(
    db: &DatabaseConnection,
    descriptor: &ResourceDescriptor,
    raw_id: &str,
) -> ApiResult<Record> {
    let id = RecordId::from_string(raw_id)
        .map_err(|_| ApiError::InvalidIdentifier(descriptor.invalid_id_message()))?;

    repository::get_by_id(db, descriptor.collection_name, id)
        .await
        .map_err(ApiError::storage)?
        .ok_or_else(|| ApiError::NotFound(descriptor.not_found_message()))
}

/// Create a record owned by `owner`
pub async fn create(
    db: &DatabaseConnection,
    descriptor: &ResourceDescriptor,
    owner: &Principal,
    payload: &Map<String, Value>,
) -> ApiResult<Record> {
    let fields = descriptor
        .fields_for_insert(payload)
        .map_err(ApiError::Validation)?;
    descriptor.validate(&fields).map_err(ApiError::Validation)?;

    let record = Record::new_for_insert(
        fields,
        OwnerSummary {
            id: owner.id.clone(),
            display_name: owner.display_name.clone(),
        },
    );
    repository::insert(db, descriptor.collection_name, &record)
        .await
        .map_err(ApiError::storage)?;

    tracing::info!(
        "{} {} created by {}",
        descriptor.element_name,
        record.id,
        owner.id
    );
    Ok(record)
}

/// Overwrite the mutable fields present in `payload` and persist
pub async fn update(
    db: &DatabaseConnection,
    descriptor: &ResourceDescriptor,
    mut record: Record,
    payload: &Map<String, Value>,
) -> ApiResult<Record> {
    descriptor
        .apply_update(&mut record.fields, payload)
        .map_err(ApiError::Validation)?;
    descriptor
        .validate(&record.fields)
        .map_err(ApiError::Validation)?;

    let updated = repository::update_fields(db, &record)
        .await
        .map_err(ApiError::storage)?;
    if !updated {
        return Err(ApiError::NotFound(descriptor.not_found_message()));
    }

    tracing::info!("{} {} updated", descriptor.element_name, record.id);
    Ok(record)
}

/// Delete the record, returning it as it was before deletion
pub async fn delete(
    db: &DatabaseConnection,
    descriptor: &ResourceDescriptor,
    record: Record,
) -> ApiResult<Record> {
    let deleted = repository::delete(db, record.id)
        .await
        .map_err(ApiError::storage)?;
    if !deleted {
        return Err(ApiError::NotFound(descriptor.not_found_message()));
    }

    tracing::info!("{} {} deleted", descriptor.element_name, record.id);
    Ok(record)
}

/// Every record of the collection, newest first
pub async fn list_all(
    db: &DatabaseConnection,
    descriptor: &ResourceDescriptor,
) -> ApiResult<Vec<Record>> {
    repository::list_all(db, descriptor.collection_name)
        .await
        .map_err(ApiError::storage)
}
