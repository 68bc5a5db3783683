//! Collection and item handlers shared by every [`Resource`].

use axum::{body::Bytes, extract::State, http::StatusCode, response::Response};
use tracing::{debug, info};

use crate::{
    error::{AppError, AppResult},
    handlers::{path::RecordId, write_json},
    models::{decode_record, Resource},
    store::Collection,
};

fn not_found<R: Resource>() -> AppError {
    AppError::NotFound(format!("{} belum ada", R::LABEL))
}

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_records<R: Resource>(State(collection): State<Collection<R>>) -> Response {
    let records = collection.read().await;
    debug!(resource = R::LABEL, count = records.len(), "Listed records");
    write_json(StatusCode::OK, records.all())
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_record<R: Resource>(
    State(collection): State<Collection<R>>,
    body: Bytes,
) -> AppResult<Response> {
    let record: R = decode_record(&body).map_err(|err| {
        debug!(resource = R::LABEL, error = %err, "Rejected create body");
        AppError::BadRequest("invalid request body".to_string())
    })?;

    let stored = collection.write().await.create(record);

    info!(resource = R::LABEL, id = stored.id(), "Created record");

    Ok(write_json(StatusCode::CREATED, &stored))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_record<R: Resource>(
    State(collection): State<Collection<R>>,
    record_id: RecordId<R>,
) -> AppResult<Response> {
    let records = collection.read().await;
    let record = records.get(record_id.id).ok_or_else(not_found::<R>)?;
    Ok(write_json(StatusCode::OK, record))
}

// ── Update ────────────────────────────────────────────────────────────────────

/// Replace a record wholesale. The body is decoded before the lookup, so a
/// malformed body is reported even when the id does not exist.
pub async fn update_record<R: Resource>(
    State(collection): State<Collection<R>>,
    record_id: RecordId<R>,
    body: Bytes,
) -> AppResult<Response> {
    let record: R = decode_record(&body).map_err(|err| {
        debug!(resource = R::LABEL, error = %err, "Rejected update body");
        AppError::BadRequest("invalid request".to_string())
    })?;

    let updated = collection
        .write()
        .await
        .replace(record_id.id, record)
        .ok_or_else(not_found::<R>)?;

    info!(resource = R::LABEL, id = record_id.id, "Updated record");

    Ok(write_json(StatusCode::OK, &updated))
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn delete_record<R: Resource>(
    State(collection): State<Collection<R>>,
    record_id: RecordId<R>,
) -> AppResult<Response> {
    let removed = collection
        .write()
        .await
        .remove(record_id.id)
        .ok_or_else(not_found::<R>)?;

    info!(resource = R::LABEL, id = record_id.id, "Deleted record");

    Ok(write_json(StatusCode::OK, &removed))
}

// ── Fallbacks ─────────────────────────────────────────────────────────────────

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Item paths validate the id before looking at the method.
pub async fn item_method_not_allowed<R: Resource>(_record_id: RecordId<R>) -> AppError {
    AppError::MethodNotAllowed
}
