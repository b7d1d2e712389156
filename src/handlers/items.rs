//! Item API: document-store upsert with cache write-through, and lookup

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, warn};

use super::error::ApiError;
use crate::models::Item;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    id: String,
    name: String,
    value: String,
}

/// Upsert into the document store, then write the value through to the
/// cache. Fails fast: either write erroring aborts with 500.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    // Missing fields would otherwise surface as 422; this endpoint promises 400.
    let Json(req) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let item = Item {
        id: req.id,
        name: req.name,
        value: req.value,
    };
    info!("Creating item: id={}", item.id);

    state.documents.upsert_item(&item).await?;
    state
        .cache
        .set(
            &Item::cache_key(&item.id),
            &item.value,
            state.config.item_cache_ttl_secs,
        )
        .await?;

    Ok(Json(json!({ "status": "created", "id": item.id })))
}

/// Document-store lookup plus best-effort cache read; a cache failure only
/// nulls `redis_cached`.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let item = state
        .documents
        .find_item(&id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("item {} not found", id)))?;

    let cached = match state.cache.get(&Item::cache_key(&id)).await {
        Ok(value) => value,
        Err(e) => {
            warn!("Cache read for item {} failed: {}", id, e);
            None
        }
    };

    Ok(Json(json!({ "item": item, "redis_cached": cached })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_requires_every_field() {
        let missing_id = r#"{"name": "n", "value": "v"}"#;
        assert!(serde_json::from_str::<CreateItemRequest>(missing_id).is_err());

        let complete = r#"{"id": "a1", "name": "n", "value": "v"}"#;
        let req = serde_json::from_str::<CreateItemRequest>(complete).unwrap();
        assert_eq!(req.id, "a1");
    }
}
