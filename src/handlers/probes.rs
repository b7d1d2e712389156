//! Single-kind probe handlers
//!
//! Each handler writes the path value to its one backend, reads it straight
//! back and returns the tagged result. First failure aborts with 500.

use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use super::error::ApiError;
use crate::models::Item;
use crate::AppState;

/// Name written alongside probe values, mirroring what the relational rows
/// and probe documents carry.
const PROBE_NAME: &str = "probe";

pub async fn redis(
    State(state): State<AppState>,
    Path(val): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let key = format!("probe:{}", val);
    state
        .cache
        .set(&key, &val, state.config.cache_ttl_secs)
        .await?;
    let value = state.cache.get(&key).await?;

    Ok(Json(json!({
        "source": "redis",
        "key": key,
        "value": value,
    })))
}

pub async fn mongo(
    State(state): State<AppState>,
    Path(val): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let item = Item {
        id: val.clone(),
        name: PROBE_NAME.to_string(),
        value: val,
    };
    state.documents.upsert_item(&item).await?;
    let document = state.documents.find_item(&item.id).await?;

    Ok(Json(json!({
        "source": "mongo",
        "document": document,
    })))
}

pub async fn postgres(
    State(state): State<AppState>,
    Path(val): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state.postgres.insert_item(PROBE_NAME, &val).await?;
    let row = state.postgres.latest_item().await?;

    Ok(Json(json!({
        "source": "postgres",
        "id": row.id,
        "name": row.name,
        "value": row.value,
        "created_at": row.created_at,
    })))
}

pub async fn mysql(
    State(state): State<AppState>,
    Path(val): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state.mysql.insert_item(PROBE_NAME, &val).await?;
    let row = state.mysql.latest_item().await?;

    Ok(Json(json!({
        "source": "mysql",
        "id": row.id,
        "name": row.name,
        "value": row.value,
        "created_at": row.created_at,
    })))
}

pub async fn http(
    State(state): State<AppState>,
    Path(val): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let result = state.outbound.fetch(&val).await?;

    Ok(Json(json!({
        "source": "http",
        "status": result.status,
        "body_len": result.body_len,
    })))
}
