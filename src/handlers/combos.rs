//! Aggregate multi-kind handlers
//!
//! Best-effort: a failing backend records its message under `<name>_error`
//! and the remaining backends still run, so the response is always 200 with
//! one key per configured backend. Backends run in fixed order: cache,
//! document store, postgres, mysql, outbound HTTP.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Map, Value};
use tracing::warn;

use crate::models::Item;
use crate::storage::StoreError;
use crate::AppState;

/// Merge one backend's outcome into the response map.
fn record(out: &mut Map<String, Value>, name: &str, result: Result<Value, StoreError>) {
    match result {
        Ok(value) => {
            out.insert(name.to_string(), value);
        }
        Err(e) => {
            warn!("{} backend failed: {}", name, e);
            out.insert(format!("{}_error", name), Value::String(e.to_string()));
        }
    }
}

async fn cache_roundtrip(state: &AppState, val: &str) -> Result<Value, StoreError> {
    let key = format!("probe:{}", val);
    state
        .cache
        .set(&key, val, state.config.cache_ttl_secs)
        .await?;
    let value = state.cache.get(&key).await?;
    Ok(json!(value))
}

async fn document_roundtrip(state: &AppState, val: &str) -> Result<Value, StoreError> {
    let item = Item {
        id: val.to_string(),
        name: "probe".to_string(),
        value: val.to_string(),
    };
    state.documents.upsert_item(&item).await?;
    let document = state.documents.find_item(&item.id).await?;
    Ok(json!(document))
}

async fn postgres_roundtrip(state: &AppState, val: &str) -> Result<Value, StoreError> {
    state.postgres.insert_item("probe", val).await?;
    let row = state.postgres.latest_item().await?;
    Ok(Value::String(row.value))
}

async fn mysql_roundtrip(state: &AppState, val: &str) -> Result<Value, StoreError> {
    state.mysql.insert_item("probe", val).await?;
    let row = state.mysql.latest_item().await?;
    Ok(Value::String(row.value))
}

async fn http_status(state: &AppState, val: &str) -> Result<Value, StoreError> {
    let result = state.outbound.fetch(val).await?;
    Ok(json!(result.status))
}

pub async fn redis_mongo(State(state): State<AppState>) -> Json<Value> {
    let mut out = Map::new();
    record(&mut out, "redis", cache_roundtrip(&state, "multi").await);
    record(&mut out, "mongo", document_roundtrip(&state, "multi").await);
    Json(Value::Object(out))
}

pub async fn triple(State(state): State<AppState>) -> Json<Value> {
    let mut out = Map::new();
    record(&mut out, "redis", cache_roundtrip(&state, "triple").await);
    record(&mut out, "mongo", document_roundtrip(&state, "triple").await);
    record(&mut out, "postgres", postgres_roundtrip(&state, "triple").await);
    Json(Value::Object(out))
}

pub async fn all_dbs(State(state): State<AppState>) -> Json<Value> {
    let mut out = Map::new();
    record(&mut out, "redis", cache_roundtrip(&state, "all").await);
    record(&mut out, "mongo", document_roundtrip(&state, "all").await);
    record(&mut out, "postgres", postgres_roundtrip(&state, "all").await);
    record(&mut out, "mysql", mysql_roundtrip(&state, "all").await);
    Json(Value::Object(out))
}

pub async fn kitchen_sink(State(state): State<AppState>) -> Json<Value> {
    let mut out = Map::new();
    record(&mut out, "redis", cache_roundtrip(&state, "sink").await);
    record(&mut out, "mongo", document_roundtrip(&state, "sink").await);
    record(&mut out, "postgres", postgres_roundtrip(&state, "sink").await);
    record(&mut out, "mysql", mysql_roundtrip(&state, "sink").await);
    record(&mut out, "http_status", http_status(&state, "sink").await);
    Json(Value::Object(out))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_keeps_successful_values_under_plain_keys() {
        let mut out = Map::new();
        record(&mut out, "redis", Ok(json!("hello")));

        assert_eq!(out.get("redis"), Some(&json!("hello")));
        assert!(!out.contains_key("redis_error"));
    }

    #[test]
    fn record_tags_failures_with_error_suffix() {
        let mut out = Map::new();
        record(&mut out, "mysql", Err(StoreError::Unavailable("mysql")));

        assert_eq!(out.get("mysql_error"), Some(&json!("mysql not connected")));
        assert!(!out.contains_key("mysql"));
    }

    #[test]
    fn record_keeps_sibling_backends_independent() {
        let mut out = Map::new();
        record(&mut out, "redis", Ok(json!("v")));
        record(&mut out, "mongo", Err(StoreError::Unavailable("redis")));
        record(&mut out, "postgres", Ok(json!("v")));

        assert_eq!(out.len(), 3);
        assert!(out.contains_key("redis"));
        assert!(out.contains_key("mongo_error"));
        assert!(out.contains_key("postgres"));
    }
}
