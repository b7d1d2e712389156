//! Health check

use axum::Json;
use serde_json::{json, Value};

/// Always 200; deliberately touches no backend.
pub async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
