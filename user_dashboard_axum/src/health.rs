use axum::response::Json;
use serde_json::{Value, json};

/// Liveness probe. Always 200; deliberately does not touch the store.
pub(super) async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
