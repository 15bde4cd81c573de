use axum::Json;
use serde_json::{Value, json};

/// Liveness probe. Never touches the store.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
