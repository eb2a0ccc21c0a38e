//! Service liveness endpoint.
//!
//! GET /health
//!
//! Returns the service name, version and the project id it is pinned to.

use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::gitlab::SharedClient;

pub fn routes(client: SharedClient) -> Router {
    Router::new()
        .route("/health", get(health))
        .with_state(client)
}

async fn health(State(client): State<SharedClient>) -> Json<Value> {
    Json(json!({
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "project_id": client.project_id(),
    }))
}
