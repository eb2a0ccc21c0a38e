//! API route handlers - maps HTTP endpoints to GitLab queries.
//!
//! Each submodule defines routes for a feature area:
//! - `commits`: Commit summary and chart preparation
//! - `health`: Service liveness and configured project

pub mod commits;
pub mod health;

use axum::Router;

use crate::gitlab::SharedClient;

pub fn create_router(client: SharedClient) -> Router {
    Router::new()
        .merge(health::routes(client.clone()))
        .merge(commits::routes(client))
}
