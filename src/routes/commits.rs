//! Commit statistics endpoints.
//!
//! GET /commits?project=       → total and per-author commit counts
//! GET /commits/chart?window=  → ranked slices plus color config
//!
//! `/commits` is the contract the popup consumes: it mirrors the upstream
//! project's history as `{ total_commits, author_commit_count }`. The chart
//! variant applies the window approximation and palette server-side.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::error::Result;
use crate::gitlab::SharedClient;
use crate::models::{ChartResponse, CommitStats};
use crate::stats::{chart_config, ranked_slices, TimeWindow};

pub fn routes(client: SharedClient) -> Router {
    Router::new()
        .route("/commits", get(get_commits))
        .route("/commits/chart", get(get_chart))
        .with_state(client)
}

#[derive(Debug, Deserialize)]
struct CommitsQuery {
    /// Sent by the popup; the served project is pinned by configuration.
    project: Option<String>,
}

async fn get_commits(
    State(client): State<SharedClient>,
    Query(query): Query<CommitsQuery>,
) -> Result<Json<CommitStats>> {
    if let Some(project) = query.project.as_deref() {
        tracing::debug!(
            project,
            project_id = client.project_id(),
            "popup-reported project"
        );
    }

    let stats = client.commit_stats().await?;
    Ok(Json(stats))
}

#[derive(Debug, Deserialize)]
struct ChartQuery {
    #[serde(default)]
    window: TimeWindow,
}

async fn get_chart(
    State(client): State<SharedClient>,
    Query(query): Query<ChartQuery>,
) -> Result<Json<ChartResponse>> {
    let stats = client.commit_stats().await?;
    let slices = ranked_slices(&stats.author_commit_count, query.window);
    let config = chart_config(&slices);

    Ok(Json(ChartResponse {
        window: query.window,
        total_commits: query.window.adjust(stats.total_commits),
        contributors: slices.len(),
        slices,
        config,
    }))
}
