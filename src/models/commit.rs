use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One commit as returned by `GET /projects/:id/repository/commits`.
///
/// Only the fields the service reads are listed; serde skips the rest of the
/// GitLab payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitLabCommit {
    pub id: String,
    pub short_id: String,
    pub title: String,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
    pub web_url: String,
}

/// Aggregated commit statistics, the wire contract consumed by the popup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitStats {
    pub total_commits: u64,
    pub author_commit_count: HashMap<String, u64>,
}
