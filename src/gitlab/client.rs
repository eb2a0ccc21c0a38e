//! GitLab REST API client.
//!
//! Fetches the pinned project's commit list page by page and reduces it to
//! the per-author tally served on `/commits`. GitLab caps `per_page` at 100,
//! so any project of real size spans multiple requests; the `X-Next-Page`
//! response header drives the loop.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{CommitStats, GitLabCommit};

const PER_PAGE: u32 = 100;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct GitLabClient {
    http: reqwest::Client,
    api_base: String,
    token: String,
    project_id: u64,
}

pub type SharedClient = Arc<GitLabClient>;

impl GitLabClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("gitlab-stats/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            api_base: config.gitlab_api.trim_end_matches('/').to_string(),
            token: config.gitlab_token.clone(),
            project_id: config.project_id,
        })
    }

    pub fn project_id(&self) -> u64 {
        self.project_id
    }

    /// Fetch the project's complete commit list.
    ///
    /// Stops on an empty page or an absent `X-Next-Page` header, whichever
    /// comes first.
    pub async fn fetch_all_commits(&self) -> Result<Vec<GitLabCommit>> {
        let mut all_commits = Vec::new();
        let mut page: u32 = 1;

        loop {
            let url = format!(
                "{}/projects/{}/repository/commits?per_page={}&page={}&all=true",
                self.api_base, self.project_id, PER_PAGE, page
            );

            let response = self
                .http
                .get(&url)
                .header("PRIVATE-TOKEN", &self.token)
                .send()
                .await?;

            if !response.status().is_success() {
                let status = response.status().as_u16();
                let body = response.text().await.unwrap_or_default();
                return Err(AppError::Upstream {
                    status,
                    body: body.chars().take(200).collect(),
                });
            }

            let next_page = next_page_number(&response);
            let commits: Vec<GitLabCommit> = response.json().await?;

            if commits.is_empty() {
                break;
            }

            tracing::debug!(page, count = commits.len(), "fetched commit page");
            all_commits.extend(commits);

            match next_page {
                Some(next) => page = next,
                None => break,
            }
        }

        Ok(all_commits)
    }

    /// Fetch and aggregate: the `/commits` response body.
    pub async fn commit_stats(&self) -> Result<CommitStats> {
        let commits = self.fetch_all_commits().await?;

        Ok(CommitStats {
            total_commits: commits.len() as u64,
            author_commit_count: count_by_author(&commits),
        })
    }
}

fn next_page_number(response: &reqwest::Response) -> Option<u32> {
    response
        .headers()
        .get("x-next-page")?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

/// Tally commits per author display name.
pub fn count_by_author(commits: &[GitLabCommit]) -> HashMap<String, u64> {
    let mut counts = HashMap::new();

    for commit in commits {
        *counts.entry(commit.author_name.clone()).or_insert(0) += 1;
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn commit(author: &str) -> GitLabCommit {
        GitLabCommit {
            id: "a".repeat(40),
            short_id: "a".repeat(8),
            title: "commit".to_string(),
            author_name: author.to_string(),
            created_at: "2024-01-01T00:00:00Z".parse().unwrap(),
            web_url: "https://gitlab.com/group/project/-/commit/aaaa".to_string(),
        }
    }

    #[test]
    fn test_count_by_author() {
        let commits = vec![commit("ana"), commit("bob"), commit("ana")];
        let counts = count_by_author(&commits);

        assert_eq!(counts.len(), 2);
        assert_eq!(counts["ana"], 2);
        assert_eq!(counts["bob"], 1);
    }

    #[test]
    fn test_count_by_author_empty() {
        assert!(count_by_author(&[]).is_empty());
    }
}
