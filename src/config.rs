//! Environment configuration.
//!
//! The served project is pinned by environment, matching the deployment model
//! of the extension backend: one instance per tracked project. Variables are
//! read once at startup, with `.env` support for local development.

use crate::error::{AppError, Result};

#[derive(Debug, Clone)]
pub struct Config {
    /// GitLab REST base URL, e.g. `https://gitlab.com/api/v4`
    pub gitlab_api: String,
    /// Private token sent as `PRIVATE-TOKEN` on every request
    pub gitlab_token: String,
    /// Numeric id of the project whose commits are served
    pub project_id: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let gitlab_api = require_var("GITLAB_API")?;
        let gitlab_token = require_var("GITLAB_TOKEN")?;
        let project_id = require_var("GITLAB_PROJECT_ID")?
            .parse()
            .map_err(|e| AppError::Config(format!("invalid GITLAB_PROJECT_ID: {}", e)))?;

        Ok(Self {
            gitlab_api,
            gitlab_token,
            project_id,
        })
    }
}

fn require_var(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(AppError::Config(format!(
            "{} environment variable not set",
            name
        ))),
    }
}
