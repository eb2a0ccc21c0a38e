pub mod client;

pub use client::{count_by_author, GitLabClient, SharedClient};
