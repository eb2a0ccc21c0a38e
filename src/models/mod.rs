//! Data transfer objects (DTOs) for API payloads.
//!
//! These structs are serialized to JSON for popup consumption (and
//! deserialized from the GitLab REST API).
//! - `commit`: GitLabCommit, CommitStats
//! - `chart`: ChartSlice, SliceStyle, ChartResponse

pub mod chart;
pub mod commit;

pub use chart::*;
pub use commit::*;
